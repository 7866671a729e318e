//! Type-safe identifiers for businesses, staff members, and bookings.
//!
//! Each identifier is a newtype around a [`uuid::Uuid`] so that, for
//! example, a booking ID can never be passed where a staff ID is expected.
//! All three serialize transparently as UUID strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Creates a new random identifier (UUID v4).
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Wraps an existing [`uuid::Uuid`].
            #[must_use]
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner [`uuid::Uuid`].
            #[must_use]
            pub const fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a tenant business.
    BusinessId
}

uuid_id! {
    /// Unique identifier for a staff member (the owner included).
    StaffId
}

uuid_id! {
    /// Unique identifier for a booking record.
    BookingId
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        assert_ne!(StaffId::new(), StaffId::new());
    }

    #[test]
    fn serde_round_trip_is_transparent() {
        let id = BookingId::new();
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        // A bare UUID string, not an object.
        assert!(json.starts_with('"'));
        let back: BookingId = serde_json::from_str(&json).ok().map_or_else(
            || panic!("deserialization failed"),
            |v| v,
        );
        assert_eq!(id, back);
    }

    #[test]
    fn ids_key_hashmaps() {
        use std::collections::HashMap;
        let id = StaffId::new();
        let mut map = HashMap::new();
        map.insert(id, 1u32);
        assert_eq!(map.get(&id), Some(&1));
    }
}
