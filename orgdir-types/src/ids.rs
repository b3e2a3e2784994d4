//! Typed entity identifiers.
//!
//! Identifiers are opaque positive integers assigned by the directory and never
//! reused. Each entity kind gets its own newtype so an activity id cannot be
//! passed where a building id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            #[inline]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of an activity category.
    ActivityId
);
entity_id!(
    /// Identifier of a building.
    BuildingId
);
entity_id!(
    /// Identifier of an organization.
    OrganizationId
);
entity_id!(
    /// Identifier of a phone number row.
    PhoneId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&ActivityId::new(42)).unwrap();
        assert_eq!(json, "42");

        let back: BuildingId = serde_json::from_str("7").unwrap();
        assert_eq!(back, BuildingId(7));
    }

    #[test]
    fn test_ids_order_by_value() {
        assert!(OrganizationId(2) < OrganizationId(10));
        assert_eq!(PhoneId::from(3).get(), 3);
        assert_eq!(OrganizationId(5).to_string(), "5");
    }
}
