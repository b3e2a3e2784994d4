//! # orgdir-types
//!
//! Core data types for the orgdir organization directory.
//!
//! - **Identifiers**: `ActivityId`, `BuildingId`, `OrganizationId`, `PhoneId`
//! - **Entities**: `Activity`, `Building`, `Phone`, `Organization`, `ActivityNode`
//! - **Creation inputs**: `NewActivity`, `NewBuilding`, `NewOrganization`
//! - **Geo inputs**: `GeoPoint`, `GeoRectangle`, `GeoSearchParams`
//!
//! All types are serializable with Serde. Geographic inputs convert into the
//! `geo` crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use orgdir_types::geo::{GeoPoint, GeoRectangle};
//!
//! let red_square = GeoPoint::new(55.7539, 37.6208);
//! let moscow = GeoRectangle::new(GeoPoint::new(56.0, 37.0), GeoPoint::new(55.0, 38.0));
//! assert_eq!(red_square.to_geo().x(), 37.6208);
//! assert_eq!(moscow.to_rect().min().y, 55.0);
//! ```

pub mod entity;
pub mod geo;
pub mod ids;
pub mod stats;

pub use entity::{
    Activity, ActivityNode, Building, NewActivity, NewBuilding, NewOrganization, Organization,
    Phone,
};
pub use ids::{ActivityId, BuildingId, OrganizationId, PhoneId};
