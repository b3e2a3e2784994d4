//! Geographic inputs for directory searches.
//!
//! Coordinates are IEEE-754 degrees stored as latitude/longitude pairs, which is
//! the shape callers send. `to_geo` / `to_rect` convert into `geo` primitives
//! (x = longitude, y = latitude).

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use orgdir_types::geo::GeoPoint;
///
/// let point = GeoPoint::new(55.7558, 37.6173);
/// assert_eq!(point.latitude, 55.7558);
/// assert_eq!(point.to_geo().y(), 55.7558);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert into a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn to_geo(&self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        point.to_geo()
    }
}

/// Axis-aligned rectangle given by its north-west and south-east corners.
///
/// The rectangle is assumed not to cross the ±180° meridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRectangle {
    pub north_west: GeoPoint,
    pub south_east: GeoPoint,
}

impl GeoRectangle {
    pub fn new(north_west: GeoPoint, south_east: GeoPoint) -> Self {
        Self {
            north_west,
            south_east,
        }
    }

    /// True when the corners describe a non-inverted rectangle.
    pub fn is_well_formed(&self) -> bool {
        self.north_west.latitude >= self.south_east.latitude
            && self.north_west.longitude <= self.south_east.longitude
    }

    /// Convert into a `geo::Rect`. `geo` normalizes the corners, so an
    /// inverted rectangle comes back as its mirror image.
    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::coord! { x: self.north_west.longitude, y: self.south_east.latitude },
            geo::coord! { x: self.south_east.longitude, y: self.north_west.latitude },
        )
    }
}

/// Parameters of a geo search.
///
/// A radius search needs `center` and `radius_km`; a rectangle search needs
/// `rectangle`. When both are present the radius wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoSearchParams {
    #[serde(default)]
    pub center: Option<GeoPoint>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub rectangle: Option<GeoRectangle>,
}

impl GeoSearchParams {
    pub fn radius(center: GeoPoint, radius_km: f64) -> Self {
        Self {
            center: Some(center),
            radius_km: Some(radius_km),
            rectangle: None,
        }
    }

    pub fn rectangle(rectangle: GeoRectangle) -> Self {
        Self {
            center: None,
            radius_km: None,
            rectangle: Some(rectangle),
        }
    }
}
