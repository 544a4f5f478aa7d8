//! Geographic value types and distance math.

use serde_json::json;

use crate::error::AppError;

/// Mean Earth radius in meters (IUGG).
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Meters per degree of latitude, used for bounding-box pre-filters.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// A validated geographic coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting out-of-range or non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when latitude is outside [-90, 90]
    /// or longitude is outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AppError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::bad_request(
                "Latitude must be between -90 and 90",
                json!({ "latitude": latitude }),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::bad_request(
                "Longitude must be between -180 and 180",
                json!({ "longitude": longitude }),
            ));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Great-circle distance to another point in meters (haversine).
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_METERS * c
    }

    /// Bounding box of `radius_meters` around this point as
    /// `(min_lat, max_lat, min_lon, max_lon)`.
    ///
    /// The longitude range wraps across the antimeridian: `min_lon > max_lon`
    /// means the box covers `[min_lon, 180] ∪ [-180, max_lon]`. The span
    /// widens toward the poles; above ~89° it degenerates to the full
    /// longitude range.
    pub fn bounding_box(&self, radius_meters: f64) -> (f64, f64, f64, f64) {
        let dlat = radius_meters / METERS_PER_DEGREE_LAT;

        let cos_lat = self.latitude.to_radians().cos().max(1e-6);
        let dlon = radius_meters / (METERS_PER_DEGREE_LAT * cos_lat);

        let (min_lon, max_lon) = if dlon >= 180.0 {
            (-180.0, 180.0)
        } else {
            (
                wrap_longitude(self.longitude - dlon),
                wrap_longitude(self.longitude + dlon),
            )
        };

        (
            (self.latitude - dlat).max(-90.0),
            (self.latitude + dlat).min(90.0),
            min_lon,
            max_lon,
        )
    }
}

/// Normalizes a longitude into [-180, 180] after adding or subtracting a span
/// of less than 360 degrees.
fn wrap_longitude(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else if lon < -180.0 {
        lon + 360.0
    } else {
        lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        let p = GeoPoint::new(40.785091, -73.968285).unwrap();
        assert_eq!(p.latitude, 40.785091);
        assert_eq!(p.longitude, -73.968285);
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(GeoPoint::new(90.1, 0.0).is_err());
        assert!(GeoPoint::new(-90.1, 0.0).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(GeoPoint::new(0.0, 180.1).is_err());
        assert!(GeoPoint::new(0.0, -180.1).is_err());
    }

    #[test]
    fn test_boundary_values_are_valid() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(48.858370, 2.294481).unwrap();
        assert!(p.distance_meters(&p) < 1e-6);
    }

    #[test]
    fn test_distance_paris_to_london() {
        // Eiffel Tower to Big Ben, roughly 340 km.
        let paris = GeoPoint::new(48.858370, 2.294481).unwrap();
        let london = GeoPoint::new(51.500729, -0.124625).unwrap();

        let d = paris.distance_meters(&london);
        assert!(d > 330_000.0 && d < 350_000.0, "got {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(35.658581, 139.745433).unwrap();
        let b = GeoPoint::new(-33.856784, 151.215297).unwrap();
        let ab = a.distance_meters(&b);
        let ba = b.distance_meters(&a);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_bounding_box_contains_radius() {
        let p = GeoPoint::new(50.054383, 19.936180).unwrap();
        let (min_lat, max_lat, min_lon, max_lon) = p.bounding_box(1_000.0);

        assert!(min_lat < p.latitude && p.latitude < max_lat);
        assert!(min_lon < p.longitude && p.longitude < max_lon);

        // A point 900m north must fall inside the box.
        let north = GeoPoint::new(p.latitude + 900.0 / METERS_PER_DEGREE_LAT, p.longitude).unwrap();
        assert!(north.latitude < max_lat);
    }

    #[test]
    fn test_bounding_box_clamped_near_pole() {
        let p = GeoPoint::new(89.9, 0.0).unwrap();
        let (_, max_lat, min_lon, max_lon) = p.bounding_box(50_000.0);

        assert!(max_lat <= 90.0);
        assert!(min_lon >= -180.0);
        assert!(max_lon <= 180.0);
    }

    #[test]
    fn test_bounding_box_wraps_across_antimeridian() {
        let p = GeoPoint::new(0.0, 179.9995).unwrap();
        let (_, _, min_lon, max_lon) = p.bounding_box(1_000.0);

        // min > max signals a range wrapping through the date line.
        assert!(min_lon > max_lon);
        assert!(min_lon < 180.0);
        assert!(max_lon > -180.0);

        // A neighbor just across the line sits inside the wrapped range.
        let neighbor_lon = -179.9995;
        assert!(neighbor_lon >= -180.0 && neighbor_lon <= max_lon);
    }

    #[test]
    fn test_distance_across_antimeridian_is_short() {
        let west = GeoPoint::new(0.0, 179.9995).unwrap();
        let east = GeoPoint::new(0.0, -179.9995).unwrap();

        let d = west.distance_meters(&east);
        assert!(d < 200.0, "got {d}");
    }
}
