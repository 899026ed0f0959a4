//! Geographic coordinate type and spherical geodesy.
//!
//! `GeoPoint` stores **longitude first**, matching the order in which the map
//! source and the query surface pass coordinates around.  Double precision is
//! used throughout: distances feed A* cost comparisons and the 3-decimal
//! maneuver distances, so f32 rounding would leak into observable output.

/// Sphere radius used for great-circle distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// A WGS-84 coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in miles on a sphere of radius
    /// [`EARTH_RADIUS_MILES`].
    #[inline]
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        self.distance_on_sphere(other, EARTH_RADIUS_MILES)
    }

    /// Haversine great-circle distance on a sphere of the given radius.  The
    /// result is in the radius' unit.
    pub fn distance_on_sphere(self, other: GeoPoint, radius: f64) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi * 0.5).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        radius * c
    }

    /// Initial bearing of the great-circle path from `self` to `other`, in
    /// degrees within `(-180, 180]`.  0° is north, positive is clockwise.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let y = d_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
        let deg = y.atan2(x).to_degrees();
        if deg <= -180.0 { deg + 360.0 } else { deg }
    }

    /// Position on the unit sphere as an `[x, y, z]` vector.
    ///
    /// Chord length between two unit vectors grows monotonically with the
    /// great-circle angle, so Euclidean nearest neighbour over these vectors
    /// is great-circle nearest neighbour.
    pub fn unit_vector(self) -> [f64; 3] {
        let phi = self.lat.to_radians();
        let lambda = self.lon.to_radians();
        [phi.cos() * lambda.cos(), phi.cos() * lambda.sin(), phi.sin()]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// Signed change of heading from `incoming` to `outgoing` bearing, normalised
/// to `(-180, 180]`.  Positive means the path turns clockwise (right).
pub fn normalize_turn(incoming_deg: f64, outgoing_deg: f64) -> f64 {
    let delta = (outgoing_deg - incoming_deg + 180.0).rem_euclid(360.0) - 180.0;
    if delta <= -180.0 { delta + 360.0 } else { delta }
}
