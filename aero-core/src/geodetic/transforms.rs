use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::ellipsoid::WGS84;
use crate::error::{GeodeticError, Result};

/// ECEF coordinates (Earth-Centered, Earth-Fixed), meters
pub type EcefCoord = Vector3<f64>;

/// Geodetic coordinates on the WGS84 ellipsoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticCoord {
    /// Latitude, radians, in [-pi/2, pi/2]
    pub lat: f64,
    /// Longitude, radians, in (-pi, pi]
    pub lon: f64,
    /// Altitude above the ellipsoid, meters
    pub alt: f64,
}

impl GeodeticCoord {
    pub fn new(lat_rad: f64, lon_rad: f64, alt_m: f64) -> Self {
        Self { lat: lat_rad, lon: lon_rad, alt: alt_m }
    }

    /// Build from degree-valued angles
    pub fn from_degrees(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self {
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
            alt: alt_m,
        }
    }

    pub fn lat_degrees(&self) -> f64 {
        self.lat.to_degrees()
    }

    pub fn lon_degrees(&self) -> f64 {
        self.lon.to_degrees()
    }
}

/// Convert geodetic coordinates to ECEF
///
/// Exact forward transform, no iteration. Well-defined everywhere on the
/// ellipsoid including the poles, where `cos(lat) = 0` collapses x and y
/// to zero.
pub fn geodetic_to_ecef(geo: &GeodeticCoord) -> Result<EcefCoord> {
    if !geo.lat.is_finite() || !geo.lon.is_finite() || !geo.alt.is_finite() {
        return Err(GeodeticError::NonFiniteInput.into());
    }
    if geo.lat < -std::f64::consts::FRAC_PI_2 || geo.lat > std::f64::consts::FRAC_PI_2 {
        return Err(GeodeticError::InvalidLatitude(geo.lat).into());
    }

    let sin_lat = geo.lat.sin();
    let cos_lat = geo.lat.cos();
    let sin_lon = geo.lon.sin();
    let cos_lon = geo.lon.cos();

    // Prime-vertical radius of curvature
    let n = WGS84.a / (1.0 - WGS84.e2 * sin_lat * sin_lat).sqrt();

    let x = (n + geo.alt) * cos_lat * cos_lon;
    let y = (n + geo.alt) * cos_lat * sin_lon;
    let z = (n * (WGS84.b2 / WGS84.a2) + geo.alt) * sin_lat;

    Ok(Vector3::new(x, y, z))
}

/// Convert ECEF coordinates to geodetic using Zhu's closed-form algorithm
///
/// Direct algebraic solution (Zhu 1994), no iterative refinement. The
/// arithmetic is deliberately unguarded: degenerate inputs such as the
/// origin or points on the polar axis divide by zero and propagate NaN or
/// infinity into the result. Callers that cannot tolerate that should use
/// [`ecef_to_geodetic_checked`].
pub fn ecef_to_geodetic(ecef: &EcefCoord) -> GeodeticCoord {
    let x = ecef.x;
    let y = ecef.y;
    let z = ecef.z;

    let r = (x * x + y * y).sqrt();

    // Linear eccentricity squared, meters^2. Not the same quantity as the
    // dimensionless WGS84.e2; both appear below.
    let e2 = WGS84.a2 - WGS84.b2;

    let f = 54.0 * WGS84.b2 * z * z;
    let g = r * r + (1.0 - WGS84.e2) * z * z - WGS84.e2 * e2;
    let c = WGS84.e2 * WGS84.e2 * f * r * r / (g * g * g);
    let s = (1.0 + c + (c * c + 2.0 * c).sqrt()).cbrt();
    let p0 = s + 1.0 / s + 1.0;
    let p = f / (3.0 * p0 * p0 * g * g);
    let q = (1.0 + 2.0 * WGS84.e2 * WGS84.e2 * p).sqrt();
    let r0 = -(p * WGS84.e2 * r) / (1.0 + q)
        + ((WGS84.a2 / 2.0) * (1.0 + 1.0 / q)
            - p * (1.0 - WGS84.e2) * z * z / (q * (1.0 + q))
            - p * r * r / 2.0)
            .sqrt();
    let uv = r - WGS84.e2 * r0;
    let u = (uv * uv + z * z).sqrt();
    let v = (uv * uv + (1.0 - WGS84.e2) * z * z).sqrt();
    let z0 = WGS84.b2 * z / (WGS84.a * v);

    let alt = u * (1.0 - WGS84.b2 / (WGS84.a * v));
    let lat = ((z + WGS84.ep2 * z0) / r).atan();
    let lon = y.atan2(x);

    GeodeticCoord { lat, lon, alt }
}

/// Checked variant of [`ecef_to_geodetic`]
///
/// Maps a non-finite result (degenerate input near the origin or the polar
/// axis) to an error instead of letting NaN propagate.
pub fn ecef_to_geodetic_checked(ecef: &EcefCoord) -> Result<GeodeticCoord> {
    let geo = ecef_to_geodetic(ecef);
    if geo.lat.is_finite() && geo.lon.is_finite() && geo.alt.is_finite() {
        Ok(geo)
    } else {
        Err(GeodeticError::DegenerateInput.into())
    }
}
