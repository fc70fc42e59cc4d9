/// Reference ellipsoid parameters
///
/// All derived quantities are computed once from the defining pair `(a, f)`
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial (semi-major) radius, meters
    pub a: f64,
    /// Flattening
    pub f: f64,
    /// Polar (semi-minor) radius, meters
    pub b: f64,
    /// Squared equatorial radius, meters^2
    pub a2: f64,
    /// Squared polar radius, meters^2
    pub b2: f64,
    /// First eccentricity squared (dimensionless)
    pub e2: f64,
    /// Second eccentricity squared (dimensionless)
    pub ep2: f64,
}

impl Ellipsoid {
    /// Derive the full parameter set from a semi-major axis and flattening
    pub const fn from_radius_flattening(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let a2 = a * a;
        let b2 = b * b;
        Self {
            a,
            f,
            b,
            a2,
            b2,
            e2: (a2 - b2) / a2,
            ep2: (a2 - b2) / b2,
        }
    }

    /// The WGS84 reference ellipsoid
    pub const fn wgs84() -> Self {
        Self::from_radius_flattening(6_378_137.0, 1.0 / 298.257_223_563)
    }
}

/// Shared immutable WGS84 instance, const-evaluated at compile time
pub const WGS84: Ellipsoid = Ellipsoid::wgs84();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_defining_parameters() {
        assert_eq!(WGS84.a, 6378137.0);
        assert!((WGS84.f - 1.0 / 298.257223563).abs() < 1e-15);
    }

    #[test]
    fn test_wgs84_derived_parameters() {
        // Published WGS84 values
        assert!((WGS84.b - 6356752.314245).abs() < 1e-3);
        assert!((WGS84.e2 - 0.00669437999014).abs() < 1e-11);
        assert!((WGS84.ep2 - 0.00673949674228).abs() < 1e-11);
    }

    #[test]
    fn test_derived_identities() {
        assert_eq!(WGS84.a2, WGS84.a * WGS84.a);
        assert_eq!(WGS84.b2, WGS84.b * WGS84.b);
        assert!((WGS84.e2 - (WGS84.a2 - WGS84.b2) / WGS84.a2).abs() < 1e-18);
        assert!((WGS84.ep2 - (WGS84.a2 - WGS84.b2) / WGS84.b2).abs() < 1e-18);
    }
}
