pub mod atmosphere;
pub mod error;
pub mod geodetic;

pub use atmosphere::{evaluate, try_evaluate, AtmosphereSample};
pub use error::{AeroError, AtmosphereError, GeodeticError, Result};
pub use geodetic::{
    ecef_to_geodetic, ecef_to_geodetic_checked, geodetic_to_ecef,
    EcefCoord, Ellipsoid, GeodeticCoord, WGS84,
};
