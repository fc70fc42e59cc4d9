//! WGS84 geodetic / ECEF coordinate transformations

mod ellipsoid;
mod transforms;

pub use ellipsoid::{Ellipsoid, WGS84};
pub use transforms::{
    ecef_to_geodetic, ecef_to_geodetic_checked, geodetic_to_ecef,
    EcefCoord, GeodeticCoord,
};
