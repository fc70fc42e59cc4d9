use thiserror::Error;

/// Common errors across the aerospace model library
#[derive(Error, Debug)]
pub enum AeroError {
    #[error("Geodetic transform error: {0}")]
    Geodetic(#[from] GeodeticError),

    #[error("Atmosphere model error: {0}")]
    Atmosphere(#[from] AtmosphereError),
}

#[derive(Error, Debug)]
pub enum GeodeticError {
    #[error("Invalid latitude: {0} rad (must be -pi/2 to pi/2)")]
    InvalidLatitude(f64),

    #[error("Non-finite input coordinate")]
    NonFiniteInput,

    #[error("Degenerate ECEF input: closed-form inverse produced a non-finite result")]
    DegenerateInput,
}

#[derive(Error, Debug)]
pub enum AtmosphereError {
    #[error("Altitude {0} m is above the modeled atmosphere (max 84852 m)")]
    AltitudeOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, AeroError>;
