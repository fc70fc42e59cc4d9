use aero_core::{
    ecef_to_geodetic_checked, geodetic_to_ecef, try_evaluate, EcefCoord, GeodeticCoord,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "aero",
    about = "WGS84 geodetic conversions and the 1976 US Standard Atmosphere"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert geodetic latitude/longitude/altitude to ECEF x/y/z
    ToEcef {
        /// Latitude, degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude, degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Altitude above the ellipsoid, meters
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        alt: f64,
    },
    /// Convert ECEF x/y/z to geodetic latitude/longitude/altitude
    ToGeodetic {
        /// ECEF x, meters
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// ECEF y, meters
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// ECEF z, meters
        #[arg(long, allow_hyphen_values = true)]
        z: f64,
    },
    /// Evaluate standard-atmosphere properties at an altitude
    Atmosphere {
        /// Geometric altitude, meters
        #[arg(long, allow_hyphen_values = true)]
        alt: f64,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::ToEcef { lat, lon, alt } => {
            let geo = GeodeticCoord::from_degrees(lat, lon, alt);
            let ecef = geodetic_to_ecef(&geo)?;
            println!("x: {:.3} m", ecef.x);
            println!("y: {:.3} m", ecef.y);
            println!("z: {:.3} m", ecef.z);
        }
        Command::ToGeodetic { x, y, z } => {
            let geo = ecef_to_geodetic_checked(&EcefCoord::new(x, y, z))?;
            println!("lat: {:.8} deg", geo.lat_degrees());
            println!("lon: {:.8} deg", geo.lon_degrees());
            println!("alt: {:.4} m", geo.alt);
        }
        Command::Atmosphere { alt } => {
            let sample = try_evaluate(alt)?;
            println!("temperature:         {:.4} K", sample.temperature);
            println!("pressure:            {:.4} Pa", sample.pressure);
            println!("density:             {:.6} kg/m^3", sample.density);
            println!("speed of sound:      {:.4} m/s", sample.speed_of_sound);
            println!("dynamic viscosity:   {:.6e} Pa s", sample.dynamic_viscosity);
            println!("kinematic viscosity: {:.6e} m^2/s", sample.kinematic_viscosity);
        }
    }
    Ok(())
}
