use serde::{Deserialize, Serialize};

use super::gas::MEAN_MOLECULAR_WEIGHT;
use super::layers::resolve_layer;
use crate::error::{AtmosphereError, Result};

/// Sea-level standard acceleration of gravity, m/s^2
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Universal gas constant, J/(kmol K)
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8_314.32;

/// Ratio of specific heats for air
pub const HEAT_CAPACITY_RATIO: f64 = 1.4;

/// Sutherland viscosity coefficient, kg/(s m K^0.5)
pub const SUTHERLAND_BETA: f64 = 1.458e-6;

/// Sutherland temperature, K
pub const SUTHERLAND_TEMPERATURE: f64 = 110.4;

/// Layers with a gradient magnitude below this are treated as isothermal
const ISOTHERMAL_LAPSE_EPSILON: f64 = 1e-6;

/// Atmospheric properties at one altitude
///
/// If `valid` is false the altitude was above the modeled atmosphere and
/// every numeric field is zero; callers must branch on the flag before
/// consuming any of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereSample {
    /// Temperature, K
    pub temperature: f64,
    /// Static pressure, Pa
    pub pressure: f64,
    /// Density, kg/m^3
    pub density: f64,
    /// Speed of sound, m/s
    pub speed_of_sound: f64,
    /// Dynamic viscosity, Pa s
    pub dynamic_viscosity: f64,
    /// Kinematic viscosity, m^2/s
    pub kinematic_viscosity: f64,
    pub valid: bool,
}

impl AtmosphereSample {
    /// The out-of-range sample: all fields zero, `valid` false
    pub const INVALID: Self = Self {
        temperature: 0.0,
        pressure: 0.0,
        density: 0.0,
        speed_of_sound: 0.0,
        dynamic_viscosity: 0.0,
        kinematic_viscosity: 0.0,
        valid: false,
    };
}

/// Evaluate the 1976 US Standard Atmosphere at a geometric altitude
///
/// Valid from below sea level up to 84 852 m inclusive; above that the
/// returned sample has `valid` set to false. Every call recomputes the full
/// state from the layer table, so concurrent use needs no coordination.
pub fn evaluate(altitude_m: f64) -> AtmosphereSample {
    let Some(layer) = resolve_layer(altitude_m) else {
        return AtmosphereSample::INVALID;
    };

    let delta_h = altitude_m - layer.base_altitude;
    let temperature = layer.base_temperature + layer.lapse_rate * delta_h;

    // The gradient-zero branch avoids a division by zero in the power-law
    // exponent; the two forms are not interchangeable.
    let gm_over_r = STANDARD_GRAVITY * MEAN_MOLECULAR_WEIGHT / UNIVERSAL_GAS_CONSTANT;
    let pressure = if layer.lapse_rate.abs() < ISOTHERMAL_LAPSE_EPSILON {
        layer.base_pressure * (-gm_over_r * delta_h / layer.base_temperature).exp()
    } else {
        layer.base_pressure
            * (layer.base_temperature / temperature).powf(gm_over_r / layer.lapse_rate)
    };

    // Ideal gas law
    let density = pressure * MEAN_MOLECULAR_WEIGHT / (UNIVERSAL_GAS_CONSTANT * temperature);

    let speed_of_sound =
        (HEAT_CAPACITY_RATIO * UNIVERSAL_GAS_CONSTANT * temperature / MEAN_MOLECULAR_WEIGHT).sqrt();

    // Sutherland's formula
    let dynamic_viscosity =
        SUTHERLAND_BETA * temperature.powf(1.5) / (temperature + SUTHERLAND_TEMPERATURE);
    let kinematic_viscosity = dynamic_viscosity / density;

    AtmosphereSample {
        temperature,
        pressure,
        density,
        speed_of_sound,
        dynamic_viscosity,
        kinematic_viscosity,
        valid: true,
    }
}

/// Result-typed wrapper around [`evaluate`] for callers using `?`
pub fn try_evaluate(altitude_m: f64) -> Result<AtmosphereSample> {
    let sample = evaluate(altitude_m);
    if sample.valid {
        Ok(sample)
    } else {
        Err(AtmosphereError::AltitudeOutOfRange(altitude_m).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AeroError;

    #[test]
    fn test_sea_level_state() {
        let sample = evaluate(0.0);
        assert!(sample.valid);
        assert_eq!(sample.temperature, 288.15);
        assert_eq!(sample.pressure, 101325.0);
        assert!((sample.density - 1.225).abs() < 1e-3);
        assert!((sample.speed_of_sound - 340.29).abs() < 0.05);
        assert!((sample.dynamic_viscosity - 1.789e-5).abs() < 1e-7);
        assert!((sample.kinematic_viscosity - 1.46e-5).abs() < 1e-7);
    }

    #[test]
    fn test_tropopause_boundary() {
        // 11 000 m resolves into the isothermal layer above the boundary
        let sample = evaluate(11_000.0);
        assert!(sample.valid);
        assert_eq!(sample.temperature, 216.65);
        assert_eq!(sample.pressure, 22_632.1);
    }

    #[test]
    fn test_mid_troposphere() {
        // Cruise altitude reference values
        let sample = evaluate(5000.0);
        assert!(sample.valid);
        assert!((sample.temperature - 255.65).abs() < 1e-9);
        assert!((sample.pressure - 54_019.0).abs() < 30.0);
        assert!((sample.density - 0.7364).abs() < 1e-3);
    }

    #[test]
    fn test_model_top_inclusive() {
        let sample = evaluate(84_852.0);
        assert!(sample.valid);
        assert!(sample.temperature > 0.0);
        assert!(sample.pressure > 0.0);
    }

    #[test]
    fn test_out_of_range_altitude() {
        let sample = evaluate(90_000.0);
        assert!(!sample.valid);
        assert_eq!(sample.temperature, 0.0);
        assert_eq!(sample.pressure, 0.0);
        assert_eq!(sample.density, 0.0);
        assert_eq!(sample.speed_of_sound, 0.0);
        assert_eq!(sample.dynamic_viscosity, 0.0);
        assert_eq!(sample.kinematic_viscosity, 0.0);
    }

    #[test]
    fn test_try_evaluate() {
        assert!(try_evaluate(10_000.0).is_ok());

        let result = try_evaluate(90_000.0);
        assert!(matches!(
            result.unwrap_err(),
            AeroError::Atmosphere(AtmosphereError::AltitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_tropospheric_monotonicity() {
        // Pressure and density strictly decrease with altitude up to the
        // tropopause
        let mut prev = evaluate(0.0);
        let mut alt = 500.0;
        while alt <= 11_000.0 {
            let sample = evaluate(alt);
            assert!(sample.pressure < prev.pressure);
            assert!(sample.density < prev.density);
            prev = sample;
            alt += 500.0;
        }
    }

    #[test]
    fn test_isothermal_layer() {
        // Between 11 and 20 km temperature is pinned at 216.65 K while
        // pressure keeps decaying exponentially
        let mut prev_pressure = f64::INFINITY;
        for alt in [11_000.0, 13_000.0, 15_000.0, 17_000.0, 19_000.0] {
            let sample = evaluate(alt);
            assert_eq!(sample.temperature, 216.65);
            assert!(sample.pressure < prev_pressure);
            prev_pressure = sample.pressure;
        }
    }

    #[test]
    fn test_stratopause_isothermal_layer() {
        for alt in [47_000.0, 49_000.0, 50_999.0] {
            let sample = evaluate(alt);
            assert_eq!(sample.temperature, 270.65);
        }
    }

    #[test]
    fn test_upper_stratosphere_warming() {
        // Positive gradient layers: temperature rises with altitude
        let low = evaluate(33_000.0);
        let high = evaluate(46_000.0);
        assert!(high.temperature > low.temperature);
        assert!(high.pressure < low.pressure);
    }

    #[test]
    fn test_below_sea_level() {
        // The troposphere branch extrapolates below the ellipsoid
        let sample = evaluate(-400.0);
        assert!(sample.valid);
        assert!(sample.temperature > 288.15);
        assert!(sample.pressure > 101_325.0);
    }

    #[test]
    fn test_sound_speed_tracks_temperature() {
        let sea = evaluate(0.0);
        let tropopause = evaluate(11_000.0);
        assert!(tropopause.speed_of_sound < sea.speed_of_sound);
        // a = sqrt(gamma R T / m) at 216.65 K
        assert!((tropopause.speed_of_sound - 295.07).abs() < 0.05);
    }
}
