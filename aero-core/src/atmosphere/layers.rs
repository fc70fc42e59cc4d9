/// Number of tabulated layer boundaries
pub const LAYER_COUNT: usize = 7;

/// Standard sea-level temperature, K
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// Layer base altitudes, meters, strictly increasing. The last entry is the
/// top of the modeled atmosphere.
pub const BASE_ALTITUDES: [f64; LAYER_COUNT] = [
    11_000.0, 20_000.0, 32_000.0, 47_000.0, 51_000.0, 71_000.0, 84_852.0,
];

/// Pressure at the base of each layer, Pa. Entry `i` pairs with the layer
/// whose base is `BASE_ALTITUDES[i - 1]`; entry 0 is sea-level pressure.
pub const BASE_PRESSURES: [f64; LAYER_COUNT] = [
    101_325.0, 22_632.1, 5_474.89, 868.019, 110.906, 66.9389, 3.95642,
];

/// Temperature at the base of each layer, K, aligned like `BASE_PRESSURES`.
pub const BASE_TEMPERATURES: [f64; LAYER_COUNT] = [
    288.15, 216.65, 216.65, 228.65, 270.65, 270.65, 214.65,
];

/// Temperature gradient within each layer, K/m, aligned like `BASE_PRESSURES`.
pub const LAPSE_RATES: [f64; LAYER_COUNT] = [
    -0.0065, 0.0, 0.001, 0.0028, 0.0, -0.0028, -0.002,
];

/// Base parameters of the layer containing one altitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerBase {
    /// Altitude of the layer base, meters
    pub base_altitude: f64,
    /// Pressure at the layer base, Pa
    pub base_pressure: f64,
    /// Temperature at the layer base, K
    pub base_temperature: f64,
    /// Temperature gradient across the layer, K/m
    pub lapse_rate: f64,
}

/// Resolve the layer containing `altitude_m`
///
/// Returns `None` above the top of the modeled atmosphere (84 852 m); the
/// boundary itself is still in range. The scan is a literal linear walk
/// over the table with a strict `<` comparison, so an altitude exactly on
/// a boundary resolves into the layer above it.
pub fn resolve_layer(altitude_m: f64) -> Option<LayerBase> {
    if altitude_m > BASE_ALTITUDES[LAYER_COUNT - 1] {
        return None;
    }

    if altitude_m < BASE_ALTITUDES[0] {
        // Troposphere. The gradient is re-derived from the boundary
        // temperatures rather than read from the table; numerically it
        // equals LAPSE_RATES[0].
        return Some(LayerBase {
            base_altitude: 0.0,
            base_pressure: BASE_PRESSURES[0],
            base_temperature: SEA_LEVEL_TEMPERATURE,
            lapse_rate: -(SEA_LEVEL_TEMPERATURE - BASE_TEMPERATURES[1]) / BASE_ALTITUDES[0],
        });
    }

    // Pre-seeded topmost layer, kept when no boundary above matches. Note
    // the gradient is pinned to zero here, so the band from 71 000 m to the
    // model top evaluates isothermally at its base temperature.
    let mut base = LayerBase {
        base_altitude: BASE_ALTITUDES[LAYER_COUNT - 2],
        base_pressure: BASE_PRESSURES[LAYER_COUNT - 1],
        base_temperature: BASE_TEMPERATURES[LAYER_COUNT - 1],
        lapse_rate: 0.0,
    };

    for i in 1..LAYER_COUNT - 1 {
        if altitude_m < BASE_ALTITUDES[i] {
            base = LayerBase {
                base_altitude: BASE_ALTITUDES[i - 1],
                base_pressure: BASE_PRESSURES[i],
                base_temperature: BASE_TEMPERATURES[i],
                lapse_rate: LAPSE_RATES[i],
            };
            break;
        }
    }

    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_altitudes_strictly_increasing() {
        for i in 1..LAYER_COUNT {
            assert!(BASE_ALTITUDES[i] > BASE_ALTITUDES[i - 1]);
        }
    }

    #[test]
    fn test_base_pressures_strictly_decreasing() {
        for i in 1..LAYER_COUNT {
            assert!(BASE_PRESSURES[i] < BASE_PRESSURES[i - 1]);
        }
    }

    #[test]
    fn test_troposphere_resolution() {
        let layer = resolve_layer(5000.0).unwrap();
        assert_eq!(layer.base_altitude, 0.0);
        assert_eq!(layer.base_pressure, 101325.0);
        assert_eq!(layer.base_temperature, 288.15);
        assert!((layer.lapse_rate + 0.0065).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_resolves_into_layer_above() {
        // 11 000 m is not < 11 000 m, so it lands in the isothermal layer
        let layer = resolve_layer(11_000.0).unwrap();
        assert_eq!(layer.base_altitude, 11_000.0);
        assert_eq!(layer.base_temperature, 216.65);
        assert_eq!(layer.lapse_rate, 0.0);
    }

    #[test]
    fn test_mid_stratosphere_resolution() {
        let layer = resolve_layer(25_000.0).unwrap();
        assert_eq!(layer.base_altitude, 20_000.0);
        assert_eq!(layer.base_temperature, 216.65);
        assert_eq!(layer.lapse_rate, 0.001);
    }

    #[test]
    fn test_topmost_band_uses_seeded_fallback() {
        let layer = resolve_layer(80_000.0).unwrap();
        assert_eq!(layer.base_altitude, 71_000.0);
        assert_eq!(layer.base_temperature, 214.65);
        assert_eq!(layer.lapse_rate, 0.0);
    }

    #[test]
    fn test_model_top_is_in_range() {
        assert!(resolve_layer(84_852.0).is_some());
        assert!(resolve_layer(84_852.1).is_none());
        assert!(resolve_layer(90_000.0).is_none());
    }
}
