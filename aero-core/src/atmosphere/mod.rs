//! 1976 US Standard Atmosphere model

mod gas;
mod layers;
mod model;

pub use gas::{Constituent, CONSTITUENTS, MEAN_MOLECULAR_WEIGHT};
pub use layers::{
    resolve_layer, LayerBase, BASE_ALTITUDES, BASE_PRESSURES, BASE_TEMPERATURES,
    LAPSE_RATES, LAYER_COUNT, SEA_LEVEL_TEMPERATURE,
};
pub use model::{
    evaluate, try_evaluate, AtmosphereSample, HEAT_CAPACITY_RATIO, STANDARD_GRAVITY,
    SUTHERLAND_BETA, SUTHERLAND_TEMPERATURE, UNIVERSAL_GAS_CONSTANT,
};
