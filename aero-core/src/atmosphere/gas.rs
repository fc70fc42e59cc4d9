/// One atmospheric constituent of the standard dry-air mixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constituent {
    pub name: &'static str,
    /// Molecular weight, kg/kmol
    pub molecular_weight: f64,
    /// Fractional volume (dimensionless)
    pub fractional_volume: f64,
}

/// Sea-level composition of dry air, US Standard Atmosphere 1976
pub const CONSTITUENTS: [Constituent; 10] = [
    Constituent { name: "N2", molecular_weight: 28.0134, fractional_volume: 0.78084 },
    Constituent { name: "O2", molecular_weight: 31.9988, fractional_volume: 0.209476 },
    Constituent { name: "Ar", molecular_weight: 39.948, fractional_volume: 0.00934 },
    Constituent { name: "CO2", molecular_weight: 44.00995, fractional_volume: 0.000314 },
    Constituent { name: "Ne", molecular_weight: 20.183, fractional_volume: 0.00001818 },
    Constituent { name: "He", molecular_weight: 4.0026, fractional_volume: 0.00000524 },
    Constituent { name: "Kr", molecular_weight: 83.80, fractional_volume: 0.00000114 },
    Constituent { name: "Xe", molecular_weight: 131.30, fractional_volume: 0.000000087 },
    Constituent { name: "CH4", molecular_weight: 16.04303, fractional_volume: 0.000002 },
    Constituent { name: "H2", molecular_weight: 2.01594, fractional_volume: 0.0000005 },
];

/// Mean molecular weight of air, kg/kmol
///
/// Fractional-volume-weighted average over the constituent table, computed
/// at compile time so there is no first-use initialization to synchronize.
pub const MEAN_MOLECULAR_WEIGHT: f64 = mean_molecular_weight(&CONSTITUENTS);

const fn mean_molecular_weight(table: &[Constituent]) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    let mut i = 0;
    while i < table.len() {
        weighted += table[i].molecular_weight * table[i].fractional_volume;
        total += table[i].fractional_volume;
        i += 1;
    }
    weighted / total
}
