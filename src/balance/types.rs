//! Gasifier process inputs, fixed gas properties, and balance outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower heating value of carbon monoxide (MJ/Nm³).
pub const LHV_CO: f64 = 12.63;
/// Lower heating value of hydrogen (MJ/Nm³).
pub const LHV_H2: f64 = 10.78;
/// Lower heating value of methane (MJ/Nm³).
pub const LHV_CH4: f64 = 35.88;
/// Mean specific heat of the product gas (kJ/(Nm³·K)).
pub const CP_GAS: f64 = 1.35;

/// Measured operating point of a gasifier run.
///
/// Values are taken as-is: negative or physically inconsistent numbers are
/// accepted and propagate through the balance arithmetic. Missing fields in
/// serialized form fall back to the reference case.
///
/// # Examples
///
/// ```
/// use gasifier_balance::balance::ProcessInputs;
///
/// let inputs = ProcessInputs::default();
/// assert_eq!(inputs.mass_flow, 6.4);
/// assert_eq!(inputs.temp_ref, 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessInputs {
    /// Fuel mass flow rate (kg/h).
    pub mass_flow: f64,
    /// Fuel lower heating value (MJ/kg).
    pub fuel_lhv: f64,
    /// Syngas volumetric flow (Nm³/h).
    pub gas_flow: f64,
    /// Syngas outlet temperature (°C).
    pub temp_out: f64,
    /// Reference temperature for sensible heat (°C).
    pub temp_ref: f64,
    /// CO content of the syngas (vol %).
    pub vol_co: f64,
    /// H2 content of the syngas (vol %).
    pub vol_h2: f64,
    /// CH4 content of the syngas (vol %).
    pub vol_ch4: f64,
}

impl Default for ProcessInputs {
    fn default() -> Self {
        Self {
            mass_flow: 6.4,
            fuel_lhv: 15.8,
            gas_flow: 15.3,
            temp_out: 320.0,
            temp_ref: 25.0,
            vol_co: 19.2,
            vol_h2: 14.1,
            vol_ch4: 2.1,
        }
    }
}

impl ProcessInputs {
    /// Sum of the combustible fractions (vol %). The remainder is inert N2/CO2.
    pub fn combustible_pct(&self) -> f64 {
        self.vol_co + self.vol_h2 + self.vol_ch4
    }
}

/// Energy balance of one operating point. All flows in MJ/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyBalance {
    /// Blended syngas lower heating value (MJ/Nm³).
    pub lhv_gas: f64,
    /// Fuel energy input.
    pub e_in: f64,
    /// Chemical energy carried out by the syngas.
    pub e_chem: f64,
    /// Sensible heat carried out by the hot syngas.
    pub e_sens: f64,
    /// Losses by difference (wall losses, unburnt char). May be negative.
    pub e_loss: f64,
    /// Cold gas efficiency (%).
    pub cge: f64,
}

impl fmt::Display for EnergyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LHV_gas={:.2} MJ/Nm³ | in={:.2}  chem={:.2}  sens={:.2}  \
             loss={:.2} MJ/h | CGE={:.1}%",
            self.lhv_gas, self.e_in, self.e_chem, self.e_sens, self.e_loss, self.cge,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_case() {
        let p = ProcessInputs::default();
        assert_eq!(p.fuel_lhv, 15.8);
        assert_eq!(p.gas_flow, 15.3);
        assert_eq!(p.temp_out, 320.0);
        assert_eq!(p.vol_ch4, 2.1);
    }

    #[test]
    fn combustible_pct_sums_fractions() {
        let p = ProcessInputs {
            vol_co: 20.0,
            vol_h2: 15.0,
            vol_ch4: 3.0,
            ..ProcessInputs::default()
        };
        assert_eq!(p.combustible_pct(), 38.0);
    }

    #[test]
    fn balance_display_does_not_panic() {
        let b = EnergyBalance {
            lhv_gas: 4.7,
            e_in: 101.12,
            e_chem: 71.89,
            e_sens: 6.09,
            e_loss: 23.14,
            cge: 71.1,
        };
        let s = format!("{b}");
        assert!(s.contains("CGE=71.1%"));
    }
}
