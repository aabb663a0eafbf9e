//! Gasifier energy balance: input, chemical, sensible, and loss terms.

use super::types::{CP_GAS, EnergyBalance, LHV_CH4, LHV_CO, LHV_H2, ProcessInputs};

/// Blended lower heating value of the syngas (MJ/Nm³).
///
/// Linear in each volume fraction; inert components contribute nothing.
pub fn syngas_lhv(vol_co: f64, vol_h2: f64, vol_ch4: f64) -> f64 {
    let pct_co = vol_co / 100.0;
    let pct_h2 = vol_h2 / 100.0;
    let pct_ch4 = vol_ch4 / 100.0;
    pct_co * LHV_CO + pct_h2 * LHV_H2 + pct_ch4 * LHV_CH4
}

/// Sensible heat carried by the syngas above the reference temperature (MJ/h).
///
/// # Arguments
///
/// * `gas_flow` - Syngas flow (Nm³/h)
/// * `temp_out` - Outlet temperature (°C)
/// * `temp_ref` - Reference temperature (°C)
pub fn sensible_heat(gas_flow: f64, temp_out: f64, temp_ref: f64) -> f64 {
    let delta_t = temp_out - temp_ref;
    // kJ/h -> MJ/h
    gas_flow * CP_GAS * delta_t / 1000.0
}

/// Computes the energy balance for one operating point.
///
/// Never fails: a zero fuel input yields a cold gas efficiency of `0.0`
/// instead of a division by zero, and inconsistent inputs simply produce a
/// negative loss term.
///
/// # Examples
///
/// ```
/// use gasifier_balance::balance::{ProcessInputs, compute};
///
/// let b = compute(&ProcessInputs::default());
/// assert!((b.e_in - 101.12).abs() < 1e-9);
/// assert!((b.e_loss - (b.e_in - b.e_chem - b.e_sens)).abs() < 1e-12);
/// ```
pub fn compute(inputs: &ProcessInputs) -> EnergyBalance {
    let e_in = inputs.mass_flow * inputs.fuel_lhv;
    let lhv_gas = syngas_lhv(inputs.vol_co, inputs.vol_h2, inputs.vol_ch4);
    let e_chem = inputs.gas_flow * lhv_gas;
    let e_sens = sensible_heat(inputs.gas_flow, inputs.temp_out, inputs.temp_ref);
    let e_loss = e_in - (e_chem + e_sens);
    let cge = if e_in != 0.0 {
        e_chem / e_in * 100.0
    } else {
        0.0
    };

    EnergyBalance {
        lhv_gas,
        e_in,
        e_chem,
        e_sens,
        e_loss,
        cge,
    }
}
