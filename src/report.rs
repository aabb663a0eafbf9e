//! Computed case bundle and its text report.

use std::fmt;

use serde::Serialize;

use crate::balance::{Advisory, EnergyBalance, EnergyShares, ProcessInputs, compute};
use crate::config::CaseConfig;

/// Width of the longest share bar in characters.
const BAR_WIDTH: usize = 40;

/// Everything shown for one case: inputs, balance, chart slices, analysis.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// Case name.
    pub name: String,
    pub inputs: ProcessInputs,
    pub balance: EnergyBalance,
    pub shares: EnergyShares,
    pub advisory: Advisory,
}

impl CaseReport {
    /// Computes the balance and derived views for a set of inputs.
    pub fn new(name: impl Into<String>, inputs: ProcessInputs) -> Self {
        let balance = compute(&inputs);
        Self {
            name: name.into(),
            inputs,
            balance,
            shares: EnergyShares::from_balance(&balance),
            advisory: Advisory::from_balance(&balance),
        }
    }

    pub fn from_config(cfg: &CaseConfig) -> Self {
        Self::new(cfg.display_name(), cfg.inputs())
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.balance;
        let p = &self.inputs;

        writeln!(f, "=== Gasification energy balance: {} ===", self.name)?;
        writeln!(
            f,
            "Fuel: {:.1} kg/h @ {:.1} MJ/kg | Syngas: {:.1} Nm³/h, {:.0} °C (ref {:.0} °C) | \
             CO {:.1}%  H2 {:.1}%  CH4 {:.1}%",
            p.mass_flow,
            p.fuel_lhv,
            p.gas_flow,
            p.temp_out,
            p.temp_ref,
            p.vol_co,
            p.vol_h2,
            p.vol_ch4,
        )?;
        writeln!(f)?;

        writeln!(f, "Syngas LHV:            {:.2} MJ/Nm³", b.lhv_gas)?;
        writeln!(f, "Cold gas efficiency:   {:.1}%", b.cge)?;
        writeln!(f, "System losses:         {:.2} MJ/h", b.e_loss)?;
        writeln!(f)?;

        writeln!(f, "--- Energy breakdown ---")?;
        writeln!(f, "Total input (H_feed):  {:>10.2} MJ/h", b.e_in)?;
        writeln!(f, "Chemical out (H_chem): {:>10.2} MJ/h", b.e_chem)?;
        writeln!(f, "Sensible out (H_sens): {:>10.2} MJ/h", b.e_sens)?;
        writeln!(f, "Total losses (Q_loss): {:>10.2} MJ/h", b.e_loss)?;
        writeln!(f)?;

        writeln!(f, "--- Output shares ---")?;
        for share in self.shares.as_array() {
            let filled = share_bar_len(share.pct);
            writeln!(
                f,
                "{:<25} {:<width$} {:>5.1}%",
                share.label,
                "#".repeat(filled),
                share.pct,
                width = BAR_WIDTH,
            )?;
        }
        writeln!(f)?;

        writeln!(f, "--- Analysis ---")?;
        write!(f, "{}", self.advisory)
    }
}

/// Bar length for a percentage, clamped to `[0, BAR_WIDTH]`.
fn share_bar_len(pct: f64) -> usize {
    let len = (pct / 100.0 * BAR_WIDTH as f64).round();
    if len.is_finite() {
        len.clamp(0.0, BAR_WIDTH as f64) as usize
    } else {
        0
    }
}
