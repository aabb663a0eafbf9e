//! Editable input fields, addressed by dotted config keys.

use super::types::ProcessInputs;

/// Resolution used to strip float drift after a nudge.
const DRIFT_SCALE: f64 = 1e10;

/// One editable input of [`ProcessInputs`].
///
/// Keys match the TOML case layout (`section.field`), so the same name
/// works in a case file, a `--set` override, and the TUI form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    MassFlow,
    FuelLhv,
    GasFlow,
    TempOut,
    TempRef,
    VolCo,
    VolH2,
    VolCh4,
}

impl InputField {
    /// All fields in form order.
    pub const ALL: [InputField; 8] = [
        Self::MassFlow,
        Self::FuelLhv,
        Self::GasFlow,
        Self::TempOut,
        Self::TempRef,
        Self::VolCo,
        Self::VolH2,
        Self::VolCh4,
    ];

    /// Dotted key, e.g. `"syngas.temp_out_c"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::MassFlow => "fuel.mass_flow_kg_h",
            Self::FuelLhv => "fuel.lhv_mj_kg",
            Self::GasFlow => "syngas.flow_nm3_h",
            Self::TempOut => "syngas.temp_out_c",
            Self::TempRef => "syngas.temp_ref_c",
            Self::VolCo => "composition.co_pct",
            Self::VolH2 => "composition.h2_pct",
            Self::VolCh4 => "composition.ch4_pct",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MassFlow => "Mass flow",
            Self::FuelLhv => "Fuel LHV",
            Self::GasFlow => "Gas flow",
            Self::TempOut => "Outlet temp",
            Self::TempRef => "Ref temp",
            Self::VolCo => "CO",
            Self::VolH2 => "H2",
            Self::VolCh4 => "CH4",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::MassFlow => "kg/h",
            Self::FuelLhv => "MJ/kg",
            Self::GasFlow => "Nm³/h",
            Self::TempOut | Self::TempRef => "°C",
            Self::VolCo | Self::VolH2 | Self::VolCh4 => "vol %",
        }
    }

    /// Increment used when nudging the value interactively.
    pub fn step(self) -> f64 {
        match self {
            Self::TempOut | Self::TempRef => 1.0,
            _ => 0.1,
        }
    }

    /// Looks up a field by its dotted key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn get(self, inputs: &ProcessInputs) -> f64 {
        match self {
            Self::MassFlow => inputs.mass_flow,
            Self::FuelLhv => inputs.fuel_lhv,
            Self::GasFlow => inputs.gas_flow,
            Self::TempOut => inputs.temp_out,
            Self::TempRef => inputs.temp_ref,
            Self::VolCo => inputs.vol_co,
            Self::VolH2 => inputs.vol_h2,
            Self::VolCh4 => inputs.vol_ch4,
        }
    }

    pub fn set(self, inputs: &mut ProcessInputs, value: f64) {
        let slot = match self {
            Self::MassFlow => &mut inputs.mass_flow,
            Self::FuelLhv => &mut inputs.fuel_lhv,
            Self::GasFlow => &mut inputs.gas_flow,
            Self::TempOut => &mut inputs.temp_out,
            Self::TempRef => &mut inputs.temp_ref,
            Self::VolCo => &mut inputs.vol_co,
            Self::VolH2 => &mut inputs.vol_h2,
            Self::VolCh4 => &mut inputs.vol_ch4,
        };
        *slot = value;
    }

    /// Adds `steps` increments to the field. Off-grid values keep their
    /// offset; only float drift below 1e-10 is rounded away.
    pub fn nudge(self, inputs: &mut ProcessInputs, steps: i32) {
        let raw = self.get(inputs) + self.step() * f64::from(steps);
        self.set(inputs, (raw * DRIFT_SCALE).round() / DRIFT_SCALE);
    }
}
