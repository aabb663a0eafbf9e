//! TOML-based case configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::balance::{InputField, ProcessInputs};

/// One gasifier operating point parsed from TOML.
///
/// All fields have defaults matching the reference case. Load from TOML
/// with [`CaseConfig::from_toml_file`] or use [`CaseConfig::reference`].
///
/// ```toml
/// name = "trial-3"
///
/// [fuel]
/// mass_flow_kg_h = 6.4
/// lhv_mj_kg = 15.8
///
/// [syngas]
/// flow_nm3_h = 15.3
/// temp_out_c = 320
/// temp_ref_c = 25
///
/// [composition]
/// co_pct = 19.2
/// h2_pct = 14.1
/// ch4_pct = 2.1
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    /// Display name; defaults to the preset or file stem.
    #[serde(default)]
    pub name: Option<String>,
    /// Fuel feed parameters.
    #[serde(default)]
    pub fuel: FuelConfig,
    /// Syngas flow and temperatures.
    #[serde(default)]
    pub syngas: SyngasConfig,
    /// Syngas composition.
    #[serde(default)]
    pub composition: CompositionConfig,
}

/// Fuel feed parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FuelConfig {
    /// Fuel mass flow (kg/h).
    pub mass_flow_kg_h: f64,
    /// Fuel lower heating value (MJ/kg).
    pub lhv_mj_kg: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        let p = ProcessInputs::default();
        Self {
            mass_flow_kg_h: p.mass_flow,
            lhv_mj_kg: p.fuel_lhv,
        }
    }
}

/// Syngas flow and temperatures.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyngasConfig {
    /// Syngas flow (Nm³/h).
    pub flow_nm3_h: f64,
    /// Outlet temperature (°C).
    pub temp_out_c: f64,
    /// Reference temperature (°C).
    pub temp_ref_c: f64,
}

impl Default for SyngasConfig {
    fn default() -> Self {
        let p = ProcessInputs::default();
        Self {
            flow_nm3_h: p.gas_flow,
            temp_out_c: p.temp_out,
            temp_ref_c: p.temp_ref,
        }
    }
}

/// Combustible components of the syngas (vol %). The balance is N2/CO2.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositionConfig {
    pub co_pct: f64,
    pub h2_pct: f64,
    pub ch4_pct: f64,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        let p = ProcessInputs::default();
        Self {
            co_pct: p.vol_co,
            h2_pct: p.vol_h2,
            ch4_pct: p.vol_ch4,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"syngas.temp_out_c"`).
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

/// Non-fatal note about a case. The case is still computed.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// Dotted field path.
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}: {}", self.field, self.message)
    }
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl CaseConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["reference", "lean_gas", "hot_outlet"];

    /// Returns the reference operating point.
    pub fn reference() -> Self {
        Self {
            name: Some("reference".to_string()),
            fuel: FuelConfig::default(),
            syngas: SyngasConfig::default(),
            composition: CompositionConfig::default(),
        }
    }

    /// Returns the lean-gas preset: air-blown run with a diluted, low-LHV gas.
    pub fn lean_gas() -> Self {
        Self {
            name: Some("lean_gas".to_string()),
            fuel: FuelConfig {
                mass_flow_kg_h: 7.0,
                ..FuelConfig::default()
            },
            syngas: SyngasConfig {
                flow_nm3_h: 17.5,
                temp_out_c: 280.0,
                ..SyngasConfig::default()
            },
            composition: CompositionConfig {
                co_pct: 14.5,
                h2_pct: 9.8,
                ch4_pct: 1.4,
            },
        }
    }

    /// Returns the hot-outlet preset: rich gas leaving without heat recovery.
    pub fn hot_outlet() -> Self {
        Self {
            name: Some("hot_outlet".to_string()),
            fuel: FuelConfig::default(),
            syngas: SyngasConfig {
                temp_out_c: 650.0,
                ..SyngasConfig::default()
            },
            composition: CompositionConfig {
                co_pct: 21.0,
                h2_pct: 16.5,
                ch4_pct: 2.4,
            },
        }
    }

    /// Loads a case from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "reference" => Ok(Self::reference()),
            "lean_gas" => Ok(Self::lean_gas()),
            "hot_outlet" => Ok(Self::hot_outlet()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a case from a TOML file. An unnamed case takes the file stem.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "case".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        let mut cfg = Self::from_toml_str(&content)?;
        if cfg.name.is_none() {
            cfg.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned());
        }
        Ok(cfg)
    }

    /// Parses a case from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Case name for reports, `"case"` when none was given.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("case")
    }

    /// Converts the case to calculator inputs.
    pub fn inputs(&self) -> ProcessInputs {
        ProcessInputs {
            mass_flow: self.fuel.mass_flow_kg_h,
            fuel_lhv: self.fuel.lhv_mj_kg,
            gas_flow: self.syngas.flow_nm3_h,
            temp_out: self.syngas.temp_out_c,
            temp_ref: self.syngas.temp_ref_c,
            vol_co: self.composition.co_pct,
            vol_h2: self.composition.h2_pct,
            vol_ch4: self.composition.ch4_pct,
        }
    }

    /// Overwrites all fields from calculator inputs, keeping the name.
    pub fn set_inputs(&mut self, p: &ProcessInputs) {
        self.fuel = FuelConfig {
            mass_flow_kg_h: p.mass_flow,
            lhv_mj_kg: p.fuel_lhv,
        };
        self.syngas = SyngasConfig {
            flow_nm3_h: p.gas_flow,
            temp_out_c: p.temp_out,
            temp_ref_c: p.temp_ref,
        };
        self.composition = CompositionConfig {
            co_pct: p.vol_co,
            h2_pct: p.vol_h2,
            ch4_pct: p.vol_ch4,
        };
    }

    /// Applies a single `key = value` override, e.g. `("syngas.temp_out_c", 400.0)`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `key` does not name an input field.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), ConfigError> {
        let field = InputField::from_key(key).ok_or_else(|| ConfigError {
            field: key.to_string(),
            message: format!(
                "unknown field, expected one of: {}",
                InputField::ALL.map(InputField::key).join(", ")
            ),
        })?;
        let mut inputs = self.inputs();
        field.set(&mut inputs, value);
        self.set_inputs(&inputs);
        Ok(())
    }

    /// Parses and applies a `key=value` override string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the string is malformed, the key is
    /// unknown, or the value is not a number.
    pub fn apply_override(&mut self, spec: &str) -> Result<(), ConfigError> {
        let (key, raw) = spec.split_once('=').ok_or_else(|| ConfigError {
            field: spec.to_string(),
            message: "override must have the form key=value".to_string(),
        })?;
        let key = key.trim();
        let value: f64 = raw.trim().parse().map_err(|_| ConfigError {
            field: key.to_string(),
            message: format!("\"{}\" is not a number", raw.trim()),
        })?;
        self.set(key, value)
    }

    /// Returns non-fatal notes about the case.
    ///
    /// Inputs are never rejected: the balance is computed for any numbers.
    /// Warnings flag values that make the result hard to interpret.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let p = self.inputs();

        for field in InputField::ALL {
            if !field.get(&p).is_finite() {
                warnings.push(ConfigWarning {
                    field: field.key().to_string(),
                    message: "value is not finite".to_string(),
                });
            }
        }

        let combustible = p.combustible_pct();
        if combustible > 100.0 {
            warnings.push(ConfigWarning {
                field: "composition".to_string(),
                message: format!("CO + H2 + CH4 = {combustible:.1}% exceeds 100%"),
            });
        }

        if p.mass_flow * p.fuel_lhv == 0.0 {
            warnings.push(ConfigWarning {
                field: "fuel".to_string(),
                message: "fuel energy input is zero, cold gas efficiency reported as 0".to_string(),
            });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_matches_default_inputs() {
        let cfg = CaseConfig::reference();
        assert_eq!(cfg.inputs(), ProcessInputs::default());
        assert!(cfg.warnings().is_empty());
    }

    #[test]
    fn from_preset_unknown() {
        let err = CaseConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
        assert!(e.to_string().starts_with("config error: preset"));
    }

    #[test]
    fn all_presets_load_without_warnings() {
        for name in CaseConfig::PRESETS {
            let cfg = CaseConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let cfg = cfg.unwrap();
            assert_eq!(cfg.display_name(), *name);
            assert!(cfg.warnings().is_empty(), "preset \"{name}\" warned");
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
name = "trial-3"

[fuel]
mass_flow_kg_h = 8.0
lhv_mj_kg = 17.2

[syngas]
flow_nm3_h = 19.0
temp_out_c = 410
temp_ref_c = 20

[composition]
co_pct = 18.0
h2_pct = 12.5
ch4_pct = 2.8
"#;
        let cfg = CaseConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.unwrap();
        assert_eq!(cfg.display_name(), "trial-3");
        let p = cfg.inputs();
        assert_eq!(p.mass_flow, 8.0);
        assert_eq!(p.temp_out, 410.0);
        assert_eq!(p.vol_ch4, 2.8);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[syngas]
temp_out_c = 400.0
"#;
        let cfg = CaseConfig::from_toml_str(toml).unwrap();
        assert!(cfg.name.is_none());
        assert_eq!(cfg.display_name(), "case");
        let p = cfg.inputs();
        assert_eq!(p.temp_out, 400.0);
        assert_eq!(p.temp_ref, 25.0);
        assert_eq!(p.mass_flow, 6.4);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
[fuel]
mass_flow_kg_h = 6.4
moisture_pct = 12.0
"#;
        assert!(CaseConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn override_sets_field() {
        let mut cfg = CaseConfig::reference();
        cfg.apply_override("syngas.temp_out_c=450").unwrap();
        assert_eq!(cfg.syngas.temp_out_c, 450.0);
        cfg.apply_override(" composition.h2_pct = 9.5 ").unwrap();
        assert_eq!(cfg.composition.h2_pct, 9.5);
        assert_eq!(cfg.display_name(), "reference");
    }

    #[test]
    fn override_errors() {
        let mut cfg = CaseConfig::reference();
        assert!(cfg.apply_override("syngas.temp_out_c").is_err());
        let e = cfg.apply_override("syngas.temp_out_c=hot").unwrap_err();
        assert_eq!(e.field, "syngas.temp_out_c");
        let e = cfg.apply_override("syngas.pressure=1").unwrap_err();
        assert!(e.message.contains("unknown field"));
    }

    #[test]
    fn composition_over_hundred_warns_but_is_kept() {
        let mut cfg = CaseConfig::reference();
        cfg.composition.co_pct = 60.0;
        cfg.composition.h2_pct = 50.0;
        let warnings = cfg.warnings();
        assert!(warnings.iter().any(|w| w.field == "composition"));
        assert_eq!(cfg.inputs().vol_co, 60.0);
    }

    #[test]
    fn zero_fuel_input_warns() {
        let mut cfg = CaseConfig::reference();
        cfg.fuel.mass_flow_kg_h = 0.0;
        assert!(cfg.warnings().iter().any(|w| w.field == "fuel"));
    }

    #[test]
    fn non_finite_value_warns() {
        let mut cfg = CaseConfig::reference();
        cfg.set("fuel.lhv_mj_kg", f64::NAN).unwrap();
        let warnings = cfg.warnings();
        assert!(warnings.iter().any(|w| w.field == "fuel.lhv_mj_kg"));
        assert!(warnings[0].to_string().starts_with("warning: "));
    }
}
