//! Threshold judgments on gas quality and conversion efficiency.

use std::fmt;

use serde::Serialize;

use super::types::EnergyBalance;

/// Syngas LHV above which the gas is considered engine grade (MJ/Nm³).
pub const GAS_QUALITY_THRESHOLD: f64 = 4.5;
/// Cold gas efficiency above which conversion is considered good (%).
pub const EFFICIENCY_THRESHOLD: f64 = 70.0;

/// Gas quality judgment from the blended syngas LHV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GasQuality {
    /// Rich enough for engine (ICE) power generation.
    Good,
    /// Better suited to direct thermal use.
    Low,
}

impl GasQuality {
    /// Classifies a syngas LHV. Strictly above the threshold is `Good`; NaN is `Low`.
    pub fn classify(lhv_gas: f64) -> Self {
        if lhv_gas > GAS_QUALITY_THRESHOLD {
            Self::Good
        } else {
            Self::Low
        }
    }

    /// Lowercase label used in reports and exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Low => "low",
        }
    }
}

/// Efficiency judgment from the cold gas efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Efficiency {
    Good,
    Low,
}

impl Efficiency {
    /// Classifies a cold gas efficiency (%). Strictly above the threshold is `Good`.
    pub fn classify(cge: f64) -> Self {
        if cge > EFFICIENCY_THRESHOLD {
            Self::Good
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Low => "low",
        }
    }
}

/// Both judgments for one balance, with the values they were made on.
///
/// `Display` renders the analysis paragraph shown under the results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Advisory {
    /// Gas quality judgment.
    pub gas_quality: GasQuality,
    /// Efficiency judgment.
    pub efficiency: Efficiency,
    /// Syngas LHV the gas judgment was made on (MJ/Nm³).
    pub lhv_gas: f64,
    /// Cold gas efficiency the efficiency judgment was made on (%).
    pub cge: f64,
}

impl Advisory {
    /// Evaluates both judgments independently.
    pub fn from_balance(balance: &EnergyBalance) -> Self {
        Self {
            gas_quality: GasQuality::classify(balance.lhv_gas),
            efficiency: Efficiency::classify(balance.cge),
            lhv_gas: balance.lhv_gas,
            cge: balance.cge,
        }
    }

    /// Sentence on gas quality.
    pub fn gas_sentence(&self) -> String {
        match self.gas_quality {
            GasQuality::Good => format!(
                "Good gas quality ({:.2} MJ/Nm³): suitable for engine (ICE) power generation.",
                self.lhv_gas
            ),
            GasQuality::Low => format!(
                "Low gas quality ({:.2} MJ/Nm³): better suited to thermal (heating) applications.",
                self.lhv_gas
            ),
        }
    }

    /// Sentence on conversion efficiency.
    pub fn efficiency_sentence(&self) -> String {
        match self.efficiency {
            Efficiency::Good => format!("Efficiency is good ({:.1}%).", self.cge),
            Efficiency::Low => format!(
                "Efficiency is low ({:.1}%). Check for heat leaks or incomplete carbon conversion.",
                self.cge
            ),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gas_sentence(), self.efficiency_sentence())
    }
}
