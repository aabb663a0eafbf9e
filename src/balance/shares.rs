//! Split of the balance outputs into chart slices.

use serde::Serialize;

use super::types::EnergyBalance;

/// One slice of the output energy chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    /// Slice label.
    pub label: &'static str,
    /// Slice value, clamped at zero (MJ/h).
    pub value: f64,
    /// Fraction of the clamped total (%).
    pub pct: f64,
}

/// Chemical, sensible, and loss slices of one balance.
///
/// Negative terms are drawn as empty slices, so the percentages always sum
/// to 100 unless every term is non-positive, in which case they are all 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyShares {
    pub chemical: Share,
    pub sensible: Share,
    pub losses: Share,
}

impl EnergyShares {
    pub fn from_balance(balance: &EnergyBalance) -> Self {
        let chem = balance.e_chem.max(0.0);
        let sens = balance.e_sens.max(0.0);
        let loss = balance.e_loss.max(0.0);
        let total = chem + sens + loss;
        let pct = |v: f64| if total > 0.0 { v / total * 100.0 } else { 0.0 };

        Self {
            chemical: Share {
                label: "Chemical energy (useful)",
                value: chem,
                pct: pct(chem),
            },
            sensible: Share {
                label: "Sensible heat (hot gas)",
                value: sens,
                pct: pct(sens),
            },
            losses: Share {
                label: "Losses (wall/char)",
                value: loss,
                pct: pct(loss),
            },
        }
    }

    /// Slices in chart order.
    pub fn as_array(&self) -> [Share; 3] {
        [self.chemical, self.sensible, self.losses]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn balance(e_chem: f64, e_sens: f64, e_loss: f64) -> EnergyBalance {
        EnergyBalance {
            lhv_gas: 4.7,
            e_in: e_chem + e_sens + e_loss,
            e_chem,
            e_sens,
            e_loss,
            cge: 0.0,
        }
    }

    #[test]
    fn shares_sum_to_hundred() {
        let s = EnergyShares::from_balance(&balance(70.0, 5.0, 25.0));
        assert_relative_eq!(s.chemical.pct, 70.0, epsilon = 1e-12);
        assert_relative_eq!(s.sensible.pct, 5.0, epsilon = 1e-12);
        assert_relative_eq!(s.losses.pct, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_loss_is_clamped() {
        let s = EnergyShares::from_balance(&balance(90.0, 10.0, -20.0));
        assert_eq!(s.losses.value, 0.0);
        assert_eq!(s.losses.pct, 0.0);
        assert_relative_eq!(s.chemical.pct, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn all_non_positive_gives_zero_shares() {
        let s = EnergyShares::from_balance(&balance(0.0, -1.0, 0.0));
        for share in s.as_array() {
            assert_eq!(share.value, 0.0);
            assert_eq!(share.pct, 0.0);
        }
    }
}
