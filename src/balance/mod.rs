//! Energy balance of a biomass gasifier and its advisory judgments.

/// Gas quality and efficiency judgments.
pub mod advisory;
pub mod calculator;
/// Editable input fields.
pub mod field;
/// Chart slices of the output energy.
pub mod shares;
pub mod types;

pub use advisory::{Advisory, Efficiency, GasQuality};
pub use calculator::compute;
pub use field::InputField;
pub use shares::{EnergyShares, Share};
pub use types::{EnergyBalance, ProcessInputs};
