//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gasifier_balance::balance::ProcessInputs;

/// Seeded RNG so property sweeps are reproducible.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Worked example from the plant log (same as the reference preset).
pub fn reference_inputs() -> ProcessInputs {
    ProcessInputs {
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

/// Random operating point with physically plausible ranges.
pub fn random_inputs(rng: &mut StdRng) -> ProcessInputs {
    ProcessInputs {
        mass_flow: rng.random_range(0.5..50.0),
        fuel_lhv: rng.random_range(8.0..22.0),
        gas_flow: rng.random_range(0.0..120.0),
        temp_out: rng.random_range(20.0..900.0),
        temp_ref: rng.random_range(0.0..40.0),
        vol_co: rng.random_range(0.0..35.0),
        vol_h2: rng.random_range(0.0..35.0),
        vol_ch4: rng.random_range(0.0..10.0),
    }
}
