//! Integration tests for the energy balance and its judgments.

mod common;

use approx::assert_relative_eq;

use gasifier_balance::balance::types::{LHV_CH4, LHV_CO, LHV_H2};
use gasifier_balance::balance::{Advisory, Efficiency, GasQuality, compute};

#[test]
fn worked_example() {
    let b = compute(&common::reference_inputs());

    assert_relative_eq!(b.e_in, 101.12, epsilon = 1e-9);
    assert_relative_eq!(b.lhv_gas, 4.6984, epsilon = 1e-4);
    assert_relative_eq!(b.e_chem, 71.886, epsilon = 1e-3);
    assert_relative_eq!(b.e_sens, 6.0932, epsilon = 1e-4);
    assert_relative_eq!(b.e_loss, 23.141, epsilon = 1e-3);
    assert_relative_eq!(b.cge, 71.09, epsilon = 1e-2);

    let a = Advisory::from_balance(&b);
    assert_eq!(a.gas_quality, GasQuality::Good);
    assert_eq!(a.efficiency, Efficiency::Good);
}

#[test]
fn input_energy_is_product() {
    let mut rng = common::rng();
    for _ in 0..200 {
        let p = common::random_inputs(&mut rng);
        let b = compute(&p);
        assert_eq!(b.e_in, p.mass_flow * p.fuel_lhv);
    }
}

#[test]
fn loss_closes_the_balance() {
    let mut rng = common::rng();
    for _ in 0..200 {
        let b = compute(&common::random_inputs(&mut rng));
        assert_eq!(b.e_loss, b.e_in - (b.e_chem + b.e_sens));
        assert_relative_eq!(b.e_loss, b.e_in - b.e_chem - b.e_sens, epsilon = 1e-9);
    }
}

#[test]
fn lhv_is_linear_in_each_component() {
    let mut rng = common::rng();
    for _ in 0..200 {
        let p = common::random_inputs(&mut rng);
        let base = compute(&p).lhv_gas;

        let mut q = p;
        q.vol_co *= 2.0;
        assert_relative_eq!(
            compute(&q).lhv_gas - base,
            p.vol_co / 100.0 * LHV_CO,
            epsilon = 1e-9
        );

        let mut q = p;
        q.vol_h2 += 10.0;
        assert_relative_eq!(compute(&q).lhv_gas - base, 0.1 * LHV_H2, epsilon = 1e-9);

        let mut q = p;
        q.vol_ch4 += 1.0;
        assert_relative_eq!(compute(&q).lhv_gas - base, 0.01 * LHV_CH4, epsilon = 1e-9);
    }
}

#[test]
fn zero_input_energy_never_divides() {
    let mut rng = common::rng();
    for _ in 0..50 {
        let mut p = common::random_inputs(&mut rng);
        p.mass_flow = 0.0;
        assert_eq!(compute(&p).cge, 0.0);

        let mut p = common::random_inputs(&mut rng);
        p.fuel_lhv = 0.0;
        let b = compute(&p);
        assert_eq!(b.cge, 0.0);
        assert_eq!(Efficiency::classify(b.cge), Efficiency::Low);
    }
}

#[test]
fn hotter_outlet_moves_energy_from_loss_to_sensible() {
    let mut rng = common::rng();
    for _ in 0..200 {
        let mut p = common::random_inputs(&mut rng);
        p.gas_flow = p.gas_flow.max(0.1);
        let cold = compute(&p);

        p.temp_out += 50.0;
        let hot = compute(&p);

        assert!(hot.e_sens > cold.e_sens);
        assert!(hot.e_loss < cold.e_loss);
        assert_relative_eq!(
            hot.e_sens - cold.e_sens,
            cold.e_loss - hot.e_loss,
            epsilon = 1e-9
        );
        assert_eq!(hot.e_chem, cold.e_chem);
        assert_eq!(hot.cge, cold.cge);
    }
}

#[test]
fn determinism_identical_inputs_give_identical_outputs() {
    let mut rng = common::rng();
    for _ in 0..50 {
        let p = common::random_inputs(&mut rng);
        assert_eq!(compute(&p), compute(&p));
    }
}

#[test]
fn inconsistent_inputs_give_negative_loss_without_error() {
    let mut p = common::reference_inputs();
    p.gas_flow = 60.0;
    let b = compute(&p);
    assert!(b.e_loss < 0.0);
    assert!(b.cge > 100.0);
}
