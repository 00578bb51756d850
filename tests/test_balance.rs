use pretty_assertions::assert_eq;

use dhbalance::{profiles::*, types::*, *};

fn approx_equal(expected: f64, got: f64) -> bool {
    (expected - got).abs() < 1e-3
}

fn barnwell() -> InputParameters {
    get_profile("Barnwell").resolve()
}

/// Combinaciones de parámetros extremos para comprobar invariantes
fn parameter_grid() -> Vec<InputParameters> {
    let mut grid = Vec::new();
    for &area in &[0.0, 500.0, 22102.0] {
        for &outdoor_temp in &[-10.0, 5.0, 25.0] {
            for &chp_installed in &[true, false] {
                for &hp_installed in &[true, false] {
                    for &boiler_eff in &[-0.5, 0.0, 0.85] {
                        for &hp_cop in &[-1.0, 0.0, 3.5] {
                            grid.push(InputParameters {
                                area,
                                outdoor_temp,
                                chp_installed,
                                hp_installed,
                                boiler_eff,
                                hp_cop,
                                ..barnwell()
                            });
                        }
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn barnwell_daily_boiler_only() {
    let b = compute_daily_balance_with(&barnwell(), Co2Scope::BoilerOnly);
    assert!(approx_equal(1790.262, b.heat_demand));
    assert!(approx_equal(636.975, b.chp_thermal));
    assert!(approx_equal(540.0, b.hp_thermal));
    assert!(approx_equal(135.0, b.hp_electric_consumed));
    assert!(approx_equal(613.287, b.boiler_thermal));
    assert!(approx_equal(721.514, b.boiler_gas_input));
    assert!(approx_equal(165.948, b.total_co2));
}

#[test]
fn barnwell_daily_with_chp_gas() {
    let b = compute_daily_balance(&barnwell());
    assert!(approx_equal(967.575, b.chp_gas_consumed));
    assert!(approx_equal(388.490, b.total_co2));
}

#[test]
fn barnwell_monthly_forecast() {
    let f = compute_monthly_forecast(&barnwell());
    let months = f.iter().map(|e| e.month.to_string()).collect::<Vec<_>>();
    assert_eq!(
        months,
        vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
    );
    // Enero: 0.15 · 22102 · 15 · 24 / 1000 · 1.5 · 31
    assert!(approx_equal(55498.122, f[0].heating));
    assert!(approx_equal(19746.225, f[0].chp));
    assert!(approx_equal(16740.0, f[0].hp));
    assert!(approx_equal(19011.897, f[0].boiler));
    // Julio: ΔT = 5 ºC, la CHP y la HP cubren toda la demanda
    assert!(approx_equal(18499.374, f[6].heating));
    assert_eq!(f[6].boiler, 0.0);
    assert_eq!(f[6].chp, f[0].chp);
}

#[test]
fn all_zero_input() {
    let p = InputParameters {
        area: 0.0,
        u_value: 0.0,
        indoor_temp: 0.0,
        outdoor_temp: 0.0,
        system_loss: 0.0,
        boiler_eff: 0.0,
        co2_factor: 0.0,
        elec_price: 0.0,
        chp_installed: false,
        chp_thermal_output: 0.0,
        chp_elec_output: 0.0,
        chp_gas_input: 0.0,
        chp_hours_per_day: 0,
        chp_adjustment: 0.0,
        hp_installed: false,
        hp_thermal_output: 0.0,
        hp_hours_per_day: 0,
        hp_cop: 0.0,
    };
    assert_eq!(compute_daily_balance(&p), DailyBalance::default());
    for entry in compute_monthly_forecast(&p) {
        assert_eq!(entry.heating, 0.0);
        assert_eq!(entry.boiler, 0.0);
    }
}

#[test]
fn boiler_never_negative() {
    for p in parameter_grid() {
        let b = compute_daily_balance(&p);
        assert!(b.boiler_thermal >= 0.0, "{:?}", p);
        for e in compute_monthly_forecast(&p) {
            assert!(e.boiler >= 0.0, "{:?}", p);
        }
    }
}

#[test]
fn equipment_not_installed_contributes_nothing() {
    for p in parameter_grid() {
        let b = compute_daily_balance(&p);
        let f = compute_monthly_forecast(&p);
        if !p.chp_installed {
            assert_eq!(b.chp_thermal, 0.0);
            assert_eq!(b.chp_gas_consumed, 0.0);
            assert!(f.iter().all(|e| e.chp == 0.0));
        }
        if !p.hp_installed {
            assert_eq!(b.hp_thermal, 0.0);
            assert_eq!(b.hp_electric_consumed, 0.0);
            assert!(f.iter().all(|e| e.hp == 0.0));
        }
    }
}

#[test]
fn non_positive_efficiencies_mean_no_consumption() {
    for p in parameter_grid() {
        let b = compute_daily_balance(&p);
        if p.boiler_eff <= 0.0 {
            assert_eq!(b.boiler_gas_input, 0.0);
        }
        if p.hp_installed && p.hp_cop <= 0.0 {
            assert_eq!(b.hp_electric_consumed, 0.0);
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    for p in parameter_grid() {
        let first = compute_daily_balance(&p);
        let second = compute_daily_balance(&p);
        assert_eq!(first.total_co2.to_bits(), second.total_co2.to_bits());
        assert_eq!(first, second);
        assert_eq!(compute_monthly_forecast(&p), compute_monthly_forecast(&p));
    }
}

#[test]
fn profile_with_user_overrides() {
    let user = ParameterSet {
        outdoor_temp: Some(-3.0),
        hp_installed: Some(false),
        ..Default::default()
    };
    let p = get_profile("Barnwell").merge(&user).resolve();
    assert_eq!(p.area, 22102.0);
    assert_eq!(p.outdoor_temp, -3.0);
    let b = compute_daily_balance(&p);
    assert_eq!(b.hp_thermal, 0.0);
    // 0.15 · 22102 · 23 · 24 / 1000 · 1.5
    assert!(approx_equal(2745.068, b.heat_demand));
}
