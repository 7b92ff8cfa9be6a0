//! Integration test: bootstrap a money market + swap curve.
//!
//! A curve for valuation date 2014-04-01 is calibrated from six
//! instruments and must then reprice every one of them at par.
//!
//! | Instrument | Maturity | Rate   |
//! |------------|----------|--------|
//! | Cash       | 30d      | 0.50%  |
//! | Cash       | 90d      | 0.70%  |
//! | Cash       | 180d     | 1.00%  |
//! | Swap 6m    | 1y       | 1.20%  |
//! | Swap 6m    | 3y       | 2.00%  |
//! | Swap 6m    | 5y       | 2.00%  |
//!
//! Swaps pay semi-annually with a long first stub; everything accrues
//! A/360.

use parstrip_core::daycounts::DayCount;
use parstrip_core::types::{Date, Tenor};
use parstrip_curves::bootstrap::Bootstrapper;
use parstrip_curves::instruments::{Cash, Instrument, Swap};
use parstrip_curves::schedule::{ScheduleBuilder, StubPolicy};

fn valuation_date() -> Date {
    Date::from_ymd(2014, 4, 1).unwrap()
}

fn market_cash(days: i64, rate: f64) -> Cash {
    let valuation = valuation_date();
    Cash::new(
        valuation,
        valuation.add_days(days),
        1.0,
        rate,
        DayCount::Actual(360.0),
    )
    .unwrap()
}

fn market_swap(years: i32, rate: f64) -> Swap {
    let schedule = ScheduleBuilder::new(valuation_date())
        .maturity_tenor(Tenor::years(years))
        .period(Tenor::months(6))
        .stub(StubPolicy::LongFirst)
        .day_count(DayCount::Actual(360.0))
        .build()
        .unwrap();
    Swap::new(schedule, 1.0, rate).unwrap()
}

fn market_instruments() -> Vec<(Box<dyn Instrument>, f64)> {
    vec![
        (Box::new(market_cash(30, 0.005)), 0.005),
        (Box::new(market_cash(90, 0.007)), 0.007),
        (Box::new(market_cash(180, 0.010)), 0.010),
        (Box::new(market_swap(1, 0.012)), 0.012),
        (Box::new(market_swap(3, 0.020)), 0.020),
        (Box::new(market_swap(5, 0.020)), 0.020),
    ]
}

#[test]
fn test_calibrated_curve_reprices_all_instruments() {
    let bootstrapper = Bootstrapper::new(valuation_date())
        .add_instrument(market_cash(30, 0.005))
        .add_instrument(market_cash(90, 0.007))
        .add_instrument(market_cash(180, 0.010))
        .add_instrument(market_swap(1, 0.012))
        .add_instrument(market_swap(3, 0.020))
        .add_instrument(market_swap(5, 0.020));

    let (curve, diagnostics) = bootstrapper.bootstrap_with_diagnostics().unwrap();

    println!(
        "objective {:.3e} after {} iterations",
        diagnostics.objective, diagnostics.iterations
    );
    assert!(diagnostics.converged);
    assert!(
        diagnostics.objective < 1e-10,
        "objective {:.3e} too large",
        diagnostics.objective
    );

    // The anchor pillar is exact, not just close.
    assert_eq!(curve.discount_factor(valuation_date()).unwrap(), 1.0);

    for (instrument, quoted) in market_instruments() {
        let par = instrument.par_rate(&curve).unwrap();
        let value = instrument.value(&curve).unwrap();
        println!(
            "{}: par {:.6}, value {:.3e}",
            instrument.description(),
            par,
            value
        );
        assert!(
            (par - quoted).abs() <= 1e-3,
            "{}: par rate {par:.6} vs quote {quoted:.6}",
            instrument.description()
        );
        assert!(
            value.abs() <= 1e-3,
            "{}: value {value:.3e} not at par",
            instrument.description()
        );
    }
}

#[test]
fn test_discount_factors_decrease_with_positive_rates() {
    let curve = Bootstrapper::new(valuation_date())
        .add_instrument(market_cash(30, 0.005))
        .add_instrument(market_cash(90, 0.007))
        .add_instrument(market_cash(180, 0.010))
        .add_instrument(market_swap(1, 0.012))
        .add_instrument(market_swap(3, 0.020))
        .add_instrument(market_swap(5, 0.020))
        .bootstrap()
        .unwrap();

    let factors = curve.factors();
    for window in factors.windows(2) {
        assert!(
            window[1] < window[0],
            "discount factors should decrease: {} -> {}",
            window[0],
            window[1]
        );
    }
    assert!(factors[factors.len() - 1] > 0.85);
}

#[test]
fn test_strict_bootstrap_succeeds_on_consistent_quotes() {
    let curve = Bootstrapper::new(valuation_date())
        .add_instrument(market_cash(90, 0.007))
        .add_instrument(market_swap(1, 0.012))
        .add_instrument(market_swap(3, 0.020))
        .bootstrap_checked()
        .unwrap();

    let swap = market_swap(3, 0.020);
    assert!((swap.par_rate(&curve).unwrap() - 0.020).abs() < 1e-4);
}
