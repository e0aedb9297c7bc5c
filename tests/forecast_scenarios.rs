//! End-to-end scenarios for the forecasting core.

mod common;

use cropcast::forecast::ols::LinearFit;
use cropcast::forecast::{
    AutoregressiveForecast, ForecastError, ForecastSelector, LastValueForecast, Strategy,
};

#[test]
fn arithmetic_progression_continues_through_selector() {
    let series = common::ramp(8);
    let forecast = ForecastSelector::default()
        .select_and_forecast(&series, 3)
        .unwrap();
    common::assert_close(&forecast, &[9.0, 10.0, 11.0]);
}

#[test]
fn single_point_repeats_through_selector() {
    let forecast = ForecastSelector::default()
        .select_and_forecast(&[5.0], 4)
        .unwrap();
    assert_eq!(forecast, vec![5.0, 5.0, 5.0, 5.0]);
}

#[test]
fn empty_series_yields_zeros() {
    let forecast = ForecastSelector::default()
        .select_and_forecast(&[], 7)
        .unwrap();
    assert_eq!(forecast, vec![0.0; 7]);
}

#[test]
fn constant_series_of_six_uses_autoregression_without_error() {
    let selector = ForecastSelector::default();
    let series = [2.5; 6];
    assert_eq!(selector.select(series.len()), Strategy::Autoregressive);

    let forecast = selector.select_and_forecast(&series, 2).unwrap();
    common::assert_close(&forecast, &[2.5, 2.5]);
}

#[test]
fn overflowing_history_is_a_computation_error() {
    let series = [1e200, -1e200, 1e200, -1e200, 1e200, -1e200, 1e200];
    let err = ForecastSelector::default()
        .select_and_forecast(&series, 2)
        .unwrap_err();
    assert!(matches!(err, ForecastError::Computation(_)));
    assert!(err.to_string().starts_with("forecast computation failed"));
}

#[test]
fn infinite_observation_is_a_computation_error() {
    let series = [1.0, 2.0, 3.0, 4.0, 5.0, f64::INFINITY];
    let err = ForecastSelector::default()
        .select_and_forecast(&series, 1)
        .unwrap_err();
    assert!(matches!(err, ForecastError::Computation(_)));
}

#[test]
fn autoregression_matches_last_value_below_window() {
    let ar = AutoregressiveForecast::new(4).unwrap();
    for series in [vec![], vec![1.0], vec![3.0, 1.0, 2.0, 8.0]] {
        assert_eq!(
            ar.forecast(&series, 3).unwrap(),
            LastValueForecast.forecast(&series, 3)
        );
    }
}

#[test]
fn damped_oscillation_is_reproduced() {
    // x[t] = 0.5 * x[t-1] - 0.25 * x[t-2] + 0.1 * x[t-3] + 1
    let mut series = vec![2.0, -1.0, 3.0];
    for t in 3..20 {
        series.push(0.5 * series[t - 1] - 0.25 * series[t - 2] + 0.1 * series[t - 3] + 1.0);
    }
    let (history, future) = series.split_at(15);

    let forecast = AutoregressiveForecast::default()
        .forecast(history, future.len())
        .unwrap();
    common::assert_close(&forecast, future);
}

#[test]
fn custom_threshold_and_lags_are_independent() {
    let selector = ForecastSelector::new(10, AutoregressiveForecast::new(2).unwrap());
    let series = common::ramp(8);

    assert_eq!(selector.select(series.len()), Strategy::LastValue);
    assert_eq!(
        selector.select_and_forecast(&series, 2).unwrap(),
        vec![8.0, 8.0]
    );
}

#[test]
fn alternating_series_fits_rank_one_windows_without_error() {
    // Every window is ±(1, -1, 1), so the regressors span one direction.
    let series = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
    let forecast = ForecastSelector::default()
        .select_and_forecast(&series, 4)
        .unwrap();
    common::assert_close(&forecast, &[1.0, -1.0, 1.0, -1.0]);

    let rows: Vec<&[f64]> = series.windows(3).take(5).collect();
    let fit = LinearFit::fit(&rows, &series[3..]).unwrap();
    // Minimum-norm slopes lie along the window direction.
    common::assert_close(fit.coefficients(), &[-1.0 / 3.0, 1.0 / 3.0, -1.0 / 3.0]);
    assert!(fit.intercept().abs() < common::TOL);
}

#[test]
fn geometric_series_fits_rank_one_windows_without_error() {
    // Windows are 2^t * (1, 2, 4): collinear but not an arithmetic ramp.
    let series: Vec<f64> = (0..8).map(|t| f64::powi(2.0, t)).collect();
    let forecast = ForecastSelector::default()
        .select_and_forecast(&series, 2)
        .unwrap();

    assert_eq!(forecast.len(), 2);
    for (got, want) in forecast.iter().zip([256.0, 512.0]) {
        assert!((got - want).abs() < 1e-9 * want, "got {forecast:?}");
    }
}
