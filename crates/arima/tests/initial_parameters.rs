//! Initial-parameter scenarios for chronos-arima.

use approx::assert_relative_eq;
use chronos_arima::{ArimaError, ArimaModel, ModelOrder};
use chronos_series::TimeSeries;

fn series_with_mean(mean: f64, n: usize) -> TimeSeries {
    // Symmetric offsets around `mean` so the sample mean is exact.
    let values: Vec<f64> = (0..n)
        .map(|i| mean + if i % 2 == 0 { 1.5 } else { -1.5 })
        .collect();
    TimeSeries::new(values).unwrap()
}

#[test]
fn arma11_with_constant() {
    let order = ModelOrder::new(1, 0, 1, 0, 0, 0, true).unwrap();
    let model = ArimaModel::new(series_with_mean(5.0, 10), order).unwrap();
    let params = model.initial_parameters();
    assert_eq!(params.as_slice(), &[0.0, 0.0, 5.0]);
    assert_eq!(params.ar(), &[0.0]);
    assert_eq!(params.ma(), &[0.0]);
    assert_eq!(params.intercept(), Some(5.0));
}

#[test]
fn differenced_without_terms_is_degenerate() {
    let order = ModelOrder::new(0, 1, 0, 0, 0, 0, false).unwrap();
    let model = ArimaModel::new(series_with_mean(2.0, 6), order).unwrap();
    assert!(model.initial_parameters().as_slice().is_empty());
    assert!(model.is_degenerate());
    assert_eq!(model.ensure_estimable(), Err(ArimaError::DegenerateModel));
}

#[test]
fn seasonal_without_constant() {
    let order = ModelOrder::new(2, 0, 0, 1, 0, 1, false).unwrap();
    for series in [
        series_with_mean(-7.0, 4),
        series_with_mean(1e6, 31),
        TimeSeries::default(),
    ] {
        let model = ArimaModel::new(series, order).unwrap();
        let params = model.initial_parameters();
        assert_eq!(params.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(params.ar().len(), 2);
        assert!(params.ma().is_empty());
        assert_eq!(params.seasonal_ar().len(), 1);
        assert_eq!(params.seasonal_ma().len(), 1);
        assert_eq!(params.intercept(), None);
    }
}

#[test]
fn sarima_with_constant_seeds_last_slot() {
    let data: Vec<f64> = (1..=12).map(f64::from).collect();
    let order = ModelOrder::new(1, 1, 1, 1, 1, 1, true).unwrap();
    let model = ArimaModel::from_values(&data, order).unwrap();
    let params = model.initial_parameters();
    assert_eq!(params.len(), 5);
    assert!(params.coefficients().iter().all(|&c| c == 0.0));
    assert_relative_eq!(params.as_slice()[4], 6.5, epsilon = 1e-12);
}

#[test]
fn constant_with_empty_series_fails_fast() {
    let order = ModelOrder::new(0, 0, 1, 0, 0, 0, true).unwrap();
    let err = ArimaModel::new(TimeSeries::default(), order).unwrap_err();
    assert_eq!(err, ArimaError::EmptySeries);
}

#[test]
fn construction_is_reproducible() {
    let order = ModelOrder::new(2, 0, 1, 0, 0, 0, true).unwrap();
    let data = [0.3, -1.2, 4.4, 2.0, 0.0, 9.1];
    let a = ArimaModel::from_values(&data, order).unwrap();
    let b = ArimaModel::from_values(&data, order).unwrap();
    assert_eq!(a.initial_parameters(), b.initial_parameters());
}

#[test]
fn models_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|k| {
            std::thread::spawn(move || {
                let order = ModelOrder::new(k, 0, 0, 0, 0, 0, true).unwrap();
                let data = vec![f64::from(k as u32); 8];
                ArimaModel::from_values(&data, order).unwrap()
            })
        })
        .collect();
    for (k, handle) in handles.into_iter().enumerate() {
        let model = handle.join().unwrap();
        let params = model.initial_parameters();
        assert_eq!(params.len(), k + 1);
        assert_eq!(params.intercept(), Some(k as f64));
    }
}
