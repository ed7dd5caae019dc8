//! Trend strength from a least-squares fit of closing prices

/// Neutral score when no trend can be measured
const NEUTRAL_TREND: f64 = 0.5;

/// Strength of the trend in a run of closes, in [0, 1]
///
/// The slope of a linear regression of `closes` against their position is
/// normalized by the sample standard deviation of the closes and halved.
pub fn trend_strength(closes: &[f64]) -> f64 {
    // A flat run has zero spread; summing it can leave rounding noise in
    // the mean, so it is caught before the fit.
    if closes.len() < 2 || closes.iter().all(|c| *c == closes[0]) {
        return NEUTRAL_TREND;
    }

    let n = closes.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = closes.iter().sum::<f64>() / n;

    let (covariance, x_variance) = closes
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(cov, var), (i, y)| {
            let dx = i as f64 - x_mean;
            (cov + dx * (y - y_mean), var + dx * dx)
        });
    let slope = covariance / x_variance;

    let variance = closes.iter().map(|y| (y - y_mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std_dev = variance.sqrt();

    if std_dev > 0.0 {
        (slope.abs() / std_dev / 2.0).min(1.0)
    } else {
        NEUTRAL_TREND
    }
}
