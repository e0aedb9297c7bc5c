//! Last-value baseline forecaster.

/// Naive "tomorrow is today" forecaster.
///
/// Repeats the final observation of the series for every future step. Used
/// directly for short series and as the fallback of
/// [`AutoregressiveForecast`](super::AutoregressiveForecast) when there is
/// not enough history to fit a model.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastValueForecast;

impl LastValueForecast {
    /// Produce a last-value forecast for the given horizon.
    ///
    /// # Arguments
    ///
    /// * `series` - Historical observations in chronological order
    /// * `horizon` - Number of steps to forecast
    ///
    /// # Returns
    ///
    /// A vector of length `horizon`. An empty series yields zeros.
    pub fn forecast(&self, series: &[f64], horizon: usize) -> Vec<f64> {
        let last = series.last().copied().unwrap_or(0.0);
        vec![last; horizon]
    }
}
