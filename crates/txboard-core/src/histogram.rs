//! Price-range histogram for one month of the current year.

use crate::models::PriceBandCount;
use crate::period::{Month, MonthWindow};
use crate::traits::TransactionStore;
use crate::AppError;

/// A price band, inclusive at both ends. `max == None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceBand {
    pub const fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }

    /// Label in the form `"<min> - <max>"`, or `"<min> - above"` for the
    /// open band.
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{} - {}", self.min, max),
            None => format!("{} - above", self.min),
        }
    }
}

/// The ten fixed bands, in output order.
///
/// Bands after the first start one unit above the previous maximum, so an
/// integral price falls into exactly one band.
pub const PRICE_BANDS: [PriceBand; 10] = [
    PriceBand::new(0.0, Some(100.0)),
    PriceBand::new(101.0, Some(200.0)),
    PriceBand::new(201.0, Some(300.0)),
    PriceBand::new(301.0, Some(400.0)),
    PriceBand::new(401.0, Some(500.0)),
    PriceBand::new(501.0, Some(600.0)),
    PriceBand::new(601.0, Some(700.0)),
    PriceBand::new(701.0, Some(800.0)),
    PriceBand::new(801.0, Some(900.0)),
    PriceBand::new(901.0, None),
];

/// Service producing the per-band record counts.
#[derive(Clone)]
pub struct HistogramService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> HistogramService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Histogram for `month` of the current UTC year.
    pub async fn price_histogram(&self, month: Month) -> Result<Vec<PriceBandCount>, AppError> {
        let window = MonthWindow::current_year(month)?;
        self.price_histogram_for(&window).await
    }

    /// Histogram for an explicit window. Always returns one entry per band.
    pub async fn price_histogram_for(
        &self,
        window: &MonthWindow,
    ) -> Result<Vec<PriceBandCount>, AppError> {
        let counts = self.store.price_band_counts(window, &PRICE_BANDS).await?;

        if counts.len() != PRICE_BANDS.len() {
            return Err(AppError::StoreError(format!(
                "expected {} price band counts, store returned {}",
                PRICE_BANDS.len(),
                counts.len()
            )));
        }

        Ok(PRICE_BANDS
            .iter()
            .zip(counts)
            .map(|(band, count)| PriceBandCount {
                range: band.label(),
                count,
            })
            .collect())
    }
}
