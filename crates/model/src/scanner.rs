use crate::profit::ProfitModel;
use theater_types::money::Cents;
use theater_types::pricing::ScanRange;
use theater_types::scan::{PricePoint, ScanResult};
use tracing::{debug, info};

/// Brute-force profit scan over a price range.
///
/// Evaluates `evaluate` at every price in `range` (ascending) and keeps the
/// best point seen. Ties keep the earlier, lower price.
///
/// # Arguments
/// * `range` - Candidate prices, `low..=high` by `step`
/// * `evaluate` - Returns the profit at a given price
pub fn scan_prices<F>(range: &ScanRange, evaluate: F) -> ScanResult
where
    F: Fn(Cents) -> Cents,
{
    let evaluate_at = |price: Cents| {
        let point = PricePoint {
            price,
            profit: evaluate(price),
        };
        debug!(price = %point.price, profit = %point.profit, "Evaluated price");
        point
    };

    // A valid range always starts with `low`
    let first = evaluate_at(range.low());
    let mut best = first;
    let mut points = Vec::with_capacity(range.len());
    points.push(first);

    for price in range.prices().skip(1) {
        let point = evaluate_at(price);
        if point.profit > best.profit {
            best = point;
        }
        points.push(point);
    }

    info!(
        points = %points.len(),
        best_price = %best.price,
        best_profit = %best.profit,
        "Price scan complete"
    );

    ScanResult { points, best }
}

/// Scan `range` with the profit function of `model`.
pub fn scan_profit(range: &ScanRange, model: &ProfitModel) -> ScanResult {
    scan_prices(range, |price| model.profit(price))
}
