use crate::money::Cents;
use serde::{Deserialize, Serialize};

/// Profit evaluated at one candidate ticket price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: Cents,
    pub profit: Cents,
}

/// Outcome of a price scan: every evaluated point, ascending by price,
/// and the point with the highest profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub points: Vec<PricePoint>,
    /// First point reaching the maximum profit (lowest price on ties).
    pub best: PricePoint,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(price: i64, profit: i64) -> PricePoint {
        PricePoint { price: Cents(price), profit: Cents(profit) }
    }

    #[test]
    fn test_len_counts_points() {
        let result = ScanResult { points: vec![point(100, 5), point(110, 9)], best: point(110, 9) };
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_serializes_amounts_as_cents() {
        let result = ScanResult { points: vec![point(290, 106_410)], best: point(290, 106_410) };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["best"]["price"], 290);
        assert_eq!(json["best"]["profit"], 106_410);
        assert_eq!(json["points"].as_array().map(Vec::len), Some(1));
    }
}
