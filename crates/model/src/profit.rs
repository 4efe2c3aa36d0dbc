use theater_types::money::Cents;
use theater_types::pricing::ModelParams;

/// Attendance, cost, revenue and profit as pure functions of ticket price.
///
/// The demand curve is linear: attendance moves by `attendance_change`
/// people per `price_step` away from the baseline price, using floor
/// division so odd cent offsets round toward negative infinity. Attendance
/// is not clamped at zero; a high enough price yields negative attendance
/// and the cost/revenue figures follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitModel {
    params: ModelParams,
}

impl ProfitModel {
    /// `params` must pass [`ModelParams::validate`] and prices must stay
    /// within `0..=`[`MAX_PRICE`](theater_types::pricing::MAX_PRICE).
    /// Outside those bounds the cent arithmetic can overflow.
    pub const fn new(params: ModelParams) -> Self {
        Self { params }
    }

    /// The $5.00 / 120 attendees / $180 + $0.04 theater.
    pub const fn reference() -> Self {
        Self::new(ModelParams::REFERENCE)
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Cents the price sits *below* the baseline (negative above it).
    pub fn price_offset_cents(&self, price: Cents) -> i64 {
        (self.params.baseline_price - price).value()
    }

    /// Change in attendance relative to the baseline crowd.
    pub fn attendance_delta(&self, price: Cents) -> i64 {
        let scaled = self.price_offset_cents(price) * self.params.attendance_change;
        scaled.div_euclid(self.params.price_step.value())
    }

    pub fn attendance(&self, price: Cents) -> i64 {
        self.params.baseline_attendance + self.attendance_delta(price)
    }

    pub fn operating_cost(&self, price: Cents) -> Cents {
        self.params.fixed_cost + self.params.variable_cost * self.attendance(price)
    }

    pub fn revenue(&self, price: Cents) -> Cents {
        price * self.attendance(price)
    }

    pub fn profit(&self, price: Cents) -> Cents {
        self.revenue(price) - self.operating_cost(price)
    }
}

impl Default for ProfitModel {
    fn default() -> Self {
        Self::reference()
    }
}

const REFERENCE: ProfitModel = ProfitModel::reference();

/// `500 - price` in cents, for the reference theater.
pub fn price_offset_cents(price: Cents) -> i64 {
    REFERENCE.price_offset_cents(price)
}

/// `floor(3 * offset / 2)`: 15 people per 10 cents.
pub fn attendance_delta(price: Cents) -> i64 {
    REFERENCE.attendance_delta(price)
}

/// `120 + attendance_delta(price)`.
pub fn attendance(price: Cents) -> i64 {
    REFERENCE.attendance(price)
}

/// `$180.00 + $0.04 * attendance(price)`.
pub fn operating_cost(price: Cents) -> Cents {
    REFERENCE.operating_cost(price)
}

/// `price * attendance(price)`.
pub fn revenue(price: Cents) -> Cents {
    REFERENCE.revenue(price)
}

/// `revenue(price) - operating_cost(price)`.
pub fn profit(price: Cents) -> Cents {
    REFERENCE.profit(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(s: &str) -> Cents {
        s.parse().unwrap()
    }

    #[test]
    fn test_attendance_at_baseline() {
        assert_eq!(attendance(dollars("5.00")), 120);
    }

    #[test]
    fn test_attendance_ten_cents_either_side() {
        assert_eq!(attendance(dollars("5.10")), 105);
        assert_eq!(attendance(dollars("4.90")), 135);
    }

    #[test]
    fn test_money_at_baseline() {
        assert_eq!(operating_cost(dollars("5.00")), dollars("184.80"));
        assert_eq!(revenue(dollars("5.00")), dollars("600.00"));
        assert_eq!(profit(dollars("5.00")), dollars("415.20"));
    }

    #[test]
    fn test_price_offset_sign() {
        assert_eq!(price_offset_cents(Cents(500)), 0);
        assert_eq!(price_offset_cents(Cents(420)), 80);
        assert_eq!(price_offset_cents(Cents(600)), -100);
    }

    #[test]
    fn test_odd_offsets_floor_toward_negative_infinity() {
        // +1 cent offset: 3/2 = 1.5 → 1
        assert_eq!(attendance_delta(Cents(499)), 1);
        // -1 cent offset: -3/2 = -1.5 → -2
        assert_eq!(attendance_delta(Cents(501)), -2);
        assert_eq!(attendance(Cents(501)), 118);
        assert_eq!(attendance_delta(Cents(503)), -5);
    }

    #[test]
    fn test_attendance_matches_closed_form() {
        for cents in 0..=1_000i64 {
            let offset = 500 - cents;
            let expected = 120 + (3 * offset).div_euclid(2);
            assert_eq!(attendance(Cents(cents)), expected, "price {cents}¢");
        }
    }

    #[test]
    fn test_profit_is_revenue_minus_cost() {
        for cents in (100..=600).chain([0, 1, 999, 1_000]) {
            let price = Cents(cents);
            assert_eq!(profit(price), revenue(price) - operating_cost(price), "price {price}");
        }
    }

    #[test]
    fn test_attendance_goes_negative_unclamped() {
        // $6.00: 120 - 150 = -30 people
        assert_eq!(attendance(dollars("6.00")), -30);
        assert_eq!(revenue(dollars("6.00")), dollars("-180.00"));
        assert_eq!(operating_cost(dollars("6.00")), dollars("178.80"));
        assert_eq!(profit(dollars("6.00")), dollars("-358.80"));
    }

    #[test]
    fn test_functions_are_idempotent() {
        for cents in [100, 290, 420, 501, 600] {
            let price = Cents(cents);
            assert_eq!(price_offset_cents(price), price_offset_cents(price));
            assert_eq!(attendance_delta(price), attendance_delta(price));
            assert_eq!(attendance(price), attendance(price));
            assert_eq!(operating_cost(price).to_string(), operating_cost(price).to_string());
            assert_eq!(revenue(price).to_string(), revenue(price).to_string());
            assert_eq!(profit(price).to_string(), profit(price).to_string());
        }
    }

    #[test]
    fn test_free_functions_match_reference_model() {
        let model = ProfitModel::default();
        assert_eq!(model.params(), &ModelParams::REFERENCE);
        for cents in [100, 333, 500, 577] {
            assert_eq!(model.profit(Cents(cents)), profit(Cents(cents)));
        }
    }

    #[test]
    fn test_extreme_valid_params_do_not_overflow() {
        use theater_types::pricing::{MAX_FIXED_COST, MAX_HEADCOUNT, MAX_PRICE};

        let params = ModelParams {
            baseline_price: MAX_PRICE,
            baseline_attendance: MAX_HEADCOUNT,
            attendance_change: MAX_HEADCOUNT,
            price_step: Cents(1),
            fixed_cost: -MAX_FIXED_COST,
            variable_cost: -MAX_PRICE,
        }
        .validate()
        .unwrap();
        let model = ProfitModel::new(params);

        // offset 999_999 cents * 100_000 people per cent
        let price = Cents(1);
        let attendance = model.attendance(price);
        assert_eq!(attendance, MAX_HEADCOUNT + 999_999 * MAX_HEADCOUNT);
        assert_eq!(model.profit(price), model.revenue(price) - model.operating_cost(price));

        let far = ProfitModel::new(ModelParams { baseline_price: Cents::ZERO, ..params });
        assert_eq!(far.attendance(MAX_PRICE), MAX_HEADCOUNT - 1_000_000 * MAX_HEADCOUNT);
        assert!(far.profit(MAX_PRICE) < Cents::ZERO);
    }

    #[test]
    fn test_custom_params() {
        // Half the sensitivity: 15 people per 20 cents
        let model = ProfitModel::new(ModelParams {
            price_step: Cents(20),
            ..ModelParams::REFERENCE
        });
        assert_eq!(model.attendance(Cents(480)), 135);
        assert_eq!(model.attendance(Cents(510)), 112); // floor(-150/20) = -8
        assert_eq!(model.attendance(Cents(500)), 120);
    }
}
