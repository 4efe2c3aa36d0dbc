use crate::error::ValidationError;
use crate::money::Cents;
use serde::{Deserialize, Serialize};

/// Highest ticket price, scan bound, per-attendee cost or attendance price
/// step accepted anywhere in the model: $10,000.00.
pub const MAX_PRICE: Cents = Cents(1_000_000);

/// Largest per-show fixed cost magnitude: $10,000,000,000.00.
pub const MAX_FIXED_COST: Cents = Cents(1_000_000_000_000);

/// Largest baseline attendance or attendance change magnitude.
pub const MAX_HEADCOUNT: i64 = 100_000;

/// Most prices a single scan may visit.
pub const MAX_SCAN_POINTS: i64 = 10_000;

/// Closed interval of candidate ticket prices, walked at a fixed step.
///
/// Only constructible through [`ScanRange::new`], so every range in
/// circulation has bounds in `0.01..=MAX_PRICE`, a positive step,
/// `low <= high` and at most [`MAX_SCAN_POINTS`] prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanRange {
    low: Cents,
    high: Cents,
    step: Cents,
}

impl ScanRange {
    /// $1.00 through $6.00 in 10-cent increments.
    pub const DEFAULT_LOW: Cents = Cents(100);
    pub const DEFAULT_HIGH: Cents = Cents(600);
    pub const DEFAULT_STEP: Cents = Cents(10);

    pub fn new(low: Cents, high: Cents, step: Cents) -> Result<Self, ValidationError> {
        require_positive("low", low)?;
        require_positive("high", high)?;
        require_positive("step", step)?;
        require_within("low", low, Cents(1), MAX_PRICE)?;
        require_within("high", high, Cents(1), MAX_PRICE)?;
        require_within("step", step, Cents(1), MAX_PRICE)?;
        if low > high {
            return Err(ValidationError::InvertedRange {
                low: low.to_string(),
                high: high.to_string(),
            });
        }

        // Bounds are capped above, so this cannot overflow
        let points = (high - low).value() / step.value() + 1;
        if points > MAX_SCAN_POINTS {
            return Err(ValidationError::TooManyPoints {
                points,
                max: MAX_SCAN_POINTS,
            });
        }
        Ok(Self { low, high, step })
    }

    pub fn low(&self) -> Cents {
        self.low
    }

    pub fn high(&self) -> Cents {
        self.high
    }

    pub fn step(&self) -> Cents {
        self.step
    }

    /// Number of prices the scan visits. `high` is included only when it
    /// falls on a step boundary.
    pub fn len(&self) -> usize {
        ((self.high - self.low).value() / self.step.value()) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate prices in ascending order: `low, low + step, ...` up to `high`.
    pub fn prices(&self) -> impl Iterator<Item = Cents> {
        let (high, step) = (self.high, self.step);
        std::iter::successors(Some(self.low), move |&price| Some(price + step))
            .take_while(move |&price| price <= high)
    }
}

impl Default for ScanRange {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
            step: Self::DEFAULT_STEP,
        }
    }
}

/// Constants of the linear demand and cost model.
///
/// Attendance is `baseline_attendance` at `baseline_price` and moves by
/// `attendance_change` people for every `price_step` the price moves
/// (more people when cheaper). Each show costs `fixed_cost` plus
/// `variable_cost` per attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelParams {
    pub baseline_price: Cents,
    pub baseline_attendance: i64,
    pub attendance_change: i64,
    pub price_step: Cents,
    pub fixed_cost: Cents,
    pub variable_cost: Cents,
}

impl ModelParams {
    /// $5.00 draws 120 people; each 10 cents moves attendance by 15;
    /// $180 per show plus $0.04 per attendee.
    pub const REFERENCE: ModelParams = ModelParams {
        baseline_price: Cents(500),
        baseline_attendance: 120,
        attendance_change: 15,
        price_step: Cents(10),
        fixed_cost: Cents(18_000),
        variable_cost: Cents(4),
    };

    /// Reject constants that would make the attendance slope undefined or
    /// let cent arithmetic overflow for prices up to [`MAX_PRICE`].
    ///
    /// With every bound in place the largest intermediate value is about
    /// `MAX_PRICE * MAX_PRICE * MAX_HEADCOUNT` = 1e17 cents, inside `i64`.
    pub fn validate(self) -> Result<Self, ValidationError> {
        require_positive("price_step", self.price_step)?;
        require_within("price_step", self.price_step, Cents(1), MAX_PRICE)?;
        require_within("baseline_price", self.baseline_price, Cents::ZERO, MAX_PRICE)?;
        require_within("variable_cost", self.variable_cost, -MAX_PRICE, MAX_PRICE)?;
        require_within("fixed_cost", self.fixed_cost, -MAX_FIXED_COST, MAX_FIXED_COST)?;
        require_headcount("baseline_attendance", self.baseline_attendance)?;
        require_headcount("attendance_change", self.attendance_change)?;
        Ok(self)
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::REFERENCE
    }
}

fn require_positive(field: &'static str, amount: Cents) -> Result<(), ValidationError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(ValidationError::NotPositive {
            field,
            value: amount.to_string(),
        })
    }
}

fn require_within(field: &'static str, amount: Cents, min: Cents, max: Cents) -> Result<(), ValidationError> {
    if (min..=max).contains(&amount) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: amount.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}

fn require_headcount(field: &'static str, count: i64) -> Result<(), ValidationError> {
    if (-MAX_HEADCOUNT..=MAX_HEADCOUNT).contains(&count) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: count.to_string(),
            min: (-MAX_HEADCOUNT).to_string(),
            max: MAX_HEADCOUNT.to_string(),
        })
    }
}
