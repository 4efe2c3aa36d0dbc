pub mod profit;
pub mod scanner;

pub use profit::{
    attendance, attendance_delta, operating_cost, price_offset_cents, profit, revenue, ProfitModel,
};
pub use scanner::{scan_prices, scan_profit};
