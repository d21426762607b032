pub mod earnings;
pub mod error;
pub mod parser;
pub mod record;
pub mod report;
pub mod totals;
pub mod units;
