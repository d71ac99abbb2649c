pub mod calculator;
pub mod config;
pub mod expression;

pub use calculator::*;
pub use config::*;
pub use expression::*;
