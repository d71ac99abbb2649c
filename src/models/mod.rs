pub mod config;
pub mod evaluation;
pub mod operation;

pub use config::*;
pub use evaluation::*;
pub use operation::*;
