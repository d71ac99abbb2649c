pub mod batch;
pub mod calc;
pub mod demo;
pub mod output;

pub use batch::*;
pub use calc::*;
pub use demo::*;
pub use output::*;
