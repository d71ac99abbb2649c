//! calcpoc - integer calculator used as a CI pipeline fixture
//!
//! A stateless [`core::Calculator`] over `i32` operands, plus a small CLI
//! that evaluates single operations, textual expressions and batch files.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (calc, eval, sum, batch, demo)
//! - **core**: Core functionality (calculator, expression parser, config loading)
//! - **models**: Data structures (config, operation, evaluation)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{ArithmeticError, CalcPocError, Result};
