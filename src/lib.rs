//! FormulaSpeed - Average Speed Calculator
//!
//! A terminal form that turns distance and time into average speed,
//! keeps every result in a table, and exports the table to a spreadsheet.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
