//! Infrastructure layer providing external service integrations.
//!
//! This module contains the spreadsheet exporter and the fixed settings
//! that control where and how it writes.

pub mod export;
pub mod settings;

pub use export::*;
pub use settings::*;
