//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the form buffers, the results collection and the current mode.

pub mod state;

pub use state::*;
