//! Shared utility helpers.

pub mod error;

pub use error::{ProfLocError, Result as ProfLocResult};
