pub mod catalog;
pub mod commands;
pub mod contracts;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod icons;
pub mod series;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{CoreError, CoreResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
