//! ringlog Core - Shared entry types, configuration, and error handling

pub mod config;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
pub use traits::{FormattedLogOutput, LogAssembler};
pub use types::*;
