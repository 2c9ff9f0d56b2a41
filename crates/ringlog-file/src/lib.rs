//! ringlog File - Rotating ring of log files and export assembly

mod assembler;
pub mod log_file;
mod output;
pub mod rotation;

pub use assembler::FileLogAssembler;
pub use log_file::{LogFile, Slot};
pub use output::FileLogOutput;
pub use rotation::{select_log_file, Rotation};

