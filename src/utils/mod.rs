pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::figure_filename;
pub use progress::ProgressReporter;
