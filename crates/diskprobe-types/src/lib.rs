pub mod report;
pub mod severity;
pub mod thresholds;
pub mod verdict;

pub use report::*;
pub use severity::*;
pub use thresholds::*;
pub use verdict::*;
