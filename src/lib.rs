pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::ConsoleReporter;
pub use core::{area::area_of_rectangle, calculator::AreaEngine};
pub use domain::model::{AreaReport, Number, OutputFormat, Rectangle};
pub use utils::error::{AreaError, Result};
