pub mod cli;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_argument_count, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rect-area", version)]
#[command(about = "Calculate the area of a rectangle, or of a square when only one side is given")]
pub struct CliConfig {
    /// Height of a square, or height and width of a rectangle
    #[arg(value_name = "DIMENSION", allow_negative_numbers = true)]
    pub dimensions: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Name the program was invoked as, used in the usage message.
    #[arg(skip = program_name_from(std::env::args_os().next()))]
    pub program: String,
}

/// argv[0] may not be UTF-8; it is only displayed, so a lossy copy is enough.
#[cfg(feature = "cli")]
fn program_name_from(arg0: Option<std::ffi::OsString>) -> String {
    arg0.map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "rect-area".to_string())
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn program_name(&self) -> &str {
        &self.program
    }

    fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_argument_count(&self.program, &self.dimensions)
    }
}
