use crate::domain::model::{AreaReport, OutputFormat};
use crate::utils::error::Result;

/// Where the raw dimension arguments and output settings come from.
pub trait ConfigProvider {
    fn program_name(&self) -> &str;
    fn dimensions(&self) -> &[String];
    fn output_format(&self) -> OutputFormat;
}

pub trait Reporter {
    fn report(&mut self, report: &AreaReport) -> Result<()>;
}
