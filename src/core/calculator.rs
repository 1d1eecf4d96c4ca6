use crate::core::area::area_of_rectangle;
use crate::core::{AreaReport, ConfigProvider, Reporter};
use crate::utils::error::Result;
use crate::utils::validation::{parse_dimension, validate_area, validate_argument_count};

/// Runs one invocation: validate argument count, parse, compute, report.
pub struct AreaEngine<C: ConfigProvider, R: Reporter> {
    config: C,
    reporter: R,
}

impl<C: ConfigProvider, R: Reporter> AreaEngine<C, R> {
    pub fn new(config: C, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn compute(&self) -> Result<AreaReport> {
        let dimensions = self.config.dimensions();
        validate_argument_count(self.config.program_name(), dimensions)?;

        let height = parse_dimension("height", &dimensions[0])?;
        let width = match dimensions.get(1) {
            Some(raw) => Some(parse_dimension("width", raw)?),
            None => None,
        };
        tracing::debug!("Parsed height={} width={:?}", height, width);

        let area = area_of_rectangle(height, width);
        validate_area(area)?;
        let report = AreaReport {
            height,
            width: width.unwrap_or(height),
            area,
        };
        tracing::debug!("Computed area: {}", report.area);

        Ok(report)
    }

    pub fn run(&mut self) -> Result<AreaReport> {
        let report = self.compute()?;
        self.reporter.report(&report)?;
        tracing::info!("✅ Reported area {}", report.area);
        Ok(report)
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
