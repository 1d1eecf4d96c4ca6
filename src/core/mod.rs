pub mod area;
pub mod calculator;

pub use crate::domain::model::{AreaReport, Number, OutputFormat, Rectangle};
pub use crate::domain::ports::{ConfigProvider, Reporter};
pub use crate::utils::error::Result;
