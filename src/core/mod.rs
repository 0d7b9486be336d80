pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{Assessment, PollutionReading, ReportResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, PollutionSource, Storage};
pub use crate::utils::error::Result;
