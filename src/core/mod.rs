pub mod engine;
pub mod pipeline;
pub mod window;

pub use crate::domain::model::{Card, LINE_BREAK};
pub use crate::domain::ports::{CardSink, ConfigProvider, LineSource, Pipeline};
pub use crate::utils::error::Result;
