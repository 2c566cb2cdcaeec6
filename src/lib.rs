pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{FileSink, FileSource, StdinSource, StdoutSink};
pub use config::CliConfig;
pub use core::engine::{CardEngine, RunSummary};
pub use core::pipeline::DeckPipeline;
pub use core::window::CardWindow;
pub use domain::model::{Card, LINE_BREAK};
pub use domain::ports::{CardSink, ConfigProvider, LineSource, Pipeline};
pub use utils::error::{PoemError, Result};
