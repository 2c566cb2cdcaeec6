use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Outcome of a successful run, for the driver's final log line.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub card_count: usize,
    pub destination: String,
}

pub struct CardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::debug!("Reading source lines...");
        let lines = self.pipeline.extract()?;
        tracing::info!("Read {} non-blank lines", lines.len());

        let cards = self.pipeline.transform(lines)?;
        tracing::info!("Generated {} cards", cards.len());

        let card_count = cards.len();
        let destination = self.pipeline.load(cards)?;
        tracing::debug!("Cards written to: {}", destination);

        Ok(RunSummary {
            card_count,
            destination,
        })
    }
}
