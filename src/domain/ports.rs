use crate::domain::model::Card;
use crate::utils::error::Result;

/// Supplies the raw text lines to convert. Implementations read stdin or a
/// file; they never trim or filter, that happens in the pipeline.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// Receives the finished cards. Implementations own the output encoding
/// (tab-separated records) and report back a human-readable destination.
pub trait CardSink {
    fn write_cards(&self, cards: &[Card]) -> Result<String>;
}

impl LineSource for Box<dyn LineSource> {
    fn read_lines(&self) -> Result<Vec<String>> {
        (**self).read_lines()
    }
}

impl CardSink for Box<dyn CardSink> {
    fn write_cards(&self, cards: &[Card]) -> Result<String> {
        (**self).write_cards(cards)
    }
}

pub trait ConfigProvider {
    fn qlines(&self) -> usize;
    fn alines(&self) -> usize;
    fn flines(&self) -> usize;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, lines: Vec<String>) -> Result<Vec<Card>>;
    fn load(&self, cards: Vec<Card>) -> Result<String>;
}
