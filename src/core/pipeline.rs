use crate::core::window;
use crate::domain::model::Card;
use crate::domain::ports::{CardSink, ConfigProvider, LineSource, Pipeline};
use crate::utils::error::Result;

/// The stdin-to-Anki pipeline: read raw lines, clean them, slide the card
/// window over them, write the records.
pub struct DeckPipeline<S: LineSource, K: CardSink, C: ConfigProvider> {
    source: S,
    sink: K,
    config: C,
}

impl<S: LineSource, K: CardSink, C: ConfigProvider> DeckPipeline<S, K, C> {
    pub fn new(source: S, sink: K, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }
}

impl<S: LineSource, K: CardSink, C: ConfigProvider> Pipeline for DeckPipeline<S, K, C> {
    fn extract(&self) -> Result<Vec<String>> {
        let raw = self.source.read_lines()?;
        let total = raw.len();

        // Take out blank lines; the window logic never sees them.
        let lines: Vec<String> = raw
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        tracing::debug!("Kept {} of {} raw lines after trimming", lines.len(), total);
        Ok(lines)
    }

    fn transform(&self, lines: Vec<String>) -> Result<Vec<Card>> {
        window::generate(&lines, &self.config)
    }

    fn load(&self, cards: Vec<Card>) -> Result<String> {
        self.sink.write_cards(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PoemError;
    use std::sync::{Arc, Mutex};

    struct VecSource {
        lines: Vec<String>,
    }

    impl VecSource {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl LineSource for VecSource {
        fn read_lines(&self) -> Result<Vec<String>> {
            Ok(self.lines.clone())
        }
    }

    #[derive(Clone)]
    struct MemorySink {
        written: Arc<Mutex<Vec<Card>>>,
    }

    impl MemorySink {
        fn new() -> Self {
            Self {
                written: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn cards(&self) -> Vec<Card> {
            self.written.lock().unwrap().clone()
        }
    }

    impl CardSink for MemorySink {
        fn write_cards(&self, cards: &[Card]) -> Result<String> {
            self.written.lock().unwrap().extend_from_slice(cards);
            Ok("memory".to_string())
        }
    }

    struct TestConfig {
        qlines: usize,
        alines: usize,
        flines: usize,
    }

    impl ConfigProvider for TestConfig {
        fn qlines(&self) -> usize {
            self.qlines
        }

        fn alines(&self) -> usize {
            self.alines
        }

        fn flines(&self) -> usize {
            self.flines
        }
    }

    fn single_line_config() -> TestConfig {
        TestConfig {
            qlines: 1,
            alines: 1,
            flines: 1,
        }
    }

    #[test]
    fn extract_trims_and_drops_blank_lines() {
        let source = VecSource::new(&["  first  ", "", "   ", "second", "\t"]);
        let pipeline = DeckPipeline::new(source, MemorySink::new(), single_line_config());

        let lines = pipeline.extract().unwrap();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn blank_lines_do_not_change_the_cards() {
        let with_blanks = VecSource::new(&["A", "", "B", "  ", "C"]);
        let without_blanks = VecSource::new(&["A", "B", "C"]);

        let first = DeckPipeline::new(with_blanks, MemorySink::new(), single_line_config());
        let second = DeckPipeline::new(without_blanks, MemorySink::new(), single_line_config());

        let cards_a = first.transform(first.extract().unwrap()).unwrap();
        let cards_b = second.transform(second.extract().unwrap()).unwrap();
        assert_eq!(cards_a, cards_b);
    }

    #[test]
    fn load_hands_cards_to_the_sink() {
        let sink = MemorySink::new();
        let pipeline = DeckPipeline::new(
            VecSource::new(&["A", "B"]),
            sink.clone(),
            single_line_config(),
        );

        let cards = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let destination = pipeline.load(cards).unwrap();

        assert_eq!(destination, "memory");
        let written = sink.cards();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].question, "A");
        assert_eq!(written[0].answer, "B");
    }

    #[test]
    fn all_blank_input_fails_at_transform() {
        let pipeline = DeckPipeline::new(
            VecSource::new(&["", "   ", "\t\t"]),
            MemorySink::new(),
            single_line_config(),
        );

        let lines = pipeline.extract().unwrap();
        assert!(lines.is_empty());
        assert!(matches!(
            pipeline.transform(lines),
            Err(PoemError::InsufficientInput { available: 0, .. })
        ));
    }
}
