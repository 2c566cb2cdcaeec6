use crate::domain::model::Card;
use crate::domain::ports::{CardSink, LineSource};
use crate::utils::error::Result;
use std::fs;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for line in io::stdin().lock().lines() {
            lines.push(line?);
        }
        Ok(lines)
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl CardSink for StdoutSink {
    fn write_cards(&self, cards: &[Card]) -> Result<String> {
        let stdout = io::stdout();
        write_records(stdout.lock(), cards)?;
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: String,
}

impl FileSink {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl CardSink for FileSink {
    fn write_cards(&self, cards: &[Card]) -> Result<String> {
        let file = fs::File::create(&self.path)?;
        write_records(file, cards)?;
        Ok(self.path.clone())
    }
}

/// Anki's import format: one record per line, question and answer separated
/// by a single tab, nothing quoted.
fn write_records<W: Write>(writer: W, cards: &[Card]) -> Result<()> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    for card in cards {
        tsv.write_record([card.question.as_str(), card.answer.as_str()])?;
    }
    tsv.flush()?;
    Ok(())
}
