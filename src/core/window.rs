use std::collections::VecDeque;

use crate::domain::model::{Card, LINE_BREAK};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PoemError, Result};

/// The sliding view over the poem: a fixed-size question window followed
/// immediately by a fixed-size answer window. Both start full of empty-string
/// placeholders and keep their exact size for the whole run.
#[derive(Debug)]
pub struct CardWindow {
    questions: VecDeque<String>,
    answers: VecDeque<String>,
}

impl CardWindow {
    pub fn new(qlines: usize, alines: usize) -> Self {
        Self {
            questions: std::iter::repeat(String::new()).take(qlines).collect(),
            answers: std::iter::repeat(String::new()).take(alines).collect(),
        }
    }

    /// Move the card through the poem by one line: the next line joins the
    /// answer, the line falling off the answer becomes the newest question
    /// line, and the oldest question line is dropped. The order of the three
    /// steps is what keeps the two windows adjacent over the source.
    pub fn shift(&mut self, next_line: String) {
        self.answers.push_back(next_line);
        if let Some(evicted) = self.answers.pop_front() {
            self.questions.push_back(evicted);
        }
        self.questions.pop_front();
    }

    /// Snapshot the current windows as one card, joining multi-line sides
    /// with the Anki line break.
    pub fn render(&self) -> Card {
        Card {
            question: join_window(&self.questions),
            answer: join_window(&self.answers),
        }
    }
}

fn join_window(window: &VecDeque<String>) -> String {
    window
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Turn a cleaned line sequence into cards.
///
/// Priming consumes `flines + alines` lines before the first render, so the
/// first card shows `flines` source lines on its front regardless of the
/// steady-state question size. With `flines` smaller than `qlines` the first
/// cards keep placeholder slots, which render as empty segments; that is the
/// documented behavior, not a defect. Running out of lines during priming is
/// the only error; running out afterwards is the normal end of input.
pub fn generate<C: ConfigProvider>(lines: &[String], config: &C) -> Result<Vec<Card>> {
    let priming = config.flines() + config.alines();
    if lines.len() < priming {
        return Err(PoemError::InsufficientInput {
            available: lines.len(),
            required: priming,
        });
    }

    let mut window = CardWindow::new(config.qlines(), config.alines());
    let mut reader = lines.iter().cloned();

    // Fill up the first card: flines question lines plus alines answer lines.
    for _ in 0..priming {
        if let Some(line) = reader.next() {
            window.shift(line);
        }
    }

    let mut cards = Vec::with_capacity(lines.len() - priming + 1);
    loop {
        cards.push(window.render());
        match reader.next() {
            Some(line) => window.shift(line),
            None => break,
        }
    }

    Ok(cards)
}
