use serde::{Deserialize, Serialize};

/// Marker joining multiple window lines inside one record field. This is the
/// literal break Anki renders between the lines of a card side.
pub const LINE_BREAK: &str = "<br />";

/// One emitted flashcard: a question window paired with the answer line(s)
/// that follow it in the source text. Multi-line sides are already joined
/// with [`LINE_BREAK`] by the time a `Card` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}
