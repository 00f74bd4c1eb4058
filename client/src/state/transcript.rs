#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// The chat transcript: every entry ever appended, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscriptState {
    pub entries: Vec<TranscriptEntry>,
    next_id: u64,
}

impl TranscriptState {
    /// Append an entry and return its id.
    pub fn push(&mut self, sender: Sender, body: EntryBody) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TranscriptEntry { id, sender, body });
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single labelled transcript line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Stable key for keyed rendering.
    pub id: u64,
    pub sender: Sender,
    pub body: EntryBody,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    You,
    Assistant,
    Error,
}

impl Sender {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Assistant => "Assistant",
            Self::Error => "Error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryBody {
    /// Rendered as an escaped text node.
    Text(String),
    /// Already-rendered markdown, injected as HTML.
    Html(String),
}

/// Text currently typed into the chat form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub draft: String,
}
