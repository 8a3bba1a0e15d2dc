// ============================================================
// Layer 3 - Sentence and Example Types
// ============================================================
// A Sentence is just an ordered list of tokens. Tokens are
// strings straight out of the corpus file, and become integer
// vocabulary ids once a caller has looked them up. Everything
// in this crate is generic over the token type so the same
// batching and padding code works at both stages.
//
// Example:
//   source: ["das", "haus"]
//   target: ["<s>", "the", "house", "</s>"]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Start-of-sentence marker prepended to every target-side sentence
pub const START_TOKEN: &str = "<s>";

/// End-of-sentence marker appended to every target-side sentence
pub const END_TOKEN: &str = "</s>";

/// One line of text as an ordered sequence of tokens.
pub type Sentence<T> = Vec<T>;

// ─── Side ─────────────────────────────────────────────────────────────────────
/// Which half of a parallel corpus a file holds.
///
/// Only the target side is wrapped in `<s>` / `</s>`, because the
/// decoder needs explicit start and stop symbols and the encoder does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Source,
    Target,
}

impl Side {
    /// Short name used on the command line and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Source => "src",
            Side::Target => "tgt",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a side name. Accepts both the short (`src`, `tgt`)
/// and long (`source`, `target`) spellings, case-insensitively.
impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "src" | "source" => Ok(Side::Source),
            "tgt" | "target" => Ok(Side::Target),
            other => Err(Error::invalid(format!(
                "unknown corpus side '{other}', expected 'src' or 'tgt'"
            ))),
        }
    }
}

// ─── Example ──────────────────────────────────────────────────────────────────
/// A source sentence and its translation, paired by position in the corpora.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Example<T> {
    pub source: Sentence<T>,
    pub target: Sentence<T>,
}

impl<T> Example<T> {
    pub fn new(source: Sentence<T>, target: Sentence<T>) -> Self {
        Self { source, target }
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }
}

impl<T> From<(Sentence<T>, Sentence<T>)> for Example<T> {
    fn from((source, target): (Sentence<T>, Sentence<T>)) -> Self {
        Self::new(source, target)
    }
}
