// ============================================================
// Layer 4 - Corpus Reader
// ============================================================
// Reads a plain text corpus where every line is one sentence
// and tokens are separated by single spaces.
//
// Target-side sentences are wrapped in <s> ... </s>:
//   "hello world"  (src)  -> ["hello", "world"]
//   "hello world"  (tgt)  -> ["<s>", "hello", "world", "</s>"]
//
// Line handling:
//   - surrounding whitespace (including a Windows \r) is stripped
//   - a blank line is an empty sentence, so line numbers stay aligned
//     with the other side of the parallel corpus
//   - the final newline of the file never adds an extra sentence
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::domain::example::{Example, Sentence, Side, END_TOKEN, START_TOKEN};
use crate::domain::traits::SentenceSource;
use crate::error::{Error, Result};

/// A corpus file on disk together with the side it belongs to.
/// Implements SentenceSource so the application layer can load it
/// without knowing about files.
#[derive(Debug, Clone)]
pub struct CorpusReader {
    path: PathBuf,
    side: Side,
}

impl CorpusReader {
    pub fn new(path: impl Into<PathBuf>, side: Side) -> Self {
        Self { path: path.into(), side }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

impl SentenceSource for CorpusReader {
    fn load_sentences(&self) -> Result<Vec<Sentence<String>>> {
        read_corpus(&self.path, self.side)
    }
}

/// Read every line of `path` into a tokenized sentence.
pub fn read_corpus(path: impl AsRef<Path>, side: Side) -> Result<Vec<Sentence<String>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    let data = read_corpus_from(BufReader::new(file), side)
        .map_err(|e| match e {
            // Attach the real path to errors raised mid-read
            Error::Io { source, .. } => Error::io(path, source),
            other => other,
        })?;

    tracing::debug!(
        "Read {} {} sentences from '{}'",
        data.len(),
        side,
        path.display()
    );
    Ok(data)
}

/// Same parsing as [`read_corpus`], over any buffered reader.
pub fn read_corpus_from<R: BufRead>(reader: R, side: Side) -> Result<Vec<Sentence<String>>> {
    let mut data = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::io("<reader>", e))?;
        data.push(tokenize_line(&line, side));
    }

    Ok(data)
}

/// Zip two corpora line by line into examples.
/// Fails if the two sides do not have the same number of sentences.
pub fn pair_corpora(
    src: Vec<Sentence<String>>,
    tgt: Vec<Sentence<String>>,
) -> Result<Vec<Example<String>>> {
    if src.len() != tgt.len() {
        return Err(Error::invalid(format!(
            "source corpus has {} sentences but target corpus has {}",
            src.len(),
            tgt.len()
        )));
    }

    Ok(src.into_iter().zip(tgt).map(Example::from).collect())
}

fn tokenize_line(line: &str, side: Side) -> Sentence<String> {
    // Empty pieces come from blank lines or doubled spaces; neither is a token
    let words = line
        .trim()
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string);

    match side {
        Side::Source => words.collect(),
        Side::Target => std::iter::once(START_TOKEN.to_string())
            .chain(words)
            .chain(std::iter::once(END_TOKEN.to_string()))
            .collect(),
    }
}
