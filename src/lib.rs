//! Data preparation for sequence-to-sequence training.
//!
//! The pipeline runs in three steps:
//!
//! ```text
//!   corpus.txt  --read_corpus-->  Vec<Sentence>
//!   (src, tgt)  --batch_iter-->   Batch, Batch, ...   (sorted by source length)
//!   Batch       --pad_sents-->    rectangular Vec<Vec<T>>
//! ```

pub mod application;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

pub use data::batcher::{batch_iter, Batch, BatchIter};
pub use data::padder::pad_sents;
pub use data::reader::{pair_corpora, read_corpus, read_corpus_from, CorpusReader};
pub use domain::example::{Example, Sentence, Side, END_TOKEN, START_TOKEN};
pub use error::{Error, Result};
