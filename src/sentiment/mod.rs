//! Coarse three-way sentiment labelling of citizen feedback.

mod classifier;
mod lexicon;

pub use classifier::{SentimentLabel, SentimentResult, classify, classify_with, tally};
pub use lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};
