//! TF-IDF weighting over the sentences of a single request.
//!
//! Every sentence is a document of a local corpus; nothing is shared between
//! requests. Term weights are `tf * idf` with the smoothed
//! `idf = ln((1 + n) / (1 + df)) + 1`, each sentence row is L2-normalized, and a
//! sentence's salience is the sum of its row.
//!
//! On a one-sentence corpus every idf is exactly 1, so the salience reduces to
//! `sum(tf) / ||tf||`. The quick style relies on that degenerate value as-is.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::LexicalError;
use crate::summarize::stopwords::Stopwords;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Lowercased tokens of at least two word characters, stopwords removed.
pub fn tokenize<'a>(text: &'a str, stopwords: &'a Stopwords) -> impl Iterator<Item = String> + 'a {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect::<Vec<_>>()
        .into_iter()
        .filter(move |t| !stopwords.contains(t))
}

/// One salience score per input sentence, aligned by position.
pub fn sentence_weights<S: AsRef<str>>(
    sentences: &[S],
    stopwords: &Stopwords,
) -> Result<Vec<f64>, LexicalError> {
    // BTreeMap keeps the summation order fixed, so equal inputs give equal bits
    let counts: Vec<BTreeMap<String, usize>> = sentences
        .iter()
        .map(|s| {
            let mut tf = BTreeMap::new();
            for token in tokenize(s.as_ref(), stopwords) {
                *tf.entry(token).or_insert(0usize) += 1;
            }
            tf
        })
        .collect();

    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for tf in &counts {
        for term in tf.keys() {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    if df.is_empty() {
        return Err(LexicalError::EmptyVocabulary);
    }

    let n = counts.len() as f64;
    let idf: BTreeMap<&str, f64> = df
        .iter()
        .map(|(term, d)| (*term, ((1.0 + n) / (1.0 + *d as f64)).ln() + 1.0))
        .collect();

    Ok(counts
        .iter()
        .map(|tf| {
            let weights: Vec<f64> = tf
                .iter()
                .map(|(term, c)| *c as f64 * idf[term.as_str()])
                .collect();
            let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm == 0.0 {
                0.0
            } else {
                weights.iter().map(|w| w / norm).sum()
            }
        })
        .collect())
}

/// Salience of one sentence weighed as a corpus of its own.
pub fn single_sentence_weight(sentence: &str, stopwords: &Stopwords) -> Result<f64, LexicalError> {
    sentence_weights(&[sentence], stopwords).map(|w| w[0])
}
