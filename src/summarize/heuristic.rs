use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::LexicalError;
use crate::summarize::lexical::single_sentence_weight;
use crate::summarize::segment::Sentence;
use crate::summarize::stopwords::Stopwords;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static CAPITALIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+").unwrap());

pub const FACTUAL_KEYWORDS: &[&str] = &[
    "according",
    "reported",
    "announced",
    "confirmed",
    "stated",
    "revealed",
];

const DIGIT_BONUS: f64 = 2.0;
const CAPITALIZED_BONUS: f64 = 0.5;
const KEYWORD_BONUS: f64 = 1.0;

/// Surface-cue score of one sentence, lexical weight excluded.
pub fn cue_score(text: &str, keywords: &[&str]) -> f64 {
    let mut score = 0.0;
    if DIGIT.is_match(text) {
        score += DIGIT_BONUS;
    }
    score += CAPITALIZED.find_iter(text).count() as f64 * CAPITALIZED_BONUS;

    let lowered = text.to_lowercase();
    score += keywords.iter().filter(|k| lowered.contains(*k)).count() as f64 * KEYWORD_BONUS;
    score
}

/// Composite scores for the quick style: surface cues plus the sentence's
/// lexical weight as a one-sentence corpus. A sentence with no vocabulary left
/// after stopword removal gets no lexical contribution.
pub fn score_sentences(sentences: &[Sentence], stopwords: &Stopwords, keywords: &[&str]) -> Vec<f64> {
    sentences
        .iter()
        .map(|s| {
            let lexical = match single_sentence_weight(&s.text, stopwords) {
                Ok(w) => w,
                Err(LexicalError::EmptyVocabulary) => {
                    tracing::trace!(index = s.index, "no vocabulary, lexical weight is zero");
                    0.0
                }
            };
            cue_score(&s.text, keywords) + lexical
        })
        .collect()
}
