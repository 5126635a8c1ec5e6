use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::ENGLISH;

/// A sentence of the request text together with its position in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "gen", "gov", "sen", "rep",
    "lt", "col", "capt", "sgt", "vs", "etc", "e.g", "i.e", "cf", "al", "approx", "inc", "ltd",
    "co", "corp", "dept", "fig", "vol", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "a.m", "p.m",
];

/// Splits normalized text into sentences.
///
/// Boundaries come from UAX#29. A boundary directly after a known abbreviation is
/// re-joined, as is one after a single-letter initial unless the next word is a
/// function word ("grade of A. The class" still splits). Fragments without any
/// alphanumeric character are folded into the preceding sentence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut pending: Option<usize> = None;

    for (start, piece) in text.split_sentence_bound_indices() {
        let end = start + piece.len();

        if !piece.chars().any(char::is_alphanumeric) {
            match (pending, spans.last_mut()) {
                (None, Some(last)) => last.1 = end,
                (None, None) => pending = Some(start),
                (Some(_), _) => {}
            }
            continue;
        }

        let begin = pending.take().unwrap_or(start);

        if ends_with_abbreviation(&text[begin..end], &text[end..]) {
            pending = Some(begin);
            continue;
        }
        spans.push((begin, end));
    }
    if let Some(begin) = pending {
        spans.push((begin, text.len()));
    }

    spans
        .into_iter()
        .map(|(start, end)| text[start..end].trim())
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, s)| Sentence {
            index,
            text: s.to_string(),
        })
        .collect()
}

fn ends_with_abbreviation(segment: &str, following: &str) -> bool {
    let trimmed = segment.trim_end();
    let Some(body) = trimmed.strip_suffix('.') else {
        return false;
    };
    let word = body
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return false;
    }
    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // "I" is the pronoun, not an initial
        return c.is_uppercase() && c != 'I' && !starts_with_function_word(following);
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

fn starts_with_function_word(text: &str) -> bool {
    let next = text
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ENGLISH.contains(&next.as_str())
}
