use crate::summarize::segment::Sentence;
use crate::summarize::SummaryStyle;

pub const BULLET: &str = "• ";

const BULLET_MIN: usize = 3;
const BULLET_MAX: usize = 5;

/// Number of sentences a style keeps from `sentence_count` candidates.
///
/// The proportional share truncates toward zero, so a negative percentage
/// falls back to the style minimum and a share above the input size is later
/// clamped by selection.
pub fn target_count(style: SummaryStyle, sentence_count: usize, percentage: i64) -> usize {
    match style {
        SummaryStyle::Smart | SummaryStyle::Quick => proportional(sentence_count, percentage, 1),
        SummaryStyle::Detailed => proportional(sentence_count, percentage, 3),
        SummaryStyle::Bullet => (sentence_count / 3).clamp(BULLET_MIN, BULLET_MAX),
    }
}

fn proportional(sentence_count: usize, percentage: i64, floor: usize) -> usize {
    let share = (sentence_count as i64).saturating_mul(percentage) / 100;
    usize::try_from(share).unwrap_or(0).max(floor)
}

pub fn join_plain(selected: &[&Sentence]) -> String {
    selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn bullets<'a>(selected: impl IntoIterator<Item = &'a Sentence>) -> String {
    selected
        .into_iter()
        .map(|s| format!("{BULLET}{}", s.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Overview: <first> Key findings: <middle> Summary: <last>`; the key findings
/// clause is dropped when there is no middle. Fewer than three sentences are
/// joined plainly.
pub fn detailed(selected: &[&Sentence]) -> String {
    let [first, middle @ .., last] = selected else {
        return join_plain(selected);
    };
    if selected.len() < 3 {
        return join_plain(selected);
    }
    let mut out = format!("Overview: {}", first.text);
    if !middle.is_empty() {
        out.push_str(" Key findings: ");
        out.push_str(&join_plain(middle));
    }
    out.push_str(" Summary: ");
    out.push_str(&last.text);
    out
}
