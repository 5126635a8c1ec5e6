use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::SummarizeError;

mod format;
mod heuristic;
mod lexical;
mod normalize;
mod segment;
mod select;
mod stopwords;

pub use normalize::normalize;
pub use segment::{split_sentences, Sentence};
pub use stopwords::Stopwords;

/// Trimmed input shorter than this (in characters) is rejected.
pub const MIN_TEXT_CHARS: usize = 50;
pub const DEFAULT_PERCENTAGE: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    #[default]
    Smart,
    Bullet,
    Detailed,
    Quick,
}

impl FromStr for SummaryStyle {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smart" => Ok(Self::Smart),
            "bullet" => Ok(Self::Bullet),
            "detailed" => Ok(Self::Detailed),
            "quick" => Ok(Self::Quick),
            _ => Err(SummarizeError::InvalidStyle),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Smart => "smart",
            Self::Bullet => "bullet",
            Self::Detailed => "detailed",
            Self::Quick => "quick",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub text: String,
    pub style: SummaryStyle,
    pub percentage: i64,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>, style: SummaryStyle, percentage: i64) -> Self {
        Self {
            text: text.into(),
            style,
            percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub summary: String,
}

pub trait Summarizer: Send + Sync {
    fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResult, SummarizeError>;
}

/// Rejects empty or too-short text. Runs before any sentence work.
pub fn validate_text(text: &str) -> Result<&str, SummarizeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SummarizeError::EmptyText);
    }
    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(SummarizeError::TextTooShort);
    }
    Ok(trimmed)
}

/// Extractive summarizer holding the process-wide read-only resources.
///
/// Every operation works on request-local data only, so one engine can serve
/// any number of concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct SummarizationEngine {
    stopwords: Stopwords,
    keywords: Vec<&'static str>,
}

impl Default for SummarizationEngine {
    fn default() -> Self {
        Self::new(Stopwords::english(), heuristic::FACTUAL_KEYWORDS.to_vec())
    }
}

impl SummarizationEngine {
    pub fn new(stopwords: Stopwords, keywords: Vec<&'static str>) -> Self {
        Self {
            stopwords,
            keywords,
        }
    }

    /// Proportional summary ranked by lexical weight, joined as prose.
    pub fn smart(&self, text: &str, percentage: i64) -> Result<String, SummarizeError> {
        let sentences = split_sentences(text);
        if sentences.len() <= 2 {
            return Ok(text.to_string());
        }
        let scores = lexical::sentence_weights(&texts(&sentences), &self.stopwords)?;
        let count = format::target_count(SummaryStyle::Smart, sentences.len(), percentage);
        Ok(format::join_plain(&select::select_top(&sentences, &scores, count)))
    }

    /// Three to five key points, one bullet per line.
    pub fn bullet(&self, text: &str) -> Result<String, SummarizeError> {
        let sentences = split_sentences(text);
        if sentences.len() <= 3 {
            return Ok(format::bullets(&sentences));
        }
        let scores = lexical::sentence_weights(&texts(&sentences), &self.stopwords)?;
        let count = format::target_count(SummaryStyle::Bullet, sentences.len(), 0);
        Ok(format::bullets(select::select_top(&sentences, &scores, count)))
    }

    /// Overview / key findings / summary layout over at least three sentences.
    pub fn detailed(&self, text: &str, percentage: i64) -> Result<String, SummarizeError> {
        let sentences = split_sentences(text);
        if sentences.len() <= 3 {
            return Ok(text.to_string());
        }
        let scores = lexical::sentence_weights(&texts(&sentences), &self.stopwords)?;
        let count = format::target_count(SummaryStyle::Detailed, sentences.len(), percentage);
        Ok(format::detailed(&select::select_top(&sentences, &scores, count)))
    }

    /// Proportional summary ranked by surface cues (numbers, names, reporting verbs).
    pub fn quick(&self, text: &str, percentage: i64) -> Result<String, SummarizeError> {
        let sentences = split_sentences(text);
        if sentences.len() <= 2 {
            return Ok(text.to_string());
        }
        let scores = heuristic::score_sentences(&sentences, &self.stopwords, &self.keywords);
        let count = format::target_count(SummaryStyle::Quick, sentences.len(), percentage);
        Ok(format::join_plain(&select::select_top(&sentences, &scores, count)))
    }
}

impl Summarizer for SummarizationEngine {
    fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResult, SummarizeError> {
        let text = validate_text(&request.text)?;
        let clean = normalize(text);
        let summary = match request.style {
            SummaryStyle::Smart => self.smart(&clean, request.percentage)?,
            SummaryStyle::Bullet => self.bullet(&clean)?,
            SummaryStyle::Detailed => self.detailed(&clean, request.percentage)?,
            SummaryStyle::Quick => self.quick(&clean, request.percentage)?,
        };
        tracing::debug!(
            style = %request.style,
            percentage = request.percentage,
            input_chars = clean.chars().count(),
            summary_chars = summary.chars().count(),
            "summary produced"
        );
        Ok(SummaryResult { summary })
    }
}

fn texts(sentences: &[Sentence]) -> Vec<&str> {
    sentences.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = "Smith reported revenue of 12 million dollars in 2023. \
        Analysts said Smith expects 40 new stores by 2025. \
        Smith confirmed 3 acquisitions across Europe and Asia. \
        The weather was nice. \
        It was a day.";

    fn engine() -> SummarizationEngine {
        SummarizationEngine::default()
    }

    fn request(text: &str, style: SummaryStyle, percentage: i64) -> SummaryRequest {
        SummaryRequest::new(text, style, percentage)
    }

    fn long_text(n: usize) -> String {
        let topics = [
            "Solar capacity in Spain doubled during 2022 thanks to subsidies",
            "Wind farms off Denmark produced record output last winter",
            "Battery prices kept falling as lithium supply expanded",
            "Grid operators warned about congestion in northern regions",
            "Hydrogen pilots remain expensive compared with direct electrification",
            "Consumers installed heat pumps at an unprecedented pace",
            "Coal plants were retired earlier than planned in several markets",
            "Offshore auctions attracted bids from oil majors and utilities",
            "Critics argue permitting reform is moving too slowly",
            "Investment in transmission lines reached 300 billion euros",
            "Nuclear extensions were debated in Belgium and Germany",
            "Rooftop panels now cover many schools in rural Portugal",
        ];
        topics
            .iter()
            .cycle()
            .take(n)
            .enumerate()
            .map(|(i, t)| format!("{t} in phase {i}."))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_subsequence(summary_sentences: &[Sentence], source: &[Sentence]) -> bool {
        let mut it = source.iter();
        summary_sentences
            .iter()
            .all(|s| it.any(|src| src.text == s.text))
    }

    #[test]
    fn style_names_round_trip_and_unknown_is_rejected() {
        for style in [
            SummaryStyle::Smart,
            SummaryStyle::Bullet,
            SummaryStyle::Detailed,
            SummaryStyle::Quick,
        ] {
            assert_eq!(style.to_string().parse::<SummaryStyle>().unwrap(), style);
        }
        assert!(matches!(
            "fancy".parse::<SummaryStyle>(),
            Err(SummarizeError::InvalidStyle)
        ));
        assert!("Smart".parse::<SummaryStyle>().is_err());
    }

    #[test]
    fn empty_and_short_text_fail_for_every_style() {
        let e = engine();
        for style in [
            SummaryStyle::Smart,
            SummaryStyle::Bullet,
            SummaryStyle::Detailed,
            SummaryStyle::Quick,
        ] {
            assert!(matches!(
                e.summarize(&request("   \n ", style, 30)),
                Err(SummarizeError::EmptyText)
            ));
            assert!(matches!(
                e.summarize(&request("Too short. Really.", style, 30)),
                Err(SummarizeError::TextTooShort)
            ));
        }
    }

    #[test]
    fn smart_picks_two_highest_weighted_of_five() {
        let e = engine();
        let clean = normalize(FIVE);
        let sentences = split_sentences(&clean);
        assert_eq!(sentences.len(), 5);
        let scores = lexical::sentence_weights(&texts(&sentences), &e.stopwords).unwrap();
        let mut best: Vec<usize> = (0..5).collect();
        best.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]));
        let mut best = best[..2].to_vec();
        best.sort();
        let expected = format!("{} {}", sentences[best[0]].text, sentences[best[1]].text);

        let out = e.summarize(&request(FIVE, SummaryStyle::Smart, 40)).unwrap();
        assert_eq!(out.summary, expected);
        // the generic tail sentences carry almost no vocabulary
        assert!(!out.summary.contains("It was a day."));
    }

    #[test]
    fn two_sentences_return_normalized_input_for_smart_and_quick() {
        let e = engine();
        let text = "The committee approved the   new budget this morning.\n\
                    Members will vote on amendments next week.";
        for style in [SummaryStyle::Smart, SummaryStyle::Quick] {
            let out = e.summarize(&request(text, style, 30)).unwrap();
            assert_eq!(out.summary, normalize(text));
        }
    }

    #[test]
    fn three_sentences_short_circuit_bullet_and_detailed() {
        let e = engine();
        let text = "Alpha team shipped the release. Beta team fixed the bugs. Gamma team wrote docs.";
        let detailed = e
            .summarize(&request(text, SummaryStyle::Detailed, 30))
            .unwrap();
        assert_eq!(detailed.summary, text);
        let bullet = e.summarize(&request(text, SummaryStyle::Bullet, 30)).unwrap();
        assert_eq!(
            bullet.summary,
            "• Alpha team shipped the release.\n• Beta team fixed the bugs.\n• Gamma team wrote docs."
        );
    }

    #[test]
    fn output_is_deterministic() {
        let e = engine();
        let text = long_text(20);
        for style in [
            SummaryStyle::Smart,
            SummaryStyle::Bullet,
            SummaryStyle::Detailed,
            SummaryStyle::Quick,
        ] {
            let a = e.summarize(&request(&text, style, 35)).unwrap();
            let b = e.summarize(&request(&text, style, 35)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn smart_and_quick_preserve_order_and_grow_with_percentage() {
        let e = engine();
        let text = long_text(24);
        let source = split_sentences(&normalize(&text));
        for style in [SummaryStyle::Smart, SummaryStyle::Quick] {
            let mut last = 0;
            for pct in [-20, 0, 10, 25, 50, 75, 100, 250] {
                let out = e.summarize(&request(&text, style, pct)).unwrap();
                let picked = split_sentences(&out.summary);
                assert!(is_subsequence(&picked, &source), "{style} {pct}");
                assert!(picked.len() >= last, "{style} {pct}");
                assert!(!picked.is_empty());
                last = picked.len();
            }
            assert_eq!(last, source.len());
        }
    }

    #[test]
    fn detailed_layout_keeps_reading_order_and_monotonic_count() {
        let e = engine();
        let text = long_text(20);
        let source = split_sentences(&normalize(&text));
        let mut last = 0;
        for pct in [0, 15, 30, 60, 100] {
            let out = e
                .summarize(&request(&text, SummaryStyle::Detailed, pct))
                .unwrap();
            assert!(out.summary.starts_with("Overview: "));
            assert!(out.summary.contains(" Summary: "));
            let body = out
                .summary
                .replace("Overview: ", "")
                .replace(" Key findings:", "")
                .replace(" Summary:", "");
            let picked = split_sentences(&body);
            assert!(is_subsequence(&picked, &source), "pct {pct}");
            let count = picked.len();
            assert!(count >= 3 && count >= last, "pct {pct}");
            last = count;
        }
    }

    #[test]
    fn bullet_count_stays_between_three_and_five() {
        let e = engine();
        for n in [4, 9, 14, 30] {
            let text = long_text(n);
            for pct in [1, 30, 100] {
                let out = e
                    .summarize(&request(&text, SummaryStyle::Bullet, pct))
                    .unwrap();
                let lines: Vec<&str> = out.summary.lines().collect();
                assert!((3..=5).contains(&lines.len()), "n={n} pct={pct}");
                assert!(lines.iter().all(|l| l.starts_with("• ")));
            }
        }
    }

    #[test]
    fn markup_is_stripped_before_summarizing() {
        let e = engine();
        let text = "<p>The council met on Monday to discuss the plan.</p><p>Nothing was decided.</p>";
        let out = e.summarize(&request(text, SummaryStyle::Smart, 30)).unwrap();
        assert_eq!(
            out.summary,
            "The council met on Monday to discuss the plan.Nothing was decided."
        );
    }

    #[test]
    fn stopword_only_text_is_an_internal_failure_for_lexical_styles() {
        let e = engine();
        let text = "It is what it is. And so it was. They were there then. We are here now.";
        let err = e
            .summarize(&request(text, SummaryStyle::Smart, 30))
            .unwrap_err();
        assert!(matches!(err, SummarizeError::Lexical(_)));
        assert!(!err.is_validation());
        // quick treats the missing vocabulary as a zero contribution
        assert!(e.summarize(&request(text, SummaryStyle::Quick, 30)).is_ok());
    }
}
