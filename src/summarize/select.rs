use crate::summarize::segment::Sentence;

/// Picks the `count` best-scoring sentences and returns them in reading order.
///
/// Ranking is a stable descending sort, so on equal scores the earlier sentence
/// wins. `count` is clamped to the number of sentences.
pub fn select_top<'a>(sentences: &'a [Sentence], scores: &[f64], count: usize) -> Vec<&'a Sentence> {
    debug_assert_eq!(sentences.len(), scores.len());
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]));
    ranked.truncate(count.min(sentences.len()));
    ranked.sort_unstable();
    ranked.into_iter().map(|i| &sentences[i]).collect()
}
