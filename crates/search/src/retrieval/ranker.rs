use faqdesk_common::models::ScoredFaq;

/// Keep matching records, best first, at most `max_results`.
///
/// `sort_by` is stable, so records with equal scores stay in corpus order.
pub fn rank(mut scored: Vec<ScoredFaq>, max_results: usize) -> Vec<ScoredFaq> {
    scored.retain(|s| s.score > 0);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(max_results);
    scored
}
