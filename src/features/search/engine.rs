use crate::data::models::Entry;

pub struct SearchEngine;

impl SearchEngine {
    /// Picks the single best candidate for `query`.
    ///
    /// Candidates are expected in storage order (shortest words first). On equal
    /// scores the shorter word wins, then the earlier candidate.
    pub fn best_match(query: &str, candidates: Vec<Entry>) -> Option<Entry> {
        let query_lower = query.to_lowercase();
        let mut best: Option<(Entry, f32)> = None;

        for entry in candidates {
            let score = SearchEngine::similarity(query, &query_lower, &entry.word);
            let better = match &best {
                None => true,
                Some((current, current_score)) => {
                    score > *current_score
                        || (score == *current_score
                            && entry.word.chars().count() < current.word.chars().count())
                }
            };

            if better {
                best = Some((entry, score));
            }
        }

        best.map(|(entry, _)| entry)
    }

    fn similarity(query: &str, query_lower: &str, word: &str) -> f32 {
        if query.is_empty() || word.is_empty() {
            return 0.0;
        }

        if word == query {
            return 1.0;
        }

        let word_lower = word.to_lowercase();
        if word_lower == query_lower {
            return 0.95;
        }

        let ratio = query_lower.chars().count() as f32 / word_lower.chars().count() as f32;

        if word_lower.starts_with(query_lower) {
            return 0.6 + (ratio * 0.3);
        }

        if word_lower.contains(query_lower) {
            return 0.4 + (ratio * 0.2);
        }

        // Matched only through the database's collation (accents, case folding
        // of non-ASCII letters), rank below every literal match.
        strsim::jaro_winkler(query_lower, &word_lower) as f32 * 0.4
    }
}
