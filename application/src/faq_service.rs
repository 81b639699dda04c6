use domain::models::FaqEntry;
use shared::utils::keyword_overlap;

/// An entry must share at least one listed keyword with the utterance
/// before it counts as a match at all.
const MIN_KEYWORD_OVERLAP: usize = 1;
/// Overlap with the question's own words counts at half weight.
const QUESTION_WORD_WEIGHT: f32 = 0.5;

/// Read-only FAQ lookup by weighted keyword overlap.
pub struct FaqService {
    entries: Vec<FaqEntry>,
}

impl FaqService {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pooled, lowercased, deduplicated keywords of every entry; feeds
    /// the intent classifier's FAQ rule.
    pub fn keyword_pool(&self) -> Vec<String> {
        let mut pool = Vec::new();
        for entry in &self.entries {
            for keyword in &entry.keywords {
                let lowered = keyword.to_lowercase();
                if !pool.contains(&lowered) {
                    pool.push(lowered);
                }
            }
        }
        pool
    }

    /// Best entry for the utterance. Replacement only on a strictly
    /// higher score, so ties keep the first-listed entry.
    pub fn best_match(&self, utterance: &str) -> Option<&FaqEntry> {
        let mut best: Option<(&FaqEntry, f32)> = None;
        for entry in &self.entries {
            let keyword_hits = keyword_overlap(utterance, &entry.keywords);
            if keyword_hits < MIN_KEYWORD_OVERLAP {
                continue;
            }
            let question_words: Vec<&str> = entry.question.split_whitespace().collect();
            let question_hits = keyword_overlap(utterance, &question_words);
            let score = keyword_hits as f32 + question_hits as f32 * QUESTION_WORD_WEIGHT;
            if best.map_or(true, |(_, current)| score > current) {
                best = Some((entry, score));
            }
        }
        best.map(|(entry, _)| entry)
    }
}
