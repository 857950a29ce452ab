// Date collection and role assignment (birth / issue / expiry)
use log::debug;

use crate::models::{DateCandidate, DateRole, ExtractedFields};
use crate::processing::patterns::DATE_PATTERNS;

/// Characters of context read before a date match.
pub const CONTEXT_BEFORE: usize = 20;
/// Characters of context read after a date match.
pub const CONTEXT_AFTER: usize = 50;

const DATE_KEYWORDS: &[(&str, DateRole)] = &[
    ("birth", DateRole::Birth),
    ("born", DateRole::Birth),
    ("dob", DateRole::Birth),
    ("expir", DateRole::Expiry),
    ("valid", DateRole::Expiry),
    ("issue", DateRole::Issue),
    ("delivered", DateRole::Issue),
];

pub struct DateDisambiguator;

impl DateDisambiguator {
    /// Every date-shaped substring in text order. Where two patterns claim
    /// overlapping spans, the one earlier in the table keeps it.
    pub fn collect_dates(text: &str) -> Vec<DateCandidate> {
        let mut candidates: Vec<DateCandidate> = Vec::new();
        for pattern in DATE_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                let overlaps = candidates
                    .iter()
                    .any(|c| m.start() < c.end && c.start < m.end());
                if !overlaps {
                    candidates.push(DateCandidate {
                        start: m.start(),
                        end: m.end(),
                        text: m.as_str().to_string(),
                        role: None,
                    });
                }
            }
        }
        candidates.sort_by_key(|c| c.start);
        candidates
    }

    /// Guess the role of `candidates[index]` from nearby keywords. The label
    /// closest before the date wins; otherwise the first one after it.
    /// Context never reaches past a neighbouring date.
    pub fn classify(text: &str, candidates: &[DateCandidate], index: usize) -> Option<DateRole> {
        let candidate = &candidates[index];
        let floor = if index > 0 { candidates[index - 1].end } else { 0 };
        let ceiling = candidates
            .get(index + 1)
            .map_or(text.len(), |next| next.start);

        let before = window_before(text, floor, candidate.start, CONTEXT_BEFORE).to_lowercase();
        let closest_before = DATE_KEYWORDS
            .iter()
            .filter_map(|(keyword, role)| before.rfind(keyword).map(|pos| (pos, *role)))
            .max_by_key(|(pos, _)| *pos);
        if let Some((_, role)) = closest_before {
            return Some(role);
        }

        let after = window_after(text, candidate.end, ceiling, CONTEXT_AFTER).to_lowercase();
        DATE_KEYWORDS
            .iter()
            .filter_map(|(keyword, role)| after.find(keyword).map(|pos| (pos, *role)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, role)| role)
    }

    /// Collect, classify and assign. Returned candidates carry the role they
    /// were finally given; `None` means the date was not used.
    pub fn resolve(text: &str) -> Vec<DateCandidate> {
        let mut candidates = Self::collect_dates(text);
        let guesses: Vec<Option<DateRole>> = (0..candidates.len())
            .map(|i| Self::classify(text, &candidates, i))
            .collect();

        let mut filled: Vec<DateRole> = Vec::new();
        let mut unclassified: Vec<usize> = Vec::new();
        for (i, guess) in guesses.into_iter().enumerate() {
            match guess {
                Some(role) if !filled.contains(&role) => {
                    debug!("date '{}' classified as {:?}", candidates[i].text, role);
                    filled.push(role);
                    candidates[i].role = Some(role);
                }
                Some(role) => {
                    debug!("date '{}' ignored, {:?} already set", candidates[i].text, role);
                }
                None => unclassified.push(i),
            }
        }

        // Positional fallback over distinct strings not already used
        let mut seen: Vec<String> = candidates
            .iter()
            .filter(|c| c.role.is_some())
            .map(|c| c.text.clone())
            .collect();
        for i in unclassified {
            if seen.contains(&candidates[i].text) {
                continue;
            }
            seen.push(candidates[i].text.clone());
            let open = DateRole::FALLBACK_ORDER
                .iter()
                .copied()
                .find(|role| !filled.contains(role));
            if let Some(role) = open {
                debug!("date '{}' assigned by position to {:?}", candidates[i].text, role);
                filled.push(role);
                candidates[i].role = Some(role);
            }
        }
        candidates
    }

    /// Fill the date fields of `fields` from `text`.
    pub fn assign_dates(text: &str, fields: &mut ExtractedFields) {
        for candidate in Self::resolve(text) {
            if let Some(role) = candidate.role {
                let slot = fields.date_slot_mut(role);
                if slot.is_none() {
                    *slot = Some(candidate.text);
                }
            }
        }
    }
}

fn window_before(text: &str, floor: usize, start: usize, chars: usize) -> &str {
    let head = &text[floor..start];
    let from = head
        .char_indices()
        .rev()
        .nth(chars.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    &head[from..]
}

fn window_after(text: &str, end: usize, ceiling: usize, chars: usize) -> &str {
    let tail = &text[end..ceiling];
    let to = tail.char_indices().nth(chars).map_or(tail.len(), |(i, _)| i);
    &tail[..to]
}
