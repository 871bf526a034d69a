use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Degraded single-point result for empty input
pub const EMPTY_INPUT_NOTICE: &str = "No usable content was provided to extract points from.";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Point extraction options
#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    /// Pad short results with ". "-separated fragments of the cleaned text
    pub pad_with_fragments: bool,

    /// Token budget per point for the no-sentence fallback
    pub tokens_per_point: usize,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            pad_with_fragments: true,
            tokens_per_point: 15,
        }
    }
}

/// Per-request point count policy
#[derive(Debug, Clone, Copy)]
pub enum PointBudget {
    /// Always this many points
    Fixed(usize),

    /// Sampled uniformly from min..=max
    Range(usize, usize),
}

impl PointBudget {
    /// Resolve the budget to a concrete count, always at least 1
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            Self::Fixed(n) => n.max(1),
            Self::Range(min, max) => {
                let min = min.max(1);
                let max = max.max(min);
                rng.gen_range(min..=max)
            }
        }
    }
}

/// Collapse all whitespace runs to a single space and trim the ends
///
/// Non-whitespace characters are never altered, so embedded hyphens in
/// numeric ranges ("2019-20") survive. Idempotent.
pub fn clean_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Normalized form of a point, used only for duplicate detection
///
/// Case-folded, whitespace-collapsed, trailing sentence terminators
/// dropped so that the ". "-split padding fragments cannot re-add a
/// sentence already in the list.
pub fn normalized_key(text: &str) -> String {
    clean_whitespace(text)
        .to_lowercase()
        .trim_end_matches(['.', '!', '?'])
        .to_string()
}

/// Turn raw text into at most `max_points` deduplicated points
///
/// Split order: explicit line breaks, then sentence boundaries, then a
/// single candidate of the first `max_points * tokens_per_point` tokens.
/// The first occurrence's original text wins on duplicates. Empty input
/// yields a single notice point instead of an error; under-fill after
/// padding is returned as-is.
pub fn extract_points(raw: &str, max_points: usize, options: &NormalizerOptions) -> Vec<String> {
    let clean = clean_whitespace(raw);
    if clean.is_empty() {
        return vec![EMPTY_INPUT_NOTICE.to_string()];
    }

    let candidates = if raw.contains('\n') {
        raw.lines()
            .map(clean_whitespace)
            .filter(|line| !line.is_empty())
            .collect()
    } else if count_terminators(&clean) >= 2 {
        split_sentences(&clean)
    } else {
        // Not enough sentence structure to split on
        debug!("Falling back to token-count candidate");
        let budget = max_points * options.tokens_per_point;
        let head: Vec<&str> = clean.split_whitespace().take(budget).collect();
        vec![head.join(" ")]
    };

    let mut seen = HashSet::new();
    let mut points = Vec::new();
    for candidate in candidates {
        push_unique(&mut points, &mut seen, candidate);
    }

    if options.pad_with_fragments && points.len() < max_points {
        for fragment in clean.split(". ") {
            if points.len() >= max_points {
                break;
            }
            push_unique(&mut points, &mut seen, clean_whitespace(fragment));
        }
    }

    points.truncate(max_points);

    debug!("Extracted {} points (budget {})", points.len(), max_points);

    points
}

/// Append `candidate` unless its normalized form was already seen
fn push_unique(points: &mut Vec<String>, seen: &mut HashSet<String>, candidate: String) {
    let key = normalized_key(&candidate);
    if key.is_empty() {
        return;
    }
    if seen.insert(key) {
        points.push(candidate);
    }
}

/// Count sentence terminators ('.', '!', '?') followed by whitespace or
/// ending the text
fn count_terminators(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            match chars.peek() {
                Some(&(_, next)) if next.is_whitespace() => count += 1,
                None => count += 1,
                _ => {}
            }
        }
    }
    count
}

/// Split cleaned text on sentence boundaries, keeping terminators
///
/// A boundary is '.', '!' or '?' followed by whitespace. Any trailing text
/// without a terminator is kept as a final candidate.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    let sentence = text[start..=i].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    start = i + c.len_utf8();
                }
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
