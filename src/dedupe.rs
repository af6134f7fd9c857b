//! Post-processing for raw Whisper output.
//!
//! Beam-search decoding can lock into a loop and emit the same sentence
//! dozens of times in a row. [`collapse_repetitions`] bounds those runs to a
//! fixed number of consecutive occurrences.
//!
//! Sentence splitting is a regex heuristic on terminal punctuation, not a
//! real boundary detector: abbreviations, decimal numbers and ellipses may
//! mis-split. That is acceptable here; the goal is bounding decoder loops,
//! not NLP-grade segmentation.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("valid regex"));

/// A maximal run of consecutive, case-insensitively equal sentences.
struct SentenceRun {
    /// Lowercased text of the run's first sentence, used for comparison.
    key: String,
    /// The first occurrences as encountered, capped at the collapse limit.
    kept: Vec<String>,
    count: usize,
}

/// Bound consecutive duplicate sentences to `max_repeats` occurrences.
///
/// The input is split into sentences on `.`, `!` and `?`, keeping the
/// terminator attached; a trailing fragment without a terminator counts as a
/// sentence of its own. Comparison is case-insensitive, and each collapsed
/// run keeps its first `max_repeats` occurrences exactly as encountered, so
/// the original casing of the surviving sentences is preserved.
///
/// Sentences are re-joined with single spaces, which normalizes whatever
/// whitespace separated them in the input.
pub fn collapse_repetitions(text: &str, max_repeats: usize) -> String {
    let mut pieces: Vec<(&str, &str)> = Vec::new();
    let mut last = 0;
    for m in SENTENCE_END.find_iter(text) {
        pieces.push((&text[last..m.start()], m.as_str()));
        last = m.end();
    }
    // Trailing fragment with no terminator.
    pieces.push((&text[last..], ""));

    let mut runs: Vec<SentenceRun> = Vec::new();
    for (body, terminator) in pieces {
        let body = body.trim();
        if body.is_empty() {
            continue;
        }
        let sentence = format!("{body}{terminator}");
        let key = sentence.to_lowercase();
        match runs.last_mut() {
            Some(run) if run.key == key => {
                run.count += 1;
                if run.kept.len() < max_repeats {
                    run.kept.push(sentence);
                }
            }
            _ => runs.push(SentenceRun {
                key,
                kept: vec![sentence],
                count: 1,
            }),
        }
    }

    let mut cleaned: Vec<String> = Vec::new();
    for run in runs {
        let emit = run.count.min(max_repeats);
        cleaned.extend(run.kept.into_iter().take(emit));
    }
    cleaned.join(" ").trim().to_string()
}
