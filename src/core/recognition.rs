//! Recognition tracker: raises flags for satisfied conjunctions, never clears them

use tracing::info;

use crate::core::matcher::PhraseMatcher;
use crate::types::{RecognitionFlags, RecognitionKind};

/// Raise flags for every conjunction in `text`.
///
/// Returns the updated flags and the kinds raised for the first time.
pub fn update(
    matcher: &PhraseMatcher,
    flags: RecognitionFlags,
    text: &str,
) -> (RecognitionFlags, Vec<RecognitionKind>) {
    let mut next = flags;
    let mut newly = Vec::new();

    for conj in matcher.conjunctions(text) {
        if next.raise(conj.kind) {
            info!(flag = %conj.kind, "recognition flag raised");
            newly.push(conj.kind);
        }
    }

    (next, newly)
}
