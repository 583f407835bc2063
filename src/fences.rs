//! Normalization of fence-opener lines that carry a `lang:filename` annotation.
//!
//! Cody emits fences like ` ```python:app.py ` when a snippet belongs to a file.
//! Markdown viewers choke on the suffix, so the filename is moved out of the
//! fence into an italic caption line above it.

const FENCE_MARKER: &str = "```";

/// Rewrite annotated fence openers in `text`.
///
/// A line starting with the fence marker is split at the first colon. A
/// non-empty trailing segment becomes an `*italic*` caption followed by a blank
/// line and a clean ` ```lang ` opener; an empty trailing segment just loses the
/// colon. Every other line, bare-marker closers included, passes through
/// untouched. Single pass, no nested-fence handling, no balance checks.
pub fn reformat_fences(text: &str) -> String {
    let mut formatted = Vec::new();
    for line in text.split('\n') {
        match line.strip_prefix(FENCE_MARKER) {
            Some(rest) => match rest.split_once(':') {
                Some((language, trailing)) => {
                    let filename = trailing.trim();
                    if !filename.is_empty() {
                        formatted.push(format!("*{filename}*\n"));
                    }
                    formatted.push(format!("{FENCE_MARKER}{language}"));
                }
                None => formatted.push(line.to_string()),
            },
            None => formatted.push(line.to_string()),
        }
    }
    formatted.join("\n")
}
