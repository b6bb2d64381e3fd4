// src/aggregate/describe.rs
// =============================================================================
// Description shortening for the repository list.
//
// The rule keeps the first 15 words, but only marks the cut with "..." when
// the description had more than 30 words. A 20-word description therefore
// loses 5 words silently. That is how the viewer has always behaved, so it
// stays that way until someone decides otherwise.
// =============================================================================

pub const NO_DESCRIPTION: &str = "No description available";

const KEPT_WORDS: usize = 15;
const ELLIPSIS_AFTER_WORDS: usize = 30;

pub fn truncate_description(description: &str) -> String {
    let words: Vec<&str> = description.split_whitespace().collect();
    let mut shortened = words
        .iter()
        .take(KEPT_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if words.len() > ELLIPSIS_AFTER_WORDS {
        shortened.push_str("...");
    }
    shortened
}

/// What the list shows under a repository name.
pub fn display_description(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.trim().is_empty() => truncate_description(text),
        _ => NO_DESCRIPTION.to_string(),
    }
}
