//! Teaser extraction for plan items

/// Number of sentences kept in a teaser
const TEASER_SENTENCES: usize = 2;

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

/// Split text into sentences at whitespace runs that follow `.`, `?` or `!`
///
/// Blank pieces are dropped. Abbreviations like "Dr." split too.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() && prev.is_some_and(is_terminal) {
            sentences.push(&text[start..idx]);

            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Extract a short teaser from an item body
///
/// Keeps the first two sentences joined by a single space. A period is
/// appended when the excerpt doesn't already end in `.`, `?` or `!`.
/// Returns an empty string for blank input.
pub fn extract_teaser(text: &str) -> String {
    let sentences = split_sentences(text.trim());
    if sentences.is_empty() {
        return String::new();
    }

    let mut teaser = sentences[..sentences.len().min(TEASER_SENTENCES)].join(" ");
    if !teaser.ends_with(is_terminal) {
        teaser.push('.');
    }
    teaser
}
