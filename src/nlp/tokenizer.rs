//! Whitespace tokenization and punctuation stripping

/// Characters deleted wherever they occur inside a token
const INNER_PUNCTUATION: [char; 5] = ['"', ',', '<', '>', '\''];

/// Split a sentence on runs of ASCII whitespace (space, tab, newline,
/// carriage return, vertical tab, form feed).
///
/// Returned tokens are never empty and keep their original order.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    sentence
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}')
}

/// Remove punctuation from a token.
///
/// Quotes, commas and angle brackets are deleted anywhere in the token; any
/// other non-alphanumeric characters are then trimmed from both ends.
pub fn remove_punctuation(token: &str) -> String {
    let cleaned: String = token
        .chars()
        .filter(|c| !INNER_PUNCTUATION.contains(c))
        .collect();

    cleaned
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}
