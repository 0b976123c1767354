use once_cell::sync::Lazy;
use regex::Regex;

static STANDARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]|[a-z][A-Z0-9]").expect("valid word boundary pattern"));

static IGNORE_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]|[a-z][A-Z0-9]").expect("valid word boundary pattern"));

/// Decides whether an identifier is made of several words.
///
/// Identifiers without a boundary are treated as a single, already-cased
/// token, which keeps acronyms like `ID` or `URL` intact under the camel and
/// snake conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordBoundary {
    /// Whitespace, `-`, `_`, or a lowercase letter followed by an uppercase
    /// letter or a digit.
    Standard,
    /// Like `Standard`, but `-` does not separate words.
    IgnoreHyphen,
}

impl WordBoundary {
    pub fn is_multiple_words(self, identifier: &str) -> bool {
        let pattern = match self {
            WordBoundary::Standard => &*STANDARD,
            WordBoundary::IgnoreHyphen => &*IGNORE_HYPHEN,
        };

        pattern.is_match(identifier)
    }
}

/// Splits an identifier into its words.
///
/// Any character that is not alphanumeric separates words. Inside a run of
/// alphanumerics a word ends before an uppercase letter that follows a
/// lowercase one, on either side of a run of digits, and before the last
/// capital of an acronym that is followed by a lowercase letter, so
/// `userName2` is `user`, `Name`, `2` and `HTTPServer` is `HTTP`, `Server`.
pub fn split_words(identifier: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for chunk in identifier.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<(usize, char)> = chunk.char_indices().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let (index, current) = chars[i];
            let previous = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, c)| c);

            let starts_word = (previous.is_lowercase() && current.is_uppercase())
                || previous.is_ascii_digit() != current.is_ascii_digit()
                || (previous.is_uppercase()
                    && current.is_uppercase()
                    && next.map_or(false, char::is_lowercase));

            if starts_word {
                words.push(&chunk[start..index]);
                start = index;
            }
        }

        if start < chunk.len() {
            words.push(&chunk[start..]);
        }
    }

    words
}

impl Default for WordBoundary {
    fn default() -> Self {
        WordBoundary::Standard
    }
}
