use heck::{CamelCase, MixedCase, SnakeCase};
use namecase_core::Case;

use crate::boundary::{split_words, WordBoundary};

// heck only separates words on non-alphanumerics here; the boundaries inside
// each word are already decided by `split_words`.
fn spaced_words(value: &str) -> String {
    split_words(value).join(" ")
}

/// Converts `value` to PascalCase. Single words are converted too, so `id`
/// becomes `Id`.
pub fn pascal_case(value: &str) -> String {
    spaced_words(value).to_camel_case()
}

/// Converts a multi-word `value` to camelCase and leaves single words as
/// they are.
pub fn camel_case_for_multiple_words(value: &str, boundary: WordBoundary) -> String {
    if boundary.is_multiple_words(value) {
        spaced_words(value).to_mixed_case()
    } else {
        value.to_owned()
    }
}

/// Converts a multi-word `value` to snake_case and leaves single words as
/// they are.
pub fn snake_case_for_multiple_words(value: &str, boundary: WordBoundary) -> String {
    if boundary.is_multiple_words(value) {
        spaced_words(value).to_snake_case()
    } else {
        value.to_owned()
    }
}

/// Camel-cases a plain identifier, keeping a leading capital.
///
/// Unlike the tree conversion there is no word gate: `FooBar` stays
/// `FooBar`, `foo_bar` becomes `fooBar` and `Foo_bar` becomes `FooBar`.
pub fn to_identifier_camel_case(value: &str) -> String {
    match value.chars().next() {
        Some(first) if first.is_uppercase() => pascal_case(value),
        _ => spaced_words(value).to_mixed_case(),
    }
}

/// Applies the naming convention `case` to `value`.
pub fn apply_case(case: Case, value: &str, boundary: WordBoundary) -> String {
    match case {
        Case::Camel => camel_case_for_multiple_words(value, boundary),
        Case::Snake => snake_case_for_multiple_words(value, boundary),
        Case::Pascal => pascal_case(value),
    }
}
