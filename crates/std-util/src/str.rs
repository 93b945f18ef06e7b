//! Case conversion and English inflection for identifiers.
//!
//! All inflection functions operate on `snake_case` identifiers and only
//! inflect the final `_`-separated word, so `some_person` pluralizes to
//! `some_people`.

use heck::{ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn pluralize(src: &str) -> String {
    inflect_last_word(src, |word| pluralizer::pluralize(word, 2, false))
}

pub fn singularize(src: &str) -> String {
    inflect_last_word(src, |word| pluralizer::pluralize(word, 1, false))
}

fn inflect_last_word(src: &str, f: impl FnOnce(&str) -> String) -> String {
    match src.rsplit_once('_') {
        Some((head, word)) if !word.is_empty() => format!("{head}_{}", f(word)),
        _ if src.is_empty() => String::new(),
        _ => f(src),
    }
}
