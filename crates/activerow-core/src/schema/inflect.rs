use crate::{Error, Result};

use std::collections::HashMap;
use std_util::str;

/// Derives table names from model names and back.
///
/// `camelize` and `decamelize` remember every result in both directions so
/// that later calls stay consistent with earlier ones. A conversion that
/// would contradict a remembered inverse fails with an ambiguous inflection
/// error; calling the desired direction first resolves the ambiguity.
#[derive(Debug, Default)]
pub struct Inflector {
    /// snake_case -> CamelCase
    camelized: HashMap<String, String>,

    /// CamelCase -> snake_case
    decamelized: HashMap<String, String>,
}

impl Inflector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pluralize(&self, word: &str) -> String {
        str::pluralize(word)
    }

    pub fn singularize(&self, word: &str) -> String {
        str::singularize(word)
    }

    /// `an_underscored_name` -> `AnUnderscoredName`
    pub fn camelize(&mut self, src: &str) -> Result<String> {
        if let Some(camel) = self.camelized.get(src) {
            return Ok(camel.clone());
        }

        let camel = str::upper_camel_case(src);

        if let Some(existing) = self.decamelized.get(&camel) {
            if existing != src {
                return Err(Error::ambiguous_inflection("camelize", src, camel, existing));
            }
        }

        self.remember(src, &camel);
        Ok(camel)
    }

    /// `ACamelCasedName` -> `a_camel_cased_name`
    ///
    /// Runs of capitals are treated as one acronym word, so `TestABThing`
    /// becomes `test_ab_thing`.
    pub fn decamelize(&mut self, src: &str) -> Result<String> {
        if let Some(snake) = self.decamelized.get(src) {
            return Ok(snake.clone());
        }

        let snake = str::snake_case(src);

        if let Some(existing) = self.camelized.get(&snake) {
            if existing != src {
                return Err(Error::ambiguous_inflection("decamelize", src, snake, existing));
            }
        }

        self.remember(&snake, src);
        Ok(snake)
    }

    fn remember(&mut self, snake: &str, camel: &str) {
        self.camelized.insert(snake.to_string(), camel.to_string());
        self.decamelized.insert(camel.to_string(), snake.to_string());
    }
}
