//! Predicates over labels and tags.
//!
//! Every "by label" query takes a [`TagMatch`], so exact strings, label sets
//! and compiled patterns all go through the same operation.

use regex::Regex;

/// How a label or tag is tested.
#[derive(Debug, Clone, Copy)]
pub enum TagMatch<'a> {
    /// Matches everything, including an absent value.
    Any,
    /// Matches a value equal to the string.
    Exact(&'a str),
    /// Matches a value equal to any of the strings.
    OneOf(&'a [&'a str]),
    /// Matches a value in which the pattern finds a match (unanchored).
    Pattern(&'a Regex),
}

impl<'a> TagMatch<'a> {
    /// Tests a possibly absent value. Only [`TagMatch::Any`] accepts `None`.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (TagMatch::Any, _) => true,
            (_, None) => false,
            (TagMatch::Exact(expected), Some(value)) => *expected == value,
            (TagMatch::OneOf(options), Some(value)) => options.iter().any(|o| *o == value),
            (TagMatch::Pattern(pattern), Some(value)) => pattern.is_match(value),
        }
    }
}

impl<'a> From<&'a str> for TagMatch<'a> {
    fn from(value: &'a str) -> Self {
        TagMatch::Exact(value)
    }
}

impl<'a> From<&'a Regex> for TagMatch<'a> {
    fn from(pattern: &'a Regex) -> Self {
        TagMatch::Pattern(pattern)
    }
}

impl<'a> From<&'a [&'a str]> for TagMatch<'a> {
    fn from(options: &'a [&'a str]) -> Self {
        TagMatch::OneOf(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_only_matches_any() {
        let re = Regex::new(".*").unwrap();
        assert!(TagMatch::Any.matches(None));
        assert!(!TagMatch::Exact("nsubj").matches(None));
        assert!(!TagMatch::OneOf(&["nsubj"]).matches(None));
        assert!(!TagMatch::Pattern(&re).matches(None));
    }

    #[test]
    fn pattern_is_unanchored() {
        let re = Regex::new("subj").unwrap();
        let m = TagMatch::from(&re);
        assert!(m.matches(Some("nsubj")));
        assert!(m.matches(Some("nsubjpass")));
        assert!(!m.matches(Some("dobj")));
    }

    #[test]
    fn exact_and_set_matching() {
        assert!(TagMatch::from("dobj").matches(Some("dobj")));
        assert!(!TagMatch::from("dobj").matches(Some("iobj")));

        let options: &[&str] = &["dobj", "iobj"];
        let m = TagMatch::from(options);
        assert!(m.matches(Some("iobj")));
        assert!(!m.matches(Some("nsubj")));
    }
}
