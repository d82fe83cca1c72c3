//! Synchronous value checks paired with queries by the condition library.

use regex::Regex;

pub fn equals<V>(expected: V) -> impl Fn(&V) -> bool + Send + Sync + 'static
where
    V: PartialEq + Send + Sync + 'static,
{
    move |actual: &V| *actual == expected
}

pub fn includes(expected: impl Into<String>) -> impl Fn(&String) -> bool + Send + Sync + 'static {
    let expected: String = expected.into();
    move |actual: &String| actual.contains(&expected)
}

/// `expected` appears in `actual` as a whole whitespace-separated word.
pub fn includes_word(
    expected: impl Into<String>,
) -> impl Fn(&String) -> bool + Send + Sync + 'static {
    let expected: String = expected.into();
    move |actual: &String| actual.split_whitespace().any(|word| word == expected)
}

pub fn greater_than(expected: usize) -> impl Fn(&usize) -> bool + Send + Sync + 'static {
    move |actual: &usize| *actual > expected
}

pub fn less_than(expected: usize) -> impl Fn(&usize) -> bool + Send + Sync + 'static {
    move |actual: &usize| *actual < expected
}

/// Same length, and every actual item contains the expected item at the same
/// position.
pub fn equals_by_contains_to_array(
    expected: Vec<String>,
) -> impl Fn(&Vec<String>) -> bool + Send + Sync + 'static {
    move |actual: &Vec<String>| {
        actual.len() == expected.len()
            && actual
                .iter()
                .zip(&expected)
                .all(|(actual, expected)| actual.contains(expected.as_str()))
    }
}

pub fn equals_to_array(
    expected: Vec<String>,
) -> impl Fn(&Vec<String>) -> bool + Send + Sync + 'static {
    move |actual: &Vec<String>| *actual == expected
}

/// Regex search: the pattern may match anywhere in the text. Anchor it with
/// `^...$` for a full match. An invalid pattern falls back to a substring check.
pub fn matches(pattern: &str) -> impl Fn(&String) -> bool + Send + Sync + 'static {
    let regex = Regex::new(pattern).ok();
    let pattern = pattern.to_string();
    move |actual: &String| match &regex {
        Some(re) => re.is_match(actual),
        None => actual.contains(&pattern),
    }
}

pub fn is_truthy<V: Truthy + ?Sized>(actual: &V) -> bool {
    actual.is_truthy()
}

/// Loose truthiness as used by attribute and script checks.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for usize {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
            Value::Null => false,
        }
    }
}
