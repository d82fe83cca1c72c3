//! Conditions over the browser session.

use crate::driver::Browser;
use crate::{predicate, query};
use vigil_engine::{Condition, lambda, throw_if_not_actual};

pub fn has_url<B: Browser + ?Sized + 'static>(expected: &str) -> Condition<B> {
    lambda(
        format!("has url: {}", expected),
        throw_if_not_actual(query::url(), predicate::equals(expected.to_string())),
    )
}

pub fn has_url_containing<B: Browser + ?Sized + 'static>(partial: &str) -> Condition<B> {
    lambda(
        format!("has url containing: {}", partial),
        throw_if_not_actual(query::url(), predicate::includes(partial)),
    )
}

pub fn has_url_matching<B: Browser + ?Sized + 'static>(pattern: &str) -> Condition<B> {
    lambda(
        format!("has url matching: {}", pattern),
        throw_if_not_actual(query::url(), predicate::matches(pattern)),
    )
}

pub fn has_title<B: Browser + ?Sized + 'static>(expected: &str) -> Condition<B> {
    lambda(
        format!("has title: {}", expected),
        throw_if_not_actual(query::title(), predicate::equals(expected.to_string())),
    )
}

pub fn has_title_containing<B: Browser + ?Sized + 'static>(partial: &str) -> Condition<B> {
    lambda(
        format!("has title containing: {}", partial),
        throw_if_not_actual(query::title(), predicate::includes(partial)),
    )
}

pub fn has_tabs_number<B: Browser + ?Sized + 'static>(expected: usize) -> Condition<B> {
    lambda(
        format!("has tabs number: {}", expected),
        throw_if_not_actual(query::tabs_number(), predicate::equals(expected)),
    )
}

pub fn has_tabs_number_greater_than<B: Browser + ?Sized + 'static>(
    expected: usize,
) -> Condition<B> {
    lambda(
        format!("has tabs number greater than: {}", expected),
        throw_if_not_actual(query::tabs_number(), predicate::greater_than(expected)),
    )
}

pub fn has_tabs_number_less_than<B: Browser + ?Sized + 'static>(expected: usize) -> Condition<B> {
    lambda(
        format!("has tabs number less than: {}", expected),
        throw_if_not_actual(query::tabs_number(), predicate::less_than(expected)),
    )
}

/// `script` evaluates to `expected` in the page.
pub fn has_js_returned<B: Browser + ?Sized + 'static>(
    expected: serde_json::Value,
    script: &str,
) -> Condition<B> {
    lambda(
        format!("has js returned: {}", expected),
        throw_if_not_actual(query::js_returned(script), predicate::equals(expected)),
    )
}
