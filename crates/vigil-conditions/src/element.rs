//! Conditions over a single element.
//!
//! Negated pairs are built with [`not_as`] from their positive form, so
//! `is_hidden` is always the exact complement of `is_visible`.

use crate::driver::Element;
use crate::{predicate, query};
use vigil_engine::{Condition, lambda, not_as, throw_if_not_actual};

pub fn is_visible<E: Element + ?Sized + 'static>() -> Condition<E> {
    lambda(
        "is visible",
        throw_if_not_actual(query::visible(), predicate::is_truthy),
    )
}

pub fn is_hidden<E: Element + ?Sized + 'static>() -> Condition<E> {
    not_as("is hidden", is_visible())
}

pub fn is_present<E: Element + ?Sized + 'static>() -> Condition<E> {
    lambda(
        "is present",
        throw_if_not_actual(query::present(), predicate::is_truthy),
    )
}

pub fn is_absent<E: Element + ?Sized + 'static>() -> Condition<E> {
    not_as("is absent", is_present())
}

pub fn is_enabled<E: Element + ?Sized + 'static>() -> Condition<E> {
    lambda(
        "is enabled",
        throw_if_not_actual(query::enabled(), predicate::is_truthy),
    )
}

pub fn is_disabled<E: Element + ?Sized + 'static>() -> Condition<E> {
    not_as("is disabled", is_enabled())
}

pub fn is_focused<E: Element + ?Sized + 'static>() -> Condition<E> {
    lambda(
        "is focused",
        throw_if_not_actual(query::focused(), predicate::is_truthy),
    )
}

pub fn has_exact_text<E: Element + ?Sized + 'static>(expected: &str) -> Condition<E> {
    lambda(
        format!("has exact text: {}", expected),
        throw_if_not_actual(query::text(), predicate::equals(expected.to_string())),
    )
}

/// Text contains `expected`.
pub fn has_text<E: Element + ?Sized + 'static>(expected: &str) -> Condition<E> {
    lambda(
        format!("has text: {}", expected),
        throw_if_not_actual(query::text(), predicate::includes(expected)),
    )
}

pub fn has_no_text<E: Element + ?Sized + 'static>() -> Condition<E> {
    lambda(
        "has no text",
        throw_if_not_actual(query::text(), |actual: &String| actual.trim().is_empty()),
    )
}

pub fn has_attribute<E: Element + ?Sized + 'static>(name: &str) -> Condition<E> {
    lambda(
        format!("has attribute: {}", name),
        throw_if_not_actual(query::attribute(name), Option::is_some),
    )
}

pub fn has_attribute_with_value<E: Element + ?Sized + 'static>(
    name: &str,
    value: &str,
) -> Condition<E> {
    let check = predicate::equals(value.to_string());
    lambda(
        format!("has attribute '{}' with value '{}'", name, value),
        throw_if_not_actual(query::attribute(name), move |actual: &Option<String>| {
            actual.as_ref().is_some_and(&check)
        }),
    )
}

pub fn has_attribute_with_value_containing<E: Element + ?Sized + 'static>(
    name: &str,
    partial: &str,
) -> Condition<E> {
    let check = predicate::includes(partial);
    lambda(
        format!("has attribute '{}' with value containing '{}'", name, partial),
        throw_if_not_actual(query::attribute(name), move |actual: &Option<String>| {
            actual.as_ref().is_some_and(&check)
        }),
    )
}

pub fn has_exact_value<E: Element + ?Sized + 'static>(expected: &str) -> Condition<E> {
    lambda(
        format!("has exact value: {}", expected),
        throw_if_not_actual(query::value(), predicate::equals(expected.to_string())),
    )
}

/// Value contains `expected`.
pub fn has_value<E: Element + ?Sized + 'static>(expected: &str) -> Condition<E> {
    lambda(
        format!("has value: {}", expected),
        throw_if_not_actual(query::value(), predicate::includes(expected)),
    )
}

pub fn has_css_class<E: Element + ?Sized + 'static>(class: &str) -> Condition<E> {
    let check = predicate::includes_word(class);
    lambda(
        format!("has css class: {}", class),
        throw_if_not_actual(query::attribute("class"), move |actual: &Option<String>| {
            actual.as_ref().is_some_and(&check)
        }),
    )
}
