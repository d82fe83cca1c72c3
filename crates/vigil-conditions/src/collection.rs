//! Conditions over a collection of elements.

use crate::driver::Collection;
use crate::{predicate, query};
use vigil_engine::{Condition, lambda, throw_if_not_actual};

pub fn has_size<C: Collection + ?Sized + 'static>(expected: usize) -> Condition<C> {
    lambda(
        format!("has size: {}", expected),
        throw_if_not_actual(query::size(), predicate::equals(expected)),
    )
}

pub fn has_size_greater_than<C: Collection + ?Sized + 'static>(expected: usize) -> Condition<C> {
    lambda(
        format!("has size greater than: {}", expected),
        throw_if_not_actual(query::size(), predicate::greater_than(expected)),
    )
}

pub fn has_size_less_than<C: Collection + ?Sized + 'static>(expected: usize) -> Condition<C> {
    lambda(
        format!("has size less than: {}", expected),
        throw_if_not_actual(query::size(), predicate::less_than(expected)),
    )
}

/// Same number of elements, each text containing the expected item at the
/// same position.
pub fn has_texts<C: Collection + ?Sized + 'static>(expected: &[&str]) -> Condition<C> {
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    lambda(
        format!("has texts: {:?}", expected),
        throw_if_not_actual(query::texts(), predicate::equals_by_contains_to_array(expected)),
    )
}

pub fn has_exact_texts<C: Collection + ?Sized + 'static>(expected: &[&str]) -> Condition<C> {
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    lambda(
        format!("has exact texts: {:?}", expected),
        throw_if_not_actual(query::texts(), predicate::equals_to_array(expected)),
    )
}
