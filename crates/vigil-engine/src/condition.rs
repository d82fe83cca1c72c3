//! Combinators that build and transform [`Condition`]s.

use crate::error::WaitError;
use crate::lambda::{Condition, Query};
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// Passes exactly when `condition` fails, and fails when it passes.
///
/// Described as `"not <description>"`.
pub fn not<T: ?Sized + Sync + 'static>(condition: Condition<T>) -> Condition<T> {
    let description = format!("not {}", condition);
    not_as(description, condition)
}

/// [`not`] with an explicit description.
pub fn not_as<T: ?Sized + Sync + 'static>(
    description: impl Into<String>,
    condition: Condition<T>,
) -> Condition<T> {
    let description: String = description.into();
    let label = description.clone();

    Condition::new(description, move |entity: &T| {
        let condition = condition.clone();
        let label = label.clone();
        Box::pin(async move {
            match condition.call(entity).await {
                Ok(()) => Err(WaitError::condition_not_matched(label)),
                Err(_) => Ok(()),
            }
        })
    })
}

/// Turn a condition into a query answering `true`/`false`. The query itself
/// never fails.
pub fn as_predicate<T: ?Sized + Sync + 'static>(condition: Condition<T>) -> Query<T, bool> {
    let description = condition.description().to_string();

    Query::new(description, move |entity: &T| {
        let condition = condition.clone();
        Box::pin(async move { Ok(condition.call(entity).await.is_ok()) })
    })
}

/// Lift an async boolean check into a condition, described by the check's
/// type name.
pub fn condition_from_async_query<T, F>(predicate: F) -> Condition<T>
where
    T: ?Sized + Sync + 'static,
    F: for<'a> Fn(&'a T) -> BoxFuture<'a, Result<bool, WaitError>> + Send + Sync + 'static,
{
    throw_if_not(std::any::type_name::<F>(), predicate)
}

/// Lift an async boolean check into a condition with the given description.
/// `false` fails the condition with [`WaitError::ConditionNotMatched`].
pub fn throw_if_not<T, F>(description: impl Into<String>, predicate: F) -> Condition<T>
where
    T: ?Sized + Sync + 'static,
    F: for<'a> Fn(&'a T) -> BoxFuture<'a, Result<bool, WaitError>> + Send + Sync + 'static,
{
    let description: String = description.into();
    let label = description.clone();
    let predicate = Arc::new(predicate);

    Condition::new(description, move |entity: &T| {
        let predicate = Arc::clone(&predicate);
        let label = label.clone();
        Box::pin(async move {
            if predicate(entity).await? {
                Ok(())
            } else {
                Err(WaitError::condition_not_matched(label))
            }
        })
    })
}

/// Run `query` and check its value with `predicate`.
///
/// On mismatch the failure message carries the query description and the
/// actual value, e.g. `actual text: "Loading"`. Domain conditions are built as
/// `lambda(description, throw_if_not_actual(query, predicate))`.
pub fn throw_if_not_actual<T, V, P>(query: Query<T, V>, predicate: P) -> Condition<T>
where
    T: ?Sized + Sync + 'static,
    V: fmt::Debug + Send + 'static,
    P: Fn(&V) -> bool + Send + Sync + 'static,
{
    let description = query.description().to_string();
    let predicate = Arc::new(predicate);

    Condition::new(description, move |entity: &T| {
        let query = query.clone();
        let predicate = Arc::clone(&predicate);
        Box::pin(async move {
            let actual = query.call(entity).await?;
            if predicate(&actual) {
                Ok(())
            } else {
                Err(WaitError::condition_not_matched(format!(
                    "actual {}: {:?}",
                    query, actual
                )))
            }
        })
    })
}
