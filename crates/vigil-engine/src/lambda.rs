//! Described async functions over an entity.
//!
//! A [`Lambda`] pairs a human-readable description with an async callable.
//! The description only feeds diagnostics (timeout messages, logs); it never
//! changes what the callable does. [`Query`], [`Command`] and [`Condition`]
//! share this one shape and differ only in intent.

use crate::error::WaitError;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

type RunFn<T, R> = dyn for<'a> Fn(&'a T) -> BoxFuture<'a, Result<R, WaitError>> + Send + Sync;

pub struct Lambda<T: ?Sized, R> {
    description: Arc<str>,
    run: Arc<RunFn<T, R>>,
}

/// Reads a value of type `R` from the entity.
pub type Query<T, R> = Lambda<T, R>;

/// Performs an action on the entity.
pub type Command<T> = Lambda<T, ()>;

/// Passes or fails against the entity.
pub type Condition<T> = Lambda<T, ()>;

impl<T: ?Sized + 'static, R: 'static> Lambda<T, R> {
    /// Wrap an async function.
    ///
    /// ```rust
    /// use vigil_engine::{Query, WaitError};
    ///
    /// let len: Query<String, usize> = Query::new("length", |s: &String| {
    ///     Box::pin(async move { Ok::<_, WaitError>(s.len()) })
    /// });
    /// assert_eq!(len.to_string(), "length");
    /// ```
    pub fn new<F>(description: impl Into<String>, run: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> BoxFuture<'a, Result<R, WaitError>> + Send + Sync + 'static,
    {
        let description: String = description.into();
        Self {
            description: Arc::from(description),
            run: Arc::new(run),
        }
    }

    pub async fn call(&self, entity: &T) -> Result<R, WaitError> {
        (self.run)(entity).await
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Same callable, different label.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        let description: String = description.into();
        Self {
            description: Arc::from(description),
            run: self.run,
        }
    }
}

/// Override the description of `f`.
pub fn lambda<T: ?Sized + 'static, R: 'static>(
    description: impl Into<String>,
    f: Lambda<T, R>,
) -> Lambda<T, R> {
    f.with_description(description)
}

impl<T: ?Sized, R> Clone for Lambda<T, R> {
    fn clone(&self) -> Self {
        Self {
            description: Arc::clone(&self.description),
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: ?Sized, R> fmt::Display for Lambda<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl<T: ?Sized, R> fmt::Debug for Lambda<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lambda")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
