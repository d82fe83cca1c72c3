//! # vigil-engine
//!
//! Polling primitives for "wait until this holds, or fail after a timeout":
//! - [`Wait`]: retries a described async function against one entity
//! - [`condition`]: negation and predicate lifting over [`Condition`]s
//! - [`Lambda`]: async function plus a human-readable description
//! - [`FailureHook`]: diagnostics run when a wait times out

pub mod condition;
pub mod config;
pub mod error;
pub mod hook;
pub mod lambda;
pub mod wait;

pub use condition::{
    as_predicate, condition_from_async_query, not, not_as, throw_if_not, throw_if_not_actual,
};
pub use error::{TimeoutError, WaitError};
pub use hook::{FailureHook, FnHook, TracingHook};
pub use lambda::{Command, Condition, Lambda, Query, lambda};
pub use wait::Wait;
