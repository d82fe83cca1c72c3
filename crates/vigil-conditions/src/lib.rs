//! # vigil-conditions
//!
//! Ready-made conditions for browser tests, built on `vigil-engine`:
//! - [`driver`]: the element / collection / browser contracts conditions read
//! - [`query`] and [`predicate`]: the reads and value checks they combine
//! - [`element`], [`collection`], [`browser`]: the conditions themselves
//! - [`SnapshotHook`]: screenshot + page source on timeout

pub mod browser;
pub mod collection;
pub mod driver;
pub mod element;
pub mod hook;
pub mod predicate;
pub mod query;

pub use driver::{Browser, Collection, DriverError, Element};
pub use hook::SnapshotHook;
