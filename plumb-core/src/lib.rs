//! Core traits and types for the Plumb search crates.
//!
//! This crate defines the abstractions that the solvers build on:
//!
//! - [`Criterion`] — the univariate objective being minimized
//! - [`Sample`] — one criterion evaluation plus its cancellation signal
//! - [`CancelPoll`] — cooperative cancellation, queried between evaluations
//!
//! Closures work directly: any `FnMut(f64) -> f64` (or `-> Sample`) is a
//! [`Criterion`], and any `FnMut() -> bool` is a [`CancelPoll`]. For the
//! common cases there are also [`NeverCancel`] and the thread-safe
//! [`CancelFlag`].

mod cancel;
mod criterion;

pub use cancel::{CancelFlag, CancelPoll, NeverCancel};
pub use criterion::{Criterion, Sample};
