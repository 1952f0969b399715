//! # Strategies
//!
//! Interchangeable algorithms behind one call signature.
//!
//! A [`StrategyContext`] holds at most one [`Strategy`] and delegates
//! [`execute`](StrategyContext::execute) to it. The held strategy can be
//! replaced at any time; the swap is visible to the next call. Executing
//! with nothing installed is a [`StrategyError::NotConfigured`] error.
//!
//! The bundled strategies are sorting algorithms over `Vec<i64>`. Any of
//! them produces the same output for the same input, which is what makes
//! them substitutable.

pub mod context;
pub mod errors;
pub mod sorting;

pub use context::{Strategy, StrategyContext};
pub use errors::{StrategyError, StrategyResult};
pub use sorting::{sorter_from_config, BubbleSort, InsertionSort, QuickSort, SortAlgorithm, Sorter};
