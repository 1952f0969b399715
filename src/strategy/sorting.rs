use super::context::{Strategy, StrategyContext};
use super::errors::{StrategyError, StrategyResult};
use crate::config::StrategyConfig;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A context that sorts integer sequences ascending
pub type Sorter = StrategyContext<Vec<i64>, Vec<i64>>;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Strategy for BubbleSort {
    type Input = Vec<i64>;
    type Output = Vec<i64>;

    fn name(&self) -> &'static str {
        "bubble_sort"
    }

    fn execute(&self, mut values: Vec<i64>) -> StrategyResult<Vec<i64>> {
        let n = values.len();
        for pass in 0..n {
            let mut swapped = false;
            for j in 1..n - pass {
                if values[j - 1] > values[j] {
                    values.swap(j - 1, j);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        Ok(values)
    }
}

/// In-place three-way partition quicksort around the middle element
///
/// Only the smaller partition is sorted recursively, so stack depth stays
/// logarithmic. Ranges that exhaust the partition budget finish with a
/// heapsort.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl QuickSort {
    fn sort(values: &mut [i64]) {
        let budget = 2 * (usize::BITS - values.len().leading_zeros()) as usize;
        Self::sort_within(values, budget);
    }

    fn sort_within(values: &mut [i64], mut budget: usize) {
        let mut slice = values;
        while slice.len() > 1 {
            if budget == 0 {
                Self::heap_sort(slice);
                return;
            }
            budget -= 1;

            let (less_end, greater_start) = Self::partition(slice);
            let (left, rest) = std::mem::take(&mut slice).split_at_mut(less_end);
            let right = &mut rest[greater_start - less_end..];

            if left.len() < right.len() {
                Self::sort_within(left, budget);
                slice = right;
            } else {
                Self::sort_within(right, budget);
                slice = left;
            }
        }
    }

    fn heap_sort(values: &mut [i64]) {
        let len = values.len();
        for root in (0..len / 2).rev() {
            Self::sift_down(values, root, len);
        }
        for end in (1..len).rev() {
            values.swap(0, end);
            Self::sift_down(values, 0, end);
        }
    }

    fn sift_down(values: &mut [i64], mut root: usize, end: usize) {
        loop {
            let mut child = 2 * root + 1;
            if child >= end {
                break;
            }
            if child + 1 < end && values[child] < values[child + 1] {
                child += 1;
            }
            if values[root] >= values[child] {
                break;
            }
            values.swap(root, child);
            root = child;
        }
    }

    /// Returns `(lt, gt)`: `[..lt]` is below the pivot, `[gt..]` above it
    fn partition(values: &mut [i64]) -> (usize, usize) {
        let pivot = values[values.len() / 2];
        let (mut lt, mut i, mut gt) = (0, 0, values.len());

        while i < gt {
            match values[i].cmp(&pivot) {
                Ordering::Less => {
                    values.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    values.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }
        (lt, gt)
    }
}

impl Strategy for QuickSort {
    type Input = Vec<i64>;
    type Output = Vec<i64>;

    fn name(&self) -> &'static str {
        "quick_sort"
    }

    fn execute(&self, mut values: Vec<i64>) -> StrategyResult<Vec<i64>> {
        Self::sort(&mut values);
        Ok(values)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Strategy for InsertionSort {
    type Input = Vec<i64>;
    type Output = Vec<i64>;

    fn name(&self) -> &'static str {
        "insertion_sort"
    }

    fn execute(&self, mut values: Vec<i64>) -> StrategyResult<Vec<i64>> {
        for i in 1..values.len() {
            let mut j = i;
            while j > 0 && values[j - 1] > values[j] {
                values.swap(j - 1, j);
                j -= 1;
            }
        }
        Ok(values)
    }
}

/// The closed set of bundled sorting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Insertion,
}

impl SortAlgorithm {
    pub fn all() -> &'static [Self] {
        &[Self::Bubble, Self::Quick, Self::Insertion]
    }

    pub fn strategy(self) -> Arc<dyn Strategy<Input = Vec<i64>, Output = Vec<i64>>> {
        match self {
            Self::Bubble => Arc::new(BubbleSort),
            Self::Quick => Arc::new(QuickSort),
            Self::Insertion => Arc::new(InsertionSort),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bubble => write!(f, "bubble"),
            Self::Quick => write!(f, "quick"),
            Self::Insertion => write!(f, "insertion"),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "quick" => Ok(Self::Quick),
            "insertion" => Ok(Self::Insertion),
            _ => Err(StrategyError::UnknownStrategy {
                name: s.to_string(),
                expected: "bubble, quick, insertion".to_string(),
            }),
        }
    }
}

/// Build a sorter preloaded with the configured default algorithm
pub fn sorter_from_config(config: &StrategyConfig) -> StrategyResult<Sorter> {
    let algorithm: SortAlgorithm = config.default_sort.parse()?;
    let mut sorter = Sorter::new();
    sorter.set_shared_strategy(algorithm.strategy());
    Ok(sorter)
}
