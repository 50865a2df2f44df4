//! Top-crate reporting
//!
//! Extracts the topmost crate of every stack from a compacted
//! [`StackStore`], in increasing stack-index order.  An empty stack reports
//! an explicit [`TopCrate::Empty`] sentinel rather than being skipped, so
//! the report always has one entry per stack.

use crate::yard::store::StackStore;
use crate::yard::Label;
use std::fmt;

/// The top of one stack: a crate label, or nothing for an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopCrate {
    Crate(Label),
    Empty,
}

impl fmt::Display for TopCrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopCrate::Crate(label) => write!(f, "{}", label),
            TopCrate::Empty => write!(f, "-"),
        }
    }
}

/// Top crate of every stack, in stack order.
pub fn top_crates(store: &StackStore) -> Vec<TopCrate> {
    (0..store.stack_count())
        .map(|stack| match store.top(stack) {
            Some(label) => TopCrate::Crate(label),
            None => TopCrate::Empty,
        })
        .collect()
}

/// Space-separated report line, e.g. `C M Z`.
pub fn report_line(tops: &[TopCrate]) -> String {
    let labels: Vec<String> = tops.iter().map(|top| top.to_string()).collect();
    labels.join(" ")
}
