//! # Filtering
//!
//! A list view narrows its authoritative collection with a [`FilterState`]:
//! one free-text term plus a kind-specific set of categorical selectors.
//!
//! - The term matches when it is empty, or when any of the record's
//!   designated text fields contains it (case-insensitive).
//! - A [`Selector`] matches when it is [`Selector::Any`], or when the record
//!   field equals the selected value.
//!
//! A record is kept when every predicate holds. [`apply`] is a single linear
//! scan that keeps source order and never re-sorts. Lists here hold tens of
//! records, so there is no index.
//!
//! Setting fields on a `FilterState` does nothing by itself; the owning
//! [`ListController`](crate::controller::ListController) decides when to
//! re-run the filter.

mod kinds;

use crate::model::Record;
use std::fmt;

pub use kinds::{EventSelectors, GroupSelectors, MemberSelectors, PostSelectors, UserSelectors};

/// A categorical predicate input: either "any value" or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    Any,
    Is(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Is(expected) => expected == value,
        }
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selector::Any, Selector::Is)
    }
}

/// A record kind that can be narrowed by a [`FilterState`].
pub trait Filterable: Record {
    type Selectors: Default + Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Fields the free-text term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches_selectors(&self, selectors: &Self::Selectors) -> bool;
}

/// Current predicate inputs for one list view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState<S> {
    pub term: String,
    pub selectors: S,
}

impl<S: Default> FilterState<S> {
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            selectors: S::default(),
        }
    }
}

impl<S> FilterState<S> {
    pub fn new(term: impl Into<String>, selectors: S) -> Self {
        Self {
            term: term.into(),
            selectors,
        }
    }
}

/// Returns the records matching every active predicate, in input order.
pub fn apply<'a, R: Filterable>(
    records: &'a [R],
    state: &FilterState<R::Selectors>,
) -> Vec<&'a R> {
    let needle = state.term.trim().to_lowercase();

    records
        .iter()
        .filter(|record| matches_term(*record, &needle))
        .filter(|record| record.matches_selectors(&state.selectors))
        .collect()
}

fn matches_term<R: Filterable>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
