use std::iter::FusedIterator;

use crate::state::{SplitBudget, SplitState};

/// Lazily splits an iterator into the segments found between separators.
///
/// Input is only read when the next segment is requested.
pub struct Segments<I: Iterator, P> {
    input: I,
    predicate: P,
    state: SplitState<I::Item>,
}

impl<I: Iterator, P> Segments<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(input: I, predicate: P) -> Self {
        Self::with_budget(input, predicate, SplitBudget::unbounded())
    }

    pub fn with_budget(input: I, predicate: P, budget: SplitBudget) -> Self {
        Self {
            input,
            predicate,
            state: SplitState::new(budget),
        }
    }
}

impl<I: Iterator, P> Iterator for Segments<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_finished() {
            return None;
        }
        for item in self.input.by_ref() {
            if let Some(segment) = self.state.step(item, &mut self.predicate) {
                return Some(segment);
            }
        }
        self.state.finish()
    }
}

impl<I: Iterator, P> FusedIterator for Segments<I, P> where P: FnMut(&I::Item) -> bool {}
