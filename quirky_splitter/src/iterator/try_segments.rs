use fallible_iterator::FallibleIterator;

use crate::state::{SplitBudget, SplitState};

/// Splits a fallible stream into segments, with a predicate which may fail
/// too.
///
/// The first error, from the input or from the predicate, ends the stream.
pub struct TrySegments<I: FallibleIterator, P> {
    input: I,
    predicate: P,
    state: SplitState<I::Item>,
}

impl<I: FallibleIterator, P> TrySegments<I, P>
where
    P: FnMut(&I::Item) -> Result<bool, I::Error>,
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

    fn next_segment(&mut self) -> Result<Option<Vec<I::Item>>, I::Error> {
        while let Some(item) = self.input.next()? {
            if let Some(segment) = self.state.try_step(item, &mut self.predicate)? {
                return Ok(Some(segment));
            }
        }
        Ok(self.state.finish())
    }
}

impl<I: FallibleIterator, P> FallibleIterator for TrySegments<I, P>
where
    P: FnMut(&I::Item) -> Result<bool, I::Error>,
{
    type Item = Vec<I::Item>;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.state.is_finished() {
            return Ok(None);
        }
        let segment = self.next_segment();
        if segment.is_err() {
            self.state.finish();
        }
        segment
    }
}
