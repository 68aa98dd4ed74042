use std::convert::Infallible;

use fallible_iterator::{FallibleIterator, IntoFallibleIterator};

use crate::{
    iterator::{Segments, TrySegments},
    params::{Limit, SplitParams},
    sink::{Flow, Sink},
    state::{SplitBudget, SplitState},
    status::SplitStatus,
    SplitError,
};

/// A configured split operation, waiting for its input.
///
/// Every way of running a splitter consumes it: one splitter, one pass.
#[derive(Debug, Clone)]
pub struct Splitter<P> {
    predicate: P,
    budget: SplitBudget,
}

impl<P> Splitter<P> {
    /// Splits on every separator.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            budget: SplitBudget::unbounded(),
        }
    }

    /// Splits into at most `limit` segments.
    pub fn bounded(limit: usize, predicate: P) -> Result<Self, SplitError> {
        Ok(Self::with_limit(Limit::new(limit)?, predicate))
    }

    pub fn with_limit(limit: Limit, predicate: P) -> Self {
        Self {
            predicate,
            budget: SplitBudget::limited(limit),
        }
    }

    pub fn from_params(params: &SplitParams, predicate: P) -> Self {
        Self {
            predicate,
            budget: SplitBudget::new(params.limit),
        }
    }

    pub fn limit(&self) -> Option<Limit> {
        self.budget.limit()
    }

    /// Lazily splits `input`.
    pub fn split<I>(self, input: I) -> Segments<I::IntoIter, P>
    where
        I: IntoIterator,
        P: FnMut(&I::Item) -> bool,
    {
        Segments::with_budget(input.into_iter(), self.predicate, self.budget)
    }

    /// Lazily splits a fallible `input` with a fallible predicate.
    pub fn try_split<I>(self, input: I) -> TrySegments<I::IntoFallibleIter, P>
    where
        I: IntoFallibleIterator,
        P: FnMut(&I::Item) -> Result<bool, I::Error>,
    {
        TrySegments::with_budget(input.into_fallible_iter(), self.predicate, self.budget)
    }

    /// Pushes the segments of `input` to `sink` until either the input ends
    /// or the sink stops.
    pub fn drive<I, S>(mut self, input: I, sink: &mut S) -> SplitStatus
    where
        I: IntoIterator,
        P: FnMut(&I::Item) -> bool,
        S: Sink<I::Item> + ?Sized,
    {
        let predicate = |item: &I::Item| Ok::<_, Infallible>((self.predicate)(item));
        let input = fallible_iterator::convert(input.into_iter().map(Ok::<_, Infallible>));
        match drive_with(input, predicate, self.budget, sink) {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }

    /// Same as [`Splitter::drive`] with a fallible input and predicate.
    ///
    /// On error, the segments pushed so far remain with the sink and nothing
    /// more is pushed.
    pub fn try_drive<I, S>(self, input: I, sink: &mut S) -> Result<SplitStatus, I::Error>
    where
        I: IntoFallibleIterator,
        P: FnMut(&I::Item) -> Result<bool, I::Error>,
        S: Sink<I::Item> + ?Sized,
    {
        drive_with(input.into_fallible_iter(), self.predicate, self.budget, sink)
    }
}

fn drive_with<I, P, S>(
    mut input: I,
    mut predicate: P,
    budget: SplitBudget,
    sink: &mut S,
) -> Result<SplitStatus, I::Error>
where
    I: FallibleIterator,
    P: FnMut(&I::Item) -> Result<bool, I::Error>,
    S: Sink<I::Item> + ?Sized,
{
    let mut state = SplitState::new(budget);
    let mut status = SplitStatus::default();
    while let Some(item) = input.next()? {
        status.consumed += 1;
        if let Some(segment) = state.try_step(item, &mut predicate)? {
            status.separators += 1;
            status.emitted += 1;
            if sink.accept(segment) == Flow::Stop {
                debug!("sink stopped the split after {} elements", status.consumed);
                status.stopped = true;
                return Ok(status);
            }
        }
    }
    // The input is over, whatever the sink answers.
    if let Some(segment) = state.finish() {
        status.emitted += 1;
        sink.accept(segment);
    }
    debug!(
        "split {} elements into {} segments",
        status.consumed, status.emitted
    );
    Ok(status)
}
