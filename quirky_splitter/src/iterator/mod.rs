use fallible_iterator::FallibleIterator;

use crate::{params::Limit, state::SplitBudget, SplitError};

pub mod segments;
pub mod try_segments;

pub use segments::Segments;
pub use try_segments::TrySegments;

pub trait SplitIterator: Iterator {
    /// Splits on every element matching `predicate`.
    #[inline]
    fn split_by<P>(self, predicate: P) -> Segments<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Segments::new(self, predicate)
    }

    /// Splits into at most `limit` segments, the last one taking whatever
    /// remains of the input.
    #[inline]
    fn splitn_by<P>(self, limit: usize, predicate: P) -> Result<Segments<Self, P>, SplitError>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let budget = SplitBudget::limited(Limit::new(limit)?);
        Ok(Segments::with_budget(self, predicate, budget))
    }
}

impl<I: Iterator> SplitIterator for I {}

pub trait SplitFallibleIterator: FallibleIterator {
    #[inline]
    fn try_split_by<P>(self, predicate: P) -> TrySegments<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Result<bool, Self::Error>,
    {
        TrySegments::new(self, predicate)
    }

    #[inline]
    fn try_splitn_by<P>(
        self,
        limit: usize,
        predicate: P,
    ) -> Result<TrySegments<Self, P>, SplitError>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Result<bool, Self::Error>,
    {
        let budget = SplitBudget::limited(Limit::new(limit)?);
        Ok(TrySegments::with_budget(self, predicate, budget))
    }
}

impl<I: FallibleIterator> SplitFallibleIterator for I {}
