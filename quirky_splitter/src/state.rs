use crate::params::Limit;

/// Decides whether a separator may still split the stream.
///
/// The split count starts at 1 and grows with each split, so a budget limited
/// to `n` allows `n - 1` splits, i.e. at most `n` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitBudget {
    splits: usize,
    limit: Option<Limit>,
}

impl SplitBudget {
    pub fn new(limit: Option<Limit>) -> Self {
        Self { splits: 1, limit }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn limited(limit: Limit) -> Self {
        Self::new(Some(limit))
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    pub fn splits(&self) -> usize {
        self.splits
    }

    pub fn can_split(&self) -> bool {
        self.limit.is_none_or(|limit| self.splits < limit.get())
    }

    fn record_split(&mut self) {
        self.splits += 1;
        if let Some(limit) = self.limit {
            if self.splits == limit.get() {
                debug!("split quota of {} segments exhausted", limit);
            }
        }
    }
}

impl Default for SplitBudget {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// In-progress state of one split operation.
///
/// Holds the run of elements not emitted yet, whether the previous element
/// caused an emission, and the split budget.
#[derive(Debug, new)]
pub struct SplitState<T> {
    budget: SplitBudget,
    #[new(default)]
    run: Vec<T>,
    #[new(default)]
    did_push: bool,
    #[new(default)]
    finished: bool,
}

impl<T> SplitState<T> {
    pub fn unbounded() -> Self {
        Self::new(SplitBudget::unbounded())
    }

    pub fn budget(&self) -> &SplitBudget {
        &self.budget
    }

    pub fn run(&self) -> &[T] {
        &self.run
    }

    pub fn did_push(&self) -> bool {
        self.did_push
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes one element, returning the segment it completes if it is a
    /// separator.
    ///
    /// The predicate is not called once the budget is exhausted.
    pub fn try_step<E, P>(&mut self, item: T, predicate: P) -> Result<Option<Vec<T>>, E>
    where
        P: FnOnce(&T) -> Result<bool, E>,
    {
        debug_assert!(!self.finished, "step after flush");
        if self.budget.can_split() && predicate(&item)? {
            self.budget.record_split();
            Ok(Some(self.emit()))
        } else {
            self.run.push(item);
            self.did_push = false;
            Ok(None)
        }
    }

    pub fn step<P>(&mut self, item: T, predicate: P) -> Option<Vec<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        match self.try_step(item, |item| Ok::<_, std::convert::Infallible>(predicate(item))) {
            Ok(segment) => segment,
            Err(never) => match never {},
        }
    }

    /// Ends the operation, returning the last segment if there is one.
    ///
    /// A trailing separator leaves an empty last segment behind; an input
    /// which never provided any element has no segment at all. Only the first
    /// call may return a segment.
    pub fn finish(&mut self) -> Option<Vec<T>> {
        if self.finished {
            return None;
        }
        self.finished = true;
        if self.did_push || !self.run.is_empty() {
            Some(self.emit())
        } else {
            None
        }
    }

    fn emit(&mut self) -> Vec<T> {
        self.did_push = true;
        let segment = std::mem::take(&mut self.run);
        trace!("emitting segment of {} elements", segment.len());
        segment
    }
}
