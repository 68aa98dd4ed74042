/// Outcome of a push driven split.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitStatus {
    /// The number of elements read from the input, separators included
    pub consumed: usize,
    /// The number of elements which split the input
    pub separators: usize,
    /// The number of segments handed to the sink
    pub emitted: usize,
    /// Whether the sink stopped the run before the end of the input, so the
    /// answer to the last segment flushed after it does not count
    pub stopped: bool,
}
