pub use crate::{
    iterator::{SplitFallibleIterator, SplitIterator},
    params::{Limit, SplitParams},
    sink::{Flow, Sink},
    splitter::Splitter,
    status::SplitStatus,
    SplitError,
};
