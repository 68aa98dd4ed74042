use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::SplitError;

/// Maximum number of segments a bounded splitter may emit.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, Deref, Deserialize)]
#[serde(try_from = "usize")]
pub struct Limit(NonZeroUsize);

impl Limit {
    pub fn new(limit: usize) -> Result<Self, SplitError> {
        NonZeroUsize::new(limit)
            .map(Self)
            .ok_or(SplitError::InvalidLimit { limit })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Limit {
    type Error = SplitError;

    fn try_from(limit: usize) -> Result<Self, Self::Error> {
        Self::new(limit)
    }
}

/// Splitter parameters, as found in configuration files.
///
/// Without a limit the splitter splits on every separator.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SplitParams {
    #[serde(default)]
    pub limit: Option<Limit>,
}

impl SplitParams {
    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    pub fn bounded(limit: usize) -> Result<Self, SplitError> {
        Ok(Self {
            limit: Some(Limit::new(limit)?),
        })
    }
}
