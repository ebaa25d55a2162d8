//! Run generation tokens.

use std::fmt;

/// Generation marker of a search run.
///
/// Tokens are minted in increasing order; a run stays authoritative only
/// while its token equals the most recently minted one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RunToken(u64);

impl RunToken {
    /// The token in force before any run has started.
    pub const NONE: Self = Self(0);

    /// The token following this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RunToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}
