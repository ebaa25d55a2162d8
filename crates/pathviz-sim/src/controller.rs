//! Run generation tracking.

use pathviz_core::RunToken;

/// Mints [`RunToken`]s and answers whether a token is still current.
///
/// Starting a run never stops the previous one directly: it only moves the
/// current token forward, and the old run notices the mismatch the next
/// time it checks.
#[derive(Debug, Clone, Default)]
pub struct RunController {
    current: RunToken,
}

impl RunController {
    /// A controller with no run started yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new token, superseding every earlier one.
    pub fn begin(&mut self) -> RunToken {
        self.current = self.current.next();
        log::debug!("minted {}", self.current);
        self.current
    }

    /// The most recently minted token.
    #[inline]
    pub fn current(&self) -> RunToken {
        self.current
    }

    /// Whether `token` is the most recently minted one.
    #[inline]
    pub fn is_current(&self, token: RunToken) -> bool {
        self.current == token
    }
}
