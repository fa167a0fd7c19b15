use serde::{Deserialize, Serialize};

/// Offset/limit window for record result types.
///
/// `limit: None` disables paging. `start: None` with a limit pages from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    pub start: Option<u64>,
    pub limit: Option<u64>,
}

impl Paging {
    pub const DEFAULT_START: u64 = 0;
    pub const DEFAULT_LIMIT: u64 = 10;

    pub fn new(start: Option<u64>, limit: Option<u64>) -> Self {
        Self { start, limit }
    }

    /// No paging at all.
    pub fn unbounded() -> Self {
        Self {
            start: None,
            limit: None,
        }
    }

    /// The effective `(offset, count)` window, if paging is enabled.
    pub fn window(&self) -> Option<(u64, u64)> {
        self.limit
            .map(|limit| (self.start.unwrap_or(Self::DEFAULT_START), limit))
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            start: Some(Self::DEFAULT_START),
            limit: Some(Self::DEFAULT_LIMIT),
        }
    }
}
