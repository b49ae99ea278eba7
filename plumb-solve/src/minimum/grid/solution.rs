use super::bracket::Bracket;

/// How the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket is closed: the best sample is no worse than either
    /// neighbor.
    Bracketed,

    /// Three consecutive equal values were seen while extending past an
    /// endpoint; the region is flat and the bracket may be degenerate.
    Flat,

    /// An extension walk spent its evaluation budget before the criterion
    /// turned upward; the bracket holds the lowest points seen.
    ExtensionLimit,

    /// Cancelled before both neighbors were known; only the best point is
    /// trustworthy.
    Incomplete,
}

/// The result of a bracketing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// The located bracket.
    pub bracket: Bracket,

    /// Final search status.
    pub status: Status,

    /// True if the criterion or the cancellation poll requested a stop at
    /// any time, including after the bracket had already closed.
    pub cancelled: bool,

    /// Number of criterion evaluations performed.
    pub evals: usize,
}
