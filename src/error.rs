pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while building or solving a puzzle.
///
/// [`Error::Contradiction`] is ordinary control flow for the search: it marks
/// the current branch as dead and is caught at the nearest branching frame.
/// Every other variant indicates a caller or internal bug and is surfaced to
/// the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("contradiction: {0}")]
    Contradiction(String),

    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("category `{0}` is already declared")]
    DuplicateCategory(String),

    #[error("variable `{0}` is not assigned")]
    NotAssigned(String),

    #[error("row {row} is not in the domain of `{variable}`")]
    NotInDomain { variable: String, row: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl Error {
    /// `true` for the recoverable search-level kind, `false` for bugs.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Error::Contradiction(_))
    }
}
