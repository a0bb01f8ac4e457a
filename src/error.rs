use thiserror::Error;

/// Errors surfaced by operations on a [`Cascade`](crate::Cascade).
///
/// No operation mutates a chain before failing, so a returned error always
/// leaves every chain exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeError {
    /// `pop` (or `remove(0)`) was called on the tail of a chain.
    #[error("stack is empty")]
    EmptyStack,
    /// An offset or index resolved outside the reachable chain.
    #[error("offset {0} is out of range")]
    InvalidOffset(isize),
    /// The request makes no sense for the chain as it stands.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    /// The node handle refers to a node that has since been excised.
    #[error("node handle no longer refers to a live node")]
    StaleNode,
}

pub type Result<T, E = CascadeError> = std::result::Result<T, E>;
