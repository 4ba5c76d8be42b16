use std::fmt;

/// Errors produced while building a [`SiteSet`](super::SiteSet).
#[derive(Debug, Clone, PartialEq)]
pub enum SiteSetError {
    /// More sites were supplied than the shader has uniform slots for.
    CapacityExceeded { capacity: usize, attempted: usize },
    /// A site position or color contains NaN or infinity.
    NonFinite { index: usize },
}

impl fmt::Display for SiteSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSetError::CapacityExceeded { capacity, attempted } => write!(
                f,
                "site set holds at most {capacity} sites, {attempted} were supplied"
            ),
            SiteSetError::NonFinite { index } => {
                write!(f, "site {index} has a non-finite position or color")
            }
        }
    }
}

impl std::error::Error for SiteSetError {}
