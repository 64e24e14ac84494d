//! Error types for parsing and registration.

use std::fmt;
use std::sync::Arc;

use crate::pattern::Pattern;

/// Failure modes for [`Pattern::parse`](crate::pattern::Pattern::parse).
///
/// Every variant that points at a specific piece of offending text carries
/// enough context (the piece itself, or a byte offset) to build a useful
/// diagnostic without re-scanning the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The pattern string was empty.
    EmptyPattern,
    /// The leading method token is not one of the known HTTP methods.
    UnknownMethod(String),
    /// No `/`-prefixed path could be found after the optional method and host.
    MissingLeadingSlash,
    /// The host portion contains `{`, which is never valid there.
    HostContainsBrace,
    /// A path segment between two slashes was empty (a `//` in the middle
    /// of the path). Only the final segment may be empty.
    EmptySegment { at: usize },
    /// A `{...}` segment did not close, or had trailing characters after `}`.
    MalformedWildcard { segment: String },
    /// A wildcard segment's name was empty (and was not the trailing-slash
    /// marker `{$}`).
    EmptyWildcardName { segment: String },
    /// A wildcard name is not a valid identifier.
    InvalidIdentifier { name: String },
    /// The same wildcard name was bound more than once in the pattern.
    DuplicateWildcardName { name: String },
    /// `{$}` appeared somewhere other than the final segment.
    TrailingMarkerNotLast { segment: String },
    /// A multi-segment wildcard (`{name...}`) appeared somewhere other than
    /// the final segment.
    MultiWildcardNotLast { segment: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyPattern => write!(f, "pattern string is empty"),
            ParseError::UnknownMethod(m) => write!(f, "unknown HTTP method `{m}`"),
            ParseError::MissingLeadingSlash => {
                write!(f, "pattern is missing a `/`-prefixed path")
            }
            ParseError::HostContainsBrace => {
                write!(f, "host portion of the pattern must not contain `{{`")
            }
            ParseError::EmptySegment { at } => {
                write!(f, "empty path segment at position {at} (only the final segment may be empty)")
            }
            ParseError::MalformedWildcard { segment } => write!(
                f,
                "malformed wildcard `{segment}`: a wildcard must span the whole path piece, from `{{` to `}}`"
            ),
            ParseError::EmptyWildcardName { segment } => {
                write!(f, "wildcard `{segment}` has an empty name")
            }
            ParseError::InvalidIdentifier { name } => write!(
                f,
                "`{name}` is not a valid wildcard name: it must start with a letter or `_`, followed by letters, digits, or `_`"
            ),
            ParseError::DuplicateWildcardName { name } => write!(
                f,
                "wildcard name `{name}` is bound more than once in this pattern"
            ),
            ParseError::TrailingMarkerNotLast { segment } => write!(
                f,
                "`{segment}` (the trailing-slash marker) must be the last path segment"
            ),
            ParseError::MultiWildcardNotLast { segment } => write!(
                f,
                "`{segment}` (a multi-segment wildcard) must be the last path segment"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Shorthand for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Returned by [`PatternSet::register`](crate::trie::PatternSet::register)
/// when a new pattern would be equivalent to, or overlap with, an already
/// registered one on the same host and method.
#[derive(Debug)]
pub struct RegistrationConflict {
    /// The pattern already present in the set.
    pub existing: Arc<Pattern>,
    /// The pattern that was rejected.
    pub new: Pattern,
    /// A prose description of the relationship, including witness paths.
    pub description: String,
}

impl fmt::Display for RegistrationConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern `{}` conflicts with already-registered pattern `{}`: {}",
            self.new, self.existing, self.description
        )
    }
}

impl std::error::Error for RegistrationConflict {}
