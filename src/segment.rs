//! The segment algebra: the shapes a single path piece can take.

use std::fmt;

/// One piece of a pattern's path, between two slashes.
///
/// A [`crate::pattern::Pattern`] is just `Vec<Segment>` plus a method and a
/// host; everything about precedence, conflicts, and matching is decided by
/// comparing these shapes position by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A fixed piece of text, matched exactly.
    Literal(String),
    /// `{name}` — matches exactly one non-empty path piece, bound to `name`.
    /// `name` is empty only for internally constructed anonymous wildcards;
    /// every wildcard written by hand has a name.
    Single(String),
    /// `{name...}` — matches the rest of the path (zero or more pieces),
    /// bound to `name` as a single string. Always the last segment.
    /// `name` is empty for the wildcard implied by a trailing slash.
    Multi(String),
    /// `{$}` — matches only when the path ends exactly here with a slash
    /// and nothing after it. Always the last segment.
    TrailingSlash,
}

impl Segment {
    /// True for the two wildcard shapes (`Single`, `Multi`); false for the
    /// two shapes with no capture (`Literal`, `TrailingSlash`).
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Single(_) | Segment::Multi(_))
    }

    /// True for the two shapes that may only appear as a pattern's final
    /// segment.
    pub fn is_terminal_only(&self) -> bool {
        matches!(self, Segment::Multi(_) | Segment::TrailingSlash)
    }

    /// The wildcard's binding name, if this segment captures one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Single(name) | Segment::Multi(name) => Some(name.as_str()),
            Segment::Literal(_) | Segment::TrailingSlash => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => write!(f, "{s}"),
            Segment::Single(name) => write!(f, "{{{name}}}"),
            Segment::Multi(name) => {
                if name.is_empty() {
                    Ok(())
                } else {
                    write!(f, "{{{name}...}}")
                }
            }
            Segment::TrailingSlash => write!(f, "{{$}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_classification() {
        assert!(Segment::Single("id".into()).is_wildcard());
        assert!(Segment::Multi("rest".into()).is_wildcard());
        assert!(!Segment::Literal("items".into()).is_wildcard());
        assert!(!Segment::TrailingSlash.is_wildcard());
    }

    #[test]
    fn terminal_only_classification() {
        assert!(Segment::Multi("rest".into()).is_terminal_only());
        assert!(Segment::TrailingSlash.is_terminal_only());
        assert!(!Segment::Literal("a".into()).is_terminal_only());
        assert!(!Segment::Single("a".into()).is_terminal_only());
    }

    #[test]
    fn anonymous_multi_displays_as_nothing() {
        assert_eq!(Segment::Multi(String::new()).to_string(), "");
        assert_eq!(Segment::Multi("rest".into()).to_string(), "{rest...}");
    }
}
