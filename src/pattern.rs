//! Parsing and the top-level [`Pattern`] type.
//!
//! Grammar: `[METHOD ' '][HOST]/PATH`, where `PATH` is a `/`-separated
//! sequence of literals and `{...}` wildcards.

use std::collections::HashSet;
use std::fmt;

use crate::error::{ParseError, Result};
use crate::relate::{relate_paths, Relationship};
use crate::segment::Segment;

const VALID_METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "TRACE",
];

/// A parsed routing pattern: an optional method, an optional host, and a
/// non-empty sequence of path segments.
///
/// Two patterns are equal when their method, host, and segments are equal
/// — not when their surface text is, so `"/a/{x}"` and `"/a/{y}"` parse to
/// different, non-equal patterns even though both are single-wildcard
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    method: String,
    host: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern from its surface syntax.
    pub fn parse(s: &str) -> Result<Pattern> {
        if s.is_empty() {
            return Err(ParseError::EmptyPattern);
        }

        let (method, rest) = match s.find(' ') {
            Some(idx) => (&s[..idx], &s[idx + 1..]),
            None => ("", s),
        };
        if !method.is_empty() && !VALID_METHODS.contains(&method) {
            return Err(ParseError::UnknownMethod(method.to_string()));
        }

        let slash_idx = rest.find('/').ok_or(ParseError::MissingLeadingSlash)?;
        let host = &rest[..slash_idx];
        if host.contains('{') {
            return Err(ParseError::HostContainsBrace);
        }
        let path = &rest[slash_idx..];
        let segments = parse_path(path)?;

        Ok(Pattern {
            method: method.to_string(),
            host: host.to_string(),
            segments,
        })
    }

    /// The method constraint, or `""` if the pattern applies to any method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The host constraint, or `""` if the pattern applies to any host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The parsed path segments, always non-empty.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// How this pattern's matched set relates to `other`'s.
    ///
    /// A host or method mismatch forces [`Relationship::Disjoint`] without
    /// inspecting the path at all: patterns that can never see the same
    /// request never overlap, no matter what their paths look like.
    pub fn relationship(&self, other: &Pattern) -> Relationship {
        if self.host != other.host || self.method != other.method {
            return Relationship::Disjoint;
        }
        relate_paths(&self.segments, &other.segments)
    }

    /// Whether this pattern should be tried before `other` when both could
    /// match the same request.
    ///
    /// Precedence is decided, in order: a pattern with a host beats one
    /// without; failing that, a pattern with a method beats one without;
    /// failing that, the path relationship must be [`Relationship::MoreSpecific`].
    pub fn higher_precedence(&self, other: &Pattern) -> bool {
        if !self.host.is_empty() && other.host.is_empty() {
            return true;
        }
        if self.host.is_empty() && !other.host.is_empty() {
            return false;
        }
        if !self.method.is_empty() && other.method.is_empty() {
            return true;
        }
        if self.method.is_empty() && !other.method.is_empty() {
            return false;
        }
        matches!(self.relationship(other), Relationship::MoreSpecific)
    }

    /// Whether registering both patterns together would be ambiguous: they
    /// share a host and method, and their paths are equivalent or overlap.
    pub fn conflicts_with(&self, other: &Pattern) -> bool {
        matches!(
            self.relationship(other),
            Relationship::Equivalent | Relationship::Overlaps
        )
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.method.is_empty() {
            write!(f, "{} ", self.method)?;
        }
        write!(f, "{}", self.host)?;
        for seg in &self.segments {
            match seg {
                Segment::Multi(name) if name.is_empty() => write!(f, "/")?,
                other => write!(f, "/{other}")?,
            }
        }
        Ok(())
    }
}

fn parse_path(path: &str) -> Result<Vec<Segment>> {
    debug_assert!(path.starts_with('/'));
    let body = &path[1..];
    let pieces: Vec<&str> = body.split('/').collect();
    let last = pieces.len() - 1;
    let mut segments = Vec::with_capacity(pieces.len());
    let mut seen_names: HashSet<String> = HashSet::new();

    for (i, piece) in pieces.iter().enumerate() {
        let is_last = i == last;

        if piece.is_empty() {
            if is_last {
                segments.push(Segment::Multi(String::new()));
            } else {
                return Err(ParseError::EmptySegment { at: i });
            }
            continue;
        }

        if let Some(inner) = piece.strip_prefix('{') {
            let inner = inner
                .strip_suffix('}')
                .ok_or_else(|| ParseError::MalformedWildcard {
                    segment: piece.to_string(),
                })?;

            if inner == "$" {
                let seg = Segment::TrailingSlash;
                if seg.is_terminal_only() && !is_last {
                    return Err(ParseError::TrailingMarkerNotLast {
                        segment: piece.to_string(),
                    });
                }
                segments.push(seg);
                continue;
            }

            if let Some(name) = inner.strip_suffix("...") {
                validate_identifier(name, piece)?;
                register_name(&mut seen_names, name, piece)?;
                let seg = Segment::Multi(name.to_string());
                if seg.is_terminal_only() && !is_last {
                    return Err(ParseError::MultiWildcardNotLast {
                        segment: piece.to_string(),
                    });
                }
                segments.push(seg);
                continue;
            }

            validate_identifier(inner, piece)?;
            register_name(&mut seen_names, inner, piece)?;
            segments.push(Segment::Single(inner.to_string()));
            continue;
        }

        if piece.contains('{') || piece.contains('}') {
            return Err(ParseError::MalformedWildcard {
                segment: piece.to_string(),
            });
        }
        segments.push(Segment::Literal(piece.to_string()));
    }

    Ok(segments)
}

fn validate_identifier(name: &str, piece: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ParseError::EmptyWildcardName {
            segment: piece.to_string(),
        });
    }
    let mut chars = name.chars();
    let first = chars.next().unwrap();
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(ParseError::InvalidIdentifier {
            name: name.to_string(),
        });
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ParseError::InvalidIdentifier {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn register_name(seen: &mut HashSet<String>, name: &str, piece: &str) -> Result<()> {
    if !seen.insert(name.to_string()) {
        return Err(ParseError::DuplicateWildcardName {
            name: name.to_string(),
        });
    }
    let _ = piece;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_literal_path() {
        let p = Pattern::parse("/items/42").unwrap();
        assert_eq!(p.method(), "");
        assert_eq!(p.host(), "");
        assert_eq!(
            p.segments(),
            &[Segment::Literal("items".into()), Segment::Literal("42".into())]
        );
    }

    #[test]
    fn parses_method_host_and_wildcard() {
        let p = Pattern::parse("GET example.com/items/{id}").unwrap();
        assert_eq!(p.method(), "GET");
        assert_eq!(p.host(), "example.com");
        assert_eq!(
            p.segments(),
            &[Segment::Literal("items".into()), Segment::Single("id".into())]
        );
    }

    #[test]
    fn parses_trailing_slash_as_anonymous_multi() {
        let p = Pattern::parse("GET example.com/items/").unwrap();
        assert_eq!(
            p.segments(),
            &[Segment::Literal("items".into()), Segment::Multi(String::new())]
        );
    }

    #[test]
    fn parses_named_multi_wildcard() {
        let p = Pattern::parse("/files/{path...}").unwrap();
        assert_eq!(
            p.segments(),
            &[Segment::Literal("files".into()), Segment::Multi("path".into())]
        );
    }

    #[test]
    fn parses_trailing_marker() {
        let p = Pattern::parse("/items/{$}").unwrap();
        assert_eq!(
            p.segments(),
            &[Segment::Literal("items".into()), Segment::TrailingSlash]
        );
    }

    #[test]
    fn root_pattern_is_anonymous_multi() {
        let p = Pattern::parse("/").unwrap();
        assert_eq!(p.segments(), &[Segment::Multi(String::new())]);
    }

    #[test]
    fn rejects_unknown_method() {
        assert_eq!(
            Pattern::parse("FETCH /items"),
            Err(ParseError::UnknownMethod("FETCH".into()))
        );
    }

    #[test]
    fn rejects_connect_as_unknown_method() {
        assert_eq!(
            Pattern::parse("CONNECT /items"),
            Err(ParseError::UnknownMethod("CONNECT".into()))
        );
    }

    #[test]
    fn rejects_double_slash() {
        assert_eq!(
            Pattern::parse("/items//42"),
            Err(ParseError::EmptySegment { at: 1 })
        );
    }

    #[test]
    fn rejects_duplicate_wildcard_names() {
        assert_eq!(
            Pattern::parse("/items/{id}/{id}"),
            Err(ParseError::DuplicateWildcardName { name: "id".into() })
        );
    }

    #[test]
    fn rejects_multi_wildcard_not_last() {
        assert!(matches!(
            Pattern::parse("/files/{path...}/more"),
            Err(ParseError::MultiWildcardNotLast { .. })
        ));
    }

    #[test]
    fn rejects_host_with_brace() {
        assert_eq!(
            Pattern::parse("example.{com}/a"),
            Err(ParseError::HostContainsBrace)
        );
    }

    #[test]
    fn display_round_trips() {
        for text in [
            "/items/42",
            "GET example.com/items/{id}",
            "GET example.com/items/",
            "/files/{path...}",
            "/items/{$}",
            "/",
        ] {
            let p = Pattern::parse(text).unwrap();
            let rendered = p.to_string();
            let reparsed = Pattern::parse(&rendered).unwrap();
            assert_eq!(p, reparsed, "round trip for {text:?} via {rendered:?}");
        }
    }

    #[test]
    fn higher_precedence_prefers_host_then_method_then_specificity() {
        let with_host = Pattern::parse("example.com/items/{id}").unwrap();
        let without_host = Pattern::parse("/items/{id}").unwrap();
        assert!(with_host.higher_precedence(&without_host));
        assert!(!without_host.higher_precedence(&with_host));

        let literal = Pattern::parse("/items/42").unwrap();
        let wildcard = Pattern::parse("/items/{id}").unwrap();
        assert!(literal.higher_precedence(&wildcard));
        assert!(!wildcard.higher_precedence(&literal));
    }

    #[test]
    fn conflicts_with_detects_equivalent_and_overlap() {
        let a = Pattern::parse("/items/{id}").unwrap();
        let b = Pattern::parse("/items/{name}").unwrap();
        assert!(a.conflicts_with(&b));

        let c = Pattern::parse("/items/42").unwrap();
        assert!(!a.conflicts_with(&c), "a literal is resolved by precedence, not a conflict");
    }
}
