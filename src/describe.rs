//! Prose descriptions of the relationship between two patterns, built on
//! top of the relationship analyzer and witness generator.

use crate::error::Result;
use crate::pattern::Pattern;
use crate::relate::Relationship;
use crate::witness::{difference_path, matching_path, overlap_path};

/// Parse both pattern strings and describe how they relate, in plain
/// English, with example paths backing up every claim.
pub fn describe_relationship(a: &str, b: &str) -> Result<String> {
    let pa = Pattern::parse(a)?;
    let pb = Pattern::parse(b)?;
    Ok(describe_parsed(&pa, &pb))
}

pub(crate) fn describe_parsed(a: &Pattern, b: &Pattern) -> String {
    if a.host() != b.host() || a.method() != b.method() {
        return format!(
            "`{a}` and `{b}` are disjoint: they constrain different hosts or methods, \
             so no single request can match both."
        );
    }
    describe_relationship_patterns(a, b, a.relationship(b))
}

pub(crate) fn describe_relationship_patterns(a: &Pattern, b: &Pattern, rel: Relationship) -> String {
    match rel {
        Relationship::Disjoint => {
            format!("`{a}` and `{b}` are disjoint: no request matches both.")
        }
        Relationship::Equivalent => format!(
            "`{a}` and `{b}` are equivalent: they match exactly the same requests, \
             for example `{}`.",
            matching_path(a.segments())
        ),
        Relationship::MoreSpecific => format!(
            "`{a}` is more specific than `{b}`: every request `{a}` matches is also \
             matched by `{b}` (for example `{}`), but `{b}` also matches `{}`, which \
             `{a}` does not.",
            matching_path(a.segments()),
            difference_path(b.segments(), a.segments())
        ),
        Relationship::MoreGeneral => format!(
            "`{a}` is more general than `{b}`: every request `{b}` matches is also \
             matched by `{a}` (for example `{}`), but `{a}` also matches `{}`, which \
             `{b}` does not.",
            matching_path(b.segments()),
            difference_path(a.segments(), b.segments())
        ),
        Relationship::Overlaps => format!(
            "`{a}` and `{b}` overlap: both match `{}`, but `{a}` also matches `{}` \
             (which `{b}` does not) and `{b}` also matches `{}` (which `{a}` does not).",
            overlap_path(a.segments(), b.segments()),
            difference_path(a.segments(), b.segments()),
            difference_path(b.segments(), a.segments())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_disjoint_hosts() {
        let msg = describe_relationship("a.example/items", "b.example/items").unwrap();
        assert!(msg.contains("disjoint"));
    }

    #[test]
    fn describes_equivalent() {
        let msg = describe_relationship("/items/{id}", "/items/{name}").unwrap();
        assert!(msg.contains("equivalent"));
    }

    #[test]
    fn describes_more_specific() {
        let msg = describe_relationship("/items/42", "/items/{id}").unwrap();
        assert!(msg.contains("more specific"));
    }

    #[test]
    fn describes_overlap() {
        let msg = describe_relationship("/{a}/fixed", "/fixed/{b}").unwrap();
        assert!(msg.contains("overlap"));
    }
}
