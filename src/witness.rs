//! Concrete example paths ("witnesses") for a relationship between two
//! path shapes.
//!
//! These are what let a conflict message say *which* request two patterns
//! both match, rather than just asserting that they do.

use crate::segment::Segment;

fn segment_text(seg: &Segment) -> String {
    match seg {
        Segment::Literal(s) => s.clone(),
        Segment::Single(name) => {
            if name.is_empty() {
                "x".to_string()
            } else {
                name.clone()
            }
        }
        Segment::Multi(_) | Segment::TrailingSlash => String::new(),
    }
}

/// A path matched by this shape and no other consideration: literals are
/// used verbatim, wildcard names stand in for their own value, and a
/// multi-wildcard or trailing marker contributes nothing beyond its slash.
pub fn matching_path(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        out.push('/');
        out.push_str(&segment_text(seg));
    }
    out
}

/// A path matched by both `a` and `b`.
///
/// Assumes the caller has already established that `a` and `b` are not
/// disjoint. Walks in lockstep; at each position, a wildcard on one side
/// yields to whatever concrete shape the other side has there. Once one
/// side runs out (because it ended in a multi-wildcard that absorbed the
/// rest), the remaining tail of the longer side is appended verbatim via
/// [`matching_path`].
pub fn overlap_path(a: &[Segment], b: &[Segment]) -> String {
    let mut out = String::new();
    let mut i = 0;

    loop {
        match (a.get(i), b.get(i)) {
            (Some(sa), Some(sb)) => {
                out.push('/');
                if sa.is_wildcard() {
                    out.push_str(&segment_text(sb));
                } else {
                    out.push_str(&segment_text(sa));
                }
                i += 1;
                if matches!(sa, Segment::Multi(_)) || matches!(sb, Segment::Multi(_)) {
                    break;
                }
                if matches!(sa, Segment::TrailingSlash) || matches!(sb, Segment::TrailingSlash) {
                    break;
                }
            }
            _ => break,
        }
    }

    if i < a.len() {
        out.push_str(&matching_path(&a[i..]));
    } else if i < b.len() {
        out.push_str(&matching_path(&b[i..]));
    }
    out
}

/// A path matched by `a` but not by `b`.
///
/// Assumes the caller has already established that `a` matches something
/// `b` does not (true whenever the relationship is `MoreGeneral` or
/// `Overlaps`, and, read the other way round, `MoreSpecific`). The
/// analyzer only ever calls this when the relationship is one of those
/// three, so the precondition always holds in practice; debug builds
/// assert it isn't misused elsewhere.
pub fn difference_path(a: &[Segment], b: &[Segment]) -> String {
    let mut out = String::new();
    let mut i = 0;

    loop {
        match (a.get(i), b.get(i)) {
            (Some(Segment::Multi(_)), Some(Segment::Multi(_))) => {
                out.push('/');
                return finish(out, i, a, b, true);
            }
            (Some(Segment::Multi(name)), Some(other)) => {
                out.push('/');
                if matches!(other, Segment::TrailingSlash) {
                    out.push_str(if name.is_empty() { "x" } else { name });
                }
                return out;
            }
            (Some(other), Some(Segment::Multi(_))) => {
                out.push('/');
                out.push_str(&segment_text(other));
                i += 1;
                return finish(out, i, a, b, false);
            }
            (Some(Segment::Single(n1)), Some(Segment::Single(_))) => {
                out.push('/');
                out.push_str(if n1.is_empty() { "x" } else { n1 });
                i += 1;
            }
            (Some(Segment::Single(n1)), Some(Segment::Literal(lit))) => {
                out.push('/');
                let name_text = if n1.is_empty() { "x" } else { n1.as_str() };
                if name_text == lit {
                    out.push_str(lit);
                    out.push('x');
                } else {
                    out.push_str(name_text);
                }
                i += 1;
            }
            (Some(Segment::Literal(lit)), Some(Segment::Single(_))) => {
                out.push('/');
                out.push_str(lit);
                i += 1;
            }
            (Some(Segment::Literal(l1)), Some(Segment::Literal(_))) => {
                out.push('/');
                out.push_str(l1);
                i += 1;
            }
            (Some(Segment::TrailingSlash), Some(Segment::TrailingSlash)) => {
                out.push('/');
                i += 1;
            }
            (Some(_), Some(_)) => {
                // Disjoint at this position; not reachable under the
                // documented precondition.
                debug_assert!(false, "difference_path called on a disjoint pair");
                return finish(out, i, a, b, false);
            }
            _ => return finish(out, i, a, b, false),
        }
    }
}

fn finish(mut out: String, i: usize, a: &[Segment], b: &[Segment], done: bool) -> String {
    if done {
        return out;
    }
    if i < a.len() {
        out.push_str(&matching_path(&a[i..]));
    } else if i < b.len() {
        out.push_str(&matching_path(&b[i..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }
    fn single(s: &str) -> Segment {
        Segment::Single(s.to_string())
    }
    fn multi(s: &str) -> Segment {
        Segment::Multi(s.to_string())
    }

    #[test]
    fn matching_path_renders_literals_and_names() {
        let segs = vec![lit("items"), single("id")];
        assert_eq!(matching_path(&segs), "/items/id");
    }

    #[test]
    fn matching_path_trailing_multi_ends_in_slash() {
        let segs = vec![lit("items"), multi("")];
        assert_eq!(matching_path(&segs), "/items/");
    }

    #[test]
    fn overlap_path_prefers_literal_over_wildcard() {
        let a = vec![single("a"), lit("fixed")];
        let b = vec![lit("fixed"), single("b")];
        // Position 0: a is wildcard -> take b's "fixed". Position 1: b is
        // wildcard -> take a's "fixed".
        assert_eq!(overlap_path(&a, &b), "/fixed/fixed");
    }

    #[test]
    fn overlap_path_appends_longer_tail() {
        let a = vec![lit("items"), multi("rest")];
        let b = vec![lit("items"), lit("42"), lit("edit")];
        assert_eq!(overlap_path(&a, &b), "/items/42/edit");
    }

    #[test]
    fn difference_path_more_general_side_has_extra_literal_tail() {
        // a = /items/{rest...} (more general), b = /items/42
        let a = vec![lit("items"), multi("rest")];
        let b = vec![lit("items"), lit("42")];
        // a matches something b does not:
        let d = difference_path(&a, &b);
        assert_eq!(d, "/items/");
    }

    #[test]
    fn difference_path_single_vs_literal_avoids_collision() {
        let a = vec![single("id")];
        let b = vec![lit("id")];
        let d = difference_path(&a, &b);
        assert_eq!(d, "/idx");
    }
}
