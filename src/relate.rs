//! Pairwise relationship between two path shapes.

use crate::segment::Segment;

/// How the set of paths matched by one path shape relates to another's.
///
/// Computed by walking both segment lists in lockstep; see [`relate_paths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// No path matches both.
    Disjoint,
    /// Both match exactly the same set of paths.
    Equivalent,
    /// Every path the first matches, the second also matches, and the
    /// second matches more besides.
    MoreSpecific,
    /// The dual of `MoreSpecific`: the first matches everything the second
    /// does, and more besides.
    MoreGeneral,
    /// Neither contains the other, but their matched sets intersect.
    Overlaps,
}

impl Relationship {
    /// The relationship as seen from the other side: `relate(a, b).dual() ==
    /// relate(b, a)` always holds.
    pub fn dual(self) -> Relationship {
        match self {
            Relationship::Disjoint => Relationship::Disjoint,
            Relationship::Equivalent => Relationship::Equivalent,
            Relationship::MoreSpecific => Relationship::MoreGeneral,
            Relationship::MoreGeneral => Relationship::MoreSpecific,
            Relationship::Overlaps => Relationship::Overlaps,
        }
    }
}

/// "p1 wins rest": p1's multi-wildcard absorbed whatever p2 had left.
/// Ordinarily that makes p1 the more general of the two, unless some
/// earlier position already had p2's wildcard reaching over one of p1's
/// literals — in which case neither side contains the other.
fn p1_wins_rest(w2_over_lit1: bool) -> Relationship {
    if w2_over_lit1 {
        Relationship::Overlaps
    } else {
        Relationship::MoreGeneral
    }
}

/// Symmetric counterpart of [`p1_wins_rest`].
fn p2_wins_rest(w1_over_lit2: bool) -> Relationship {
    if w1_over_lit2 {
        Relationship::Overlaps
    } else {
        Relationship::MoreSpecific
    }
}

fn resolve_exhausted(w1_over_lit2: bool, w2_over_lit1: bool) -> Relationship {
    match (w1_over_lit2, w2_over_lit1) {
        (false, false) => Relationship::Equivalent,
        (true, false) => Relationship::MoreGeneral,
        (false, true) => Relationship::MoreSpecific,
        (true, true) => Relationship::Overlaps,
    }
}

/// Classify the relationship between two path shapes.
///
/// Assumes the caller has already established that the two patterns share
/// a host and a method; this function only ever looks at path segments.
pub fn relate_paths(a: &[Segment], b: &[Segment]) -> Relationship {
    let mut i = 0;
    // w1_over_lit2: some single-wildcard in `a` faced a literal in `b`.
    let mut w1_over_lit2 = false;
    // w2_over_lit1: some single-wildcard in `b` faced a literal in `a`.
    let mut w2_over_lit1 = false;

    loop {
        match (a.get(i), b.get(i)) {
            (None, None) => return resolve_exhausted(w1_over_lit2, w2_over_lit1),
            (None, Some(_)) | (Some(_), None) => return Relationship::Disjoint,
            (Some(sa), Some(sb)) => match (sa, sb) {
                (Segment::Literal(x), Segment::Literal(y)) => {
                    if x != y {
                        return Relationship::Disjoint;
                    }
                    i += 1;
                }
                (Segment::Literal(_), Segment::Single(_)) => {
                    w2_over_lit1 = true;
                    i += 1;
                }
                (Segment::Literal(_), Segment::Multi(_)) => return p2_wins_rest(w1_over_lit2),
                (Segment::Literal(_), Segment::TrailingSlash) => return Relationship::Disjoint,

                (Segment::Single(_), Segment::Literal(_)) => {
                    w1_over_lit2 = true;
                    i += 1;
                }
                (Segment::Single(_), Segment::Single(_)) => {
                    i += 1;
                }
                (Segment::Single(_), Segment::Multi(_)) => return p2_wins_rest(w1_over_lit2),
                (Segment::Single(_), Segment::TrailingSlash) => return Relationship::Disjoint,

                (Segment::Multi(_), Segment::Literal(_)) | (Segment::Multi(_), Segment::Single(_)) => {
                    return p1_wins_rest(w2_over_lit1);
                }
                (Segment::Multi(_), Segment::Multi(_)) => {
                    return resolve_exhausted(w1_over_lit2, w2_over_lit1);
                }
                (Segment::Multi(_), Segment::TrailingSlash) => return Relationship::Disjoint,

                (Segment::TrailingSlash, Segment::Literal(_)) => return Relationship::Disjoint,
                (Segment::TrailingSlash, Segment::Single(_)) => return Relationship::Disjoint,
                (Segment::TrailingSlash, Segment::Multi(_)) => return p2_wins_rest(w1_over_lit2),
                (Segment::TrailingSlash, Segment::TrailingSlash) => {
                    i += 1;
                }
            },
        }
    }
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
    fn identical_literals_are_equivalent() {
        let a = vec![lit("items"), lit("42")];
        let b = vec![lit("items"), lit("42")];
        assert_eq!(relate_paths(&a, &b), Relationship::Equivalent);
    }

    #[test]
    fn differing_literal_is_disjoint() {
        let a = vec![lit("items")];
        let b = vec![lit("users")];
        assert_eq!(relate_paths(&a, &b), Relationship::Disjoint);
    }

    #[test]
    fn wildcard_over_literal_is_more_general() {
        let a = vec![lit("items"), single("id")];
        let b = vec![lit("items"), lit("42")];
        assert_eq!(relate_paths(&a, &b), Relationship::MoreGeneral);
        assert_eq!(relate_paths(&b, &a), Relationship::MoreSpecific);
    }

    #[test]
    fn multi_absorbing_rest_is_more_general() {
        let a = vec![lit("items"), multi("rest")];
        let b = vec![lit("items"), lit("42"), lit("edit")];
        assert_eq!(relate_paths(&a, &b), Relationship::MoreGeneral);
        assert_eq!(relate_paths(&b, &a), Relationship::MoreSpecific);
    }

    #[test]
    fn crossing_wildcards_overlap() {
        // /{a}/fixed  vs  /fixed/{b}
        let a = vec![single("a"), lit("fixed")];
        let b = vec![lit("fixed"), single("b")];
        assert_eq!(relate_paths(&a, &b), Relationship::Overlaps);
        assert_eq!(relate_paths(&b, &a), Relationship::Overlaps);
    }

    #[test]
    fn both_multi_is_equivalent_when_no_crossing() {
        let a = vec![lit("items"), multi("rest")];
        let b = vec![lit("items"), multi("other")];
        assert_eq!(relate_paths(&a, &b), Relationship::Equivalent);
    }

    #[test]
    fn trailing_slash_disjoint_from_literal_tail() {
        let a = vec![lit("items"), Segment::TrailingSlash];
        let b = vec![lit("items"), lit("42")];
        assert_eq!(relate_paths(&a, &b), Relationship::Disjoint);
    }

    #[test]
    fn relationship_is_always_dual_consistent() {
        let a = vec![lit("items"), single("id")];
        let b = vec![lit("items"), multi("rest")];
        assert_eq!(relate_paths(&a, &b), relate_paths(&b, &a).dual());
    }
}
