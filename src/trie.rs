//! The matching trie: a registry of patterns plus a host/method/path index
//! for fast lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::alias::PRwLock;
use crate::debug_log;
use crate::describe::describe_relationship_patterns;
use crate::error::RegistrationConflict;
use crate::pattern::Pattern;
use crate::relate::{relate_paths, Relationship};
use crate::segment::Segment;

/// Reserved literal key for a `{$}` trailing-slash child. Never collides
/// with a real literal piece, since a literal piece can't contain `/`.
const TRAILING_KEY: &str = "/";

#[derive(Default)]
struct Node {
    literal: HashMap<String, Node>,
    single: Option<Box<Node>>,
    multi: Option<Box<Node>>,
    terminal: Option<Arc<Pattern>>,
}

fn insert_segments(node: &mut Node, segments: &[Segment], pattern: Arc<Pattern>) {
    match segments.split_first() {
        None => node.terminal = Some(pattern),
        Some((seg, rest)) => match seg {
            Segment::Literal(s) => {
                insert_segments(node.literal.entry(s.clone()).or_default(), rest, pattern);
            }
            Segment::TrailingSlash => {
                insert_segments(
                    node.literal.entry(TRAILING_KEY.to_string()).or_default(),
                    rest,
                    pattern,
                );
            }
            Segment::Single(_) => {
                insert_segments(node.single.get_or_insert_with(Box::default), rest, pattern);
            }
            Segment::Multi(_) => {
                // A multi-wildcard is always the final segment: no further
                // descent, the child's terminal is the match.
                node.multi.get_or_insert_with(Box::default).terminal = Some(pattern);
            }
        },
    }
}

enum Piece<'a> {
    Text(&'a str),
    Trailing,
}

fn next_segment(path: &str) -> (Piece<'_>, &str) {
    if path == "/" {
        return (Piece::Trailing, "");
    }
    let rest = &path[1..];
    match rest.find('/') {
        Some(idx) => (Piece::Text(&rest[..idx]), &rest[idx..]),
        None => (Piece::Text(rest), ""),
    }
}

fn walk(node: &Node, path: &str, bindings: &mut Vec<String>) -> Option<Arc<Pattern>> {
    if path.is_empty() {
        return node.terminal.clone();
    }
    let (piece, rest) = next_segment(path);
    match piece {
        Piece::Trailing => {
            if let Some(child) = node.literal.get(TRAILING_KEY) {
                if let Some(p) = walk(child, rest, bindings) {
                    return Some(p);
                }
            }
            if let Some(child) = &node.multi {
                bindings.push(String::new());
                return child.terminal.clone();
            }
            None
        }
        Piece::Text(seg) => {
            if let Some(child) = node.literal.get(seg) {
                if let Some(p) = walk(child, rest, bindings) {
                    return Some(p);
                }
            }
            if !seg.is_empty() {
                if let Some(child) = &node.single {
                    bindings.push(seg.to_string());
                    if let Some(p) = walk(child, rest, bindings) {
                        return Some(p);
                    }
                    bindings.pop();
                }
            }
            if let Some(child) = &node.multi {
                bindings.push(path[1..].to_string());
                return child.terminal.clone();
            }
            None
        }
    }
}

struct SetInner {
    registry: Vec<Arc<Pattern>>,
    root: HashMap<String, HashMap<String, Node>>,
}

/// A registered set of patterns, with conflict detection on insert and a
/// matching trie for lookup.
///
/// Both the registry and the trie are guarded by a single [`PRwLock`]:
/// registration takes the write lock (it has to scan for conflicts before
/// mutating the trie), matching takes only the read lock, so concurrent
/// lookups never block each other.
pub struct PatternSet {
    inner: PRwLock<SetInner>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful match: the pattern that won, and the
/// wildcard bindings it captured.
#[derive(Debug, Clone)]
pub struct Matched {
    pub pattern: Arc<Pattern>,
    pub bindings: HashMap<String, String>,
}

impl PatternSet {
    /// An empty pattern set.
    pub fn new() -> Self {
        Self {
            inner: PRwLock::new(SetInner {
                registry: Vec::new(),
                root: HashMap::new(),
            }),
        }
    }

    /// Register a pattern, failing if it conflicts (is equivalent to, or
    /// overlaps) an already-registered pattern on the same host and method.
    pub fn register(&self, pattern: Pattern) -> Result<(), RegistrationConflict> {
        let mut inner = self.inner.write();

        for existing in &inner.registry {
            if existing.host() == pattern.host() && existing.method() == pattern.method() {
                let rel = relate_paths(pattern.segments(), existing.segments());
                if matches!(rel, Relationship::Equivalent | Relationship::Overlaps) {
                    let description = describe_relationship_patterns(&pattern, existing, rel);
                    return Err(RegistrationConflict {
                        existing: existing.clone(),
                        new: pattern,
                        description,
                    });
                }
            }
        }

        debug_log!("registering pattern {}", pattern);
        let arc = Arc::new(pattern);
        inner.registry.push(arc.clone());
        let host_map = inner.root.entry(arc.host().to_string()).or_default();
        let method_node = host_map.entry(arc.method().to_string()).or_default();
        insert_segments(method_node, arc.segments(), arc);
        Ok(())
    }

    /// All currently registered patterns, in registration order.
    pub fn patterns(&self) -> Vec<Arc<Pattern>> {
        self.inner.read().registry.clone()
    }

    /// Find the pattern, if any, that matches this request.
    ///
    /// `path` must be empty or start with `/`; anything else never matches.
    pub fn matches(&self, method: &str, host: &str, path: &str) -> Option<Matched> {
        if !path.is_empty() && !path.starts_with('/') {
            return None;
        }
        let inner = self.inner.read();

        let mut result = None;
        if !host.is_empty() {
            if let Some(methods) = inner.root.get(host) {
                result = Self::match_method(methods, method, path);
            }
        }
        if result.is_none() {
            if let Some(methods) = inner.root.get("") {
                result = Self::match_method(methods, method, path);
            }
        }
        result
    }

    fn match_method(methods: &HashMap<String, Node>, method: &str, path: &str) -> Option<Matched> {
        if !method.is_empty() {
            if let Some(node) = methods.get(method) {
                if let Some(m) = Self::match_path(node, path) {
                    return Some(m);
                }
            }
        }
        methods.get("").and_then(|node| Self::match_path(node, path))
    }

    fn match_path(node: &Node, path: &str) -> Option<Matched> {
        let mut bindings = Vec::new();
        let pattern = walk(node, path, &mut bindings)?;

        let mut named = HashMap::new();
        let mut idx = 0;
        for seg in pattern.segments() {
            if let Some(name) = seg.name() {
                let value = bindings.get(idx).cloned().unwrap_or_default();
                idx += 1;
                if !name.is_empty() {
                    named.insert(name.to_string(), value);
                }
            }
        }
        Some(Matched {
            pattern,
            bindings: named,
        })
    }
}
