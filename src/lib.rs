//! A structural URL pattern matcher: parsing, precedence, conflict
//! detection, and a matching trie, in the style of a host-and-method-aware
//! HTTP router pattern language.
//!
//! ```rust
//! use pathmux::PatternSet;
//!
//! let set = PatternSet::new();
//! set.register(pathmux::Pattern::parse("/items/{id}").unwrap()).unwrap();
//! let matched = set.matches("GET", "", "/items/42").unwrap();
//! assert_eq!(matched.bindings["id"], "42");
//! ```

pub mod alias;
pub mod debug;
pub mod describe;
pub mod error;
pub mod pattern;
pub mod relate;
pub mod segment;
pub mod trie;
pub mod witness;

pub use alias::{PRwLock, PRwLockReadGuard, PRwLockWriteGuard};
pub use describe::describe_relationship;
pub use error::{ParseError, RegistrationConflict};
pub use pattern::Pattern;
pub use relate::Relationship;
pub use segment::Segment;
pub use trie::{Matched, PatternSet};
