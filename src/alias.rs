//! Type aliases for pathmux.
//!
//! All internal code imports synchronization primitives from here rather than
//! from `std::sync` or `parking_lot` directly, so the choice of lock can be
//! revisited in one place.

/// Reader-writer lock used to guard the [`crate::trie::PatternSet`]'s registry
/// and trie root.
///
/// An alias for `parking_lot::RwLock`: no lock poisoning (a panic while
/// holding the lock does not wedge every future reader), and a smaller,
/// faster implementation than `std::sync::RwLock`.
pub use parking_lot::RwLock as PRwLock;

/// Read guard for [`PRwLock`].
pub use parking_lot::RwLockReadGuard as PRwLockReadGuard;

/// Write guard for [`PRwLock`].
pub use parking_lot::RwLockWriteGuard as PRwLockWriteGuard;
