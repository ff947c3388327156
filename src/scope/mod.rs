//! Nesting depth for scoped output.
//!
//! [`IndentScope`] is the bare counter. [`ScopeGuard`] brackets one named block:
//! it remembers the depth on entry and puts it back when dropped, so an early
//! return, a `?` or a panic inside the block can't leave the log indented.

mod guard;

pub use guard::ScopeGuard;

/// Non-negative nesting counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentScope {
    depth: usize,
}

impl IndentScope {
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    #[must_use]
    pub const fn depth(self) -> usize {
        self.depth
    }

    /// One level deeper. Returns the new depth.
    pub const fn increment(&mut self) -> usize {
        self.depth = self.depth.saturating_add(1);
        self.depth
    }

    /// One level shallower, never below zero. Returns the new depth.
    pub const fn decrement(&mut self) -> usize {
        self.depth = self.depth.saturating_sub(1);
        self.depth
    }

    /// Jumps to `depth`; negative values clamp to zero. Returns the new depth.
    pub fn reset(&mut self, depth: isize) -> usize {
        self.depth = usize::try_from(depth).unwrap_or(0);
        self.depth
    }

    /// Puts back a depth saved earlier.
    pub const fn restore(&mut self, depth: usize) {
        self.depth = depth;
    }
}
