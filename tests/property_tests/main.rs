//! Property-based testing for fixture invariants
//!
//! Checks that every generated fixture satisfies its value domains,
//! whatever the seed and event count.

mod event_invariants;
