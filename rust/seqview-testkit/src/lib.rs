//! Test utilities for the seqview crates.
//!
//! This crate provides:
//! - Reference slicing over plain slices, used as the oracle views are
//!   compared against
//! - Seeded random mutation of a source vector, for exercising views while
//!   their source changes underneath them

pub mod mutation;
pub mod reference;
