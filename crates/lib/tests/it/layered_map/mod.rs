//! LayeredMap integration tests
//!
//! Organized by operation family: construction and lookup, mutation, iteration,
//! decomposition of record values, equality and concatenation.

mod concat_tests;
mod equality_tests;
mod map_tests;
