//! The multiplication loops.
//!
//! `mult_ijk` is the textbook loop order and serves as the correctness
//! baseline; `mult_ikj` is the cache-friendly order the public entry points
//! dispatch to. Both overwrite the output and produce identical results.

pub mod mult_ijk;
pub mod mult_ikj;
