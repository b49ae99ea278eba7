//! Minimization of a univariate criterion.
//!
//! The solvers here locate a minimum without derivative information. Grid
//! bracketing ([`grid`]) delivers a three-point bracket around the lowest
//! sample found; a caller-side refinement stage can then narrow it.

pub mod grid;
