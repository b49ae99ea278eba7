//! Numerical search routines for the Plumb project.
//!
//! The entry point is [`minimum::grid::search`], which brackets a rough
//! global minimum of a univariate criterion by scanning an equispaced grid
//! and adaptively extending the domain when the minimum lies at an edge.

pub mod minimum;
