//! Non-uniform random variates.
//!
//! Every generator here is a pure function of a caller-supplied
//! [`rand::Rng`], and consumes only `rng.random::<f64>()` (uniform draws
//! in `[0, 1)`) as its primitive. Swapping the generator swaps the entire
//! distribution source, which keeps simulations reproducible from a single
//! seed.
//!
//! - [`normal`], [`normal_pair`] — standard normals via Box–Muller
//! - [`gamma_half`] — Gamma(df/2) by rejection sampling
//! - [`beta`] — Beta(df1/2, df2/2) as a gamma ratio
//! - [`on_sphere`] — uniform direction on the unit sphere
//! - [`cauchy`] — multivariate Cauchy with a scale parameter

mod normal;
mod univariate;
mod vector;

pub use normal::{normal, normal_pair};
pub use univariate::{beta, gamma_half};
pub use vector::{cauchy, on_sphere};
