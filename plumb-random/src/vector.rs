use std::f64::consts::PI;

use rand::Rng;

use crate::{beta, normal, normal_pair};

/// Draws a point uniformly distributed on the surface of the unit
/// `dim`-sphere.
///
/// Normalizes a vector of independent standard normals, generated in
/// pairs. Returns an empty vector for `dim == 0`.
pub fn on_sphere<R: Rng + ?Sized>(rng: &mut R, dim: usize) -> Vec<f64> {
    let mut x = vec![0.0; dim];
    let mut squared_length = 0.0;

    for pair in x.chunks_exact_mut(2) {
        let (a, b) = normal_pair(rng);
        pair[0] = a;
        pair[1] = b;
        squared_length += a * a + b * b;
    }

    if dim % 2 == 1 {
        let a = normal(rng);
        x[dim - 1] = a;
        squared_length += a * a;
    }

    let scale = 1.0 / squared_length.sqrt();
    for value in &mut x {
        *value *= scale;
    }

    x
}

/// Draws a vector from the `dim`-variate Cauchy density with the given
/// scale.
///
/// The univariate case inverts the Cauchy CDF directly, with the tangent
/// argument pulled fractionally inside its asymptotes. Higher dimensions
/// combine a uniform direction with a beta-distributed radius; radii past
/// the representable tail are clamped.
pub fn cauchy<R: Rng + ?Sized>(rng: &mut R, dim: usize, scale: f64) -> Vec<f64> {
    if dim == 0 {
        return Vec::new();
    }

    if dim == 1 {
        let angle = PI * rng.random::<f64>() - 0.5 * PI;
        return vec![scale * (0.999_999_99 * angle).tan()];
    }

    let mut x = on_sphere(rng, dim);

    let b = beta(rng, dim as u32, 1);
    let radius = if b < 1.0 {
        scale * (b / (1.0 - b)).sqrt()
    } else {
        1.0e10
    };

    for value in &mut x {
        *value *= radius;
    }

    x
}
