use std::f64::consts::TAU;

use rand::Rng;

/// Draws a standard normal (mean zero, unit variance) via Box–Muller.
pub fn normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.random();
        if u <= 0.0 {
            // log(0) is undefined
            continue;
        }
        let radius = (-2.0 * u.ln()).sqrt();
        return radius * (TAU * rng.random::<f64>()).cos();
    }
}

/// Draws a pair of independent standard normals.
///
/// Box–Muller produces two variates per pair of uniforms; use this when
/// consuming normals two at a time.
pub fn normal_pair<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    loop {
        let u: f64 = rng.random();
        if u <= 0.0 {
            // log(0) is undefined
            continue;
        }
        let radius = (-2.0 * u.ln()).sqrt();
        let angle = TAU * rng.random::<f64>();
        return (radius * angle.sin(), radius * angle.cos());
    }
}
