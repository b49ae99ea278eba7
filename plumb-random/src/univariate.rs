use std::f64::consts::PI;

use rand::Rng;

use crate::normal;

/// Draws a Gamma(df/2) variate, `df >= 1`.
///
/// The parameter is given in degrees of freedom so that chi-square-style
/// callers avoid a division: a chi-square with `df` degrees of freedom is
/// twice a Gamma(df/2).
pub fn gamma_half<R: Rng + ?Sized>(rng: &mut R, df: u32) -> f64 {
    debug_assert!(df >= 1, "gamma_half requires df >= 1");

    match df {
        // Half a squared standard normal.
        1 => {
            let x = normal(rng);
            0.5 * x * x
        }

        // Gamma(1) is exponential(1).
        2 => loop {
            let u: f64 = rng.random();
            if u > 0.0 {
                return -u.ln();
            }
        },

        // Tangent-envelope rejection sampling, valid for df/2 > 1.
        _ => {
            let a = 0.5 * f64::from(df) - 1.0;
            let root = f64::from(df - 1).sqrt();

            loop {
                let y = (PI * rng.random::<f64>()).tan();
                let x = root * y + a;
                if x <= 0.0 {
                    continue;
                }
                let z = (1.0 + y * y) * (a * (x / a).ln() - root * y).exp();
                if rng.random::<f64>() <= z {
                    return x;
                }
            }
        }
    }
}

/// Draws a Beta(df1/2, df2/2) variate as a ratio of gammas.
pub fn beta<R: Rng + ?Sized>(rng: &mut R, df1: u32, df2: u32) -> f64 {
    let g1 = gamma_half(rng, df1);
    let g2 = gamma_half(rng, df2);

    g1 / (g1 + g2)
}
