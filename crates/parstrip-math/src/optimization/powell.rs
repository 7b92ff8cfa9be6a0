//! Powell's direction-set minimization.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::optimization::{Minimizer, MinimizerResult};

const GOLD: f64 = 1.618_034;
const GLIMIT: f64 = 100.0;
const CGOLD: f64 = 0.381_966_0;
const TINY: f64 = 1e-25;

/// Configuration for [`PowellMinimizer`].
#[derive(Debug, Clone, Copy)]
pub struct PowellConfig {
    /// Relative tolerance on the objective decrease per iteration.
    pub tolerance: f64,
    /// Maximum number of direction-set iterations.
    pub max_iterations: u32,
}

impl Default for PowellConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 1000,
        }
    }
}

/// Powell's direction-set method.
///
/// Minimizes a function of n variables without derivatives by cycling
/// through a set of search directions, line-minimizing along each, and
/// periodically replacing the direction of largest decrease with the
/// net displacement of the whole cycle.
///
/// # Example
///
/// ```rust
/// use parstrip_math::optimization::{Minimizer, PowellMinimizer};
///
/// let objective = |p: &[f64]| (p[0] - 2.0).powi(2) + (p[1] - 3.0).powi(2);
/// let result = PowellMinimizer::default()
///     .minimize(&objective, &[0.0, 0.0])
///     .unwrap();
/// assert!(result.converged);
/// assert!((result.parameters[0] - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PowellMinimizer {
    config: PowellConfig,
}

impl PowellMinimizer {
    /// Creates a minimizer with the given configuration.
    #[must_use]
    pub fn new(config: PowellConfig) -> Self {
        Self { config }
    }
}

impl Minimizer for PowellMinimizer {
    fn minimize(
        &self,
        objective: &dyn Fn(&[f64]) -> f64,
        initial: &[f64],
    ) -> MathResult<MinimizerResult> {
        let n = initial.len();
        if n == 0 {
            return Err(MathError::invalid_input("initial point must be non-empty"));
        }

        let mut point = initial.to_vec();
        let mut f_current = objective(&point);
        if !f_current.is_finite() {
            return Err(MathError::invalid_input(
                "objective is not finite at the initial point",
            ));
        }

        // Start from the coordinate axes as the direction set.
        let mut directions: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let mut d = vec![0.0; n];
                d[i] = 1.0;
                d
            })
            .collect();

        for iteration in 1..=self.config.max_iterations {
            let f_start = f_current;
            let point_start = point.clone();

            // Line-minimize along each direction, tracking the direction
            // of largest decrease.
            let mut largest_decrease = 0.0;
            let mut largest_index = 0;
            for (i, dir) in directions.iter().enumerate() {
                let f_before = f_current;
                let (step, f_min) = line_minimize(objective, &point, dir);
                for (p, d) in point.iter_mut().zip(dir) {
                    *p += step * d;
                }
                f_current = f_min;
                if f_before - f_current > largest_decrease {
                    largest_decrease = f_before - f_current;
                    largest_index = i;
                }
            }

            if 2.0 * (f_start - f_current)
                <= self.config.tolerance * (f_start.abs() + f_current.abs()) + TINY
            {
                debug!(
                    "powell converged after {} iterations, objective {:.6e}",
                    iteration, f_current
                );
                return Ok(MinimizerResult {
                    parameters: point,
                    objective_value: f_current,
                    iterations: iteration,
                    converged: true,
                });
            }

            // Extrapolate along the net displacement of this cycle and
            // decide whether to adopt it as a new direction.
            let extrapolated: Vec<f64> = point
                .iter()
                .zip(&point_start)
                .map(|(p, p0)| 2.0 * p - p0)
                .collect();
            let f_extrapolated = objective(&extrapolated);

            if f_extrapolated < f_start {
                let t = 2.0 * (f_start - 2.0 * f_current + f_extrapolated)
                    * (f_start - f_current - largest_decrease).powi(2)
                    - largest_decrease * (f_start - f_extrapolated).powi(2);
                if t < 0.0 {
                    let new_dir: Vec<f64> = point
                        .iter()
                        .zip(&point_start)
                        .map(|(p, p0)| p - p0)
                        .collect();
                    let (step, f_min) = line_minimize(objective, &point, &new_dir);
                    for (p, d) in point.iter_mut().zip(&new_dir) {
                        *p += step * d;
                    }
                    f_current = f_min;
                    directions[largest_index] = directions[n - 1].clone();
                    directions[n - 1] = new_dir;
                }
            }
        }

        debug!(
            "powell stopped at iteration limit {}, objective {:.6e}",
            self.config.max_iterations, f_current
        );
        Ok(MinimizerResult {
            parameters: point,
            objective_value: f_current,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }
}

/// Minimizes the objective along a ray: finds the scalar `t` minimizing
/// `f(point + t * direction)`. Returns `(t, f_min)`.
fn line_minimize(
    objective: &dyn Fn(&[f64]) -> f64,
    point: &[f64],
    direction: &[f64],
) -> (f64, f64) {
    let g = |t: f64| {
        let trial: Vec<f64> = point
            .iter()
            .zip(direction)
            .map(|(p, d)| p + t * d)
            .collect();
        objective(&trial)
    };

    let (a, b, c) = bracket_minimum(&g, 0.0, 1.0);
    brent(&g, a, b, c, 1e-10, 100)
}

/// Expands an initial interval downhill until a minimum is bracketed:
/// returns `(a, b, c)` with `b` between `a` and `c` and `g(b)` below both
/// endpoint values.
fn bracket_minimum(g: &dyn Fn(f64) -> f64, mut a: f64, mut b: f64) -> (f64, f64, f64) {
    let mut fa = g(a);
    let mut fb = g(b);
    if fb > fa {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = b + GOLD * (b - a);
    let mut fc = g(c);

    while fb > fc {
        // Parabolic extrapolation from a, b, c.
        let r = (b - a) * (fb - fc);
        let q = (b - c) * (fb - fa);
        let denom = 2.0 * (q - r).abs().max(TINY) * (q - r).signum_or_one();
        let mut u = b - ((b - c) * q - (b - a) * r) / denom;
        let ulim = b + GLIMIT * (c - b);
        let mut fu;

        if (b - u) * (u - c) > 0.0 {
            // u is between b and c
            fu = g(u);
            if fu < fc {
                return (b, u, c);
            } else if fu > fb {
                return (a, b, u);
            }
            u = c + GOLD * (c - b);
            fu = g(u);
        } else if (c - u) * (u - ulim) > 0.0 {
            // u is between c and its allowed limit
            fu = g(u);
            if fu < fc {
                b = c;
                c = u;
                u = u + GOLD * (u - b);
                fb = fc;
                fc = fu;
                fu = g(u);
            }
        } else if (u - ulim) * (ulim - c) >= 0.0 {
            u = ulim;
            fu = g(u);
        } else {
            u = c + GOLD * (c - b);
            fu = g(u);
        }

        a = b;
        b = c;
        c = u;
        fa = fb;
        fb = fc;
        fc = fu;
    }

    (a, b, c)
}

/// Brent's parabolic-interpolation line minimizer on a bracketed interval.
/// Returns `(x_min, g(x_min))`.
fn brent(
    g: &dyn Fn(f64) -> f64,
    ax: f64,
    bx: f64,
    cx: f64,
    tol: f64,
    max_iterations: u32,
) -> (f64, f64) {
    let mut a = ax.min(cx);
    let mut b = ax.max(cx);

    let mut x = bx;
    let mut w = bx;
    let mut v = bx;
    let mut fx = g(x);
    let mut fw = fx;
    let mut fv = fx;

    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for _ in 0..max_iterations {
        let xm = 0.5 * (a + b);
        let tol1 = tol * x.abs() + TINY;
        let tol2 = 2.0 * tol1;

        if (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            return (x, fx);
        }

        let mut use_golden = true;
        if e.abs() > tol1 {
            // Trial parabolic fit through x, v, w.
            let r = (x - w) * (fx - fv);
            let q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            let mut q2 = 2.0 * (q - r);
            if q2 > 0.0 {
                p = -p;
            }
            q2 = q2.abs();
            let e_prev = e;
            e = d;

            if p.abs() < (0.5 * q2 * e_prev).abs() && p > q2 * (a - x) && p < q2 * (b - x) {
                d = p / q2;
                let u = x + d;
                if u - a < tol2 || b - u < tol2 {
                    d = tol1.copysign(xm - x);
                }
                use_golden = false;
            }
        }

        if use_golden {
            e = if x >= xm { a - x } else { b - x };
            d = CGOLD * e;
        }

        let u = if d.abs() >= tol1 {
            x + d
        } else {
            x + tol1.copysign(d)
        };
        let fu = g(u);

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    (x, fx)
}

/// Sign helper that treats zero as positive, used to keep the bracketing
/// denominator away from zero without changing its direction.
trait SignumOrOne {
    fn signum_or_one(self) -> f64;
}

impl SignumOrOne for f64 {
    fn signum_or_one(self) -> f64 {
        if self < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}
