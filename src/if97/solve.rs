//! Bounded root finders shared by the iterative backward solvers.
//!
//! Every convergence loop in the crate goes through one of these
//! helpers, so every loop is statically bounded and exhaustion maps to
//! [`SteamError::NotConverged`].

use crate::error::{Result, SteamError};

/// Bisect `f(x) = target` for x in `[lo, hi]`, assuming `f` is
/// monotonically increasing over the bracket.
///
/// Converges when `|f(mid) - target| <= tol` or the bracket shrinks
/// below `x_tol`; returns `NotConverged` after `max_iter` iterations.
pub fn bisect<F>(
    mut f: F,
    mut lo: f64,
    mut hi: f64,
    target: f64,
    tol: f64,
    x_tol: f64,
    max_iter: u32,
    solver: &'static str,
) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        let val = f(mid)?;
        if (val - target).abs() <= tol || (hi - lo).abs() <= x_tol {
            return Ok(mid);
        }
        if val > target {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Err(SteamError::NotConverged { solver, iterations: max_iter })
}

/// Like [`bisect`] but for a monotonically decreasing `f`.
pub fn bisect_decreasing<F>(
    mut f: F,
    mut lo: f64,
    mut hi: f64,
    target: f64,
    tol: f64,
    x_tol: f64,
    max_iter: u32,
    solver: &'static str,
) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        let val = f(mid)?;
        if (val - target).abs() <= tol || (hi - lo).abs() <= x_tol {
            return Ok(mid);
        }
        if val > target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Err(SteamError::NotConverged { solver, iterations: max_iter })
}

/// Newton iteration on `f(x) = target` with a finite-difference slope,
/// clamped to stay inside `[lo, hi]`.
///
/// Converges when `|f(x) - target| <= tol`; returns `NotConverged`
/// after `max_iter` iterations or if the local slope vanishes.
pub fn newton<F>(
    mut f: F,
    mut x: f64,
    lo: f64,
    hi: f64,
    target: f64,
    tol: f64,
    max_iter: u32,
    solver: &'static str,
) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    let dx = (hi - lo) * 1e-7;
    for _ in 0..max_iter {
        let val = f(x)?;
        if (val - target).abs() <= tol {
            return Ok(x);
        }
        let slope = (f(x + dx)? - val) / dx;
        if slope == 0.0 || !slope.is_finite() {
            break;
        }
        x = (x - (val - target) / slope).clamp(lo, hi);
    }
    Err(SteamError::NotConverged { solver, iterations: max_iter })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisect_finds_cube_root() {
        let r = bisect(|x| Ok(x * x * x), 0.0, 3.0, 8.0, 1e-10, 0.0, 100, "cube").unwrap();
        assert!((r - 2.0).abs() < 1e-6);
    }

    #[test]
    fn bisect_reports_exhaustion() {
        // 0.3 is never hit exactly by a dyadic midpoint, so with zero
        // tolerances the budget runs out
        let e = bisect(|x| Ok(x), 0.0, 1.0, 0.3, 0.0, 0.0, 5, "line").unwrap_err();
        assert!(matches!(e, SteamError::NotConverged { iterations: 5, .. }));
    }

    #[test]
    fn newton_stays_in_bracket() {
        let r = newton(|x| Ok(x * x), 1.0, 0.0, 10.0, 2.0, 1e-12, 60, "sqrt").unwrap();
        assert!((r - 2.0_f64.sqrt()).abs() < 1e-6);
    }
}
