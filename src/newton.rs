// Copyright 2017 Matthew Plant. This file is part of MGF.
//
// MGF is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// MGF is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with MGF. If not, see <http://www.gnu.org/licenses/>.

use log::trace;

use crate::error::RootError;
use crate::geom::clamp;
use crate::polynomial::{Cubic, CubicEquation};

/// Number of halvings after which an interval of `[0, 1]` is below the
/// resolution of an f64.
const BISECTION_STEPS: usize = 100;

/// Newton steps never move more than the unit interval. A `0 / 0` step means
/// we are sitting on a flat root and should not move at all.
#[inline(always)]
fn newton_step(step: f64) -> f64 {
    if step.is_nan() {
        0.0
    } else {
        clamp(step, -1.0, 1.0)
    }
}

/// Refines `x0` towards a root of `f` with Newton-Raphson.
///
/// Each step is clamped to `[-1, 1]`, which keeps a near-zero derivative from
/// throwing the estimate arbitrarily far. At least one step is always taken.
/// Iteration stops once a step is no larger than `tolerance`; if that has not
/// happened after `max_iter` steps `DidNotConverge` carries the last estimate.
pub fn newton_raphson<F>(f: &F, x0: f64, tolerance: f64, max_iter: usize) -> Result<f64, RootError>
where
    F: CubicEquation + ?Sized,
{
    let mut x = x0;
    let mut iterations = 0;
    loop {
        let prev_x = x;
        x -= newton_step(f.eval(x) / f.derivative(x));
        iterations += 1;
        if (x - prev_x).abs() <= tolerance {
            return Ok(x);
        }
        if iterations >= max_iter {
            return Err(RootError::DidNotConverge {
                estimate: x,
                iterations,
            });
        }
    }
}

/// Newton-Raphson with a fixed divisor.
///
/// `locally_min_gradient` stands in for `f'(x)` at every step. When it is a
/// bound on the slope over the region being searched (with the slope's sign),
/// no step overshoots a root, so the iterate creeps towards the earliest root
/// from one side. Convergence is only linear, hence the cap: after `max_iter`
/// steps the current estimate is returned as is. At least one step is always
/// taken.
pub fn modified_newton_raphson<F>(
    f: &F,
    x0: f64,
    locally_min_gradient: f64,
    tolerance: f64,
    max_iter: usize,
) -> f64
where
    F: CubicEquation + ?Sized,
{
    let mut x = x0;
    let mut iterations = 0;
    loop {
        let prev_x = x;
        x -= newton_step(f.eval(x) / locally_min_gradient);
        iterations += 1;
        if !((x - prev_x).abs() > tolerance && iterations < max_iter) {
            return x;
        }
    }
}

/// Plain bisection on a sign change. Returns the end of the final bracket on
/// the `lo` side.
pub fn bisect<F>(f: &F, mut lo: f64, mut hi: f64) -> f64
where
    F: CubicEquation + ?Sized,
{
    let mut f_lo = f.eval(lo);
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        let f_mid = f.eval(mid);
        if f_mid == 0.0 {
            return mid;
        }
        if (f_mid < 0.0) == (f_lo < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Finds the root of `f` on `[lo, hi]`, an interval where `f` is monotone and
/// changes sign.
///
/// A slope-bounded modified Newton pass approaches from `lo`, plain Newton
/// polishes the estimate, and bisection takes over if Newton wanders out of
/// the bracket or fails to settle.
pub fn bracketed_root(f: &Cubic, lo: f64, hi: f64, tolerance: f64, max_iter: usize) -> f64 {
    let f_lo = f.eval(lo);
    let f_hi = f.eval(hi);
    if f_lo == 0.0 {
        return lo;
    }
    if f_hi == 0.0 {
        return hi;
    }

    let slope = f.slope_bound(lo, hi);
    let mut x = lo;
    if slope > 0.0 {
        let gradient = if f_hi > f_lo { slope } else { -slope };
        x = modified_newton_raphson(f, lo, gradient, tolerance, max_iter);
    }
    let x = clamp(x, lo, hi);

    match newton_raphson(f, x, tolerance, max_iter) {
        Ok(root) if root >= lo && root <= hi && f.eval(root).abs() <= f.eval(x).abs() => root,
        res => {
            trace!("newton refinement on [{}, {}] rejected ({:?}), bisecting", lo, hi, res);
            bisect(f, lo, hi)
        }
    }
}
