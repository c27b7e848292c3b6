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

use std::f64;

use cgmath::{InnerSpace, Vector3};
use smallvec::SmallVec;

use crate::error::RootError;

/// Default tolerance on the discriminant of a quadratic: anything within
/// machine epsilon of zero is a double root.
pub const DISCRIMINANT_EPSILON: f64 = f64::EPSILON;

/// Sign of x, with zero counted as positive.
#[inline(always)]
pub fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Solves `a·x² + b·x + c = 0` and returns both real roots in ascending order.
///
/// The discriminant must be non-negative up to a tolerance of `epsilon`
/// relative to the magnitude of its terms, `b²` and `4ac`; a discriminant
/// within that tolerance of zero is treated as exactly zero and yields a
/// double root. The larger-magnitude root is taken from the sign-matched
/// branch `q = b + sign(b)·√Δ` and the other from the product of the roots, so
/// no root is computed as the difference of two nearly equal numbers.
///
/// A vanishing `a` yields the linear root `-c / b` plus an infinite one. A
/// constant polynomial (`a = b = 0`) has no meaningful roots and must not be
/// passed in.
pub fn solve_quadratic(a: f64, b: f64, c: f64, epsilon: f64) -> Result<[f64; 2], RootError> {
    let delta = b * b - 4.0 * a * c;
    let tolerance = epsilon * (b * b + (4.0 * a * c).abs());
    if !(delta >= -tolerance) {
        return Err(RootError::InvalidPolynomial {
            discriminant: delta,
            epsilon: tolerance,
        });
    }

    let mut q = b;
    if delta > tolerance {
        q += sign(b) * delta.sqrt();
    }
    if q == 0.0 {
        // b and the discriminant both vanish: double root at the origin.
        return Ok([0.0, 0.0]);
    }

    let r0 = -2.0 * c / q;
    let r1 = -q / (2.0 * a);
    if r0 > r1 {
        Ok([r1, r0])
    } else {
        Ok([r0, r1])
    }
}

/// A cubic function of one variable together with its derivative.
///
/// In collision queries the variable is time and a real root in `[0, 1]` is a
/// moment where the primitives become coplanar.
pub trait CubicEquation {
    fn eval(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}

/// Any pair of closures `(f, f')` is a cubic evaluator.
impl<F, D> CubicEquation for (F, D)
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    #[inline]
    fn derivative(&self, x: f64) -> f64 {
        (self.1)(x)
    }
}

/// `a·t² + b·t + c`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        (self.a * t + self.b) * t + self.c
    }

    /// Both roots, ascending. See `solve_quadratic`.
    pub fn roots(&self, epsilon: f64) -> Result<[f64; 2], RootError> {
        solve_quadratic(self.a, self.b, self.c, epsilon)
    }

    /// Sum of the absolute values of the coefficients.
    pub fn weight(&self) -> f64 {
        self.a.abs() + self.b.abs() + self.c.abs()
    }

    /// Per-component coefficients of `x(t) × z(t)` where `x(t) = x0 + t·x1`
    /// and `z(t) = z0 + t·z1`.
    ///
    /// The cross product vanishes exactly when the two vectors are parallel,
    /// which is how a moving point becomes collinear with a moving edge.
    pub fn cross(
        x0: Vector3<f64>,
        x1: Vector3<f64>,
        z0: Vector3<f64>,
        z1: Vector3<f64>,
    ) -> [Quadratic; 3] {
        let c = x0.cross(z0);
        let b = x1.cross(z0) + x0.cross(z1);
        let a = x1.cross(z1);
        [
            Quadratic { a: a.x, b: b.x, c: c.x },
            Quadratic { a: a.y, b: b.y, c: c.y },
            Quadratic { a: a.z, b: b.z, c: c.z },
        ]
    }
}

/// `a·t³ + b·t² + c·t + d`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cubic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

#[inline(always)]
fn triple(x: Vector3<f64>, y: Vector3<f64>, z: Vector3<f64>) -> f64 {
    x.cross(y).dot(z)
}

impl Cubic {
    /// The triple product `(x(t) × y(t)) · z(t)` of three linearly moving
    /// vectors, `v(t) = v0 + t·v1`.
    ///
    /// It is six times the signed volume of the tetrahedron spanned by the
    /// vectors, so it is zero whenever the four points they connect are
    /// coplanar.
    pub fn triple_product(
        x0: Vector3<f64>,
        x1: Vector3<f64>,
        y0: Vector3<f64>,
        y1: Vector3<f64>,
        z0: Vector3<f64>,
        z1: Vector3<f64>,
    ) -> Self {
        Cubic {
            a: triple(x1, y1, z1),
            b: triple(x1, y1, z0) + triple(x1, y0, z1) + triple(x0, y1, z1),
            c: triple(x1, y0, z0) + triple(x0, y1, z0) + triple(x0, y0, z1),
            d: triple(x0, y0, z0),
        }
    }

    /// Real, finite zeros of the derivative in ascending order.
    ///
    /// None are returned when the derivative is constant or has no real
    /// roots.
    pub fn critical_points(&self, epsilon: f64) -> SmallVec<[f64; 2]> {
        let mut points = SmallVec::new();
        let (a, b, c) = (3.0 * self.a, 2.0 * self.b, self.c);
        if a == 0.0 {
            if b != 0.0 {
                points.push(-c / b);
            }
            return points;
        }
        if let Ok(roots) = solve_quadratic(a, b, c, epsilon) {
            for &r in roots.iter() {
                if r.is_finite() {
                    points.push(r);
                }
            }
        }
        points
    }

    /// An upper bound on `|f'|` over `[lo, hi]`.
    ///
    /// The derivative is a parabola, so its extremes lie on the interval ends
    /// or on its vertex (the inflection point of the cubic).
    pub fn slope_bound(&self, lo: f64, hi: f64) -> f64 {
        let mut bound = self.derivative(lo).abs().max(self.derivative(hi).abs());
        if self.a != 0.0 {
            let inflection = -self.b / (3.0 * self.a);
            if inflection > lo && inflection < hi {
                bound = bound.max(self.derivative(inflection).abs());
            }
        }
        bound
    }
}

impl CubicEquation for Cubic {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    #[inline]
    fn derivative(&self, x: f64) -> f64 {
        (3.0 * self.a * x + 2.0 * self.b) * x + self.c
    }
}
