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

use cgmath::{InnerSpace, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Maximum tolerence for error, relative to the size of the geometry being
/// tested.
pub const COLLISION_EPSILON: f64 = 0.000001;

/// Segments are a pair of end points.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
}

impl From<(Point3<f64>, Point3<f64>)> for Segment {
    fn from(p: (Point3<f64>, Point3<f64>)) -> Self {
        Segment { a: p.0, b: p.1 }
    }
}

/// Triangles are three points in space.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
    pub c: Point3<f64>,
}

impl From<(Point3<f64>, Point3<f64>, Point3<f64>)> for Triangle {
    fn from(p: (Point3<f64>, Point3<f64>, Point3<f64>)) -> Self {
        Triangle {
            a: p.0,
            b: p.1,
            c: p.2,
        }
    }
}

impl Triangle {
    /// Unnormalized face normal. Zero for a degenerate triangle.
    pub fn normal(&self) -> Vector3<f64> {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// The three edges, in winding order.
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment { a: self.a, b: self.b },
            Segment { a: self.b, b: self.c },
            Segment { a: self.c, b: self.a },
        ]
    }
}

/// Linear interpolation between two states of the same geometry.
pub trait Lerp {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for Point3<f64> {
    #[inline]
    fn lerp(&self, to: &Point3<f64>, t: f64) -> Point3<f64> {
        *self + (*to - *self) * t
    }
}

impl Lerp for Segment {
    fn lerp(&self, to: &Segment, t: f64) -> Segment {
        Segment {
            a: self.a.lerp(&to.a, t),
            b: self.b.lerp(&to.b, t),
        }
    }
}

impl Lerp for Triangle {
    fn lerp(&self, to: &Triangle, t: f64) -> Triangle {
        Triangle {
            a: self.a.lerp(&to.a, t),
            b: self.b.lerp(&to.b, t),
            c: self.c.lerp(&to.c, t),
        }
    }
}

/// A geometry over one time step. Every vertex moves in a straight line from
/// its position in `t0` to its position in `t1`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Swept<T> {
    pub t0: T,
    pub t1: T,
}

impl<T: Lerp + Copy> Swept<T> {
    pub fn new(t0: T, t1: T) -> Self {
        Swept { t0, t1 }
    }

    /// A geometry that does not move during the step.
    pub fn stationary(obj: T) -> Self {
        Swept { t0: obj, t1: obj }
    }

    /// The geometry at time t, 0 <= t <= 1.
    pub fn at(&self, t: f64) -> T {
        self.t0.lerp(&self.t1, t)
    }
}

impl Swept<Point3<f64>> {
    /// Start position and displacement over the step.
    #[inline]
    pub fn motion(&self) -> (Point3<f64>, Vector3<f64>) {
        (self.t0, self.t1 - self.t0)
    }
}

impl Swept<Segment> {
    pub fn a(&self) -> Swept<Point3<f64>> {
        Swept::new(self.t0.a, self.t1.a)
    }

    pub fn b(&self) -> Swept<Point3<f64>> {
        Swept::new(self.t0.b, self.t1.b)
    }
}

impl Swept<Triangle> {
    pub fn a(&self) -> Swept<Point3<f64>> {
        Swept::new(self.t0.a, self.t1.a)
    }

    pub fn b(&self) -> Swept<Point3<f64>> {
        Swept::new(self.t0.b, self.t1.b)
    }

    pub fn c(&self) -> Swept<Point3<f64>> {
        Swept::new(self.t0.c, self.t1.c)
    }

    /// The swept edges, in winding order.
    pub fn edges(&self) -> [Swept<Segment>; 3] {
        let e0 = self.t0.edges();
        let e1 = self.t1.edges();
        [
            Swept::new(e0[0], e1[0]),
            Swept::new(e0[1], e1[1]),
            Swept::new(e0[2], e1[2]),
        ]
    }
}

#[inline(always)]
pub(crate) fn clamp(n: f64, min: f64, max: f64) -> f64 {
    if n < min {
        min
    } else if n > max {
        max
    } else {
        n
    }
}

/// Often times we want to determine how close to objects are, or what pair of
/// points on their surfaces are closest.
pub trait MinDistance<To = Point3<f64>, Result = Point3<f64>> {
    fn min_dist(&self, to: &To) -> Result;
}

impl MinDistance<Point3<f64>> for Segment {
    /// Returns closest point on segment to q
    fn min_dist(&self, q: &Point3<f64>) -> Point3<f64> {
        let ab = self.b - self.a;
        let t = ab.dot(q - self.a);
        if t <= 0.0 {
            self.a
        } else {
            let denom = ab.dot(ab);
            if t >= denom {
                self.b
            } else {
                self.a + ab * (t / denom)
            }
        }
    }
}

impl MinDistance<Point3<f64>, f64> for Segment {
    /// Returns the distance between the segment and the point.
    fn min_dist(&self, q: &Point3<f64>) -> f64 {
        let p: Point3<f64> = self.min_dist(q);
        (q - p).magnitude()
    }
}

impl MinDistance<Segment, (Point3<f64>, Point3<f64>)> for Segment {
    /// Returns the pair of points, one on each segment, that are closest to
    /// each other. Parallel segments pick the pair at the start of self.
    fn min_dist(&self, to: &Segment) -> (Point3<f64>, Point3<f64>) {
        let d1 = self.b - self.a;
        let d2 = to.b - to.a;
        let a = d1.magnitude2();
        let e = d2.magnitude2();
        let r = self.a - to.a;
        let f = d2.dot(r);
        let (s, t) = if a <= f64::MIN_POSITIVE && e <= f64::MIN_POSITIVE {
            (0.0, 0.0)
        } else if a <= f64::MIN_POSITIVE {
            (0.0, clamp(f / e, 0.0, 1.0))
        } else {
            let c = d1.dot(r);
            if e <= f64::MIN_POSITIVE {
                (clamp(-c / a, 0.0, 1.0), 0.0)
            } else {
                let b = d1.dot(d2);
                let denom = a * e - b * b;
                let s = if denom != 0.0 {
                    clamp((b * f - c * e) / denom, 0.0, 1.0)
                } else {
                    0.0
                };
                let t = (b * s + f) / e;
                if t < 0.0 {
                    (clamp(-c / a, 0.0, 1.0), 0.0)
                } else if t > 1.0 {
                    (clamp((b - c) / a, 0.0, 1.0), 1.0)
                } else {
                    (s, t)
                }
            }
        };
        (self.a + d1 * s, to.a + d2 * t)
    }
}

impl MinDistance<Segment, f64> for Segment {
    /// Returns the distance between the two segments.
    fn min_dist(&self, to: &Segment) -> f64 {
        let (p, q): (Point3<f64>, Point3<f64>) = self.min_dist(to);
        (q - p).magnitude()
    }
}

impl MinDistance<Point3<f64>> for Triangle {
    /// Returns closest point on the triangle to q. The triangle must not be
    /// degenerate.
    fn min_dist(&self, q: &Point3<f64>) -> Point3<f64> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = q - self.a;
        let d1 = ab.dot(ap);
        let d2 = ac.dot(ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return self.a;
        }

        let bp = q - self.b;
        let d3 = ab.dot(bp);
        let d4 = ac.dot(bp);
        if d3 >= 0.0 && d4 <= d3 {
            return self.b;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return self.a + ab * v;
        }

        let cp = q - self.c;
        let d5 = ab.dot(cp);
        let d6 = ac.dot(cp);
        if d6 >= 0.0 && d5 <= d6 {
            return self.c;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return self.a + ac * w;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.b + (self.c - self.b) * w;
        }

        let denom = 1.0 / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        self.a + ab * v + ac * w
    }
}

impl MinDistance<Point3<f64>, f64> for Triangle {
    /// Returns the distance between the triangle and the point. Degenerate
    /// triangles are measured by their edges.
    fn min_dist(&self, q: &Point3<f64>) -> f64 {
        if self.normal().magnitude2() <= f64::MIN_POSITIVE {
            return self
                .edges()
                .iter()
                .map(|e| MinDistance::<Point3<f64>, f64>::min_dist(e, q))
                .fold(f64::INFINITY, f64::min);
        }
        let p: Point3<f64> = self.min_dist(q);
        (q - p).magnitude()
    }
}
