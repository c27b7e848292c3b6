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

use std::ops::Add;

use cgmath::{EuclideanSpace, Point3, Vector3};

use crate::geom::*;

/// Axis Aligned Bounding Boxes are closed boxes aligned to the axes of the
/// coordinate system. AABBs are described by a point and three half widths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub c: Point3<f64>,
    pub r: Vector3<f64>,
}

impl AABB {
    /// The smallest AABB that encloses the two arguments.
    pub fn combine(a: &AABB, b: &AABB) -> AABB {
        let lower = Vector3::new(
            (a.c.x - a.r.x).min(b.c.x - b.r.x),
            (a.c.y - a.r.y).min(b.c.y - b.r.y),
            (a.c.z - a.r.z).min(b.c.z - b.r.z),
        );
        let upper = Vector3::new(
            (a.c.x + a.r.x).max(b.c.x + b.r.x),
            (a.c.y + a.r.y).max(b.c.y + b.r.y),
            (a.c.z + a.r.z).max(b.c.z + b.r.z),
        );
        AABB {
            c: Point3::from_vec((upper + lower) / 2.0),
            r: (upper - lower) / 2.0,
        }
    }

    /// Returns true if the two boxes overlap. Touching boxes overlap.
    pub fn overlaps(&self, rhs: &AABB) -> bool {
        (self.c.x - rhs.c.x).abs() <= (self.r.x + rhs.r.x)
            && (self.c.y - rhs.c.y).abs() <= (self.r.y + rhs.r.y)
            && (self.c.z - rhs.c.z).abs() <= (self.r.z + rhs.r.z)
    }
}

impl Add<f64> for AABB {
    type Output = Self;

    /// Extend AABB
    fn add(self, s: f64) -> AABB {
        AABB {
            r: self.r + Vector3::new(s, s, s),
            ..self
        }
    }
}

/// A type that can be decomposed into a bound.
pub trait BoundedBy<B> {
    fn bounds(&self) -> B;
}

impl BoundedBy<AABB> for Point3<f64> {
    fn bounds(&self) -> AABB {
        AABB {
            c: *self,
            r: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

impl BoundedBy<AABB> for Segment {
    fn bounds(&self) -> AABB {
        AABB::combine(&self.a.bounds(), &self.b.bounds())
    }
}

impl BoundedBy<AABB> for Triangle {
    fn bounds(&self) -> AABB {
        AABB::combine(
            &AABB::combine(&self.a.bounds(), &self.b.bounds()),
            &self.c.bounds(),
        )
    }
}

impl<T: BoundedBy<AABB>> BoundedBy<AABB> for Swept<T> {
    /// Vertices move in straight lines, so the swept volume is enclosed by the
    /// bounds of the start and end states.
    fn bounds(&self) -> AABB {
        AABB::combine(&self.t0.bounds(), &self.t1.bounds())
    }
}
