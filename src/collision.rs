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

use std::cmp::Ordering;

use cgmath::{InnerSpace, Point3};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::bounds::{BoundedBy, AABB};
use crate::config::CcdConfig;
use crate::geom::*;
use crate::newton::bracketed_root;
use crate::polynomial::{Cubic, CubicEquation, Quadratic};

/// Determine if objects collide and collect information on the collision if they
/// do. The type of the collision and the amount of information on the collision
/// returned depends on the CollisionType argument requested by the callback passed
/// to collide.
pub trait Collider<CollisionType: Clone, T = Self> {
    /// Collide with an object and call the callback for as many contacts there
    /// are. True is returned if any contact is found.
    fn collide<F: FnMut(CollisionType)>(&self, other: &T, mut callback: F) -> bool {
        if let Some(contact) = self.check_collision(other) {
            callback(contact);
            return true;
        }
        false
    }

    /// Returns the first collision found if any exists.
    fn check_collision(&self, other: &T) -> Option<CollisionType> {
        let mut collision = None;
        self.collide(other, |c| {
            collision = Some(c);
        });
        collision
    }
}

/// Impact models the first moment, 0 <= toi <= 1, during a time step at which
/// two swept primitives touch.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub toi: f64,
}

/// The coplanarity cubic of four moving points `o`, `x`, `y` and `z`, with the
/// tolerances derived from the size of the configuration.
struct Coplanarity {
    f: Cubic,
    /// |f| below this counts as coplanar.
    zero: f64,
    /// Distances below this count as touching.
    contact: f64,
}

impl Coplanarity {
    fn new(
        o: &Swept<Point3<f64>>,
        x: &Swept<Point3<f64>>,
        y: &Swept<Point3<f64>>,
        z: &Swept<Point3<f64>>,
        contact_tolerance: f64,
    ) -> Self {
        let (o0, od) = o.motion();
        let (x0, xd) = x.motion();
        let (y0, yd) = y.motion();
        let (z0, zd) = z.motion();
        let (x0, x1) = (x0 - o0, xd - od);
        let (y0, y1) = (y0 - o0, yd - od);
        let (z0, z1) = (z0 - o0, zd - od);

        let lx = x0.magnitude().max((x0 + x1).magnitude());
        let ly = y0.magnitude().max((y0 + y1).magnitude());
        let lz = z0.magnitude().max((z0 + z1).magnitude());

        Coplanarity {
            f: Cubic::triple_product(x0, x1, y0, y1, z0, z1),
            zero: contact_tolerance * lx * ly * lz,
            contact: contact_tolerance * lx.max(ly).max(lz),
        }
    }

    /// Splits [0, 1] at the critical points of the cubic. The cubic is
    /// monotone between consecutive splits.
    fn splits(&self, config: &CcdConfig) -> SmallVec<[f64; 4]> {
        let mut splits = SmallVec::new();
        splits.push(0.0);
        for &t in self.f.critical_points(config.discriminant_epsilon).iter() {
            if t > 0.0 && t < 1.0 {
                splits.push(t);
            }
        }
        splits.push(1.0);
        splits
    }

    /// Times in [0, 1] at which the points may be coplanar, ascending.
    ///
    /// Every sign change yields its root, whether or not its ends lie within
    /// tolerance of zero. Monotone pieces whose ends come within tolerance of
    /// zero contribute the ends as well, which covers touching at the start or
    /// end of the step and tangential (double root) contact at a critical
    /// point.
    fn candidates(&self, splits: &[f64], config: &CcdConfig) -> SmallVec<[f64; 8]> {
        let mut times: SmallVec<[f64; 8]> = SmallVec::new();
        for w in splits.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            let f_lo = self.f.eval(lo);
            let f_hi = self.f.eval(hi);
            if f_lo.abs() <= self.zero {
                times.push(lo);
            }
            if f_hi.abs() <= self.zero {
                times.push(hi);
            }
            if (f_lo < 0.0) != (f_hi < 0.0) {
                times.push(bracketed_root(
                    &self.f,
                    lo,
                    hi,
                    config.root_tolerance,
                    config.max_iterations,
                ));
            }
        }
        sort_times(&mut times);
        times
    }

    /// True when the points come within tolerance of a common plane at one of
    /// the splits. Over such a piece the primitives may slide into each other
    /// without the cubic changing sign.
    fn touches_plane(&self, splits: &[f64]) -> bool {
        splits.iter().any(|&t| self.f.eval(t).abs() <= self.zero)
    }
}

fn sort_times(times: &mut SmallVec<[f64; 8]>) {
    times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    times.dedup();
}

/// Earliest time at which a moving point comes within `contact` of a moving
/// edge.
///
/// The point and the edge's line are collinear when
/// `(e.b(t) - e.a(t)) × (p(t) - e.a(t))` vanishes. Each component is a
/// quadratic in t; the one with the largest coefficients is solved and its
/// roots, the ends of the step and the vertex of the parabola (the closest
/// approach when it never reaches zero) are checked by distance.
fn point_edge_toi(
    point: &Swept<Point3<f64>>,
    edge: &Swept<Segment>,
    contact: f64,
    config: &CcdConfig,
) -> Option<f64> {
    let (a0, ad) = edge.a().motion();
    let (b0, bd) = edge.b().motion();
    let (p0, pd) = point.motion();
    let quadratics = Quadratic::cross(b0 - a0, bd - ad, p0 - a0, pd - ad);

    let mut q = quadratics[0];
    for candidate in quadratics[1..].iter() {
        if candidate.weight() > q.weight() {
            q = *candidate;
        }
    }

    let mut times: SmallVec<[f64; 8]> = SmallVec::new();
    times.push(0.0);
    times.push(1.0);
    if q.a != 0.0 {
        times.push(clamp(-q.b / (2.0 * q.a), 0.0, 1.0));
        if let Ok(roots) = q.roots(config.discriminant_epsilon) {
            for &t in roots.iter() {
                if t >= 0.0 && t <= 1.0 {
                    times.push(t);
                }
            }
        }
    } else if q.b != 0.0 {
        let t = -q.c / q.b;
        if t >= 0.0 && t <= 1.0 {
            times.push(t);
        }
    }
    sort_times(&mut times);

    for &t in times.iter() {
        let d: f64 = edge.at(t).min_dist(&point.at(t));
        if d <= contact {
            return Some(t);
        }
    }

    if q.weight() == 0.0 {
        // Collinear for the whole step: the point slides along the edge's
        // line and the distance is not polynomial. Settle for the bounds.
        let p_bounds: AABB = point.bounds();
        let e_bounds: AABB = edge.bounds();
        if (p_bounds + contact).overlaps(&(e_bounds + contact)) {
            debug!("collinear point and edge with overlapping bounds, reporting toi 0");
            return Some(0.0);
        }
    }
    None
}

/// Earliest of the point-edge impacts of `pairs`.
fn earliest_point_edge_toi<'a, I>(pairs: I, contact: f64, config: &CcdConfig) -> Option<f64>
where
    I: IntoIterator<Item = (Swept<Point3<f64>>, &'a Swept<Segment>)>,
{
    pairs
        .into_iter()
        .filter_map(|(p, e)| point_edge_toi(&p, e, contact, config))
        .fold(None, |best: Option<f64>, t| match best {
            Some(b) if b <= t => Some(b),
            _ => Some(t),
        })
}

/// Earliest candidate time at which `touching` holds. When the primitives come
/// close to coplanar during the step the point-edge `sweep` is run as well,
/// since they can then enter each other through an edge at a time that is not
/// a root of the cubic.
fn first_impact<T, S>(
    coplanarity: &Coplanarity,
    config: &CcdConfig,
    touching: T,
    sweep: S,
) -> Option<Impact>
where
    T: Fn(f64) -> bool,
    S: FnOnce() -> Option<f64>,
{
    let splits = coplanarity.splits(config);
    let candidates = coplanarity.candidates(&splits, config);
    trace!("candidate times {:?}", &candidates[..]);

    let mut toi = candidates.iter().cloned().find(|&t| touching(t));
    if toi != Some(0.0) && coplanarity.touches_plane(&splits) {
        debug!("near coplanar during the step, sweeping edges");
        if let Some(t) = sweep() {
            toi = Some(toi.map_or(t, |toi| toi.min(t)));
        }
    }
    toi.map(|toi| Impact { toi })
}

/// Continuous collision between a moving point and a moving triangle.
///
/// Returns the earliest time of impact in [0, 1], or None if the point stays
/// clear of the triangle for the whole step. Near misses within the contact
/// tolerance are reported as impacts.
pub fn point_triangle_ccd(
    point: &Swept<Point3<f64>>,
    triangle: &Swept<Triangle>,
    config: &CcdConfig,
) -> Option<Impact> {
    let coplanarity = Coplanarity::new(
        &triangle.a(),
        &triangle.b(),
        &triangle.c(),
        point,
        config.contact_tolerance,
    );
    let contact = coplanarity.contact;
    trace!("point-triangle coplanarity {:?}", coplanarity.f);

    first_impact(
        &coplanarity,
        config,
        |t| {
            let d: f64 = triangle.at(t).min_dist(&point.at(t));
            d <= contact
        },
        // In the plane the point can only enter the triangle through one of
        // its edges.
        || {
            let edges = triangle.edges();
            earliest_point_edge_toi(edges.iter().map(|e| (*point, e)), contact, config)
        },
    )
}

/// Continuous collision between two moving edges.
///
/// Returns the earliest time of impact in [0, 1], or None if the edges stay
/// clear of each other for the whole step. Near misses within the contact
/// tolerance are reported as impacts.
pub fn edge_edge_ccd(
    ea: &Swept<Segment>,
    eb: &Swept<Segment>,
    config: &CcdConfig,
) -> Option<Impact> {
    let coplanarity = Coplanarity::new(&ea.a(), &ea.b(), &eb.a(), &eb.b(), config.contact_tolerance);
    let contact = coplanarity.contact;
    trace!("edge-edge coplanarity {:?}", coplanarity.f);

    first_impact(
        &coplanarity,
        config,
        |t| {
            let d: f64 = ea.at(t).min_dist(&eb.at(t));
            d <= contact
        },
        // Coplanar segments first meet where an end point of one touches the
        // other.
        || {
            let pairs = [(ea.a(), eb), (ea.b(), eb), (eb.a(), ea), (eb.b(), ea)];
            earliest_point_edge_toi(pairs.iter().cloned(), contact, config)
        },
    )
}

impl Collider<Impact, Swept<Triangle>> for Swept<Point3<f64>> {
    fn check_collision(&self, triangle: &Swept<Triangle>) -> Option<Impact> {
        point_triangle_ccd(self, triangle, &CcdConfig::default())
    }
}

impl Collider<Impact, Swept<Point3<f64>>> for Swept<Triangle> {
    fn check_collision(&self, point: &Swept<Point3<f64>>) -> Option<Impact> {
        point_triangle_ccd(point, self, &CcdConfig::default())
    }
}

impl Collider<Impact> for Swept<Segment> {
    fn check_collision(&self, other: &Swept<Segment>) -> Option<Impact> {
        edge_edge_ccd(self, other, &CcdConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Point3, Vector3};

    use crate::config::CcdConfig;
    use crate::geom::{Segment, Swept, Triangle};

    /// Single precision machine epsilon, the size of perturbation that breaks
    /// naive predicates.
    const E: f64 = f32::EPSILON as f64;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    fn tri(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Triangle {
        Triangle::from((a, b, c))
    }

    fn seg(a: Point3<f64>, b: Point3<f64>) -> Segment {
        Segment::from((a, b))
    }

    fn scaled(v: [Point3<f64>; 8], scale: f64) -> [Point3<f64>; 8] {
        let mut out = v;
        for p in out.iter_mut() {
            *p = Point3::new(p.x * scale, p.y * scale, p.z * scale);
        }
        out
    }

    mod point_triangle {
        use approx::assert_relative_eq;

        use super::*;
        use crate::collision::{point_triangle_ccd, Collider, Impact};

        fn ccd(v: [Point3<f64>; 8]) -> Option<Impact> {
            let point = Swept::new(v[0], v[4]);
            let triangle = Swept::new(tri(v[1], v[2], v[3]), tri(v[5], v[6], v[7]));
            point_triangle_ccd(&point, &triangle, &CcdConfig::default())
        }

        fn check_grid(scale: f64) {
            let offsets = [-1.0, 0.0, 0.5 - E, 0.5, 0.5 + E, 1.0, 2.0];
            let v1 = p(-1.0, 0.0, 1.0);
            let v2 = p(1.0, 0.0, 1.0);
            let v3 = p(0.0, 0.0, -1.0);
            for &v0z in [0.0, -1.0].iter() {
                let v0 = p(0.0, 1.0, v0z);
                for &g in offsets.iter() {
                    let u0y = -g;
                    for &u0z in [-E, 0.0, E].iter() {
                        for &u1y in offsets.iter() {
                            let u0 = Vector3::new(0.0, u0y, u0z);
                            let u1 = Vector3::new(0.0, u1y, 0.0);
                            let expected = -u0y + u1y >= 1.0 && v0z + u0z >= v3.z;
                            let v = [v0, v1, v2, v3, v0 + u0, v1 + u1, v2 + u1, v3 + u1];
                            let hit = ccd(scaled(v, scale));
                            assert!(
                                hit.is_some() || !expected,
                                "missed collision: scale={} v0z={} u0=({}, {}) u1y={}",
                                scale, v0z, u0y, u0z, u1y
                            );
                            // Only queries within the contact tolerance of
                            // touching may be reported spuriously.
                            let grazing = ((-u0y + u1y) - 1.0).abs() < 1e-3
                                || (v0z + u0z - v3.z).abs() < 1e-3;
                            if !grazing {
                                assert_eq!(hit.is_some(), expected);
                            }
                        }
                    }
                }
            }
        }

        #[test_log::test]
        fn test_general_grid() {
            check_grid(1.0);
        }

        #[test]
        fn test_small_scale_grid() {
            check_grid(1e-3);
        }

        #[test_log::test]
        fn test_crossing_plane_from_contact_band() {
            // Starts a hair above the plane of the triangle, outside it, and
            // crosses the plane inside it at t = 0.45.
            let triangle = Swept::stationary(tri(
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(0.0, 1.0, 0.0),
            ));
            let point = Swept::new(p(-0.5, 0.2, 9e-7), p(1.0, 0.2, -1.1e-6));
            let hit = point_triangle_ccd(&point, &triangle, &CcdConfig::default()).unwrap();
            assert!(hit.toi <= 0.45 + 1e-12);
        }

        #[test_log::test]
        fn test_millimetre_triangle() {
            // The edge ab tilts up while the point passes through the face at
            // t = 0.3. Every coefficient of the cubic is below 1e-8.
            let t0 = tri(p(0.0, 0.0, 0.0), p(1e-3, 0.0, 0.0), p(0.0, 1e-3, 0.0));
            let t1 = tri(p(0.0, 0.0, 0.0), p(1e-3, 0.0, 1e-3), p(0.0, 1e-3, 0.0));
            let point = Swept::new(p(2e-3, 2e-4, 1.05e-3), p(-3e-3, 2e-4, -1.95e-3));
            let hit = point_triangle_ccd(&point, &Swept::new(t0, t1), &CcdConfig::default());
            assert_relative_eq!(hit.unwrap().toi, 0.3, epsilon = 1e-9);
        }

        #[test]
        fn test_point_on_sweeping_plane() {
            // The triangle sweeps up through the point, which sits on, just
            // below or just above its lower edge.
            for &qy in [-E, 0.0, E].iter() {
                let q = p(0.0, qy, 0.0);
                let hit = ccd([
                    q,
                    p(0.0, 0.0, 0.0),
                    p(0.0, 1.0, 0.0),
                    p(1.0, 0.0, 0.0),
                    q,
                    p(0.0, 0.0, 1.0),
                    p(0.0, 1.0, 1.0),
                    p(1.0, 0.0, 1.0),
                ]);
                if qy >= 0.0 {
                    assert_eq!(hit, Some(Impact { toi: 0.0 }));
                }
            }
        }

        #[test]
        fn test_rotating_triangle() {
            let hit = ccd([
                p(0.1, 0.1, 0.1),
                p(0.0, 0.0, 1.0),
                p(1.0, 0.0, 1.0),
                p(0.0, 1.0, 1.0),
                p(0.1, 0.1, 0.1),
                p(0.0, 0.0, 0.0),
                p(0.0, 1.0, 0.0),
                p(1.0, 0.0, 0.0),
            ]);
            let toi = hit.unwrap().toi;
            assert!(toi > 0.0 && toi <= 1.0);
        }

        #[test_log::test]
        fn test_no_zero_toi() {
            let hit = ccd([
                p(0.0133653, 0.100651, -0.0215935),
                p(0.0100485, 0.0950896, -0.0171013),
                p(0.0130388, 0.100666, -0.0218112),
                p(0.015413, 0.100554, -0.0202265),
                p(0.0133652999767858, 0.099670000268615, -0.0215934999996444),
                p(0.0100484999799995, 0.0941086002577558, -0.0171012999972189),
                p(0.0130387999724314, 0.0996850002629403, -0.0218111999936902),
                p(0.0154129999740718, 0.0995730002646605, -0.020226499996014),
            ]);
            assert_eq!(hit, None);
        }

        #[test]
        fn test_false_negatives() {
            let hit = ccd([
                p(-4375459.0 / 1048576.0, 13354865.0 / 33554432.0, -11393047.0 / 8388608.0),
                p(-8363723.0 / 2097152.0, 16021805.0 / 33554432.0, -15346925.0 / 16777216.0),
                p(-4334121.0 / 1048576.0, 3618099.0 / 8388608.0, -12072633.0 / 8388608.0),
                p(-4482915.0 / 1048576.0, 3521177.0 / 8388608.0, -10864455.0 / 8388608.0),
                p(-4219061.0 / 1048576.0, 10201537.0 / 16777216.0, -3974493.0 / 4194304.0),
                p(-1051037.0 / 262144.0, 9399217.0 / 16777216.0, -6996963.0 / 8388608.0),
                p(-8539773.0 / 2097152.0, 4662053.0 / 8388608.0, -10288603.0 / 8388608.0),
                p(-8621451.0 / 2097152.0, 9321975.0 / 16777216.0, -151795.0 / 131072.0),
            ]);
            assert!(hit.is_some());

            let hit = ccd([
                p(-5066329.0 / 1048576.0, 3747703.0 / 8388608.0, -9110393.0 / 4194304.0),
                p(-5097349.0 / 1048576.0, 15565867.0 / 33554432.0, -8419809.0 / 4194304.0),
                p(-10108719.0 / 2097152.0, 4441449.0 / 8388608.0, -2398085.0 / 1048576.0),
                p(-10030265.0 / 2097152.0, 5321347.0 / 8388608.0, -4791705.0 / 2097152.0),
                p(-9984255.0 / 2097152.0, 8516467.0 / 16777216.0, -7675421.0 / 4194304.0),
                p(-5031053.0 / 1048576.0, 7841285.0 / 16777216.0, -14946117.0 / 8388608.0),
                p(-4854525.0 / 1048576.0, 4763077.0 / 8388608.0, -269775.0 / 131072.0),
                p(-9736347.0 / 2097152.0, 10062471.0 / 16777216.0, -4408415.0 / 2097152.0),
            ]);
            assert!(hit.is_some());
        }

        #[test_log::test]
        fn test_coplanar_sliding() {
            let t = tri(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
            let triangle = Swept::stationary(t);

            // Slides into the triangle through the edge bc.
            let point = Swept::new(p(2.0, 0.2, 0.0), p(-1.0, 0.2, 0.0));
            let hit = point.check_collision(&triangle).unwrap();
            assert_relative_eq!(hit.toi, 0.4, epsilon = 1e-12);

            // Slides past it.
            let point = Swept::new(p(2.0, 2.0, 0.0), p(3.0, 2.0, 0.0));
            assert_eq!(triangle.check_collision(&point), None);
        }

        #[test]
        fn test_collide_callback() {
            let triangle = Swept::stationary(tri(
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(0.0, 1.0, 0.0),
            ));
            let point = Swept::new(p(0.25, 0.25, 1.0), p(0.25, 0.25, -1.0));
            let mut impacts = Vec::new();
            assert!(point.collide(&triangle, |i: Impact| impacts.push(i)));
            assert_eq!(impacts.len(), 1);
            assert_relative_eq!(impacts[0].toi, 0.5, epsilon = 1e-12);
        }
    }

    mod edge_edge {
        use approx::assert_relative_eq;

        use super::*;
        use crate::collision::{edge_edge_ccd, point_edge_toi, Collider, Impact};

        fn ccd(v: [Point3<f64>; 8]) -> Option<Impact> {
            let ea = Swept::new(seg(v[0], v[1]), seg(v[4], v[5]));
            let eb = Swept::new(seg(v[2], v[3]), seg(v[6], v[7]));
            edge_edge_ccd(&ea, &eb, &CcdConfig::default())
        }

        fn check_grid(scale: f64) {
            let ea0 = p(-1.0, -1.0, 0.0);
            let ea1 = p(1.0, -1.0, 0.0);
            for &uy in [-1.0, 0.0, 1.0 - E, 1.0, 1.0 + E, 2.0].iter() {
                for &x in [-1.0 - E, -1.0, -1.0 + E, -0.5, 0.0, 0.5, 1.0 - E, 1.0, 1.0 + E].iter() {
                    let eb0 = p(x, 1.0, -1.0);
                    let eb1 = p(x, 1.0, 1.0);
                    let expected = uy >= 1.0 && x >= -1.0 && x <= 1.0;

                    // Both edges move towards each other.
                    let u0 = Vector3::new(0.0, uy, 0.0);
                    let u1 = Vector3::new(0.0, -uy, 0.0);
                    let v = [ea0, ea1, eb0, eb1, ea0 + u0, ea1 + u0, eb0 + u1, eb1 + u1];
                    let hit = ccd(scaled(v, scale));
                    assert!(hit.is_some() || !expected, "scale={} uy={} x={}", scale, uy, x);

                    // Only the first edge moves, twice as far.
                    let u0 = Vector3::new(0.0, 2.0 * uy, 0.0);
                    let v = [ea0, ea1, eb0, eb1, ea0 + u0, ea1 + u0, eb0, eb1];
                    let hit = ccd(scaled(v, scale));
                    assert!(hit.is_some() || !expected, "scale={} uy={} x={}", scale, uy, x);
                }
            }
        }

        #[test_log::test]
        fn test_general_grid() {
            check_grid(1.0);
        }

        #[test]
        fn test_small_scale_grid() {
            check_grid(1e-3);
        }

        #[test_log::test]
        fn test_crossing_plane_from_contact_band() {
            // eb starts just above the plane of ea and crosses it over ea at
            // t = 0.4.
            let ea = Swept::stationary(seg(p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
            let eb = Swept::new(
                seg(p(2.0, -1.0, 4e-6), p(2.0, 1.0, 4e-6)),
                seg(p(-1.0, -1.0, -6e-6), p(-1.0, 1.0, -6e-6)),
            );
            let hit = edge_edge_ccd(&ea, &eb, &CcdConfig::default()).unwrap();
            assert!(hit.toi <= 0.4 + 1e-12);
        }

        #[test]
        fn test_double_root() {
            let hit = ccd([
                p(-3.0022200, 0.2362580, 0.0165247),
                p(-3.2347850, 0.8312380, -0.1151003),
                p(-3.0319900, 0.3148750, 0.0),
                p(-2.8548800, 0.0900349, 0.0),
                p(-2.8995600, 0.0345838, 0.0638580),
                p(-3.1716930, 0.6104858, -0.0713340),
                p(-3.0319900, 0.3148750, 0.0),
                p(-2.8548800, 0.0900349, 0.0),
            ]);
            assert!(hit.is_some());
        }

        #[test]
        fn test_rotating_edge_double_root() {
            let a0 = p(0.0, 0.0, 1.0);
            let a1 = p(0.0, 1.0, 1.0);
            let b0 = p(0.1, 0.2, 2.0);
            let b1 = p(0.1, 0.2, -1.0);
            for &t in [0.5, 0.8, 0.88, 0.9, 1.0].iter() {
                let a0_end = a0 + (p(1.0, 1.0, 0.0) - a0) * t;
                let a1_end = a1 + (p(0.0, 0.0, 0.0) - a1) * t;
                let hit = ccd([a0, a1, b0, b1, a0_end, a1_end, b0, b1]);
                assert!(hit.is_some(), "t = {}", t);
            }
        }

        #[test_log::test]
        fn test_slow_approach() {
            let hit = ccd([
                p(1.0, 0.50803125, 2.10835646075301e-18),
                p(-2.38233935445388e-18, 0.50803125, 1.0),
                p(-4.99999999958867e-07, 0.5, 0.0),
                p(-4.99999999958867e-07, 0.5, 1.0),
                p(1.0, 0.47124375, 4.11078309465837e-18),
                p(-2.8526707189104e-18, 0.47124375, 1.0),
                p(-4.99999999958867e-07, 0.5, 0.0),
                p(-4.99999999958867e-07, 0.5, 1.0),
            ]);
            assert!(hit.is_some());

            let hit = ccd([
                p(1.00002232466453, 0.500004786049044, -2.06727783590977e-05),
                p(1.64687846177844e-05, 0.499996645067319, 1.63939999009028e-05),
                p(1.0, 0.5, 0.0),
                p(0.0, 0.5, 0.0),
                p(1.00294282700155, 0.498652627047143, 0.003626320742036),
                p(-0.00219276550735626, 0.500871179186644, -0.00315828804921928),
                p(1.0, 0.5, 0.0),
                p(0.0, 0.5, 0.0),
            ]);
            assert!(hit.is_some());
        }

        #[test_log::test]
        fn test_coplanar_edges() {
            let ea = Swept::stationary(seg(p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));

            // The end of ea meets the sliding edge two thirds of the way.
            let eb = Swept::new(
                seg(p(3.0, -1.0, 0.0), p(3.0, 1.0, 0.0)),
                seg(p(0.0, -1.0, 0.0), p(0.0, 1.0, 0.0)),
            );
            let hit = ea.check_collision(&eb).unwrap();
            assert_relative_eq!(hit.toi, 2.0 / 3.0, epsilon = 1e-12);

            // Stops short.
            let eb = Swept::new(
                seg(p(3.0, -1.0, 0.0), p(3.0, 1.0, 0.0)),
                seg(p(2.0, -1.0, 0.0), p(2.0, 1.0, 0.0)),
            );
            assert_eq!(ea.check_collision(&eb), None);

            // A parallel edge sweeps across ea.
            let eb = Swept::new(
                seg(p(-1.0, 1.0, 0.0), p(1.0, 1.0, 0.0)),
                seg(p(-1.0, -1.0, 0.0), p(1.0, -1.0, 0.0)),
            );
            let hit = ea.check_collision(&eb).unwrap();
            assert_relative_eq!(hit.toi, 0.5, epsilon = 1e-12);
        }

        #[test]
        fn test_point_edge_collinear() {
            let config = CcdConfig::default();
            let edge = Swept::stationary(seg(p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));

            // Passes straight through the edge without stopping on it.
            let point = Swept::new(p(-2.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
            assert_eq!(point_edge_toi(&point, &edge, 1e-6, &config), Some(0.0));

            // Never reaches it.
            let point = Swept::new(p(-2.0, 0.0, 0.0), p(-1.5, 0.0, 0.0));
            assert_eq!(point_edge_toi(&point, &edge, 1e-6, &config), None);

            // Crosses the edge's line inside the edge.
            let point = Swept::new(p(0.5, 1.0, 0.0), p(0.5, -1.0, 0.0));
            let toi = point_edge_toi(&point, &edge, 1e-6, &config).unwrap();
            assert_relative_eq!(toi, 0.5, epsilon = 1e-12);
        }
    }
}
