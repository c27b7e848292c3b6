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

//! Conservative continuous collision detection between linearly moving
//! primitives.
//!
//! # Overview
//!
//! A query describes two primitives over one time step: every vertex moves in
//! a straight line from its start to its end position (`Swept`). Two kinds of
//! query are supported:
//!
//! - Point-triangle, through `point_triangle_ccd`.
//! - Edge-edge, through `edge_edge_ccd`.
//!
//! Both return the earliest time of impact in `[0, 1]` if the primitives touch
//! during the step. The answer is conservative: a pair that comes within the
//! contact tolerance of `CcdConfig` is reported as colliding, and a real
//! collision is never missed because of rounding.
//!
//! The primitives can only touch when their four vertices are coplanar, which
//! is a cubic equation in time. Its roots are found with the polynomial tools
//! in `polynomial` and `newton`, and each candidate time is then checked with
//! a closest distance query.
//!
//! The `Collider` trait wraps both queries with the default configuration:
//!
//! ```
//! use mgf_ccd::cgmath::Point3;
//! use mgf_ccd::{Collider, Swept, Triangle};
//!
//! let triangle = Swept::stationary(Triangle::from((
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! )));
//! let point = Swept::new(Point3::new(0.2, 0.2, 1.0), Point3::new(0.2, 0.2, -1.0));
//! let impact = point.check_collision(&triangle).unwrap();
//! assert!((impact.toi - 0.5).abs() < 1e-9);
//! ```

pub extern crate cgmath;
extern crate smallvec;

mod bounds;
pub use bounds::*;

mod collision;
pub use collision::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod geom;
pub use geom::*;

pub mod newton;

pub mod polynomial;

mod query;
pub use query::*;
