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

use serde::{Deserialize, Serialize};

use crate::geom::COLLISION_EPSILON;
use crate::polynomial::DISCRIMINANT_EPSILON;

/// Numerical policy of a continuous collision query.
///
/// Missing fields in a serialized config take their default value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CcdConfig {
    /// Discriminants within this distance of zero are double roots.
    pub discriminant_epsilon: f64,
    /// Root refinement stops once a step is no larger than this.
    pub root_tolerance: f64,
    /// Cap on Newton iterations per root.
    pub max_iterations: usize,
    /// How close two primitives must come to count as touching, relative to
    /// the size of the query. Larger values report more spurious collisions,
    /// never fewer real ones.
    pub contact_tolerance: f64,
}

impl Default for CcdConfig {
    fn default() -> Self {
        CcdConfig {
            discriminant_epsilon: DISCRIMINANT_EPSILON,
            root_tolerance: 1e-14,
            max_iterations: 64,
            contact_tolerance: COLLISION_EPSILON,
        }
    }
}
