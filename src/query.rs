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

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cgmath::Point3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::geom::{Segment, Swept, Triangle};

/// Number of comma separated fields in a query record.
pub const QUERY_FIELDS: usize = 25;

/// A recorded CCD query: four vertices at the start of the step, the same four
/// at the end, and whether they are known to collide.
///
/// For a point-triangle query vertex 0 is the point and vertices 1 to 3 the
/// triangle. For an edge-edge query vertices 0 and 1 form the first edge.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CcdQuery {
    pub vertices: [Point3<f64>; 8],
    pub expected: bool,
}

impl CcdQuery {
    pub fn point_triangle(&self) -> (Swept<Point3<f64>>, Swept<Triangle>) {
        let v = &self.vertices;
        (
            Swept::new(v[0], v[4]),
            Swept::new(
                Triangle::from((v[1], v[2], v[3])),
                Triangle::from((v[5], v[6], v[7])),
            ),
        )
    }

    pub fn edge_edge(&self) -> (Swept<Segment>, Swept<Segment>) {
        let v = &self.vertices;
        (
            Swept::new(Segment::from((v[0], v[1])), Segment::from((v[4], v[5]))),
            Swept::new(Segment::from((v[2], v[3])), Segment::from((v[6], v[7]))),
        )
    }
}

fn parse_record(line: usize, record: &str) -> Result<CcdQuery, QueryError> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != QUERY_FIELDS {
        return Err(QueryError::FieldCount {
            line,
            expected: QUERY_FIELDS,
            found: fields.len(),
        });
    }

    let mut coords = [0.0; QUERY_FIELDS - 1];
    for (coord, field) in coords.iter_mut().zip(fields.iter()) {
        *coord = field.parse().map_err(|_| QueryError::Number {
            line,
            field: field.to_string(),
        })?;
    }

    let expected = match fields[QUERY_FIELDS - 1] {
        "1" | "true" => true,
        "0" | "false" => false,
        field => {
            return Err(QueryError::Label {
                line,
                field: field.to_string(),
            })
        }
    };

    let mut vertices = [Point3::new(0.0, 0.0, 0.0); 8];
    for (vertex, xyz) in vertices.iter_mut().zip(coords.chunks(3)) {
        *vertex = Point3::new(xyz[0], xyz[1], xyz[2]);
    }
    Ok(CcdQuery { vertices, expected })
}

/// Reads one query per line. Blank lines and lines starting with `#` are
/// skipped; line numbers in errors count from one.
pub fn read_ccd_queries<R: BufRead>(reader: R) -> Result<Vec<CcdQuery>, QueryError> {
    let mut queries = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }
        queries.push(parse_record(i + 1, record)?);
    }
    Ok(queries)
}

pub fn read_ccd_queries_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CcdQuery>, QueryError> {
    let path = path.as_ref();
    let queries = read_ccd_queries(BufReader::new(File::open(path)?))?;
    debug!("read {} queries from {}", queries.len(), path.display());
    Ok(queries)
}
