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

use std::io;

use thiserror::Error;

/// Failures of the root finding routines.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum RootError {
    /// The quadratic has no real roots: its discriminant is negative beyond
    /// the allowed tolerance. This is a caller bug, not a numerical accident.
    #[error("invalid polynomial: discriminant {discriminant} is below -{epsilon}")]
    InvalidPolynomial { discriminant: f64, epsilon: f64 },

    /// Newton-Raphson hit its iteration cap before the step size fell below
    /// the tolerance.
    #[error("root refinement did not converge after {iterations} iterations (last estimate {estimate})")]
    DidNotConverge { estimate: f64, iterations: usize },
}

/// Failures while reading CCD query records.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The underlying reader failed.
    #[error("failed to read queries: {0}")]
    Io(#[from] io::Error),

    /// A record does not have one field per coordinate plus the label.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A coordinate is not a floating point number.
    #[error("line {line}: invalid coordinate {field:?}")]
    Number { line: usize, field: String },

    /// The label is none of `0`, `1`, `true` or `false`.
    #[error("line {line}: invalid collision label {field:?}")]
    Label { line: usize, field: String },
}
