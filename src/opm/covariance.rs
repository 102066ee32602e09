/*
    Nyx, blazing fast astrodynamics
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::ccsds::RefFrame;
use crate::errors::{InvalidFieldCombinationSnafu, OdmError};
use crate::kvn::{BlockSchema, Keyword, KvnBlock, Value, COMMENT};
use crate::linalg::Matrix6;
use snafu::ensure;

/// Number of terms of the lower triangle of a 6x6 symmetric matrix
pub const COVARIANCE_TERMS: usize = 21;

/// Lower triangle of the position/velocity covariance, row by row.
pub const COVARIANCE_KEYWORDS: [&str; COVARIANCE_TERMS] = [
    "CX_X",
    "CY_X",
    "CY_Y",
    "CZ_X",
    "CZ_Y",
    "CZ_Z",
    "CX_DOT_X",
    "CX_DOT_Y",
    "CX_DOT_Z",
    "CX_DOT_X_DOT",
    "CY_DOT_X",
    "CY_DOT_Y",
    "CY_DOT_Z",
    "CY_DOT_X_DOT",
    "CY_DOT_Y_DOT",
    "CZ_DOT_X",
    "CZ_DOT_Y",
    "CZ_DOT_Z",
    "CZ_DOT_X_DOT",
    "CZ_DOT_Y_DOT",
    "CZ_DOT_Z_DOT",
];

static COVARIANCE: BlockSchema = BlockSchema {
    name: "covariance matrix",
    description: Some("Position/Velocity Covariance Matrix"),
    keywords: &[
        COMMENT,
        "COV_REF_FRAME",
        "CX_X",
        "CY_X",
        "CY_Y",
        "CZ_X",
        "CZ_Y",
        "CZ_Z",
        "CX_DOT_X",
        "CX_DOT_Y",
        "CX_DOT_Z",
        "CX_DOT_X_DOT",
        "CY_DOT_X",
        "CY_DOT_Y",
        "CY_DOT_Z",
        "CY_DOT_X_DOT",
        "CY_DOT_Y_DOT",
        "CZ_DOT_X",
        "CZ_DOT_Y",
        "CZ_DOT_Z",
        "CZ_DOT_X_DOT",
        "CZ_DOT_Y_DOT",
        "CZ_DOT_Z_DOT",
    ],
    required: &COVARIANCE_KEYWORDS,
    exclusive: &[],
};

/// Returns the row and column of the k-th term of the lower triangle.
fn row_col(k: usize) -> (usize, usize) {
    let mut row = 0;
    while (row + 1) * (row + 2) / 2 <= k {
        row += 1;
    }
    (row, k - row * (row + 1) / 2)
}

fn units(k: usize) -> &'static str {
    match row_col(k) {
        (row, _) if row < 3 => "km**2",
        (_, col) if col < 3 => "km**2/s",
        _ => "km**2/s**2",
    }
}

/// Position/velocity covariance matrix, stored as its lower triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct CovarianceMatrix {
    /// Terms in the order of [`COVARIANCE_KEYWORDS`]
    pub elements: [f64; COVARIANCE_TERMS],
    /// Frame of the covariance, defaults to the frame of the metadata if unset
    pub cov_ref_frame: Option<RefFrame>,
    pub comment: Option<String>,
    /// Replaces the default description of this block
    pub name: Option<String>,
}

impl CovarianceMatrix {
    /// Builds a covariance from all of its named terms, e.g. `("CX_X", 3.3e-4)`.
    ///
    /// Names are case insensitive. Unknown or duplicated names, and missing terms, are rejected.
    pub fn from_elements<I, K>(elements: I) -> Result<Self, OdmError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut terms = [None; COVARIANCE_TERMS];
        let mut count = 0;
        for (name, value) in elements {
            let keyword = name.as_ref().trim().to_uppercase();
            let idx = match COVARIANCE_KEYWORDS.iter().position(|k| *k == keyword) {
                Some(idx) => idx,
                None => {
                    return InvalidFieldCombinationSnafu {
                        details: format!("`{}` is not a covariance term", name.as_ref()),
                    }
                    .fail()
                }
            };
            ensure!(
                terms[idx].is_none(),
                InvalidFieldCombinationSnafu {
                    details: format!("{keyword} provided more than once"),
                }
            );
            terms[idx] = Some(value);
            count += 1;
        }

        let mut values = [0.0; COVARIANCE_TERMS];
        for (k, term) in terms.iter().enumerate() {
            match term {
                Some(value) => values[k] = *value,
                None => {
                    return InvalidFieldCombinationSnafu {
                        details: format!(
                            "expected {COVARIANCE_TERMS} covariance terms but got {count}, {} is missing",
                            COVARIANCE_KEYWORDS[k]
                        ),
                    }
                    .fail()
                }
            }
        }

        Ok(Self::from_lower_triangle(values))
    }

    /// Builds a covariance from its lower triangle, row by row.
    pub fn from_lower_triangle(elements: [f64; COVARIANCE_TERMS]) -> Self {
        Self {
            elements,
            cov_ref_frame: None,
            comment: None,
            name: None,
        }
    }

    /// Builds a covariance from a full 6x6 matrix (km and km/s), only its lower triangle is kept.
    pub fn from_matrix(matrix: &Matrix6<f64>) -> Self {
        let asymmetry = (matrix - matrix.transpose()).amax();
        if asymmetry > f64::EPSILON * matrix.amax().max(1.0) {
            warn!("covariance is not symmetric (max difference {asymmetry:e}), using its lower triangle");
        }

        let mut elements = [0.0; COVARIANCE_TERMS];
        for (k, element) in elements.iter_mut().enumerate() {
            let (row, col) = row_col(k);
            *element = matrix[(row, col)];
        }
        Self::from_lower_triangle(elements)
    }

    /// Returns the full symmetric covariance matrix.
    pub fn to_matrix(&self) -> Matrix6<f64> {
        let mut matrix = Matrix6::zeros();
        for (k, element) in self.elements.iter().enumerate() {
            let (row, col) = row_col(k);
            matrix[(row, col)] = *element;
            matrix[(col, row)] = *element;
        }
        matrix
    }

    /// Returns the value of the named term, case insensitive.
    pub fn get(&self, keyword: &str) -> Option<f64> {
        let keyword = keyword.trim().to_uppercase();
        COVARIANCE_KEYWORDS
            .iter()
            .position(|k| *k == keyword)
            .map(|idx| self.elements[idx])
    }

    pub fn with_ref_frame(mut self, frame: RefFrame) -> Self {
        self.cov_ref_frame = Some(frame);
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

impl KvnBlock for CovarianceMatrix {
    fn schema(&self) -> &'static BlockSchema {
        &COVARIANCE
    }

    fn keywords(&self) -> Vec<Keyword> {
        let mut keywords = Vec::with_capacity(COVARIANCE_TERMS + 2);
        keywords.push(Keyword::comment(self.comment.as_deref()));
        keywords.push(Keyword::maybe(
            "COV_REF_FRAME",
            self.cov_ref_frame.map(|frame| Value::Token(frame.as_str())),
        ));
        for (k, (name, value)) in COVARIANCE_KEYWORDS.into_iter().zip(self.elements).enumerate() {
            keywords.push(Keyword::real(name, value, units(k)));
        }
        keywords
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
