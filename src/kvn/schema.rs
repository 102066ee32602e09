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

use super::{format_text, Keyword, Value, COMMENT};
use crate::errors::{
    EmptyRequiredFieldSnafu, InvalidFieldFormatSnafu, MissingRequiredKeywordSnafu,
    MutuallyExclusiveViolationSnafu, OdmError,
};

/// Static description of a kind of block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockSchema {
    /// Name of the block, used in logs
    pub name: &'static str,
    /// Written as `COMMENT <description>` before the block unless the block has a custom name
    pub description: Option<&'static str>,
    /// Every keyword of this block, in the order of the standard
    pub keywords: &'static [&'static str],
    /// Keywords which must be set
    pub required: &'static [&'static str],
    /// Groups of keywords where exactly one keyword must be set
    pub exclusive: &'static [&'static [&'static str]],
}

impl BlockSchema {
    /// Width of the keyword column: all the `=` of a block are written in the same column.
    pub fn keyword_width(&self) -> usize {
        self.keywords
            .iter()
            .map(|k| k.len())
            .chain(std::iter::once(COMMENT.len()))
            .max()
            .unwrap_or(0)
    }

    /// Validates the provided keywords against this schema.
    ///
    /// Once this succeeds, rendering these keywords cannot fail.
    pub fn validate(&self, keywords: &[Keyword]) -> Result<(), OdmError> {
        for keyword in keywords.iter().filter(|k| !k.is_comment()) {
            match &keyword.value {
                Some(Value::Real(value)) if !value.is_finite() => {
                    return InvalidFieldFormatSnafu {
                        keyword: &*keyword.name,
                        value: format!("{value}"),
                        expected: "a finite real number",
                    }
                    .fail()
                }
                Some(Value::Text(text)) => {
                    format_text(&keyword.name, text)?;
                }
                _ => {}
            }
        }

        for required in self.required {
            match keywords.iter().find(|k| k.name == *required) {
                Some(keyword) => match &keyword.value {
                    Some(value) => {
                        if value.is_blank() {
                            return EmptyRequiredFieldSnafu { keyword: *required }.fail();
                        }
                    }
                    None => return MissingRequiredKeywordSnafu { keyword: *required }.fail(),
                },
                None => return MissingRequiredKeywordSnafu { keyword: *required }.fail(),
            }
        }

        for group in self.exclusive {
            let set = keywords
                .iter()
                .filter(|k| group.iter().any(|g| *g == k.name) && k.is_set())
                .count();
            if set != 1 {
                return MutuallyExclusiveViolationSnafu {
                    group: group.join(", "),
                }
                .fail();
            }
        }

        Ok(())
    }
}
