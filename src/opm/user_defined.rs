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

use crate::errors::{
    EmptyRequiredFieldSnafu, InvalidFieldCombinationSnafu, InvalidFieldFormatSnafu, OdmError,
};
use crate::kvn::{BlockSchema, Keyword, KvnBlock, Value};
use lazy_static::lazy_static;
use regex::Regex;
use snafu::ensure;

/// Prefix of the user defined keywords
pub const USER_DEFINED_PREFIX: &str = "USER_DEFINED_";

lazy_static! {
    static ref PARAMETER_NAME: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

static USER_DEFINED: BlockSchema = BlockSchema {
    name: "user defined parameters",
    description: None,
    keywords: &[],
    required: &[],
    exclusive: &[],
};

/// User defined parameters, written last as `USER_DEFINED_<NAME> = value`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDefined {
    parameters: Vec<(String, Value)>,
}

impl UserDefined {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, its name is stored in upper case and without the `USER_DEFINED_` prefix.
    pub fn insert<V: Into<Value>>(&mut self, name: &str, value: V) -> Result<(), OdmError> {
        let trimmed = name.trim();
        ensure!(
            PARAMETER_NAME.is_match(trimmed),
            InvalidFieldFormatSnafu {
                keyword: format!("{USER_DEFINED_PREFIX}{trimmed}"),
                value: name,
                expected: "a parameter name made of letters, digits and underscores",
            }
        );

        let upper = trimmed.to_uppercase();
        let upper = upper
            .strip_prefix(USER_DEFINED_PREFIX)
            .unwrap_or(&upper)
            .to_string();
        ensure!(
            !upper.is_empty(),
            InvalidFieldFormatSnafu {
                keyword: USER_DEFINED_PREFIX,
                value: name,
                expected: "a parameter name after the USER_DEFINED_ prefix",
            }
        );
        ensure!(
            self.get(&upper).is_none(),
            InvalidFieldCombinationSnafu {
                details: format!("{USER_DEFINED_PREFIX}{upper} provided more than once"),
            }
        );

        let value = value.into();
        ensure!(
            !value.is_blank(),
            EmptyRequiredFieldSnafu {
                keyword: format!("{USER_DEFINED_PREFIX}{upper}"),
            }
        );

        self.parameters.push((upper, value));
        Ok(())
    }

    /// Adds a parameter and returns these parameters.
    pub fn with<V: Into<Value>>(mut self, name: &str, value: V) -> Result<Self, OdmError> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Returns the value of the named parameter, case insensitive and with or without prefix.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let upper = name.trim().to_uppercase();
        let upper = upper.strip_prefix(USER_DEFINED_PREFIX).unwrap_or(&upper);
        self.parameters
            .iter()
            .find(|(param, _)| param == upper)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl KvnBlock for UserDefined {
    fn schema(&self) -> &'static BlockSchema {
        &USER_DEFINED
    }

    fn keywords(&self) -> Vec<Keyword> {
        self.parameters
            .iter()
            .map(|(name, value)| {
                Keyword::owned(format!("{USER_DEFINED_PREFIX}{name}"), value.clone())
            })
            .collect()
    }

    /// Every parameter is required, a blank value is an error.
    fn validate(&self) -> Result<(), OdmError> {
        for (name, value) in &self.parameters {
            ensure!(
                !value.is_blank(),
                EmptyRequiredFieldSnafu {
                    keyword: format!("{USER_DEFINED_PREFIX}{name}"),
                }
            );
        }
        self.keyword_block().validate()
    }
}
