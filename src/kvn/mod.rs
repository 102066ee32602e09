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

//! Keyword = value notation (KVN), the ASCII layout of the CCSDS Orbit Data Messages.
//!
//! Every section of a message is a [`KvnBlock`]: it declares a [`BlockSchema`] (which keywords
//! exist, which are required, which are mutually exclusive) and lists its current [`Keyword`]s.
//! The shared [`KeywordBlock`] validates those keywords against the schema and renders them.

use crate::errors::OdmError;
use crate::io::KvnCfg;
use crate::time::Epoch;
use std::borrow::Cow;
use std::fmt;
use std::io::Write;

mod block;
mod formatter;
mod schema;

pub use block::KeywordBlock;
pub use formatter::{format_epoch, format_real, format_text, SCIENTIFIC_BELOW, SCIENTIFIC_FROM};
pub use schema::BlockSchema;

/// Keyword of the comment lines, which are written as `COMMENT text` without an equal sign.
pub const COMMENT: &str = "COMMENT";

/// A single value of a KVN line.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Free text, trimmed when written
    Text(String),
    /// Real number, written in fixed point with the configured precision
    Real(f64),
    Integer(i64),
    /// Written in the time scale of the epoch
    Epoch(Epoch),
    /// The string representation of an enumerated value
    Token(&'static str),
}

impl Value {
    /// Returns true if this is text with nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Epoch> for Value {
    fn from(value: Epoch) -> Self {
        Self::Epoch(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Epoch(epoch) => write!(f, "{epoch}"),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}

/// One keyword of a block and its value, if set.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyword {
    pub name: Cow<'static, str>,
    pub value: Option<Value>,
    /// Units of the value, only written if requested in the configuration
    pub units: Option<&'static str>,
}

impl Keyword {
    pub fn new<V: Into<Value>>(name: &'static str, value: V) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: Some(value.into()),
            units: None,
        }
    }

    /// A keyword whose name is only known at run time.
    pub fn owned(name: String, value: Value) -> Self {
        Self {
            name: Cow::Owned(name),
            value: Some(value),
            units: None,
        }
    }

    /// A keyword which may not be set.
    pub fn maybe<V: Into<Value>>(name: &'static str, value: Option<V>) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: value.map(Into::into),
            units: None,
        }
    }

    /// A real valued keyword with its units.
    pub fn real(name: &'static str, value: f64, units: &'static str) -> Self {
        Self::new(name, value).with_units(units)
    }

    /// The comment of a block, which may span several lines.
    pub fn comment(comment: Option<&str>) -> Self {
        Self::maybe(COMMENT, comment)
    }

    pub fn with_units(mut self, units: &'static str) -> Self {
        self.units = Some(units);
        self
    }

    pub fn is_comment(&self) -> bool {
        self.name == COMMENT
    }

    /// Returns true if this keyword has a value which will be written.
    pub fn is_set(&self) -> bool {
        match &self.value {
            Some(value) => !value.is_blank(),
            None => false,
        }
    }
}

/// Splits a KVN line into its keyword and value, ignoring comments and blank lines.
///
/// ```
/// use nyx_odm::kvn::split_line;
///
/// assert_eq!(split_line("X_DOT   = 7.600000"), Some(("X_DOT", "7.600000")));
/// assert_eq!(split_line("X = 6794.0 [km]"), Some(("X", "6794.0")));
/// assert_eq!(split_line("COMMENT State Vector Components"), None);
/// assert_eq!(split_line(""), None);
/// ```
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
        return None;
    }
    let (keyword, value) = line.split_once('=')?;
    let value = match value.find('[') {
        Some(idx) => &value[..idx],
        None => value,
    };
    Some((keyword.trim(), value.trim()))
}

/// A section of a message which can be written in keyword = value notation.
///
/// Implementors only describe themselves: the schema gives the layout and the constraints, and
/// `keywords` lists the current values in the order of the standard. Validation and rendering are
/// shared by all blocks.
pub trait KvnBlock {
    /// Layout and constraints of this kind of block.
    fn schema(&self) -> &'static BlockSchema;

    /// Keywords of this block in the order of the standard, including unset optional ones.
    fn keywords(&self) -> Vec<Keyword>;

    /// Custom description written as the first comment line instead of the default one.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Builds the keyword container for this block.
    fn keyword_block(&self) -> KeywordBlock {
        let description = self
            .name()
            .map(str::to_string)
            .or_else(|| self.schema().description.map(str::to_string));
        KeywordBlock::new(self.schema(), description, self.keywords())
    }

    /// Checks that the required keywords are set and that the exclusive groups are respected.
    ///
    /// Blocks with constraints beyond their schema override this and call the default checks too.
    fn validate(&self) -> Result<(), OdmError> {
        self.keyword_block().validate()
    }

    /// Validates and renders this block, one string per line.
    fn render(&self, cfg: &KvnCfg) -> Result<Vec<String>, OdmError> {
        self.validate()?;
        self.keyword_block().render(cfg)
    }

    /// Validates this block and then writes its lines to the sink.
    fn write_kvn(&self, sink: &mut dyn Write, cfg: &KvnCfg) -> Result<(), OdmError> {
        self.validate()?;
        self.keyword_block().write(sink, cfg)
    }
}
