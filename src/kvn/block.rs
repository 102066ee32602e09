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

use super::{BlockSchema, Keyword, Value, COMMENT};
use crate::errors::{IoSnafu, OdmError};
use crate::io::KvnCfg;
use snafu::ResultExt;
use std::io::Write;

/// An ordered list of keywords validated against the schema of its block.
///
/// This is the only place where KVN lines are built: every block of a message goes through here.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordBlock {
    pub schema: &'static BlockSchema,
    /// Written as `COMMENT <description>` before any other line
    pub description: Option<String>,
    pub keywords: Vec<Keyword>,
}

impl KeywordBlock {
    pub fn new(
        schema: &'static BlockSchema,
        description: Option<String>,
        keywords: Vec<Keyword>,
    ) -> Self {
        Self {
            schema,
            description,
            keywords,
        }
    }

    pub fn validate(&self) -> Result<(), OdmError> {
        self.schema.validate(&self.keywords)
    }

    /// Column of the `=` separator, i.e. the length of the longest keyword this block may hold.
    pub fn keyword_width(&self) -> usize {
        self.keywords
            .iter()
            .map(|k| k.name.len())
            .fold(self.schema.keyword_width(), usize::max)
    }

    /// Validates this block and renders it, one string per line without line terminators.
    pub fn render(&self, cfg: &KvnCfg) -> Result<Vec<String>, OdmError> {
        self.validate()?;
        debug!("rendering {} ({} keywords)", self.schema.name, self.keywords.len());

        let width = self.keyword_width();
        let mut lines = Vec::with_capacity(self.keywords.len() + 1);

        if let Some(description) = &self.description {
            lines.extend(comment_lines(description));
        }

        // Format all the values first so that the decimal points can be aligned.
        let mut values = Vec::with_capacity(self.keywords.len());
        for keyword in self.keywords.iter().filter(|k| k.is_set()) {
            match &keyword.value {
                // Comments may span several lines
                Some(Value::Text(text)) if keyword.is_comment() => {
                    values.push((keyword, text.clone()))
                }
                Some(value) => values.push((keyword, value.to_kvn(&keyword.name, cfg)?)),
                None => {}
            }
        }

        let integer_width = if cfg.align_decimals {
            values
                .iter()
                .filter(|(k, _)| matches!(k.value, Some(Value::Real(_))))
                .map(|(_, v)| integer_part_len(v))
                .max()
                .unwrap_or(0)
        } else {
            0
        };

        for (keyword, value) in values {
            if keyword.is_comment() {
                lines.extend(comment_lines(&value));
                continue;
            }

            let padding = match keyword.value {
                Some(Value::Real(_)) => integer_width.saturating_sub(integer_part_len(&value)),
                _ => 0,
            };

            let mut line = format!(
                "{name:<width$} = {pad}{value}",
                name = keyword.name,
                pad = " ".repeat(padding)
            );
            if cfg.show_units {
                if let Some(units) = keyword.units {
                    line.push_str(&format!(" [{units}]"));
                }
            }
            lines.push(line);
        }

        Ok(lines)
    }

    /// Validates this block and writes its lines to the sink.
    ///
    /// Nothing is written if the validation fails.
    pub fn write(&self, sink: &mut dyn Write, cfg: &KvnCfg) -> Result<(), OdmError> {
        for line in self.render(cfg)? {
            writeln!(sink, "{line}").context(IoSnafu {
                action: "writing KVN line",
            })?;
        }
        Ok(())
    }
}

/// Splits free text into `COMMENT` lines, skipping blank lines.
pub(crate) fn comment_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{COMMENT} {line}"))
}

/// Number of characters before the decimal point.
fn integer_part_len(value: &str) -> usize {
    value.find('.').unwrap_or(value.len())
}
