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

use super::require_text;
use crate::errors::{ClockSnafu, OdmError};
use crate::kvn::{BlockSchema, Keyword, KvnBlock, COMMENT};
use crate::time::Epoch;

/// Version of the OPM written by this crate
pub const OPM_VERSION: &str = "2.0";

static HEADER: BlockSchema = BlockSchema {
    name: "header",
    description: None,
    keywords: &["CCSDS_OPM_VERS", COMMENT, "CREATION_DATE", "ORIGINATOR"],
    required: &["CCSDS_OPM_VERS", "CREATION_DATE", "ORIGINATOR"],
    exclusive: &[],
};

/// Header of an OPM
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub version: String,
    /// Creation date of this message, normally in UTC
    pub creation_date: Epoch,
    pub originator: String,
    pub comment: Option<String>,
}

impl Header {
    /// Initializes a new header created now by the provided originator.
    pub fn new(originator: &str) -> Result<Self, OdmError> {
        let creation_date = match Epoch::now() {
            Ok(now) => now,
            Err(e) => {
                return ClockSnafu {
                    details: e.to_string(),
                }
                .fail()
            }
        };
        Self::created_at(originator, creation_date)
    }

    /// Initializes a new header with a specific creation date.
    pub fn created_at(originator: &str, creation_date: Epoch) -> Result<Self, OdmError> {
        Ok(Self {
            version: OPM_VERSION.to_string(),
            creation_date,
            originator: require_text("ORIGINATOR", originator)?,
            comment: None,
        })
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

impl KvnBlock for Header {
    fn schema(&self) -> &'static BlockSchema {
        &HEADER
    }

    fn keywords(&self) -> Vec<Keyword> {
        vec![
            Keyword::new("CCSDS_OPM_VERS", self.version.as_str()),
            Keyword::comment(self.comment.as_deref()),
            Keyword::new("CREATION_DATE", self.creation_date),
            Keyword::new("ORIGINATOR", self.originator.as_str()),
        ]
    }
}
