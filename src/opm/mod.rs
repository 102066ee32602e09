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

/*
 * Orbit Parameter Message, coded from CCSDS 502.0-B-2 (Orbit Data Messages), section 3.
 */

use crate::errors::{EmptyRequiredFieldSnafu, IoSnafu, OdmError};
use crate::io::KvnCfg;
use crate::kvn::{format_text, KvnBlock};
use snafu::{ensure, ResultExt};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

mod covariance;
mod data;
mod header;
mod keplerian;
mod maneuver;
mod metadata;
mod spacecraft;
mod state_vector;
mod user_defined;

pub use covariance::{CovarianceMatrix, COVARIANCE_KEYWORDS, COVARIANCE_TERMS};
pub use data::{Data, DataBlock};
pub use header::{Header, OPM_VERSION};
pub use keplerian::KeplerianElements;
pub use maneuver::ManeuverParameters;
pub use metadata::Metadata;
pub use spacecraft::SpacecraftParameters;
pub use state_vector::StateVector;
pub use user_defined::{UserDefined, USER_DEFINED_PREFIX};

/// Trims a required single line text field.
pub(crate) fn require_text(keyword: &str, text: &str) -> Result<String, OdmError> {
    let text = format_text(keyword, text)?;
    ensure!(!text.is_empty(), EmptyRequiredFieldSnafu { keyword });
    Ok(text)
}

/// An Orbit Parameter Message: the state of one object at one epoch.
///
/// The message is validated in full before anything is written: if any block is invalid, the
/// sink is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Opm {
    pub header: Header,
    pub metadata: Metadata,
    pub data: Data,
    pub user_defined: UserDefined,
}

impl Opm {
    pub fn new(header: Header, metadata: Metadata, data: Data) -> Self {
        Self {
            header,
            metadata,
            data,
            user_defined: UserDefined::default(),
        }
    }

    pub fn with_user_defined(mut self, user_defined: UserDefined) -> Self {
        self.user_defined = user_defined;
        self
    }

    /// Validates the header, the metadata, the data blocks and the user defined parameters, in
    /// that order, and returns the first error.
    pub fn validate(&self) -> Result<(), OdmError> {
        self.header.validate()?;
        self.metadata.validate()?;
        self.data.validate()?;
        self.user_defined.validate()
    }

    /// Sections of this message in the order they are written.
    fn sections(&self) -> Vec<&dyn KvnBlock> {
        let mut sections: Vec<&dyn KvnBlock> = Vec::with_capacity(8);
        sections.push(&self.header);
        sections.push(&self.metadata);
        sections.extend(self.data.blocks());
        if !self.user_defined.is_empty() {
            sections.push(&self.user_defined);
        }
        sections
    }

    /// Renders this message, one string per line. Sections are separated by an empty line.
    pub fn render(&self, cfg: &KvnCfg) -> Result<Vec<String>, OdmError> {
        self.validate()?;
        let mut lines = Vec::new();
        for (i, section) in self.sections().into_iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(section.keyword_block().render(cfg)?);
        }
        Ok(lines)
    }

    /// Validates this message and then streams it to the sink, section by section.
    ///
    /// Nothing is written if the validation fails.
    pub fn write<W: Write>(&self, sink: &mut W, cfg: &KvnCfg) -> Result<(), OdmError> {
        self.validate()?;
        for (i, section) in self.sections().into_iter().enumerate() {
            debug!("writing {}", section.schema().name);
            if i > 0 {
                writeln!(sink).context(IoSnafu {
                    action: "writing KVN line",
                })?;
            }
            section.keyword_block().write(sink, cfg)?;
        }
        sink.flush().context(IoSnafu {
            action: "flushing KVN output",
        })
    }

    /// Exports this message to the provided path in KVN, and returns the path it was written to.
    ///
    /// The file is only created if the message is valid.
    pub fn to_kvn_file<P: AsRef<Path>>(&self, path: P, cfg: KvnCfg) -> Result<PathBuf, OdmError> {
        self.validate()?;

        let path_buf = cfg.actual_path(path);
        let file = File::create(&path_buf).context(IoSnafu {
            action: "creating KVN file",
        })?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer, &cfg)?;

        info!(
            "OPM of {} ({}) written to {}",
            self.metadata.object_name,
            self.metadata.object_id,
            path_buf.display()
        );
        Ok(path_buf)
    }
}

impl fmt::Display for Opm {
    /// Renders this message with the default configuration
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.render(&KvnCfg::default()) {
            Ok(lines) => {
                for line in lines {
                    writeln!(f, "{line}")?;
                }
                Ok(())
            }
            Err(e) => write!(f, "invalid OPM: {e}"),
        }
    }
}
