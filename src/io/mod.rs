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

use crate::time::Epoch;
use hifitime::prelude::{Format, Formatter};
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use typed_builder::TypedBuilder;

/// How epochs are written in a KVN file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpochStyle {
    /// `YYYY-MM-DDThh:mm:ss[.ffffff]` (default)
    #[default]
    Calendar,
    /// `YYYY-DDDThh:mm:ss[.ffffff]`, where DDD is the day of year
    DayOfYear,
}

/// Configuration for rendering a message in keyword = value notation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct KvnCfg {
    /// Number of digits after the decimal point of real values, at least one digit is always written.
    #[builder(default = 6)]
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Set to true to pad the real values of a block such that their decimal points line up.
    #[builder(default)]
    #[serde(default)]
    pub align_decimals: bool,
    /// Set to true to append the units of each value, e.g. `X = 6794.000000 [km]`.
    #[builder(default)]
    #[serde(default)]
    pub show_units: bool,
    #[builder(default)]
    #[serde(default)]
    pub epoch_style: EpochStyle,
    /// Set to true to append the timestamp to the filename
    #[builder(default)]
    #[serde(default)]
    pub timestamp: bool,
}

fn default_precision() -> usize {
    6
}

impl Default for KvnCfg {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl KvnCfg {
    /// Initialize a new default configuration but timestamp the filename.
    pub fn timestamped() -> Self {
        Self {
            timestamp: true,
            ..Default::default()
        }
    }

    /// Number of decimals actually used when writing real values.
    pub fn decimals(&self) -> usize {
        self.precision.max(1)
    }

    /// Modifies the provided path to include the timestamp if required.
    pub(crate) fn actual_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let mut path_buf = path.as_ref().to_path_buf();
        if !self.timestamp {
            return path_buf;
        }

        let now = match Epoch::now() {
            Ok(now) => now,
            Err(e) => {
                warn!("not timestamping {}: {e}", path_buf.display());
                return path_buf;
            }
        };

        let format = match Format::from_str("%Y-%m-%dT%H-%M-%S") {
            Ok(format) => format,
            Err(e) => {
                warn!("not timestamping {}: {e}", path_buf.display());
                return path_buf;
            }
        };

        if let (Some(stem), Some(extension)) = (
            path_buf.file_stem().and_then(|s| s.to_str()),
            path_buf.extension().and_then(|e| e.to_str()),
        ) {
            let stamp = Formatter::new(now, format);
            let new_file_name = format!("{stem}-{stamp}.{extension}");
            path_buf.set_file_name(new_file_name);
        }
        path_buf
    }
}

impl ConfigRepr for KvnCfg {}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("failed to read configuration file: {source}"))]
    ReadError { source: io::Error },

    #[snafu(display("failed to parse YAML configuration file: {source}"))]
    ParseError { source: serde_yaml::Error },
}

impl PartialEq for ConfigError {
    /// No two configuration errors match
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

pub trait ConfigRepr: Debug + Sized + serde::Serialize + DeserializeOwned {
    /// Builds the configuration representation from the path to a yaml
    fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path).context(ReadSnafu)?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Builds the configuration representation from the provided string of a yaml
    fn loads(data: &str) -> Result<Self, ConfigError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ParseSnafu)
    }

    /// Builds a sequence of "Selves" from the provided string of a yaml
    fn loads_many(data: &str) -> Result<Vec<Self>, ConfigError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ParseSnafu)
    }
}
