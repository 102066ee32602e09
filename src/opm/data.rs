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

use super::{
    CovarianceMatrix, KeplerianElements, ManeuverParameters, SpacecraftParameters, StateVector,
};
use crate::errors::{InvalidFieldCombinationSnafu, MissingRequiredKeywordSnafu, OdmError};
use crate::kvn::KvnBlock;
use snafu::ensure;
use std::fmt;

/// Any block of the data section of an OPM
#[derive(Clone, Debug, PartialEq)]
pub enum DataBlock {
    StateVector(StateVector),
    KeplerianElements(KeplerianElements),
    SpacecraftParameters(SpacecraftParameters),
    CovarianceMatrix(CovarianceMatrix),
    Maneuver(ManeuverParameters),
}

impl fmt::Display for DataBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::StateVector(_) => "state vector",
            Self::KeplerianElements(_) => "Keplerian elements",
            Self::SpacecraftParameters(_) => "spacecraft parameters",
            Self::CovarianceMatrix(_) => "covariance matrix",
            Self::Maneuver(_) => "maneuver",
        };
        write!(f, "{name}")
    }
}

impl From<StateVector> for DataBlock {
    fn from(block: StateVector) -> Self {
        Self::StateVector(block)
    }
}

impl From<KeplerianElements> for DataBlock {
    fn from(block: KeplerianElements) -> Self {
        Self::KeplerianElements(block)
    }
}

impl From<SpacecraftParameters> for DataBlock {
    fn from(block: SpacecraftParameters) -> Self {
        Self::SpacecraftParameters(block)
    }
}

impl From<CovarianceMatrix> for DataBlock {
    fn from(block: CovarianceMatrix) -> Self {
        Self::CovarianceMatrix(block)
    }
}

impl From<ManeuverParameters> for DataBlock {
    fn from(block: ManeuverParameters) -> Self {
        Self::Maneuver(block)
    }
}

/// Data section of an OPM.
///
/// Each block has its own slot, so the blocks are always written in the order of the standard
/// regardless of the order in which they were added: state vector, Keplerian elements,
/// spacecraft parameters, covariance, and then the maneuvers in the order they were added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Data {
    /// Required: a message without a state vector is invalid
    pub state_vector: Option<StateVector>,
    pub keplerian_elements: Option<KeplerianElements>,
    pub spacecraft_parameters: Option<SpacecraftParameters>,
    pub covariance_matrix: Option<CovarianceMatrix>,
    pub maneuvers: Vec<ManeuverParameters>,
}

impl Data {
    pub fn new(state_vector: StateVector) -> Self {
        Self {
            state_vector: Some(state_vector),
            ..Default::default()
        }
    }

    /// Adds a block to its slot. Only maneuvers may be provided more than once.
    pub fn push<B: Into<DataBlock>>(&mut self, block: B) -> Result<(), OdmError> {
        let block = block.into();
        let occupied = match &block {
            DataBlock::StateVector(_) => self.state_vector.is_some(),
            DataBlock::KeplerianElements(_) => self.keplerian_elements.is_some(),
            DataBlock::SpacecraftParameters(_) => self.spacecraft_parameters.is_some(),
            DataBlock::CovarianceMatrix(_) => self.covariance_matrix.is_some(),
            DataBlock::Maneuver(_) => false,
        };
        ensure!(
            !occupied,
            InvalidFieldCombinationSnafu {
                details: format!("{block} block provided more than once"),
            }
        );

        match block {
            DataBlock::StateVector(sv) => self.state_vector = Some(sv),
            DataBlock::KeplerianElements(kep) => self.keplerian_elements = Some(kep),
            DataBlock::SpacecraftParameters(sc) => self.spacecraft_parameters = Some(sc),
            DataBlock::CovarianceMatrix(cov) => self.covariance_matrix = Some(cov),
            DataBlock::Maneuver(mnvr) => self.maneuvers.push(mnvr),
        }
        Ok(())
    }

    /// Adds a block and returns this data section, e.g. to chain several blocks.
    pub fn with<B: Into<DataBlock>>(mut self, block: B) -> Result<Self, OdmError> {
        self.push(block)?;
        Ok(self)
    }

    /// Returns the blocks present, in the order they are written.
    pub fn blocks(&self) -> Vec<&dyn KvnBlock> {
        let mut blocks: Vec<&dyn KvnBlock> = Vec::with_capacity(4 + self.maneuvers.len());
        if let Some(sv) = &self.state_vector {
            blocks.push(sv);
        }
        if let Some(kep) = &self.keplerian_elements {
            blocks.push(kep);
        }
        if let Some(sc) = &self.spacecraft_parameters {
            blocks.push(sc);
        }
        if let Some(cov) = &self.covariance_matrix {
            blocks.push(cov);
        }
        for mnvr in &self.maneuvers {
            blocks.push(mnvr);
        }
        blocks
    }

    /// Checks the combination of blocks, and then each block.
    pub fn validate(&self) -> Result<(), OdmError> {
        ensure!(
            self.state_vector.is_some(),
            MissingRequiredKeywordSnafu { keyword: "EPOCH" }
        );
        ensure!(
            self.maneuvers.is_empty() || self.spacecraft_parameters.is_some(),
            InvalidFieldCombinationSnafu {
                details: "spacecraft parameters are required when maneuvers are provided",
            }
        );
        for block in self.blocks() {
            block.validate()?;
        }
        Ok(())
    }
}
