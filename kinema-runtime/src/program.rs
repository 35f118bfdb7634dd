use std::{collections::VecDeque, path::Path};

use crate::source::{ArmParameters, ParameterSource};
use crate::Result;

/// Queue of arm parameter sets read from a JSON file.
///
/// The file holds a list of objects with the fields `l1`, `l2`, `x`, `y`
/// and an optional `elbow`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program(VecDeque<ArmParameters>);

impl Program {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Loading program {}", path.as_ref().display());

        std::fs::read_to_string(path)?.parse()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArmParameters> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::str::FromStr for Program {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parameters: VecDeque<ArmParameters> = serde_json::from_str(s)?;

        for entry in &parameters {
            entry.validate()?;
        }

        Ok(Self(parameters))
    }
}

impl ParameterSource for Program {
    fn next(&mut self) -> Result<Option<ArmParameters>> {
        Ok(self.0.pop_front())
    }
}

impl FromIterator<ArmParameters> for Program {
    fn from_iter<T: IntoIterator<Item = ArmParameters>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
