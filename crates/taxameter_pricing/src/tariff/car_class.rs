use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse vehicle-capacity category. Tariffs are configured per class.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CarClass {
    Small,
    Big,
}

impl CarClass {
    pub const ALL: [CarClass; 2] = [CarClass::Small, CarClass::Big];
}

impl Display for CarClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CarClass::Small => "small",
                CarClass::Big => "big",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown car class {0:?}, expected one of: small, big")]
pub struct UnknownCarClass(pub String);

impl FromStr for CarClass {
    type Err = UnknownCarClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(CarClass::Small),
            "big" => Ok(CarClass::Big),
            other => Err(UnknownCarClass(other.to_string())),
        }
    }
}
