use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operating companies of the group. The short id doubles as the config key
/// and CLI flag value; `display_name` is what riders see.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CompanyId {
    Tor,
    Vib,
    Gtt,
    Kurir,
    Click,
}

impl CompanyId {
    pub const ALL: [CompanyId; 5] = [
        CompanyId::Tor,
        CompanyId::Vib,
        CompanyId::Gtt,
        CompanyId::Kurir,
        CompanyId::Click,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CompanyId::Tor => "Tor Taxi",
            CompanyId::Vib => "VIB Taxi",
            CompanyId::Gtt => "GTT Taxi",
            CompanyId::Kurir => "Kurir Taxi",
            CompanyId::Click => "Click Taxi",
        }
    }
}

impl Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CompanyId::Tor => "tor",
                CompanyId::Vib => "vib",
                CompanyId::Gtt => "gtt",
                CompanyId::Kurir => "kurir",
                CompanyId::Click => "click",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown company {0:?}, expected one of: tor, vib, gtt, kurir, click")]
pub struct UnknownCompany(pub String);

impl FromStr for CompanyId {
    type Err = UnknownCompany;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tor" => Ok(CompanyId::Tor),
            "vib" => Ok(CompanyId::Vib),
            "gtt" => Ok(CompanyId::Gtt),
            "kurir" => Ok(CompanyId::Kurir),
            "click" => Ok(CompanyId::Click),
            other => Err(UnknownCompany(other.to_string())),
        }
    }
}
