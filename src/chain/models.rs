//! JSON shapes returned by the daemon's `query staking` and `status`
//! subcommands. Only the fields the snapshot reads are modelled.

use crate::constants::BOND_STATUS_BONDED;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidatorsResponse {
    #[serde(default)]
    pub validators: Vec<ValidatorJson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidatorJson {
    pub operator_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidatorDetails {
    #[serde(default)]
    pub status: BondStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DelegationsResponse {
    #[serde(default)]
    pub delegation_responses: Vec<DelegationResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DelegationResponse {
    pub delegation: Option<Delegation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Delegation {
    pub delegator_address: Option<String>,
    #[serde(default)]
    pub shares: String,
}

/// Output of `<daemon> status`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeStatus {
    #[serde(rename = "SyncInfo", alias = "sync_info")]
    pub sync_info: SyncInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SyncInfo {
    #[serde(deserialize_with = "from_str_or_u64")]
    pub latest_block_height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum BondStatus {
    Bonded,
    Unbonding,
    Unbonded,
    /// Unspecified or unrecognised status
    #[default]
    Unspecified,
}

impl BondStatus {
    /// Only bonded validators take part in consensus
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Bonded)
    }
}

impl From<String> for BondStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            BOND_STATUS_BONDED => Self::Bonded,
            "BOND_STATUS_UNBONDING" => Self::Unbonding,
            "BOND_STATUS_UNBONDED" => Self::Unbonded,
            _ => Self::Unspecified,
        }
    }
}

impl std::fmt::Display for BondStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Bonded => BOND_STATUS_BONDED,
            Self::Unbonding => "BOND_STATUS_UNBONDING",
            Self::Unbonded => "BOND_STATUS_UNBONDED",
            Self::Unspecified => "BOND_STATUS_UNSPECIFIED",
        };
        write!(f, "{status}")
    }
}

fn from_str_or_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrU64 {
        Str(String),
        U64(u64),
    }

    match StrOrU64::deserialize(deserializer)? {
        StrOrU64::U64(n) => Ok(n),
        StrOrU64::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
