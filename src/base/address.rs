use crate::constants::DYM_ADDRESS_PREFIX;
use bech32::FromBase32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("invalid bech32 address {address:?}: {source}")]
    Bech32 {
        address: String,
        source: bech32::Error,
    },
    #[error("unexpected address prefix {prefix:?} in {address:?}, expected {expected:?}")]
    Prefix {
        address: String,
        prefix: String,
        expected: &'static str,
    },
    #[error("empty address payload in {0:?}")]
    EmptyPayload(String),
}

/// Bech32 account address of a delegator, e.g. `dym1...`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DelegatorAddress(pub String);

/// Bech32 operator address of a validator, e.g. `dymvaloper1...`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatorAddress(pub String);

impl DelegatorAddress {
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self(address.into())
    }

    pub fn to_address(&self) -> String {
        self.0.to_owned()
    }

    /// Lowercase `0x`-prefixed hex of the address payload
    pub fn to_hex(&self) -> Result<String, AddressError> {
        bech32_to_hex(&self.0, DYM_ADDRESS_PREFIX)
    }
}

impl ValidatorAddress {
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self(address.into())
    }
}

/// Decodes a bech32 address with human readable part `expected_prefix` and
/// hex encodes its payload.
pub fn bech32_to_hex(
    address: &str,
    expected_prefix: &'static str,
) -> Result<String, AddressError> {
    let bech32_err = |source| AddressError::Bech32 {
        address: address.to_string(),
        source,
    };

    let (prefix, data, _variant) = bech32::decode(address).map_err(bech32_err)?;
    if prefix != expected_prefix {
        return Err(AddressError::Prefix {
            address: address.to_string(),
            prefix,
            expected: expected_prefix,
        });
    }

    let bytes = Vec::<u8>::from_base32(&data).map_err(bech32_err)?;
    if bytes.is_empty() {
        return Err(AddressError::EmptyPayload(address.to_string()));
    }

    Ok(format!("0x{}", hex::encode(bytes)))
}

/////////////////
// conversions //
/////////////////

impl From<&str> for DelegatorAddress {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for DelegatorAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ValidatorAddress {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ValidatorAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DelegatorAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ValidatorAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
