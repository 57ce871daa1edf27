//! Delegated stake amount

use crate::constants::{DYM_DECIMALS, DYM_SCALE_DEC};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};
use thiserror::Error;

/// Sub-adym digits kept when parsing shares. `Decimal` tops out at a scale
/// of 28.
const MAX_FRACTION_DIGITS: usize = 28 - DYM_DECIMALS as usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StakeError {
    #[error("invalid share amount {0:?}")]
    InvalidShares(String),
    #[error("share amount {0:?} out of range")]
    OutOfRange(String),
}

/// Stake amount in DYM, accumulated in fixed point.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash, Serialize, Deserialize)]
pub struct Stake(pub Decimal);

//////////
// impl //
//////////

impl Stake {
    /// Parses a share amount denominated in adym and converts it to DYM,
    /// i.e. divides by 10^18.
    ///
    /// Share amounts come either as integers (`"2000000000000000000"`) or
    /// with an 18 digit fractional part
    /// (`"2000000000000000000.000000000000000000"`).
    pub fn from_adym_str(shares: &str) -> Result<Self, StakeError> {
        let invalid = || StakeError::InvalidShares(shares.to_string());
        let out_of_range = |_| StakeError::OutOfRange(shares.to_string());

        let shares = shares.trim();
        let (int_part, frac_part) = shares.split_once('.').unwrap_or((shares, ""));
        if int_part.is_empty()
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let mut dym = Decimal::from_str(int_part).map_err(out_of_range)?;
        dym.set_scale(DYM_DECIMALS).map_err(out_of_range)?;

        let frac_part = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
        if frac_part.bytes().any(|b| b != b'0') {
            let mut frac = Decimal::from_str(frac_part).map_err(out_of_range)?;
            frac.set_scale(DYM_DECIMALS + frac_part.len() as u32)
                .map_err(out_of_range)?;
            dym = dym.checked_add(frac).ok_or_else(invalid)?;
        }

        Ok(Self(dym.normalize()))
    }

    pub fn from_adym(adym: u64) -> Self {
        Self((Decimal::from(adym) / DYM_SCALE_DEC).normalize())
    }
}

////////////////
// operations //
////////////////

impl Add<Stake> for Stake {
    type Output = Stake;

    fn add(self, rhs: Stake) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<Stake> for Stake {
    fn add_assign(&mut self, rhs: Stake) {
        *self = *self + rhs
    }
}

impl<'a> Sum<&'a Stake> for Stake {
    fn sum<I: Iterator<Item = &'a Stake>>(iter: I) -> Self {
        iter.fold(Stake::default(), |acc, stake| acc + *stake)
    }
}

/////////////////
// conversions //
/////////////////

impl From<Decimal> for Stake {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Stake {
    type Err = StakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_adym_str(s)
    }
}

/////////////
// display //
/////////////

impl std::fmt::Display for Stake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
