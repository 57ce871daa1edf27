//! In-memory delegator ledgers

use crate::{
    base::{address::DelegatorAddress, stake::Stake},
    chain::models::BondStatus,
    constants::{ACTIVE_VALIDATORS_LABEL, INACTIVE_VALIDATORS_LABEL},
};
use std::collections::HashMap;

/// Cumulative stake per delegator, iterated in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegatorLedger {
    entries: Vec<(DelegatorAddress, Stake)>,
    index: HashMap<DelegatorAddress, usize>,
}

/// Which validator set a ledger aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    Active,
    Inactive,
}

/// The active (bonded) and inactive ledgers of one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledgers {
    pub active: DelegatorLedger,
    pub inactive: DelegatorLedger,
}

impl DelegatorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `stake` to the delegator's total, creating the entry at zero
    /// on first encounter
    pub fn credit(&mut self, delegator: DelegatorAddress, stake: Stake) {
        match self.index.get(&delegator) {
            Some(&idx) => self.entries[idx].1 += stake,
            None => {
                self.index.insert(delegator.clone(), self.entries.len());
                self.entries.push((delegator, Stake::default() + stake));
            }
        }
    }

    pub fn get(&self, delegator: &DelegatorAddress) -> Option<Stake> {
        self.index.get(delegator).map(|&idx| self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DelegatorAddress, &Stake)> {
        self.entries.iter().map(|(delegator, stake)| (delegator, stake))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_stake(&self) -> Stake {
        self.entries.iter().map(|(_, stake)| stake).sum()
    }
}

impl LedgerKind {
    pub fn from_status(status: &BondStatus) -> Self {
        if status.is_active() {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Output file label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => ACTIVE_VALIDATORS_LABEL,
            Self::Inactive => INACTIVE_VALIDATORS_LABEL,
        }
    }
}

impl Ledgers {
    pub fn get(&self, kind: LedgerKind) -> &DelegatorLedger {
        match kind {
            LedgerKind::Active => &self.active,
            LedgerKind::Inactive => &self.inactive,
        }
    }

    pub fn get_mut(&mut self, kind: LedgerKind) -> &mut DelegatorLedger {
        match kind {
            LedgerKind::Active => &mut self.active,
            LedgerKind::Inactive => &mut self.inactive,
        }
    }
}

impl std::fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}
