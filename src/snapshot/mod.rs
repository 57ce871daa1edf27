//! Delegator stake snapshot of a validator set
//!
//! Validators are visited one at a time. Each validator's bond status picks
//! the ledger (active or inactive) its delegations are credited to.

pub mod delegations;
pub mod validators;

use crate::{
    base::stake::Stake,
    chain::ChainQuery,
    ledger::{DelegatorLedger, LedgerKind, Ledgers},
};
use anyhow::Context;
use delegations::fetch_delegators;
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use validators::{fetch_snapshot_height, fetch_validator_status, fetch_validators};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Latest block height reported by the node when the snapshot began
    pub height: Option<u64>,
    pub validators: usize,
    pub ledgers: Ledgers,
}

/// Run summary printed once the CSV files are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub snapshot_height: Option<u64>,
    pub validators: usize,
    pub active: LedgerSummary,
    pub inactive: LedgerSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub delegators: usize,
    pub total_stake: Stake,
    pub file: Option<PathBuf>,
}

/// Aggregates the delegations of every listed validator.
///
/// Failing to list validators yields an empty snapshot, and a failed
/// delegations page only truncates that validator's contribution. A failed
/// status query aborts the snapshot since the validator can't be classified.
pub async fn take_snapshot<Q: ChainQuery>(query: &Q) -> anyhow::Result<Snapshot> {
    let height = fetch_snapshot_height(query).await;
    if let Some(height) = height {
        info!("Taking delegator snapshot at height {height}");
    }

    let validators = fetch_validators(query).await;
    info!("Found {} validators", validators.len());

    let mut ledgers = Ledgers::default();
    for (n, validator) in validators.iter().enumerate() {
        let status = fetch_validator_status(query, validator)
            .await
            .with_context(|| format!("Failed to fetch status of validator {validator}"))?;
        let kind = LedgerKind::from_status(&status);

        let summary = fetch_delegators(query, validator, ledgers.get_mut(kind)).await;
        info!(
            "[{}/{}] {validator} ({status}, {kind}): {} delegations over {} pages, {} skipped",
            n + 1,
            validators.len(),
            summary.credited,
            summary.pages,
            summary.skipped,
        );
    }

    Ok(Snapshot {
        height,
        validators: validators.len(),
        ledgers,
    })
}

impl Snapshot {
    pub fn summary(
        &self,
        active_file: Option<PathBuf>,
        inactive_file: Option<PathBuf>,
    ) -> SnapshotSummary {
        SnapshotSummary {
            snapshot_height: self.height,
            validators: self.validators,
            active: LedgerSummary::new(&self.ledgers.active, active_file),
            inactive: LedgerSummary::new(&self.ledgers.inactive, inactive_file),
        }
    }

    pub fn ledger(&self, kind: LedgerKind) -> &DelegatorLedger {
        self.ledgers.get(kind)
    }
}

impl LedgerSummary {
    fn new(ledger: &DelegatorLedger, file: Option<PathBuf>) -> Self {
        Self {
            delegators: ledger.len(),
            total_stake: ledger.total_stake(),
            file,
        }
    }
}
