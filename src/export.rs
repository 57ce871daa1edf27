//! CSV export of delegator ledgers
//!
//! Each row is `<hex address>,<stake>;` in ledger order, e.g.
//! ```text
//! 0x000102030405060708090a0b0c0d0e0f10111213,2;
//! ```

use crate::{
    constants::SNAPSHOT_DATE_FORMAT,
    ledger::{DelegatorLedger, LedgerKind, Ledgers},
};
use anyhow::Context;
use chrono::{Local, NaiveDate};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Serializes the ledger, skipping delegators whose address can't be
/// converted to hex.
pub fn ledger_to_csv(ledger: &DelegatorLedger) -> anyhow::Result<String> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    for (delegator, stake) in ledger.iter() {
        let hex = match delegator.to_hex() {
            Ok(hex) => hex,
            Err(e) => {
                warn!("Failed to convert {delegator} to hex: {e}");
                continue;
            }
        };
        csv_writer.write_record([hex, format!("{stake};")])?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("{}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// `<label>_<YYYYMMDD>.csv`
pub fn snapshot_filename(label: &str, date: NaiveDate) -> String {
    format!("{label}_{}.csv", date.format(SNAPSHOT_DATE_FORMAT))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Writes the ledger's CSV to `<dir>/<label>_<YYYYMMDD>.csv`
pub async fn write_ledger(
    dir: &Path,
    kind: LedgerKind,
    ledger: &DelegatorLedger,
    date: NaiveDate,
) -> anyhow::Result<PathBuf> {
    let path = dir.join(snapshot_filename(kind.label(), date));
    let contents = ledger_to_csv(ledger)?;

    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Error writing CSV file {}", path.display()))?;
    Ok(path)
}

/// Writes both ledgers and waits for both writes to finish. A failed write
/// is logged and reported as `None`.
pub async fn write_ledgers(
    dir: &Path,
    ledgers: &Ledgers,
    date: NaiveDate,
) -> (Option<PathBuf>, Option<PathBuf>) {
    let (active, inactive) = tokio::join!(
        write_ledger(dir, LedgerKind::Active, &ledgers.active, date),
        write_ledger(dir, LedgerKind::Inactive, &ledgers.inactive, date),
    );
    (log_written(active), log_written(inactive))
}

fn log_written(result: anyhow::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => {
            info!("CSV file {} written successfully", path.display());
            Some(path)
        }
        Err(e) => {
            error!("{e:#}");
            None
        }
    }
}
