use crate::{
    base::{
        address::{DelegatorAddress, ValidatorAddress},
        stake::Stake,
    },
    chain::{models::DelegationsResponse, query_args, ChainQuery, QueryError},
    constants::DELEGATIONS_PAGE_SIZE,
    ledger::DelegatorLedger,
};
use log::{debug, error, warn};

/// Result of aggregating one validator's delegations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelegationsSummary {
    pub pages: usize,
    pub credited: usize,
    pub skipped: usize,
}

/// Pages through the validator's delegations, crediting each delegator's
/// shares (in DYM) to `ledger`.
///
/// A page shorter than [DELEGATIONS_PAGE_SIZE] is the last one. A failed
/// page is logged and ends the walk for this validator; whatever was
/// credited before it stays in the ledger.
pub async fn fetch_delegators<Q: ChainQuery>(
    query: &Q,
    validator: &ValidatorAddress,
    ledger: &mut DelegatorLedger,
) -> DelegationsSummary {
    let mut summary = DelegationsSummary::default();
    let mut offset = 0;

    loop {
        let page = match fetch_delegations_page(query, validator, offset).await {
            Ok(page) => page,
            Err(e) => {
                error!("Failed to fetch delegators for validator {validator}: {e}");
                break;
            }
        };
        summary.pages += 1;

        let page_len = page.delegation_responses.len();
        for res in page.delegation_responses {
            let Some(delegation) = res.delegation else {
                summary.skipped += 1;
                continue;
            };
            let delegator = match delegation.delegator_address {
                Some(delegator) if !delegator.is_empty() => DelegatorAddress::new(delegator),
                _ => {
                    summary.skipped += 1;
                    continue;
                }
            };

            match Stake::from_adym_str(&delegation.shares) {
                Ok(stake) => {
                    ledger.credit(delegator, stake);
                    summary.credited += 1;
                }
                Err(e) => {
                    warn!("Skipping delegation of {delegator} to {validator}: {e}");
                    summary.skipped += 1;
                }
            }
        }

        debug!(
            "Validator {validator} page {} at offset {offset}: {page_len} delegations",
            summary.pages
        );
        if page_len < DELEGATIONS_PAGE_SIZE {
            break;
        }
        offset += page_len;
    }

    summary
}

async fn fetch_delegations_page<Q: ChainQuery>(
    query: &Q,
    validator: &ValidatorAddress,
    offset: usize,
) -> Result<DelegationsResponse, QueryError> {
    let args = query_args([
        "query",
        "staking",
        "delegations-to",
        validator.0.as_str(),
        "--limit",
        DELEGATIONS_PAGE_SIZE.to_string().as_str(),
        "--offset",
        offset.to_string().as_str(),
        "-o",
        "json",
    ]);
    query.query_json(&args).await
}
