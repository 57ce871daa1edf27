use crate::{
    base::address::ValidatorAddress,
    chain::{
        models::{BondStatus, NodeStatus, ValidatorDetails, ValidatorsResponse},
        query_args, ChainQuery, QueryError,
    },
    constants::VALIDATORS_PAGE_SIZE,
};
use log::{error, warn};

/// Lists validator operator addresses in the order the daemon returns them.
///
/// Only a single page of [VALIDATORS_PAGE_SIZE] validators is requested, so
/// larger validator sets are truncated. Query or parse failures are logged
/// and yield an empty list.
pub async fn fetch_validators<Q: ChainQuery>(query: &Q) -> Vec<ValidatorAddress> {
    let args = query_args([
        "query",
        "staking",
        "validators",
        "--limit",
        VALIDATORS_PAGE_SIZE.to_string().as_str(),
        "-o",
        "json",
    ]);

    match query.query_json::<ValidatorsResponse>(&args).await {
        Ok(res) => {
            if res.validators.len() >= VALIDATORS_PAGE_SIZE {
                warn!(
                    "Received a full page of {VALIDATORS_PAGE_SIZE} validators, any further validators are not included"
                );
            }
            res.validators
                .into_iter()
                .map(|v| ValidatorAddress::new(v.operator_address))
                .collect()
        }
        Err(e) => {
            error!("Failed to fetch validators: {e}");
            vec![]
        }
    }
}

pub async fn fetch_validator_status<Q: ChainQuery>(
    query: &Q,
    validator: &ValidatorAddress,
) -> Result<BondStatus, QueryError> {
    let args = query_args(["query", "staking", "validator", validator.0.as_str(), "-o", "json"]);
    let details: ValidatorDetails = query.query_json(&args).await?;
    Ok(details.status)
}

/// Latest block height known to the daemon's node
pub async fn fetch_snapshot_height<Q: ChainQuery>(query: &Q) -> Option<u64> {
    match query.query_json::<NodeStatus>(&query_args(["status"])).await {
        Ok(status) => Some(status.sync_info.latest_block_height),
        Err(e) => {
            error!("Failed to fetch the latest block height: {e}");
            None
        }
    }
}
