//////////////////
// Test modules //
//////////////////


//////////////////
// Test helpers //
//////////////////

pub mod helpers {
    use bech32::{ToBase32, Variant};
    use gatorhead_snapshot::chain::{ChainQuery, QueryError};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Sets up a new temp dir, deleted when it goes out of scope
    pub fn setup_new_output_dir(prefix: &str) -> anyhow::Result<tempfile::TempDir> {
        Ok(tempfile::TempDir::with_prefix(prefix)?)
    }

    /// Bech32 `dym` address whose 20 byte payload encodes `n`
    pub fn dym_address(n: u32) -> String {
        let mut bytes = [0u8; 20];
        bytes[16..].copy_from_slice(&n.to_be_bytes());
        bech32::encode("dym", bytes.to_base32(), Variant::Bech32).unwrap()
    }

    /// Lowercase hex the CSV rows carry for [dym_address]
    pub fn dym_hex(n: u32) -> String {
        format!("0x{}{:08x}", "00".repeat(16), n)
    }

    pub fn delegation(delegator: &str, shares: &str) -> Value {
        json!({
            "delegation": {
                "delegator_address": delegator,
                "validator_address": "dymvaloper1mock",
                "shares": shares,
            },
            "balance": { "denom": "adym", "amount": shares.split('.').next() },
        })
    }

    pub fn delegation_without_delegator(shares: &str) -> Value {
        json!({ "delegation": { "validator_address": "dymvaloper1mock", "shares": shares } })
    }

    /// `count` distinct delegators numbered from `first`, one DYM each
    pub fn one_dym_delegations(first: u32, count: u32) -> Vec<Value> {
        (first..first + count)
            .map(|n| delegation(&dym_address(n), "1000000000000000000.000000000000000000"))
            .collect()
    }

    struct MockValidator {
        operator_address: String,
        status: Option<String>,
        pages: Pages,
    }

    /// In-memory daemon answering the staking queries the snapshot makes.
    /// Every call is recorded.
    #[derive(Default)]
    pub struct MockDaemon {
        validators: Vec<MockValidator>,
        list_fails: bool,
        height: Option<u64>,
        pub calls: Mutex<Vec<Vec<String>>>,
    }

    impl MockDaemon {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn validator(mut self, operator_address: &str, status: &str, pages: Pages) -> Self {
            self.validators.push(MockValidator {
                operator_address: operator_address.to_string(),
                status: Some(status.to_string()),
                pages,
            });
            self
        }

        /// A validator whose status query fails
        pub fn broken_validator(mut self, operator_address: &str) -> Self {
            self.validators.push(MockValidator {
                operator_address: operator_address.to_string(),
                status: None,
                pages: vec![],
            });
            self
        }

        pub fn failing_validator_list(mut self) -> Self {
            self.list_fails = true;
            self
        }

        pub fn height(mut self, height: u64) -> Self {
            self.height = Some(height);
            self
        }

        pub fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }

        /// `(validator, offset)` of each delegations query
        pub fn delegation_calls(&self) -> Vec<(String, usize)> {
            self.calls()
                .into_iter()
                .filter(|args| args.get(2).map(String::as_str) == Some("delegations-to"))
                .map(|args| (args[3].clone(), args[7].parse().unwrap()))
                .collect()
        }

        fn find(&self, operator_address: &str) -> Option<&MockValidator> {
            self.validators
                .iter()
                .find(|v| v.operator_address == operator_address)
        }
    }

    fn fail(args: &[String], stderr: &str) -> Result<String, QueryError> {
        Err(QueryError::Stderr {
            command: args.join(" "),
            stderr: stderr.to_string(),
        })
    }

    impl ChainQuery for MockDaemon {
        async fn query(&self, args: &[String]) -> Result<String, QueryError> {
            self.calls.lock().unwrap().push(args.to_vec());

            let argv: Vec<&str> = args.iter().map(String::as_str).collect();
            match argv.as_slice() {
                ["status"] => match self.height {
                    Some(height) => Ok(json!({
                        "SyncInfo": { "latest_block_height": height.to_string() }
                    })
                    .to_string()),
                    None => fail(args, "connection refused"),
                },
                ["query", "staking", "validators", "--limit", limit, "-o", "json"] => {
                    if self.list_fails {
                        return fail(args, "rpc error: code = Unavailable");
                    }
                    let limit: usize = limit.parse().unwrap();
                    let validators: Vec<_> = self
                        .validators
                        .iter()
                        .take(limit)
                        .map(|v| json!({ "operator_address": v.operator_address, "jailed": false }))
                        .collect();
                    Ok(json!({ "validators": validators, "pagination": {} }).to_string())
                }
                ["query", "staking", "validator", address, "-o", "json"] => {
                    match self.find(address).and_then(|v| v.status.as_ref()) {
                        Some(status) => Ok(json!({
                            "operator_address": address,
                            "status": status,
                        })
                        .to_string()),
                        None => fail(args, "validator does not exist"),
                    }
                }
                ["query", "staking", "delegations-to", address, "--limit", limit, "--offset", offset, "-o", "json"] =>
                {
                    let limit: usize = limit.parse().unwrap();
                    let offset: usize = offset.parse().unwrap();
                    let Some(validator) = self.find(address) else {
                        return fail(args, "validator does not exist");
                    };

                    // serve the page starting at `offset`
                    let mut start = 0;
                    for page in validator.pages.iter() {
                        let Some(records) = page else {
                            return fail(args, "rpc error: code = Internal");
                        };
                        if start == offset {
                            assert!(records.len() <= limit);
                            return Ok(json!({
                                "delegation_responses": records,
                                "pagination": { "next_key": null, "total": "0" },
                            })
                            .to_string());
                        }
                        start += records.len();
                    }
                    Ok(json!({ "delegation_responses": [], "pagination": {} }).to_string())
                }
                _ => fail(args, "unknown command"),
            }
        }
    }

    /// Delegation pages of a validator, `None` pages fail
    pub type Pages = Vec<Option<Vec<Value>>>;

    pub fn pages(pages: impl IntoIterator<Item = Vec<Value>>) -> Pages {
        pages.into_iter().map(Some).collect()
    }
}
