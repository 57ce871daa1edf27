use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// version

pub const GIT_COMMIT_HASH: &str = env!("GIT_COMMIT_HASH");
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("GIT_COMMIT_HASH"));

// daemon

pub const DEFAULT_DAEMON_BINARY: &str = "dymd";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Validators requested in the single listing query. Larger validator sets
/// are truncated to this many.
pub const VALIDATORS_PAGE_SIZE: usize = 500;
pub const DELEGATIONS_PAGE_SIZE: usize = 3000;

// dymension constants

pub const DYM_ADDRESS_PREFIX: &str = "dym";
pub const DYM_DECIMALS: u32 = 18;
pub const DYM_SCALE_DEC: Decimal = dec!(1000000000000000000);
pub const BOND_STATUS_BONDED: &str = "BOND_STATUS_BONDED";

// output

pub const ACTIVE_VALIDATORS_LABEL: &str = "gatorhead_active_validators";
pub const INACTIVE_VALIDATORS_LABEL: &str = "gatorhead_inactive_validators";
pub const SNAPSHOT_DATE_FORMAT: &str = "%Y%m%d";
