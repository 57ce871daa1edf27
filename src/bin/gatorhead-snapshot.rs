use clap::Parser;
use gatorhead_snapshot::{
    chain::DaemonQuery,
    cli::SnapshotArgs,
    export::{today, write_ledgers},
    snapshot::take_snapshot,
};
use log::{debug, error, info};
use stderrlog::{ColorChoice, Timestamp};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let args = SnapshotArgs::parse();

    // initialize logging
    stderrlog::new()
        .module(module_path!())
        .color(ColorChoice::Never)
        .timestamp(Timestamp::Microsecond)
        .verbosity(args.log_level.0)
        .init()?;
    debug!("{args:?}");

    let query = DaemonQuery::new(args.binary, args.node);
    let snapshot = match take_snapshot(&query).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("An error occurred during execution: {e:#}");
            return Err(e);
        }
    };

    let date = today();
    info!(
        "Writing {} active and {} inactive delegators to {}",
        snapshot.ledgers.active.len(),
        snapshot.ledgers.inactive.len(),
        args.output_dir.display()
    );
    let (active_file, inactive_file) =
        write_ledgers(&args.output_dir, &snapshot.ledgers, date).await;

    let summary = snapshot.summary(active_file, inactive_file);
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
