//! Query interface to the chain daemon

pub mod models;

use crate::constants::DEFAULT_DAEMON_BINARY;
use log::{debug, trace};
use serde::de::DeserializeOwned;
use std::{path::PathBuf, process::ExitStatus};
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    ExitStatus {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("`{command}` wrote to stderr: {stderr}")]
    Stderr { command: String, stderr: String },
    #[error("`{command}` returned invalid JSON: {source}")]
    Json {
        command: String,
        source: serde_json::Error,
    },
}

/// Anything that can answer daemon queries, given the daemon's argument
/// list, with the raw stdout of the call.
#[allow(async_fn_in_trait)]
pub trait ChainQuery {
    async fn query(&self, args: &[String]) -> Result<String, QueryError>;

    /// Runs the query and parses its stdout as JSON
    async fn query_json<T: DeserializeOwned>(&self, args: &[String]) -> Result<T, QueryError> {
        let stdout = self.query(args).await?;
        serde_json::from_str(&stdout).map_err(|source| QueryError::Json {
            command: args.join(" "),
            source,
        })
    }
}

/// Shells out to the daemon binary, e.g. `dymd`
#[derive(Debug, Clone)]
pub struct DaemonQuery {
    pub binary: PathBuf,
    pub node: Option<String>,
}

impl DaemonQuery {
    pub fn new(binary: PathBuf, node: Option<String>) -> Self {
        Self { binary, node }
    }

    fn command_line(&self, args: &[String]) -> String {
        let mut command = vec![self.binary.display().to_string()];
        command.extend(self.args(args));
        command.join(" ")
    }

    fn args(&self, args: &[String]) -> Vec<String> {
        let mut args = args.to_vec();
        if let Some(node) = self.node.as_ref() {
            args.push("--node".into());
            args.push(node.clone());
        }
        args
    }
}

impl Default for DaemonQuery {
    fn default() -> Self {
        Self::new(DEFAULT_DAEMON_BINARY.into(), None)
    }
}

impl ChainQuery for DaemonQuery {
    async fn query(&self, args: &[String]) -> Result<String, QueryError> {
        let command = self.command_line(args);
        debug!("Running {command}");

        let output = Command::new(&self.binary)
            .args(self.args(args))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| QueryError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(QueryError::ExitStatus {
                command,
                status: output.status,
                stderr,
            });
        }

        // the daemon reports query failures on stderr, sometimes with a zero
        // exit code
        if !stderr.is_empty() {
            return Err(QueryError::Stderr { command, stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        trace!("{command} returned {} bytes", stdout.len());
        Ok(stdout)
    }
}

/// Builds the argument list of a daemon query
pub fn query_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    args.into_iter().map(|arg| arg.to_string()).collect()
}
