//! Sequential fan-out: every command on every host, one host at a time.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::session::{CommandOutput, CommandSession, Credentials, SessionConnector};

/// Commands with this prefix get the password written to their stdin.
const SUDO_PREFIX: &str = "sudo";

/// Host and command lists for one run, kept verbatim as loaded.
#[derive(Debug, Clone)]
pub struct FanoutPlan {
    pub hosts: Vec<String>,
    pub commands: Vec<String>,
}

impl FanoutPlan {
    pub fn new(hosts: Vec<String>, commands: Vec<String>) -> Self {
        Self { hosts, commands }
    }

    /// Reject empty inputs before any network activity.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.hosts.is_empty() {
            return Err(PlanError::EmptyHostList);
        }
        if self.commands.is_empty() {
            return Err(PlanError::EmptyCommandList);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("host list is empty")]
    EmptyHostList,

    #[error("command list is empty")]
    EmptyCommandList,
}

impl PlanError {
    /// Process exit code for the binary: the two cases stay distinct.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyHostList => 1,
            Self::EmptyCommandList => 2,
        }
    }
}

#[derive(Debug, Error)]
pub enum FanoutError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("output write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One executed command and what it produced.
#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub command: String,
    #[serde(flatten)]
    pub output: CommandOutput,
}

/// Outcome for a single host.
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub host: String,
    pub connected: bool,
    /// Reason the host's iteration stopped early, if it did.
    pub failure: Option<String>,
    pub commands: Vec<CommandReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FanoutReport {
    pub hosts: Vec<HostReport>,
}

/// Run every command on every host in order.
///
/// A connection failure stops only that host's iteration: the reason is
/// written to `out` and the loop moves to the next host. A command failure
/// aborts the remaining commands for that host only. Human-readable
/// progress goes to `out` immediately, host by host; the returned report
/// carries the same information in structured form.
pub fn run_fanout<C, W>(
    connector: &C,
    plan: &FanoutPlan,
    creds: &Credentials,
    out: &mut W,
) -> Result<FanoutReport, FanoutError>
where
    C: SessionConnector,
    W: Write,
{
    plan.validate()?;

    let mut hosts = Vec::with_capacity(plan.hosts.len());

    for host in &plan.hosts {
        writeln!(out, "=== {host} ===")?;
        let mut report = HostReport {
            host: host.clone(),
            connected: false,
            failure: None,
            commands: Vec::new(),
        };

        let mut session = match connector.connect(host, creds) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("connect to {host} failed: {e}");
                writeln!(out, "failed to connect, moving on to the next host")?;
                writeln!(out, "reason: {e}")?;
                report.failure = Some(e.to_string());
                hosts.push(report);
                continue;
            }
        };
        report.connected = true;
        writeln!(out, "connected")?;

        for command in &plan.commands {
            writeln!(out, "-> {command}")?;
            let stdin_line = command
                .starts_with(SUDO_PREFIX)
                .then_some(creds.password.as_str());

            match session.exec(command, stdin_line) {
                Ok(output) => {
                    write_command_output(out, &output)?;
                    report.commands.push(CommandReport {
                        command: command.clone(),
                        output,
                    });
                }
                Err(e) => {
                    tracing::warn!("exec on {host} failed: {e}");
                    writeln!(out, "command failed, moving on to the next host")?;
                    writeln!(out, "reason: {e}")?;
                    report.failure = Some(e.to_string());
                    break;
                }
            }
        }

        hosts.push(report);
    }

    writeln!(out, "=== done: {} host(s) attempted ===", hosts.len())?;
    Ok(FanoutReport { hosts })
}

fn write_command_output<W: Write>(out: &mut W, output: &CommandOutput) -> std::io::Result<()> {
    writeln!(out, "stdout:")?;
    writeln!(out, "{}", output.stdout)?;
    writeln!(out, "stderr:")?;
    writeln!(out, "{}", output.stderr)?;
    Ok(())
}
