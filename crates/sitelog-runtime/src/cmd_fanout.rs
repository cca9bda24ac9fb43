//! `sitelog fanout` — run a command list across a host list over SSH.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use sitelog_ssh::{Credentials, FanoutPlan, Ssh2Connector, run_fanout};

use crate::cli::FanoutOpts;

/// Entry point for `sitelog fanout`. Returns the process exit code.
pub async fn cmd_fanout(opts: FanoutOpts) -> anyhow::Result<i32> {
    let hosts = read_list(&opts.hosts)?;
    let commands = read_list(&opts.commands)?;
    let plan = FanoutPlan::new(hosts, commands);

    // Both list checks happen before any prompt or connection.
    if let Err(e) = plan.validate() {
        eprintln!("{e}, aborting");
        return Ok(e.exit_code());
    }

    let creds = collect_credentials(opts.username)?;
    let connector = Ssh2Connector::new().with_timeout(Duration::from_secs(opts.connect_timeout));

    let json = opts.json;
    let report = tokio::task::spawn_blocking(move || {
        if json {
            // Structured mode: progress text is discarded, the report is emitted below.
            run_fanout(&connector, &plan, &creds, &mut io::sink())
        } else {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_fanout(&connector, &plan, &creds, &mut out)
        }
    })
    .await??;

    if json {
        for host in &report.hosts {
            println!("{}", serde_json::to_string(host)?);
        }
    }

    Ok(0)
}

/// Load a newline-delimited list verbatim; blank interior lines are kept,
/// the way the lists have always been interpreted.
fn read_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Prompt for the username (unless given) and a masked password.
fn collect_credentials(username: Option<String>) -> anyhow::Result<Credentials> {
    let username = match username {
        Some(name) => name,
        None => {
            print!("Enter Username: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            line.trim().to_string()
        }
    };
    let password = rpassword::prompt_password("Enter Password: ")?;
    Ok(Credentials::new(username, password))
}
