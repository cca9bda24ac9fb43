//! sitelog: periodic web-page field logger and SSH fan-out command runner.
//! Single binary, two subcommands, no shared state between them.

use clap::Parser;

mod cli;
mod cmd_fanout;
mod cmd_poll;
mod poll_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let default_filter = match &args.command {
        cli::Command::Poll(opts) if opts.debug => "debug",
        _ => "info",
    };
    let filter = std::env::var("SITELOG_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match args.command {
        cli::Command::Poll(opts) => cmd_poll::cmd_poll(opts).await?,
        cli::Command::Fanout(opts) => {
            let exit_code = cmd_fanout::cmd_fanout(opts).await?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
