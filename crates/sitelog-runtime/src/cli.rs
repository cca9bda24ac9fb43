//! CLI definition using clap derive.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use sitelog_core::{ErrorPolicy, FieldCleanup};

#[derive(Parser)]
#[command(name = "sitelog", about = "web-page field logger and SSH fan-out runner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Poll a page and log extracted fields, one line per cycle
    Poll(PollOpts),
    /// Run a command list across a host list over SSH
    Fanout(FanoutOpts),
}

#[derive(clap::Args)]
pub struct PollOpts {
    /// Combined host and path, split at the first '/'
    #[arg(
        long,
        default_value = "www.subsonicradio.com/station/a_now_playing.php"
    )]
    pub address: String,

    /// Extraction pattern; capture groups 1..=sections are logged
    #[arg(
        long,
        default_value = ">Now Playing.*desc.*>(.*)<.*td.*td.*count_down_text(.*)td.*td.*Coming up"
    )]
    pub pattern: String,

    /// Number of capturing groups to record per cycle
    #[arg(long, default_value = "2")]
    pub sections: usize,

    /// Seconds between cycles
    #[arg(long, default_value = "30")]
    pub period: u64,

    /// What a failed cycle does: fail-fast or continue
    #[arg(long, default_value = "fail-fast", value_parser = ErrorPolicy::from_str)]
    pub on_error: ErrorPolicy,

    /// Per-field cleanup applied before logging: none or duration-token
    #[arg(long, default_value = "duration-token", value_parser = FieldCleanup::from_str)]
    pub cleanup: FieldCleanup,

    /// Dump fetched bodies and match details to the log
    #[arg(long)]
    pub debug: bool,
}

#[derive(clap::Args)]
pub struct FanoutOpts {
    /// Newline-delimited host list
    #[arg(long, default_value = "hostlist.txt")]
    pub hosts: PathBuf,

    /// Newline-delimited command list
    #[arg(long, default_value = "commands.txt")]
    pub commands: PathBuf,

    /// SSH username; prompted for when omitted
    #[arg(long)]
    pub username: Option<String>,

    /// TCP connect timeout in seconds
    #[arg(long, default_value = "20")]
    pub connect_timeout: u64,

    /// Emit one JSON document per host instead of human-readable blocks
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn poll_defaults_reproduce_original_configuration() {
        let cli = Cli::parse_from(["sitelog", "poll"]);
        let Command::Poll(opts) = cli.command else {
            panic!("expected poll");
        };
        assert_eq!(opts.address, "www.subsonicradio.com/station/a_now_playing.php");
        assert_eq!(opts.sections, 2);
        assert_eq!(opts.period, 30);
        assert_eq!(opts.on_error, ErrorPolicy::FailFast);
        assert_eq!(opts.cleanup, FieldCleanup::DurationToken);
        assert!(!opts.debug);
    }

    #[test]
    fn poll_on_error_accepts_continue() {
        let cli = Cli::parse_from(["sitelog", "poll", "--on-error", "continue"]);
        let Command::Poll(opts) = cli.command else {
            panic!("expected poll");
        };
        assert_eq!(opts.on_error, ErrorPolicy::Continue);
    }

    #[test]
    fn fanout_defaults_match_original_file_names() {
        let cli = Cli::parse_from(["sitelog", "fanout"]);
        let Command::Fanout(opts) = cli.command else {
            panic!("expected fanout");
        };
        assert_eq!(opts.hosts, PathBuf::from("hostlist.txt"));
        assert_eq!(opts.commands, PathBuf::from("commands.txt"));
        assert_eq!(opts.connect_timeout, 20);
        assert!(opts.username.is_none());
        assert!(!opts.json);
    }
}
