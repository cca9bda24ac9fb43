//! `sitelog poll` — periodic fetch/extract/log loop.

use sitelog_core::PollerConfig;
use sitelog_http::HttpFetcher;

use crate::cli::PollOpts;
use crate::poll_loop::run_poll;

/// Entry point for `sitelog poll`. Runs until ctrl-c.
pub async fn cmd_poll(opts: PollOpts) -> anyhow::Result<()> {
    let config = PollerConfig {
        address: opts.address,
        pattern: opts.pattern,
        section_count: opts.sections,
        period_secs: opts.period,
        debug: opts.debug,
        error_policy: opts.on_error,
        cleanup: opts.cleanup,
    };
    let fetcher = HttpFetcher::new();

    tracing::info!(
        "polling {} every {}s ({} sections, {})",
        config.address,
        config.period_secs,
        config.section_count,
        config.error_policy
    );

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    run_poll(&config, &fetcher, shutdown).await?;

    tracing::info!("poll loop stopped");
    Ok(())
}
