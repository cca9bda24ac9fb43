//! Poll loop: fetch → extract → emit, repeated until shutdown.

use std::future::Future;

use chrono::Local;
use thiserror::Error;
use tokio::time::Duration;

use sitelog_core::{ErrorPolicy, ExtractError, PollerConfig, extract_sections, format_log_line};
use sitelog_http::{FetchError, PageFetcher, split_address};

/// One cycle's failure: the fetch or the extraction.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Run one cycle against an already-split address and return the finished
/// log line. Emission stays with the caller.
async fn poll_cycle<F: PageFetcher>(
    config: &PollerConfig,
    fetcher: &F,
    host: &str,
    path: &str,
) -> Result<String, CycleError> {
    let body = fetcher.fetch_page(host, path).await?;
    if config.debug {
        tracing::debug!("fetched {} bytes from {host}{path}", body.len());
        tracing::debug!("body: {body}");
    }
    let record = extract_sections(&config.pattern, &body, config.section_count)?;
    Ok(format_log_line(Local::now(), &record, config.cleanup))
}

/// Poll until `shutdown` resolves.
///
/// The loop has two states, polling and stopped. `shutdown` resolving is
/// the only normal exit and is honored immediately, in-flight sleep or
/// fetch included. A failed cycle follows the configured policy:
/// fail-fast propagates the error out of the loop, continue logs it and
/// waits for the next cycle.
pub async fn run_poll<F, S>(
    config: &PollerConfig,
    fetcher: &F,
    shutdown: S,
) -> Result<(), CycleError>
where
    F: PageFetcher,
    S: Future<Output = ()>,
{
    let (host, path) = split_address(&config.address)?;
    let period = Duration::from_secs(config.period_secs);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            () = &mut shutdown => {
                tracing::info!("shutting down");
                return Ok(());
            }
            result = poll_cycle(config, fetcher, host, path) => {
                match result {
                    Ok(line) => println!("{line}"),
                    Err(e) => match config.error_policy {
                        ErrorPolicy::FailFast => return Err(e),
                        ErrorPolicy::Continue => tracing::warn!("cycle failed: {e}"),
                    },
                }
            }
        }

        tokio::select! {
            biased;
            () = &mut shutdown => {
                tracing::info!("shutting down");
                return Ok(());
            }
            () = tokio::time::sleep(period) => {}
        }
    }
}
