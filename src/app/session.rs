//! Event loops hosting the scan controller.

use anyhow::{Context, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::commands::{Command, HELP_TEXT};
use crate::app::statistics::ScanTally;
use crate::controller::ScanController;
use crate::prediction::PredictionService;
use crate::ui::ScanView;

/// Submits each URL in turn, waiting for one to finish before the next.
pub async fn run_batch<S, V>(controller: &ScanController<S, V>, urls: &[String]) -> ScanTally
where
    S: PredictionService,
    V: ScanView,
{
    let mut tally = ScanTally::default();
    for url in urls {
        let outcome = controller.on_submit(url.as_str()).await;
        tally.record(&outcome);
    }
    tally
}

/// Reads commands from `input` until it ends or `:quit`, then waits for
/// pending scans.
///
/// Input keeps being read while scans are in flight, so a new submission can
/// overtake an older one; the controller only shows the newest.
///
/// # Errors
///
/// Returns an error if reading `input` fails.
pub async fn run_interactive<S, V, R>(controller: &ScanController<S, V>, input: R) -> Result<ScanTally>
where
    S: PredictionService,
    V: ScanView,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut in_flight = FuturesUnordered::new();
    let mut tally = ScanTally::default();
    let mut reading = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if reading => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("Input closed");
                    reading = false;
                    continue;
                };
                match Command::parse(&line) {
                    Command::Submit(url) => in_flight.push(controller.on_submit(url)),
                    Command::SwitchTab(tab) => {
                        if let Err(e) = controller.switch_tab(&tab) {
                            warn!("{e}");
                        }
                    }
                    Command::Help => println!("{HELP_TEXT}"),
                    Command::Quit => reading = false,
                    Command::Unknown(cmd) => warn!("Unknown command '{cmd}', try :help"),
                }
            }
            Some(outcome) = in_flight.next(), if !in_flight.is_empty() => {
                tally.record(&outcome);
            }
            else => break,
        }
    }

    Ok(tally)
}
