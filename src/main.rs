//! Demo binary for the marsgrid library.
//!
//! Fetches Mars real-estate listings and renders them as a text grid:
//!
//! ```text
//! marsgrid [all|rent|buy]
//! ```
//!
//! Configuration is read from the TOML file named by the `MARSGRID_CONFIG`
//! environment variable when set, otherwise defaults are used. The optional
//! positional argument overrides the configured filter mode. Exits nonzero
//! when the fetch fails or does not complete.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use marsgrid::domain::{FetchStatus, FilterMode, Listing};
use marsgrid::grid::{GridAdapter, TextRowBinder};
use marsgrid::observability::init_tracing;
use marsgrid::{Config, MarsApiClient, OverviewController};

fn main() -> marsgrid::Result<()> {
    let config = match std::env::var("MARSGRID_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::default(),
    };
    init_tracing(&config);

    let filter = std::env::args()
        .nth(1)
        .and_then(|arg| FilterMode::parse(&arg))
        .unwrap_or(config.default_filter);

    let source = Arc::new(MarsApiClient::new(config.base_url.clone())?);
    let controller = Arc::new(OverviewController::new(source, filter));

    // Wait for the initial fetch to reach a terminal status.
    let (tx, rx) = mpsc::channel();
    let subscription = controller.status().subscribe(move |status| {
        let _ = tx.send(*status);
    });
    let outcome = loop {
        match rx.recv_timeout(Duration::from_secs(30)) {
            Ok(FetchStatus::Loading) => continue,
            Ok(status) => break Some(status),
            Err(_) => break None,
        }
    };
    controller.status().unsubscribe(subscription);

    match outcome {
        None => {
            eprintln!("marsgrid: fetch did not complete within 30s, giving up");
            controller.dispose();
            std::process::exit(1);
        }
        Some(FetchStatus::Error) => {
            eprintln!("marsgrid: fetch failed; check the server URL or your connection");
            controller.dispose();
            std::process::exit(1);
        }
        Some(_) => {}
    }

    let select = Arc::clone(&controller);
    let mut grid = GridAdapter::new(TextRowBinder::new(), move |listing: &Listing| {
        select.on_select(listing.clone());
    });
    grid.set_items(controller.listings().get());

    println!("{:<8} {:<4} {:>14}  IMAGE", "ID", "KIND", "PRICE");
    for row in grid.rows() {
        println!("{}", row.line);
    }
    println!("{} listings ({})", grid.len(), filter.query_value());

    // Tap the first row to demonstrate the selection round trip.
    if !grid.is_empty() {
        grid.tap(0);
        if let Some(selected) = controller.selected().get() {
            println!(
                "tapped: {} -> would navigate to detail ({})",
                selected.id,
                selected.display_price()
            );
            controller.on_navigation_consumed();
        }
    }

    controller.dispose();
    Ok(())
}
