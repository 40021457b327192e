//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `guestlist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use guestlist_core::logging::{init_logging_with, LoggingConfig};
use guestlist_core::GuestStore;
use std::process::ExitCode;

fn main() -> ExitCode {
    let logging = LoggingConfig::from_env()
        .and_then(|config| config.map(init_logging_with).transpose());
    if let Err(err) = logging {
        eprintln!("guestlist logging disabled: {err}");
    }

    let store = GuestStore::with_demo_guests();
    let summary = store.summary();

    println!("guestlist_core ping={}", guestlist_core::ping());
    println!("guestlist_core version={}", guestlist_core::core_version());
    println!(
        "demo_seed total={} confirmed={} unconfirmed={} rsvp={} not_rsvp={}",
        summary.total,
        summary.confirmed_count,
        summary.unconfirmed_count,
        summary.rsvp_count,
        summary.not_rsvp_count
    );
    ExitCode::SUCCESS
}
