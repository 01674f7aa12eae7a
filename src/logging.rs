// SPDX-License-Identifier: MPL-2.0
//! `tracing` subscriber setup for the demo binary.
//!
//! The library only emits events; installing a subscriber is left to the
//! application.

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Crate events pass at `max_level`; everything else only at WARN and above.
struct CrateFilter {
    max_level: Level,
}

impl CrateFilter {
    fn allows(&self, target: &str, level: &Level) -> bool {
        if target.starts_with(env!("CARGO_CRATE_NAME")) {
            level <= &self.max_level
        } else {
            level <= &Level::WARN
        }
    }
}

impl<S: Subscriber> Layer<S> for CrateFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _: Context<'_, S>) -> bool {
        self.allows(metadata.target(), metadata.level())
    }
}

/// Installs a compact stderr logger. `verbose` enables drag lifecycle events.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::INFO };

    let result = tracing_subscriber::registry()
        .with(CrateFilter { max_level })
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::ui");

    #[test]
    fn crate_debug_events_need_verbose() {
        let quiet = CrateFilter {
            max_level: Level::INFO,
        };
        let verbose = CrateFilter {
            max_level: Level::DEBUG,
        };

        assert!(!quiet.allows(TARGET, &Level::DEBUG));
        assert!(verbose.allows(TARGET, &Level::DEBUG));
        assert!(quiet.allows(TARGET, &Level::INFO));
    }

    #[test]
    fn dependency_events_need_warn() {
        let filter = CrateFilter {
            max_level: Level::TRACE,
        };
        assert!(!filter.allows("wgpu_core::device", &Level::INFO));
        assert!(filter.allows("wgpu_core::device", &Level::WARN));
        assert!(filter.allows("wgpu_core::device", &Level::ERROR));
    }
}
