#![warn(missing_docs)]

//! Shared logging helpers and CLI argument definitions for window-manager.
//!
//! The binary flattens [`LogArgs`] into its command line and turns the parsed
//! flags into a tracing filter with [`compute_spec`].

use std::env;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, global = true, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, global = true, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "winplace=trace,window_manager=debug"
    #[arg(long, global = true)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Filter spec for these flags; see [`compute_spec`].
    pub fn spec(&self) -> String {
        compute_spec(
            self.trace,
            self.debug,
            self.log_level.as_deref(),
            self.log_filter.as_deref(),
        )
    }
}

/// List of crate targets that constitute "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &[
        "window_manager",
        "winplace",
        "config",
        "permissions",
        "logging",
    ]
}

/// Build a filter directive string that sets the same `level` for all of our crates.
pub fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG` env
/// - default to crate-scoped `info`
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
) -> String {
    spec_with_env(
        trace,
        debug,
        log_level,
        log_filter,
        env::var("RUST_LOG").ok(),
    )
}

/// [`compute_spec`] with the environment lookup supplied by the caller.
fn spec_with_env(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
    rust_log: Option<String>,
) -> String {
    if let Some(spec) = log_filter {
        return spec.to_string();
    }
    if trace {
        return level_spec_for("trace");
    }
    if debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = log_level {
        return level_spec_for(lvl);
    }
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => spec,
        _ => level_spec_for("info"),
    }
}

/// Create an `EnvFilter` from a spec string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        log: LogArgs,
    }

    #[test]
    fn level_spec_covers_our_crates() {
        let spec = level_spec_for("DEBUG");
        assert!(spec.contains("winplace=debug"));
        assert!(spec.contains("window_manager=debug"));
        assert_eq!(spec.split(',').count(), our_crates().len());
    }

    #[test]
    fn precedence() {
        let env = || Some("hyper=warn".to_string());
        assert_eq!(
            spec_with_env(true, false, Some("warn"), Some("x=trace"), env()),
            "x=trace"
        );
        assert_eq!(
            spec_with_env(true, false, Some("warn"), None, env()),
            level_spec_for("trace")
        );
        assert_eq!(
            spec_with_env(false, true, Some("warn"), None, env()),
            level_spec_for("debug")
        );
        assert_eq!(
            spec_with_env(false, false, Some("warn"), None, env()),
            level_spec_for("warn")
        );
        assert_eq!(spec_with_env(false, false, None, None, env()), "hyper=warn");
        assert_eq!(
            spec_with_env(false, false, None, None, None),
            level_spec_for("info")
        );
    }

    #[test]
    fn blank_rust_log_uses_default() {
        assert_eq!(
            spec_with_env(false, false, None, None, Some("  ".into())),
            level_spec_for("info")
        );
    }

    #[test]
    fn trace_conflicts_with_debug() {
        assert!(Harness::try_parse_from(["t", "--trace", "--debug"]).is_err());
        let h = Harness::try_parse_from(["t", "--log-filter", "winplace=trace"]).unwrap();
        assert_eq!(h.log.spec(), "winplace=trace");
    }
}
