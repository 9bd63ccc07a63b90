//! Command-line interface definitions for window-manager.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use logging::LogArgs;
use winplace::{MutationOrder, OptionsOverride, PartialSuccessPolicy, Percent};

/// Command-line interface for the `window-manager` binary.
#[derive(Parser, Debug)]
#[command(
    name = "window-manager",
    about = "Resize a window to a fraction of its display and anchor it",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resize a window to a percentage of its display's usable area and anchor it.
    #[command(after_help = "Example: window-manager resize 12345 60 90 top")]
    Resize(ResizeArgs),
}

/// Mutation order flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Resize, then move.
    SizeFirst,
    /// Move, then resize.
    PositionFirst,
}

impl From<OrderArg> for MutationOrder {
    fn from(o: OrderArg) -> Self {
        match o {
            OrderArg::SizeFirst => Self::SizeFirst,
            OrderArg::PositionFirst => Self::PositionFirst,
        }
    }
}

/// Partial-success policy flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Succeed if either size or position took effect.
    AnyOf,
    /// Succeed only if both took effect.
    AllOf,
}

impl From<PolicyArg> for PartialSuccessPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::AnyOf => Self::AnyOf,
            PolicyArg::AllOf => Self::AllOf,
        }
    }
}

/// Arguments for the `resize` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ResizeArgs {
    /// CoreGraphics window number of the target window.
    #[arg(value_name = "WINDOW_ID")]
    pub window_id: u32,

    /// Width as a percentage (1-100) of the usable display width.
    #[arg(value_name = "WIDTH_PERCENT", value_parser = parse_percent)]
    pub width: Percent,

    /// Height as a percentage (1-100) of the usable display height.
    #[arg(value_name = "HEIGHT_PERCENT", value_parser = parse_percent)]
    pub height: Percent,

    /// Anchor: center, top, bottom, left or right. Anything else centers.
    #[arg(value_name = "ANCHOR", default_value = "center")]
    pub anchor: String,

    /// Path to a RON config file (default: ~/.config/window-manager/config.ron).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Bounds tolerance used to match the window to its Accessibility element.
    #[arg(long, value_name = "F", value_parser = parse_tolerance)]
    pub tolerance: Option<f64>,

    /// Edge margin for top/bottom/left/right anchors.
    #[arg(long, value_name = "F", value_parser = parse_margin)]
    pub margin: Option<f64>,

    /// Apply size or position first.
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Whether a half-applied change counts as success.
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
}

impl ResizeArgs {
    /// Flags that override the config file for every application.
    pub fn overrides(&self) -> OptionsOverride {
        OptionsOverride {
            tolerance: self.tolerance,
            margin: self.margin,
            order: self.order.map(Into::into),
            policy: self.policy.map(Into::into),
        }
    }
}

/// Parse an integer percentage in `1..=100`.
fn parse_percent(s: &str) -> Result<Percent, String> {
    let v: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not an integer", s))?;
    Percent::new(v).map_err(|e| e.to_string())
}

fn parse_tolerance(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err("tolerance must be a finite number > 0".into())
    }
}

fn parse_margin(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err("margin must be a finite number >= 0".into())
    }
}
