//! Serde mirror of the on-disk RON schema.
//!
//! Every field is optional; omitted values fall back to the built-in
//! [`PlacementOptions`] defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use winplace::{MutationOrder, OptionsOverride, PartialSuccessPolicy, PlacementOptions};

/// Mutation order as spelled in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RawOrder {
    /// Resize, then move.
    SizeFirst,
    /// Move, then resize.
    PositionFirst,
}

impl From<RawOrder> for MutationOrder {
    fn from(o: RawOrder) -> Self {
        match o {
            RawOrder::SizeFirst => Self::SizeFirst,
            RawOrder::PositionFirst => Self::PositionFirst,
        }
    }
}

/// Partial-success policy as spelled in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RawPolicy {
    /// Either half succeeding is success.
    AnyOf,
    /// Both halves must succeed.
    AllOf,
}

impl From<RawPolicy> for PartialSuccessPolicy {
    fn from(p: RawPolicy) -> Self {
        match p {
            RawPolicy::AnyOf => Self::AnyOf,
            RawPolicy::AllOf => Self::AllOf,
        }
    }
}

/// Optional placement tunables, shared by the top level and per-app entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawOptions {
    #[serde(default)]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
    #[serde(default)]
    pub order: Option<RawOrder>,
    #[serde(default)]
    pub policy: Option<RawPolicy>,
}

impl RawOptions {
    pub fn to_override(&self) -> OptionsOverride {
        OptionsOverride {
            tolerance: self.tolerance,
            margin: self.margin,
            order: self.order.map(Into::into),
            policy: self.policy.map(Into::into),
        }
    }

    pub fn to_options(&self) -> PlacementOptions {
        self.to_override().apply(PlacementOptions::default())
    }
}

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
    #[serde(default)]
    pub order: Option<RawOrder>,
    #[serde(default)]
    pub policy: Option<RawPolicy>,
    /// Quirks keyed by the application name the window list reports.
    #[serde(default)]
    pub apps: BTreeMap<String, RawOptions>,
}

impl RawConfig {
    /// Top-level fields as a [`RawOptions`].
    pub fn base(&self) -> RawOptions {
        RawOptions {
            tolerance: self.tolerance,
            margin: self.margin,
            order: self.order,
            policy: self.policy,
        }
    }
}
