//! Configuration for graphwalk.
//!
//! Values are layered, lowest priority first:
//! 1. Built-in defaults
//! 2. `graphwalk.toml` in the working directory, or an explicit file
//! 3. Environment variables prefixed `GRAPHWALK_`, with `__` separating the
//!    section from the key (`GRAPHWALK_TRAVERSAL__DEFAULT_STRATEGY=bfs`)

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{DuplicateEdgePolicy, GraphStore, Strategy, TraversalOptions};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "graphwalk.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

/// Upper bound for `output.step_delay_ms`.
pub const MAX_STEP_DELAY_MS: u64 = 10_000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphwalkConfig {
    /// Graph store settings.
    pub graph: GraphConfig,
    /// Traversal engine settings.
    pub traversal: TraversalConfig,
    /// Presentation settings for front ends.
    pub output: OutputConfig,
}

/// `[graph]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// What to do with an edge whose endpoints are already connected.
    pub duplicate_edges: DuplicateEdgePolicy,
}

/// `[traversal]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Strategy used when none is given explicitly.
    pub default_strategy: Strategy,
    /// Whether iterative DFS emits edge events.
    pub iterative_edge_events: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            default_strategy: Strategy::default(),
            iterative_edge_events: TraversalOptions::default().iterative_edge_events,
        }
    }
}

/// Event output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format for event listings.
    pub format: OutputFormat,
    /// Colorize terminal output.
    pub color: bool,
    /// Pause between events during playback, in milliseconds.
    pub step_delay_ms: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            color: true,
            step_delay_ms: 0,
        }
    }
}

impl GraphwalkConfig {
    /// Loads configuration from defaults, `graphwalk.toml` and environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration using `path` as the file layer.
    ///
    /// A missing file is not an error; the layer is simply empty.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string over the defaults.
    ///
    /// Environment variables are not consulted.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks value ranges that the type system does not enforce.
    pub fn validate(&self) -> Result<()> {
        if self.output.step_delay_ms > MAX_STEP_DELAY_MS {
            return Err(Error::Config(format!(
                "output.step_delay_ms must be at most {MAX_STEP_DELAY_MS}, got {}",
                self.output.step_delay_ms
            )));
        }
        Ok(())
    }

    /// Creates an empty store honoring `[graph]`.
    #[must_use]
    pub fn new_store(&self) -> GraphStore {
        GraphStore::with_policy(self.graph.duplicate_edges)
    }

    /// Engine options derived from `[traversal]`.
    #[must_use]
    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            iterative_edge_events: self.traversal.iterative_edge_events,
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
