//! Process-wide defaults for sass-bridge.
//!
//! Use [`ConfigBuilder`] at application startup to change the defaults that
//! per-call [`ConvertOptions`](crate::ConvertOptions) fall back to.

use std::sync::OnceLock;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Default nesting limit for lists and maps.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Runtime configuration for sass-bridge.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deepest list/map nesting a conversion accepts before failing with
    /// [`ConvertError::DepthExceeded`](crate::ConvertError::DepthExceeded).
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    max_depth: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default nesting limit.
    ///
    /// Default: [`DEFAULT_MAX_DEPTH`]
    ///
    /// # Example
    ///
    /// ```
    /// use sass_bridge::config::ConfigBuilder;
    ///
    /// ConfigBuilder::new()
    ///     .max_depth(64)
    ///     .init();
    /// ```
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    pub fn init(self) -> bool {
        let config = Config {
            max_depth: self
                .max_depth
                .unwrap_or_else(|| Config::default().max_depth),
        };
        let installed = CONFIG.set(config).is_ok();
        if !installed {
            log::debug!("sass-bridge config already initialized, ignoring");
        }
        installed
    }
}

/// Initialize sass-bridge with default configuration.
///
/// This is equivalent to `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
