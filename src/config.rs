//! Parser and validator configuration.
//!
//! [`Config`] is built in code. It carries the known host table consulted by the validator when
//! a `Host` header names a registered name, and the node budget of the grammar engine.
use std::{borrow::Cow, sync::LazyLock};

/// Default known host table.
pub const DEFAULT_HOSTS: [&str; 4] = ["site1.fr", "site2.fr", "www.toto.com", "www.fake.com"];

/// Default parse tree node budget.
pub const DEFAULT_MAX_NODES: usize = 1 << 22;

/// Parser and validator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    hosts: Vec<Cow<'static, str>>,
    default_host: usize,
    max_nodes: usize,
}

impl Config {
    /// Create configuration with the default host table and limits.
    #[inline]
    pub fn new() -> Self {
        Self {
            hosts: DEFAULT_HOSTS.iter().map(|&e| Cow::Borrowed(e)).collect(),
            default_host: 0,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Replace the known host table.
    ///
    /// The default host index is reset to the first entry.
    pub fn with_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.hosts = hosts.into_iter().map(Into::into).collect();
        self.default_host = 0;
        self
    }

    /// Set the host index used when a request does not name a known host.
    ///
    /// Out of range index is ignored.
    #[inline]
    pub fn with_default_host(mut self, index: usize) -> Self {
        if index < self.hosts.len() {
            self.default_host = index;
        }
        self
    }

    /// Set the maximum number of parse tree nodes a single message may produce.
    #[inline]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Returns the known host table.
    #[inline]
    pub fn hosts(&self) -> impl ExactSizeIterator<Item = &str> {
        self.hosts.iter().map(|e| e.as_ref())
    }

    /// Returns the host at `index` in the known host table.
    #[inline]
    pub fn host(&self, index: usize) -> Option<&str> {
        self.hosts.get(index).map(|e| e.as_ref())
    }

    /// Returns the index of the host exactly equal to `name`.
    pub fn host_index(&self, name: &[u8]) -> Option<usize> {
        self.hosts.iter().position(|e| e.as_bytes() == name)
    }

    /// Returns the default host index.
    #[inline]
    pub fn default_host(&self) -> usize {
        self.default_host
    }

    /// Returns the parse tree node budget.
    #[inline]
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the shared default configuration.
pub(crate) fn default_config() -> &'static Config {
    static DEFAULT: LazyLock<Config> = LazyLock::new(Config::new);
    &DEFAULT
}
