use std::path::PathBuf;
use std::time::Duration;

/// Back-office configuration
///
/// # Environment variables
///
/// Every setting can be overridden from the environment (a `.env` file is
/// loaded first by the binary):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Default tracing filter |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | SEED_DEMO_DATA | true | Start every page with the demo data set |
/// | TOAST_CAPACITY | 5 | Notifications kept on screen |
/// | TICK_RATE_MS | 100 | Console input poll interval (ms) |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug SEED_DEMO_DATA=false cargo run -p backoffice
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment: development | production
    pub environment: String,
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Rolling log file directory; no file output when `None`
    pub log_dir: Option<PathBuf>,
    /// Seed pages with demo records on start
    pub seed_demo_data: bool,
    /// Notifications retained by the toast queue
    pub toast_capacity: usize,
    /// Console input poll interval (ms)
    pub tick_rate_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR")
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            seed_demo_data: lookup("SEED_DEMO_DATA")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            toast_capacity: lookup("TOAST_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            tick_rate_ms: lookup("TICK_RATE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }

    /// Defaults with demo seeding switched on or off
    ///
    /// Commonly used in tests
    pub fn with_overrides(seed_demo_data: bool) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.seed_demo_data = seed_demo_data;
        config
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
