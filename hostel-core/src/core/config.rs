use std::time::Duration;

/// Component configuration - every tunable of the booking page and payment dialog
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | run environment |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | daily rolling log file directory |
/// | PAYMENT_DELAY_MS | 2000 | simulated payment processing time |
/// | CONFIRMATION_PATH | /payment/confirmation | payment outcome view |
/// | HOME_PATH | / | navigation target of the not-found view |
/// | HOSTEL_DATA | (unset) | hostel JSON file for the demo binary |
///
/// # Example
///
/// ```ignore
/// PAYMENT_DELAY_MS=500 LOG_LEVEL=debug cargo run --bin hostel-demo
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Run environment: development | staging | production
    pub environment: String,
    /// Tracing max level
    pub log_level: String,
    /// Directory for rolling log files; stdout only when unset
    pub log_dir: Option<String>,
    /// Simulated payment processing time (milliseconds)
    pub payment_delay_ms: u64,
    /// Path of the payment confirmation view
    pub confirmation_path: String,
    /// Path the not-found view links back to
    pub home_path: String,
    /// Hostel JSON file for the demo binary
    pub hostel_data: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            payment_delay_ms: std::env::var("PAYMENT_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            confirmation_path: std::env::var("CONFIRMATION_PATH")
                .unwrap_or_else(|_| "/payment/confirmation".into()),
            home_path: std::env::var("HOME_PATH").unwrap_or_else(|_| "/".into()),
            hostel_data: std::env::var("HOSTEL_DATA").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Override the payment delay
    ///
    /// Mostly for tests and demos.
    pub fn with_payment_delay(mut self, delay: Duration) -> Self {
        self.payment_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            payment_delay_ms: 2000,
            confirmation_path: "/payment/confirmation".into(),
            home_path: "/".into(),
            hostel_data: None,
        }
    }
}
