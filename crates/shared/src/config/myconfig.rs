use anyhow::{Context, Result, anyhow};
use std::time::Duration;

/// Timings and failure injection for the mocked backend.
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub latency: Duration,
    pub identity_resolve: Duration,
    pub failure_rate: f64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1000),
            identity_resolve: Duration::from_millis(1000),
            failure_rate: 0.0,
        }
    }
}

impl MockConfig {
    /// No delays and no injected failures.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            identity_resolve: Duration::ZERO,
            failure_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub dev_mode: bool,
    pub enable_file_log: bool,
    pub signup_completes_onboarding: bool,
    pub mock: MockConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let jwt_secret =
            lookup("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let dev_mode = parse_flag(&lookup, "DEV_MODE", false)?;
        let enable_file_log = parse_flag(&lookup, "ENABLE_FILE_LOG", false)?;
        let signup_completes_onboarding =
            parse_flag(&lookup, "SIGNUP_COMPLETES_ONBOARDING", true)?;

        let defaults = MockConfig::default();

        let latency = parse_millis(&lookup, "MOCK_LATENCY_MS")?.unwrap_or(defaults.latency);
        let identity_resolve =
            parse_millis(&lookup, "IDENTITY_RESOLVE_MS")?.unwrap_or(defaults.identity_resolve);

        let failure_rate = match lookup("MOCK_FAILURE_RATE") {
            Some(raw) => raw
                .parse::<f64>()
                .context("MOCK_FAILURE_RATE must be a number")?,
            None => defaults.failure_rate,
        };

        if !(0.0..=1.0).contains(&failure_rate) {
            return Err(anyhow!(
                "MOCK_FAILURE_RATE must be between 0 and 1, got '{failure_rate}'"
            ));
        }

        Ok(Self {
            port,
            jwt_secret,
            dev_mode,
            enable_file_log,
            signup_completes_onboarding,
            mock: MockConfig {
                latency,
                identity_resolve,
                failure_rate,
            },
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref() {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("{key} must be a whole number of milliseconds"))
        })
        .transpose()
}
