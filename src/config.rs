//! Runtime configuration parsed from environment variables.

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_UPLOAD_DELAY_MS: u64 = 1200;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub port: u16,
    /// Load the demo dataset at startup. On by default; the dashboard
    /// renders from this data when no other source exists.
    pub seed_demo_data: bool,
    /// Customer list page size.
    pub page_size: usize,
    /// Simulated processing delay applied to uploads.
    pub upload_delay_ms: u64,
}

impl Config {
    /// Build config from environment variables, defaulting anything absent
    /// or unparseable.
    ///
    /// - `PORT`: default 3000
    /// - `SEED_DEMO_DATA`: `true`/`false`, default true
    /// - `PAGE_SIZE`: default 10
    /// - `UPLOAD_DELAY_MS`: default 1200
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            seed_demo_data: env_parse("SEED_DEMO_DATA", true),
            page_size: env_parse("PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1),
            upload_delay_ms: env_parse("UPLOAD_DELAY_MS", DEFAULT_UPLOAD_DELAY_MS),
        }
    }

    /// Config for unit tests: no seed, no upload delay.
    #[cfg(test)]
    #[must_use]
    pub fn for_tests() -> Self {
        Self { port: 0, seed_demo_data: false, page_size: DEFAULT_PAGE_SIZE, upload_delay_ms: 0 }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
