use crate::CoreError;
use crate::export::pdf::DEFAULT_ROW_CAP;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_CLOCK_INTERVAL_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the operations API. When unset the browser app
    /// talks to its own origin.
    pub api_url: Option<String>,
    pub maps_api_key: Option<String>,
    /// Rows per page in the client-side paginated lists.
    pub page_size: usize,
    pub search_debounce_ms: u32,
    pub clock_interval_ms: u32,
    /// Rows per table in PDF exports.
    pub pdf_row_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            maps_api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            pdf_row_cap: DEFAULT_ROW_CAP,
        }
    }
}

impl Config {
    /// Read from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, CoreError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, e.g. values baked in at compile time.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CoreError> {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            api_url: non_empty("API_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            maps_api_key: non_empty("GOOGLE_MAPS_API_KEY"),
            page_size: parse_positive(
                "PAGE_SIZE",
                non_empty("PAGE_SIZE"),
                defaults.page_size,
            )?,
            search_debounce_ms: parse_number(
                "SEARCH_DEBOUNCE_MS",
                non_empty("SEARCH_DEBOUNCE_MS"),
                defaults.search_debounce_ms,
            )?,
            clock_interval_ms: parse_positive(
                "CLOCK_INTERVAL_MS",
                non_empty("CLOCK_INTERVAL_MS"),
                defaults.clock_interval_ms,
            )?,
            pdf_row_cap: parse_positive(
                "PDF_ROW_CAP",
                non_empty("PDF_ROW_CAP"),
                defaults.pdf_row_cap,
            )?,
        })
    }
}

fn parse_number<N: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: N,
) -> Result<N, CoreError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| CoreError::InvalidConfig { key, value }),
    }
}

fn parse_positive<N>(
    key: &'static str,
    value: Option<String>,
    default: N,
) -> Result<N, CoreError>
where
    N: std::str::FromStr + PartialOrd + Default,
{
    let raw = value.clone();
    let parsed = parse_number(key, value, default)?;
    if parsed <= N::default() {
        return Err(CoreError::InvalidConfig {
            key,
            value: raw.unwrap_or_default(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, CoreError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.pdf_row_cap, 25);
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = config_from(&[
            ("API_URL", " https://ops.example.com/ "),
            ("GOOGLE_MAPS_API_KEY", "key-123"),
            ("PAGE_SIZE", "25"),
            ("SEARCH_DEBOUNCE_MS", "0"),
        ])
        .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://ops.example.com"));
        assert_eq!(config.maps_api_key.as_deref(), Some("key-123"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.search_debounce_ms, 0);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("API_URL", "  ")]).unwrap();
        assert_eq!(config.api_url, None);
    }

    #[test]
    fn garbage_numbers_are_errors() {
        let err = config_from(&[("PAGE_SIZE", "ten")]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfig { key: "PAGE_SIZE", .. }
        ));
    }

    #[test]
    fn zero_page_size_is_an_error() {
        assert!(config_from(&[("PAGE_SIZE", "0")]).is_err());
        assert!(config_from(&[("PDF_ROW_CAP", "0")]).is_err());
    }

    #[test]
    fn from_env_reads_process_variables() {
        // The only test in this binary that touches the process environment.
        unsafe {
            std::env::set_var("PAGE_SIZE", "15");
            std::env::set_var("PDF_ROW_CAP", "40");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("PAGE_SIZE");
            std::env::remove_var("PDF_ROW_CAP");
        }

        let config = config.unwrap();
        assert_eq!(config.page_size, 15);
        assert_eq!(config.pdf_row_cap, 40);
        assert_eq!(config.clock_interval_ms, DEFAULT_CLOCK_INTERVAL_MS);
    }
}
