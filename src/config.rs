//! Client configuration resolved at compile time.
//!
//! The client ships as WASM, so runtime environment variables do not exist;
//! overrides come from `option_env!` when the bundle is built.
//!
//! Optional:
//! - `CHRISTFUL_API_URL`: backend origin (default `DEFAULT_API_BASE_URL`)
//! - `CHRISTFUL_REVALIDATE_ON_FOCUS`: `true` to refetch live resources on focus
//! - `CHRISTFUL_RETRY_ON_ERROR`: `true` to retry failed resource fetches

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://christful-backend.onrender.com/api";
pub const DEFAULT_SPLASH_DURATION: Duration = Duration::from_millis(1500);
pub const MAX_ERROR_RETRIES: u32 = 3;

/// When the resource cache refetches without being asked to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevalidatePolicy {
    /// Refetch every live resource when the window regains focus.
    pub revalidate_on_focus: bool,
    /// Retry a failed fetch (other than 401) up to `MAX_ERROR_RETRIES` times.
    pub retry_on_error: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub revalidate: RevalidatePolicy,
    pub splash_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            revalidate: RevalidatePolicy::default(),
            splash_duration: DEFAULT_SPLASH_DURATION,
        }
    }
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CHRISTFUL_API_URL"),
            option_env!("CHRISTFUL_REVALIDATE_ON_FOCUS"),
            option_env!("CHRISTFUL_RETRY_ON_ERROR"),
        )
    }

    fn from_values(api_url: Option<&str>, revalidate_on_focus: Option<&str>, retry_on_error: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map_or_else(|| DEFAULT_API_BASE_URL.to_owned(), |url| url.trim_end_matches('/').to_owned());
        let revalidate = RevalidatePolicy {
            revalidate_on_focus: parse_flag(revalidate_on_focus),
            retry_on_error: parse_flag(retry_on_error),
        };
        Self { api_base_url, revalidate, ..Self::default() }
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}
