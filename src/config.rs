//! Application Configuration
//!
//! Resolved once at startup from build-time environment values and handed
//! to the API client, which is shared through context. Read-only afterwards.

/// Default request timeout
pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;

/// Port the REST backend listens on
pub const BACKEND_PORT: u16 = 8000;

/// Fallback when nothing else is known
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// API root without trailing slash, e.g. `https://host/api`
    pub api_base: String,
    pub request_timeout_ms: u32,
    pub log_level: log::LevelFilter,
}

impl AppConfig {
    /// Build from `OCTOFIT_*` variables captured at compile time, falling back
    /// to the page origin.
    pub fn from_build_env() -> Self {
        let origin = page_origin();
        Self {
            api_base: resolve_api_base(
                option_env!("OCTOFIT_API_BASE"),
                option_env!("OCTOFIT_CODESPACE_NAME"),
                origin.as_ref().map(|(p, h)| (p.as_str(), h.as_str())),
            ),
            request_timeout_ms: parse_timeout(option_env!("OCTOFIT_REQUEST_TIMEOUT_MS")),
            log_level: parse_log_level(option_env!("OCTOFIT_LOG_LEVEL")),
        }
    }

    /// Absolute URL for a collection endpoint, e.g. `users` -> `{base}/users/`
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}/", self.api_base, resource.trim_matches('/'))
    }

    /// Absolute URL for one record, e.g. `{base}/users/7/`
    pub fn record_endpoint(&self, resource: &str, id: u64) -> String {
        format!("{}{}/", self.endpoint(resource), id)
    }
}

/// Pick the API base. Precedence: explicit base URL, codespace name, page
/// origin on the backend port, localhost.
pub fn resolve_api_base(
    explicit: Option<&str>,
    codespace: Option<&str>,
    origin: Option<(&str, &str)>,
) -> String {
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|v| !v.is_empty())
    }

    let base = if let Some(url) = non_empty(explicit) {
        url.to_string()
    } else if let Some(name) = non_empty(codespace) {
        format!("https://{}-{}.app.github.dev/api", name, BACKEND_PORT)
    } else if let Some((protocol, hostname)) = origin.filter(|(_, h)| !h.is_empty()) {
        format!("{}//{}:{}/api", protocol, hostname, BACKEND_PORT)
    } else {
        DEFAULT_API_BASE.to_string()
    };
    base.trim_end_matches('/').to_string()
}

fn parse_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS)
}

fn parse_log_level(raw: Option<&str>) -> log::LevelFilter {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// `(protocol, hostname)` of the page, e.g. `("https:", "example.org")`
fn page_origin() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    Some((location.protocol().ok()?, location.hostname().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_wins() {
        let base = resolve_api_base(
            Some("https://api.example.org/api/"),
            Some("octo"),
            Some(("http:", "localhost")),
        );
        assert_eq!(base, "https://api.example.org/api");
    }

    #[test]
    fn test_codespace_name() {
        let base = resolve_api_base(None, Some("fluffy-space"), Some(("http:", "localhost")));
        assert_eq!(base, "https://fluffy-space-8000.app.github.dev/api");
    }

    #[test]
    fn test_blank_values_ignored() {
        let base = resolve_api_base(Some("  "), Some(""), Some(("https:", "fit.example")));
        assert_eq!(base, "https://fit.example:8000/api");
    }

    #[test]
    fn test_fallback_default() {
        assert_eq!(resolve_api_base(None, None, None), DEFAULT_API_BASE);
        assert_eq!(resolve_api_base(None, None, Some(("http:", ""))), DEFAULT_API_BASE);
    }

    #[test]
    fn test_endpoints() {
        let config = AppConfig {
            api_base: "https://x/api".to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: log::LevelFilter::Info,
        };
        assert_eq!(config.endpoint("users"), "https://x/api/users/");
        assert_eq!(config.endpoint("/leaderboard/"), "https://x/api/leaderboard/");
        assert_eq!(config.record_endpoint("users", 1), "https://x/api/users/1/");
    }

    #[test]
    fn test_parse_overrides() {
        assert_eq!(parse_timeout(Some("2500")), 2500);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_log_level(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(parse_log_level(None), log::LevelFilter::Info);
    }
}
