//! Guestbook configuration parsed from environment variables.

pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:4000/graphql";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GRAPHQL_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GRAPHQL_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors raised while building configuration or the clients derived from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// What the submission path does when the create-message mutation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Stop and report the failed mutation.
    #[default]
    Strict,
    /// Log the failed mutation and refresh the feed anyway.
    Permissive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestbookConfig {
    pub graphql_url: String,
    pub port: u16,
    pub timeouts: BackendTimeouts,
    pub submit_policy: SubmitPolicy,
}

impl Default for GuestbookConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            port: DEFAULT_PORT,
            timeouts: BackendTimeouts {
                request_secs: DEFAULT_GRAPHQL_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_GRAPHQL_CONNECT_TIMEOUT_SECS,
            },
            submit_policy: SubmitPolicy::Strict,
        }
    }
}

impl GuestbookConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `GRAPHQL_URL`: backend endpoint, default `http://localhost:4000/graphql`
    /// - `PORT`: listen port, default 3000
    /// - `GRAPHQL_REQUEST_TIMEOUT_SECS`: default 10, `0` means default
    /// - `GRAPHQL_CONNECT_TIMEOUT_SECS`: default 5, `0` means default
    /// - `GUESTBOOK_SUBMIT_POLICY`: `strict` (default) or `permissive`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is blank or the policy is unknown.
    pub fn from_env() -> Result<Self, ConfigError> {
        let graphql_url = parse_graphql_url(std::env::var("GRAPHQL_URL").ok().as_deref())?;
        let submit_policy = parse_submit_policy(std::env::var("GUESTBOOK_SUBMIT_POLICY").ok().as_deref())?;
        let timeouts = BackendTimeouts {
            request_secs: env_timeout_secs("GRAPHQL_REQUEST_TIMEOUT_SECS", DEFAULT_GRAPHQL_REQUEST_TIMEOUT_SECS),
            connect_secs: env_timeout_secs("GRAPHQL_CONNECT_TIMEOUT_SECS", DEFAULT_GRAPHQL_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { graphql_url, port: env_parse("PORT", DEFAULT_PORT), timeouts, submit_policy })
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// A zero timeout would fail every call, so it falls back like a bad value.
fn env_timeout_secs(key: &str, default: u64) -> u64 {
    match env_parse(key, default) {
        0 => default,
        secs => secs,
    }
}

fn parse_graphql_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_GRAPHQL_URL).trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::Parse("GRAPHQL_URL must not be empty".into()));
    }
    Ok(url.to_string())
}

fn parse_submit_policy(raw: Option<&str>) -> Result<SubmitPolicy, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("strict") => Ok(SubmitPolicy::Strict),
        Some("permissive") => Ok(SubmitPolicy::Permissive),
        Some(other) => Err(ConfigError::Parse(format!(
            "unknown GUESTBOOK_SUBMIT_POLICY '{other}' (expected 'strict' or 'permissive')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
