//! Session cookie loading for private ESPN leagues.
//!
//! ESPN authenticates private league reads with two browser cookies,
//! `espn_s2` and `SWID`. They are supplied through the `ESPN_S2` and `SWID`
//! environment variables, read once at startup and validated here so a
//! malformed value fails with a configuration error instead of an opaque
//! authentication failure from ESPN.
//!
//! Cookie values never appear in `Debug` output or error messages; only the
//! variable name is reported.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::HeaderValue;
use tracing::{debug, warn};

use crate::error::{EspnError, Result};

#[cfg(test)]
mod tests;

/// Environment variable holding the `espn_s2` cookie.
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";

/// Environment variable holding the `SWID` cookie.
pub const SWID_ENV_VAR: &str = "SWID";

static SWID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\}$")
        .expect("SWID pattern is a valid regex")
});

/// Read access to environment-style key/value pairs.
///
/// The real process environment is [`ProcessEnv`]; tests pass a `HashMap`.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

/// Look up a variable, treating empty values as unset.
fn non_empty_var(env: &impl EnvSource, name: &str) -> Option<String> {
    env.var(name).filter(|v| !v.trim().is_empty())
}

/// The `espn_s2` session cookie. Opaque, but it must fit in a `Cookie`
/// header as a single cookie value: no control characters and no `;`.
#[derive(Clone, PartialEq, Eq)]
pub struct EspnS2(String);

impl EspnS2 {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EspnS2 {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(EspnError::MissingCredential {
                env_var: ESPN_S2_ENV_VAR.to_string(),
            });
        }
        let reason = if s.chars().any(|c| c.is_control() && c != '\t') {
            Some("must not contain control characters such as line breaks")
        } else if s.contains(';') {
            Some("must not contain ';' (copy only the espn_s2 cookie value)")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(EspnError::MalformedCredential {
                env_var: ESPN_S2_ENV_VAR.to_string(),
                reason: reason.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Debug for EspnS2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EspnS2([REDACTED])")
    }
}

/// The `SWID` cookie: a GUID in braces, e.g. `{12345678-90AB-CDEF-1234-567890ABCDEF}`.
///
/// The value is kept exactly as supplied, including case.
#[derive(Clone, PartialEq, Eq)]
pub struct Swid(String);

impl Swid {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `s` is a brace-enclosed 8-4-4-4-12 hex GUID.
    pub fn is_well_formed(s: &str) -> bool {
        SWID_PATTERN.is_match(s)
    }
}

/// Explain which part of the SWID shape `s` breaks.
fn swid_violation(s: &str) -> &'static str {
    if !(s.starts_with('{') && s.ends_with('}')) || s.len() < 2 {
        return "must be enclosed in braces, e.g. {XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}";
    }
    let inner = &s[1..s.len() - 1];
    let groups: Vec<&str> = inner.split('-').collect();
    let lengths_ok = groups.len() == 5
        && groups
            .iter()
            .zip([8, 4, 4, 4, 12])
            .all(|(g, len)| g.len() == len);
    if !lengths_ok {
        return "must contain hyphen-separated groups of 8-4-4-4-12 characters";
    }
    "must contain only hexadecimal digits between the hyphens"
}

impl FromStr for Swid {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(EspnError::MissingCredential {
                env_var: SWID_ENV_VAR.to_string(),
            });
        }
        if !Self::is_well_formed(s) {
            return Err(EspnError::MalformedCredential {
                env_var: SWID_ENV_VAR.to_string(),
                reason: swid_violation(s).to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Debug for Swid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Swid([REDACTED])")
    }
}

/// Whether the target league needs an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeagueAccess {
    #[default]
    Public,
    Private,
}

/// A validated `espn_s2` + `SWID` pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub espn_s2: EspnS2,
    pub swid: Swid,
}

impl Credentials {
    pub fn new(espn_s2: EspnS2, swid: Swid) -> Self {
        Self { espn_s2, swid }
    }

    /// Read both cookies, failing if either is missing or malformed.
    pub fn from_env(env: &impl EnvSource) -> Result<Self> {
        let espn_s2 =
            non_empty_var(env, ESPN_S2_ENV_VAR).ok_or_else(|| EspnError::MissingCredential {
                env_var: ESPN_S2_ENV_VAR.to_string(),
            })?;
        let swid = non_empty_var(env, SWID_ENV_VAR).ok_or_else(|| EspnError::MissingCredential {
            env_var: SWID_ENV_VAR.to_string(),
        })?;

        Ok(Self {
            espn_s2: espn_s2.parse()?,
            swid: swid.parse()?,
        })
    }

    /// `Cookie` header value carrying both cookies, marked sensitive so
    /// reqwest and its logging never print it.
    pub fn cookie_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!(
            "SWID={}; espn_s2={}",
            self.swid.as_str(),
            self.espn_s2.as_str()
        ))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("espn_s2", &self.espn_s2)
            .field("swid", &self.swid)
            .finish()
    }
}

/// Load credentials for a league with the given access level.
///
/// Private leagues require both variables. Public leagues use them when both
/// are present and otherwise proceed unauthenticated.
pub fn load_credentials(env: &impl EnvSource, access: LeagueAccess) -> Result<Option<Credentials>> {
    match access {
        LeagueAccess::Private => {
            let creds = Credentials::from_env(env)?;
            debug!("loaded session cookies for private league");
            Ok(Some(creds))
        }
        LeagueAccess::Public => {
            let status = CookieStatus::from_env(env);
            match (status.espn_s2_set, status.swid_set) {
                (true, true) => Credentials::from_env(env).map(Some),
                (false, false) => Ok(None),
                (s2_set, _) => {
                    let missing = if s2_set { SWID_ENV_VAR } else { ESPN_S2_ENV_VAR };
                    warn!(
                        missing,
                        "only one session cookie is set; continuing without authentication"
                    );
                    Ok(None)
                }
            }
        }
    }
}

/// Which cookie variables are set, without their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieStatus {
    pub espn_s2_set: bool,
    pub swid_set: bool,
}

impl CookieStatus {
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self {
            espn_s2_set: non_empty_var(env, ESPN_S2_ENV_VAR).is_some(),
            swid_set: non_empty_var(env, SWID_ENV_VAR).is_some(),
        }
    }
}

impl fmt::Display for CookieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |set: bool| if set { "yes" } else { "no" };
        write!(
            f,
            "{ESPN_S2_ENV_VAR} set: {} | {SWID_ENV_VAR} set: {}",
            yes_no(self.espn_s2_set),
            yes_no(self.swid_set)
        )
    }
}
