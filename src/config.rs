// src/config.rs
use crate::application::queries::articles::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::presentation::admin::dashboard::{DEFAULT_DASHBOARD_TITLE, DashboardLanding};
use crate::presentation::http::{openapi::OPENAPI_JSON_PATH, routes::HEALTH_PATH};
use chrono::format::{Item, StrftimeItems};
use std::env;
use thiserror::Error;

pub const DEFAULT_DATETIME_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    admin: AdminSettings,
}

/// Options of the admin panel itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSettings {
    pub route_path: String,
    pub title: String,
    pub page_size: u32,
    pub datetime_format: String,
    pub landing: DashboardLanding,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            route_path: default_admin_route_path(),
            title: DEFAULT_DASHBOARD_TITLE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            landing: DashboardLanding::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://admin_panel.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_admin_route_path() -> String {
    "/admin".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the admin options.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|p| p.trim().to_string()).filter(|p| !p.is_empty()).collect())
            .unwrap_or_else(default_allowed_origins);

        let admin = AdminSettings {
            route_path: parse_route_path(lookup("ADMIN_ROUTE_PATH"))?,
            title: lookup("ADMIN_TITLE")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DASHBOARD_TITLE.to_string()),
            page_size: parse_page_size(lookup("ADMIN_PAGE_SIZE"))?,
            datetime_format: parse_datetime_format(lookup("ADMIN_DATETIME_FORMAT"))?,
            landing: match lookup("ADMIN_LANDING") {
                Some(raw) => raw.parse().map_err(ConfigError::Invalid)?,
                None => DashboardLanding::default(),
            },
        };

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            admin,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn admin(&self) -> &AdminSettings {
        &self.admin
    }
}

fn parse_route_path(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default_admin_route_path());
    };
    let path = raw.trim();
    if !path.starts_with('/') || path.len() < 2 {
        return Err(ConfigError::Invalid(
            "ADMIN_ROUTE_PATH must start with '/' and name a segment".into(),
        ));
    }
    if path.ends_with('/') {
        return Err(ConfigError::Invalid(
            "ADMIN_ROUTE_PATH must not end with '/'".into(),
        ));
    }
    // Route patterns would turn the prefix into a capture or wildcard.
    if path.contains(['{', '}', '*', ':']) {
        return Err(ConfigError::Invalid(
            "ADMIN_ROUTE_PATH must not contain route pattern characters".into(),
        ));
    }
    if [HEALTH_PATH, OPENAPI_JSON_PATH].contains(&path) {
        return Err(ConfigError::Invalid(format!(
            "ADMIN_ROUTE_PATH cannot be the reserved path {path}"
        )));
    }
    Ok(path.to_string())
}

fn parse_page_size(raw: Option<String>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PAGE_SIZE);
    };
    match raw.trim().parse::<u32>() {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(size),
        _ => Err(ConfigError::Invalid(format!(
            "ADMIN_PAGE_SIZE must be an integer between 1 and {MAX_PAGE_SIZE}"
        ))),
    }
}

fn parse_datetime_format(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw.filter(|f| !f.trim().is_empty()) else {
        return Ok(DEFAULT_DATETIME_FORMAT.to_string());
    };
    // chrono panics while rendering an invalid format string.
    if StrftimeItems::new(&raw).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Invalid(format!(
            "ADMIN_DATETIME_FORMAT is not a valid strftime pattern: {raw}"
        )));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_variables() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.database_url(), "sqlite://admin_panel.db?mode=rwc");
        assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.admin(), &AdminSettings::default());
        assert_eq!(cfg.admin().route_path, "/admin");
        assert_eq!(cfg.admin().landing, DashboardLanding::RedirectToArticles);
    }

    #[test]
    fn admin_options_are_read() {
        let cfg = config(&[
            ("ADMIN_ROUTE_PATH", "/backoffice"),
            ("ADMIN_TITLE", "Back Office"),
            ("ADMIN_PAGE_SIZE", "50"),
            ("ADMIN_LANDING", "dashboard"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert_eq!(cfg.admin().route_path, "/backoffice");
        assert_eq!(cfg.admin().title, "Back Office");
        assert_eq!(cfg.admin().page_size, 50);
        assert_eq!(cfg.admin().landing, DashboardLanding::Dashboard);
        assert_eq!(cfg.allowed_origins(), ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn route_path_must_be_absolute_without_trailing_slash() {
        assert!(matches!(
            config(&[("ADMIN_ROUTE_PATH", "admin")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("ADMIN_ROUTE_PATH", "/admin/")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("ADMIN_ROUTE_PATH", "/")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn route_path_cannot_shadow_other_routes() {
        for path in ["/health", "/openapi.json", "/{x}", "/admin/{id}", "/admin/*rest", "/:id"] {
            assert!(
                matches!(config(&[("ADMIN_ROUTE_PATH", path)]), Err(ConfigError::Invalid(_))),
                "{path} was accepted"
            );
        }
        assert!(config(&[("ADMIN_ROUTE_PATH", "/health-admin")]).is_ok());
    }

    #[test]
    fn page_size_is_bounded() {
        assert!(config(&[("ADMIN_PAGE_SIZE", "0")]).is_err());
        assert!(config(&[("ADMIN_PAGE_SIZE", "101")]).is_err());
        assert!(config(&[("ADMIN_PAGE_SIZE", "ten")]).is_err());
    }

    #[test]
    fn unknown_landing_is_rejected() {
        assert!(matches!(
            config(&[("ADMIN_LANDING", "somewhere")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn datetime_format_is_validated() {
        let cfg = config(&[("ADMIN_DATETIME_FORMAT", "%Y-%m-%d")]).unwrap();
        assert_eq!(cfg.admin().datetime_format, "%Y-%m-%d");
        assert!(matches!(
            config(&[("ADMIN_DATETIME_FORMAT", "%Q")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn blank_database_url_is_missing() {
        assert!(matches!(
            config(&[("DATABASE_URL", " ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }
}
