//! Environment configuration, read once at startup and passed down explicitly.

use sqlx::postgres::PgConnectOptions;
use std::collections::HashMap;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Full process settings. Database settings are present only when the
/// required DB_* variables are all set; without them the server still runs
/// but every data route degrades to an error body and the probe reports
/// "skipped".
#[derive(Debug, Clone)]
pub struct Settings {
    /// Listen port, from `PORT`.
    pub port: u16,
    pub db: Option<DbSettings>,
}

/// Connection parameters for the user store, from `DB_HOST`, `DB_PORT`,
/// `DB_USER`, `DB_PASSWORD`, `DB_NAME`.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Parse from an explicit map. `PORT`/`DB_PORT` that fail to parse fall
    /// back to their defaults rather than aborting startup.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let port = vars
            .get("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Settings {
            port,
            db: DbSettings::from_vars(vars),
        }
    }
}

impl DbSettings {
    /// Some only when DB_HOST, DB_USER and DB_NAME are all present.
    /// DB_PASSWORD is optional (empty by default), DB_PORT defaults to 5432.
    pub fn from_vars(vars: &HashMap<String, String>) -> Option<Self> {
        let host = vars.get("DB_HOST")?.clone();
        let user = vars.get("DB_USER")?.clone();
        let name = vars.get("DB_NAME")?.clone();
        let port = vars
            .get("DB_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DB_PORT);
        let password = vars.get("DB_PASSWORD").cloned().unwrap_or_default();
        Some(DbSettings {
            host,
            port,
            user,
            password,
            name,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_any_env() {
        let s = Settings::from_vars(&vars(&[]));
        assert_eq!(s.port, 3000);
        assert!(s.db.is_none());
    }

    #[test]
    fn db_requires_host_user_and_name() {
        let s = Settings::from_vars(&vars(&[("DB_HOST", "db"), ("DB_USER", "app")]));
        assert!(s.db.is_none());

        let s = Settings::from_vars(&vars(&[
            ("DB_HOST", "db"),
            ("DB_USER", "app"),
            ("DB_NAME", "users"),
        ]));
        let db = s.db.expect("db settings");
        assert_eq!(db.port, 5432);
        assert_eq!(db.password, "");
    }

    #[test]
    fn explicit_ports_are_parsed() {
        let s = Settings::from_vars(&vars(&[
            ("PORT", "8080"),
            ("DB_HOST", "db"),
            ("DB_PORT", "5433"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "users"),
        ]));
        assert_eq!(s.port, 8080);
        let db = s.db.unwrap();
        assert_eq!(db.port, 5433);
        assert_eq!(db.password, "secret");
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let s = Settings::from_vars(&vars(&[("PORT", "not-a-port")]));
        assert_eq!(s.port, 3000);
    }
}
