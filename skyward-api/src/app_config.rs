use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// How many flights a route search generates.
    pub flights_per_route: usize,
    /// How many days ahead generated departures may fall.
    pub horizon_days: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            flights_per_route: 3,
            horizon_days: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. SKYWARD_SERVER__PORT=9090
            .add_source(config::Environment::with_prefix("SKYWARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_section_defaults() {
        let raw = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 8080\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: Config = raw.try_deserialize().unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.search.flights_per_route, 3);
        assert_eq!(cfg.search.horizon_days, 30);
    }

    #[test]
    fn test_search_section_overrides() {
        let raw = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 9090\n\n[search]\nflights_per_route = 5\nhorizon_days = 14\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: Config = raw.try_deserialize().unwrap();

        assert_eq!(cfg.search.flights_per_route, 5);
        assert_eq!(cfg.search.horizon_days, 14);
    }
}
