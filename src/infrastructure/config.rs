use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub query_service: QueryServiceSettings,
    pub prediction_service: PredictionServiceSettings,
    pub polling: PollingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryServiceSettings {
    pub base_url: String,
    pub history_points: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionServiceSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    pub interval_seconds: u64,
}

fn builder_with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("query_service.base_url", "http://127.0.0.1:8000")?
        .set_default("query_service.history_points", 12)?
        .set_default("prediction_service.base_url", "http://127.0.0.1:8001")?
        .set_default("polling.interval_seconds", 10)?)
}

/// Defaults, then `config/dashboard.toml` if present, then `DASHBOARD__*` variables
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    let config: DashboardConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

impl DashboardConfig {
    /// Rejects values the poller cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.polling.interval_seconds == 0 {
            anyhow::bail!("polling.interval_seconds must be at least 1");
        }
        if self.query_service.history_points == 0 {
            anyhow::bail!("query_service.history_points must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: DashboardConfig = builder_with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.query_service.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.query_service.history_points, 12);
        assert_eq!(config.prediction_service.base_url, "http://127.0.0.1:8001");
        assert_eq!(config.polling.interval_seconds, 10);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [query_service]
            base_url = "http://sensors.local:9000"
            history_points = 24

            [polling]
            interval_seconds = 30
        "#;

        let config: DashboardConfig = builder_with_defaults()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.query_service.base_url, "http://sensors.local:9000");
        assert_eq!(config.query_service.history_points, 24);
        assert_eq!(config.polling.interval_seconds, 30);
        assert_eq!(config.prediction_service.base_url, "http://127.0.0.1:8001");
    }

    fn from_toml(toml: &str) -> DashboardConfig {
        builder_with_defaults()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = from_toml("[polling]\ninterval_seconds = 0\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("interval_seconds"));
    }

    #[test]
    fn test_zero_history_points_is_rejected() {
        let config = from_toml("[query_service]\nhistory_points = 0\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("history_points"));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(from_toml("").validate().is_ok());
    }
}
