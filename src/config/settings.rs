// ui5-nwabap-deployer/src/config/settings.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use super::{DeploymentConfig, RawAuth, RawConnection, RawUi5Target, non_blank};

pub const ENV_SERVER: &str = "UI5_TASK_NWABAP_DEPLOYER__SERVER";
pub const ENV_USER: &str = "UI5_TASK_NWABAP_DEPLOYER__USER";
pub const ENV_PASSWORD: &str = "UI5_TASK_NWABAP_DEPLOYER__PASSWORD";
pub const ENV_TRANSPORTNO: &str = "UI5_TASK_NWABAP_DEPLOYER__TRANSPORTNO";

const DEFAULT_RESOURCE_PATH: &str = "dist";
const DEFAULT_RESOURCE_PATTERN: &str = "**/*.*";

// Structs for deserializing the task settings file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonConnection {
    pub server: Option<String>,
    pub client: Option<String>,
    #[serde(rename = "useStrictSSL")]
    pub use_strict_ssl: Option<bool>,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonAuthentication {
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonUi5 {
    pub language: Option<String>,
    pub transport_no: Option<String>,
    pub package: Option<String>,
    pub bsp_container: Option<String>,
    pub bsp_container_text: Option<String>,
    pub create_transport: Option<bool>,
    pub transport_text: Option<String>,
    pub transport_use_user_match: Option<bool>,
    pub transport_use_locked: Option<bool>,
    pub calculate_application_index: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonResources {
    pub path: Option<PathBuf>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskSettings {
    pub connection: Option<JsonConnection>,
    pub authentication: Option<JsonAuthentication>,
    pub ui5: Option<JsonUi5>,
    pub resources: Option<JsonResources>,
}

/// Where the deployable files are picked up from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSelection {
    pub path: PathBuf,
    pub pattern: String,
}

impl TaskSettings {
    pub fn load_from_json(settings_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(settings_path).with_context(|| {
            format!("Failed to read settings file at {}", settings_path.display())
        })?;
        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse JSON from settings file at {}",
                settings_path.display()
            )
        })
    }

    /// Builds the core's deployment options, filling gaps from the environment.
    ///
    /// Values in the settings file win over environment values. The lookup is
    /// injected so callers decide where the environment comes from.
    pub fn into_deployment<F>(self, env: F) -> Result<(DeploymentConfig, ResourceSelection)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_value = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let env_server = env_value(ENV_SERVER);
        if self.connection.is_none() && env_server.is_none() {
            anyhow::bail!("Please provide a connection configuration.");
        }

        let env_user = env_value(ENV_USER);
        let env_password = env_value(ENV_PASSWORD);
        if self.authentication.is_none() && env_user.is_none() && env_password.is_none() {
            anyhow::bail!(
                "Please provide an authentication configuration or set authentication environment variables."
            );
        }

        let ui5 = self.ui5.context("Please provide a UI5 configuration.")?;

        let connection = self.connection.unwrap_or_default();
        let server = non_blank(&connection.server)
            .map(str::to_string)
            .or(env_server);
        if let Some(server) = &server {
            Url::parse(server)
                .with_context(|| format!("Invalid server URL in connection configuration: {}", server))?;
        }

        let authentication = self.authentication.unwrap_or_default();
        let user = non_blank(&authentication.user).map(str::to_string).or(env_user);
        let pwd = non_blank(&authentication.password)
            .map(str::to_string)
            .or(env_password);

        let transportno = non_blank(&ui5.transport_no)
            .map(str::to_string)
            .or_else(|| env_value(ENV_TRANSPORTNO));

        let deployment = DeploymentConfig {
            conn: RawConnection {
                server,
                client: connection.client,
                use_strict_ssl: connection.use_strict_ssl,
                proxy: connection.proxy,
            },
            auth: Some(RawAuth { user, pwd }),
            ui5: Some(RawUi5Target {
                language: ui5.language,
                transportno,
                package: ui5.package,
                bspcontainer: ui5.bsp_container,
                bspcontainer_text: ui5.bsp_container_text,
                create_transport: Some(ui5.create_transport.unwrap_or(false)),
                transport_text: ui5.transport_text,
                transport_use_user_match: Some(ui5.transport_use_user_match.unwrap_or(false)),
                transport_use_locked: Some(ui5.transport_use_locked.unwrap_or(false)),
                calc_appindex: Some(ui5.calculate_application_index.unwrap_or(false)),
            }),
        };

        let resources = self.resources.unwrap_or_default();
        let selection = ResourceSelection {
            path: resources
                .path
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_PATH)),
            pattern: non_blank(&resources.pattern)
                .unwrap_or(DEFAULT_RESOURCE_PATTERN)
                .to_string(),
        };

        Ok((deployment, selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn settings(value: serde_json::Value) -> anyhow::Result<TaskSettings> {
        Ok(serde_json::from_value(value)?)
    }

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn full_settings() -> serde_json::Value {
        json!({
            "connection": { "server": "https://abap.example.com:44300", "client": "100", "useStrictSSL": false },
            "authentication": { "user": "DEVELOPER", "password": "secret" },
            "ui5": {
                "language": "de",
                "package": "ZPKG",
                "bspContainer": "/NS/ZAPP",
                "bspContainerText": "My app",
                "transportNo": "A4HK900123",
                "transportUseLocked": true
            },
            "resources": { "path": "build", "pattern": "**/*.js" }
        })
    }

    #[test]
    fn test_settings_map_onto_deployment_config() -> anyhow::Result<()> {
        let (config, selection) = settings(full_settings())?.into_deployment(env_of(&[]))?;

        assert_eq!(config.conn.server.as_deref(), Some("https://abap.example.com:44300"));
        assert_eq!(config.conn.client.as_deref(), Some("100"));
        assert_eq!(config.conn.use_strict_ssl, Some(false));
        let auth = config.auth.unwrap();
        assert_eq!(auth.user.as_deref(), Some("DEVELOPER"));
        assert_eq!(auth.pwd.as_deref(), Some("secret"));
        let ui5 = config.ui5.unwrap();
        assert_eq!(ui5.bspcontainer.as_deref(), Some("/NS/ZAPP"));
        assert_eq!(ui5.transportno.as_deref(), Some("A4HK900123"));
        assert_eq!(ui5.transport_use_locked, Some(true));
        assert_eq!(ui5.create_transport, Some(false));
        assert_eq!(selection.path, PathBuf::from("build"));
        assert_eq!(selection.pattern, "**/*.js");
        Ok(())
    }

    #[test]
    fn test_settings_win_over_environment() -> anyhow::Result<()> {
        let env = env_of(&[
            (ENV_SERVER, "http://other:8000"),
            (ENV_USER, "ENVUSER"),
            (ENV_TRANSPORTNO, "A4HK900999"),
        ]);
        let (config, _) = settings(full_settings())?.into_deployment(env)?;

        assert_eq!(config.conn.server.as_deref(), Some("https://abap.example.com:44300"));
        assert_eq!(config.auth.unwrap().user.as_deref(), Some("DEVELOPER"));
        assert_eq!(config.ui5.unwrap().transportno.as_deref(), Some("A4HK900123"));
        Ok(())
    }

    #[test]
    fn test_environment_fills_missing_sections() -> anyhow::Result<()> {
        let env = env_of(&[
            (ENV_SERVER, "http://abap:8000"),
            (ENV_USER, "ENVUSER"),
            (ENV_PASSWORD, "envpass"),
            (ENV_TRANSPORTNO, "A4HK900999"),
        ]);
        let value = json!({
            "ui5": { "package": "ZPKG", "bspContainer": "ZAPP", "bspContainerText": "App" }
        });
        let (config, selection) = settings(value)?.into_deployment(env)?;

        assert_eq!(config.conn.server.as_deref(), Some("http://abap:8000"));
        let auth = config.auth.unwrap();
        assert_eq!(auth.user.as_deref(), Some("ENVUSER"));
        assert_eq!(auth.pwd.as_deref(), Some("envpass"));
        assert_eq!(config.ui5.unwrap().transportno.as_deref(), Some("A4HK900999"));
        assert_eq!(selection.path, PathBuf::from("dist"));
        assert_eq!(selection.pattern, "**/*.*");
        Ok(())
    }

    #[test]
    fn test_missing_connection_is_rejected() -> anyhow::Result<()> {
        let value = json!({
            "authentication": { "user": "DEV", "password": "x" },
            "ui5": { "package": "$TMP", "bspContainer": "ZAPP", "bspContainerText": "App" }
        });
        let err = settings(value)?.into_deployment(env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("connection configuration"));
        Ok(())
    }

    #[test]
    fn test_missing_authentication_is_rejected() -> anyhow::Result<()> {
        let value = json!({
            "connection": { "server": "http://abap:8000" },
            "ui5": { "package": "$TMP", "bspContainer": "ZAPP", "bspContainerText": "App" }
        });
        let err = settings(value)?.into_deployment(env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("authentication configuration"));
        Ok(())
    }

    #[test]
    fn test_missing_ui5_is_rejected() -> anyhow::Result<()> {
        let value = json!({
            "connection": { "server": "http://abap:8000" },
            "authentication": { "user": "DEV", "password": "x" }
        });
        let err = settings(value)?.into_deployment(env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("UI5 configuration"));
        Ok(())
    }

    #[test]
    fn test_invalid_server_url_is_rejected() -> anyhow::Result<()> {
        let mut value = full_settings();
        value["connection"]["server"] = json!("not a url");
        let err = settings(value)?.into_deployment(env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("Invalid server URL"));
        Ok(())
    }

    #[test]
    fn test_load_from_json_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("ui5-deploy.json");
        fs::write(&path, serde_json::to_string_pretty(&full_settings())?)?;

        let loaded = TaskSettings::load_from_json(&path)?;
        assert!(loaded.connection.is_some());
        assert_eq!(loaded.resources.unwrap().pattern.as_deref(), Some("**/*.js"));

        let missing = TaskSettings::load_from_json(&dir.path().join("absent.json"));
        assert!(missing.is_err());
        Ok(())
    }
}
