// ui5-nwabap-deployer/src/config/mod.rs
pub mod settings;

use serde::{Deserialize, Serialize, Serializer};
use url::Url;

use crate::transport::TransportId;

/// Package value that exempts a deployment from transport requirements.
pub const LOCAL_PACKAGE: &str = "$TMP";
pub const DEFAULT_LANGUAGE: &str = "EN";
/// Maximum BSP container name length, namespace prefix excluded.
pub const MAX_BSP_CONTAINER_LEN: usize = 15;

// Structs for deserializing the deployment options as handed to the core
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConnection {
    pub server: Option<String>,
    pub client: Option<String>,
    #[serde(alias = "useStrictSSL")]
    pub use_strict_ssl: Option<bool>,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuth {
    pub user: Option<String>,
    #[serde(alias = "password")]
    pub pwd: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUi5Target {
    pub language: Option<String>,
    #[serde(alias = "transportNo")]
    pub transportno: Option<String>,
    pub package: Option<String>,
    #[serde(alias = "bspContainer")]
    pub bspcontainer: Option<String>,
    #[serde(alias = "bspContainerText")]
    pub bspcontainer_text: Option<String>,
    #[serde(alias = "createTransport")]
    pub create_transport: Option<bool>,
    #[serde(alias = "transportText")]
    pub transport_text: Option<String>,
    #[serde(alias = "transportUseUserMatch")]
    pub transport_use_user_match: Option<bool>,
    #[serde(alias = "transportUseLocked")]
    pub transport_use_locked: Option<bool>,
    #[serde(alias = "calcAppIndex", alias = "calculateApplicationIndex")]
    pub calc_appindex: Option<bool>,
}

/// Deployment options exactly as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default, alias = "connection")]
    pub conn: RawConnection,
    #[serde(alias = "authentication")]
    pub auth: Option<RawAuth>,
    pub ui5: Option<RawUi5Target>,
}

impl DeploymentConfig {
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

// Application's internal, normalized configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub server: Option<String>,
    pub client: Option<String>,
    pub use_strict_ssl: bool,
    #[serde(serialize_with = "serialize_redacted_proxy")]
    pub proxy: Option<String>,
}

/// Proxy URLs are logged without their user info.
fn serialize_redacted_proxy<S: Serializer>(
    proxy: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match proxy {
        Some(proxy) => serializer.serialize_some(&redact_user_info(proxy)),
        None => serializer.serialize_none(),
    }
}

fn redact_user_info(proxy: &str) -> String {
    match Url::parse(proxy) {
        Ok(mut url) => {
            // Both fail only for URLs that cannot carry user info at all.
            let _ = url.set_password(None);
            let _ = url.set_username("");
            url.to_string()
        }
        Err(_) => "<unparseable proxy url>".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub user: String,
    #[serde(skip_serializing)]
    pub pwd: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ui5Target {
    pub language: String,
    pub transport_no: Option<TransportId>,
    pub package: String,
    pub bsp_container: String,
    pub bsp_container_text: String,
    pub create_transport: bool,
    pub transport_text: Option<String>,
    pub transport_use_user_match: bool,
    pub transport_use_locked: bool,
    pub calc_app_index: bool,
}

impl Ui5Target {
    pub fn is_local_package(&self) -> bool {
        self.package == LOCAL_PACKAGE
    }
}

/// Validated, defaulted configuration. Only produced by [`crate::validate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedConfig {
    pub conn: Connection,
    pub auth: Credentials,
    pub ui5: Ui5Target,
}

impl NormalizedConfig {
    /// Builds the normalized value from raw options that already passed validation.
    pub(crate) fn from_raw(raw: &DeploymentConfig) -> Self {
        let auth = raw.auth.clone().unwrap_or_default();
        let ui5 = raw.ui5.clone().unwrap_or_default();

        let language = non_blank(&ui5.language)
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_uppercase();

        NormalizedConfig {
            conn: Connection {
                server: non_blank(&raw.conn.server).map(str::to_string),
                client: non_blank(&raw.conn.client).map(str::to_string),
                use_strict_ssl: raw.conn.use_strict_ssl.unwrap_or(true),
                proxy: non_blank(&raw.conn.proxy).map(str::to_string),
            },
            auth: Credentials {
                user: auth.user.unwrap_or_default(),
                pwd: auth.pwd.unwrap_or_default(),
            },
            ui5: Ui5Target {
                language,
                transport_no: non_blank(&ui5.transportno).map(TransportId::from),
                package: ui5.package.unwrap_or_default(),
                bsp_container: ui5.bspcontainer.unwrap_or_default(),
                bsp_container_text: ui5.bspcontainer_text.unwrap_or_default(),
                create_transport: ui5.create_transport.unwrap_or(false),
                transport_text: ui5.transport_text,
                transport_use_user_match: ui5.transport_use_user_match.unwrap_or(false),
                transport_use_locked: ui5.transport_use_locked.unwrap_or(false),
                calc_app_index: ui5.calc_appindex.unwrap_or(false),
            },
        }
    }

    /// JSON rendering for verbose logs; the password is never included.
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable options: {}>", e))
    }
}

/// Returns the value when it contains anything besides whitespace.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Strips a leading customer namespace (`/NAMESPACE/NAME` -> `NAME`).
pub fn strip_namespace(bsp_container: &str) -> &str {
    match bsp_container.rfind('/') {
        Some(idx) => &bsp_container[idx + 1..],
        None => bsp_container,
    }
}
