// ui5-nwabap-deployer/src/validate/mod.rs
use crate::config::{
    DeploymentConfig, LOCAL_PACKAGE, MAX_BSP_CONTAINER_LEN, NormalizedConfig, non_blank,
    strip_namespace,
};
use crate::errors::{ConfigurationError, Violation};
use crate::utils::logger::Logger;

/// Checks the raw options and produces the normalized configuration.
///
/// All checks run; every violation is logged and returned together.
pub fn validate(
    raw: &DeploymentConfig,
    logger: &dyn Logger,
) -> Result<NormalizedConfig, ConfigurationError> {
    let violations = collect_violations(raw);
    if !violations.is_empty() {
        for violation in &violations {
            logger.error(&violation.to_string());
        }
        return Err(ConfigurationError { violations });
    }

    Ok(NormalizedConfig::from_raw(raw))
}

fn collect_violations(raw: &DeploymentConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    let credentials_complete = raw
        .auth
        .as_ref()
        .is_some_and(|auth| non_blank(&auth.user).is_some() && non_blank(&auth.pwd).is_some());
    if !credentials_complete {
        violations.push(Violation::MissingCredentials);
    }

    let ui5 = raw.ui5.clone().unwrap_or_default();

    if non_blank(&ui5.package).is_none()
        || non_blank(&ui5.bspcontainer).is_none()
        || non_blank(&ui5.bspcontainer_text).is_none()
    {
        violations.push(Violation::IncompleteUi5Target);
    }

    let local_package = ui5.package.as_deref() == Some(LOCAL_PACKAGE);
    let create_transport = ui5.create_transport.unwrap_or(false);
    let user_match = ui5.transport_use_user_match.unwrap_or(false);
    if !local_package && non_blank(&ui5.transportno).is_none() && !create_transport && !user_match
    {
        violations.push(Violation::MissingTransportSource);
    }

    if create_transport && ui5.transport_text.is_none() {
        violations.push(Violation::MissingTransportText);
    }

    if let Some(bsp_container) = &ui5.bspcontainer {
        let name = strip_namespace(bsp_container);
        let length = name.chars().count();
        if length > MAX_BSP_CONTAINER_LEN {
            violations.push(Violation::BspContainerTooLong {
                name: name.to_string(),
                length,
            });
        }
    }

    violations
}
