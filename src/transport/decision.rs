// ui5-nwabap-deployer/src/transport/decision.rs
use std::fmt;

use super::{TransportClient, TransportId};
use crate::config::{LOCAL_PACKAGE, NormalizedConfig};
use crate::errors::TransportResolutionError;
use crate::utils::logger::Logger;

/// Which acquisition path a configuration selects, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportStrategy {
    /// Local package: no transport required.
    LocalPackage,
    /// Explicit transport number; suppresses lookup and creation.
    Explicit(TransportId),
    /// Reuse an open transport of the user, optionally creating one if none is found.
    UserMatch { create_fallback: bool },
    Create,
    Unconfigured,
}

impl fmt::Display for TransportStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalPackage => write!(f, "none required (package {})", LOCAL_PACKAGE),
            Self::Explicit(id) => write!(f, "explicit transport {}", id),
            Self::UserMatch {
                create_fallback: true,
            } => write!(f, "reuse an open transport of the user, create one if none is found"),
            Self::UserMatch {
                create_fallback: false,
            } => write!(f, "reuse an open transport of the user"),
            Self::Create => write!(f, "create a new transport"),
            Self::Unconfigured => write!(f, "no transport configured"),
        }
    }
}

/// Picks the acquisition path without touching the remote system.
pub fn select_strategy(config: &NormalizedConfig) -> TransportStrategy {
    let ui5 = &config.ui5;
    if ui5.is_local_package() {
        TransportStrategy::LocalPackage
    } else if let Some(id) = &ui5.transport_no {
        TransportStrategy::Explicit(id.clone())
    } else if ui5.transport_use_user_match {
        TransportStrategy::UserMatch {
            create_fallback: ui5.create_transport,
        }
    } else if ui5.create_transport {
        TransportStrategy::Create
    } else {
        TransportStrategy::Unconfigured
    }
}

/// Terminal outcome of one acquisition run.
#[derive(Debug)]
pub enum TransportDecision {
    /// Transport to deploy with; `None` only for local packages without a number.
    Direct(Option<TransportId>),
    Fail(TransportResolutionError),
}

impl TransportDecision {
    pub fn into_result(self) -> Result<Option<TransportId>, TransportResolutionError> {
        match self {
            TransportDecision::Direct(id) => Ok(id),
            TransportDecision::Fail(err) => Err(err),
        }
    }
}

enum AcquisitionState {
    Start,
    UserMatch,
    Create,
    Done(TransportDecision),
}

/// Result of [`acquire_transport`]: the path that ran and where it ended.
#[derive(Debug)]
pub struct Acquisition {
    pub strategy: TransportStrategy,
    pub decision: TransportDecision,
}

/// Runs the acquisition state machine once.
///
/// Each state is entered at most once, so there is at most one lookup and at
/// most one creation call. Lookup always precedes creation.
pub async fn acquire_transport(
    config: &NormalizedConfig,
    client: &dyn TransportClient,
    logger: &dyn Logger,
) -> Acquisition {
    let ui5 = &config.ui5;
    let strategy = select_strategy(config);
    let mut state = AcquisitionState::Start;

    loop {
        state = match state {
            AcquisitionState::Start => match strategy.clone() {
                // A number given alongside the local package is passed through untouched.
                TransportStrategy::LocalPackage => {
                    AcquisitionState::Done(TransportDecision::Direct(ui5.transport_no.clone()))
                }
                TransportStrategy::Explicit(id) => {
                    AcquisitionState::Done(TransportDecision::Direct(Some(id)))
                }
                TransportStrategy::UserMatch { .. } => AcquisitionState::UserMatch,
                TransportStrategy::Create => AcquisitionState::Create,
                TransportStrategy::Unconfigured => AcquisitionState::Done(TransportDecision::Fail(
                    TransportResolutionError::NoTransportConfigured,
                )),
            },
            AcquisitionState::UserMatch => {
                logger.log_verbose("Determining an existing transport of the user.");
                match client.determine_existing_transport(config).await {
                    Ok(Some(id)) => {
                        logger.info(&format!("Using existing transport {}.", id));
                        AcquisitionState::Done(TransportDecision::Direct(Some(id)))
                    }
                    Ok(None) if ui5.create_transport => {
                        logger.log_verbose("No existing transport found, creating a new one.");
                        AcquisitionState::Create
                    }
                    Ok(None) => AcquisitionState::Done(TransportDecision::Fail(
                        TransportResolutionError::NoTransportFound,
                    )),
                    Err(e) => AcquisitionState::Done(TransportDecision::Fail(
                        TransportResolutionError::TransportLookupFailed(e),
                    )),
                }
            }
            AcquisitionState::Create => {
                let description = ui5.transport_text.as_deref().unwrap_or_default();
                match client
                    .create_transport(config, &ui5.package, description)
                    .await
                {
                    Ok(id) => {
                        logger.info(&format!("Created transport {}.", id));
                        AcquisitionState::Done(TransportDecision::Direct(Some(id)))
                    }
                    Err(e) => AcquisitionState::Done(TransportDecision::Fail(
                        TransportResolutionError::TransportCreationFailed(e),
                    )),
                }
            }
            AcquisitionState::Done(decision) => return Acquisition { strategy, decision },
        };
    }
}
