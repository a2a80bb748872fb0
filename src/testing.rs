//! Recording fakes for the remote collaborators and the logger.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::classify::FileRecord;
use crate::config::NormalizedConfig;
use crate::errors::ClientError;
use crate::sync::{FileStoreClient, ResolvedConfig};
use crate::transport::{TransportClient, TransportId};
use crate::utils::logger::Logger;

/// One observed collaborator call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    DetermineExisting,
    CreateTransport { package: String, description: String },
    SyncFiles { transport: Option<String>, paths: Vec<String> },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

pub struct FakeTransportClient {
    pub existing: Result<Option<TransportId>, ClientError>,
    pub created: Result<TransportId, ClientError>,
    pub log: CallLog,
    /// Connection context handed to each call, in call order.
    pub configs: Arc<Mutex<Vec<NormalizedConfig>>>,
}

impl FakeTransportClient {
    pub fn new(log: &CallLog) -> Self {
        FakeTransportClient {
            existing: Ok(None),
            created: Ok(TransportId::from("A4HK900100")),
            log: log.clone(),
            configs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_existing(mut self, id: &str) -> Self {
        self.existing = Ok(Some(TransportId::from(id)));
        self
    }

    pub fn with_lookup_error(mut self, error: ClientError) -> Self {
        self.existing = Err(error);
        self
    }

    pub fn with_created(mut self, id: &str) -> Self {
        self.created = Ok(TransportId::from(id));
        self
    }

    pub fn with_creation_error(mut self, error: ClientError) -> Self {
        self.created = Err(error);
        self
    }
}

#[async_trait]
impl TransportClient for FakeTransportClient {
    async fn determine_existing_transport(
        &self,
        config: &NormalizedConfig,
    ) -> Result<Option<TransportId>, ClientError> {
        self.configs.lock().unwrap().push(config.clone());
        self.log.lock().unwrap().push(Call::DetermineExisting);
        self.existing.clone()
    }

    async fn create_transport(
        &self,
        config: &NormalizedConfig,
        package: &str,
        description: &str,
    ) -> Result<TransportId, ClientError> {
        self.configs.lock().unwrap().push(config.clone());
        self.log.lock().unwrap().push(Call::CreateTransport {
            package: package.to_string(),
            description: description.to_string(),
        });
        self.created.clone()
    }
}

pub struct FakeFileStore {
    pub outcome: Result<(), ClientError>,
    pub log: CallLog,
    pub received: Arc<Mutex<Vec<(ResolvedConfig, Vec<FileRecord>)>>>,
}

impl FakeFileStore {
    pub fn new(log: &CallLog) -> Self {
        FakeFileStore {
            outcome: Ok(()),
            log: log.clone(),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(mut self, error: ClientError) -> Self {
        self.outcome = Err(error);
        self
    }
}

#[async_trait]
impl FileStoreClient for FakeFileStore {
    async fn sync_files(
        &self,
        config: &ResolvedConfig,
        files: &[FileRecord],
    ) -> Result<(), ClientError> {
        self.log.lock().unwrap().push(Call::SyncFiles {
            transport: config.transport().map(|t| t.to_string()),
            paths: files.iter().map(|f| f.path().to_string()).collect(),
        });
        self.received
            .lock()
            .unwrap()
            .push((config.clone(), files.to_vec()));
        self.outcome.clone()
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    pub errors: Mutex<Vec<String>>,
    pub verbose: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn verbose(&self) -> Vec<String> {
        self.verbose.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn log_verbose(&self, message: &str) {
        self.verbose.lock().unwrap().push(message.to_string());
    }
}

/// Raw options that pass validation; tweak the JSON before use.
pub fn valid_options() -> serde_json::Value {
    serde_json::json!({
        "conn": { "server": "http://abap.example.com:8000", "client": "100" },
        "auth": { "user": "DEVELOPER", "pwd": "secret" },
        "ui5": {
            "package": "ZPKG",
            "bspcontainer": "ZAPP",
            "bspcontainer_text": "Sample application",
            "transportno": "A4HK900001"
        }
    })
}

/// Validated configuration built from JSON options.
pub fn normalized(value: serde_json::Value) -> NormalizedConfig {
    let raw = crate::config::DeploymentConfig::from_json(value).unwrap();
    crate::validate::validate(&raw, &RecordingLogger::default()).unwrap()
}
