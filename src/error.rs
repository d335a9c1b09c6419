use crate::model::AppState;
use crate::rules::RejectionReason;
use thiserror::Error;

/// Fallos de los servicios externos. Nunca llegan al jugador: se sustituyen
/// por imágenes de relleno o feedback local.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{service} is not configured")]
    NotConfigured { service: &'static str },
    #[error("invalid endpoint {endpoint}")]
    InvalidEndpoint { endpoint: String },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("malformed response envelope: {0}")]
    Envelope(String),
    #[error("response is missing {0}")]
    MissingContent(&'static str),
}

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("image {url} could not be fetched: {reason}")]
    Unreachable { url: String, reason: String },
    #[error("image {url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} is not an image ({content_type})")]
    NotAnImage { url: String, content_type: String },
    #[error("image {url} could not be decoded: {reason}")]
    Decode { url: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter exactly {expected} words! ({found} given)")]
    WrongWordCount { expected: usize, found: usize },
    #[error(transparent)]
    Rejected(#[from] RejectionReason),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("level catalog is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("expected {expected} levels, found {found}")]
    WrongLevelCount { expected: usize, found: usize },
    #[error("level ids must be dense from 1: found {found} at position {position}")]
    NotDense { position: usize, found: usize },
    #[error("blind level {0} has no view time")]
    MissingViewTime(usize),
    #[error("bias level {0} has no bias type")]
    MissingBiasType(usize),
    #[error("level {0} carries parameters that do not belong to its mode")]
    StrayParameter(usize),
}

/// Operaciones invocadas fuera de lugar. Se muestran como aviso suave.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Challenge {0} does not exist")]
    UnknownLevel(usize),
    #[error("Challenge {0} is locked. Complete the previous challenge first!")]
    LevelLocked(usize),
    #[error("cannot {action} while on {state:?}")]
    InvalidState {
        action: &'static str,
        state: AppState,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
