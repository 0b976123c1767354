use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Model;
use crate::service::Service;

/// The client IR handed to the emitter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub version: String,
    pub server: String,
    pub models: Vec<Model>,
    pub services: Vec<Service>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
