use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Model;

/// One API service, grouping the operations that share a tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub name: String,
    pub operations: Vec<Operation>,
    pub imports: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Service {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }
}

/// One API method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub service: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub deprecated: bool,
    pub method: String,
    pub path: String,
    pub parameters: Vec<OperationParameter>,
    pub parameters_body: Option<OperationParameter>,
    pub errors: Vec<OperationError>,
    pub results: Vec<OperationResponse>,
    pub response_header: Option<String>,
    /// Keys this crate does not interpret, such as `parametersPath` or
    /// `imports`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Operation {
    pub fn new<N: Into<String>, M: Into<String>, P: Into<String>>(
        name: N,
        method: M,
        path: P,
    ) -> Self {
        Self {
            name: name.into(),
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_result(mut self, result: OperationResponse) -> Self {
        self.results.push(result);
        self
    }
}

/// Where the value of an operation response is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseLocation {
    Response,
    Header,
}

impl Default for ResponseLocation {
    fn default() -> Self {
        ResponseLocation::Response
    }
}

/// A possible response shape of an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    #[serde(rename = "in", default)]
    pub location: ResponseLocation,
    #[serde(default)]
    pub code: u16,
    #[serde(flatten)]
    pub model: Model,
}

impl OperationResponse {
    pub fn new(code: u16, model: Model) -> Self {
        Self {
            location: ResponseLocation::Response,
            code,
            model,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    FormData,
    Body,
    Cookie,
}

impl Default for ParameterLocation {
    fn default() -> Self {
        ParameterLocation::Query
    }
}

/// An operation parameter. Parameters keep the names of the API they call
/// and are never renamed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationParameter {
    #[serde(rename = "in", default)]
    pub location: ParameterLocation,
    #[serde(default)]
    pub prop: String,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(flatten)]
    pub model: Model,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationError {
    pub code: u16,
    pub description: String,
}
