mod boundary;
mod converter;
mod policy;
mod sanitize;
mod walker;

use namecase_core::{Case, Client, Model, NameCase, OperationResponse, Service};
use tracing::debug;

pub use crate::boundary::{split_words, WordBoundary};
pub use crate::converter::{ConvertOptions, Converter};
pub use crate::policy::{
    apply_case, camel_case_for_multiple_words, pascal_case, snake_case_for_multiple_words,
    to_identifier_camel_case,
};
pub use crate::sanitize::sanitize_enum_name;
pub use crate::walker::ConvertCase;

/// Converts the names of `model` and everything nested in it to `case`.
pub fn convert_model_names(model: &Model, case: Case) -> Model {
    Converter::new(case).convert_model(model)
}

/// Converts the names of an operation result to `case`.
pub fn convert_response_names(response: &OperationResponse, case: Case) -> OperationResponse {
    Converter::new(case).convert_response(response)
}

/// Converts the result models of every operation in `service` to `case`.
pub fn convert_service_case(service: &Service, case: Case) -> Service {
    Converter::new(case).convert_service(service)
}

/// Converts all models and service results of `client`.
///
/// `NameCase::None` returns the client unchanged.
pub fn convert_client_case(client: &Client, name_case: NameCase) -> Client {
    convert_client_case_with(client, name_case, ConvertOptions::default())
}

pub fn convert_client_case_with(
    client: &Client,
    name_case: NameCase,
    options: ConvertOptions,
) -> Client {
    match name_case.as_case() {
        Some(case) => {
            debug!(%case, "converting client");
            Converter::new(case)
                .with_options(options)
                .convert_client(client)
        }
        None => client.clone(),
    }
}
