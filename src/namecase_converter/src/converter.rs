use namecase_core::{Case, CasingRules, Client, Model, OperationResponse, Service};

use crate::boundary::WordBoundary;
use crate::policy::apply_case;
use crate::sanitize::sanitize_enum_name;
use crate::walker::ConvertCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Which characters separate words when deciding whether to rename an
    /// identifier under the camel and snake conventions.
    pub boundary: WordBoundary,
    /// Prefix enum member names that start with a digit with `_`.
    pub sanitize_enum_names: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            boundary: WordBoundary::Standard,
            sanitize_enum_names: true,
        }
    }
}

/// Renames the identifiers of a client IR to a single naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    case: Case,
    options: ConvertOptions,
}

impl Converter {
    pub fn new(case: Case) -> Self {
        Self {
            case,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn convert_model(&self, model: &Model) -> Model {
        model.convert_case(self)
    }

    pub fn convert_response(&self, response: &OperationResponse) -> OperationResponse {
        response.convert_case(self)
    }

    pub fn convert_service(&self, service: &Service) -> Service {
        service.convert_case(self)
    }

    pub fn convert_client(&self, client: &Client) -> Client {
        client.convert_case(self)
    }
}

impl CasingRules<str> for Converter {
    fn to_model_name_case(&self, identifier: &str) -> String {
        apply_case(self.case, identifier, self.options.boundary)
    }

    fn to_enum_member_case(&self, identifier: &str) -> String {
        let name = apply_case(self.case, identifier, self.options.boundary);

        if self.options.sanitize_enum_names {
            sanitize_enum_name(name)
        } else {
            name
        }
    }
}
