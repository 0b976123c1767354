mod case;
mod client;
mod model;
mod service;

pub use crate::case::{Case, NameCase, ParseNameCaseError};
pub use crate::client::Client;
pub use crate::model::{EnumMember, Export, Model};
pub use crate::service::{
    Operation, OperationError, OperationParameter, OperationResponse, ParameterLocation,
    ResponseLocation, Service,
};

/// Naming rules applied to the identifiers of a client IR.
pub trait CasingRules<T: ?Sized + ToOwned> {
    fn to_model_name_case(&self, identifier: &T) -> T::Owned;
    fn to_enum_member_case(&self, identifier: &T) -> T::Owned;
}
