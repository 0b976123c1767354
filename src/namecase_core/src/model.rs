use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a model is exported by the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Export {
    Reference,
    Generic,
    Enum,
    Array,
    Dictionary,
    Interface,
    OneOf,
    AnyOf,
    AllOf,
}

impl Default for Export {
    fn default() -> Self {
        Export::Reference
    }
}

/// A named type in the generated client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    pub export: Export,
    #[serde(rename = "type")]
    pub ty: String,
    pub base: String,
    pub template: Option<String>,
    pub link: Option<Box<Model>>,
    pub description: Option<String>,
    pub is_definition: bool,
    pub is_read_only: bool,
    pub is_required: bool,
    pub is_nullable: bool,
    pub imports: Vec<String>,
    #[serde(rename = "enum")]
    pub enum_members: Vec<EnumMember>,
    pub enums: Vec<Model>,
    pub properties: Vec<Model>,
    /// Keys this crate does not interpret, such as `format` or `pattern`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model {
    pub fn new<N: Into<String>>(name: N, export: Export) -> Self {
        Self {
            name: name.into(),
            export,
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: Model) -> Self {
        self.link = Some(Box::new(link));
        self
    }

    pub fn with_enum_member(mut self, member: EnumMember) -> Self {
        self.enum_members.push(member);
        self
    }

    pub fn with_enum(mut self, model: Model) -> Self {
        self.enums.push(model);
        self
    }

    pub fn with_property(mut self, property: Model) -> Self {
        self.properties.push(property);
        self
    }

    pub fn is_interface(&self) -> bool {
        self.export == Export::Interface
    }
}

/// One value of an enumeration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumMember {
    pub name: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EnumMember {
    pub fn new<N: Into<String>, V: Into<Value>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}
