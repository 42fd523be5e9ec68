//! Declarative schema of the built-in role definition data source

use serde::{Deserialize, Serialize};

/// Value type of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "elem")]
pub enum AttributeType {
    String,
    /// Ordered, duplicates kept
    List(Box<AttributeType>),
    /// Unordered, deduplicated
    Set(Box<AttributeType>),
    /// Nested block of attributes
    Block(Vec<Attribute>),
}

impl AttributeType {
    pub fn string_list() -> Self {
        Self::List(Box::new(Self::String))
    }

    pub fn string_set() -> Self {
        Self::Set(Box::new(Self::String))
    }
}

/// A single attribute in the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Must be supplied by the caller
    #[serde(default)]
    pub required: bool,
    /// Filled in by the lookup
    #[serde(default)]
    pub computed: bool,
}

impl Attribute {
    pub fn required(name: &str, attr_type: AttributeType) -> Self {
        Self {
            name: name.to_string(),
            attr_type,
            required: true,
            computed: false,
        }
    }

    pub fn computed(name: &str, attr_type: AttributeType) -> Self {
        Self {
            name: name.to_string(),
            attr_type,
            required: false,
            computed: true,
        }
    }
}

/// Schema of a data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceSchema {
    pub attributes: Vec<Attribute>,
}

impl DataSourceSchema {
    /// Find an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Names of the attributes the caller must supply
    pub fn required_names(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|a| a.required)
            .map(|a| a.name.as_str())
            .collect()
    }
}

/// Schema of the built-in role definition data source
pub fn builtin_role_definition_schema() -> DataSourceSchema {
    let permission = AttributeType::Block(vec![
        Attribute::computed("actions", AttributeType::string_list()),
        Attribute::computed("not_actions", AttributeType::string_list()),
        Attribute::computed("data_actions", AttributeType::string_set()),
        Attribute::computed("not_data_actions", AttributeType::string_set()),
    ]);

    DataSourceSchema {
        attributes: vec![
            Attribute::computed("id", AttributeType::String),
            Attribute::required("name", AttributeType::String),
            Attribute::computed("description", AttributeType::String),
            Attribute::computed("type", AttributeType::String),
            Attribute::computed("permissions", AttributeType::List(Box::new(permission))),
            Attribute::computed("assignable_scopes", AttributeType::string_list()),
        ],
    }
}
