use serde::{Deserialize, Serialize};

use super::names::{MethodName, ParameterName, TypeName};
use super::statements::Statement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[default]
    Class,
    Interface,
    Enum,
    Struct,
}

impl EntityKind {
    pub fn keyword(self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Interface => "interface",
            EntityKind::Enum => "enum",
            EntityKind::Struct => "struct",
        }
    }
}

/// The root of a render: one type with its members grouped by kind.
///
/// Groups are rendered in the order they were declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    #[serde(default)]
    pub kind: EntityKind,
    pub name: TypeName,
    #[serde(default)]
    pub delegates: Vec<DelegateDeclaration>,
    #[serde(default)]
    pub events: Vec<EventDeclaration>,
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
    #[serde(default)]
    pub properties: Vec<PropertyDeclaration>,
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
}

impl TypeDeclaration {
    pub fn new(kind: EntityKind, name: TypeName) -> Self {
        Self {
            kind,
            name,
            delegates: Vec::new(),
            events: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// Supertypes of the rendered entity, resolved upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeHierarchy {
    #[serde(default)]
    pub superclass: Option<TypeName>,
    #[serde(default)]
    pub interfaces: Vec<TypeName>,
}

impl TypeHierarchy {
    pub fn has_supertypes(&self) -> bool {
        self.superclass.is_some() || !self.interfaces.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateDeclaration {
    pub name: TypeName,
    #[serde(default)]
    pub parameters: Vec<ParameterName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDeclaration {
    pub name: String,
    pub handler_type: TypeName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub name: String,
    pub value_type: TypeName,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub name: String,
    pub value_type: TypeName,
    #[serde(default)]
    pub has_getter: bool,
    #[serde(default)]
    pub has_setter: bool,
    #[serde(default)]
    pub get: Vec<Statement>,
    #[serde(default)]
    pub set: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: MethodName,
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// On-disk shape of a render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDocument {
    pub entity: TypeDeclaration,
    #[serde(default)]
    pub hierarchy: Option<TypeHierarchy>,
}
