use serde::{Deserialize, Serialize};

/// A reference to a type, optionally carrying type arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub is_value_type: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeArgument>,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            is_value_type: false,
            type_arguments: Vec::new(),
        }
    }

    /// A struct-like type such as `int` or `bool`.
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            is_value_type: true,
            ..Self::new(name)
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeArgument>) -> Self {
        self.type_arguments = arguments;
        self
    }

    pub fn has_type_arguments(&self) -> bool {
        !self.type_arguments.is_empty()
    }
}

/// One entry of a type argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeArgument {
    /// Not resolved upstream, printed as `?`.
    Unknown,
    Bound(TypeName),
    /// A type parameter that is not bound, e.g. `T`.
    Free(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterName {
    pub name: String,
    pub value_type: TypeName,
    #[serde(default)]
    pub passed_by_reference: bool,
    #[serde(default)]
    pub is_output: bool,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub is_parameter_array: bool,
}

impl ParameterName {
    pub fn new(value_type: TypeName, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type,
            passed_by_reference: false,
            is_output: false,
            is_optional: false,
            is_parameter_array: false,
        }
    }
}

/// The resolved target of an invocation or the signature of a method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodName {
    pub name: String,
    pub declaring_type: TypeName,
    #[serde(default = "MethodName::void")]
    pub return_type: TypeName,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeArgument>,
    #[serde(default)]
    pub parameters: Vec<ParameterName>,
}

impl MethodName {
    pub fn new(declaring_type: TypeName, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            return_type: Self::void(),
            is_static: false,
            is_constructor: false,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
        }
    }

    fn void() -> TypeName {
        TypeName::value("void")
    }

    pub fn has_type_parameters(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}
