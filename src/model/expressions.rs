use serde::{Deserialize, Serialize};

use super::names::{MethodName, ParameterName, TypeName};
use super::statements::Statement;

/// A plain identifier such as `x` or a synthetic `$0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableReference {
    pub identifier: String,
}

impl VariableReference {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reference {
    Variable {
        identifier: String,
    },
    Field {
        reference: VariableReference,
        field: String,
    },
    Property {
        reference: VariableReference,
        property: String,
    },
    Method {
        reference: VariableReference,
        method: String,
    },
    Event {
        reference: VariableReference,
        event: String,
    },
    IndexAccess {
        expression: Box<Expression>,
    },
    #[serde(other)]
    Unknown,
}

impl Reference {
    pub fn variable(identifier: impl Into<String>) -> Self {
        Reference::Variable {
            identifier: identifier.into(),
        }
    }

    pub fn field(reference: impl Into<String>, field: impl Into<String>) -> Self {
        Reference::Field {
            reference: VariableReference::new(reference),
            field: field.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    PreIncrement,
    PostIncrement,
    PreDecrement,
    PostDecrement,
    Plus,
    Minus,
    Complement,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    And,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Divide,
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Minus,
    Modulo,
    Multiply,
    NotEqual,
    Or,
    Plus,
    ShiftLeft,
    ShiftRight,
    #[serde(other)]
    Unknown,
}

impl BinaryOperator {
    /// Spelling of the operator, including the padding on both sides.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::And => " && ",
            BinaryOperator::BitwiseAnd => " & ",
            BinaryOperator::BitwiseOr => " | ",
            BinaryOperator::BitwiseXor => " ^ ",
            BinaryOperator::Divide => " / ",
            BinaryOperator::Equal => " == ",
            BinaryOperator::GreaterThan => " > ",
            BinaryOperator::GreaterThanOrEqual => " >= ",
            BinaryOperator::LessThan => " < ",
            BinaryOperator::LessThanOrEqual => " <= ",
            BinaryOperator::Minus => " - ",
            BinaryOperator::Modulo => " % ",
            BinaryOperator::Multiply => " * ",
            BinaryOperator::NotEqual => " != ",
            BinaryOperator::Or => " || ",
            BinaryOperator::Plus => " + ",
            BinaryOperator::ShiftLeft => " << ",
            BinaryOperator::ShiftRight => " >> ",
            BinaryOperator::Unknown => " ?? ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastOperator {
    /// `x as T`
    SafeCast,
    /// `(T) x`
    Cast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    Completion {
        #[serde(default)]
        variable: Option<VariableReference>,
        #[serde(default)]
        type_reference: Option<TypeName>,
        token: String,
    },
    Composed {
        references: Vec<Reference>,
    },
    IfElse {
        condition: Box<Expression>,
        then: Box<Expression>,
        #[serde(rename = "else")]
        otherwise: Box<Expression>,
    },
    Invocation {
        /// Receiver of an instance call; constructors and static calls leave it empty.
        #[serde(default)]
        reference: VariableReference,
        method: MethodName,
        #[serde(default)]
        arguments: Vec<Expression>,
    },
    Lambda {
        #[serde(default)]
        parameters: Vec<ParameterName>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    /// Loop condition that needs statements of its own to evaluate.
    LoopHeaderBlock {
        body: Vec<Statement>,
    },
    Constant {
        #[serde(default)]
        value: Option<String>,
    },
    Null,
    Reference {
        reference: Reference,
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    Cast {
        reference: VariableReference,
        target_type: TypeName,
        operator: CastOperator,
    },
    TypeCheck {
        reference: VariableReference,
        #[serde(rename = "type")]
        checked_type: TypeName,
    },
    IndexAccess {
        reference: VariableReference,
        indices: Vec<Expression>,
    },
    #[serde(other)]
    Unknown,
}

impl Expression {
    pub fn constant(value: impl Into<String>) -> Self {
        Expression::Constant {
            value: Some(value.into()),
        }
    }

    pub fn variable(identifier: impl Into<String>) -> Self {
        Expression::Reference {
            reference: Reference::variable(identifier),
        }
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}
