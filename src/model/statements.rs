use serde::{Deserialize, Serialize};

use super::expressions::{Expression, Reference, VariableReference};
use super::names::{ParameterName, TypeName};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Assignment {
        reference: Reference,
        expression: Expression,
    },
    Break,
    Continue,
    Expression {
        expression: Expression,
    },
    Goto {
        label: String,
    },
    Labelled {
        label: String,
        statement: Box<Statement>,
    },
    Return {
        #[serde(default)]
        expression: Option<Expression>,
    },
    Throw {
        reference: VariableReference,
    },
    VariableDeclaration(VariableDeclaration),
    EventSubscription {
        reference: Reference,
        operation: EventSubscriptionOperation,
        expression: Expression,
    },
    DoLoop {
        condition: Expression,
        #[serde(default)]
        body: Vec<Statement>,
    },
    ForEach {
        declaration: VariableDeclaration,
        looped_reference: VariableReference,
        #[serde(default)]
        body: Vec<Statement>,
    },
    For {
        #[serde(default)]
        init: Vec<Statement>,
        condition: Expression,
        #[serde(default)]
        step: Vec<Statement>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    IfElse {
        condition: Expression,
        #[serde(default)]
        then: Vec<Statement>,
        #[serde(default, rename = "else")]
        otherwise: Vec<Statement>,
    },
    Lock {
        reference: VariableReference,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Switch {
        reference: VariableReference,
        #[serde(default)]
        sections: Vec<CaseBlock>,
        #[serde(default)]
        default_section: Vec<Statement>,
    },
    Try {
        #[serde(default)]
        body: Vec<Statement>,
        #[serde(default)]
        catch_blocks: Vec<CatchBlock>,
        #[serde(default)]
        finally: Vec<Statement>,
    },
    Unchecked {
        #[serde(default)]
        body: Vec<Statement>,
    },
    /// The body is carried but never printed.
    Unsafe {
        #[serde(default)]
        body: Vec<Statement>,
    },
    Using {
        reference: VariableReference,
        #[serde(default)]
        body: Vec<Statement>,
    },
    While {
        condition: Expression,
        #[serde(default)]
        body: Vec<Statement>,
    },
    #[serde(other)]
    Unknown,
}

impl Statement {
    pub fn assign(reference: Reference, expression: Expression) -> Self {
        Statement::Assignment {
            reference,
            expression,
        }
    }

    pub fn declare(var_type: TypeName, identifier: impl Into<String>) -> Self {
        Statement::VariableDeclaration(VariableDeclaration {
            reference: VariableReference::new(identifier),
            var_type,
        })
    }

    pub fn ret(expression: Expression) -> Self {
        Statement::Return {
            expression: Some(expression),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub reference: VariableReference,
    #[serde(rename = "type")]
    pub var_type: TypeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSubscriptionOperation {
    Add,
    Remove,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseBlock {
    pub label: Expression,
    #[serde(default)]
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CatchBlockKind {
    /// `catch (Type name)`
    #[default]
    Default,
    /// `catch (Type)`
    Unnamed,
    /// `catch`
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchBlock {
    #[serde(default)]
    pub kind: CatchBlockKind,
    /// Not printed for [`CatchBlockKind::General`].
    #[serde(default)]
    pub parameter: ParameterName,
    #[serde(default)]
    pub body: Vec<Statement>,
}
