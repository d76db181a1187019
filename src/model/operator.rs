use super::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of inputs on every arithmetic box.
pub const ARITHMETIC_ARITY: usize = 8;

/// The two operator families a box can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    #[serde(rename = "logicalOperation", alias = "logical")]
    Logical,
    #[serde(
        rename = "operation",
        alias = "arithmeticOperation",
        alias = "arithmetic"
    )]
    Arithmetic,
}

impl OperationKind {
    /// Input count for a box of this kind carrying `operator_name`.
    ///
    /// Only the logical `NOT` is unary; every other logical box takes two inputs,
    /// and arithmetic boxes always take eight, whatever the name.
    pub fn arity_for(&self, operator_name: &str) -> usize {
        match self {
            OperationKind::Arithmetic => ARITHMETIC_ARITY,
            OperationKind::Logical if operator_name == Operator::Not.name() => 1,
            OperationKind::Logical => 2,
        }
    }

    /// What an empty slot, a tag, or an unreadable box reference resolves to
    /// when read by a box of this kind. Also the output of an unknown operator.
    pub fn default_value(&self) -> Value {
        match self {
            OperationKind::Logical => Value::Bool(false),
            OperationKind::Arithmetic => Value::Number(0.0),
        }
    }

    /// Parses the kind from its wire name or a short form.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "logicalOperation" | "logical" | "Logical" | "LogicalOperation" => {
                Some(OperationKind::Logical)
            }
            "operation" | "arithmeticOperation" | "arithmetic" | "Arithmetic"
            | "ArithmeticOperation" | "math" => Some(OperationKind::Arithmetic),
            _ => None,
        }
    }

    /// Title of the palette group listing this kind's operators.
    pub fn palette_title(&self) -> &'static str {
        match self {
            OperationKind::Logical => "Logical Operations",
            OperationKind::Arithmetic => "Mathematical Operations",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Logical => write!(f, "logicalOperation"),
            OperationKind::Arithmetic => write!(f, "operation"),
        }
    }
}

/// Every operator the engine knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Logical
    And,
    Or,
    Not,
    GreaterThan,
    LessThan,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in palette order.
    pub const ALL: [Operator; 9] = [
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn kind(&self) -> OperationKind {
        match self {
            Operator::And
            | Operator::Or
            | Operator::Not
            | Operator::GreaterThan
            | Operator::LessThan => OperationKind::Logical,
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
                OperationKind::Arithmetic
            }
        }
    }

    /// The case-sensitive name used by the palette and in commands.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::GreaterThan => "GreaterThan",
            Operator::LessThan => "LessThan",
            Operator::Add => "ADD",
            Operator::Subtract => "SUBTRACT",
            Operator::Multiply => "MULTIPLY",
            Operator::Divide => "DIVIDE",
        }
    }

    /// Symbol used when explaining an evaluation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::Add => "ADD",
            Operator::Subtract => "SUBTRACT",
            Operator::Multiply => "MULTIPLY",
            Operator::Divide => "DIVIDE",
        }
    }

    /// Resolves `name` within `kind`. A name that belongs to the other family
    /// (an arithmetic box called `AND`) does not resolve.
    pub fn resolve(kind: OperationKind, name: &str) -> Option<Operator> {
        Self::ALL
            .into_iter()
            .find(|op| op.kind() == kind && op.name() == name)
    }

    /// Operators of one family, in palette order.
    pub fn of_kind(kind: OperationKind) -> impl Iterator<Item = Operator> {
        Self::ALL.into_iter().filter(move |op| op.kind() == kind)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
