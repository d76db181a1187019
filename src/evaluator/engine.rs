use crate::graph::GraphStore;
use crate::model::{InputSlot, OpBox, OperationKind, Operator, Value};
use crate::trace::{BoxRead, BoxTrace, InputOrigin, InputTrace};

/// Evaluates a single box against the current state of the store.
///
/// Referenced boxes are read as they are right now: those earlier in creation
/// order already hold this pass's value, the rest (including the box itself)
/// still hold the previous pass's value.
pub(super) struct BoxEngine<'a> {
    store: &'a GraphStore,
    position: usize,
    op_box: &'a OpBox,
}

impl<'a> BoxEngine<'a> {
    pub(super) fn new(store: &'a GraphStore, position: usize) -> Self {
        Self {
            store,
            position,
            op_box: store.box_at(position),
        }
    }

    /// Computes the box output.
    pub(super) fn evaluate(&self) -> Value {
        let inputs: Vec<Value> = self
            .op_box
            .inputs()
            .iter()
            .map(|slot| self.read_slot(slot).0)
            .collect();
        apply(self.op_box.kind(), self.op_box.operator(), &inputs)
    }

    /// Computes the box output and records where every input came from.
    pub(super) fn evaluate_traced(&self) -> BoxTrace {
        let inputs: Vec<InputTrace> = self
            .op_box
            .inputs()
            .iter()
            .map(|slot| {
                let (value, origin) = self.read_slot(slot);
                InputTrace { origin, value }
            })
            .collect();
        let values: Vec<Value> = inputs.iter().map(|i| i.value).collect();

        BoxTrace {
            box_id: self.op_box.id(),
            kind: self.op_box.kind(),
            operator_name: self.op_box.operator_name().to_string(),
            recognized: self.op_box.operator().is_some(),
            outcome: apply(self.op_box.kind(), self.op_box.operator(), &values),
            inputs,
        }
    }

    fn read_slot(&self, slot: &InputSlot) -> (Value, InputOrigin) {
        let default = self.op_box.kind().default_value();
        match slot {
            InputSlot::Empty => (default, InputOrigin::Empty),
            InputSlot::Tag(tag) => (default, InputOrigin::Tag(tag.clone())),
            InputSlot::Box { source } => {
                let (value, read) = match self.store.position_of(*source) {
                    None => (default, BoxRead::Missing),
                    Some(src) => match self.store.box_at(src).output() {
                        None => (default, BoxRead::Unset),
                        Some(v) if src < self.position => (v, BoxRead::Current),
                        Some(v) => (v, BoxRead::PreviousPass),
                    },
                };
                (
                    value,
                    InputOrigin::Box {
                        source: *source,
                        read,
                    },
                )
            }
        }
    }
}

/// Applies an operator to already-resolved inputs, in slot order.
///
/// Logical operators read inputs through truthiness and compare through the
/// numeric view; arithmetic operators read every input numerically. An unknown
/// operator yields the kind default.
pub fn apply(kind: OperationKind, operator: Option<Operator>, inputs: &[Value]) -> Value {
    let default = kind.default_value();
    let arg = |i: usize| inputs.get(i).copied().unwrap_or(default);

    let Some(op) = operator else {
        return default;
    };

    match op {
        Operator::Not => Value::Bool(!arg(0).is_truthy()),
        Operator::And => Value::Bool(arg(0).is_truthy() && arg(1).is_truthy()),
        Operator::Or => Value::Bool(arg(0).is_truthy() || arg(1).is_truthy()),
        Operator::GreaterThan => Value::Bool(arg(0).as_number() > arg(1).as_number()),
        Operator::LessThan => Value::Bool(arg(0).as_number() < arg(1).as_number()),

        Operator::Add => Value::Number(inputs.iter().map(Value::as_number).sum()),
        Operator::Subtract => {
            let Some((head, rest)) = inputs.split_first() else {
                return Value::Number(0.0);
            };
            let rest: f64 = rest.iter().map(Value::as_number).sum();
            Value::Number(head.as_number() - rest)
        }
        Operator::Multiply => Value::Number(inputs.iter().map(Value::as_number).product()),
        Operator::Divide => {
            let Some((head, rest)) = inputs.split_first() else {
                return Value::Number(0.0);
            };
            let denominator: f64 = rest.iter().map(Value::as_number).product();
            if denominator == 0.0 {
                Value::Number(f64::INFINITY)
            } else {
                Value::Number(head.as_number() / denominator)
            }
        }
    }
}
