use crate::error::WiringError;
use crate::model::{BoxId, Connection, InputSlot, OpBox, OperationKind, Position, TagRef, Value};
use ahash::AHashMap;
use itertools::Itertools;

/// The authoritative set of boxes and connections.
///
/// Boxes are kept in creation order, which is also ascending id order; the
/// evaluator relies on that. Input slots are authoritative for evaluation,
/// the connection list for drawing wires. Every wiring operation updates both,
/// and at most one connection exists per target input.
#[derive(Debug, Clone)]
pub struct GraphStore {
    boxes: Vec<OpBox>,
    index: AHashMap<BoxId, usize>,
    connections: Vec<Connection>,
    next_id: u64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            index: AHashMap::new(),
            connections: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a box with all inputs empty and no output yet. Always succeeds;
    /// an unknown operator name still gets a box, it just evaluates to the default.
    pub fn create_box(
        &mut self,
        kind: OperationKind,
        operator_name: &str,
        position: Position,
    ) -> &OpBox {
        let id = BoxId(self.next_id);
        self.next_id += 1;

        let op_box = OpBox::new(id, kind, operator_name, position);
        log::debug!(
            "Created box {} ({} {}, {} input(s))",
            id,
            kind,
            operator_name,
            op_box.arity()
        );

        self.index.insert(id, self.boxes.len());
        self.boxes.push(op_box);
        &self.boxes[self.boxes.len() - 1]
    }

    pub fn find_box(&self, id: BoxId) -> Option<&OpBox> {
        self.index.get(&id).map(|&i| &self.boxes[i])
    }

    /// Wires the output of `from` into input `to_input_index` of `to`.
    ///
    /// Whatever fed that input before is replaced. `from` is not checked: a
    /// reference to a box that does not exist simply reads as the default.
    /// On `Err` nothing has changed.
    pub fn add_connection(
        &mut self,
        from: BoxId,
        to: BoxId,
        to_input_index: usize,
    ) -> Result<(), WiringError> {
        let slot = self.slot_mut(to, to_input_index)?;
        *slot = InputSlot::Box { source: from };

        let connection = Connection::new(from, to, to_input_index);
        match self
            .connections
            .iter_mut()
            .find(|c| c.targets(to, to_input_index))
        {
            Some(existing) => *existing = connection,
            None => self.connections.push(connection),
        }
        log::debug!("Wired {} -> {} input {}", from, to, to_input_index);
        Ok(())
    }

    /// Feeds input `input_index` of `box_id` from a tag, replacing any wire.
    /// On `Err` nothing has changed.
    pub fn set_tag_input(
        &mut self,
        box_id: BoxId,
        input_index: usize,
        tag: TagRef,
    ) -> Result<(), WiringError> {
        let slot = self.slot_mut(box_id, input_index)?;
        log::debug!(
            "Tagged {} input {} with '{}' ({})",
            box_id,
            input_index,
            tag.name,
            tag.external_id
        );
        *slot = InputSlot::Tag(tag);
        self.connections
            .retain(|c| !c.targets(box_id, input_index));
        Ok(())
    }

    /// All boxes, in creation order.
    pub fn boxes(&self) -> &[OpBox] {
        &self.boxes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The wire landing on a specific input, if any.
    pub fn connection_into(&self, box_id: BoxId, input_index: usize) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| c.targets(box_id, input_index))
    }

    /// Wires leaving `box_id`.
    pub fn connections_from(&self, box_id: BoxId) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |c| c.from_box_id == box_id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The id the next created box will receive.
    pub fn next_id(&self) -> BoxId {
        BoxId(self.next_id)
    }

    /// Checks that box-wired slots and connections describe the same wires.
    pub fn is_consistent(&self) -> bool {
        let wired_slots = self
            .boxes
            .iter()
            .flat_map(|b| b.inputs())
            .filter(|slot| slot.source_box().is_some())
            .count();
        if wired_slots != self.connections.len() {
            return false;
        }
        let unique_targets = self
            .connections
            .iter()
            .map(|c| (c.to_box_id, c.to_input_index))
            .all_unique();
        unique_targets
            && self.connections.iter().all(|c| {
                self.find_box(c.to_box_id)
                    .and_then(|b| b.input(c.to_input_index))
                    .and_then(InputSlot::source_box)
                    == Some(c.from_box_id)
            })
    }

    pub(crate) fn box_at(&self, position: usize) -> &OpBox {
        &self.boxes[position]
    }

    pub(crate) fn position_of(&self, id: BoxId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn set_output_at(&mut self, position: usize, value: Value) {
        self.boxes[position].set_output(value);
    }

    fn slot_mut(&mut self, box_id: BoxId, index: usize) -> Result<&mut InputSlot, WiringError> {
        let position = self
            .position_of(box_id)
            .ok_or(WiringError::BoxNotFound { box_id })?;
        let target = &mut self.boxes[position];
        let arity = target.arity();
        target.slot_mut(index).ok_or(WiringError::InputOutOfRange {
            box_id,
            index,
            arity,
        })
    }
}
