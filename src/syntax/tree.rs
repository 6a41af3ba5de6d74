//! Arena storage for the nodes of one source unit.
//!
//! Nodes are stored in a flat `Vec` in the order the parser creates them, so
//! the root is always the first entry and every parent precedes its children.
//! Links between nodes (parent, children, next sibling) are indices into that
//! `Vec`; string data is kept as byte ranges into the unit's text.

use crate::base::{TextRange, UnitId};

/// Index of a node inside its unit's [`Tree`].
pub(crate) type NodeIndex = u32;

/// Identifies a node across every unit loaded in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub(crate) unit: UnitId,
    pub(crate) index: NodeIndex,
}

impl NodeId {
    pub(crate) fn new(unit: UnitId, index: NodeIndex) -> Self {
        Self { unit, index }
    }

    /// The root node of `unit`.
    pub fn root_of(unit: UnitId) -> Self {
        Self::new(unit, 0)
    }

    /// The unit whose text this node borrows from.
    pub fn unit(self) -> UnitId {
        self.unit
    }

    pub fn is_root(self) -> bool {
        self.index == 0
    }
}

/// Stored form of a node's value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueData {
    None,
    Node(Vec<NodeIndex>),
    String(TextRange),
    Integer(u64),
    Decimal(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeData {
    pub(crate) name: TextRange,
    pub(crate) value: ValueData,
    pub(crate) notes: Vec<TextRange>,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) next: Option<NodeIndex>,
}

/// The parsed nodes of one source unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn get(&self, index: NodeIndex) -> Option<&NodeData> {
        self.nodes.get(index as usize)
    }

    pub(crate) fn node(&self, index: NodeIndex) -> &NodeData {
        &self.nodes[index as usize]
    }

    /// Reserve a slot for a node whose name is known but whose value and
    /// notes are parsed later. Returns its index.
    pub(crate) fn open(&mut self, name: TextRange, parent: Option<NodeIndex>) -> NodeIndex {
        let index = self.nodes.len() as NodeIndex;
        self.nodes.push(NodeData {
            name,
            value: ValueData::None,
            notes: Vec::new(),
            parent,
            next: None,
        });
        index
    }

    /// Fill in a node opened with [`Tree::open`]. For containers, this also
    /// links each child to the following one.
    pub(crate) fn close(&mut self, index: NodeIndex, value: ValueData, notes: Vec<TextRange>) {
        if let ValueData::Node(children) = &value {
            for pair in children.windows(2) {
                self.nodes[pair[0] as usize].next = Some(pair[1]);
            }
        }
        let node = &mut self.nodes[index as usize];
        node.value = value;
        node.notes = notes;
    }
}
