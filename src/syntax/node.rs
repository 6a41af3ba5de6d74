//! Borrowed views over parsed nodes.
//!
//! A [`NodeRef`] pairs a [`NodeId`] with the slice of units it lives in.
//! Every accessor resolves ranges against the owning unit's text, so names
//! and string values come back as `&str` borrowed for as long as the units.

use std::fmt;

use super::file::SourceUnit;
use super::tree::{NodeData, NodeId, NodeIndex, ValueData};
use crate::base::{TextRange, UnitId};

/// The kind of value a node carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    None,
    Node,
    String,
    Integer,
    Decimal,
}

/// A node's value.
#[derive(Debug, Clone)]
pub enum Value<'c> {
    /// Bare name: `vsync`.
    None,
    /// Container: `graphics { ... }`. The list may be empty.
    Node(Children<'c>),
    /// Quoted string without the quotes: `title "main menu"`.
    String(&'c str),
    /// `refresh 60`, `limit 1_000`.
    Integer(u64),
    /// `scale 1.5`.
    Decimal(f64),
}

impl<'c> Value<'c> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Node(_) => ValueKind::Node,
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Decimal(_) => ValueKind::Decimal,
        }
    }

    pub fn as_str(&self) -> Option<&'c str> {
        match self {
            Value::String(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_children(&self) -> Option<Children<'c>> {
        match self {
            Value::Node(children) => Some(children.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("none"),
            Value::Node(_) => f.write_str("{..}"),
            Value::String(s) => f.write_str(s),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v:.1}"),
        }
    }
}

/// A name-only annotation (`@mutable`) attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRef<'c> {
    name: &'c str,
    index: usize,
}

impl<'c> NoteRef<'c> {
    pub fn name(&self) -> &'c str {
        self.name
    }

    /// Position of the note in its node's note list.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A node inside a set of loaded units.
#[derive(Clone, Copy)]
pub struct NodeRef<'c> {
    units: &'c [SourceUnit],
    id: NodeId,
}

impl<'c> NodeRef<'c> {
    /// View `id` inside `units`, if it exists there.
    pub fn new(units: &'c [SourceUnit], id: NodeId) -> Option<Self> {
        units
            .get(id.unit.index())
            .and_then(|unit| unit.tree().get(id.index))
            .map(|_| Self { units, id })
    }

    fn at(&self, index: NodeIndex) -> Self {
        Self {
            units: self.units,
            id: NodeId::new(self.id.unit, index),
        }
    }

    fn unit(&self) -> &'c SourceUnit {
        &self.units[self.id.unit.index()]
    }

    fn data(&self) -> &'c NodeData {
        // Ids are checked in `new` and only derived from stored links after that.
        self.unit().tree().node(self.id.index)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The unit this node was parsed from.
    pub fn source_unit(&self) -> &'c SourceUnit {
        self.unit()
    }

    pub fn name(&self) -> &'c str {
        self.unit().slice(self.data().name)
    }

    /// Byte range of the name in the unit text.
    pub fn name_range(&self) -> TextRange {
        self.data().name
    }

    pub fn value(&self) -> Value<'c> {
        match &self.data().value {
            ValueData::None => Value::None,
            ValueData::Node(children) => Value::Node(Children {
                units: self.units,
                unit: self.id.unit,
                indices: children.iter(),
            }),
            ValueData::String(range) => Value::String(self.unit().slice(*range)),
            ValueData::Integer(v) => Value::Integer(*v),
            ValueData::Decimal(v) => Value::Decimal(*v),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match &self.data().value {
            ValueData::None => ValueKind::None,
            ValueData::Node(_) => ValueKind::Node,
            ValueData::String(_) => ValueKind::String,
            ValueData::Integer(_) => ValueKind::Integer,
            ValueData::Decimal(_) => ValueKind::Decimal,
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind() == ValueKind::Node
    }

    /// Enclosing container, or `None` for a root.
    pub fn parent(&self) -> Option<NodeRef<'c>> {
        self.data().parent.map(|index| self.at(index))
    }

    /// Following sibling. For a root, the root of the next loaded unit.
    pub fn next(&self) -> Option<NodeRef<'c>> {
        if self.id.is_root() {
            let unit = UnitId::new(self.id.unit.index() + 1);
            return NodeRef::new(self.units, NodeId::root_of(unit));
        }
        self.data().next.map(|index| self.at(index))
    }

    /// Children of a container; empty for every other kind.
    pub fn children(&self) -> Children<'c> {
        let empty: &'c [NodeIndex] = &[];
        let indices = match &self.data().value {
            ValueData::Node(children) => children.iter(),
            _ => empty.iter(),
        };
        Children {
            units: self.units,
            unit: self.id.unit,
            indices,
        }
    }

    /// First child named `name`.
    pub fn child(&self, name: &str) -> Option<NodeRef<'c>> {
        self.children().find(|child| child.name() == name)
    }

    /// Nodes after this one in its sibling list, this node excluded.
    pub fn following_siblings(&self) -> Siblings<'c> {
        Siblings {
            current: Some(*self),
        }
    }

    /// Notes in the order they were written.
    pub fn notes(&self) -> impl Iterator<Item = NoteRef<'c>> + use<'c> {
        let unit = self.unit();
        self.data()
            .notes
            .iter()
            .enumerate()
            .map(move |(index, range)| NoteRef {
                name: unit.slice(*range),
                index,
            })
    }

    /// First note named exactly `name`.
    pub fn has_note(&self, name: &str) -> Option<NoteRef<'c>> {
        self.notes().find(|note| note.name() == name)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.units, other.units)
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    /// `name: value`, as printed by the demo program.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.value())
    }
}

/// Iterator over the children of a container node.
#[derive(Debug, Clone)]
pub struct Children<'c> {
    units: &'c [SourceUnit],
    unit: UnitId,
    indices: std::slice::Iter<'c, NodeIndex>,
}

impl<'c> Iterator for Children<'c> {
    type Item = NodeRef<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.next()?;
        Some(NodeRef {
            units: self.units,
            id: NodeId::new(self.unit, index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Children<'_> {}

/// Iterator following `next` links, see [`NodeRef::following_siblings`].
#[derive(Debug, Clone)]
pub struct Siblings<'c> {
    current: Option<NodeRef<'c>>,
}

impl<'c> Iterator for Siblings<'c> {
    type Item = NodeRef<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current?.next();
        self.current = next;
        next
    }
}
