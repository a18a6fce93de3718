//! Port descriptors for the graph nodes.
//!
//! Each node declares an ordered list of input and output ports. The
//! port index within its list determines the vertical anchor offset
//! used when routing edge paths.

/// Semantic tag for the data a port carries. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
    /// Prompt or completion text.
    Text,
    /// Structured payloads (JSON, embeddings, rows).
    Data,
    /// Control/trigger events.
    Signal,
}

/// A single port on a node.
///
/// `connected` is derived from the edge list when edges are added; it
/// drives the filled/hollow socket rendering and nothing else.
#[derive(Debug, Clone)]
pub struct Port {
    pub name: &'static str,
    pub kind: PortKind,
    pub connected: bool,
}

impl Port {
    pub const fn new(name: &'static str, kind: PortKind) -> Self {
        Self {
            name,
            kind,
            connected: false,
        }
    }
}
