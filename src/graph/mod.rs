//! The pipeline graph model.
//!
//! In-memory description of the demo pipeline: typed nodes with
//! positions and labeled ports, and directed edges from output ports to
//! input ports with cached cubic paths. All state is ephemeral and
//! recreated from seed data on startup; nothing here persists.
//!
//! # Design
//!
//! - **Index ids** — `NodeId`/`EdgeId` are `u32` newtypes indexing flat
//!   vectors.
//! - **Total operations** — `move_node`/`toggle_collapse` treat unknown
//!   ids as silent no-ops; errors exist only for seed construction.
//! - **Cached paths** — edge paths are recomputed eagerly on node
//!   movement so rendering is a straight read.

pub mod edge;
pub mod id;
pub mod model;
pub mod node;
pub mod port;
pub mod seed;

pub use edge::{CubicPath, Edge, PortRef};
pub use id::{EdgeId, NodeId};
pub use model::GraphModel;
pub use node::{Node, NodeKind, NODE_HEADER_HEIGHT, NODE_WIDTH, PORT_ROW_HEIGHT};
pub use port::{Port, PortKind};
pub use seed::DemoGraph;
