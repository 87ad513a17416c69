//! Simulation-layer collaborators for tilesearch: a typed event bus and a
//! peer-to-peer message transport.

pub mod events;
pub mod net;

pub use events::{EventBus, ListenerId};
pub use net::{ConnectionStatus, Incoming, LoopbackPeer, Transport, read_messages};
