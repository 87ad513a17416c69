//! Peer-to-peer message transport interface.
//!
//! The game layer talks to a [`Transport`]: it sends opaque payloads and
//! drains incoming messages once per frame with [`read_messages`]. Real
//! network peers live outside this crate; [`LoopbackPeer`] connects two
//! endpoints in-process for local play and tests.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use log::{debug, info};

/// Connection state as reported by a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

/// A message pulled from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    /// The connection changed state.
    Status(ConnectionStatus),
    /// Application payload from the remote peer.
    Data(Vec<u8>),
    /// Diagnostic text from the transport itself.
    Log(String),
}

/// A bidirectional connection to a single remote peer.
pub trait Transport {
    /// Send `payload` to the peer. Returns `false`, sending nothing, when no
    /// peer is connected.
    fn send(&mut self, payload: &[u8]) -> bool;

    /// Next pending message, if any. Never blocks.
    fn poll(&mut self) -> Option<Incoming>;

    /// Whether a peer is currently connected.
    fn is_connected(&self) -> bool;

    /// Close the connection, telling the peer why.
    fn shutdown(&mut self, reason: &str);

    /// Send a UTF-8 string payload.
    fn send_str(&mut self, msg: &str) -> bool {
        self.send(msg.as_bytes())
    }
}

/// Drain every pending message from `transport`.
///
/// Data goes to `on_data`, status changes to `on_status`, and transport
/// diagnostics to the `log` facade at info level. Returns the number of
/// messages handled. Call once per game-loop iteration.
pub fn read_messages<T: Transport + ?Sized>(
    transport: &mut T,
    mut on_data: impl FnMut(&[u8]),
    mut on_status: impl FnMut(ConnectionStatus),
) -> usize {
    let mut handled = 0;
    while let Some(msg) = transport.poll() {
        match msg {
            Incoming::Data(bytes) => on_data(bytes.as_slice()),
            Incoming::Status(status) => on_status(status),
            Incoming::Log(text) => info!("transport: {}", text),
        }
        handled += 1;
    }
    handled
}

// ---------------------------------------------------------------------------
// LoopbackPeer
// ---------------------------------------------------------------------------

/// One end of an in-process connection created by [`LoopbackPeer::pair`].
///
/// Each end first observes `Status(Connected)` from [`poll`](Transport::poll)
/// and only counts as connected after that, like a real peer whose handshake
/// completes asynchronously.
#[derive(Debug)]
pub struct LoopbackPeer {
    tx: Sender<Incoming>,
    rx: Receiver<Incoming>,
    connected: bool,
}

impl LoopbackPeer {
    /// Two connected endpoints.
    pub fn pair() -> (LoopbackPeer, LoopbackPeer) {
        let (tx_a, rx_b) = mpsc::channel();
        let (tx_b, rx_a) = mpsc::channel();
        // The receivers are alive, so these cannot fail.
        let _ = tx_a.send(Incoming::Status(ConnectionStatus::Connected));
        let _ = tx_b.send(Incoming::Status(ConnectionStatus::Connected));
        (
            LoopbackPeer {
                tx: tx_a,
                rx: rx_a,
                connected: false,
            },
            LoopbackPeer {
                tx: tx_b,
                rx: rx_b,
                connected: false,
            },
        )
    }
}

impl Transport for LoopbackPeer {
    fn send(&mut self, payload: &[u8]) -> bool {
        if !self.connected {
            return false;
        }
        if self.tx.send(Incoming::Data(payload.to_vec())).is_err() {
            debug!("loopback peer dropped, send failed");
            self.connected = false;
            return false;
        }
        true
    }

    fn poll(&mut self) -> Option<Incoming> {
        match self.rx.try_recv() {
            Ok(msg) => {
                if let Incoming::Status(status) = msg {
                    self.connected = status == ConnectionStatus::Connected;
                }
                Some(msg)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if self.connected {
                    self.connected = false;
                    Some(Incoming::Status(ConnectionStatus::Disconnected))
                } else {
                    None
                }
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn shutdown(&mut self, reason: &str) {
        debug!("loopback shutdown: {}", reason);
        let _ = self.tx.send(Incoming::Log(format!("peer shut down: {}", reason)));
        let _ = self.tx.send(Incoming::Status(ConnectionStatus::Disconnected));
        self.connected = false;
    }
}
