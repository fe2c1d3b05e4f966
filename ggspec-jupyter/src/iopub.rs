//! IOPub publisher task
//!
//! A Jupyter kernel binds its IOPub socket exactly once. A kernel that wants
//! plots published through this crate hands its bound `PubSocket` over with
//! [`IoPubPublisher::new`] and [`start_with`]. [`IoPubPublisher::bind`] and
//! [`start`] bind the port named in the connection file themselves and are
//! only for processes that own the IOPub endpoint and have not bound it yet.
//!
//! Kernels that keep their socket can skip the publisher entirely: build a
//! [`JupyterSink`] on their own channel and send each received message with
//! [`JupyterMessage::to_frames`].

use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use zeromq::{PubSocket, Socket, SocketSend, ZmqMessage};

use ggspec::writer::MimeBundleWriter;
use ggspec::FrontendConfig;

use crate::connection::ConnectionInfo;
use crate::error::Result;
use crate::message::{JupyterMessage, Signer};
use crate::sink::JupyterSink;

/// Owns the IOPub socket and sends queued messages
pub struct IoPubPublisher {
    socket: PubSocket,
    signer: Signer,
}

impl IoPubPublisher {
    /// Publish on a socket that is already bound
    pub fn new(socket: PubSocket, signer: Signer) -> Self {
        Self { socket, signer }
    }

    /// Bind the IOPub endpoint of the connection file
    ///
    /// Fails with an address-in-use error when the kernel has bound it.
    pub async fn bind(info: &ConnectionInfo) -> Result<Self> {
        let endpoint = info.iopub_endpoint();
        let mut socket = PubSocket::new();
        let bound = socket.bind(&endpoint).await?;
        tracing::info!(%bound, "IOPub socket bound");
        Ok(Self::new(socket, Signer::new(info.key.as_bytes())))
    }

    pub async fn send(&mut self, message: &JupyterMessage) -> Result<()> {
        let mut frames = message.to_frames(&self.signer)?.into_iter();
        let Some(topic) = frames.next() else {
            return Ok(());
        };
        let mut zmq_message = ZmqMessage::from(topic);
        for frame in frames {
            zmq_message.push_back(frame);
        }
        self.socket.send(zmq_message).await?;
        tracing::debug!(msg_id = %message.header.msg_id, msg_type = message.msg_type(), "published");
        Ok(())
    }

    /// Send messages until every sender is dropped
    pub async fn run(mut self, mut receiver: UnboundedReceiver<JupyterMessage>) -> Result<()> {
        while let Some(message) = receiver.recv().await {
            self.send(&message).await?;
        }
        tracing::debug!("IOPub channel closed, publisher stopping");
        Ok(())
    }
}

/// Spawn the publisher task on an existing publisher
///
/// Returns the sink to display plots through and the publisher's handle.
/// The task ends once the sink and all its clones are dropped.
pub fn start_with(
    publisher: IoPubPublisher,
    config: &FrontendConfig,
) -> (Arc<JupyterSink>, JoinHandle<Result<()>>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let session = uuid::Uuid::new_v4().to_string();
    let sink = Arc::new(JupyterSink::new(
        session,
        MimeBundleWriter::from_config(config),
        sender,
    ));
    let handle = tokio::spawn(publisher.run(receiver));
    (sink, handle)
}

/// Bind the IOPub port of the connection file and spawn the publisher task
///
/// The caller must not bind the same port itself; a kernel that already
/// owns its IOPub socket uses [`start_with`].
pub async fn start(
    info: &ConnectionInfo,
    config: &FrontendConfig,
) -> Result<(Arc<JupyterSink>, JoinHandle<Result<()>>)> {
    let publisher = IoPubPublisher::bind(info).await?;
    Ok(start_with(publisher, config))
}
