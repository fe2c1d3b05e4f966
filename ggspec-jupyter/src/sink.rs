//! Display sink that queues plots for the IOPub publisher

use serde_json::{json, Value};
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

use ggspec::display::DisplaySink;
use ggspec::writer::{MimeBundleWriter, Writer};
use ggspec::{Options, PlotError};

use crate::error::KernelError;
use crate::message::JupyterMessage;

/// Turns plot documents into `display_data` messages
///
/// Messages are handed to an unbounded channel; the publisher task owning
/// the socket sends them in order.
pub struct JupyterSink {
    session: String,
    writer: MimeBundleWriter,
    sender: UnboundedSender<JupyterMessage>,
    parent_header: Mutex<Value>,
}

impl JupyterSink {
    pub fn new(
        session: impl Into<String>,
        writer: MimeBundleWriter,
        sender: UnboundedSender<JupyterMessage>,
    ) -> Self {
        Self {
            session: session.into(),
            writer,
            sender,
            parent_header: Mutex::new(json!({})),
        }
    }

    /// Attribute following messages to a request, e.g. the running cell
    pub fn set_parent(&self, header: Value) {
        *self
            .parent_header
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = header;
    }

    pub fn session(&self) -> &str {
        &self.session
    }
}

impl DisplaySink for JupyterSink {
    fn display(&self, document: &Options) -> ggspec::Result<()> {
        let bundle = self.writer.write(document)?;
        let parent = self
            .parent_header
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let message = JupyterMessage::display_data(&self.session, parent, bundle);
        tracing::debug!(msg_id = %message.header.msg_id, "queueing display_data");
        self.sender
            .send(message)
            .map_err(|_| PlotError::from(KernelError::ChannelClosed))
    }

    fn name(&self) -> &'static str {
        "jupyter"
    }
}
