//! Jupyter display integration for ggspec
//!
//! Publishes plots to a running Jupyter kernel: each displayed plot becomes
//! a signed `display_data` message on the kernel's IOPub socket, carrying
//! the notebook MIME bundle (`text/html` plus `application/plot+json`).
//!
//! A kernel hands its bound IOPub socket to the publisher:
//!
//! ```rust,ignore
//! let info = ConnectionInfo::from_file("kernel-1234.json")?;
//! let publisher = IoPubPublisher::new(iopub_socket, Signer::new(info.key.as_bytes()));
//! let (sink, handle) = start_with(publisher, &FrontendConfig::default());
//! ggspec::display::install(RenderContext::new(sink))?;
//! ```
//!
//! [`start`] binds the IOPub port itself and is for processes that own the
//! endpoint without having bound it.

pub mod connection;
pub mod error;
pub mod iopub;
pub mod message;
pub mod sink;

pub use connection::ConnectionInfo;
pub use error::{KernelError, Result};
pub use iopub::{start, start_with, IoPubPublisher};
pub use message::{Header, JupyterMessage, Signer};
pub use sink::JupyterSink;
