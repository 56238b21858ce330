//! # Devserve
//!
//! A small local development server: picks the first free TCP port from a
//! fixed preference list and serves a directory tree over plain HTTP.
//!
//! This crate provides three building blocks and one driver:
//!
//! 1. **Port selection** - probe the candidate ports in preference order and
//!    take the first one nothing is listening on.
//!
//! 2. **Root resolution** - turn the requested path into an absolute
//!    directory, rejecting anything that does not exist or is not a directory.
//!
//! 3. **Serving** - expose the directory on all interfaces with a standard
//!    static file handler until the operator interrupts the process.
//!
//! ## Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), devserve::ServeError> {
//!     // Serve the current directory on the first free preferred port.
//!     devserve::run(".").await
//! }
//! ```

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use axum::Router;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tower_http::services::ServeDir;

/// Preferred port, tried first.
pub const PORT_PRIMARY: u16 = 4000;

/// Fallback port, tried when the primary is occupied.
pub const PORT_FALLBACK: u16 = 3960;

/// Errors that end the server before (or while) it is listening.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("'{0}' is not a valid directory")]
    InvalidRoot(PathBuf),

    #[error("both candidate ports are in use")]
    NoPortAvailable,

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks whether something is already listening on a local port.
///
/// Uses a short-lived connect-probe rather than a bind attempt: a successful
/// connection means the port is taken, a refusal means it is free. There is a
/// small window between probe and bind, which is fine for a dev tool.
pub async fn port_in_use(port: u16) -> bool {
    TcpStream::connect(("127.0.0.1", port)).await.is_ok()
}

/// Returns the first candidate port with no listener on it.
///
/// Candidates are probed strictly in order and the first free one wins;
/// occupied candidates are reported to the operator as they are skipped.
///
/// # Arguments
///
/// * `candidates` - Port numbers in preference order
pub async fn select_port(candidates: &[u16]) -> Option<u16> {
    for &port in candidates {
        if port_in_use(port).await {
            println!("Port {port} is in use.");
        } else {
            return Some(port);
        }
    }
    None
}

/// Resolves a requested serve root to an absolute directory path.
///
/// # Errors
///
/// Returns [`ServeError::InvalidRoot`] naming the path when it does not exist
/// or is not a directory.
pub fn resolve_root(path: impl AsRef<Path>) -> Result<PathBuf, ServeError> {
    let path = path.as_ref();
    let root = path
        .canonicalize()
        .map_err(|_| ServeError::InvalidRoot(path.to_path_buf()))?;

    if !root.is_dir() {
        return Err(ServeError::InvalidRoot(root));
    }

    Ok(root)
}

/// Serves a directory over HTTP until the process is interrupted.
///
/// Binds all interfaces on `port` and hands every request to a static file
/// handler rooted at `root`. The working directory is never changed; the root
/// is passed to the handler explicitly. The port is trusted to have been
/// selected beforehand and is not re-validated here.
///
/// # Arguments
///
/// * `root` - Absolute path of the directory to expose
/// * `port` - The port to listen on
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails while
/// accepting connections. A Ctrl+C interrupt is a clean shutdown, not an
/// error.
pub async fn serve(root: &Path, port: u16) -> Result<(), ServeError> {
    let app = Router::new().fallback_service(ServeDir::new(root));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    println!("Serving '{}' at http://localhost:{port}", root.display());
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server stopped by user");
    Ok(())
}

/// Completes when the operator interrupts the process.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No interrupt handler available; serve until the process is killed.
        std::future::pending::<()>().await;
    }
}

/// Resolves the serve root, picks a port, and serves until interrupted.
///
/// This is the whole program: both binaries are thin wrappers around it. The
/// port preference list is fixed at [`PORT_PRIMARY`] then [`PORT_FALLBACK`].
///
/// # Errors
///
/// Returns [`ServeError::InvalidRoot`] for a bad path,
/// [`ServeError::NoPortAvailable`] when both preferred ports are occupied
/// (no bind is attempted in that case), or an I/O error from the server.
pub async fn run(path: impl AsRef<Path>) -> Result<(), ServeError> {
    let root = resolve_root(path)?;

    let port = select_port(&[PORT_PRIMARY, PORT_FALLBACK])
        .await
        .ok_or(ServeError::NoPortAvailable)?;

    println!("Server starting on port {port}");
    serve(&root, port).await
}
