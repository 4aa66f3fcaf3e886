//! SSH host key scanning.

use crate::encoding::known_hosts_line;
use gitsecret_types::{GitSecretError, Result};
use ssh_key::PublicKey;
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Port assumed when a host string carries none.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Split `host:port` or `[host]:port`. Returns None when no port is present.
pub fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        let port = tail.strip_prefix(':')?;
        return Some((host, port));
    }

    let (host, port) = addr.rsplit_once(':')?;
    // A bare IPv6 literal has colons but no port.
    if host.contains(':') {
        return None;
    }
    Some((host, port))
}

/// Append [`DEFAULT_SSH_PORT`] unless `host` already names a port.
pub fn with_default_port(host: &str) -> String {
    if split_host_port(host).is_some() {
        host.to_string()
    } else if host.starts_with('[') && host.ends_with(']') {
        format!("{}:{}", host, DEFAULT_SSH_PORT)
    } else if host.contains(':') {
        format!("[{}]:{}", host, DEFAULT_SSH_PORT)
    } else {
        format!("{}:{}", host, DEFAULT_SSH_PORT)
    }
}

/// Host field of a known-hosts line: `host` on port 22, `[host]:port`
/// otherwise.
pub fn known_hosts_host(addr: &str) -> String {
    match split_host_port(addr) {
        Some((host, port)) if port == DEFAULT_SSH_PORT.to_string() => host.to_string(),
        Some((host, port)) => format!("[{}]:{}", host, port),
        None => addr.to_string(),
    }
}

/// Connect to the SSH server at `host` (`host:port`) and return its host key
/// as a known-hosts line.
///
/// `timeout` is a single deadline covering name resolution, the TCP connect
/// and the SSH handshake.
pub fn scan_host_key(host: &str, timeout: Duration) -> Result<Vec<u8>> {
    let fail = |reason: String| GitSecretError::HostKeyScan {
        host: host.to_string(),
        reason,
    };
    let deadline = Instant::now() + timeout;

    let addrs = resolve(host, timeout).map_err(|e| fail(e.to_string()))?;
    let stream = connect(&addrs, deadline).map_err(|e| fail(e.to_string()))?;

    let remaining = remaining(deadline).map_err(|e| fail(e.to_string()))?;
    stream
        .set_read_timeout(Some(remaining))
        .and_then(|_| stream.set_write_timeout(Some(remaining)))
        .map_err(|e| fail(e.to_string()))?;

    let mut session = ssh2::Session::new().map_err(|e| fail(e.to_string()))?;
    session.set_timeout(u32::try_from(remaining.as_millis()).unwrap_or(u32::MAX));
    session.set_tcp_stream(stream);
    session.handshake().map_err(|e| fail(e.to_string()))?;

    let (blob, _) = session
        .host_key()
        .ok_or_else(|| fail("server presented no host key".to_string()))?;

    host_key_to_known_hosts(host, blob)
}

/// Encode a host key blob in SSH wire format as the known-hosts line for
/// `host` (`host:port`).
pub fn host_key_to_known_hosts(host: &str, blob: &[u8]) -> Result<Vec<u8>> {
    let key = PublicKey::from_bytes(blob).map_err(|e| GitSecretError::HostKeyScan {
        host: host.to_string(),
        reason: format!("unreadable host key: {}", e),
    })?;

    debug!(host = %host, algorithm = %key.algorithm(), "scanned host key");

    known_hosts_line(&known_hosts_host(host), &key)
}

fn resolve(host: &str, timeout: Duration) -> io::Result<Vec<SocketAddr>> {
    let (tx, rx) = mpsc::channel();
    let target = host.to_string();
    // The lookup thread is left behind if it outlives the deadline.
    thread::spawn(move || {
        let _ = tx.send(target.to_socket_addrs().map(|addrs| addrs.collect()));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            "timed out resolving host",
        )),
        Err(RecvTimeoutError::Disconnected) => Err(io::Error::new(
            io::ErrorKind::Other,
            "host resolution aborted",
        )),
    }
}

fn remaining(deadline: Instant) -> io::Result<Duration> {
    let left = deadline.saturating_duration_since(Instant::now());
    if left.is_zero() {
        return Err(io::Error::new(io::ErrorKind::TimedOut, "scan timed out"));
    }
    Ok(left)
}

fn connect(addrs: &[SocketAddr], deadline: Instant) -> io::Result<TcpStream> {
    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "host resolved to no addresses");

    for addr in addrs {
        match TcpStream::connect_timeout(addr, remaining(deadline)?) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                debug!(%addr, error = %e, "connect failed");
                last_err = e;
            }
        }
    }

    Err(last_err)
}
