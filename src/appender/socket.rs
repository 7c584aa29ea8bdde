use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use crate::appender::AppenderError;
use crate::conf::{ConfError, ConfNode};

const DEFAULT_DEST: &str = "127.0.0.1";
const DEFAULT_DESTPORT: u16 = 6000;

/// Network sink: one UDP datagram per rendered line, fire-and-forget.
///
/// The socket is non-blocking; a full send buffer surfaces as an I/O error
/// and the line is dropped (logging is best effort, never retried).
#[derive(Debug)]
pub struct SocketBackend {
    dest: String,
    destport: u16,
    socket: Option<(UdpSocket, SocketAddr)>,
}

impl SocketBackend {
    pub(crate) fn from_node(node: &ConfNode) -> Result<Self, ConfError> {
        let dest = node
            .attr_non_empty("dest")
            .unwrap_or(DEFAULT_DEST)
            .to_string();
        let destport = match node.attr_non_empty("destport") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfError::BadValue {
                attr: "destport",
                value: raw.to_string(),
            })?,
            None => DEFAULT_DESTPORT,
        };
        Ok(Self {
            dest,
            destport,
            socket: None,
        })
    }

    pub(crate) fn open(&mut self) -> Result<(), AppenderError> {
        if self.socket.is_some() {
            return Ok(());
        }
        let addr = (self.dest.as_str(), self.destport)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                AppenderError::Io(std::io::Error::new(
                    std::io::ErrorKind::AddrNotAvailable,
                    format!("cannot resolve {}:{}", self.dest, self.destport),
                ))
            })?;
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.set_nonblocking(true)?;
        self.socket = Some((socket, addr));
        Ok(())
    }

    pub(crate) fn append(&mut self, line: &str) -> Result<(), AppenderError> {
        let (socket, addr) = self.socket.as_ref().ok_or(AppenderError::NotOpen)?;
        socket.send_to(line.as_bytes(), addr)?;
        Ok(())
    }

    pub(crate) fn close(&mut self) -> Result<(), AppenderError> {
        self.socket = None;
        Ok(())
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.socket.is_some()
    }

    pub(crate) fn dest(&self) -> (&str, u16) {
        (&self.dest, self.destport)
    }
}
