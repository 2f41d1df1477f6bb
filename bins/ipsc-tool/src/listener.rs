use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Largest datagram we accept
const MAX_DATAGRAM: usize = 65536;

#[derive(Debug)]
pub enum ListenError {
    BindFailed(String),
    ReceiveFailed(String),
}

impl std::fmt::Display for ListenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenError::BindFailed(msg) => write!(f, "Bind failed: {}", msg),
            ListenError::ReceiveFailed(msg) => write!(f, "Receive failed: {}", msg),
        }
    }
}

impl std::error::Error for ListenError {}

/// Receives IPSC datagrams until told to stop
pub struct UdpListener {
    socket: UdpSocket,
}

impl UdpListener {
    pub fn bind(addr: SocketAddr) -> Result<Self, ListenError> {
        let socket = UdpSocket::bind(addr).map_err(|e| ListenError::BindFailed(format!("{}: {}", addr, e)))?;
        // Short timeout so the running flag is polled regularly
        socket
            .set_read_timeout(Some(Duration::from_millis(100)))
            .map_err(|e| ListenError::BindFailed(format!("Failed to set timeout: {}", e)))?;
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr().ok()
    }

    /// Calls `handler` for every datagram until `running` is cleared
    pub fn run<F: FnMut(&[u8], SocketAddr)>(&self, running: Arc<AtomicBool>, mut handler: F) -> Result<(), ListenError> {
        let mut buffer = vec![0u8; MAX_DATAGRAM];
        while running.load(Ordering::SeqCst) {
            match self.socket.recv_from(&mut buffer) {
                Ok((len, addr)) => handler(&buffer[..len], addr),
                Err(e) if matches!(e.kind(), std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut) => {}
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(ListenError::ReceiveFailed(e.to_string())),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_receive_and_stop() {
        let listener = UdpListener::bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let running = Arc::new(AtomicBool::new(true));

        let sender = thread::spawn(move || {
            let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
            socket.send_to(&[0x85, 0x00, 0x00, 0x30, 0x39], addr).unwrap();
        });

        let mut received = Vec::new();
        let r = running.clone();
        listener
            .run(running, |data, _| {
                received.push(data.to_vec());
                r.store(false, Ordering::SeqCst);
            })
            .unwrap();
        sender.join().unwrap();
        assert_eq!(received, vec![vec![0x85, 0x00, 0x00, 0x30, 0x39]]);
    }
}
