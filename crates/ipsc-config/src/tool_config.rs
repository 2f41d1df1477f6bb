use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ipsc_core::IPSC_UDP_PORT;

/// UDP socket the tool listens on in `--listen` mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfgListen {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for CfgListen {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: IPSC_UDP_PORT,
        }
    }
}

impl CfgListen {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CfgOutput {
    /// Treat unrecognized message types as decode failures
    pub strict: bool,
    /// Print the raw datagram before the decoded frame
    pub hexdump: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolConfig {
    /// Optional verbose log file, written at trace level
    pub debug_log: Option<String>,
    pub listen: CfgListen,
    pub output: CfgOutput,
}

impl ToolConfig {
    /// Checks values that parse fine but cannot be used
    pub fn validate(&self) -> Result<(), String> {
        if self.listen.port == 0 {
            return Err("listen.port must be nonzero".to_string());
        }
        if let Some(ref path) = self.debug_log {
            if path.trim().is_empty() {
                return Err("debug_log must not be empty".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ToolConfig::default();
        assert_eq!(cfg.listen.port, 51001);
        assert_eq!(cfg.listen.socket_addr().to_string(), "0.0.0.0:51001");
        assert!(!cfg.output.strict);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut cfg = ToolConfig::default();
        cfg.listen.port = 0;
        assert!(cfg.validate().is_err());
    }
}
