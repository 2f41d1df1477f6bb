use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::tool_config::{CfgListen, CfgOutput, ToolConfig};

/// Build `ToolConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref listen) = root.listen {
        if !listen.extra.is_empty() {
            return Err(format!("Unrecognized fields in listen: {:?}", sorted_keys(&listen.extra)).into());
        }
    }
    if let Some(ref output) = root.output {
        if !output.extra.is_empty() {
            return Err(format!("Unrecognized fields in output: {:?}", sorted_keys(&output.extra)).into());
        }
    }

    let mut cfg = ToolConfig {
        debug_log: root.debug_log,
        ..Default::default()
    };

    if let Some(listen) = root.listen {
        apply_listen_patch(&mut cfg.listen, listen);
    }
    if let Some(output) = root.output {
        apply_output_patch(&mut cfg.output, output);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Build `ToolConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `ToolConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    from_reader(f)
}

fn apply_listen_patch(dst: &mut CfgListen, src: ListenDto) {
    if let Some(v) = src.bind_addr {
        dst.bind_addr = v;
    }
    if let Some(v) = src.port {
        dst.port = v;
    }
}

fn apply_output_patch(dst: &mut CfgOutput, src: OutputDto) {
    if let Some(v) = src.strict {
        dst.strict = v;
    }
    if let Some(v) = src.hexdump {
        dst.hexdump = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    listen: Option<ListenDto>,

    #[serde(default)]
    output: Option<OutputDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct ListenDto {
    bind_addr: Option<IpAddr>,
    port: Option<u16>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct OutputDto {
    strict: Option<bool>,
    hexdump: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let cfg = from_toml_str("config_version = \"0.1\"\n").unwrap();
        assert_eq!(cfg, ToolConfig::default());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            config_version = "0.1"
            debug_log = "ipsc-debug.log"

            [listen]
            bind_addr = "127.0.0.1"
            port = 50000

            [output]
            strict = true
            hexdump = true
        "#;
        let cfg = from_reader(toml.as_bytes()).unwrap();
        assert_eq!(cfg.debug_log.as_deref(), Some("ipsc-debug.log"));
        assert_eq!(cfg.listen.socket_addr().to_string(), "127.0.0.1:50000");
        assert!(cfg.output.strict);
        assert!(cfg.output.hexdump);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let toml = r#"
            config_version = "0.1"
            [listen]
            bind_addr = "::1"
        "#;
        let cfg = from_toml_str(toml).unwrap();
        assert_eq!(cfg.listen.port, 51001);
        assert!(cfg.listen.bind_addr.is_ipv6());
    }

    #[test]
    fn test_wrong_version() {
        let err = from_toml_str("config_version = \"0.5\"\n").unwrap_err();
        assert!(err.to_string().contains("Unrecognized config_version"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = from_toml_str("config_version = \"0.1\"\nverbose = true\n").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized top-level fields: [\"verbose\"]");

        let toml = r#"
            config_version = "0.1"
            [output]
            hexdump = true
            colour = "auto"
        "#;
        let err = from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("output"));
    }

    #[test]
    fn test_port_zero_rejected() {
        let toml = r#"
            config_version = "0.1"
            [listen]
            port = 0
        "#;
        assert!(from_toml_str(toml).is_err());
    }
}
