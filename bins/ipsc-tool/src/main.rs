use clap::Parser;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ipsc_config::{CfgOutput, ToolConfig, toml_config};
use ipsc_core::{IpscParseErr, bytebuffer, debug};
use ipsc_pdus::decode;

mod hexparse;
mod listener;

use listener::UdpListener;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "MotoTrbo IPSC Decoder",
    long_about = "Decodes MotoTrbo IP Site Connect datagrams from a hex string, a hex dump file, or a UDP socket"
)]
struct Args {
    /// Hex encoded datagram
    #[arg(help = "Datagram as hex; whitespace and ':' separators are allowed")]
    hex: Option<String>,

    #[arg(short = 'f', long = "file", help = "File with one hex datagram per line, '#' starts a comment")]
    file: Option<String>,

    #[arg(short = 'l', long = "listen", help = "Decode datagrams received on the configured UDP socket until Ctrl+C")]
    listen: bool,

    #[arg(short = 'c', long = "config", help = "TOML config file")]
    config: Option<String>,

    #[arg(long = "strict", help = "Treat unrecognized message types as errors")]
    strict: bool,

    #[arg(long = "hexdump", help = "Print the raw datagram before the decoded frame")]
    hexdump: bool,
}

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> ToolConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

/// Decode one datagram and print it. Returns the decode error, if any.
fn decode_and_print(data: &[u8], output: &CfgOutput) -> Result<(), IpscParseErr> {
    if output.hexdump {
        println!("{} bytes: {}", data.len(), bytebuffer::dump_hex(data));
    }
    let frame = decode(data)?;
    if output.strict {
        frame.check_recognized()?;
    }
    println!("{}", frame);
    Ok(())
}

/// Returns the number of frames that failed to decode
fn run_hex(hex: &str, output: &CfgOutput) -> usize {
    match hexparse::parse_hex(hex) {
        Ok(data) => match decode_and_print(&data, output) {
            Ok(()) => 0,
            Err(e) => {
                tracing::warn!("decode failed: {}", e);
                1
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Returns the number of frames that failed to decode
fn run_file(path: &str, output: &CfgOutput) -> usize {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut failures = 0;
    for (line, parsed) in hexparse::parse_hex_lines(&contents) {
        print!("{}:{}: ", path, line);
        let result = parsed.and_then(|data| decode_and_print(&data, output).map_err(|e| e.to_string()));
        if let Err(e) = result {
            println!("error: {}", e);
            tracing::warn!("{}:{}: {}", path, line, e);
            failures += 1;
        }
    }
    failures
}

fn run_listen(cfg: &ToolConfig) {
    let addr = cfg.listen.socket_addr();
    let listener = match UdpListener::bind(addr) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!(" -> Listening on {}", addr);

    // Set up Ctrl+C handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    }) {
        eprintln!("Failed to set Ctrl+C handler: {}", e);
        std::process::exit(1);
    }

    let result = listener.run(running, |data, from| {
        print!("{} ", from);
        if let Err(e) = decode_and_print(data, &cfg.output) {
            println!("error: {}", e);
            tracing::warn!("{}: decode failed: {}", from, e);
        }
    });
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    eprintln!("[+] MotoTrbo IPSC decoder");

    let args = Args::parse();

    let mut cfg = match args.config {
        Some(ref path) => load_config_from_toml(path),
        None => ToolConfig::default(),
    };
    cfg.output.strict |= args.strict;
    cfg.output.hexdump |= args.hexdump;

    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    let failures = if args.listen {
        run_listen(&cfg);
        0
    } else if let Some(ref path) = args.file {
        run_file(path, &cfg.output)
    } else if let Some(ref hex) = args.hex {
        run_hex(hex, &cfg.output)
    } else {
        eprintln!("Error: nothing to decode. Pass a hex string, --file or --listen");
        std::process::exit(2);
    };

    if failures > 0 {
        std::process::exit(1);
    }
}
