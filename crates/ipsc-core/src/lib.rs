//! Core utilities for the IPSC decoder
//!
//! This crate provides the building blocks shared by the IPSC PDU decoders:
//! - ByteBuffer / ByteWriter for bounds-checked big-endian field access
//! - Bitfield helpers for sub-byte fields
//! - The parse error type and its helper macros
//! - Logging setup

pub mod bitfield;
pub mod bytebuffer;
pub mod debug;
pub mod error;

// Re-export commonly used items
pub use bytebuffer::{ByteBuffer, ByteSpan, ByteWriter};
pub use error::IpscParseErr;

/// Conventional UDP port on which repeaters exchange IPSC traffic
pub const IPSC_UDP_PORT: u16 = 51001;

/// Size of the trailing authentication digest carried by most IPSC messages
pub const DIGEST_LEN: usize = 10;
