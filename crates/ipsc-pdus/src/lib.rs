//! Decoders and composers for MotoTrbo IP Site Connect (IPSC) messages.
//!
//! `frame::decode` is the entry point: it reads the leading type byte and hands
//! the buffer to the matching message decoder in `pdus`. Sub-structures shared
//! between messages live in `fields`, value enumerations in `enums`.

pub mod enums;
pub mod fields;
pub mod frame;
pub mod labels;
pub mod pdus;

pub use frame::{Frame, decode};
