use core::fmt;

use ipsc_core::{ByteBuffer, ByteWriter, IpscParseErr, bitfield};

use crate::enums::{ipsc_slot_state::IpscSlotState, peer_mode::PeerMode, peer_operation::PeerOperation};

pub const LINKING_PEER_OP_MASK: u8 = 0xc0;
pub const LINKING_PEER_MODE_MASK: u8 = 0x30;
pub const LINKING_SLOT1_MASK: u8 = 0x0c;
pub const LINKING_SLOT2_MASK: u8 = 0x03;

/// Linking byte of registration and keep-alive messages.
/// Announces the peer's operational state and per-timeslot IPSC state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linking {
    // 2
    pub peer_operation: PeerOperation,
    // 2
    pub peer_mode: PeerMode,
    // 2
    pub slot1: IpscSlotState,
    // 2
    pub slot2: IpscSlotState,
}

impl Linking {
    pub fn from_byte(byte: u8) -> Self {
        Linking {
            peer_operation: PeerOperation::from_raw(bitfield::extract(byte, LINKING_PEER_OP_MASK)),
            peer_mode: PeerMode::from_raw(bitfield::extract(byte, LINKING_PEER_MODE_MASK)),
            slot1: IpscSlotState::from_raw(bitfield::extract(byte, LINKING_SLOT1_MASK)),
            slot2: IpscSlotState::from_raw(bitfield::extract(byte, LINKING_SLOT2_MASK)),
        }
    }

    pub fn to_byte(&self) -> u8 {
        let mut b = 0;
        b = bitfield::insert(b, LINKING_PEER_OP_MASK, self.peer_operation.into_raw());
        b = bitfield::insert(b, LINKING_PEER_MODE_MASK, self.peer_mode.into_raw());
        b = bitfield::insert(b, LINKING_SLOT1_MASK, self.slot1.into_raw());
        bitfield::insert(b, LINKING_SLOT2_MASK, self.slot2.into_raw())
    }

    pub fn from_bytebuf(buf: &mut ByteBuffer) -> Result<Self, IpscParseErr> {
        Ok(Self::from_byte(buf.read_u8("linking")?))
    }

    pub fn to_bytebuf(&self, buf: &mut ByteWriter) {
        buf.write_u8(self.to_byte());
    }
}

impl fmt::Display for Linking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Linking {{ peer_op: {} peer_mode: {} slot1: {} slot2: {} }}",
            self.peer_operation, self.peer_mode, self.slot1, self.slot2
        )
    }
}
