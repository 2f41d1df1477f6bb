/// IPSC message type, carried in the first byte of every datagram
/// Bits: 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IpscMsgType {
    CallCtl1 = 0x61,
    CallCtl2 = 0x62,
    CallCtl3 = 0x63,
    XcmpXnl = 0x70,
    GroupVoice = 0x80,
    GroupData = 0x83,
    PvtData = 0x84,
    RptWakeUp = 0x85,
    MasterRegReq = 0x90,
    MasterRegReply = 0x91,
    PeerListReq = 0x92,
    PeerRegReq = 0x94,
    PeerRegReply = 0x95,
    MasterAliveReq = 0x96,
    MasterAliveReply = 0x97,
    PeerAliveReq = 0x98,
    PeerAliveReply = 0x99,
    DeRegReq = 0x9a,
    DeRegReply = 0x9b,
}

impl std::convert::TryFrom<u64> for IpscMsgType {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0x61 => Ok(IpscMsgType::CallCtl1),
            0x62 => Ok(IpscMsgType::CallCtl2),
            0x63 => Ok(IpscMsgType::CallCtl3),
            0x70 => Ok(IpscMsgType::XcmpXnl),
            0x80 => Ok(IpscMsgType::GroupVoice),
            0x83 => Ok(IpscMsgType::GroupData),
            0x84 => Ok(IpscMsgType::PvtData),
            0x85 => Ok(IpscMsgType::RptWakeUp),
            0x90 => Ok(IpscMsgType::MasterRegReq),
            0x91 => Ok(IpscMsgType::MasterRegReply),
            0x92 => Ok(IpscMsgType::PeerListReq),
            0x94 => Ok(IpscMsgType::PeerRegReq),
            0x95 => Ok(IpscMsgType::PeerRegReply),
            0x96 => Ok(IpscMsgType::MasterAliveReq),
            0x97 => Ok(IpscMsgType::MasterAliveReply),
            0x98 => Ok(IpscMsgType::PeerAliveReq),
            0x99 => Ok(IpscMsgType::PeerAliveReply),
            0x9a => Ok(IpscMsgType::DeRegReq),
            0x9b => Ok(IpscMsgType::DeRegReply),
            _ => Err(()),
        }
    }
}

impl IpscMsgType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }

    /// Linking and registration messages share the 24-byte long message layout
    pub fn is_long_message(self) -> bool {
        matches!(
            self,
            IpscMsgType::MasterRegReq
                | IpscMsgType::MasterRegReply
                | IpscMsgType::PeerRegReq
                | IpscMsgType::PeerRegReply
                | IpscMsgType::MasterAliveReq
                | IpscMsgType::MasterAliveReply
                | IpscMsgType::PeerAliveReq
                | IpscMsgType::PeerAliveReply
        )
    }
}

impl From<IpscMsgType> for u64 {
    fn from(e: IpscMsgType) -> Self {
        e.into_raw() as u64
    }
}

impl core::fmt::Display for IpscMsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IpscMsgType::CallCtl1 => write!(f, "CALL_CTL_1"),
            IpscMsgType::CallCtl2 => write!(f, "CALL_CTL_2"),
            IpscMsgType::CallCtl3 => write!(f, "CALL_CTL_3"),
            IpscMsgType::XcmpXnl => write!(f, "XCMP_XNL"),
            IpscMsgType::GroupVoice => write!(f, "GROUP_VOICE"),
            IpscMsgType::GroupData => write!(f, "GROUP_DATA"),
            IpscMsgType::PvtData => write!(f, "PVT_DATA"),
            IpscMsgType::RptWakeUp => write!(f, "RPT_WAKE_UP"),
            IpscMsgType::MasterRegReq => write!(f, "MASTER_REG_REQ"),
            IpscMsgType::MasterRegReply => write!(f, "MASTER_REG_REPLY"),
            IpscMsgType::PeerListReq => write!(f, "PEER_LIST_REQ"),
            IpscMsgType::PeerRegReq => write!(f, "PEER_REG_REQ"),
            IpscMsgType::PeerRegReply => write!(f, "PEER_REG_REPLY"),
            IpscMsgType::MasterAliveReq => write!(f, "MASTER_ALIVE_REQ"),
            IpscMsgType::MasterAliveReply => write!(f, "MASTER_ALIVE_REPLY"),
            IpscMsgType::PeerAliveReq => write!(f, "PEER_ALIVE_REQ"),
            IpscMsgType::PeerAliveReply => write!(f, "PEER_ALIVE_REPLY"),
            IpscMsgType::DeRegReq => write!(f, "DE_REG_REQ"),
            IpscMsgType::DeRegReply => write!(f, "DE_REG_REPLY"),
        }
    }
}
