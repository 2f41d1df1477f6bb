//! Static label and field metadata tables for presentation layers.
//! Nothing in the decode path consults these.

/// Type code to name. 0x91 appears twice: the same code is used for the
/// master registration reply and the peer list reply.
pub static MSG_TYPE_LABELS: &[(u8, &str)] = &[
    (0x61, "CALL_CTL_1"),
    (0x62, "CALL_CTL_2"),
    (0x63, "CALL_CTL_3"),
    (0x70, "XCMP_XNL"),
    (0x80, "GROUP_VOICE"),
    (0x83, "GROUP_DATA"),
    (0x84, "PVT_DATA"),
    (0x85, "RPT_WAKE_UP"),
    (0x90, "MASTER_REG_REQ"),
    (0x91, "MASTER_REG_REPLY"),
    (0x92, "PEER_LIST_REQ"),
    (0x91, "PEER_LIST_REPLY"),
    (0x94, "PEER_REG_REQ"),
    (0x96, "MASTER_ALIVE_REQ"),
    (0x97, "MASTER_ALIVE_REPLY"),
    (0x98, "PEER_ALIVE_REQ"),
    (0x99, "PEER_ALIVE_REPLY"),
    (0x9a, "DE_REG_REQ"),
    (0x9b, "DE_REG_REPLY"),
];

/// All labels registered for a type code, in table order
pub fn msg_type_labels(code: u8) -> impl Iterator<Item = &'static str> {
    MSG_TYPE_LABELS.iter().filter(move |(c, _)| *c == code).map(|(_, label)| *label)
}

/// First label registered for a type code
pub fn msg_type_label(code: u8) -> Option<&'static str> {
    msg_type_labels(code).next()
}

/// Presentation metadata for one decoded field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Dotted filter name
    pub abbrev: &'static str,
    pub name: &'static str,
    /// Width in bytes of the containing field, 0 for variable length
    pub width: usize,
    /// Bit mask within the containing byte, 0 for whole-field values
    pub mask: u8,
}

const fn field(abbrev: &'static str, name: &'static str, width: usize, mask: u8) -> FieldInfo {
    FieldInfo { abbrev, name, width, mask }
}

pub static FIELD_INFO: &[FieldInfo] = &[
    field("ipsc.type", "Type", 1, 0),
    field("ipsc.rpt_id", "Rpt Id", 4, 0),
    field("ipsc.linking", "Linking", 1, 0),
    field("ipsc.linking.peer_op", "Peer Op", 1, 0xc0),
    field("ipsc.linking.peer_mode", "Peer Mode", 1, 0x30),
    field("ipsc.linking.ipsc_slot1", "IPSC Slot 1", 1, 0x0c),
    field("ipsc.linking.ipsc_slot2", "IPSC Slot 2", 1, 0x03),
    field("ipsc.service_flags", "Service FLAGS", 4, 0),
    field("ipsc.service_flags.byte1", "BYTE 1", 1, 0),
    field("ipsc.service_flags.byte2", "BYTE 2", 1, 0),
    field("ipsc.service_flags.byte3", "BYTE 3", 1, 0),
    field("ipsc.service_flags.byte3.rdac", "RDAC", 1, 0x80),
    field("ipsc.service_flags.byte3.rpt_call_mon", "Repeater call monitoring", 1, 0x40),
    field("ipsc.service_flags.byte3.3rdpy", "3rd Party", 1, 0x20),
    field("ipsc.service_flags.byte3.reserved", "Reserved", 1, 0x1f),
    field("ipsc.service_flags.byte4", "BYTE 4", 1, 0),
    field("ipsc.service_flags.byte4.xnl_conn", "XNL connected", 1, 0x80),
    field("ipsc.service_flags.byte4.xnl_master", "XNL Master Device", 1, 0x40),
    field("ipsc.service_flags.byte4.xnl_slave", "XNL Slave Device", 1, 0x20),
    field("ipsc.service_flags.byte4.auth", "Authenticated packets", 1, 0x10),
    field("ipsc.service_flags.byte4.voice", "Voice enabled", 1, 0x08),
    field("ipsc.service_flags.byte4.data", "Data enabled", 1, 0x04),
    field("ipsc.service_flags.byte4.unk2", "Reserved", 1, 0x02),
    field("ipsc.service_flags.byte4.master", "Master", 1, 0x01),
    field("ipsc.version", "Version", 4, 0),
    field("ipsc.seq_no", "Seq No", 1, 0),
    field("ipsc.src_id", "Src Id", 3, 0),
    field("ipsc.dst_id", "Dst Id", 3, 0),
    field("ipsc.prio_v_d", "Priority Voice/Data", 1, 0),
    field("ipsc.call_ctrl", "Call Ctrl", 4, 0),
    field("ipsc.call_ctrl_info", "Call Ctrl Info", 1, 0),
    field("ipsc.call_ctrl_src", "Call Ctrl Src", 1, 0),
    field("ipsc.payload_type", "Payload Type", 1, 0),
    field("ipsc.call_seq_no", "Call Seq No", 2, 0),
    field("ipsc.timestamp", "Timestamp", 4, 0),
    field("ipsc.sync_src", "Sync Src", 4, 0),
    field("ipsc.data_type_voice_hdr", "Data Type Voice Hdr", 1, 0),
    field("ipsc.rssi_threshold_and_parity", "RSSI Threshold and Parity", 1, 0),
    field("ipsc.length_to_follow", "Length to Follow - in 2byte words", 2, 0),
    field("ipsc.length_to_follow2", "Length to Follow 2 - in bytes", 1, 0),
    field("ipsc.rssi_status", "RSSI Status", 1, 0),
    field("ipsc.slot_type_sync", "Slot Type Sync", 1, 0),
    field("ipsc.data_size", "Data Size", 2, 0),
    field("ipsc.data", "Data", 0, 0),
    field("ipsc.data_hdr_byte1", "Data Hdr Byte 1", 1, 0),
    field("ipsc.data_hdr.byte1_gi", "Group / Individual call", 1, 0x80),
    field("ipsc.data_hdr.byte1_a", "Acknowledge requested", 1, 0x40),
    field("ipsc.data_hdr.byte1_hc", "Header Compression (HC)", 1, 0x20),
    field("ipsc.data_hdr.byte1_pocmsb", "Packet Octet Count(POC) MSB", 1, 0x10),
    field("ipsc.data_hdr.byte1_dpf", "Data Packet Format (DPF)", 1, 0x0f),
    field("ipsc.data_hdr_byte2", "Data Hdr Byte 2", 1, 0),
    field("ipsc.data_hdr.byte2_sap", "Service Access Point (SAP)", 1, 0xf0),
    field("ipsc.data_hdr.byte2_poc", "Packet Octet Count (POC)", 1, 0x0f),
    field("ipsc.data_hdr_dst", "Data Hdr Dst", 3, 0),
    field("ipsc.data_hdr_src", "Data Hdr Src", 3, 0),
    field("ipsc.data_hdr_byte8", "Data Hdr Byte 8", 1, 0),
    field("ipsc.data_hdr.byte8_f", "Full Message Flag (F)", 1, 0x80),
    field("ipsc.data_hdr.byte8_btf", "Blocks to Follow (BF)", 1, 0x7f),
    field("ipsc.data_hdr_byte9", "Data Hdr Byte 9", 1, 0),
    field("ipsc.data_hdr_byte9_s", "Re-Synchronize flag (S)", 1, 0x80),
    field("ipsc.data_hdr_byte9_ns", "Send sequence Number N(S)", 1, 0x70),
    field("ipsc.data_hdr_byte9_nibble1", "Nibble1", 1, 0xf0),
    field("ipsc.data_hdr_byte9_fsn", "Fragment Sequence Number (FSN)", 1, 0x0f),
    field("ipsc.data_hdr_crc", "Data Hdr CRC", 2, 0),
    field("ipsc.csbk_hdr_byte1", "CSBK Hdr Byte 1", 1, 0),
    field("ipsc.csbk_hdr_fid", "CSBK Hdr FID", 1, 0),
    field("ipsc.csbk_hdr_byte3", "CSBK Hdr Byte 3", 1, 0),
    field("ipsc.csbk_hdr_byte4", "CSBK Hdr Byte 4", 1, 0),
    field("ipsc.csbk_hdr_dst", "CSBK Hdr Dst", 3, 0),
    field("ipsc.csbk_hdr_src", "CSBK Hdr Src", 3, 0),
    field("ipsc.csbk_hdr_crc", "CSBK Hdr CRC", 2, 0),
    field("ipsc.full_lc_byte1", "Full LC Byte 1", 1, 0),
    field("ipsc.full_lc_fid", "Full LC FID", 1, 0),
    field("ipsc.voice_pdu_service_options", "Voice PDU Service Options", 1, 0),
    field("ipsc.voice_pdu_dst", "Voice PDU Dst", 3, 0),
    field("ipsc.voice_pdu_src", "Voice PDU Src", 3, 0),
    field("ipsc.digest", "Auth Digest", 10, 0),
    field("ipsc.xcmp_xnl_length", "XCMP/XNL Length", 2, 0),
    field("ipsc.xcmp_xnl_data", "XCMP/XNL Data", 0, 0),
    field("ipsc.unk1", "Unknown", 0, 0),
];

pub fn field_info(abbrev: &str) -> Option<&'static FieldInfo> {
    FIELD_INFO.iter().find(|f| f.abbrev == abbrev)
}
