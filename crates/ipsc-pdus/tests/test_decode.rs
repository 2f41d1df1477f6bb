mod common;

use ipsc_core::{IpscParseErr, debug};
use ipsc_pdus::enums::{
    data_packet_format::DataPacketFormat, ipsc_slot_state::IpscSlotState, msg_type::IpscMsgType, peer_mode::PeerMode,
    peer_operation::PeerOperation, service_access_point::ServiceAccessPoint,
};
use ipsc_pdus::fields::data_header::DataHeaderSequence;
use ipsc_pdus::pdus::group_voice::GroupVoiceBody;
use ipsc_pdus::pdus::pvt_data::PvtDataSubHeader;
use ipsc_pdus::{Frame, decode};

use common::{burst_head, digest, hex};

#[test]
fn test_call_ctl_round_trip() {
    debug::setup_logging_verbose();
    let vectors = [
        hex("61 00000064 000000c8 0102030405060708090a0b0c0d0e0f1011 a0a1a2a3a4a5a6a7a8a9"),
        hex("62 00000064 abcd a0a1a2a3a4a5a6a7a8a9"),
        hex("63 00000064 ab a0a1a2a3a4a5a6a7a8a9"),
    ];
    let expected_lens = [36, 17, 16];
    for (data, len) in vectors.iter().zip(expected_lens) {
        assert_eq!(data.len(), len);
        let frame = decode(data).unwrap();
        assert_eq!(frame.repeater_id(), Some(100));
        assert_eq!(frame.digest().unwrap().end(), len);
        assert_eq!(&frame.to_bytes().unwrap(), data);
    }

    let Frame::CallCtl1(cc1) = decode(&vectors[0]).unwrap() else {
        panic!("expected CallCtl1");
    };
    assert_eq!(cc1.second_repeater_id, 200);
}

#[test]
fn test_call_ctl_short_buffer() {
    let data = hex("63 00000064 ab a0a1a2a3a4a5a6a7a8");
    assert_eq!(
        decode(&data),
        Err(IpscParseErr::Truncated { field: "digest", offset: 6, len: 10, available: 15 })
    );
}

#[test]
fn test_pvt_data_zero_length_to_follow() {
    debug::setup_logging_verbose();
    let mut data = burst_head(0x84, 0x06);
    data.extend(hex("77 0000"));
    data.extend(digest(0xee));
    assert_eq!(data.len(), 44);

    let Frame::PvtData(pdu) = decode(&data).unwrap() else {
        panic!("expected PvtData");
    };
    assert_eq!(pdu.rssi_threshold_and_parity, 0x77);
    assert_eq!(pdu.length_to_follow, 0);
    assert!(pdu.burst.is_none());
    assert!(pdu.sub_header.is_none());
    assert_eq!(pdu.digest.offset, 34);
    assert_eq!(pdu.digest.bytes, &digest(0xee));
}

#[test]
fn test_pvt_data_header_short_region() {
    // ltf 6: region of 8 bytes at 38, digest at 46. The 12 byte data header
    // still decodes from 38 and runs into the digest.
    let mut data = burst_head(0x84, 0x06);
    data.extend(hex("00 0006"));
    data.extend(hex("01 02 0008"));
    data.extend(hex("53 42 000009 000c35"));
    data.extend(hex("83 d9 1234 eeeeeeeeeeee"));
    assert_eq!(data.len(), 56);

    let frame = decode(&data).unwrap();
    let Frame::PvtData(pdu) = frame else {
        panic!("expected PvtData");
    };
    let burst = pdu.burst.unwrap();
    assert_eq!(burst.data.offset, 38);
    assert_eq!(burst.data.len(), 8);
    assert_eq!(pdu.digest.offset, 46);

    let Some(PvtDataSubHeader::Data(h)) = pdu.sub_header else {
        panic!("expected data header, got {:?}", pdu.sub_header);
    };
    assert!(h.byte1.ack_requested);
    assert_eq!(h.byte1.packet_format(), Some(DataPacketFormat::ConfirmedData));
    assert_eq!(h.byte2.service_access_point(), ServiceAccessPoint::IpPacketData);
    assert_eq!(h.dst, 9);
    assert_eq!(h.src, 3125);
    assert_eq!(h.byte8.blocks_to_follow, 3);
    assert_eq!(h.byte9.sequence, DataHeaderSequence::Confirmed { resync: true, send_seq: 5 });
    assert_eq!(h.crc, 0x1234);

    assert_eq!(frame.to_bytes().unwrap(), data);
}

#[test]
fn test_pvt_data_sub_header_past_end() {
    // Region and digest fit, but the overlaid CSBK header does not
    let mut data = burst_head(0x84, 0x03);
    data.extend(hex("00 0002"));
    data.extend(hex("01 02 0000"));
    data.extend(digest(0xee));
    assert_eq!(data.len(), 48);
    assert!(matches!(decode(&data), Err(IpscParseErr::Truncated { offset: 48, .. })));
}

#[test]
fn test_pvt_data_digest_past_end() {
    let mut data = burst_head(0x84, 0x00);
    data.extend(hex("00 0006"));
    data.extend(hex("01 02 0008 0000000000000000"));
    data.extend(hex("eeee"));
    assert_eq!(
        decode(&data),
        Err(IpscParseErr::Truncated { field: "digest", offset: 46, len: 10, available: 48 })
    );
}

#[test]
fn test_length_to_follow_one_rejected() {
    let mut pvt = burst_head(0x84, 0x06);
    pvt.extend(hex("00 0001"));
    pvt.extend([0u8; 32]);
    assert_eq!(decode(&pvt), Err(IpscParseErr::InvalidLength { field: "length_to_follow", value: 1 }));

    let mut voice = burst_head(0x80, 0x01);
    voice.extend(hex("00 0001"));
    voice.extend([0u8; 32]);
    assert_eq!(decode(&voice), Err(IpscParseErr::InvalidLength { field: "length_to_follow", value: 1 }));
}

#[test]
fn test_group_voice_rate1_data() {
    let mut data = burst_head(0x80, 0x0a);
    data.extend(hex("05 0102030405"));
    data.extend(digest(0xdd));

    let frame = decode(&data).unwrap();
    let Frame::GroupVoice(pdu) = frame else {
        panic!("expected GroupVoice");
    };
    let GroupVoiceBody::Rate1Data { length_to_follow, data: region, digest: d } = pdu.body else {
        panic!("expected rate 1 data, got {:?}", pdu.body);
    };
    assert_eq!(length_to_follow, 5);
    assert_eq!(region.offset, 32);
    assert_eq!(region.len(), 5);
    assert_eq!(d.offset, 37);
    assert_eq!(frame.to_bytes().unwrap(), data);
}

#[test]
fn test_group_voice_terminator() {
    let mut data = burst_head(0x80, 0x02);
    data.extend(hex("00 0008 00 00 000c"));
    data.extend(hex("00 00 00 000009 000c35 f00f0f"));
    data.extend(digest(0xdd));

    let frame = decode(&data).unwrap();
    let Frame::GroupVoice(pdu) = frame else {
        panic!("expected GroupVoice");
    };
    let GroupVoiceBody::VoiceLc { burst: Some(burst), .. } = pdu.body else {
        panic!("expected voice LC burst, got {:?}", pdu.body);
    };
    assert_eq!(burst.full_lc.dst, 9);
    assert_eq!(burst.full_lc.src, 3125);
    assert_eq!(frame.digest().unwrap().offset, 50);
}

#[test]
fn test_group_voice_zero_ltf_no_digest() {
    let mut data = burst_head(0x80, 0x01);
    data.extend(hex("00 0000"));
    let frame = decode(&data).unwrap();
    assert!(frame.digest().is_none());
    assert_eq!(frame.to_bytes().unwrap(), data);
}

#[test]
fn test_group_voice_other_data_type() {
    let mut data = burst_head(0x80, 0x07);
    data.extend(hex("dddddddddddddddddd"));
    let frame = decode(&data).unwrap();
    let d = frame.digest().unwrap();
    assert_eq!(d.offset, 30);
    assert_eq!(d.bytes[0], 0x07);
    assert_eq!(frame.to_bytes().unwrap(), data);
}

#[test]
fn test_xcmp_xnl() {
    let mut data = hex("70 00000064 0004 deadbeef");
    data.extend(digest(0xcc));
    let Frame::XcmpXnl(pdu) = decode(&data).unwrap() else {
        panic!("expected XcmpXnl");
    };
    assert_eq!(pdu.length, 4);
    assert_eq!(pdu.data.bytes, &[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(pdu.digest.offset, 11);
}

#[test]
fn test_long_message_linking_c3() {
    debug::setup_logging_verbose();
    let mut data = hex("96 00000064 c3 00000000 00000000");
    data.extend(digest(0xbb));
    let frame = decode(&data).unwrap();
    assert_eq!(frame.msg_type(), IpscMsgType::MasterAliveReq.into_raw());
    let Frame::LongMessage(msg) = frame else {
        panic!("expected LongMessage");
    };
    assert_eq!(msg.linking.peer_operation, PeerOperation::Unknown(3));
    assert_eq!(msg.linking.peer_mode, PeerMode::NoRadio);
    assert_eq!(msg.linking.slot1, IpscSlotState::Unknown(0));
    assert_eq!(msg.linking.slot2, IpscSlotState::Unknown(3));
    assert_eq!(msg.digest.offset, 14);
    assert_eq!(frame.to_bytes().unwrap(), data);
}

#[test]
fn test_all_long_message_types() {
    for t in [0x90u8, 0x91, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99] {
        let mut data = vec![t];
        data.extend(hex("00000064 6a 00002d0d 04020401"));
        data.extend(digest(0xbb));
        let frame = decode(&data).unwrap();
        assert!(matches!(frame, Frame::LongMessage(_)), "type 0x{:02x}", t);
        assert_eq!(frame.msg_type(), t);
    }
}

#[test]
fn test_short_message() {
    let mut data = hex("92 00000064 000000000000000000");
    data.extend(digest(0xaa));
    let frame = decode(&data).unwrap();
    assert!(matches!(frame, Frame::ShortMessage(_)));
    assert_eq!(frame.digest().unwrap().offset, 14);
    assert_eq!(frame.to_bytes().unwrap(), data);

    assert!(matches!(decode(&data[..23]), Err(IpscParseErr::Truncated { field: "digest", .. })));
}

#[test]
fn test_unrecognized_type() {
    let data = hex("ff 00000064");
    let frame = decode(&data).unwrap();
    assert_eq!(frame, Frame::Unrecognized { msg_type: 0xff });
    assert_eq!(frame.check_recognized(), Err(IpscParseErr::UnrecognizedType { found: 0xff }));
    assert_eq!(frame.to_string(), "Unrecognized { msg_type: 0xff }");
}

#[test]
fn test_minimum_lengths() {
    // Each recognized type truncated to its header must fail, never panic
    for t in [0x61u8, 0x62, 0x63, 0x70, 0x80, 0x84, 0x85, 0x90, 0x92] {
        assert!(matches!(decode(&[t, 0x00]), Err(IpscParseErr::Truncated { .. })), "type 0x{:02x}", t);
    }
    assert!(matches!(decode(&[]), Err(IpscParseErr::Truncated { field: "msg_type", .. })));
}

#[test]
fn test_display_renders_every_kind() {
    let mut pvt = burst_head(0x84, 0x03);
    pvt.extend(hex("00 0008 01 02 000c bd10 0001 000063 000c35 beef"));
    pvt.extend(digest(0xee));
    let rendered = decode(&pvt).unwrap().to_string();
    assert!(rendered.starts_with("PvtData { repeater_id: 100"));
    assert!(rendered.contains("CsbkHeader { byte1: 0xbd fid: 0x10"));
    assert!(rendered.contains("digest: [50+10] EEEEEEEEEEEEEEEEEEEE"));
}
