/// Parses a hex string, ignoring whitespace, into bytes
pub fn hex(s: &str) -> Vec<u8> {
    let digits: Vec<u8> = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).expect("hex digit") as u8)
        .collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");
    digits.chunks(2).map(|p| (p[0] << 4) | p[1]).collect()
}

/// Type byte, repeater id 0x00000064 and a call preamble from src 3125 to dst 9
/// with the given data type byte: 31 bytes
pub fn burst_head(msg_type: u8, data_type: u8) -> Vec<u8> {
    let mut data = vec![msg_type];
    data.extend(hex("00000064 01 000c35 000009 00 00001234 40 01 5d 0001 00000010 deadbeef"));
    data.push(data_type);
    assert_eq!(data.len(), 31);
    data
}

pub fn digest(fill: u8) -> [u8; 10] {
    [fill; 10]
}
