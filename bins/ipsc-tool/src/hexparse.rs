/// Parse a hex string into bytes. Whitespace and ':' separators are skipped,
/// an optional leading "0x" is accepted.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);

    let mut nibbles = Vec::with_capacity(trimmed.len());
    for (i, c) in trimmed.chars().enumerate() {
        if c.is_whitespace() || c == ':' {
            continue;
        }
        match c.to_digit(16) {
            Some(d) => nibbles.push(d as u8),
            None => return Err(format!("invalid hex character '{}' at position {}", c, i)),
        }
    }
    if nibbles.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", nibbles.len()));
    }
    Ok(nibbles.chunks(2).map(|p| (p[0] << 4) | p[1]).collect())
}

/// Frames from a hex dump file: one frame per line, '#' starts a comment
pub fn parse_hex_lines(contents: &str) -> Vec<(usize, Result<Vec<u8>, String>)> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() { None } else { Some((n + 1, parse_hex(line))) }
        })
        .collect()
}
