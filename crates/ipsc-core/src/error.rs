use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpscParseErr {
    /// A field or region extends past the end of the buffer
    Truncated { field: &'static str, offset: usize, len: usize, available: usize },
    /// A decoded length implies a negative or inconsistent region size
    InvalidLength { field: &'static str, value: u64 },
    /// The leading type byte matches no known message kind
    UnrecognizedType { found: u8 },
    /// A message decoder was handed a buffer of another kind
    InvalidPduType { expected: u8, found: u8 },
    /// A value does not fit the field it is written to
    InvalidValue { field: &'static str, value: u64 },
}

impl fmt::Display for IpscParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { field, offset, len, available } => write!(
                f,
                "truncated: {} needs {} bytes at offset {}, buffer has {}",
                field, len, offset, available
            ),
            Self::InvalidLength { field, value } => write!(f, "invalid length in {}: {}", field, value),
            Self::UnrecognizedType { found } => write!(f, "unrecognized message type 0x{:02x}", found),
            Self::InvalidPduType { expected, found } => {
                write!(f, "invalid pdu type: expected 0x{:02x}, found 0x{:02x}", expected, found)
            }
            Self::InvalidValue { field, value } => write!(f, "invalid value for {}: {}", field, value),
        }
    }
}

impl std::error::Error for IpscParseErr {}

/// Checks whether a message type byte matches the expected value. If not, returns IpscParseErr::InvalidPduType
#[macro_export]
macro_rules! expect_pdu_type {
    ($value:expr, $expected:expr) => {{
        let raw_expected = $expected.into_raw();
        if $value == raw_expected {
            Ok(())
        } else {
            Err($crate::IpscParseErr::InvalidPduType {
                expected: raw_expected,
                found: $value,
            })
        }
    }};
}

/// Checks that a value fits into `bits` bits. If not, returns IpscParseErr::InvalidValue
#[macro_export]
macro_rules! expect_fits {
    (@inner $value:expr, $bits:expr, $field:expr) => {{
        let val = $value as u64;
        if val.checked_shr($bits as u32).map_or(true, |v| v == 0) {
            Ok(())
        } else {
            Err($crate::IpscParseErr::InvalidValue {
                field: $field,
                value: val,
            })
        }
    }};
    ($value:ident, $bits:expr) => {
        $crate::expect_fits!(@inner $value, $bits, stringify!($value))
    };
    ($value:expr, $bits:expr, $field:expr) => {
        $crate::expect_fits!(@inner $value, $bits, $field)
    };
}

/// Reads a big-endian field of `$bytes` bytes into a local named after the field
#[macro_export]
macro_rules! let_field {
    ($buf:expr, $ident:ident, $bytes:expr) => {
        let $ident = $buf.read_field($bytes, stringify!($ident))?;
    };
    ($buf:expr, $ident:ident: $ty:ty, $bytes:expr) => {
        let $ident = $buf.read_field($bytes, stringify!($ident))? as $ty;
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_truncated() {
        let e = IpscParseErr::Truncated { field: "digest", offset: 14, len: 10, available: 20 };
        assert_eq!(e.to_string(), "truncated: digest needs 10 bytes at offset 14, buffer has 20");
    }

    #[test]
    fn test_expect_fits() {
        let dst_id = 0x00ff_ffffu32;
        assert!(expect_fits!(dst_id, 24).is_ok());
        let src_id = 0x0100_0000u32;
        assert_eq!(
            expect_fits!(src_id, 24),
            Err(IpscParseErr::InvalidValue { field: "src_id", value: 0x0100_0000 })
        );
    }
}
