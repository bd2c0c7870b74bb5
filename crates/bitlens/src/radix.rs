//! Base conversion between values and the text forms frontends edit.

/// Text bases the explorer displays and accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Dec,
    Bin,
    Hex,
}

impl Radix {
    /// Looks up a radix by the short name frontends use.
    pub fn from_name(name: &str) -> Option<Radix> {
        match name {
            "dec" => Some(Radix::Dec),
            "bin" => Some(Radix::Bin),
            "hex" => Some(Radix::Hex),
            _ => None,
        }
    }

    /// Formats `value` in this base. No prefixes; hex is uppercase.
    pub fn format(self, value: u32) -> String {
        match self {
            Radix::Dec => to_decimal(value),
            Radix::Bin => to_binary(value),
            Radix::Hex => to_hex(value),
        }
    }

    /// Parses text in this base. `None` is the not-a-number outcome of
    /// invalid input, handled downstream by the clamp-to-0 policy.
    pub fn parse(self, text: &str) -> Option<i64> {
        match self {
            Radix::Dec => parse_decimal(text),
            Radix::Bin => parse_binary(text),
            Radix::Hex => parse_hex(text),
        }
    }
}

pub fn to_decimal(value: u32) -> String {
    value.to_string()
}

pub fn to_binary(value: u32) -> String {
    format!("{value:b}")
}

pub fn to_hex(value: u32) -> String {
    format!("{value:X}")
}

pub fn parse_decimal(text: &str) -> Option<i64> {
    parse_radix(text, 10)
}

pub fn parse_binary(text: &str) -> Option<i64> {
    parse_radix(text, 2)
}

pub fn parse_hex(text: &str) -> Option<i64> {
    parse_radix(text, 16)
}

/// Whole-string parse with surrounding whitespace tolerated. A sign is
/// accepted; negative results are clamped away by the setters.
fn parse_radix(text: &str, radix: u32) -> Option<i64> {
    i64::from_str_radix(text.trim(), radix).ok()
}
