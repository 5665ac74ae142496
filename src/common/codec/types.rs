use std::cmp::Ordering;

use crate::common::metadata::Version;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
}

// Numeric < Alphanumeric < Byte, each mode a superset of the previous
impl PartialOrd for Mode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Mode {
    fn rank(self) -> u8 {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
        }
    }

    /// Most compact mode that can represent every byte of `data`.
    pub fn for_data(data: &[u8]) -> Self {
        MODES.iter().copied().find(|m| data.iter().all(|b| m.contains(*b))).unwrap_or(Self::Byte)
    }

    pub fn indicator(self) -> u8 {
        self as u8
    }

    // Characters packed together into one bit group
    pub fn units_per_group(self) -> usize {
        match self {
            Self::Numeric => 3,
            Self::Alphanumeric => 2,
            Self::Byte => 1,
        }
    }

    // Bits occupied by one full group
    pub fn bits_per_group(self) -> usize {
        match self {
            Self::Numeric => 10,
            Self::Alphanumeric => 11,
            Self::Byte => 8,
        }
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Alphanumeric.contains(char), "Invalid alphanumeric data: {char}");
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric chunk: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric chunk: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                debug_assert!(len == 1, "Data is too long for byte chunk: {len}");
                data[0] as u16
            }
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alphanumeric => {
                matches!(
                    byte,
                    b'0'..=b'9'
                        | b'A'..=b'Z'
                        | b' '
                        | b'$'
                        | b'%'
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'/'
                        | b':'
                )
            }
            Self::Byte => true,
        }
    }

    // Bit length of the body for `len` characters, partial trailing group included
    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
        }
    }
}


// Segment
//------------------------------------------------------------------------------

/// Input bytes tagged with the mode that encodes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub mode: Mode,
    pub data: &'a [u8],
}

impl<'a> Segment<'a> {
    pub fn new(mode: Mode, data: &'a [u8]) -> Self {
        debug_assert!(
            data.iter().all(|b| mode.contains(*b)),
            "Data doesn't fit in mode: Mode {mode:?}"
        );
        Self { mode, data }
    }

    pub fn from_data(data: &'a [u8]) -> Self {
        Self { mode: Mode::for_data(data), data }
    }

    // Number of encodable units
    pub fn char_count(&self) -> usize {
        self.data.len()
    }

    // Header and body bits for the given version
    pub fn bit_len(&self, ver: Version) -> usize {
        ver.mode_bits() + ver.char_cnt_bits(self.mode) + self.mode.encoded_len(self.data.len())
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static MODES: [Mode; 3] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
