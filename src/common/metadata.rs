use std::ops::{Deref, Not};

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::mask::MaskPattern;
use super::tables::{
    BlockLayout, ALIGNMENT_PATTERN_POSITIONS, EC_BLOCKS, REMAINDER_BITS, TOTAL_CODEWORDS,
};

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Metadata {
    ver: Option<Version>,
    ecl: Option<ECLevel>,
    mask: Option<MaskPattern>,
}

impl Metadata {
    pub fn new(ver: Option<Version>, ecl: Option<ECLevel>, mask: Option<MaskPattern>) -> Self {
        Self { ver, ecl, mask }
    }

    pub fn version(&self) -> Option<Version> {
        self.ver
    }

    pub fn ec_level(&self) -> Option<ECLevel> {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ver = self.ver.map_or("None".to_string(), |v| (*v).to_string());
        let ecl = self.ecl.map_or("None".to_string(), |e| format!("{e:?}"));
        let mask = self.mask.map_or("None".to_string(), |m| (*m).to_string());
        write!(f, "{{ Version: {ver}, Ec level: {ecl}, Mask: {mask} }}")
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<usize> for Version {
    type Error = QRError;

    fn try_from(v: usize) -> QRResult<Self> {
        match v {
            1..=40 => Ok(Self(v)),
            _ => Err(QRError::RangeError),
        }
    }
}

impl Version {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(40);

    /// # Panics
    ///
    /// Panics if `v` is not within `1..=40`. Use [`Version::try_from`] for a
    /// fallible conversion.
    pub const fn new(v: usize) -> Self {
        assert!(v >= 1 && v <= 40, "Invalid version");
        Self(v)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=40).map(Self)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub fn alignment_pattern(self) -> &'static [i32] {
        ALIGNMENT_PATTERN_POSITIONS[self.0]
    }

    pub fn total_codewords(self) -> usize {
        TOTAL_CODEWORDS[self.0]
    }

    pub fn remainder_bits(self) -> usize {
        REMAINDER_BITS[self.0]
    }

    pub fn block_layout(self, ecl: ECLevel) -> BlockLayout {
        EC_BLOCKS[self.0][ecl as usize]
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        self.block_layout(ecl).data_codewords()
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        self.block_layout(ecl).ecc_per_block
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let band = match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match mode {
            Mode::Numeric => [10, 12, 14][band],
            Mode::Alphanumeric => [9, 11, 13][band],
            Mode::Byte => [8, 16, 16][band],
        }
    }

    // Most characters of `mode` that fit in the data capacity alongside one header
    pub fn char_capacity(self, ecl: ECLevel, mode: Mode) -> usize {
        let overhead = self.mode_bits() + self.char_cnt_bits(mode);
        let bits = self.data_bit_capacity(ecl).saturating_sub(overhead);
        bits * mode.units_per_group() / mode.bits_per_group()
    }

    // 6 bit version number followed by 12 bit Golay remainder
    pub fn info(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version info only exists for version 7 and above");
        let data = self.0 as u32;
        let mut rem = data;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * VERSION_INFO_GENERATOR);
        }
        (data << 12) | (rem & 0xfff)
    }
}

#[cfg(test)]
mod version_tests {
    use test_case::test_case;

    use super::{ECLevel, Mode, Version};
    use crate::common::error::QRError;

    #[test]
    fn test_width() {
        // Side grows by 4 per version from 21 modules at version 1
        for v in Version::all() {
            assert_eq!(v.width(), 4 * (*v - 1) + 21);
        }
        assert_eq!(Version::MIN.width(), 21);
        assert_eq!(Version::MAX.width(), 177);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Version::try_from(0), Err(QRError::RangeError));
        assert_eq!(Version::try_from(41), Err(QRError::RangeError));
        assert_eq!(Version::try_from(7), Ok(Version::new(7)));
    }

    #[test_case(7, 0x07c94)]
    #[test_case(8, 0x085bc)]
    #[test_case(21, 0x15683)]
    #[test_case(40, 0x28c69)]
    fn test_version_info(ver: usize, exp: u32) {
        assert_eq!(Version::new(ver).info(), exp);
    }

    #[test_case(1, ECLevel::L, Mode::Numeric, 41)]
    #[test_case(1, ECLevel::H, Mode::Alphanumeric, 10)]
    #[test_case(1, ECLevel::L, Mode::Byte, 17)]
    #[test_case(10, ECLevel::M, Mode::Alphanumeric, 311)]
    #[test_case(40, ECLevel::L, Mode::Numeric, 7089)]
    #[test_case(40, ECLevel::L, Mode::Byte, 2953)]
    #[test_case(40, ECLevel::H, Mode::Byte, 1273)]
    fn test_char_capacity(ver: usize, ecl: ECLevel, mode: Mode, exp: usize) {
        assert_eq!(Version::new(ver).char_capacity(ecl, mode), exp);
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    // Strongest first
    pub const SEARCH_ORDER: [Self; 4] = [Self::H, Self::Q, Self::M, Self::L];

    // 2 bit indicator used in format info
    pub fn format_bits(self) -> u32 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
            Self::Q => 0b11,
            Self::H => 0b10,
        }
    }
}

impl std::str::FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        match s {
            "L" | "l" => Ok(Self::L),
            "M" | "m" => Ok(Self::M),
            "Q" | "q" => Ok(Self::Q),
            "H" | "h" => Ok(Self::H),
            _ => Err(QRError::RangeError),
        }
    }
}

// Format info
//------------------------------------------------------------------------------

// 5 data bits followed by 10 bit BCH remainder, masked with FORMAT_MASK
pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    let data = (ecl.format_bits() << 3) | *mask as u32;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_INFO_GENERATOR);
    }
    ((data << 10) | (rem & 0x3ff)) ^ FORMAT_MASK
}


// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Color {
    pub fn select<T>(&self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

pub static FORMAT_INFO_GENERATOR: u32 = 0b101_0011_0111;

pub static FORMAT_MASK: u32 = 0b101_0100_0001_0010;

pub static VERSION_INFO_GENERATOR: u32 = 0b1_1111_0010_0101;

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const VERSION_INFO_BIT_LEN: usize = 18;
