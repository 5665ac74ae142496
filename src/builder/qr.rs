use std::ops::Deref;

use crate::common::{
    bit_utils::BitStream,
    error::{QRError, QRResult},
    iter::Zigzag,
    mask::MaskPattern,
    metadata::{
        format_info, Color, ECLevel, Metadata, Version, FORMAT_INFO_BIT_LEN, VERSION_INFO_BIT_LEN,
    },
};

/// Structural region a reserved module belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Region {
    Finder,
    Separator,
    Alignment,
    Timing,
    DarkModule,
    FormatInfo,
    VersionInfo,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Unset,
    Reserved(Region, Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Unset => &Color::Light,
            Module::Reserved(_, c) => c,
            Module::Data(c) => c,
        }
    }
}

impl Module {
    pub fn region(self) -> Option<Region> {
        match self {
            Module::Reserved(r, _) => Some(r),
            _ => None,
        }
    }
}

/// Square module matrix of one symbol. Every module is written at most once,
/// except format and version info which are reserved first and filled last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Unset; w * w], w, ver, ecl, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(Some(self.ver), Some(self.ecl), self.mask)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i32;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Unset => '.',
                    Module::Reserved(Region::FormatInfo, Color::Dark) => 'm',
                    Module::Reserved(Region::FormatInfo, Color::Light) => 'M',
                    Module::Reserved(Region::VersionInfo, Color::Dark) => 'v',
                    Module::Reserved(Region::VersionInfo, Color::Light) => 'V',
                    Module::Reserved(_, Color::Dark) => 'f',
                    Module::Reserved(_, Color::Light) => 'F',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    // Negative indices wrap around from the far edge
    fn coord_to_index(&self, r: i32, c: i32) -> usize {
        let w = self.w as i32;
        debug_assert!(-w <= r && r < w, "Row out of bounds: {r}");
        debug_assert!(-w <= c && c < w, "Column out of bounds: {c}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i32, c: i32) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn is_dark(&self, r: i32, c: i32) -> bool {
        *self.get(r, c) == Color::Dark
    }

    /// Writes an unset module, fails with `LayoutConflict` otherwise.
    pub fn set(&mut self, r: i32, c: i32, module: Module) -> QRResult<()> {
        let index = self.coord_to_index(r, c);
        match self.grid[index] {
            Module::Unset => {
                self.grid[index] = module;
                Ok(())
            }
            _ => Err(QRError::LayoutConflict),
        }
    }

    // Refills a module previously reserved for the same region
    fn rewrite_reserved(&mut self, r: i32, c: i32, region: Region, clr: Color) -> QRResult<()> {
        let index = self.coord_to_index(r, c);
        match self.grid[index] {
            Module::Reserved(reg, _) if reg == region => {
                self.grid[index] = Module::Reserved(region, clr);
                Ok(())
            }
            _ => Err(QRError::LayoutConflict),
        }
    }
}


// Finder pattern & separator
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) -> QRResult<()> {
        for (r, c) in FINDER_CENTERS {
            self.draw_finder_pattern_at(r, c)?;
        }
        Ok(())
    }

    fn draw_finder_pattern_at(&mut self, r: i32, c: i32) -> QRResult<()> {
        for i in -3..=3 {
            for j in -3..=3 {
                let clr = match (i, j) {
                    (3 | -3, _) | (_, 3 | -3) => Color::Dark,
                    (2 | -2, _) | (_, 2 | -2) => Color::Light,
                    _ => Color::Dark,
                };
                self.set(r + i, c + j, Module::Reserved(Region::Finder, clr))?;
            }
        }
        Ok(())
    }

    fn draw_separators(&mut self) -> QRResult<()> {
        for (r, c) in FINDER_CENTERS {
            self.draw_separator_at(r, c)?;
        }
        Ok(())
    }

    // Light ring on the sides of the finder that face the symbol interior
    fn draw_separator_at(&mut self, r: i32, c: i32) -> QRResult<()> {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                if matches!((i, j), (4 | -4, _) | (_, 4 | -4)) {
                    self.set(r + i, c + j, Module::Reserved(Region::Separator, Color::Light))?;
                }
            }
        }
        Ok(())
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) -> QRResult<()> {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)?;
            }
        }
        Ok(())
    }

    // Skipped when the footprint touches anything already placed
    fn draw_alignment_pattern_at(&mut self, r: i32, c: i32) -> QRResult<()> {
        let is_free =
            (-2..=2).all(|i| (-2..=2).all(|j| matches!(self.get(r + i, c + j), Module::Unset)));
        if !is_free {
            return Ok(());
        }
        for i in -2..=2 {
            for j in -2..=2 {
                let clr = match (i, j) {
                    (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Color::Dark,
                    _ => Color::Light,
                };
                self.set(r + i, c + j, Module::Reserved(Region::Alignment, clr))?;
            }
        }
        Ok(())
    }
}


// Timing pattern & dark module
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_patterns(&mut self) -> QRResult<()> {
        let last = self.w as i32 - 9;
        for i in 8..=last {
            let clr = if i & 1 == 0 { Color::Dark } else { Color::Light };
            self.draw_timing_module(TIMING_OFFSET, i, clr)?;
            self.draw_timing_module(i, TIMING_OFFSET, clr)?;
        }
        Ok(())
    }

    // Alignment patterns crossing the timing line already carry its colors
    fn draw_timing_module(&mut self, r: i32, c: i32, clr: Color) -> QRResult<()> {
        if let Module::Reserved(Region::Alignment, existing) = self.get(r, c) {
            debug_assert!(existing == clr, "Alignment disagrees with timing at ({r}, {c})");
            return Ok(());
        }
        self.set(r, c, Module::Reserved(Region::Timing, clr))
    }

    fn draw_dark_module(&mut self) -> QRResult<()> {
        self.set(-8, 8, Module::Reserved(Region::DarkModule, Color::Dark))
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    /// Places every structural region and reserves the info areas, in order.
    pub fn draw_all_function_patterns(&mut self) -> QRResult<()> {
        self.draw_finder_patterns()?;
        self.draw_separators()?;
        self.draw_alignment_patterns()?;
        self.draw_timing_patterns()?;
        self.draw_dark_module()?;
        self.reserve_format_area()?;
        self.reserve_version_area()
    }
}


// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self) -> QRResult<()> {
        let placeholder = Module::Reserved(Region::FormatInfo, Color::Light);
        for &(r, c) in FORMAT_INFO_COORDS_MAIN.iter().chain(FORMAT_INFO_COORDS_SIDE.iter()) {
            self.set(r, c, placeholder)?;
        }
        Ok(())
    }

    fn reserve_version_area(&mut self) -> QRResult<()> {
        if *self.ver < 7 {
            return Ok(());
        }
        let placeholder = Module::Reserved(Region::VersionInfo, Color::Light);
        for i in 0..VERSION_INFO_BIT_LEN as i32 {
            let (a, b) = (i / 3, i % 3 - 11);
            self.set(a, b, placeholder)?;
            self.set(b, a, placeholder)?;
        }
        Ok(())
    }

    fn draw_format_info(&mut self, info: u32) -> QRResult<()> {
        self.draw_number(info, Region::FormatInfo, &FORMAT_INFO_COORDS_MAIN)?;
        self.draw_number(info, Region::FormatInfo, &FORMAT_INFO_COORDS_SIDE)
    }

    fn draw_version_info(&mut self) -> QRResult<()> {
        if *self.ver < 7 {
            return Ok(());
        }
        let info = self.ver.info();
        for i in 0..VERSION_INFO_BIT_LEN as i32 {
            let clr = Color::from((info >> i) & 1 == 1);
            let (a, b) = (i / 3, i % 3 - 11);
            self.rewrite_reserved(a, b, Region::VersionInfo, clr)?;
            self.rewrite_reserved(b, a, Region::VersionInfo, clr)?;
        }
        Ok(())
    }

    // Bit i of number goes to coords[i]
    fn draw_number(&mut self, number: u32, region: Region, coords: &[(i32, i32)]) -> QRResult<()> {
        for (i, &(r, c)) in coords.iter().enumerate() {
            let clr = Color::from((number >> i) & 1 == 1);
            self.rewrite_reserved(r, c, region, clr)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod qr_information_tests {
    use crate::builder::{Module, Region, QR};
    use crate::common::error::QRError;
    use crate::common::metadata::{format_info, Color, ECLevel, Version};
    use crate::common::mask::MaskPattern;

    #[test]
    fn test_version_info_7() {
        let mut qr = QR::new(Version::new(7), ECLevel::L);
        qr.reserve_version_area().unwrap();
        qr.draw_version_info().unwrap();
        let s = qr.to_debug_str();
        let rows = s.lines().skip(1).collect::<Vec<_>>();
        let top_right = rows[..6].iter().map(|r| &r[34..37]).collect::<Vec<_>>();
        assert_eq!(top_right, ["VVv", "VvV", "VvV", "Vvv", "vvv", "VVV"]);
        assert_eq!(&rows[34][..6], "VVVVvV");
        assert_eq!(&rows[35][..6], "VvvvvV");
        assert_eq!(&rows[36][..6], "vVVvvV");
    }

    #[test]
    fn test_version_info_small() {
        let mut qr = QR::new(Version::new(6), ECLevel::L);
        qr.reserve_version_area().unwrap();
        qr.draw_version_info().unwrap();
        assert!(qr.grid().iter().all(|m| matches!(m, Module::Unset)));
    }

    #[test]
    fn test_format_info_copies() {
        let mut qr = QR::new(Version::new(1), ECLevel::L);
        qr.reserve_format_area().unwrap();
        let info = format_info(ECLevel::M, MaskPattern::new(5));
        qr.draw_format_info(info).unwrap();

        // Read both copies back, least significant bit first
        let read = |coords: &[(i32, i32)]| {
            coords.iter().enumerate().fold(0u32, |acc, (i, &(r, c))| {
                acc | ((qr.is_dark(r, c) as u32) << i)
            })
        };
        assert_eq!(read(&super::FORMAT_INFO_COORDS_MAIN), info);
        assert_eq!(read(&super::FORMAT_INFO_COORDS_SIDE), info);
        assert_eq!(qr.get(8, 8).region(), Some(Region::FormatInfo));
    }

    #[test]
    fn test_format_info_requires_reservation() {
        let mut qr = QR::new(Version::new(1), ECLevel::L);
        assert_eq!(qr.draw_format_info(0), Err(QRError::LayoutConflict));
    }

    #[test]
    fn test_format_info_redraw() {
        let mut qr = QR::new(Version::new(1), ECLevel::L);
        qr.reserve_format_area().unwrap();
        qr.draw_format_info(0x7fff).unwrap();
        qr.draw_format_info(0).unwrap();
        let dark = Module::Reserved(Region::FormatInfo, Color::Dark);
        assert!(!qr.grid().contains(&dark));
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places the interleaved codewords along the zigzag, filling remainder
    /// modules with light once the stream runs out.
    pub fn draw_payload(&mut self, codewords: &[u8]) -> QRResult<()> {
        let mut bits = BitStream::from_codewords(codewords);
        let mut remainder = 0;
        for (r, c) in Zigzag::new(self.ver) {
            if !matches!(self.get(r, c), Module::Unset) {
                continue;
            }
            let clr = match bits.take_bit() {
                Some(bit) => Color::from(bit),
                None => {
                    remainder += 1;
                    Color::Light
                }
            };
            self.set(r, c, Module::Data(clr))?;
        }

        if bits.remaining() > 0 {
            return Err(QRError::StreamOverflow);
        }
        match remainder.cmp(&self.ver.remainder_bits()) {
            std::cmp::Ordering::Greater => Err(QRError::StreamUnderflow),
            std::cmp::Ordering::Less => Err(QRError::StreamOverflow),
            std::cmp::Ordering::Equal => Ok(()),
        }
    }

    /// Inverts data modules where the pattern applies, then draws the format
    /// and version info the masked symbol carries.
    pub fn apply_mask(&mut self, pattern: MaskPattern) -> QRResult<()> {
        debug_assert!(self.mask.is_none(), "Mask already applied");

        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let w = self.w as i32;
        for r in 0..w {
            for c in 0..w {
                if !mask_fn(r, c) {
                    continue;
                }
                let index = self.coord_to_index(r, c);
                if let Module::Data(clr) = self.grid[index] {
                    self.grid[index] = Module::Data(!clr);
                }
            }
        }
        self.draw_format_info(format_info(self.ecl, pattern))?;
        self.draw_version_info()
    }
}

#[cfg(test)]
mod encoding_region_tests {
    use test_case::test_case;

    use crate::builder::{Module, Region, QR};
    use crate::common::error::QRError;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{Color, ECLevel, Version};

    fn prepared(ver: usize) -> QR {
        let mut qr = QR::new(Version::new(ver), ECLevel::L);
        qr.draw_all_function_patterns().unwrap();
        qr
    }

    #[test]
    fn test_draw_payload_first_codeword() {
        let mut qr = prepared(1);
        let mut payload = vec![0u8; 26];
        payload[0] = 0b1010_0110;
        qr.draw_payload(&payload).unwrap();
        let first =
            [(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19), (17, 20), (17, 19)];
        let bits = first.iter().map(|&(r, c)| qr.is_dark(r, c)).collect::<Vec<_>>();
        assert_eq!(bits, [true, false, true, false, false, true, true, false]);
        assert!(!qr.grid().contains(&Module::Unset));
    }

    #[test_case(1, 26)]
    #[test_case(2, 44)]
    #[test_case(7, 196)]
    #[test_case(14, 581)]
    #[test_case(21, 1156)]
    fn test_draw_payload_fills_symbol(ver: usize, total: usize) {
        let mut qr = prepared(ver);
        assert_eq!(qr.draw_payload(&vec![0xff; total]), Ok(()));
        let dark_data = qr.grid().iter().filter(|m| **m == Module::Data(Color::Dark)).count();
        let light_data = qr.grid().iter().filter(|m| **m == Module::Data(Color::Light)).count();
        assert_eq!(dark_data, total * 8);
        assert_eq!(light_data, Version::new(ver).remainder_bits());
    }

    #[test]
    fn test_draw_payload_underflow() {
        let mut qr = prepared(1);
        assert_eq!(qr.draw_payload(&[0; 25]), Err(QRError::StreamUnderflow));
    }

    #[test]
    fn test_draw_payload_overflow() {
        let mut qr = prepared(1);
        assert_eq!(qr.draw_payload(&[0; 27]), Err(QRError::StreamOverflow));
    }

    #[test]
    fn test_apply_mask_touches_data_only() {
        let mut qr = prepared(1);
        qr.draw_payload(&[0; 26]).unwrap();
        let before = qr.clone();
        qr.apply_mask(MaskPattern::new(1)).unwrap();
        let w = qr.width() as i32;
        for r in 0..w {
            for c in 0..w {
                match (before.get(r, c), qr.get(r, c)) {
                    (Module::Data(_), Module::Data(clr)) => {
                        assert_eq!(clr == Color::Dark, r % 2 == 0, "({r}, {c})")
                    }
                    (Module::Reserved(Region::FormatInfo, _), Module::Reserved(reg, _)) => {
                        assert_eq!(reg, Region::FormatInfo)
                    }
                    (b, a) => assert_eq!(b, a),
                }
            }
        }
        assert_eq!(qr.mask(), Some(MaskPattern::new(1)));
    }
}

// Global constants
//------------------------------------------------------------------------------

static FINDER_CENTERS: [(i32, i32); 3] = [(3, 3), (3, -4), (-4, 3)];

static TIMING_OFFSET: i32 = 6;

// Around the top left finder, bit 0 first
static FORMAT_INFO_COORDS_MAIN: [(i32, i32); FORMAT_INFO_BIT_LEN] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

// Split between the top right and bottom left finders, bit 0 first
static FORMAT_INFO_COORDS_SIDE: [(i32, i32); FORMAT_INFO_BIT_LEN] = [
    (8, -1),
    (8, -2),
    (8, -3),
    (8, -4),
    (8, -5),
    (8, -6),
    (8, -7),
    (8, -8),
    (-7, 8),
    (-6, 8),
    (-5, 8),
    (-4, 8),
    (-3, 8),
    (-2, 8),
    (-1, 8),
];
