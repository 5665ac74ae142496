use std::ops::Deref;

use super::error::{QRError, QRResult};
use super::metadata::Color;
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    /// # Panics
    ///
    /// Panics if `pattern` is not within `0..8`. Use [`MaskPattern::try_from`]
    /// for a fallible conversion.
    pub const fn new(pattern: u8) -> Self {
        assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;

    fn try_from(pattern: u8) -> QRResult<Self> {
        match pattern {
            0..=7 => Ok(Self(pattern)),
            _ => Err(QRError::RangeError),
        }
    }
}

mod mask_functions {
    pub fn checkerboard(r: i32, c: i32) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i32, _: i32) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i32, c: i32) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i32, c: i32) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i32, c: i32) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i32, c: i32) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i32, c: i32) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i32, c: i32) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    // Returns true where a data module must be inverted
    pub fn mask_function(self) -> fn(i32, i32) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!(),
        }
    }
}


// Mask selection
//------------------------------------------------------------------------------

/// Mask with the lowest penalty and its score, lowest index on ties.
pub fn best_mask(qr: &QR) -> QRResult<(MaskPattern, u32)> {
    let mut best: Option<(MaskPattern, u32)> = None;
    for mask in MaskPattern::all() {
        let mut candidate = qr.clone();
        candidate.apply_mask(mask)?;
        let pen = compute_total_penalty(&candidate);
        if best.map_or(true, |(_, p)| pen < p) {
            best = Some((mask, pen));
        }
    }
    best.ok_or(QRError::RangeError)
}

pub fn apply_best_mask(qr: &mut QR) -> QRResult<MaskPattern> {
    let (mask, _) = best_mask(qr)?;
    qr.apply_mask(mask)?;
    Ok(mask)
}


pub fn compute_total_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i32;
    let get = |r: i32, c: i32| *qr.get(r, c);
    let adj_pen = compute_adjacent_penalty(w, get);
    let blk_pen = compute_block_penalty(w, get);
    let fp_pen = compute_finder_pattern_penalty(w, get);
    let bal_pen = compute_balance_penalty(w, get);
    adj_pen + blk_pen + fp_pen + bal_pen
}

// 3 + (len - 5) for every maximal run of 5 or more in a row or column
fn compute_adjacent_penalty(w: i32, get: impl Fn(i32, i32) -> Color) -> u32 {
    let run_penalty = |len: u32| if len >= 5 { len - 2 } else { 0 };
    let mut pen = 0;
    for i in 0..w {
        let (mut row_clr, mut row_len) = (get(i, 0), 0);
        let (mut col_clr, mut col_len) = (get(0, i), 0);
        for j in 0..w {
            let clr = get(i, j);
            if clr == row_clr {
                row_len += 1;
            } else {
                pen += run_penalty(row_len);
                (row_clr, row_len) = (clr, 1);
            }

            let clr = get(j, i);
            if clr == col_clr {
                col_len += 1;
            } else {
                pen += run_penalty(col_len);
                (col_clr, col_len) = (clr, 1);
            }
        }
        pen += run_penalty(row_len) + run_penalty(col_len);
    }
    pen
}

fn compute_block_penalty(w: i32, get: impl Fn(i32, i32) -> Color) -> u32 {
    let mut pen = 0;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = get(r, c);
            if clr == get(r + 1, c) && clr == get(r, c + 1) && clr == get(r + 1, c + 1) {
                pen += 3;
            }
        }
    }
    pen
}

// Dark, light, dark x3, light, dark with 4 light modules on either side.
// Modules beyond the symbol are quiet zone and count as light.
fn compute_finder_pattern_penalty(w: i32, get: impl Fn(i32, i32) -> Color) -> u32 {
    let mut pen = 0;
    for i in 0..w {
        for is_hor in [true, false] {
            let at = |j: i32| {
                if !(0..w).contains(&j) {
                    return Color::Light;
                }
                if is_hor {
                    get(i, j)
                } else {
                    get(j, i)
                }
            };
            for j in 0..=w - 7 {
                if (j..j + 7).map(at).ne(FINDER_LIKE_PATTERN.iter().copied()) {
                    continue;
                }
                let is_light = |k| at(k) == Color::Light;
                if (j - 4..j).all(is_light) || (j + 7..j + 11).all(is_light) {
                    pen += 40;
                }
            }
        }
    }
    pen
}

// 10 points per full 5% step away from an even dark/light split
fn compute_balance_penalty(w: i32, get: impl Fn(i32, i32) -> Color) -> u32 {
    let total = (w * w) as u32;
    let dark = (0..w)
        .flat_map(|r| (0..w).map(move |c| (r, c)))
        .filter(|&(r, c)| get(r, c) == Color::Dark)
        .count() as u32;
    let dev = (dark * 100).abs_diff(50 * total);
    10 * (dev / (5 * total))
}


// Global constants
//------------------------------------------------------------------------------

static FINDER_LIKE_PATTERN: [Color; 7] = [
    Color::Dark,
    Color::Light,
    Color::Dark,
    Color::Dark,
    Color::Dark,
    Color::Light,
    Color::Dark,
];
