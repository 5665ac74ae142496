//! Static capacity data for model 2 symbols, indexed by version (index 0 unused).
//!
//! Values follow ISO/IEC 18004 tables 1, 9 and annex E.

// Block layout
//------------------------------------------------------------------------------

/// Error correction block structure of one version and level.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BlockLayout {
    pub ecc_per_block: usize,
    pub group1_blocks: usize,
    pub group1_size: usize,
    pub group2_blocks: usize,
    pub group2_size: usize,
}

impl BlockLayout {
    pub const EMPTY: Self = Self::new(0, 0, 0, 0, 0);

    pub const fn new(
        ecc_per_block: usize,
        group1_blocks: usize,
        group1_size: usize,
        group2_blocks: usize,
        group2_size: usize,
    ) -> Self {
        Self { ecc_per_block, group1_blocks, group1_size, group2_blocks, group2_size }
    }

    pub const fn block_count(&self) -> usize {
        self.group1_blocks + self.group2_blocks
    }

    pub const fn data_codewords(&self) -> usize {
        self.group1_blocks * self.group1_size + self.group2_blocks * self.group2_size
    }

    pub const fn ec_codewords(&self) -> usize {
        self.block_count() * self.ecc_per_block
    }
}

// Global constants
//------------------------------------------------------------------------------

// Data + ec codewords per version
pub(crate) static TOTAL_CODEWORDS: [usize; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

// Modules left over after the last full codeword
pub(crate) static REMAINDER_BITS: [usize; 41] = [
    0, 0, 7, 7, 7, 7, 7, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3,
    3, 3, 3, 0, 0, 0, 0, 0, 0,
];

// Indexed by [version][ECLevel as usize], level order L, M, Q, H
pub(crate) static EC_BLOCKS: [[BlockLayout; 4]; 41] = [
    [BlockLayout::EMPTY; 4],
    // Version 1
    [
        BlockLayout::new(7, 1, 19, 0, 0),
        BlockLayout::new(10, 1, 16, 0, 0),
        BlockLayout::new(13, 1, 13, 0, 0),
        BlockLayout::new(17, 1, 9, 0, 0),
    ],
    // Version 2
    [
        BlockLayout::new(10, 1, 34, 0, 0),
        BlockLayout::new(16, 1, 28, 0, 0),
        BlockLayout::new(22, 1, 22, 0, 0),
        BlockLayout::new(28, 1, 16, 0, 0),
    ],
    // Version 3
    [
        BlockLayout::new(15, 1, 55, 0, 0),
        BlockLayout::new(26, 1, 44, 0, 0),
        BlockLayout::new(18, 2, 17, 0, 0),
        BlockLayout::new(22, 2, 13, 0, 0),
    ],
    // Version 4
    [
        BlockLayout::new(20, 1, 80, 0, 0),
        BlockLayout::new(18, 2, 32, 0, 0),
        BlockLayout::new(26, 2, 24, 0, 0),
        BlockLayout::new(16, 4, 9, 0, 0),
    ],
    // Version 5
    [
        BlockLayout::new(26, 1, 108, 0, 0),
        BlockLayout::new(24, 2, 43, 0, 0),
        BlockLayout::new(18, 2, 15, 2, 16),
        BlockLayout::new(22, 2, 11, 2, 12),
    ],
    // Version 6
    [
        BlockLayout::new(18, 2, 68, 0, 0),
        BlockLayout::new(16, 4, 27, 0, 0),
        BlockLayout::new(24, 4, 19, 0, 0),
        BlockLayout::new(28, 4, 15, 0, 0),
    ],
    // Version 7
    [
        BlockLayout::new(20, 2, 78, 0, 0),
        BlockLayout::new(18, 4, 31, 0, 0),
        BlockLayout::new(18, 2, 14, 4, 15),
        BlockLayout::new(26, 4, 13, 1, 14),
    ],
    // Version 8
    [
        BlockLayout::new(24, 2, 97, 0, 0),
        BlockLayout::new(22, 2, 38, 2, 39),
        BlockLayout::new(22, 4, 18, 2, 19),
        BlockLayout::new(26, 4, 14, 2, 15),
    ],
    // Version 9
    [
        BlockLayout::new(30, 2, 116, 0, 0),
        BlockLayout::new(22, 3, 36, 2, 37),
        BlockLayout::new(20, 4, 16, 4, 17),
        BlockLayout::new(24, 4, 12, 4, 13),
    ],
    // Version 10
    [
        BlockLayout::new(18, 2, 68, 2, 69),
        BlockLayout::new(26, 4, 43, 1, 44),
        BlockLayout::new(24, 6, 19, 2, 20),
        BlockLayout::new(28, 6, 15, 2, 16),
    ],
    // Version 11
    [
        BlockLayout::new(20, 4, 81, 0, 0),
        BlockLayout::new(30, 1, 50, 4, 51),
        BlockLayout::new(28, 4, 22, 4, 23),
        BlockLayout::new(24, 3, 12, 8, 13),
    ],
    // Version 12
    [
        BlockLayout::new(24, 2, 92, 2, 93),
        BlockLayout::new(22, 6, 36, 2, 37),
        BlockLayout::new(26, 4, 20, 6, 21),
        BlockLayout::new(28, 7, 14, 4, 15),
    ],
    // Version 13
    [
        BlockLayout::new(26, 4, 107, 0, 0),
        BlockLayout::new(22, 8, 37, 1, 38),
        BlockLayout::new(24, 8, 20, 4, 21),
        BlockLayout::new(22, 12, 11, 4, 12),
    ],
    // Version 14
    [
        BlockLayout::new(30, 3, 115, 1, 116),
        BlockLayout::new(24, 4, 40, 5, 41),
        BlockLayout::new(20, 11, 16, 5, 17),
        BlockLayout::new(24, 11, 12, 5, 13),
    ],
    // Version 15
    [
        BlockLayout::new(22, 5, 87, 1, 88),
        BlockLayout::new(24, 5, 41, 5, 42),
        BlockLayout::new(30, 5, 24, 7, 25),
        BlockLayout::new(24, 11, 12, 7, 13),
    ],
    // Version 16
    [
        BlockLayout::new(24, 5, 98, 1, 99),
        BlockLayout::new(28, 7, 45, 3, 46),
        BlockLayout::new(24, 15, 19, 2, 20),
        BlockLayout::new(30, 3, 15, 13, 16),
    ],
    // Version 17
    [
        BlockLayout::new(28, 1, 107, 5, 108),
        BlockLayout::new(28, 10, 46, 1, 47),
        BlockLayout::new(28, 1, 22, 15, 23),
        BlockLayout::new(28, 2, 14, 17, 15),
    ],
    // Version 18
    [
        BlockLayout::new(30, 5, 120, 1, 121),
        BlockLayout::new(26, 9, 43, 4, 44),
        BlockLayout::new(28, 17, 22, 1, 23),
        BlockLayout::new(28, 2, 14, 19, 15),
    ],
    // Version 19
    [
        BlockLayout::new(28, 3, 113, 4, 114),
        BlockLayout::new(26, 3, 44, 11, 45),
        BlockLayout::new(26, 17, 21, 4, 22),
        BlockLayout::new(26, 9, 13, 16, 14),
    ],
    // Version 20
    [
        BlockLayout::new(28, 3, 107, 5, 108),
        BlockLayout::new(26, 3, 41, 13, 42),
        BlockLayout::new(30, 15, 24, 5, 25),
        BlockLayout::new(28, 15, 15, 10, 16),
    ],
    // Version 21
    [
        BlockLayout::new(28, 4, 116, 4, 117),
        BlockLayout::new(26, 17, 42, 0, 0),
        BlockLayout::new(28, 17, 22, 6, 23),
        BlockLayout::new(30, 19, 16, 6, 17),
    ],
    // Version 22
    [
        BlockLayout::new(28, 2, 111, 7, 112),
        BlockLayout::new(28, 17, 46, 0, 0),
        BlockLayout::new(30, 7, 24, 16, 25),
        BlockLayout::new(24, 34, 13, 0, 0),
    ],
    // Version 23
    [
        BlockLayout::new(30, 4, 121, 5, 122),
        BlockLayout::new(28, 4, 47, 14, 48),
        BlockLayout::new(30, 11, 24, 14, 25),
        BlockLayout::new(30, 16, 15, 14, 16),
    ],
    // Version 24
    [
        BlockLayout::new(30, 6, 117, 4, 118),
        BlockLayout::new(28, 6, 45, 14, 46),
        BlockLayout::new(30, 11, 24, 16, 25),
        BlockLayout::new(30, 30, 16, 2, 17),
    ],
    // Version 25
    [
        BlockLayout::new(26, 8, 106, 4, 107),
        BlockLayout::new(28, 8, 47, 13, 48),
        BlockLayout::new(30, 7, 24, 22, 25),
        BlockLayout::new(30, 22, 15, 13, 16),
    ],
    // Version 26
    [
        BlockLayout::new(28, 10, 114, 2, 115),
        BlockLayout::new(28, 19, 46, 4, 47),
        BlockLayout::new(28, 28, 22, 6, 23),
        BlockLayout::new(30, 33, 16, 4, 17),
    ],
    // Version 27
    [
        BlockLayout::new(30, 8, 122, 4, 123),
        BlockLayout::new(28, 22, 45, 3, 46),
        BlockLayout::new(30, 8, 23, 26, 24),
        BlockLayout::new(30, 12, 15, 28, 16),
    ],
    // Version 28
    [
        BlockLayout::new(30, 3, 117, 10, 118),
        BlockLayout::new(28, 3, 45, 23, 46),
        BlockLayout::new(30, 4, 24, 31, 25),
        BlockLayout::new(30, 11, 15, 31, 16),
    ],
    // Version 29
    [
        BlockLayout::new(30, 7, 116, 7, 117),
        BlockLayout::new(28, 21, 45, 7, 46),
        BlockLayout::new(30, 1, 23, 37, 24),
        BlockLayout::new(30, 19, 15, 26, 16),
    ],
    // Version 30
    [
        BlockLayout::new(30, 5, 115, 10, 116),
        BlockLayout::new(28, 19, 47, 10, 48),
        BlockLayout::new(30, 15, 24, 25, 25),
        BlockLayout::new(30, 23, 15, 25, 16),
    ],
    // Version 31
    [
        BlockLayout::new(30, 13, 115, 3, 116),
        BlockLayout::new(28, 2, 46, 29, 47),
        BlockLayout::new(30, 42, 24, 1, 25),
        BlockLayout::new(30, 23, 15, 28, 16),
    ],
    // Version 32
    [
        BlockLayout::new(30, 17, 115, 0, 0),
        BlockLayout::new(28, 10, 46, 23, 47),
        BlockLayout::new(30, 10, 24, 35, 25),
        BlockLayout::new(30, 19, 15, 35, 16),
    ],
    // Version 33
    [
        BlockLayout::new(30, 17, 115, 1, 116),
        BlockLayout::new(28, 14, 46, 21, 47),
        BlockLayout::new(30, 29, 24, 19, 25),
        BlockLayout::new(30, 11, 15, 46, 16),
    ],
    // Version 34
    [
        BlockLayout::new(30, 13, 115, 6, 116),
        BlockLayout::new(28, 14, 46, 23, 47),
        BlockLayout::new(30, 44, 24, 7, 25),
        BlockLayout::new(30, 59, 16, 1, 17),
    ],
    // Version 35
    [
        BlockLayout::new(30, 12, 121, 7, 122),
        BlockLayout::new(28, 12, 47, 26, 48),
        BlockLayout::new(30, 39, 24, 14, 25),
        BlockLayout::new(30, 22, 15, 41, 16),
    ],
    // Version 36
    [
        BlockLayout::new(30, 6, 121, 14, 122),
        BlockLayout::new(28, 6, 47, 34, 48),
        BlockLayout::new(30, 46, 24, 10, 25),
        BlockLayout::new(30, 2, 15, 64, 16),
    ],
    // Version 37
    [
        BlockLayout::new(30, 17, 122, 4, 123),
        BlockLayout::new(28, 29, 46, 14, 47),
        BlockLayout::new(30, 49, 24, 10, 25),
        BlockLayout::new(30, 24, 15, 46, 16),
    ],
    // Version 38
    [
        BlockLayout::new(30, 4, 122, 18, 123),
        BlockLayout::new(28, 13, 46, 32, 47),
        BlockLayout::new(30, 48, 24, 14, 25),
        BlockLayout::new(30, 42, 15, 32, 16),
    ],
    // Version 39
    [
        BlockLayout::new(30, 20, 117, 4, 118),
        BlockLayout::new(28, 40, 47, 7, 48),
        BlockLayout::new(30, 43, 24, 22, 25),
        BlockLayout::new(30, 10, 15, 67, 16),
    ],
    // Version 40
    [
        BlockLayout::new(30, 19, 118, 6, 119),
        BlockLayout::new(28, 18, 47, 31, 48),
        BlockLayout::new(30, 34, 24, 34, 25),
        BlockLayout::new(30, 20, 15, 61, 16),
    ],
];

// Row/column centre candidates of alignment patterns
pub(crate) static ALIGNMENT_PATTERN_POSITIONS: [&[i32]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];
