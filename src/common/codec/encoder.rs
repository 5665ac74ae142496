pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::Segment;
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    use super::writer::{pack, pad_remaining_capacity, push_segment, push_terminator};

    /// Strongest level, then smallest version, that holds `seg`.
    ///
    /// Levels are tried in the given order and versions ascending, or only
    /// `ver` when it is pinned.
    pub fn select_version_and_level(
        seg: &Segment,
        ver: Option<Version>,
        levels: &[ECLevel],
    ) -> QRResult<(Version, ECLevel)> {
        let count = seg.char_count();
        for &ecl in levels {
            let found = match ver {
                Some(v) => (v.char_capacity(ecl, seg.mode) >= count).then_some(v),
                None => Version::all().find(|v| v.char_capacity(ecl, seg.mode) >= count),
            };
            if let Some(v) = found {
                return Ok((v, ecl));
            }
        }
        Err(QRError::CapacityExceeded)
    }

    /// Packed data codewords of `seg` for the given version and level.
    pub fn encode_with_version(seg: &Segment, ver: Version, ecl: ECLevel) -> QRResult<Vec<u8>> {
        let bcap = ver.data_bit_capacity(ecl);
        if seg.bit_len(ver) > bcap {
            return Err(QRError::CapacityExceeded);
        }

        let mut bs = BitStream::new(bcap);
        push_segment(seg, ver, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);
        pack(&bs, ver.data_codewords(ecl))
    }

    /// Selects the version and level for `data` and packs its data codewords.
    pub fn encode(
        data: &[u8],
        ver: Option<Version>,
        levels: &[ECLevel],
    ) -> QRResult<(Vec<u8>, Version, ECLevel)> {
        if data.is_empty() {
            return Err(QRError::EmptyData);
        }
        let seg = Segment::from_data(data);
        let (ver, ecl) = select_version_and_level(&seg, ver, levels)?;
        let codewords = encode_with_version(&seg, ver, ecl)?;
        Ok((codewords, ver, ecl))
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{Mode, Segment, PADDING_CODEWORDS};
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::Version;

    pub fn push_segment(seg: &Segment, ver: Version, out: &mut BitStream) {
        push_header(seg, ver, out);
        match seg.mode {
            Mode::Numeric => push_numeric_data(seg.data, out),
            Mode::Alphanumeric => push_alphanumeric_data(seg.data, out),
            Mode::Byte => push_byte_data(seg.data, out),
        }
    }

    fn push_header(seg: &Segment, ver: Version, out: &mut BitStream) {
        out.push_bits(seg.mode.indicator(), ver.mode_bits());
        let char_cnt = seg.char_count();
        let len_bits = ver.char_cnt_bits(seg.mode);
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(char_cnt as u16, len_bits);
    }

    fn push_numeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(3) {
            let len = Mode::Numeric.encoded_len(chunk.len());
            let data = Mode::Numeric.encode_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    fn push_alphanumeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(2) {
            let len = Mode::Alphanumeric.encoded_len(chunk.len());
            let data = Mode::Alphanumeric.encode_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(1) {
            let data = Mode::Byte.encode_chunk(chunk);
            out.push_bits(data, 8);
        }
    }

    // Up to 4 zero bits, fewer if capacity runs out first
    pub fn push_terminator(out: &mut BitStream) {
        let term_len = std::cmp::min(4, out.remaining_capacity());
        out.push_bits(0u8, term_len);
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

        let remain_byte_capacity = out.remaining_capacity() >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

    /// Splits the stream into codewords, requiring exactly `count` of them.
    pub fn pack(bs: &BitStream, count: usize) -> QRResult<Vec<u8>> {
        let bit_len = count << 3;
        match bs.len() {
            len if len < bit_len => Err(QRError::StreamUnderflow),
            len if len > bit_len => Err(QRError::StreamOverflow),
            _ => Ok(bs.data().to_vec()),
        }
    }

    #[cfg(test)]
    mod writer_tests {
        use super::{
            pack, pad_remaining_capacity, push_alphanumeric_data, push_byte_data, push_header,
            push_numeric_data, push_padding_bits, push_padding_codewords, push_terminator,
        };
        use crate::common::bit_utils::BitStream;
        use crate::common::codec::{Mode, Segment, PADDING_CODEWORDS};
        use crate::common::error::QRError;
        use crate::common::metadata::{ECLevel, Version};

        fn header_bytes(ver: usize, mode: Mode, len: usize) -> Vec<u8> {
            let ver = Version::new(ver);
            let dummy = vec![b'1'; len];
            let seg = Segment::new(mode, &dummy);
            let mut bs = BitStream::new(ver.data_bit_capacity(ECLevel::L));
            push_header(&seg, ver, &mut bs);
            bs.data().to_vec()
        }

        #[test]
        fn test_push_header_v1() {
            assert_eq!(header_bytes(1, Mode::Numeric, 1023), [0b00011111, 0b11111100]);
            assert_eq!(header_bytes(1, Mode::Alphanumeric, 511), [0b00101111, 0b11111000]);
            assert_eq!(header_bytes(1, Mode::Byte, 255), [0b01001111, 0b11110000]);
        }

        #[test]
        fn test_push_header_v10() {
            assert_eq!(header_bytes(10, Mode::Numeric, 4095), [0b00011111, 0b11111111]);
            assert_eq!(header_bytes(10, Mode::Alphanumeric, 2047), [0b00101111, 0b11111110]);
            assert_eq!(
                header_bytes(10, Mode::Byte, 65535),
                [0b01001111, 0b11111111, 0b11110000]
            );
        }

        #[test]
        fn test_push_header_v27() {
            assert_eq!(
                header_bytes(27, Mode::Numeric, 16383),
                [0b00011111, 0b11111111, 0b11000000]
            );
            assert_eq!(
                header_bytes(27, Mode::Alphanumeric, 8191),
                [0b00101111, 0b11111111, 0b10000000]
            );
        }

        #[test]
        fn test_push_numeric_data() {
            let mut bs = BitStream::new(152);
            push_numeric_data(b"01234567", &mut bs);
            assert_eq!(bs.data(), [0b00000011, 0b00010101, 0b10011000, 0b01100000]);
            let mut bs = BitStream::new(152);
            push_numeric_data(b"8", &mut bs);
            assert_eq!(bs.data(), [0b10000000]);
        }

        #[test]
        fn test_push_alphanumeric_data() {
            let mut bs = BitStream::new(152);
            push_alphanumeric_data(b"AC-42", &mut bs);
            assert_eq!(bs.data(), [0b00111001, 0b11011100, 0b11100100, 0b00100000])
        }

        #[test]
        fn test_push_byte_data() {
            let mut bs = BitStream::new(152);
            push_byte_data(b"a", &mut bs);
            assert_eq!(bs.data(), [0b01100001])
        }

        #[test]
        fn test_push_terminator() {
            let mut bs = BitStream::new(152);
            bs.push_bits(0b1u8, 1);
            push_terminator(&mut bs);
            assert_eq!(bs.len(), 5);
        }

        #[test]
        fn test_push_terminator_short() {
            // Only 2 bits of capacity remain
            let mut bs = BitStream::new(16);
            bs.push_bits(0u16, 14);
            push_terminator(&mut bs);
            assert_eq!(bs.len(), 16);

            // Full stream takes no terminator
            let mut bs = BitStream::new(8);
            bs.push_bits(0xffu8, 8);
            push_terminator(&mut bs);
            assert_eq!(bs.len(), 8);
        }

        #[test]
        fn test_push_padding_bits() {
            let mut bs = BitStream::new(152);
            bs.push_bits(0b101u8, 3);
            push_padding_bits(&mut bs);
            assert_eq!(bs.len(), 8);
            assert_eq!(bs.data(), [0b10100000]);

            push_padding_bits(&mut bs);
            assert_eq!(bs.len(), 8);
        }

        #[test]
        fn test_push_padding_codewords() {
            let mut bs = BitStream::new(40);
            bs.push_bits(0xaau8, 8);
            push_padding_codewords(&mut bs);
            let pc = PADDING_CODEWORDS;
            assert_eq!(bs.data(), [0xaa, pc[0], pc[1], pc[0], pc[1]]);
        }

        #[test]
        fn test_pad_remaining_capacity() {
            let mut bs = BitStream::new(24);
            bs.push_bits(0b11u8, 2);
            pad_remaining_capacity(&mut bs);
            assert_eq!(bs.data(), [0b11000000, 0xec, 0x11]);
        }

        #[test]
        fn test_pack() {
            let bs = BitStream::from_codewords(&[1, 2, 3]);
            assert_eq!(pack(&bs, 3), Ok(vec![1, 2, 3]));
            assert_eq!(pack(&bs, 4), Err(QRError::StreamUnderflow));
            assert_eq!(pack(&bs, 2), Err(QRError::StreamOverflow));

            let mut bs = BitStream::new(24);
            bs.push_bits(0xffffu16, 16);
            bs.push(true);
            assert_eq!(pack(&bs, 3), Err(QRError::StreamUnderflow));
        }
    }
}
