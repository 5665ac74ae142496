// Spurious grids may be detected in large symbols, but only one may decode
fn decode(qr: &qrsmith::QR) -> (rqrr::MetaData, String) {
    let img = qr.to_image(4);
    let (w, h) = img.dimensions();
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
            img.get_pixel(x as u32, y as u32).0[0]
        });
    let grids = prepared.detect_grids();
    let mut decoded = grids.iter().filter_map(|g| g.decode().ok()).collect::<Vec<_>>();
    assert_eq!(decoded.len(), 1, "Expected exactly one readable symbol");
    decoded.remove(0)
}

#[cfg(test)]
mod qr_proptests {
    use prop::string::string_regex;
    use proptest::prelude::*;

    use qrsmith::*;

    use super::decode;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn qr_strategy(
        regex: &'static str,
        max_sz: usize,
    ) -> impl Strategy<Value = (ECLevel, String)> {
        ec_level_strategy().prop_flat_map(move |ecl| {
            let pattern = format!(r"{regex}{{1,{max_sz}}}");
            string_regex(&pattern).unwrap().prop_map(move |data| (ecl, data))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_numeric(params in qr_strategy("[0-9]", 600)) {
            let (ecl, data) = params;
            let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
            prop_assert!(qr.ec_level() >= ecl);

            let (_meta, decoded) = decode(&qr);
            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_alphanumeric(params in qr_strategy(r"[0-9A-Z $%*+\-./:]", 400)) {
            let (ecl, data) = params;
            let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
            prop_assert!(qr.ec_level() >= ecl);

            let (_meta, decoded) = decode(&qr);
            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_byte(params in qr_strategy(r"[a-z0-9 ,.!?éü🌏]", 120)) {
            let (ecl, data) = params;
            let qr = QRBuilder::new(data.as_bytes()).exact_ec_level(ecl).build().unwrap();
            prop_assert_eq!(qr.ec_level(), ecl);

            let (_meta, decoded) = decode(&qr);
            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_idempotent(data in prop::collection::vec(any::<u8>(), 1..200)) {
            let builder = QRBuilder::new(&data);
            let first = builder.build().unwrap();
            let second = builder.build().unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use rayon::prelude::*;
    use test_case::test_case;

    use qrsmith::{ECLevel, MaskPattern, Module, QRBuilder, QRError, Region, Version, QR};

    use super::decode;

    fn assert_complete(qr: &QR) {
        let w = qr.width() as i32;
        for r in 0..w {
            for c in 0..w {
                assert_ne!(qr.get(r, c), Module::Unset, "Unset module at ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_hello_1l() {
        let qr = QRBuilder::new(b"HELLO")
            .version(Version::new(1))
            .exact_ec_level(ECLevel::L)
            .build()
            .unwrap();

        assert_eq!(qr.width(), 21);
        assert_eq!(qr.ec_level(), ECLevel::L);
        assert_complete(&qr);
        assert_eq!(qr.get(13, 8), Module::Reserved(Region::DarkModule, qrsmith::Color::Dark));

        let (meta, content) = decode(&qr);
        assert_eq!(meta.version.0, 1);
        assert_eq!(meta.ecc_level, ECLevel::L.format_bits() as u16);
        assert_eq!(meta.mask, *qr.mask().unwrap() as u16);
        assert_eq!(content, "HELLO");
    }

    #[test_case("HELLO", 1, ECLevel::H)]
    #[test_case("HELLO WORLD", 2, ECLevel::H)]
    #[test_case("01234567", 1, ECLevel::H)]
    #[test_case("Hello, world! 123", 3, ECLevel::H)]
    fn test_auto_selection(data: &str, ver: usize, ecl: ECLevel) {
        let qr = QRBuilder::new(data.as_bytes()).build().unwrap();
        assert_eq!(qr.version(), Version::new(ver));
        assert_eq!(qr.ec_level(), ecl);
        assert_eq!(decode(&qr).1, data);
    }

    #[test]
    fn test_largest_byte_payload() {
        let data = "a".repeat(2953);
        let qr = QRBuilder::new(data.as_bytes()).build().unwrap();
        assert_eq!((qr.version(), qr.ec_level()), (Version::MAX, ECLevel::L));
        assert_complete(&qr);

        let data = "a".repeat(2954);
        let res = QRBuilder::new(data.as_bytes()).build();
        assert_eq!(res.err(), Some(QRError::CapacityExceeded));
    }

    #[test]
    fn test_pinned_version_too_small() {
        let data = "HELLO WORLD".repeat(3);
        let res = QRBuilder::new(data.as_bytes()).version(Version::new(1)).build();
        assert_eq!(res.err(), Some(QRError::CapacityExceeded));
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(QRBuilder::new(b"").build().err(), Some(QRError::EmptyData));
    }

    fn build_pinned(v: usize) -> QR {
        QRBuilder::new(b"VERSION SWEEP")
            .version(Version::new(v))
            .exact_ec_level(ECLevel::M)
            .build()
            .unwrap()
    }

    #[test]
    fn test_every_version() {
        let qrs = (1..=40).into_par_iter().map(build_pinned).collect::<Vec<_>>();
        for (qr, v) in qrs.iter().zip(1..=40) {
            assert_eq!(qr.width(), 4 * v + 17);
            assert_complete(qr);

            let (meta, content) = decode(qr);
            assert_eq!(meta.version.0, v);
            assert_eq!(content, "VERSION SWEEP");
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inputs =
            (0..16).map(|i| format!("parallel payload {i}").repeat(i + 1)).collect::<Vec<_>>();
        let build = |s: &String| QRBuilder::new(s.as_bytes()).build().unwrap();
        let par = inputs.par_iter().map(build).collect::<Vec<_>>();
        let seq = inputs.iter().map(build).collect::<Vec<_>>();
        assert_eq!(par, seq);
    }

    #[test]
    fn test_forced_mask_changes_only_data() {
        let build = |m: u8| {
            QRBuilder::new(b"MASKED")
                .version(Version::new(2))
                .exact_ec_level(ECLevel::Q)
                .mask(MaskPattern::new(m))
                .build()
                .unwrap()
        };
        let a = build(0);
        let b = build(4);
        let w = a.width() as i32;
        for r in 0..w {
            for c in 0..w {
                match (a.get(r, c), b.get(r, c)) {
                    (Module::Data(_), Module::Data(_)) => {}
                    (
                        Module::Reserved(Region::FormatInfo, _),
                        Module::Reserved(Region::FormatInfo, _),
                    ) => {}
                    (x, y) => assert_eq!(x, y, "({r}, {c})"),
                }
            }
        }
    }

    #[test]
    fn test_ascii_render() {
        let qr = QRBuilder::new(b"ASCII").build().unwrap();
        let s = qr.to_str(1);
        assert_eq!(s.lines().count(), qr.width() + 8);
        assert!(s.contains('█'));
    }
}
