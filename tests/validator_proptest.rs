// Property tests for the square / max-side acceptance rules
use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use proptest::prelude::*;
use square_icons::icon_export::{ExportConfig, IconError, check_dimensions, validate_bytes};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgba([10u8, 20, 30, 255]));
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("failed to encode test image");
    cursor.into_inner()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn square_within_bound_is_accepted(side in 1u32..=500) {
        let source = validate_bytes(&png_bytes(side, side), "mem", &ExportConfig::default())
            .expect("square image within bound must validate");
        prop_assert_eq!((source.width(), source.height()), (side, side));
    }

    #[test]
    fn non_square_is_rejected_regardless_of_size(width in 1u32..=700, height in 1u32..=700) {
        prop_assume!(width != height);
        let result = validate_bytes(&png_bytes(width, height), "mem", &ExportConfig::default());
        prop_assert_eq!(result.err(), Some(IconError::AspectRatio { width, height }));
    }

    #[test]
    fn square_over_bound_is_too_large(side in 501u32..=640) {
        let result = validate_bytes(&png_bytes(side, side), "mem", &ExportConfig::default());
        prop_assert_eq!(
            result.err(),
            Some(IconError::SizeTooLarge { width: side, height: side, max: 500 })
        );
    }

    #[test]
    fn arbitrary_bytes_only_fail_with_validation_errors(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        // 随机字节几乎不可能是合法图片；即便解码成功，也必须满足尺寸规则
        match validate_bytes(&bytes, "mem", &ExportConfig::default()) {
            Ok(source) => prop_assert!(source.width() == source.height() && source.width() <= 500),
            Err(err) => prop_assert!(matches!(
                err,
                IconError::Decode(_) | IconError::AspectRatio { .. } | IconError::SizeTooLarge { .. }
            ), "unexpected error variant: {:?}", err),
        }
    }

    #[test]
    fn dimension_rule_matches_definition(width in 0u32..2000, height in 0u32..2000, max in 1u32..1000) {
        let result = check_dimensions(width, height, max);
        if width != height {
            prop_assert_eq!(result, Err(IconError::AspectRatio { width, height }));
        } else if width > max {
            prop_assert_eq!(result, Err(IconError::SizeTooLarge { width, height, max }));
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
