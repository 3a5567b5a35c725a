//! End-to-end encode/decode tests for the GIF container.

use oxigif::{
    decode_from_slice, encode_to_vec, ColorTable, Frame, FrameOptions, GifError, Image,
    ImageOptions, Rgb,
};

fn random_pixels(count: usize, bit_depth: u8, seed: u32) -> Vec<u8> {
    let mask = ((1u16 << bit_depth) - 1) as u8;
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 24) as u8 & mask
        })
        .collect()
}

#[test]
fn test_roundtrip_all_bit_depths() {
    for bit_depth in 2..=8 {
        let options = ImageOptions {
            bit_depth,
            loop_count: 2,
        };
        let mut image = Image::new(16, 16, options).unwrap();
        for seed in 0..3 {
            image
                .add_frame(
                    random_pixels(256, bit_depth, 0xC0FFEE ^ seed),
                    FrameOptions::with_duration(8),
                )
                .unwrap();
        }

        let bytes = encode_to_vec(&image).unwrap();
        let decoded = decode_from_slice(&bytes).unwrap();

        assert_eq!(decoded.options().bit_depth, bit_depth);
        assert_eq!(decoded.options().loop_count, 2);
        assert_eq!(decoded.palette(), image.palette());
        assert_eq!(decoded.frames().len(), 3);
        for (a, b) in decoded.frames().iter().zip(image.frames()) {
            assert_eq!(a.pixels, b.pixels, "bit depth {bit_depth}");
            assert_eq!(a.options.duration, 8);
        }
    }
}

#[test]
fn test_loop_forever_decodes_as_wire_value() {
    // 0 is written as 65535, so both loop counts decode identically.
    for loop_count in [0u16, 65535] {
        let options = ImageOptions {
            bit_depth: 2,
            loop_count,
        };
        let mut image = Image::new(2, 2, options).unwrap();
        image
            .add_frame(vec![0, 1, 2, 3], FrameOptions::default())
            .unwrap();
        let decoded = decode_from_slice(&encode_to_vec(&image).unwrap()).unwrap();
        assert_eq!(decoded.options().loop_count, 65535);
    }
}

#[test]
fn test_finite_loop_count_preserved() {
    let options = ImageOptions {
        bit_depth: 2,
        loop_count: 7,
    };
    let mut image = Image::new(2, 2, options).unwrap();
    image
        .add_frame(vec![0, 0, 0, 0], FrameOptions::default())
        .unwrap();
    let decoded = decode_from_slice(&encode_to_vec(&image).unwrap()).unwrap();
    assert_eq!(decoded.options().loop_count, 7);
}

#[test]
fn test_transparent_index_zero_survives() {
    let options = ImageOptions {
        bit_depth: 2,
        ..ImageOptions::default()
    };
    let mut image = Image::new(2, 2, options).unwrap();
    for transparent in [None, Some(0), Some(3)] {
        image
            .add_frame(
                vec![0, 1, 2, 3],
                FrameOptions {
                    duration: 10,
                    transparent,
                    local_palette: None,
                },
            )
            .unwrap();
    }

    let decoded = decode_from_slice(&encode_to_vec(&image).unwrap()).unwrap();
    let got: Vec<_> = decoded
        .frames()
        .iter()
        .map(|frame| frame.options.transparent)
        .collect();
    assert_eq!(got, vec![None, Some(0), Some(3)]);
}

#[test]
fn test_local_palette_frame_roundtrip() {
    let options = ImageOptions {
        bit_depth: 8,
        ..ImageOptions::default()
    };
    let mut image = Image::new(8, 8, options).unwrap();
    let local = ColorTable::exact(vec![
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 0, 255),
        Rgb::BLACK,
    ])
    .unwrap();
    image
        .add_frame(
            random_pixels(64, 2, 0xBEEF),
            FrameOptions {
                duration: 4,
                transparent: None,
                local_palette: Some(local.clone()),
            },
        )
        .unwrap();
    image
        .add_frame(random_pixels(64, 8, 0xF00D), FrameOptions::with_duration(4))
        .unwrap();

    let decoded = decode_from_slice(&encode_to_vec(&image).unwrap()).unwrap();
    assert_eq!(decoded.frames()[0].options.local_palette, Some(local));
    assert_eq!(decoded.frames()[0].pixels, image.frames()[0].pixels);
    assert_eq!(decoded.frames()[1].options.local_palette, None);
    assert_eq!(decoded.frames()[1].pixels, image.frames()[1].pixels);
}

#[test]
fn test_offset_frame_roundtrip() {
    let options = ImageOptions {
        bit_depth: 4,
        ..ImageOptions::default()
    };
    let mut image = Image::new(16, 16, options).unwrap();
    let frame = Frame::at(
        4,
        6,
        8,
        4,
        random_pixels(32, 4, 0xABCD),
        FrameOptions::with_duration(20),
    )
    .unwrap();
    image.push_frame(frame).unwrap();

    let decoded = decode_from_slice(&encode_to_vec(&image).unwrap()).unwrap();
    let got = &decoded.frames()[0];
    assert_eq!((got.left, got.top, got.width, got.height), (4, 6, 8, 4));
    assert_eq!(got.pixels, image.frames()[0].pixels);
}

#[test]
fn test_custom_palette_roundtrip() {
    let options = ImageOptions {
        bit_depth: 8,
        ..ImageOptions::default()
    };
    let mut image = Image::new(4, 4, options).unwrap();
    image
        .set_palette(ColorTable::from_levels([6, 7, 6]).unwrap())
        .unwrap();
    image
        .add_frame(random_pixels(16, 8, 0x5EED), FrameOptions::default())
        .unwrap();

    let decoded = decode_from_slice(&encode_to_vec(&image).unwrap()).unwrap();
    assert_eq!(decoded.palette(), image.palette());
    assert_eq!(decoded.palette().len(), 256);
}

#[test]
fn test_comments_roundtrip() {
    let options = ImageOptions {
        bit_depth: 2,
        ..ImageOptions::default()
    };
    let mut image = Image::new(2, 2, options).unwrap();
    image.push_comment("made with oxigif".to_string());
    image.push_comment("x".repeat(300));
    image
        .add_frame(vec![0, 1, 1, 0], FrameOptions::default())
        .unwrap();

    let decoded = decode_from_slice(&encode_to_vec(&image).unwrap()).unwrap();
    assert_eq!(decoded.comments(), image.comments());
    assert_eq!(decoded.frames()[0].pixels, vec![0, 1, 1, 0]);
}

#[test]
fn test_corrupt_pixel_payload_rejected() {
    let options = ImageOptions {
        bit_depth: 2,
        ..ImageOptions::default()
    };
    let mut image = Image::new(2, 2, options).unwrap();
    image
        .add_frame(vec![0, 1, 1, 0], FrameOptions::default())
        .unwrap();
    let mut bytes = encode_to_vec(&image).unwrap();

    // Flip a bit inside the 3-byte LZW payload near the end of the stream.
    let len = bytes.len();
    bytes[len - 4] ^= 0x80;
    assert!(decode_from_slice(&bytes).is_err());
}

#[test]
fn test_unknown_extension_rejected() {
    let options = ImageOptions {
        bit_depth: 2,
        ..ImageOptions::default()
    };
    let mut image = Image::new(2, 2, options).unwrap();
    image
        .add_frame(vec![0, 0, 0, 0], FrameOptions::default())
        .unwrap();
    let mut bytes = encode_to_vec(&image).unwrap();

    // The application extension label follows the first introducer.
    let pos = bytes.iter().position(|&b| b == 0x21).unwrap();
    bytes[pos + 1] = 0x01;
    assert!(matches!(
        decode_from_slice(&bytes),
        Err(GifError::UnknownExtension { label: 0x01 })
    ));
}

#[test]
fn test_empty_stream_rejected() {
    assert!(decode_from_slice(&[]).is_err());
    assert!(matches!(
        decode_from_slice(b"NOTGIF"),
        Err(GifError::InvalidSignature { .. })
    ));
}

#[test]
fn test_large_noisy_frame_roundtrip() {
    // 256x256 noise at depth 8 forces repeated code table resets.
    let mut image = Image::new(256, 256, ImageOptions::default()).unwrap();
    image
        .add_frame(random_pixels(65536, 8, 0xDEAD_BEEF), FrameOptions::default())
        .unwrap();

    let bytes = encode_to_vec(&image).unwrap();
    let decoded = decode_from_slice(&bytes).unwrap();
    assert_eq!(decoded.frames()[0].pixels, image.frames()[0].pixels);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_encode_roundtrip() {
    let mut image = Image::new(32, 32, ImageOptions::default()).unwrap();
    for seed in 0..16 {
        image
            .add_frame(random_pixels(1024, 8, seed), FrameOptions::with_duration(3))
            .unwrap();
    }

    let mut bytes = Vec::new();
    oxigif::encode_parallel(&image, &mut bytes).unwrap();
    let decoded = decode_from_slice(&bytes).unwrap();
    assert_eq!(decoded.frames().len(), 16);
    for (a, b) in decoded.frames().iter().zip(image.frames()) {
        assert_eq!(a.pixels, b.pixels);
    }
}
