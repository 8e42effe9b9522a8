//! Load regression test - disk-to-RGB round trips per format
//!
//! Encodes small synthetic frames into each supported container, writes
//! them to disk, and checks that `load` sniffs the format and returns
//! the expected RGB samples.

use std::path::PathBuf;
use steervision_core::Channels;
use steervision_io::{IoError, load};
use steervision_test::RegParams;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("steervision_load_reg_{}", name))
}

/// Minimal 24-bit bottom-up BMP container around RGB rows (top row first)
fn build_bmp_24(width: u32, height: u32, rgb_rows: &[&[(u8, u8, u8)]]) -> Vec<u8> {
    let row_stride = ((width as usize * 24 + 31) / 32) * 4;
    let data_size = row_stride * height as usize;
    let file_size = 54 + data_size;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(data_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 16]);
    for row in rgb_rows.iter().rev() {
        let mut written = 0;
        for &(r, g, b) in row.iter() {
            out.push(b);
            out.push(g);
            out.push(r);
            written += 3;
        }
        while written % 4 != 0 {
            out.push(0);
            written += 1;
        }
    }
    out
}

#[test]
fn load_reg() {
    let mut rp = RegParams::new("load");

    // --- Test 1: BMP from disk ---
    #[cfg(feature = "bmp")]
    {
        let top: &[(u8, u8, u8)] = &[(255, 0, 0), (0, 255, 0)];
        let bottom: &[(u8, u8, u8)] = &[(0, 0, 255), (40, 50, 60)];
        let path = temp_path("frame.bmp");
        std::fs::write(&path, build_bmp_24(2, 2, &[top, bottom])).expect("write bmp");

        let image = load(&path).expect("load bmp");
        std::fs::remove_file(&path).ok();

        rp.compare_values(2.0, image.width() as f64, 0.0);
        rp.compare_values(2.0, image.height() as f64, 0.0);
        assert_eq!(image.channels(), Channels::Rgb);
        assert_eq!(image.row(0).unwrap(), &[255, 0, 0, 0, 255, 0]);
        assert_eq!(image.row(1).unwrap(), &[0, 0, 255, 40, 50, 60]);
        eprintln!("  bmp: ok");
    }

    // --- Test 2: PNG from disk ---
    #[cfg(feature = "png-format")]
    {
        let pixels = [9u8, 8, 7, 6, 5, 4];
        let mut encoded = Vec::new();
        {
            let mut encoder = ::png::Encoder::new(&mut encoded, 2, 1);
            encoder.set_color(::png::ColorType::Rgb);
            encoder.set_depth(::png::BitDepth::Eight);
            let mut writer = encoder.write_header().expect("png header");
            writer.write_image_data(&pixels).expect("png data");
        }
        let path = temp_path("frame.png");
        std::fs::write(&path, encoded).expect("write png");

        let image = load(&path).expect("load png");
        std::fs::remove_file(&path).ok();

        rp.compare_values(2.0, image.width() as f64, 0.0);
        assert_eq!(image.data(), &pixels);
        eprintln!("  png: ok");
    }

    // --- Test 3: JPEG from disk, lossy but close ---
    #[cfg(feature = "jpeg")]
    {
        let rgb = vec![90u8; 8 * 8 * 3];
        let mut encoded = Vec::new();
        let encoder = jpeg_encoder::Encoder::new(&mut encoded, 100);
        encoder
            .encode(&rgb, 8, 8, jpeg_encoder::ColorType::Rgb)
            .expect("encode jpeg");
        let path = temp_path("frame.jpg");
        std::fs::write(&path, encoded).expect("write jpeg");

        let image = load(&path).expect("load jpeg");
        std::fs::remove_file(&path).ok();

        rp.compare_values(8.0, image.width() as f64, 0.0);
        for &sample in image.data() {
            assert!((sample as i16 - 90).abs() <= 4, "sample {} drifted", sample);
        }
        eprintln!("  jpeg: ok");
    }

    // --- Test 4: Missing file and non-image content ---
    assert!(matches!(
        load(temp_path("does_not_exist.png")),
        Err(IoError::Io(_))
    ));

    let path = temp_path("garbage.bin");
    std::fs::write(&path, b"unrecognizable bytes").expect("write garbage");
    let result = load(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(IoError::UnsupportedFormat(_))));

    assert!(rp.cleanup(), "load regression test failed");
}
