//! Pipeline regression test - disk frame to model input, end to end
//!
//! Drives the full path a training sample takes: decode from disk,
//! augment with a label-consistent flip, preprocess into the normalized
//! model input.

use steervision::augment::{AugmentOptions, Augmenter};
use steervision::{Channels, load, preprocess_float};
use steervision_test::RegParams;

/// Minimal 24-bit bottom-up BMP container around a gradient frame
fn gradient_bmp(width: u32, height: u32) -> Vec<u8> {
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
    for row in (0..height).rev() {
        let mut written = 0;
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (row * 255 / height) as u8;
            out.push(128); // blue
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
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    let path = std::env::temp_dir().join("steervision_pipeline_reg.bmp");
    std::fs::write(&path, gradient_bmp(320, 160)).expect("write frame");

    // --- Decode ---
    let frame = load(&path).expect("load frame");
    std::fs::remove_file(&path).ok();
    rp.compare_values(320.0, frame.width() as f64, 0.0);
    rp.compare_values(160.0, frame.height() as f64, 0.0);
    assert_eq!(frame.channels(), Channels::Rgb);

    // --- Augment with a guaranteed flip ---
    let options = AugmentOptions {
        flip_prob: 1.0,
        shear_range: 0.0,
    };
    let mut augmenter = Augmenter::with_seed(options, 99).expect("augmenter");
    let sample = augmenter.augment(&frame, 0.25).expect("augment");
    rp.compare_values(-0.25, sample.steering, 0.0);
    eprintln!("  flip negated steering: {}", sample.steering);

    // --- Preprocess into the model input ---
    let input = preprocess_float(&sample.image).expect("preprocess");
    rp.compare_values(64.0, input.width() as f64, 0.0);
    rp.compare_values(64.0, input.height() as f64, 0.0);
    rp.compare_values(-0.5, input.min() as f64, 0.0);
    rp.compare_values(0.5, input.max() as f64, 0.0);
    assert!(input.data().iter().all(|v| v.is_finite()));

    assert!(rp.cleanup(), "pipeline regression test failed");
}
