//! Preprocess regression test - model-input pipeline contract
//!
//! Verifies the fixed pipeline's output contract on synthetic frames:
//! shape 64x64x3, values spanning exactly [-0.5, 0.5], NaN on the
//! degenerate constant frame, and gray-channel-axis round trips for the
//! single-channel path.

use steervision_core::{add_gray_dimension, drop_gray_dimension};
use steervision_augment::{preprocess, preprocess_float};
use steervision_test::{RegParams, constant_image, gradient_image, gray_ramp_plane};

#[test]
fn preprocess_reg() {
    let mut rp = RegParams::new("preprocess");

    // --- Test 1: Output shape from a camera-sized frame ---
    let frame = gradient_image(320, 160);
    let input = preprocess(&frame).expect("preprocess");
    rp.compare_values(64.0, input.width() as f64, 0.0);
    rp.compare_values(64.0, input.height() as f64, 0.0);
    eprintln!("  output shape: {}x{}", input.width(), input.height());

    // --- Test 2: Normalization spans exactly [-0.5, 0.5] ---
    rp.compare_values(-0.5, input.min() as f64, 0.0);
    rp.compare_values(0.5, input.max() as f64, 0.0);
    assert!(input.data().iter().all(|v| v.is_finite()));

    // --- Test 3: Non-camera aspect ratios land on the same shape ---
    let square = preprocess(&gradient_image(100, 100)).expect("preprocess square");
    rp.compare_values(64.0, square.width() as f64, 0.0);
    rp.compare_values(64.0, square.height() as f64, 0.0);

    // --- Test 4: Float path agrees on shape and range ---
    let finput = preprocess_float(&frame.to_float_scaled()).expect("preprocess float");
    rp.compare_values(64.0, finput.width() as f64, 0.0);
    rp.compare_values(64.0, finput.height() as f64, 0.0);
    rp.compare_values(-0.5, finput.min() as f64, 0.0);
    rp.compare_values(0.5, finput.max() as f64, 0.0);

    // --- Test 5: Constant frame degenerates to NaN, not a panic ---
    let flat = preprocess(&constant_image(64, 64, 7)).expect("preprocess flat");
    assert!(flat.data().iter().all(|v| v.is_nan()));
    eprintln!("  constant frame -> NaN");

    // --- Test 6: Gray channel axis round trip ---
    let plane = gray_ramp_plane(64, 64);
    let with_axis = add_gray_dimension(&plane);
    let back = drop_gray_dimension(&with_axis).expect("drop axis");
    let same = back == plane;
    rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "preprocess regression test failed");
}
