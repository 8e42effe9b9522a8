//! Regression test parameters and comparisons

use steervision_core::{FImage, Image};

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the running
/// comparison index, and the failures recorded so far. Individual
/// comparisons report pass/fail and keep going; [`RegParams::cleanup`]
/// delivers the overall verdict.
pub struct RegParams {
    /// Name of the test (e.g., "steering")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value (typically from a reference)
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if !(diff <= delta) {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two 8-bit images for exact equality
    pub fn compare_images(&mut self, image1: &Image, image2: &Image) -> bool {
        self.index += 1;

        if image1.dimensions() != image2.dimensions() || image1.channels() != image2.channels() {
            return self.record_image_failure("dimension mismatch");
        }
        if image1.data() != image2.data() {
            return self.record_image_failure("sample mismatch");
        }

        true
    }

    /// Compare two floating-point images sample-by-sample within `delta`
    pub fn compare_fimages(&mut self, image1: &FImage, image2: &FImage, delta: f32) -> bool {
        self.index += 1;

        if image1.dimensions() != image2.dimensions() || image1.channels() != image2.channels() {
            return self.record_image_failure("dimension mismatch");
        }

        for (i, (a, b)) in image1.data().iter().zip(image2.data()).enumerate() {
            if !((a - b).abs() <= delta) {
                return self
                    .record_image_failure(&format!("sample {} differs: {} vs {}", i, a, b));
            }
        }

        true
    }

    fn record_image_failure(&mut self, detail: &str) -> bool {
        let msg = format!(
            "Failure in {}_reg: image comparison for index {} - {}",
            self.test_name, self.index, detail
        );
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steervision_core::Channels;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::new("test");
        let a = Image::from_data(2, 1, Channels::Gray, vec![1, 2]).unwrap();
        let b = a.clone();
        assert!(rp.compare_images(&a, &b));

        let c = Image::from_data(2, 1, Channels::Gray, vec![1, 3]).unwrap();
        assert!(!rp.compare_images(&a, &c));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_fimages_delta() {
        let mut rp = RegParams::new("test");
        let a = FImage::from_data(2, 1, Channels::Gray, vec![0.0, 1.0]).unwrap();
        let b = FImage::from_data(2, 1, Channels::Gray, vec![0.05, 0.95]).unwrap();
        assert!(rp.compare_fimages(&a, &b, 0.1));
        assert!(!rp.compare_fimages(&a, &b, 0.01));
    }
}
