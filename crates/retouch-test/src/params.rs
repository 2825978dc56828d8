//! Regression test parameters and comparisons

use retouch_core::Raster;

/// Regression test state
///
/// Tracks an index across a sequence of comparisons so a failure message
/// points at the exact check that broke, and collects all failures before
/// the test asserts on [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "bilateral")
    pub test_name: String,
    /// Current check index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
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

    /// Get the current check index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values.
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
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

    /// Record a boolean check.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!(
                "Failure in {}_reg: check for index {}: {}",
                self.test_name, self.index, what
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Compare two rasters for exact equality.
    pub fn compare_rasters(&mut self, raster1: &Raster, raster2: &Raster) -> bool {
        self.index += 1;

        if !raster1.sizes_equal(raster2) {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - shape mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        if let Some(pos) = raster1
            .data()
            .iter()
            .zip(raster2.data())
            .position(|(a, b)| a != b)
        {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - sample mismatch at offset {}",
                self.test_name, self.index, pos
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        true
    }

    /// Report the outcome and return whether all checks passed.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("{}_reg: {} checks passed", self.test_name, self.index);
        } else {
            eprintln!(
                "{}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}
