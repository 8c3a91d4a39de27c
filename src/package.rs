/// Heaviest package, inclusive, that Package Express will ship.
pub const MAX_WEIGHT: f64 = 50.0;

/// Largest allowed sum of width, height and length, inclusive.
pub const MAX_TOTAL_SIZE: f64 = 50.0;

/// Measurements collected for a single quote.
///
/// Every field starts at zero and is written once by the step that collects it.
/// The cost step only reads the record after both collection steps succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackageMeasurements {
    /// Package weight, in pounds.
    pub weight: f64,
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

impl PackageMeasurements {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the three dimensions, checked against [`MAX_TOTAL_SIZE`].
    pub fn total_size(&self) -> f64 {
        self.width + self.height + self.length
    }

    /// Estimated shipping cost: volume times weight, divided by 100.
    pub fn shipping_cost(&self) -> f64 {
        (self.width * self.height * self.length * self.weight) / 100.0
    }
}
