use crate::handlers::UnitHandler;

/// A unit related to its reference by `unit = (reference - offset) * n / d`.
pub struct AffineHandler {
    numerator: f64,
    denominator: f64,
    offset: f64,
}

impl AffineHandler {
    pub fn new(numerator: f64, denominator: f64, offset: f64) -> AffineHandler {
        AffineHandler {numerator, denominator, offset}
    }
}

impl UnitHandler for AffineHandler {
    fn transform_forward(&self, magnitude: f64) -> f64 {
        (magnitude - self.offset) * self.numerator / self.denominator
    }

    fn transform_reverse(&self, magnitude: f64) -> f64 {
        magnitude * self.denominator / self.numerator + self.offset
    }
}
