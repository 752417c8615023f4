use crate::handlers::RelationHandler;

/// A relation that scales magnitudes by a constant factor.
pub struct FactorHandler {
    pub factor: f64,
}

impl RelationHandler for FactorHandler {
    fn transform(&self, magnitude: f64) -> f64 {
        magnitude * self.factor
    }
}
