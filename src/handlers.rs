mod affine;
mod arithmetic;

use lazy_static::lazy_static;
use maplit::hashmap;
use std::collections::HashMap;

pub use crate::handlers::affine::AffineHandler;
pub use crate::handlers::arithmetic::FactorHandler;

/// The reference temperature scale. Every other scale is described by its
/// transformation from this one.
pub const SCALE_REFERENCE: &str = "fahrenheit";

/// Builds a table of unit handlers.
macro_rules! handlers_units {
    ($($name:literal => $handler:expr,)+) => {
        hashmap! [
            $(
                $name => Box::new($handler) as Box<dyn UnitHandler>,
            )*
        ]
    }
}

lazy_static! {
    /// The temperature scales this converter knows, other than the reference
    /// scale.
    pub static ref HANDLERS_SCALES: HashMap<&'static str, Box<dyn UnitHandler>>
    = handlers_units![
        // c = (f - 32) * 5 / 9
        "celsius" => AffineHandler::new(5.0, 9.0, 32.0),
    ];
}

/// Implements the ability to handle fixed-rate relations between units.
pub trait RelationHandler : Sync {
    /// Transform a magnitude from the source unit to the destination unit.
    fn transform(&self, magnitude: f64) -> f64;
}

/// Implements the ability to handle unit transformations.
pub trait UnitHandler : Sync {
    /// Transform from reference.
    fn transform_forward(&self, magnitude: f64) -> f64;

    /// Transform to reference.
    fn transform_reverse(&self, magnitude: f64) -> f64;
}
