mod category;

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use tracing::debug;

pub use crate::converter::category::Category;
use crate::error::ConversionError;
use crate::handlers::FactorHandler;
use crate::handlers::RelationHandler;
use crate::handlers::HANDLERS_SCALES;
use crate::handlers::SCALE_REFERENCE;
use crate::rates::RateTable;

/// A request to convert a magnitude from one unit to another.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRequest {
    pub unit_source: String,
    pub unit_destination: String,
    pub magnitude: f64,
}

/// The outcome of a conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionResult {
    pub magnitude: f64,
    pub unit_destination: String,
}

/// Displays the result rounded to two decimal places, followed by its unit.
impl Display for ConversionResult {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{:.2} {}", self.magnitude, self.unit_destination)
    }
}

/// Implements the ability to perform a unit conversion.
pub trait Converter {
    fn convert(&self, request: &ConversionRequest)
    -> Result<ConversionResult, ConversionError>;
}

/// Converts between units of one category of the rate table.
pub struct FixedRateConverter<'a> {
    table: &'a RateTable,
    category: &'a str,
}

impl<'a> FixedRateConverter<'a> {
    pub fn new(table: &'a RateTable, category: &'a str) -> FixedRateConverter<'a> {
        FixedRateConverter {table, category}
    }
}

impl Converter for FixedRateConverter<'_> {
    fn convert(&self, request: &ConversionRequest)
    -> Result<ConversionResult, ConversionError> {
        let factor = self.table.lookup(
            self.category,
            &request.unit_source,
            &request.unit_destination
        ).ok_or_else(|| ConversionError::unsupported(
            &request.unit_source,
            &request.unit_destination
        ))?;

        Ok(ConversionResult {
            magnitude: FactorHandler {factor}.transform(request.magnitude),
            unit_destination: request.unit_destination.clone(),
        })
    }
}

/// Converts between temperature scales.
///
/// Only conversions between the reference scale and one other known scale are
/// supported; both units are checked, case-insensitively.
pub struct TemperatureConverter;

impl Converter for TemperatureConverter {
    fn convert(&self, request: &ConversionRequest)
    -> Result<ConversionResult, ConversionError> {
        let unit_source = request.unit_source.to_lowercase();
        let unit_destination = request.unit_destination.to_lowercase();

        let magnitude = if unit_source == SCALE_REFERENCE {
            HANDLERS_SCALES.get(unit_destination.as_str())
            .map(|handler| handler.transform_forward(request.magnitude))
        }
        else if unit_destination == SCALE_REFERENCE {
            HANDLERS_SCALES.get(unit_source.as_str())
            .map(|handler| handler.transform_reverse(request.magnitude))
        }
        else {
            None
        };

        let magnitude = magnitude.ok_or_else(|| ConversionError::unsupported(
            &request.unit_source,
            &request.unit_destination
        ))?;

        Ok(ConversionResult {
            magnitude,
            unit_destination: request.unit_destination.clone(),
        })
    }
}

/// Performs a unit conversion.
///
/// The category of the request is resolved first; the request is then handed
/// to the converter for that category.
pub fn convert(table: &RateTable, request: &ConversionRequest)
-> Result<ConversionResult, ConversionError> {
    let category = Category::resolve(
        table,
        &request.unit_source,
        &request.unit_destination
    )?;

    debug!(category = category.name(), "resolved category");

    category.converter(table).convert(request)
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn request(unit_source: &str, unit_destination: &str, magnitude: f64)
    -> ConversionRequest {
        ConversionRequest {
            unit_source: unit_source.to_string(),
            unit_destination: unit_destination.to_string(),
            magnitude,
        }
    }

    #[rstest]
    #[case("40.23 kilometers" , "miles"      , "kilometers" , 25.0)]
    #[case("16.09 kilometers" , "miles"      , "kilometers" , 10.0)]
    #[case("6.21 miles"       , "kilometers" , "miles"      , 10.0)]
    #[case("4.54 kilograms"   , "pounds"     , "kilograms"  , 10.0)]
    #[case("22.05 pounds"     , "kilograms"  , "pounds"     , 10.0)]
    #[case("32.00 fahrenheit" , "celsius"    , "fahrenheit" , 0.0)]
    #[case("212.00 fahrenheit", "celsius"    , "fahrenheit" , 100.0)]
    #[case("-40.00 fahrenheit", "celsius"    , "fahrenheit" , -40.0)]
    #[case("0.00 celsius"     , "fahrenheit" , "celsius"    , 32.0)]
    #[case("100.00 celsius"   , "fahrenheit" , "celsius"    , 212.0)]
    #[case("0.00 kilometers"  , "miles"      , "kilometers" , 0.0)]
    #[trace]
    fn test_convert(
        #[case] expected: &str,
        #[case] unit_source: &str,
        #[case] unit_destination: &str,
        #[case] magnitude: f64,
    ) {
        let table = RateTable::new().unwrap();

        let result = convert(&table, &request(unit_source, unit_destination, magnitude))
        .unwrap();

        assert_eq!(expected, result.to_string());
    }

    #[rstest]
    #[case("miles"      , "kelvin")]
    #[case("celsius"    , "kelvin")]
    #[case("kelvin"     , "celsius")]
    #[case("celsius"    , "celsius")]
    #[case("fahrenheit" , "fahrenheit")]
    #[case("miles"      , "miles")]
    #[case("miles"      , "pounds")]
    #[case("kilograms"  , "kilometers")]
    #[trace]
    fn test_convert_unsupported(
        #[case] unit_source: &str,
        #[case] unit_destination: &str,
    ) {
        let table = RateTable::new().unwrap();

        let result = convert(&table, &request(unit_source, unit_destination, 1.0));

        assert_eq!(
            Err(ConversionError::unsupported(unit_source, unit_destination)),
            result
        );
    }

    #[rstest]
    #[case("miles"     , "kilometers")]
    #[case("kilometers", "miles")]
    #[case("pounds"    , "kilograms")]
    #[case("kilograms" , "pounds")]
    #[trace]
    fn test_round_trip(
        #[case] unit_source: &str,
        #[case] unit_destination: &str,
        #[values(0.5, 1.0, 10.0, 1234.5)] magnitude: f64,
    ) {
        let table = RateTable::new().unwrap();

        let forward = convert(&table, &request(unit_source, unit_destination, magnitude))
        .unwrap();

        let reverse = convert(&table, &request(
            &forward.unit_destination,
            unit_source,
            forward.magnitude
        )).unwrap();

        assert!(
            ((reverse.magnitude - magnitude) / magnitude).abs() < 1e-4,
            "{} => {} => {}",
            magnitude,
            forward.magnitude,
            reverse.magnitude
        );
    }

    #[test]
    fn test_temperature_keeps_requested_unit() {
        let result = TemperatureConverter.convert(&request("Celsius", "Fahrenheit", 100.0))
        .unwrap();

        assert_eq!("212.00 Fahrenheit", result.to_string());
    }

    #[test]
    fn test_fixed_rate_reversed_direction() {
        let table = crate::rates::tests::table(
            "C | distance\nR | distance | miles | kilometers | 1.60934"
        ).unwrap();

        let converter = FixedRateConverter::new(&table, "distance");

        assert!(converter.convert(&request("miles", "kilometers", 1.0)).is_ok());
        assert_eq!(
            Err(ConversionError::unsupported("kilometers", "miles")),
            converter.convert(&request("kilometers", "miles", 1.0))
        );
    }
}
