use crate::converter::Converter;
use crate::converter::FixedRateConverter;
use crate::converter::TemperatureConverter;
use crate::error::ConversionError;
use crate::rates::rate_key;
use crate::rates::RateTable;
use crate::rates::CATEGORY_TEMPERATURE;

/// The kind of conversion a pair of units calls for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category<'a> {
    /// A fixed-rate conversion within the named category of the rate table.
    Fixed(&'a str),

    /// A temperature conversion. Any pair no category defines ends up here.
    Temperature,
}

impl<'a> Category<'a> {
    /// Determines which category a conversion between the given units
    /// belongs to.
    ///
    /// A rate key defined by more than one category is an error rather than a
    /// silent pick of the first match.
    pub fn resolve(table: &'a RateTable, unit_source: &str, unit_destination: &str)
    -> Result<Category<'a>, ConversionError> {
        let key = rate_key(unit_source, unit_destination);

        match table.categories_defining(&key).as_slice() {
            [] => Ok(Category::Temperature),
            [category] => Ok(Category::Fixed(*category)),
            categories => Err(ConversionError::AmbiguousConversion {
                key,
                categories: categories.iter().map(|name| name.to_string()).collect(),
            }),
        }
    }

    /// Returns the name of this category.
    pub fn name(&self) -> &'a str {
        match self {
            Category::Fixed(name) => *name,
            Category::Temperature => CATEGORY_TEMPERATURE,
        }
    }

    /// Returns the converter for this category.
    pub fn converter(self, table: &'a RateTable) -> Box<dyn Converter + 'a> {
        match self {
            Category::Fixed(name) => Box::new(FixedRateConverter::new(table, name)),
            Category::Temperature => Box::new(TemperatureConverter),
        }
    }
}
