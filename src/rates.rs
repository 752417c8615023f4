#[cfg(any(test, not(mainbuild)))] use anyhow::anyhow;
#[cfg(any(test, not(mainbuild)))] use anyhow::bail;
#[cfg(any(test, not(mainbuild)))] use anyhow::ensure;
use anyhow::Error;
#[cfg(any(test, not(mainbuild)))] use lazy_static::lazy_static;
#[cfg(any(test, not(mainbuild)))] use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
#[cfg(any(test, not(mainbuild)))] use std::path::Path;

/// The name of the category reserved for conversions that are not fixed-rate.
pub const CATEGORY_TEMPERATURE: &str = "temperature";

/// Returns the rate key for a conversion between the given units.
pub fn rate_key(unit_source: &str, unit_destination: &str) -> String {
    format!("{}_to_{}", unit_source, unit_destination)
}

/// A family of units related by fixed multiplicative factors.
#[derive(Debug, Deserialize, Serialize)]
pub struct RateCategory {
    /// The name of this category.
    name: String,

    /// The factors in this category, organized by their rate keys.
    rates: HashMap<String, f64>,
}

/// A table of fixed conversion rates.
///
/// Rate tables are only parsed at compilation time (by a build script). The
/// main binary embeds the serialized table and loads it once at start-up;
/// nothing mutates it afterwards.
#[derive(Debug, Deserialize, Serialize)]
pub struct RateTable {
    /// The categories in this table, in declaration order.
    categories: Vec<RateCategory>,
}

impl RateTable {
    /// Parses the given database files and builds a rate table.
    ///
    /// This function reads the given files and parses them according to the
    /// rules of record files. Every error is reported with the path and line
    /// number of the offending record.
    #[cfg(any(test, not(mainbuild)))]
    pub fn build(paths: Vec<impl AsRef<Path>>) -> Result<RateTable, Error> {
        use std::fs::File;
        use std::io::BufRead;
        use std::io::BufReader;

        const DELIMITER_COMMENT: char = '#';
        const DELIMITER_RECORD: char = '|';

        let mut records_categories = vec![];
        let mut records_rates = vec![];

        for path in paths.iter() {
            let path = path.as_ref();
            let file = File::open(path)
            .map_err(|error| anyhow!("{}: {}", path.display(), error))?;

            for (line, number) in BufReader::new(file).lines().zip(1..) {
                let line = line?;
                let mut line = line.as_str();

                // Strip comments.
                if let Some((record, _)) = line.split_once(DELIMITER_COMMENT) {
                    line = record;
                }

                line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let mut record = line.split(DELIMITER_RECORD).map(|string_record| {
                    string_record.trim().to_string()
                });

                // A non-empty line always yields at least one field.
                let type_record = record.next().unwrap_or_default();
                let record = record.collect::<Vec<String>>();

                let records = match type_record.as_str() {
                    "C" => &mut records_categories,
                    "R" => &mut records_rates,

                    _ =>
                        bail!("{}:{}: Unknown record type", path.display(), number),
                };

                records.push((record, path, number));
            }
        }

        /// Processes records with a record processor.
        fn process_records(
            records: Vec<(Vec<String>, &Path, usize)>,
            mut processor: impl FnMut(Vec<String>) -> Result<(), Error>)
        -> Result<(), Error> {
            for (record, path, number) in records {
                processor(record).map_err(|error| {
                    anyhow!("{}:{}: {}", path.display(), number, error)
                })?
            }

            Ok(())
        }

        /// Converts the given record into an array for unboxing.
        fn into_array<const N: usize>(record: Vec<String>)
        -> Result<[String; N], Error> {
            match record.try_into() {
                Ok(record) => Ok(record),
                Err(_) => bail!("Illegal argument count")
            }
        }

        lazy_static! {
            static ref REGEX_NAME: Regex = Regex::new(r"^[a-z]+$").unwrap();
        }

        let mut categories: Vec<RateCategory> = vec![];

        // Process categories (C-records).
        process_records(records_categories, |record| {
            let [name] = into_array(record)?;

            ensure!(REGEX_NAME.is_match(&name), "Illegal category");
            ensure!(name != CATEGORY_TEMPERATURE, "Reserved category");
            ensure!(
                categories.iter().all(|category| category.name != name),
                "Duplicate category"
            );

            categories.push(RateCategory {name, rates: HashMap::new()});

            Ok(())
        })?;

        // Process rates (R-records).
        process_records(records_rates, |record| {
            let [name, unit_source, unit_destination, string_factor]
            = into_array(record)?;

            ensure!(REGEX_NAME.is_match(&unit_source), "Illegal unit");
            ensure!(REGEX_NAME.is_match(&unit_destination), "Illegal unit");

            let factor = string_factor.parse::<f64>()
            .map_err(|_| anyhow!("Illegal factor"))?;

            ensure!(factor.is_finite() && factor > 0.0, "Illegal factor");

            let category = categories.iter_mut()
            .find(|category| category.name == name)
            .ok_or_else(|| anyhow!("Unknown category"))?;

            if category.rates.insert(rate_key(&unit_source, &unit_destination), factor)
            .is_some() {
                bail!("Duplicate rate");
            }

            Ok(())
        })?;

        Ok(RateTable {categories})
    }

    /// Loads the rate table compiled into this binary.
    #[cfg(mainbuild)]
    pub fn new() -> Result<RateTable, Error> {
        const DATA_RATES: &[u8] = include_bytes!(env!("PATH_DATA_RATES"));

        bincode::deserialize(DATA_RATES)
        .map_err(|error| anyhow::anyhow!("Corrupt rate table: {}", error))
    }

    /// Returns the factor converting between the given units in the given
    /// category, if there is one.
    #[cfg(mainbuild)]
    pub fn lookup(&self, category: &str, unit_source: &str, unit_destination: &str)
    -> Option<f64> {
        self.categories.iter()
        .find(|category_present| category_present.name == category)
        .and_then(|category| {
            category.rates.get(&rate_key(unit_source, unit_destination))
        })
        .copied()
    }

    /// Returns the names of the categories that define the given rate key, in
    /// declaration order.
    #[cfg(mainbuild)]
    pub fn categories_defining(&self, key: &str) -> Vec<&str> {
        self.categories.iter()
        .filter(|category| category.rates.contains_key(key))
        .map(|category| category.name.as_str())
        .collect()
    }

    /// Returns the number of categories and the number of rates in this table.
    #[cfg(mainbuild)]
    pub fn counts(&self) -> (usize, usize) {
        let count_rates = self.categories.iter()
        .map(|category| category.rates.len())
        .sum();

        (self.categories.len(), count_rates)
    }
}
