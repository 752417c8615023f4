mod rates;

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use rates::RateTable;

const PATH_DATABASE: &str = "src/database";
const FILENAME_DATA_RATES: &str = "rates.obj";

/// Performs tasks necessary for building the converter.
fn main() {
    let mut path_output = PathBuf::from(env::var("OUT_DIR").unwrap());
    path_output.push(FILENAME_DATA_RATES);

    // Track changes in the database directory.
    println!("cargo:rerun-if-changed={}", PATH_DATABASE);

    // Prevent compilation of parsing code in the final binary.
    println!("cargo:rustc-check-cfg=cfg(mainbuild)");
    println!("cargo:rustc-cfg=mainbuild");

    // Specify location of the rate table data.
    println!("cargo:rustc-env=PATH_DATA_RATES={}", path_output.display());

    // Find the database files. These are the files in the database directory
    // that have the .dat extension.
    let mut paths = fs::read_dir(PATH_DATABASE).unwrap()
    .map(|entry| entry.unwrap())
    .map(|entry| entry.path())
    .filter(|path| path.is_file())
    .filter(|path| path.extension() == Some(OsStr::new("dat")))
    .collect::<Vec<PathBuf>>();

    // Category order follows declaration order, so keep file order stable.
    paths.sort();

    let table = RateTable::build(paths).unwrap_or_else(|error| {
        eprintln!();
        eprintln!("Error parsing database files:");
        eprintln!("{}", error);
        eprintln!();

        process::exit(1);
    });

    let data_rates = bincode::serialize(&table).unwrap();

    let mut file_output = File::create(&path_output).unwrap();

    file_output.write_all(&data_rates).unwrap();
}
