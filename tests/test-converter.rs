use std::io::Write;
use std::process::Command;
use std::process::Stdio;
use std::str;
use test_case::test_case;

/// Runs the converter with the given lines on its standard input and returns
/// its standard output.
fn run_converter(lines: &[&str]) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_convert"))
    .env_remove("RUST_LOG")
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .unwrap();

    let input = lines.iter()
    .map(|line| format!("{}\n", line))
    .collect::<String>();

    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();

    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "Exit status: {}", output.status);

    str::from_utf8(&output.stdout).unwrap().to_string()
}

/// Asserts that the converter, given some request, produces some output.
fn assert_converter(request: &str, expected: &str) {
    let stdout = run_converter(&[request, "no"]);

    assert!(
        stdout.contains(expected),
        "Expected: {} => {}; Output: {}",
        request,
        expected,
        stdout
    );
}

#[test_case("25 miles to kilometers"      , "25.0 miles is 40.23 kilometers"      ; "_1")]
#[test_case("10 kilometers to miles"      , "10.0 kilometers is 6.21 miles"       ; "_2")]
#[test_case("3 pounds to kilograms"       , "3.0 pounds is 1.36 kilograms"        ; "_3")]
#[test_case("3 kilograms to pounds"       , "3.0 kilograms is 6.61 pounds"        ; "_4")]
#[test_case("0 celsius to fahrenheit"     , "0.0 celsius is 32.00 fahrenheit"     ; "_5")]
#[test_case("100 celsius to fahrenheit"   , "100.0 celsius is 212.00 fahrenheit"  ; "_6")]
#[test_case("32 fahrenheit to celsius"    , "32.0 fahrenheit is 0.00 celsius"     ; "_7")]
#[test_case("98.6 Fahrenheit to Celsius"  , "98.6 fahrenheit is 37.00 celsius"    ; "_8")]
#[test_case("5 miles to kelvin"           , "Error: No conversion rate for miles to kelvin" ; "_9")]
#[test_case("20 celsius to kelvin"        , "Error: No conversion rate for celsius to kelvin" ; "_10")]
#[test_case("not a valid line"            , "Error: Invalid input format"         ; "_11")]
#[test_case("many miles to kilometers"    , "Error: Invalid input format"         ; "_12")]
fn test_converter(request: &str, expected: &str) {
    assert_converter(request, expected);
}

#[test]
fn test_session() {
    let stdout = run_converter(&[
        "25 miles to kilometers",
        "yes",
        "oops",
        "Yes",
        "1 pounds to kilograms",
        "no",
    ]);

    let results = stdout.split("Convert another? (yes/no): ").collect::<Vec<&str>>();

    assert_eq!(4, results.len(), "{}", stdout);
    assert!(results[0].ends_with("25.0 miles is 40.23 kilometers\n"), "{}", stdout);
    assert!(results[1].contains("Error: "), "{}", stdout);
    assert!(results[2].ends_with("1.0 pounds is 0.45 kilograms\n"), "{}", stdout);
    assert_eq!("Goodbye!\n", results[3]);
}

#[test]
fn test_end_of_input() {
    let stdout = run_converter(&[]);

    assert!(stdout.ends_with("Goodbye!\n"), "{}", stdout);
}
