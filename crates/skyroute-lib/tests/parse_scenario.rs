use skyroute_lib::{Error, Scenario};

#[test]
fn stations_are_one_indexed_in_input_and_zero_indexed_in_memory() {
    let scenario = Scenario::parse("3 3 5 2\n0 0 0\n0 0 0\n0 0 0\n1\n2 3\n").expect("parses");
    assert!(scenario.is_station((1, 2)));
    assert!(!scenario.is_station((2, 3)));
}

#[test]
fn corner_stations_are_in_range() {
    let scenario = Scenario::parse("2 2 5 2\n0 0\n0 0\n2\n1 1\n2 2\n").expect("parses");
    assert!(scenario.is_station((0, 0)));
    assert!(scenario.is_station((1, 1)));
}

#[test]
fn truncated_header_names_the_missing_field() {
    let err = Scenario::parse("2 2 5\n").expect_err("rejects");
    assert_eq!(err.to_string(), "input ended while reading charge amount (K)");
}

#[test]
fn out_of_range_station_reports_the_grid_size() {
    let err = Scenario::parse("2 2 5 1\n0 0\n0 0\n1\n3 1\n").expect_err("rejects");
    assert_eq!(
        err.to_string(),
        "charging station (3, 1) is outside the 2x2 grid"
    );
}

#[test]
fn non_numeric_dimension_is_reported_with_its_token() {
    let err = Scenario::parse("x 2 5 1\n").expect_err("rejects");
    assert_eq!(err.to_string(), "invalid value for grid rows (N): 'x'");
}

#[test]
fn zero_dimension_is_rejected_before_reading_the_grid() {
    let err = Scenario::parse("0 4 5 1\n").expect_err("rejects");
    assert!(matches!(err, Error::EmptyGrid { rows: 0, cols: 4 }));
}

#[test]
fn trailing_tokens_after_the_station_list_are_rejected() {
    let err = Scenario::parse("1 1 5 1\n0\n0\n extra\n").expect_err("rejects");
    assert!(matches!(err, Error::TrailingInput));
}

#[test]
fn grammar_is_whitespace_agnostic() {
    let scenario = Scenario::parse("1 2 5 1 0 0 1 1 2").expect("parses");
    assert_eq!(scenario.grid.cols(), 2);
    assert!(scenario.is_station((0, 1)));
}
