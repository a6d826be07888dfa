use skyroute_lib::{run_simulation, RenderMode, SimulationResult, UNREACHABLE_SENTINEL};

#[test]
fn reachable_json_matches_the_wire_contract() {
    let result = run_simulation("2 2 3 0\n0 0\n0 1\n0\n").expect("valid input");
    let json = result.to_json().expect("encodes");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["time"], 3);

    let path = value["path"].as_array().expect("path array");
    assert_eq!(path.len(), 3);

    let origin = &path[0];
    assert_eq!(origin["row"], 0);
    assert_eq!(origin["col"], 0);
    assert_eq!(origin["battery"], 3);
    assert_eq!(origin["altitude"], 0);
    assert_eq!(origin["time"], 0);

    let last = &path[2];
    assert_eq!((last["row"].as_u64(), last["col"].as_u64()), (Some(1), Some(1)));
    assert_eq!(last["altitude"], 1);
    assert_eq!(last["time"], 3);

    let mut previous = -1i64;
    for step in path {
        let time = step["time"].as_i64().expect("numeric time");
        assert!(time > previous, "times strictly increase");
        previous = time;
    }
}

#[test]
fn unreachable_encodes_as_the_bare_sentinel() {
    let result = run_simulation("1 2 1 0\n0 100\n0\n").expect("valid input");
    assert_eq!(result, SimulationResult::Unreachable);
    assert_eq!(result.to_json().expect("encodes"), UNREACHABLE_SENTINEL);
}

#[test]
fn plain_text_render_summarizes_the_flight() {
    let result = run_simulation("1 3 5 0\n0 0 0\n0\n").expect("valid input");
    let text = result.render(RenderMode::PlainText).expect("renders");

    assert!(text.contains("Flight: (0, 0) -> (0, 2) (2 seconds, 2 steps)"));
    assert!(text.lines().count() >= 4);
}

#[test]
fn plain_text_render_reports_unreachable() {
    let result = run_simulation("1 2 0 0\n0 0\n0\n").expect("valid input");
    let text = result.render(RenderMode::PlainText).expect("renders");
    assert!(text.contains("Unreachable"));
}
