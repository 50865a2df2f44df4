// Integration tests for the full parse → simulate → report pipeline

use stackyard::engine::crane::{BulkLift, CrateByCrate};
use stackyard::engine::errors::SimError;
use stackyard::engine::Engine;
use stackyard::parser::parse_input;
use stackyard::report::{report_line, top_crates, TopCrate};
use stackyard::yard::grid::SimGrid;

const SNAPSHOT_LIMIT: usize = 1024 * 1024 * 100; // 100MB limit

const SAMPLE: &str = concat!(
    "    [D]    \n",
    "[N] [C]    \n",
    "[Z] [M] [P]\n",
    " 1   2   3 \n",
    "\n",
    "move 1 from 2 to 1\n",
    "move 3 from 1 to 3\n",
    "move 2 from 2 to 1\n",
    "move 1 from 1 to 2\n",
);

#[test]
fn test_sample_pipeline_crate_by_crate() {
    let parsed = parse_input(SAMPLE).expect("Parsing failed");

    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(CrateByCrate),
        SNAPSHOT_LIMIT,
    );
    engine.run().expect("Simulation failed");

    let tops = top_crates(&engine.final_store());
    assert_eq!(report_line(&tops), "C M Z");
}

#[test]
fn test_sample_pipeline_bulk_lift() {
    let parsed = parse_input(SAMPLE).expect("Parsing failed");

    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(BulkLift),
        SNAPSHOT_LIMIT,
    );
    engine.run().expect("Simulation failed");

    let tops = top_crates(&engine.final_store());
    assert_eq!(report_line(&tops), "M C D");
}

#[test]
fn test_empty_move_list_round_trips_store() {
    let input = concat!(
        "[B]    \n",
        "[A] [C]\n",
        " 1   2 \n",
        "\n",
    );
    let parsed = parse_input(input).expect("Parsing failed");

    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(CrateByCrate),
        SNAPSHOT_LIMIT,
    );
    engine.run().expect("Simulation failed");

    // The compacted result is identical to the parsed store.
    assert_eq!(engine.final_store(), parsed.store);
}

#[test]
fn test_expand_compact_round_trip() {
    let parsed = parse_input(SAMPLE).expect("Parsing failed");

    let grid = SimGrid::expand(&parsed.store);
    assert_eq!(grid.compact(), parsed.store);
}

#[test]
fn test_emptied_stack_reports_sentinel() {
    let input = concat!(
        "[A] [B]\n",
        " 1   2 \n",
        "\n",
        "move 1 from 1 to 2\n",
    );
    let parsed = parse_input(input).expect("Parsing failed");

    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(CrateByCrate),
        SNAPSHOT_LIMIT,
    );
    engine.run().expect("Simulation failed");

    let tops = top_crates(&engine.final_store());
    assert_eq!(tops, vec![TopCrate::Empty, TopCrate::Crate('A')]);
    assert_eq!(report_line(&tops), "- A");
}

#[test]
fn test_underflowing_input_aborts() {
    let input = concat!(
        "[A] [B]\n",
        " 1   2 \n",
        "\n",
        "move 3 from 1 to 2\n",
    );
    let parsed = parse_input(input).expect("Parsing failed");

    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(CrateByCrate),
        SNAPSHOT_LIMIT,
    );

    assert!(matches!(engine.run(), Err(SimError::Underflow { .. })));
}

#[test]
fn test_conservation_over_long_shuffle() {
    let input = concat!(
        "[C]        \n",
        "[B] [E]    \n",
        "[A] [D] [F]\n",
        " 1   2   3 \n",
        "\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 4 from 3 to 2\n",
        "move 1 from 1 to 3\n",
        "move 1 from 1 to 3\n",
    );
    let parsed = parse_input(input).expect("Parsing failed");
    let total = parsed.store.total_crates();

    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(CrateByCrate),
        SNAPSHOT_LIMIT,
    );
    engine.run().expect("Simulation failed");

    assert_eq!(engine.final_store().total_crates(), total);
}
