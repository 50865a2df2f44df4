use stackyard::engine::crane::CrateByCrate;
use stackyard::engine::Engine;
use stackyard::parser::parse_input;
use stackyard::report::{report_line, top_crates};
use std::fs;
use std::path::Path;

#[test]
fn test_sample_file_rearrangement() {
    let path = Path::new("demos/sample.txt");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let parsed = parse_input(&source).expect("Parsing failed");
    assert_eq!(parsed.store.stack_count(), 3);
    assert_eq!(parsed.store.total_crates(), 6);
    assert_eq!(parsed.moves.len(), 4);

    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(CrateByCrate),
        100 * 1024 * 1024,
    );
    engine.run().expect("Simulation failed");

    let store = engine.final_store();
    assert_eq!(report_line(&top_crates(&store)), "C M Z");

    // Full final configuration, not just the tops
    assert_eq!(store.stack(0), &['C']);
    assert_eq!(store.stack(1), &['M']);
    assert_eq!(store.stack(2), &['P', 'D', 'N', 'Z']);
}

#[test]
fn test_order_reversal_of_moved_block() {
    let source = concat!(
        "[C]    \n",
        "[B]    \n",
        "[A]    \n",
        " 1   2 \n",
        "\n",
        "move 3 from 1 to 2\n",
    );

    let parsed = parse_input(source).expect("Parsing failed");
    let mut engine = Engine::new(
        &parsed.store,
        parsed.moves,
        Box::new(CrateByCrate),
        100 * 1024 * 1024,
    );
    engine.run().expect("Simulation failed");

    // One-at-a-time transfer reverses the block on the destination.
    let store = engine.final_store();
    assert_eq!(store.stack(1), &['C', 'B', 'A']);
}
