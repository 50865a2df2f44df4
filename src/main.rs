// Stackyard: cargo-stack rearrangement simulator with step-through visualization

mod engine;
mod parser;
mod report;
mod snapshot;
mod ui;
mod yard;

use std::fs;
use std::io;
use std::path::Path;
use std::process::exit;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use engine::crane::{BulkLift, Crane, CrateByCrate};
use engine::Engine;
use parser::parse_input;
use ui::App;
use yard::grid::SimGrid;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <input.txt> [--bulk] [--tui]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --bulk    Lift each block of crates in one motion (order-preserving)");
    eprintln!("            instead of one crate at a time (order-reversing)");
    eprintln!("  --tui     Step through the rearrangement in a terminal UI");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} demos/sample.txt          # Batch run, report top crates", program_name);
    eprintln!("  {} demos/sample.txt --tui    # Watch the crane work", program_name);
}

/// Dump every stack as `index : [ labels ] (height)`, bottom-to-top.
fn dump_grid(grid: &SimGrid) {
    for stack in 0..grid.stack_count() {
        let labels: Vec<String> = grid.row(stack).iter().map(|c| c.to_string()).collect();
        eprintln!("{} : [ {} ] ({})", stack + 1, labels.join(" "), grid.height(stack));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("stackyard");

    let mut input_path: Option<&str> = None;
    let mut use_bulk = false;
    let mut use_tui = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--bulk" => use_bulk = true,
            "--tui" => use_tui = true,
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                exit(1);
            }
            path => {
                if input_path.is_some() {
                    eprintln!("Error: More than one input file given");
                    eprintln!();
                    print_usage(program_name);
                    exit(1);
                }
                input_path = Some(path);
            }
        }
    }

    let input_path = match input_path {
        Some(path) => path,
        None => {
            eprintln!("Error: No input file provided");
            eprintln!();
            print_usage(program_name);
            exit(1);
        }
    };

    if !Path::new(input_path).exists() {
        eprintln!("Error: File '{}' not found", input_path);
        exit(1);
    }

    // Read the whole input before anything is simulated
    let source = match fs::read_to_string(input_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", input_path, e);
            exit(1);
        }
    };

    eprintln!("Reading data from \"{}\"", input_path);

    // Parse both blocks; any format error aborts before simulation
    let parsed = match parse_input(&source) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    eprintln!("Cargo stacks: {}", parsed.store.stack_count());
    eprintln!("Total number of crates: {}", parsed.store.total_crates());
    eprintln!("Total number of rearrangements: {}", parsed.moves.len());

    let crane: Box<dyn Crane> = if use_bulk {
        Box::new(BulkLift)
    } else {
        Box::new(CrateByCrate)
    };

    // Snapshot memory limit for the step-through history (1 GB)
    let snapshot_limit = 1024 * 1024 * 1024;
    let mut engine = Engine::new(&parsed.store, parsed.moves, crane, snapshot_limit);

    eprintln!("Initial configuration:");
    dump_grid(engine.grid());

    if let Err(e) = engine.run() {
        eprintln!("Simulation error: {}", e);
        exit(1);
    }

    eprintln!("Final configuration:");
    dump_grid(engine.grid());

    // Final report: top crate of each stack in increasing stack order
    let store = engine.final_store();
    let tops = report::top_crates(&store);
    let indices: Vec<String> = (1..=store.stack_count()).map(|s| s.to_string()).collect();
    eprintln!("Upper most crates in stacks:");
    eprintln!("Stack: {}", indices.join(" "));
    println!("{}", report::report_line(&tops));

    if use_tui {
        // Rewind so the TUI starts at the initial yard
        engine.rewind_to_start();

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create and run app
        let mut app = App::new(engine);
        let res = app.run(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Err(err) = res {
            eprintln!("Error: {:?}", err);
        }
    }

    Ok(())
}
