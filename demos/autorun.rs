//! Example: animate an LCS fill on a timer and pause it from another thread.
//!
//! Run with:
//! `cargo run --example autorun`

use std::thread;
use std::time::Duration;

use lcs_stepper::autorun::{AutoRunner, CancelToken, RunOutcome};
use lcs_stepper::LcsEngine;

fn main() {
    let mut engine = LcsEngine::new();
    engine.set_sequences("HUMAN", "CHIMPANZEE");

    let token = CancelToken::new();
    let canceller = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(120));
            token.cancel();
        })
    };

    let mut runner = match AutoRunner::new(Duration::from_millis(10)) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("autorun: {err}");
            std::process::exit(2);
        }
    };

    let outcome = runner.run(&mut engine, &token, |e| {
        if let Some(c) = e.cursor() {
            eprint!("\rcursor=({},{}) filled={}/{}", c.row, c.col, e.filled_cells(), e.total_cells());
        }
    });
    eprintln!();
    let _ = canceller.join();

    if outcome == RunOutcome::Paused {
        println!(
            "Paused after {} of {} cells; resuming.",
            engine.filled_cells(),
            engine.total_cells()
        );
        runner.run(&mut engine, &CancelToken::new(), |_| {});
    }

    if let Some(result) = engine.result() {
        println!("LCS: {} (length {})", result.lcs, result.len());
    }
}
