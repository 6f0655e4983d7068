//! Example: fill an LCS table step by step and print it.
//!
//! Run with:
//! `cargo run --example lcs -- ABCBDAB BDCAB`

use lcs_stepper::{CellState, LcsEngine};

fn main() {
    let mut args = std::env::args().skip(1);
    let x = args.next().unwrap_or_else(|| "ABCBDAB".to_string());
    let y = args.next().unwrap_or_else(|| "BDCAB".to_string());

    let mut engine = LcsEngine::new();
    engine.initialize(&x, &y);

    while engine.step() {}
    println!("Filled {} of {} cells", engine.filled_cells(), engine.total_cells());

    if engine.exceeds_render_limit() {
        println!(
            "{} cells exceeds the {} cell display limit; table omitted.",
            engine.total_cells(),
            engine.render_cell_limit()
        );
    } else {
        print_table(&engine);
    }

    if let Some(result) = engine.result() {
        println!("LCS length: {}", result.len());
        println!("LCS: {}", result.lcs);
        println!("Backtrace path length: {}", result.path.len());
    }
}

/// `*` marks matched path cells, `.` other path cells.
fn print_table(engine: &LcsEngine) {
    let x = engine.sequence_x();
    let y = engine.sequence_y();
    let table = engine.table();

    print!("      ");
    for c in y {
        print!("{c:>4}");
    }
    println!();
    for i in 0..table.rows() {
        let label = if i == 0 { ' ' } else { x[i - 1] };
        print!("{label:>2}");
        for j in 0..table.cols() {
            let mark = match engine.cell_state(i, j) {
                Some(CellState::Matched) => '*',
                Some(CellState::OnPath) => '.',
                _ => ' ',
            };
            print!("{:>3}{}", table.get(i, j), mark);
        }
        println!();
    }
}
