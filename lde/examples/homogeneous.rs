use lde::{Matrix, Solver};

// Minimal non-negative solutions of a homogeneous system.
// Run with RUST_LOG=trace to see the rounds of the completion.
fn main() {
    env_logger::init();

    let a = Matrix::from_array([[-1, 1, 2, -3], [-1, 3, -2, -1]]);
    match Solver::new().homogeneous(&a) {
        Ok(basis) if basis.is_empty() => println!("Only the trivial solution"),
        Ok(basis) => {
            println!("Basis of {a}:");
            for b in &basis {
                println!("{b}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
