use lde::{Matrix, Solver, Vector};

// Solutions of 6x - 9y + 2z = 20, searched with entries below 12.
fn main() {
    env_logger::init();

    let a = Matrix::from_array([[6, -9, 2]]);
    let b = Vector::from_entries([20]);

    let solutions = match Solver::new().max_coordinate(12).nonhomogeneous(&a, &b) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return;
        },
    };

    if solutions.specific.is_empty() {
        println!("No solution");
        return;
    }

    println!("Specific:");
    for s in &solutions.specific {
        println!("{s}");
    }

    println!("Homogeneous:");
    for h in &solutions.homogeneous {
        println!("{h}");
    }
}
