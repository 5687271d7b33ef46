use grid_astar::{find_path, Grid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |...|
// |.#.|
// |S#G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood

fn main() {
    let grid: Grid = match "...\n.#.\nS#G".parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid grid: {err}");
            return;
        }
    };
    println!("{}", grid);
    let result = find_path(&grid);
    match result.failure {
        None => {
            println!("Path of length {}:", result.length);
            for p in result.path {
                println!("{:?}", p);
            }
        }
        Some(reason) => println!("{reason}"),
    }
}
