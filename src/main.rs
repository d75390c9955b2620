//! subtracker main entrypoint.

use subtracker::run;

fn main() {
    println!();
    if let Err(e) = run() {
        subtracker::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
