//! smartcal main entrypoint.

use smartcal::run;
use smartcal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
