//! rTracklog main entrypoint.

use rtracklog::run;
use rtracklog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
