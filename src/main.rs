//! CareSync main entrypoint.

use caresync::ui::messages::error;
use caresync::{init_tracing, run};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
