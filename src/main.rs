//! roombook main entrypoint.

use roombook::run;
use roombook::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
