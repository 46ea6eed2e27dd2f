//! TimeLoom main entrypoint.

use timeloom::run;
use timeloom::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
