//! rInvoicer main entrypoint.

use rinvoicer::run;
use rinvoicer::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
