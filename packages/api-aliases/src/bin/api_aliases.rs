/**
 * API Aliases - api-aliases
 *
 * Regenerates (or, with --check, verifies) the stable alias module for the
 * Orval-generated API hooks.
 */
use api_aliases::main_entry::main_fn;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = main_fn(&args, |msg| print!("{}", msg), |msg| eprint!("{}", msg));
    process::exit(code);
}
