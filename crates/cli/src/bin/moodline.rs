//! Moodline CLI binary entrypoint.

fn main() {
    if let Err(err) = moodline_cli::app::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
