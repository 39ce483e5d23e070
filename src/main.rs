fn main() {
    // Delegate to CLI runner; errors carry their path context.
    if let Err(err) = dircomparer::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
