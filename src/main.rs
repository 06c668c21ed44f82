fn main() {
    if let Err(err) = markers::cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
