fn main() {
    if let Err(e) = lambda_stubs_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
