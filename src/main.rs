fn main() {
    if let Err(e) = poa_register_tx::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
