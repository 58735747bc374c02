fn main() {
    if let Err(e) = puzzlesearch::solver() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
