fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--print-config") {
        let config = pubboard::config::Config::default();
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("pubboard {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("pubboard {}", env!("CARGO_PKG_VERSION"));
        println!("A terminal publish-status board\n");
        println!("USAGE:");
        println!("    pubboard [OPTIONS]\n");
        println!("OPTIONS:");
        println!("    --print-config    Print the default configuration to stdout");
        println!("    --version, -V     Print version information");
        println!("    --help, -h        Print this help message\n");
        println!("DATA:");
        println!("    Publish items are read from publish-main.json, publish-auth.json");
        println!("    and publish-other.json in the configured data directory (default: db).");
        return;
    }

    if let Err(e) = pubboard::app::App::run() {
        let _ = std::fs::write("pubboard_error.log", format!("{e:?}"));
    }
}
