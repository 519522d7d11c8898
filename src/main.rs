use clap::Parser;

/// confab is a friendly, interactive command-line assistant for quick
/// arithmetic and small diversions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();

    if let Err(e) = confab::run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
