use std::process::Command;

/// Clears the console for a cleaner appearance.
///
/// Platform dispatch happens at runtime on [`std::env::consts::OS`]:
/// Windows shells out to `cmd /C cls`, Linux and macOS to `clear`. A failed
/// spawn is ignored; clearing is best effort. On any other platform the
/// process prints a notice and exits with status 0, so callers must not
/// assume this function returns.
pub fn clear_screen() {
    match std::env::consts::OS {
        "windows" => {
            let _ = Command::new("cmd").args(["/C", "cls"]).status();
        },
        "linux" | "macos" => {
            let _ = Command::new("clear").status();
        },
        os => {
            println!("Unsupported operating system ({os}). Exiting.");
            std::process::exit(0);
        },
    }
}
