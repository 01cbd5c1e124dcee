//! Output mode shared by all subcommands.
//!
//! `main` records the global `--json` flag in `BRANDKIT_JSON` so every
//! command can check it without threading it through.

/// True when machine-readable JSON output was requested.
pub fn is_json() -> bool {
    std::env::var("BRANDKIT_JSON").is_ok_and(|v| v == "1")
}

/// Print a value as pretty JSON on stdout.
pub fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("  Error: failed to serialize output: {e}"),
    }
}
