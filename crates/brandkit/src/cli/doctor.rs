//! Environment readiness check.

use crate::cli::output;
use crate::config::ScraperConfig;
use crate::renderer::chromium::find_chromium;
use anyhow::Result;

/// Report whether the rendered tier can run here.
pub async fn run(config: &ScraperConfig) -> Result<()> {
    let chromium_path = find_chromium(config.chromium_path.as_deref());

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
            "chromium": chromium_path.as_ref().map(|p| p.display().to_string()),
            "render_enabled": config.render_enabled,
            "ready": chromium_path.is_some() || !config.render_enabled,
        }));
        return Ok(());
    }

    println!("Brandkit Doctor");
    println!("===============");
    println!();
    println!("OS:   {}", std::env::consts::OS);
    println!("Arch: {}", std::env::consts::ARCH);
    println!();

    match &chromium_path {
        Some(path) => println!("[OK] Chromium found: {}", path.display()),
        None => println!(
            "[!!] Chromium NOT found. Install Chrome/Chromium or set BRANDKIT_CHROMIUM_PATH."
        ),
    }
    if !config.render_enabled {
        println!("[--] Rendering disabled; JavaScript-only sites will yield empty records.");
    }

    println!();
    if chromium_path.is_some() {
        println!("Status: READY");
    } else {
        println!("Status: HTTP-ONLY");
        println!("  Static fetches work; the headless fallback will fail.");
    }

    Ok(())
}
