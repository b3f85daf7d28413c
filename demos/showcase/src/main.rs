//! NeonTron theme showcase: a single window demonstrating every themed
//! widget, with a live light/dark mode toggle.

mod app;
mod paint;

use std::process::ExitCode;

use app::ShowcaseApp;
use neontron_theme::config::ThemeConfig;

const APP_TITLE: &str = "NeonTron Theme Showcase";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let resolved = ThemeConfig::from_env().and_then(|config| config.resolve());
    let (spec, mode) = match resolved {
        Ok(resolved) => resolved,
        Err(err) => {
            return startup_failure(&format!("Failed to load theme:\n{err}"));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };
    let result = eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ShowcaseApp::new(&cc.egui_ctx, spec, mode)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => startup_failure(&format!("Failed to start application:\n{err}")),
    }
}

/// Log the error and surface it in a native dialog, so a double-click
/// launch without a terminal still shows the failure.
fn startup_failure(message: &str) -> ExitCode {
    log::error!("{message}");
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Application Error")
        .set_description(message)
        .show();
    ExitCode::FAILURE
}
