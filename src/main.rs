use speedread::app::{App, AppEvent};
use speedread::engine::Config;
use speedread::logging;
use speedread::ui::{Theme, TuiManager};
use std::time::Instant;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_path = logging::init(&config.logging);
    info!(log = ?log_path, "speedread starting");
    if let Some(e) = config_error {
        warn!(error = %e, "invalid config, using defaults");
    }

    let theme = Theme::from_config(&config.theme);
    let mut app = App::new(config);

    // A path on the command line skips the loader.
    if let Some(path) = std::env::args().nth(1) {
        app.handle_event(AppEvent::LoadFile(path), Instant::now());
    }

    let mut tui = TuiManager::new(theme)?;
    tui.run_event_loop(&mut app)?;

    info!("speedread exiting");
    Ok(())
}
