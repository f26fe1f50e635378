//! Zeilcursus entry point
//!
//! The browser build is driven from JavaScript through `zeilcursus::web`.
//! Natively this runs a headless session and logs the HUD once per
//! simulated second.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;

    use zeilcursus::consts::MAX_FRAME_DT;
    use zeilcursus::sim::{ControlInput, Session, SessionEvent, autopilot};
    use zeilcursus::{ConfigError, ConfigResult, HudSnapshot, SessionConfig};

    /// Fixed step of the headless loop (60 Hz)
    const HEADLESS_DT: f32 = 1.0 / 60.0;

    #[derive(Parser, Debug)]
    #[command(name = "zeilcursus", about = "Headless run of the Zeilcursus sailing trainer")]
    struct Args {
        /// Session config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Level 1-3, overrides the config
        #[arg(short, long)]
        level: Option<u8>,
        /// Launch heading in degrees, overrides the config
        #[arg(long)]
        heading: Option<f32>,
        /// Simulated seconds to run
        #[arg(short, long, default_value = "60")]
        seconds: f32,
        /// Let the autopilot play the sheets
        #[arg(short, long)]
        autopilot: bool,
    }

    /// Config file plus command-line overrides, validated as a whole
    fn load_config(args: &Args) -> ConfigResult<SessionConfig> {
        if !args.seconds.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "seconds",
                value: args.seconds,
            });
        }
        let mut config = match &args.config {
            Some(path) => SessionConfig::load(path).unwrap_or_else(|e| {
                log::error!("{e}; using the default course");
                SessionConfig::default()
            }),
            None => SessionConfig::default(),
        };
        if let Some(level) = args.level {
            config.level = level;
        }
        if let Some(heading) = args.heading {
            config.start_heading_deg = heading;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn run() {
        let args = Args::parse();
        let config = match load_config(&args) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };
        let mut session = Session::new(&config);

        let dt = HEADLESS_DT.min(MAX_FRAME_DT);
        let total_ticks = (args.seconds.max(0.0) / dt).round() as u64;
        let ticks_per_report = (1.0 / dt).round() as u64;

        for tick in 0..total_ticks {
            let input = if args.autopilot {
                autopilot(&session.boat, &session.wind, session.level)
            } else {
                ControlInput::default()
            };

            for event in session.tick(&input, dt) {
                match event {
                    SessionEvent::RanAground => log::warn!("Aan de grond gelopen!"),
                    other => log::info!("{:?}", other),
                }
            }

            let hud = HudSnapshot::from_session(&session);
            if tick % ticks_per_report == 0 || session.is_game_over() {
                log::info!("[{:>5.1}s] {}", session.elapsed, hud.summary());
                if let Ok(json) = serde_json::to_string(&hud) {
                    log::debug!("{json}");
                }
            }
            if session.is_game_over() {
                break;
            }
        }

        log::info!(
            "Finished level {} after {:.1}s at ({:.1}, {:.1})",
            session.level.number(),
            session.elapsed,
            session.boat.pos.x,
            session.boat.pos.y
        );
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Zeilcursus (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is zeilcursus::web::start, this is just to satisfy the compiler
}
