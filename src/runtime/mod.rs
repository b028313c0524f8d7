use std::io::{self, IsTerminal};

use crate::output::{Console, Output, Tone};
use crate::player::Player;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    init_logging(&settings.log.filter);
    if let Some(reason) = fallback {
        log::warn!("{reason}");
    }

    let stdout = io::stdout();
    let color = settings.ui.color.enabled(stdout.is_terminal());
    log::debug!("console colour enabled: {color}");

    let mut player = Player::new(Console::new(stdout, color));
    player.output_mut().line(Tone::Heading, &settings.ui.banner);

    startup::load_demo(&mut player, &settings.playback);

    let stdin = io::stdin();
    event_loop::run(stdin.lock(), &mut player, &settings.ui)?;

    Ok(())
}

/// Install `env_logger` on stderr. `RUST_LOG` wins over the configured filter.
fn init_logging(filter: &str) {
    let res = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
    if let Err(e) = res {
        eprintln!("cadenza: logger already initialised: {e}");
    }
}
