use crate::catalog;
use crate::config;
use crate::output::{Output, Tone};
use crate::player::Player;

/// Load the demo collection into `player` and apply playback defaults.
///
/// Errors are reported on the player's output and leave it empty; the
/// session carries on either way.
pub fn load_demo<O: Output>(player: &mut Player<O>, settings: &config::PlaybackSettings) {
    let items = match catalog::demo_collection() {
        Ok(items) => Some(items),
        Err(e) => {
            log::error!("failed to build demo collection: {e}");
            player
                .output_mut()
                .line(Tone::Notice, &format!("An error occurred: {e}"));
            return;
        }
    };

    if let Err(e) = player.load_collection(items, &settings.collection_name) {
        log::error!("failed to load demo collection: {e}");
        player
            .output_mut()
            .line(Tone::Notice, &format!("An error occurred: {e}"));
        return;
    }

    if settings.autoplay {
        player.play();
    }
}
