use std::io::{self, BufRead, Write};

use crate::command::{self, Command, Flow, MENU};
use crate::config::UiSettings;
use crate::output::{Console, Output, Tone};
use crate::player::Player;

/// Read commands from `input` one line at a time and apply them to `player`
/// until `exit` or end of input. Returns the number of commands handled.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    player: &mut Player<Console<W>>,
    ui: &UiSettings,
) -> io::Result<usize> {
    let mut handled = 0;
    let mut line = String::new();

    loop {
        if ui.show_menu {
            let out = player.output_mut();
            out.blank();
            out.line(Tone::Plain, "--------------------");
            out.line(Tone::Plain, MENU);
        }
        player.output_mut().prompt(&ui.prompt)?;

        line.clear();
        let cmd = if input.read_line(&mut line)? == 0 {
            // End of input behaves like `exit`; finish the prompt line first.
            player.output_mut().blank();
            Command::Exit
        } else {
            Command::parse(&line)
        };

        handled += 1;
        if command::dispatch(player, &cmd) == Flow::Exit {
            break;
        }
    }

    log::info!("session ended after {handled} commands");
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaItem, Song};
    use crate::player::PlaybackState;
    use std::io::Cursor;
    use std::time::Duration;

    fn player() -> Player<Console<Vec<u8>>> {
        let items: Vec<Box<dyn MediaItem>> = vec![
            Box::new(Song::new("A", "X", None, Duration::from_secs(60)).unwrap()),
            Box::new(Song::new("B", "Y", None, Duration::from_secs(61)).unwrap()),
        ];
        let mut p = Player::new(Console::new(Vec::new(), false));
        p.load_collection(Some(items), "Test").unwrap();
        p
    }

    fn quiet() -> UiSettings {
        UiSettings {
            show_menu: false,
            ..UiSettings::default()
        }
    }

    fn output_text(p: Player<Console<Vec<u8>>>) -> String {
        String::from_utf8(p.into_output().into_inner()).unwrap()
    }

    #[test]
    fn runs_commands_until_exit() {
        let mut p = player();
        let input = Cursor::new("play\nnext\nbogus\nexit\nplay\n");

        let handled = run(input, &mut p, &quiet()).unwrap();
        assert_eq!(handled, 4);
        assert_eq!(p.state(), PlaybackState::Playing);
        assert_eq!(p.cursor(), Some(1));

        let text = output_text(p);
        assert!(text.contains("Playing Song: A by X"));
        assert!(text.contains("Playing Song: B by Y"));
        assert!(text.contains("Unknown command."));
        assert!(text.contains("Goodbye!"));
        assert_eq!(text.matches("> ").count(), 4);
    }

    #[test]
    fn end_of_input_exits() {
        let mut p = player();
        let handled = run(Cursor::new("list\n"), &mut p, &quiet()).unwrap();
        assert_eq!(handled, 2);

        let text = output_text(p);
        assert!(text.contains(" 1. A - X (01:00) <- Current"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn menu_is_printed_before_each_prompt() {
        let mut p = player();
        run(Cursor::new("stop\nexit\n"), &mut p, &UiSettings::default()).unwrap();

        let text = output_text(p);
        assert_eq!(text.matches(MENU).count(), 2);
    }
}
