use super::*;
use crate::media::{MediaItem, Song};
use crate::output::Transcript;
use crate::player::PlaybackState;
use std::time::Duration;

fn player() -> Player<Transcript> {
    let items: Vec<Box<dyn MediaItem>> = vec![
        Box::new(Song::new("A", "X", None, Duration::from_secs(60)).unwrap()),
        Box::new(Song::new("B", "Y", None, Duration::from_secs(60)).unwrap()),
    ];
    let mut p = Player::new(Transcript::new());
    p.load_collection(Some(items), "Test").unwrap();
    p.output_mut().clear();
    p
}

#[test]
fn parse_is_case_and_whitespace_insensitive() {
    assert_eq!(Command::parse("play"), Command::Play);
    assert_eq!(Command::parse("  PLAY \n"), Command::Play);
    assert_eq!(Command::parse("Stop"), Command::Stop);
    assert_eq!(Command::parse("next"), Command::Next);
    assert_eq!(Command::parse("prev"), Command::Prev);
    assert_eq!(Command::parse("previous"), Command::Prev);
    assert_eq!(Command::parse("info"), Command::Info);
    assert_eq!(Command::parse("LIST"), Command::List);
    assert_eq!(Command::parse("help"), Command::Help);
    assert_eq!(Command::parse("exit"), Command::Exit);
    assert_eq!(Command::parse("quit"), Command::Exit);
}

#[test]
fn parse_keeps_unknown_input() {
    assert_eq!(
        Command::parse("  Shuffle "),
        Command::Unknown("Shuffle".to_string())
    );
    assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    assert_eq!("rewind".parse::<Command>().unwrap(), Command::Unknown("rewind".into()));
}

#[test]
fn dispatch_drives_the_player() {
    let mut p = player();

    assert_eq!(dispatch(&mut p, &Command::Play), Flow::Continue);
    assert_eq!(p.state(), PlaybackState::Playing);

    dispatch(&mut p, &Command::Next);
    assert_eq!(p.cursor(), Some(1));

    dispatch(&mut p, &Command::Prev);
    assert_eq!(p.cursor(), Some(0));

    dispatch(&mut p, &Command::Stop);
    assert_eq!(p.state(), PlaybackState::Stopped);

    dispatch(&mut p, &Command::Info);
    assert!(p.output().contains("Current Item (1/2) in 'Test':"));

    dispatch(&mut p, &Command::List);
    assert!(p.output().contains(" 1. A - X (01:00) <- Current"));

    dispatch(&mut p, &Command::Help);
    assert!(p.output().contains(MENU));
}

#[test]
fn dispatch_reports_unknown_and_exits() {
    let mut p = player();
    assert_eq!(
        dispatch(&mut p, &Command::Unknown("dance".into())),
        Flow::Continue
    );
    assert!(p.output().contains("Unknown command."));
    assert_eq!(p.state(), PlaybackState::Stopped);

    assert_eq!(dispatch(&mut p, &Command::Exit), Flow::Exit);
    assert!(p.output().contains("Goodbye!"));
}
