//! End-to-end session scenarios against a file-backed store.
//!
//! Each test reopens the store from disk where it matters, so what is
//! checked is what a later session would actually load.

use std::path::Path;
use std::sync::Arc;

use flashword_core::cues::RecordingCues;
use flashword_core::model::WordEntry;
use flashword_core::{Catalog, FileStore, Game, GameState, SessionStore};

fn open_game(path: &Path, catalog: Catalog) -> Game<FileStore> {
    Game::new(SessionStore::new(FileStore::open(path)), catalog)
}

fn stored_user(path: &Path, key: &str) -> flashword_core::UserRecord {
    SessionStore::new(FileStore::open(path))
        .list_users()
        .remove(key)
        .unwrap()
}

#[test]
fn new_learner_answers_and_advances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut game = open_game(&path, Catalog::builtin());

    let outcome = game.login("Maya").unwrap().unwrap();
    assert!(outcome.is_new_user);
    assert_eq!(outcome.record.progress_index, 0);
    assert_eq!(outcome.record.points, 0);

    assert!(game.check_answer("Dog").unwrap().unwrap().is_correct());
    assert_eq!(game.points(), Some(10));
    assert_eq!(
        game.state(),
        GameState::Solved {
            index: 0,
            correct: true
        }
    );

    assert!(game.advance().unwrap());
    assert_eq!(game.state(), GameState::Presenting { index: 1 });

    let record = stored_user(&path, "Maya");
    assert_eq!(record.progress_index, 1);
    assert_eq!(record.points, 10);
}

#[test]
fn usernames_differing_in_case_share_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut game = open_game(&path, Catalog::builtin());
    game.login("Maya").unwrap();
    game.check_answer("dog").unwrap();
    game.logout().unwrap();

    for name in ["maya", "MAYA", "  MaYa\t"] {
        let mut game = open_game(&path, Catalog::builtin());
        let outcome = game.login(name).unwrap().unwrap();
        assert!(!outcome.is_new_user, "{name:?} created a new user");
        assert_eq!(outcome.record.display_name, "Maya");
        assert_eq!(outcome.record.points, 10);
        game.logout().unwrap();
    }

    let session = SessionStore::new(FileStore::open(&path));
    assert_eq!(session.list_users().len(), 1);
}

#[test]
fn blank_usernames_leave_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut game = open_game(&path, Catalog::builtin());
    assert!(game.login("").unwrap().is_none());
    assert!(game.login("   ").unwrap().is_none());
    assert_eq!(game.state(), GameState::LoggedOut);
    assert!(!path.exists());

    game.login("Noa").unwrap();
    game.logout().unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let mut game = open_game(&path, Catalog::builtin());
    assert!(game.login(" ").unwrap().is_none());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert!(game.session().last_active_user().is_none());
}

#[test]
fn shrunken_catalog_restarts_progress() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut session = SessionStore::new(FileStore::open(&path));
    session.login("Maya").unwrap();
    session.update_progress("Maya", 11).unwrap();
    session.logout().unwrap();

    let words: Vec<WordEntry> = Catalog::builtin().iter().take(10).cloned().collect();
    let short = Catalog::new("Short", "he", "en-US", words).unwrap();
    let mut game = open_game(&path, short);

    let outcome = game.login("Maya").unwrap().unwrap();
    assert_eq!(outcome.record.progress_index, 0);
    assert_eq!(game.state(), GameState::Presenting { index: 0 });
    assert_eq!(stored_user(&path, "Maya").progress_index, 0);
}

#[test]
fn giving_up_reveals_pronounces_and_moves_on() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let cues = Arc::new(RecordingCues::new());
    let mut game = open_game(&path, Catalog::builtin()).with_cues(cues.clone());

    game.login("Maya").unwrap();
    game.check_answer("dog").unwrap();
    game.advance().unwrap();

    assert!(game.give_up());
    assert_eq!(game.points(), Some(10));
    assert_eq!(game.revealed_target(), Some("Cat"));
    assert_eq!(cues.pronounce_count(), 1);

    assert!(game.advance().unwrap());
    assert_eq!(game.state(), GameState::Presenting { index: 2 });
    assert_eq!(game.current_word().unwrap().target, "House");
    assert_eq!(stored_user(&path, "Maya").points, 10);
}

#[test]
fn wrong_answers_never_drive_points_negative() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut game = open_game(&path, Catalog::builtin());

    game.login("Maya").unwrap();
    game.check_answer("dog").unwrap();
    game.advance().unwrap();

    let mut previous = game.points().unwrap();
    for _ in 0..8 {
        let points = game.check_answer("dogs").unwrap().unwrap().points();
        assert!(points <= previous);
        previous = points;
    }
    assert_eq!(previous, 0);
    assert_eq!(game.state(), GameState::Presenting { index: 1 });
    assert_eq!(stored_user(&path, "Maya").points, 0);
}

#[test]
fn full_cycle_returns_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut game = open_game(&path, Catalog::builtin());

    game.login("Maya").unwrap();
    for _ in 0..3 {
        game.give_up();
        game.advance().unwrap();
    }
    let start = game.state();

    for _ in 0..game.catalog().len() {
        assert!(game.give_up());
        assert!(game.advance().unwrap());
    }
    assert_eq!(game.state(), start);
    assert_eq!(stored_user(&path, "Maya").progress_index, 3);
}

#[test]
fn logout_then_reload_starts_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut game = open_game(&path, Catalog::builtin());
    game.login("Maya").unwrap();
    game.logout().unwrap();

    let mut reloaded = open_game(&path, Catalog::builtin());
    assert!(!reloaded.resume().unwrap());
    assert_eq!(reloaded.state(), GameState::LoggedOut);
    assert!(reloaded.current_word().is_none());
    assert_eq!(reloaded.session().list_users().len(), 1);
}

#[test]
fn reload_resumes_where_the_learner_left_off() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut game = open_game(&path, Catalog::builtin());
    game.login("Maya").unwrap();
    game.check_answer("dog").unwrap();
    game.advance().unwrap();
    game.check_answer("cat").unwrap();
    drop(game);

    // The second answer was never advanced past, so the reload shows word 2 again.
    let mut reloaded = open_game(&path, Catalog::builtin());
    assert!(reloaded.resume().unwrap());
    assert_eq!(reloaded.state(), GameState::Presenting { index: 1 });
    assert_eq!(reloaded.points(), Some(20));
}

#[test]
fn corrupt_store_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"flashword.users": "not json at all", "flashword.last_user": "Maya"}"#)
        .unwrap();

    let mut game = open_game(&path, Catalog::builtin());
    assert!(!game.resume().unwrap());
    assert!(game.session().list_users().is_empty());

    let outcome = game.login("Maya").unwrap().unwrap();
    assert!(outcome.is_new_user);
    assert_eq!(stored_user(&path, "Maya").points, 0);
}
