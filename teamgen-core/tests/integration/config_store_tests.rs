//! Configuration directory and persistent store integration tests

use teamgen_core::config::{AppSettings, ConfigManager};
use teamgen_core::models::{Category, Player, Roster};
use teamgen_core::store::{KeyValueStore, PlayerLibrary, STORE_FILE_NAME, Session, WorkingRoster};
use tempfile::TempDir;

fn manager(dir: &TempDir) -> ConfigManager {
    ConfigManager::with_config_dir(dir.path().to_path_buf())
}

#[test]
fn session_and_library_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = manager(&dir).open_store().unwrap();
        Session::new(&mut store).login("Anil").unwrap();
        let mut session = Session::new(&mut store);
        let mut library = session.library().unwrap();
        library.add(&Player::new("Kumble", Category::Bowler).unwrap()).unwrap();
        library.add(&Player::new("Dravid", Category::Batsman).unwrap()).unwrap();
    }

    let mut store = manager(&dir).open_store().unwrap();
    let mut session = Session::new(&mut store);
    assert_eq!(session.current_user().unwrap(), Some("Anil".to_string()));
    let names: Vec<String> = session
        .library()
        .unwrap()
        .load()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Kumble", "Dravid"]);
}

#[test]
fn switching_users_clears_roster_but_keeps_libraries() {
    let dir = TempDir::new().unwrap();
    let mut store = manager(&dir).open_store().unwrap();

    Session::new(&mut store).login("first").unwrap();
    PlayerLibrary::new(&mut store, "first")
        .unwrap()
        .add(&Player::new("Laxman", Category::Batsman).unwrap())
        .unwrap();
    let roster = Roster::from_players([Player::new("Laxman", Category::Batsman).unwrap()]).unwrap();
    WorkingRoster::new(&mut store).save(&roster).unwrap();

    Session::new(&mut store).login("second").unwrap();
    assert!(WorkingRoster::new(&mut store).load().unwrap().is_empty());
    assert!(Session::new(&mut store).library().unwrap().load().unwrap().is_empty());
    assert_eq!(
        PlayerLibrary::new(&mut store, "first").unwrap().load().unwrap().len(),
        1
    );
}

#[test]
fn store_file_uses_documented_keys() {
    let dir = TempDir::new().unwrap();
    let mut store = manager(&dir).open_store().unwrap();
    Session::new(&mut store).login("kim").unwrap();
    PlayerLibrary::new(&mut store, "kim")
        .unwrap()
        .add(&Player::new("Sehwag", Category::Batsman).unwrap())
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join(STORE_FILE_NAME)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["teamgen_username"], "kim");
    let players: serde_json::Value =
        serde_json::from_str(json["players_kim"].as_str().unwrap()).unwrap();
    assert_eq!(players[0]["name"], "Sehwag");
    assert_eq!(players[0]["category"], "batsman");
    assert_eq!(players[0]["isCaptain"], false);
    assert!(store.get("teamgen_roster").unwrap().is_none());
}

#[test]
fn settings_and_store_share_directory() {
    let dir = TempDir::new().unwrap();
    let manager = manager(&dir);
    let mut settings = AppSettings::default();
    settings.reveal.tick_interval_ms = 120;
    manager.save_settings(&settings).unwrap();
    manager.open_store().unwrap().set("k", "v").unwrap();

    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join(STORE_FILE_NAME).exists());
    assert_eq!(manager.load_settings().unwrap().reveal.tick_interval_ms, 120);
}
