use std::fs;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use rstest::rstest;
use tempfile::TempDir;

use super::input::NormalAction;
use super::{App, Field, InputMode, StatusKind};
use crate::config::InstallLayout;
use crate::core::product::CURSOR;
use crate::tui::constants::{STATUS_INSTALLED, STATUS_SELECT_FIRST, STATUS_UNINSTALLED};
use crate::tui::helpers::{centered_rect, expand_path, file_label};
use crate::LifecycleService;

fn init_app() -> (App, TempDir) {
    let home = TempDir::new().expect("home");
    let service = LifecycleService::new(InstallLayout::for_home(home.path(), &CURSOR), CURSOR);
    (App::new(service), home)
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn seed_download(home: &Path) -> PathBuf {
    let downloads = home.join("Downloads");
    fs::create_dir_all(&downloads).expect("downloads");
    let path = downloads.join("Cursor-0.45.0-x86_64.AppImage");
    fs::write(&path, b"app").expect("appimage");
    path
}

#[test]
fn centered_rect_keeps_within_bounds() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    let rect = centered_rect(40, 10, area);
    assert!(rect.x >= area.x);
    assert!(rect.y >= area.y);
    assert_eq!(rect.width, 40);
    assert_eq!(rect.height, 10);
}

#[test]
fn expand_path_handles_home_prefix() {
    let home = Path::new("/home/dev");
    assert_eq!(
        expand_path("~/Downloads/Cursor.AppImage", home),
        Some(PathBuf::from("/home/dev/Downloads/Cursor.AppImage"))
    );
    assert_eq!(expand_path("  ", home), None);
    assert_eq!(
        expand_path("/opt/Cursor.AppImage", home),
        Some(PathBuf::from("/opt/Cursor.AppImage"))
    );
    assert_eq!(file_label("/opt/Cursor.AppImage"), "Cursor.AppImage");
}

#[test]
fn install_without_selection_reports_error() {
    let (mut app, _home) = init_app();
    press(&mut app, KeyCode::Char('i'));

    let status = app.status.as_ref().expect("status message");
    assert_eq!(status.text, STATUS_SELECT_FIRST);
    assert_eq!(status.kind, StatusKind::Error);
    assert!(!app.install_status.is_installed());
}

#[test]
fn edit_then_install_updates_status() {
    let (mut app, home) = init_app();
    seed_download(home.path());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, InputMode::Edit(Field::AppImage));
    type_text(&mut app, "~/Downloads/Cursor-0.45.0-x86_64.AppImage");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);

    press(&mut app, KeyCode::Char('i'));

    assert!(app.install_status.is_installed());
    assert_eq!(app.status.as_ref().map(|s| s.text.as_str()), Some(STATUS_INSTALLED));
    assert_eq!(app.log.len(), 3);
}

#[test]
fn escape_restores_previous_value() {
    let (mut app, _home) = init_app();
    press(&mut app, KeyCode::Char('o'));
    type_text(&mut app, "/icons/a.png");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('o'));
    type_text(&mut app, "-typo");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.selection.icon.as_str(), "/icons/a.png");
    assert!(!app.should_quit());
}

#[test]
fn missing_icon_fails_install_without_crashing() {
    let (mut app, home) = init_app();
    let appimage = seed_download(home.path());
    app.selection.appimage.set(appimage.display().to_string());
    app.selection.icon.set("/definitely/missing.png");

    press(&mut app, KeyCode::Char('i'));

    let status = app.status.as_ref().expect("status");
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("Icon file not found"));
    assert!(!app.install_status.is_installed());
}

#[test]
fn uninstall_requires_confirmation() {
    let (mut app, home) = init_app();
    let appimage = seed_download(home.path());
    app.selection.appimage.set(appimage.display().to_string());
    press(&mut app, KeyCode::Char('i'));
    assert!(app.install_status.is_installed());

    press(&mut app, KeyCode::Char('u'));
    assert_eq!(app.input_mode, InputMode::ConfirmUninstall);
    press(&mut app, KeyCode::Char('n'));
    assert!(app.install_status.is_installed());

    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('u'));
    press(&mut app, KeyCode::Char('y'));

    assert!(!app.install_status.is_installed());
    assert_eq!(app.status.as_ref().map(|s| s.text.as_str()), Some(STATUS_UNINSTALLED));
    assert!(app.log.iter().any(|line| line.contains("Preserved cache directory")));
}

#[test]
fn quit_keys_stop_the_loop() {
    let (mut app, _home) = init_app();
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[rstest]
#[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(NormalAction::Quit))]
#[case(KeyCode::Esc, KeyModifiers::NONE, Some(NormalAction::Quit))]
#[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(NormalAction::Quit))]
#[case(KeyCode::Char('c'), KeyModifiers::NONE, Some(NormalAction::TogglePreserveCache))]
#[case(KeyCode::Char('g'), KeyModifiers::NONE, Some(NormalAction::TogglePreserveConfig))]
#[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(NormalAction::EditAppImage))]
#[case(KeyCode::Char('o'), KeyModifiers::NONE, Some(NormalAction::EditIcon))]
#[case(KeyCode::Char('i'), KeyModifiers::NONE, Some(NormalAction::Install))]
#[case(KeyCode::Enter, KeyModifiers::NONE, Some(NormalAction::Install))]
#[case(KeyCode::Char('u'), KeyModifiers::NONE, Some(NormalAction::Uninstall))]
#[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(NormalAction::Refresh))]
#[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
fn normal_keys_map_to_actions(
    #[case] code: KeyCode,
    #[case] modifiers: KeyModifiers,
    #[case] expected: Option<NormalAction>,
) {
    assert_eq!(
        NormalAction::from_event(&KeyEvent::new(code, modifiers)),
        expected
    );
}
