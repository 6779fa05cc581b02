//! Drives the installer window's update loop directly against a throwaway home directory.

use std::fs;
use std::path::PathBuf;

use cursor_installer_core::{
    InstallRequest, InstallStatus, StepOutcome, StepReport, UninstallReport, UninstallStep,
};
use iced::Theme;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::desktop::InstallerDesktop;
use super::message::Message;
use super::options::{DesktopFlags, DesktopOptions};
use super::state::{Activity, NoticeKind, Operation, PickTarget};
use super::update::SELECT_APPIMAGE_FIRST;

fn init_app() -> (InstallerDesktop, TempDir) {
    let home = TempDir::new().expect("home");
    let flags = DesktopFlags::from(DesktopOptions {
        home: Some(home.path().to_path_buf()),
        ..Default::default()
    });
    let (app, _) = InstallerDesktop::bootstrap(flags);
    (app, home)
}

fn seed_appimage(home: &TempDir) -> PathBuf {
    let downloads = home.path().join("Downloads");
    fs::create_dir_all(&downloads).expect("downloads");
    let path = downloads.join("Cursor-0.45.0-x86_64.AppImage");
    fs::write(&path, b"appimage").expect("appimage");
    path
}

fn install_for_real(app: &mut InstallerDesktop, home: &TempDir) {
    let appimage = seed_appimage(home);
    let service = app.service.clone().expect("service");
    let report = service
        .install(InstallRequest::new(appimage, None))
        .expect("install");
    let _ = app.react(Message::InstallFinished(Ok(report)));
    let _ = app.react(Message::StatusRefreshed(service.status()));
}

#[test]
fn bootstrap_checks_status_for_a_fresh_home() {
    let (app, _home) = init_app();

    assert!(app.service.is_some());
    assert_eq!(app.install_status, InstallStatus::NotInstalled);
    assert_eq!(app.activity, Activity::Idle);
    assert!(app.last_checked.is_some());
    assert!(app.notice.is_none());
}

#[test]
fn install_without_selection_reports_error() {
    let (mut app, _home) = init_app();

    let _ = app.react(Message::InstallPressed);

    let notice = app.notice.as_ref().expect("notice");
    assert_eq!(notice.message, SELECT_APPIMAGE_FIRST);
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(app.activity, Activity::Idle);
}

#[test]
fn picked_appimage_enables_install() {
    let (mut app, home) = init_app();
    let appimage = seed_appimage(&home);

    let _ = app.react(Message::PickRequested(PickTarget::AppImage));
    assert_eq!(app.activity, Activity::Picking);
    let _ = app.react(Message::PathPicked(PickTarget::AppImage, Some(appimage)));

    assert_eq!(app.activity, Activity::Idle);
    assert_eq!(app.selection.appimage_label(), "Cursor-0.45.0-x86_64.AppImage");
    assert_eq!(app.selection.icon_label(), "No icon selected");

    let _ = app.react(Message::InstallPressed);
    assert_eq!(app.activity, Activity::Running(Operation::Install));
}

#[test]
fn cancelled_picker_keeps_previous_selection() {
    let (mut app, home) = init_app();
    let appimage = seed_appimage(&home);
    let _ = app.react(Message::PathPicked(PickTarget::AppImage, Some(appimage.clone())));

    let _ = app.react(Message::PickRequested(PickTarget::AppImage));
    let _ = app.react(Message::PathPicked(PickTarget::AppImage, None));

    assert_eq!(app.selection.appimage, Some(appimage));
    assert_eq!(app.activity, Activity::Idle);
}

#[test]
fn successful_install_schedules_close() {
    let (mut app, home) = init_app();
    install_for_real(&mut app, &home);

    assert_eq!(app.activity, Activity::Closing);
    let notice = app.notice.as_ref().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Installation successful!");
    assert!(app.install_status.is_installed());
}

#[test]
fn failed_install_shows_error_verbatim() {
    let (mut app, _home) = init_app();
    app.activity = Activity::Running(Operation::Install);

    let _ = app.react(Message::InstallFinished(Err(
        "AppImage file not found at /tmp/missing.AppImage".into(),
    )));

    assert_eq!(app.activity, Activity::Idle);
    let notice = app.notice.as_ref().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(
        notice.message,
        "Installation failed:\nAppImage file not found at /tmp/missing.AppImage"
    );
}

#[test]
fn busy_window_ignores_input() {
    let (mut app, home) = init_app();
    app.activity = Activity::Running(Operation::Install);

    let _ = app.react(Message::PreserveCacheToggled);
    let _ = app.react(Message::PickRequested(PickTarget::Icon));
    let _ = app.react(Message::PathPicked(PickTarget::AppImage, Some(seed_appimage(&home))));
    let _ = app.react(Message::InstallPressed);

    assert!(!app.options.preserve_cache);
    assert_eq!(app.activity, Activity::Running(Operation::Install));
}

#[test]
fn uninstall_needs_an_install_and_confirmation() {
    let (mut app, home) = init_app();
    let _ = app.react(Message::UninstallPressed);
    assert_eq!(app.activity, Activity::Idle);

    install_for_real(&mut app, &home);
    app.activity = Activity::Idle;

    let _ = app.react(Message::UninstallPressed);
    assert_eq!(app.activity, Activity::Confirming);
    let _ = app.react(Message::UninstallConfirmed(false));
    assert_eq!(app.activity, Activity::Idle);

    let _ = app.react(Message::PreserveConfigToggled);
    let _ = app.react(Message::UninstallPressed);
    let _ = app.react(Message::UninstallConfirmed(true));
    assert_eq!(app.activity, Activity::Running(Operation::Uninstall));
    assert!(app.options.preserve_config);
}

#[test]
fn uninstall_warnings_are_listed_with_success() {
    let (mut app, home) = init_app();
    app.activity = Activity::Running(Operation::Uninstall);
    let cache_dir = home.path().join(".cache").join("cursor-updater");
    let report = UninstallReport {
        steps: vec![
            StepReport::new(
                UninstallStep::DesktopEntry,
                home.path(),
                StepOutcome::NotFound,
            ),
            StepReport::new(
                UninstallStep::Cache,
                &cache_dir,
                StepOutcome::Failed("Permission denied (os error 13)".into()),
            ),
        ],
    };

    let _ = app.react(Message::UninstallFinished(Ok(report)));

    assert_eq!(app.activity, Activity::Closing);
    let notice = app.notice.as_ref().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(notice.message.starts_with("Uninstallation successful!"));
    assert!(notice
        .message
        .contains("⚠ Error removing cache directory: Permission denied (os error 13)"));
}

#[test]
fn status_refresh_updates_indicator() {
    let (mut app, _home) = init_app();
    let status = InstallStatus::Installed {
        artifacts: vec![PathBuf::from("/home/dev/.local/bin/Cursor-0.45.0.AppImage")],
        desktop_entry: None,
        launcher_target: None,
    };

    let _ = app.react(Message::StatusRefreshed(status.clone()));

    assert_eq!(app.install_status, status);
    assert!(app.can_uninstall());
}

#[test]
fn theme_toggle_swaps_palette() {
    let (mut app, _home) = init_app();
    let before = app.theme.clone();

    let _ = app.react(Message::ToggleTheme);

    assert_ne!(app.theme, before);
    let expected = if app.theme == Theme::Dark {
        Theme::Light
    } else {
        Theme::Dark
    };
    assert_eq!(before, expected);
}
