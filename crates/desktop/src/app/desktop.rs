//! Iced application wiring for the installer window lifecycle.

use std::io::Cursor;
use std::time::Duration;

use chrono::{DateTime, Local};
use cursor_installer_core::{InstallStatus, LifecycleService, UninstallOptions};
use iced::{window, Size, Theme};

use crate::app::helpers::detect_theme;
use crate::app::message::{Effect, Message};
use crate::app::options::{DesktopFlags, DesktopOptions};
use crate::app::state::{Activity, Notice, Selection};
use crate::app::theme::Palette;
use crate::app::views;
use crate::telemetry::{self, Event as TelemetryEvent};

pub fn run(options: DesktopOptions) -> iced::Result {
    let _ = tracing_subscriber::fmt::try_init();

    let boot_flags = DesktopFlags::from(options);
    let window_settings = window::Settings {
        size: Size::new(480.0, 600.0),
        min_size: Some(Size::new(420.0, 520.0)),
        icon: load_window_icon(),
        ..window::Settings::default()
    };

    iced::application(
        move || InstallerDesktop::bootstrap(boot_flags.clone()),
        InstallerDesktop::react,
        views::compose_root,
    )
    .window(window_settings)
    .title(app_title)
    .theme(app_theme)
    .run()
}

fn app_title(state: &InstallerDesktop) -> String {
    format!("{} Installer", state.product_name())
}

fn app_theme(state: &InstallerDesktop) -> Option<Theme> {
    Some(state.theme.clone())
}

fn load_window_icon() -> Option<window::Icon> {
    const ICON_BYTES: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../icons/icon_256x256.png"
    ));

    let decoder = png::Decoder::new(Cursor::new(ICON_BYTES));
    let mut reader = decoder.read_info().ok()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).ok()?;
    let bytes = &buf[..frame.buffer_size()];

    window::icon::from_rgba(bytes.to_vec(), frame.width, frame.height).ok()
}

pub(crate) struct InstallerDesktop {
    pub(crate) service: Option<LifecycleService>,
    pub(crate) install_status: InstallStatus,
    pub(crate) selection: Selection,
    pub(crate) options: UninstallOptions,
    pub(crate) activity: Activity,
    pub(crate) notice: Option<Notice>,
    pub(crate) theme: Theme,
    pub(crate) palette: Palette,
    pub(crate) telemetry: telemetry::Handle,
    pub(crate) close_delay: Duration,
    pub(crate) last_checked: Option<DateTime<Local>>,
}

impl InstallerDesktop {
    pub(super) fn bootstrap(flags: DesktopFlags) -> (Self, Effect) {
        let theme = detect_theme();
        let palette = Palette::for_theme(&theme);
        let telemetry = telemetry::Handle::new();

        let mut notice = None;
        let mut install_status = InstallStatus::NotInstalled;
        let mut last_checked = None;

        let service = match LifecycleService::discover(flags.home.clone()) {
            Ok(service) => {
                telemetry.record(TelemetryEvent::AppStarted);
                install_status = service.status();
                last_checked = Some(Local::now());
                telemetry.record(TelemetryEvent::StatusChecked {
                    installed: install_status.is_installed(),
                });
                Some(service)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to resolve install locations");
                notice = Some(Notice::error(err.to_string()));
                None
            }
        };

        (
            Self {
                service,
                install_status,
                selection: Selection::default(),
                options: UninstallOptions::default(),
                activity: Activity::Idle,
                notice,
                theme,
                palette,
                telemetry,
                close_delay: flags.close_delay,
                last_checked,
            },
            Effect::none(),
        )
    }

    pub(crate) fn product_name(&self) -> &'static str {
        self.service
            .as_ref()
            .map(|service| service.product().name)
            .unwrap_or(cursor_installer_core::Product::default().name)
    }

    pub(crate) fn can_install(&self) -> bool {
        self.service.is_some() && !self.activity.is_busy()
    }

    pub(crate) fn can_uninstall(&self) -> bool {
        self.can_install() && self.install_status.is_installed()
    }
}
