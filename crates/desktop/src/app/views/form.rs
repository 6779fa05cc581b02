use iced::alignment::Horizontal;
use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::app::message::Message;
use crate::app::state::{NoticeKind, PickTarget};

use super::styles::{
    ghost_button_style, link_button_style, primary_button_style, secondary_button_style,
};

use super::super::desktop::InstallerDesktop;

fn toggle_label(enabled: bool, label: &str) -> String {
    let mark = if enabled { "☑" } else { "☐" };
    format!("{mark} {label}")
}

impl InstallerDesktop {
    pub(crate) fn installer_form(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let idle = !self.activity.is_busy();

        let appimage_row = row![
            button(text("Select AppImage").size(14))
                .on_press_maybe(idle.then_some(Message::PickRequested(PickTarget::AppImage)))
                .padding([6, 12])
                .style(move |_, status| secondary_button_style(palette, status)),
            text(self.selection.appimage_label())
                .size(13)
                .color(palette.text_secondary),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mut icon_row = row![
            button(text("Select Icon").size(14))
                .on_press_maybe(idle.then_some(Message::PickRequested(PickTarget::Icon)))
                .padding([6, 12])
                .style(move |_, status| secondary_button_style(palette, status)),
            text(self.selection.icon_label())
                .size(13)
                .color(palette.text_secondary),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        if self.selection.icon.is_some() {
            icon_row = icon_row.push(Space::new().width(Length::Fill)).push(
                button(text("Clear").size(12))
                    .on_press_maybe(idle.then_some(Message::IconCleared))
                    .style(move |_, status| ghost_button_style(palette, status)),
            );
        }

        let install_ready = self.can_install() && self.selection.appimage.is_some();
        let install = button(
            text("Install")
                .size(15)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding([10, 16])
        .on_press_maybe(install_ready.then_some(Message::InstallPressed))
        .style(move |_, status| primary_button_style(palette, status));

        let preserve = column![
            button(
                text(toggle_label(
                    self.options.preserve_cache,
                    "Keep cache on uninstall"
                ))
                .size(13)
            )
            .on_press_maybe(idle.then_some(Message::PreserveCacheToggled))
            .style(move |_, status| ghost_button_style(palette, status)),
            button(
                text(toggle_label(
                    self.options.preserve_config,
                    "Keep configuration on uninstall"
                ))
                .size(13)
            )
            .on_press_maybe(idle.then_some(Message::PreserveConfigToggled))
            .style(move |_, status| ghost_button_style(palette, status)),
        ]
        .spacing(2);

        let mut form = column![
            text("AppImage").size(13).color(palette.text_muted),
            appimage_row,
            text("Custom icon (optional)").size(13).color(palette.text_muted),
            icon_row,
            install,
            preserve,
        ]
        .spacing(10)
        .align_x(Alignment::Start);

        if let Some(notice) = &self.notice {
            let color = match notice.kind {
                NoticeKind::Success => palette.success,
                NoticeKind::Error => palette.danger,
            };
            form = form.push(text(notice.message.as_str()).size(13).color(color));
        }

        let download = button(
            text(format!(
                "Download {} AppImage from cursor.com",
                self.product_name()
            ))
            .size(13),
        )
        .on_press(Message::OpenDownloadPage)
        .style(move |_, status| link_button_style(palette, status));

        form.push(download).into()
    }
}
