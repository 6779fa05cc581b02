use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::app::helpers::format_checked_at;
use crate::app::message::Message;
use crate::app::state::Activity;

use super::styles::danger_button_style;

use super::super::desktop::InstallerDesktop;

impl InstallerDesktop {
    /// Installed / Not installed indicator, with the uninstall action when there is something to remove.
    pub(crate) fn status_panel(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let installed = self.install_status.is_installed();
        let color = if installed {
            palette.success
        } else {
            palette.danger
        };

        let mut line = row![
            text("Status:").size(15).color(palette.text_secondary),
            text(self.install_status.label()).size(15).color(color),
            Space::new().width(Length::Fill),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        if installed {
            let uninstall = button(text("Uninstall").size(14))
                .on_press_maybe(self.can_uninstall().then_some(Message::UninstallPressed))
                .padding([6, 14])
                .style(move |_, status| danger_button_style(palette, status));
            line = line.push(uninstall);
        }

        line.into()
    }

    pub(crate) fn status_line(&self) -> Element<'_, Message> {
        let left = match self.last_checked {
            Some(at) => text(format!("Last checked {}", format_checked_at(at)))
                .size(12)
                .color(self.palette.text_secondary),
            None => text("Status not checked")
                .size(12)
                .color(self.palette.text_secondary),
        };

        let right = match self.activity {
            Activity::Running(operation) => text(operation.in_progress())
                .size(12)
                .color(self.palette.info),
            Activity::Closing => text("Closing…").size(12).color(self.palette.info),
            _ => text("").size(12).color(self.palette.text_secondary),
        };

        row![left, Space::new().width(Length::Fill), right]
            .align_y(Alignment::Center)
            .into()
    }
}
