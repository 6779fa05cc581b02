use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Theme};

use crate::app::message::Message;

use super::styles::ghost_button_style;

use super::super::desktop::InstallerDesktop;

impl InstallerDesktop {
    pub(crate) fn toolbar(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let theme_label = match self.theme {
            Theme::Dark => "Light mode",
            _ => "Dark mode",
        };

        let heading = text(format!("{} Installer", self.product_name()))
            .size(22)
            .color(palette.text_primary);

        let theme_button = button(text(theme_label).size(13).color(palette.secondary_text))
            .on_press(Message::ToggleTheme)
            .style(move |_, status| ghost_button_style(palette, status));

        row![heading, Space::new().width(Length::Fill), theme_button]
            .spacing(16)
            .align_y(Alignment::Center)
            .into()
    }
}
