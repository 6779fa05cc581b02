use iced::alignment::Horizontal;
use iced::border::{Border, Radius};
use iced::widget::rule;
use iced::widget::{column, container};
use iced::{Alignment, Background, Element, Length, Shadow};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::styles::card_style;

use super::super::desktop::InstallerDesktop;

pub(crate) fn compose(app: &InstallerDesktop) -> Element<'_, Message> {
    let palette = app.palette;

    let status = container(app.status_panel())
        .width(Length::Fill)
        .padding([12, 16])
        .style(move |_| card_style(palette));

    let form = container(app.installer_form())
        .width(Length::Fill)
        .padding([16, 16])
        .style(move |_| card_style(palette));

    let content = column![app.toolbar(), status, form]
        .spacing(16)
        .width(Length::Fill)
        .align_x(Alignment::Start);

    let body = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([20, 24]);

    let divider = rule::horizontal(1).style(move |_| divider_style(palette));

    let footer = container(app.status_line())
        .width(Length::Fill)
        .padding([8, 24])
        .style(move |_| footer_container_style(palette));

    container(
        column![body, divider, footer]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Left)
    .style(move |_| app_background_style(palette))
    .into()
}

fn divider_style(palette: Palette) -> rule::Style {
    rule::Style {
        color: palette.border,
        radius: Radius::from(0.0),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

fn footer_container_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface_muted)),
        border: Border {
            color: palette.border,
            width: 0.0,
            radius: Radius::from(0.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn app_background_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
