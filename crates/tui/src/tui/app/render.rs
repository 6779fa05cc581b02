use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::status::InstallStatus;
use crate::tui::constants::{APP_VERSION, KEY_HELP};
use crate::tui::helpers::{
    centered_rect, file_label, toggle_label, BG_BASE, BG_PANEL, FG_ACCENT, FG_INSTALLED,
    FG_MISSING,
};

use super::{App, Field, InputMode};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Min(4),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_status(f, chunks[1]);
        self.draw_form(f, chunks[2]);
        self.draw_log(f, chunks[3]);
        self.draw_footer(f, chunks[4]);

        if self.input_mode == InputMode::ConfirmUninstall {
            self.draw_confirm_overlay(f, size);
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let product = self.service.product();
        let line = Line::from(vec![
            Span::styled(
                format!(" {} Installer v{} ", product.name, APP_VERSION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Download: {}", product.download_url),
                Style::default().fg(FG_ACCENT),
            ),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let (label_color, mut lines) = match &self.install_status {
            InstallStatus::Installed { artifacts, .. } => (
                FG_INSTALLED,
                artifacts
                    .iter()
                    .map(|path| Line::from(format!("  {}", path.display())))
                    .collect::<Vec<_>>(),
            ),
            InstallStatus::NotInstalled => (FG_MISSING, Vec::new()),
        };
        lines.insert(
            0,
            Line::from(vec![
                Span::raw("Status: "),
                Span::styled(
                    self.install_status.label(),
                    Style::default()
                        .fg(label_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Installation ")
            .style(Style::default().bg(BG_PANEL));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_form(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Install / Uninstall ")
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_field(f, rows[0], Field::AppImage, "AppImage", "No file selected");
        self.draw_field(f, rows[1], Field::Icon, "Icon", "No icon selected (default icon)");

        let options = Line::from(vec![
            Span::raw(format!(
                "{} Keep cache   ",
                toggle_label(self.options.preserve_cache)
            )),
            Span::raw(format!(
                "{} Keep configuration",
                toggle_label(self.options.preserve_config)
            )),
        ]);
        f.render_widget(Paragraph::new(options), rows[3]);

        let layout = self.service.layout();
        let target = Line::from(Span::styled(
            format!("Installs into {}", layout.bin_dir().display()),
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(target), rows[4]);
    }

    fn draw_field(&self, f: &mut Frame<'_>, area: Rect, field: Field, label: &str, empty: &str) {
        let buffer = match field {
            Field::AppImage => &self.selection.appimage,
            Field::Icon => &self.selection.icon,
        };
        let editing = self.input_mode == InputMode::Edit(field);
        let prefix = format!("{label:>9}: ");

        let value = if editing {
            Span::styled(
                buffer.as_str().to_string(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )
        } else if buffer.is_blank() {
            Span::styled(empty.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(file_label(buffer.as_str()), Style::default().fg(FG_ACCENT))
        };

        let line = Line::from(vec![Span::raw(prefix.clone()), value]);
        f.render_widget(Paragraph::new(line), area);

        if editing {
            let column = prefix.chars().count() + buffer.as_str()[..buffer.cursor()].chars().count();
            let x = area.x.saturating_add(column as u16);
            f.set_cursor(x.min(area.right().saturating_sub(1)), area.y);
        }
    }

    fn draw_log(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = if self.log.is_empty() {
            vec![Line::from(Span::styled(
                "Output of the last install or uninstall appears here.",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.log.iter().map(|line| Line::from(line.as_str())).collect()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Output ")
            .style(Style::default().bg(BG_PANEL));
        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            KEY_HELP,
            Style::default().fg(Color::DarkGray),
        ))];
        if let Some(status) = &self.status {
            lines.push(Line::from(Span::styled(status.text.as_str(), status.style())));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn draw_confirm_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let popup = centered_rect(56, 7, area);
        f.render_widget(Clear, popup);
        let product = self.service.product();
        let mut lines = vec![
            Line::from(format!("Are you sure you want to uninstall {}?", product.name)),
            Line::from(""),
        ];
        if self.options.preserve_cache || self.options.preserve_config {
            lines.push(Line::from(Span::styled(
                "Preserved directories will be kept.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            "y: uninstall   n: cancel",
            Style::default().fg(FG_ACCENT),
        )));
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Confirm Uninstall ")
            .style(Style::default().bg(BG_PANEL));
        f.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
