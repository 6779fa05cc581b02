use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::constants::{
    STATUS_CONFIRM_UNINSTALL, STATUS_EDIT_APPIMAGE, STATUS_EDIT_ICON, STATUS_REFRESHED,
};

use super::{App, Field, InputMode, StatusKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NormalAction {
    Quit,
    EditAppImage,
    EditIcon,
    Install,
    Uninstall,
    TogglePreserveCache,
    TogglePreserveConfig,
    Refresh,
}

impl NormalAction {
    pub(super) fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            KeyCode::Char('a') => Some(Self::EditAppImage),
            KeyCode::Char('o') => Some(Self::EditIcon),
            KeyCode::Char('i') | KeyCode::Enter => Some(Self::Install),
            KeyCode::Char('u') => Some(Self::Uninstall),
            KeyCode::Char('c') => Some(Self::TogglePreserveCache),
            KeyCode::Char('g') => Some(Self::TogglePreserveConfig),
            KeyCode::Char('r') => Some(Self::Refresh),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.on_normal_key(&key),
            InputMode::Edit(field) => self.on_edit_key(field, &key),
            InputMode::ConfirmUninstall => self.on_confirm_key(&key),
        }
    }

    fn on_normal_key(&mut self, key: &KeyEvent) {
        let Some(action) = NormalAction::from_event(key) else {
            return;
        };

        match action {
            NormalAction::Quit => self.should_quit = true,
            NormalAction::EditAppImage => self.begin_edit(Field::AppImage),
            NormalAction::EditIcon => self.begin_edit(Field::Icon),
            NormalAction::Install => self.run_install(),
            NormalAction::Uninstall => {
                if self.install_status.is_installed() {
                    self.input_mode = InputMode::ConfirmUninstall;
                    self.set_status(STATUS_CONFIRM_UNINSTALL, StatusKind::Info);
                } else {
                    self.set_status(
                        format!("{} is not installed", self.service.product().name),
                        StatusKind::Info,
                    );
                }
            }
            NormalAction::TogglePreserveCache => {
                self.options.preserve_cache = !self.options.preserve_cache;
            }
            NormalAction::TogglePreserveConfig => {
                self.options.preserve_config = !self.options.preserve_config;
            }
            NormalAction::Refresh => {
                self.refresh_status();
                self.set_status(STATUS_REFRESHED, StatusKind::Info);
            }
        }
    }

    fn begin_edit(&mut self, field: Field) {
        let current = self.buffer_mut(field).as_str().to_string();
        self.edit_backup = Some(current);
        self.input_mode = InputMode::Edit(field);
        let hint = match field {
            Field::AppImage => STATUS_EDIT_APPIMAGE,
            Field::Icon => STATUS_EDIT_ICON,
        };
        self.set_status(hint, StatusKind::Info);
    }

    fn on_edit_key(&mut self, field: Field, key: &KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.edit_backup = None;
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            KeyCode::Esc => {
                if let Some(previous) = self.edit_backup.take() {
                    self.buffer_mut(field).set(previous);
                }
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            KeyCode::Tab => {
                self.edit_backup = None;
                let next = match field {
                    Field::AppImage => Field::Icon,
                    Field::Icon => Field::AppImage,
                };
                self.begin_edit(next);
            }
            KeyCode::Backspace => self.buffer_mut(field).backspace(),
            KeyCode::Delete => self.buffer_mut(field).delete_char(),
            KeyCode::Left => self.buffer_mut(field).move_left(),
            KeyCode::Right => self.buffer_mut(field).move_right(),
            KeyCode::Home => self.buffer_mut(field).move_home(),
            KeyCode::End => self.buffer_mut(field).move_end(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer_mut(field).clear()
            }
            KeyCode::Char(ch) => self.buffer_mut(field).insert_char(ch),
            _ => {}
        }
    }

    fn on_confirm_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.run_uninstall();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            _ => {}
        }
    }
}
