//! Input handling: modal overlays first, then menu shortcuts, then the text
//! area. Mouse clicks open menus, pick menu items, dismiss dialogs and move
//! the cursor.

use super::*;

impl<'a> App<'a> {
    /// Handles bracketed paste events.
    /// Goes to the file-name input when a picker is open, otherwise into the buffer.
    pub(super) fn handle_paste(&mut self, text: String) {
        match &mut self.overlay {
            Overlay::FilePicker { picker, .. } => picker.insert_str(&text),
            Overlay::None => {
                self.textarea.insert_str(text);
                self.update_modified();
            }
            _ => {}
        }
    }

    // ─── Key handling ────────────────────────────────────────────────────

    /// Main key handler. An open overlay swallows every key; otherwise
    /// command shortcuts are checked before the text area sees the key.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if !matches!(self.overlay, Overlay::None) {
            self.handle_overlay_key(key);
            return;
        }

        if let Some(command) = shortcut_command(&key) {
            self.execute(command);
            return;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::F(10)) => {
                self.overlay = Overlay::Menu(MenuState::new(0));
                return;
            }
            (KeyModifiers::ALT, KeyCode::Char(ch)) => {
                if let Some(state) = MenuState::for_hotkey(ch) {
                    self.overlay = Overlay::Menu(state);
                    return;
                }
            }
            // Select all (overrides tui-textarea's Ctrl+A = move to line start)
            (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.textarea.select_all();
                return;
            }
            // tui-textarea's own undo/redo/yank bindings stay off
            (KeyModifiers::CONTROL, KeyCode::Char('u' | 'r' | 'y' | 'z')) => return,
            _ => {}
        }

        // Everything else: pass through to tui-textarea's built-in handling.
        // This covers: arrow keys, Enter, Backspace, Delete, Home, End,
        // Ctrl+K (delete to EOL), word navigation, etc.
        let input = Input::from(key);
        self.textarea.input(input);
        self.update_modified();
    }

    /// Routes a key to the open overlay. The overlay is taken out of `self`
    /// while it runs and put back only if it stays open.
    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match std::mem::take(&mut self.overlay) {
            Overlay::None => {}
            Overlay::Menu(mut state) => match key.code {
                KeyCode::Esc | KeyCode::F(10) => {}
                KeyCode::Enter => self.execute(state.command()),
                KeyCode::Left => {
                    state.prev_menu();
                    self.overlay = Overlay::Menu(state);
                }
                KeyCode::Right => {
                    state.next_menu();
                    self.overlay = Overlay::Menu(state);
                }
                KeyCode::Up => {
                    state.prev_item();
                    self.overlay = Overlay::Menu(state);
                }
                KeyCode::Down => {
                    state.next_item();
                    self.overlay = Overlay::Menu(state);
                }
                KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::ALT) => {
                    self.overlay = Overlay::Menu(MenuState::for_hotkey(ch).unwrap_or(state));
                }
                _ => self.overlay = Overlay::Menu(state),
            },
            Overlay::FilePicker {
                mut picker,
                purpose,
            } => {
                let outcome = picker.handle_key(key);
                self.pick_filter = picker.filter();
                match outcome {
                    PickerOutcome::Pending => {
                        self.overlay = Overlay::FilePicker { picker, purpose }
                    }
                    PickerOutcome::Cancelled => tracing::debug!(?purpose, "file picker cancelled"),
                    PickerOutcome::Picked(path) => self.finish_pick(purpose, path),
                }
            }
            Overlay::ColorPicker(mut picker) => match picker.handle_key(key) {
                ColorOutcome::Pending => self.overlay = Overlay::ColorPicker(picker),
                ColorOutcome::Cancelled => {}
                ColorOutcome::Chosen(color) => {
                    self.set_text_color(color);
                    let name = color.map_or_else(|| "Default".to_string(), |c| c.name());
                    self.set_status(&format!("Text color: {}", name));
                }
            },
            Overlay::Message(message) => {
                if !dialog::is_dismiss_key(&key) {
                    self.overlay = Overlay::Message(message);
                }
            }
        }
    }

    // ─── Mouse handling ──────────────────────────────────────────────────

    /// Handles clicks on the menu bar and dropdowns, dialog dismissal,
    /// cursor placement, and drag selection in the text area.
    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(mouse),

            // Left drag: extend selection to current mouse position
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.mouse_dragging && self.in_content_area(mouse.column, mouse.row) {
                    let (row, col) = self.mouse_to_buffer_pos(mouse.column, mouse.row);
                    self.textarea.move_cursor(CursorMove::Jump(row, col));
                }
            }

            // Left release: finalize selection (cancel if it was just a click with no drag)
            MouseEventKind::Up(MouseButton::Left) => {
                if self.mouse_dragging {
                    self.mouse_dragging = false;
                    match self.textarea.selection_range() {
                        Some((start, end)) if start != end => {}
                        _ => self.textarea.cancel_selection(),
                    }
                }
            }

            // Scroll wheel: delegate to tui-textarea
            MouseEventKind::ScrollUp if matches!(self.overlay, Overlay::None) => {
                self.textarea.input(Input {
                    key: Key::MouseScrollUp,
                    ctrl: false,
                    alt: false,
                    shift: false,
                });
                self.editor_scroll_top = self.editor_scroll_top.saturating_sub(1);
            }
            MouseEventKind::ScrollDown if matches!(self.overlay, Overlay::None) => {
                self.textarea.input(Input {
                    key: Key::MouseScrollDown,
                    ctrl: false,
                    alt: false,
                    shift: false,
                });
                let max_scroll = (self.textarea.lines().len() as u16).saturating_sub(1);
                self.editor_scroll_top = (self.editor_scroll_top + 1).min(max_scroll);
            }
            _ => {}
        }
    }

    fn handle_left_click(&mut self, mouse: MouseEvent) {
        let bar = self.menu_bar_area;
        let on_bar = mouse.row == bar.y && mouse.column >= bar.x && mouse.column < bar.x + bar.width;

        match std::mem::take(&mut self.overlay) {
            Overlay::Menu(state) => {
                if on_bar {
                    // Clicking the open title closes it; another title switches
                    match menu_bar::title_at(mouse.column - bar.x) {
                        Some(idx) if idx != state.menu => {
                            self.overlay = Overlay::Menu(MenuState::new(idx));
                        }
                        _ => {}
                    }
                } else if let Some(item) =
                    menu_bar::item_at(bar, state.menu, mouse.column, mouse.row)
                {
                    self.execute(MenuState { item, ..state }.command());
                }
                return;
            }
            Overlay::Message(_) => return,
            Overlay::None => {}
            other => {
                // Pickers are keyboard driven; clicks leave them open
                self.overlay = other;
                return;
            }
        }

        if on_bar {
            if let Some(idx) = menu_bar::title_at(mouse.column - bar.x) {
                self.overlay = Overlay::Menu(MenuState::new(idx));
            }
            return;
        }

        if self.in_content_area(mouse.column, mouse.row) {
            let (row, col) = self.mouse_to_buffer_pos(mouse.column, mouse.row);
            self.textarea.cancel_selection();
            self.textarea.move_cursor(CursorMove::Jump(row, col));
            self.textarea.start_selection();
            self.mouse_dragging = true;
        }
    }

    fn in_content_area(&self, column: u16, row: u16) -> bool {
        let area = self.content_area;
        column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height
    }

    /// Converts terminal mouse coordinates to buffer (row, col) positions,
    /// accounting for the line number gutter width and scroll offset.
    pub(super) fn mouse_to_buffer_pos(&self, column: u16, row: u16) -> (u16, u16) {
        let area = self.content_area;
        let relative_row = row.saturating_sub(area.y);
        let buffer_row = relative_row + self.editor_scroll_top;
        let relative_col = column.saturating_sub(area.x);
        let buffer_col = relative_col.saturating_sub(self.gutter_width());
        (buffer_row, buffer_col)
    }

    /// tui-textarea gutter = leading space + digits + trailing space
    pub(super) fn gutter_width(&self) -> u16 {
        if self.textarea.line_number_style().is_some() {
            let digits = self.textarea.lines().len().to_string().len() as u16;
            digits + 2
        } else {
            0
        }
    }
}

/// Command bound to a shortcut key, if any.
pub(super) fn shortcut_command(key: &KeyEvent) -> Option<Command> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(Command::New),
        (KeyModifiers::CONTROL, KeyCode::Char('o')) => Some(Command::Open),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(Command::Save),
        (_, KeyCode::F(12)) => Some(Command::SaveAs),
        (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(Command::Exit),
        (KeyModifiers::CONTROL, KeyCode::Char('x')) => Some(Command::Cut),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Copy),
        (KeyModifiers::CONTROL, KeyCode::Char('v')) => Some(Command::Paste),
        (_, KeyCode::F(1)) => Some(Command::About),
        _ => None,
    }
}
