//! UI rendering: menu bar, title header, text area, status bar, and the
//! overlay on top of them.

use super::*;

impl<'a> App<'a> {
    /// Runs one frame of the main loop: draw + tick.
    pub fn render_frame<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        self.tick();
        Ok(())
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let full = frame.area();

        let bg = Paragraph::new("").style(theme::editor_style());
        frame.render_widget(bg, full);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Menu bar
            Constraint::Length(1), // Title
            Constraint::Length(1), // Divider
            Constraint::Min(1),    // Text area
            Constraint::Length(1), // Divider
            Constraint::Length(1), // Status
        ])
        .split(full);

        self.menu_bar_area = chunks[0];
        self.content_area = chunks[3];

        let open_menu = match &self.overlay {
            Overlay::Menu(state) => Some(*state),
            _ => None,
        };
        menu_bar::render(frame, chunks[0], open_menu.as_ref());
        header::render(frame, chunks[1], &self.title(), self.modified);

        // Thin dividers between bars and content
        let divider_style = Style::default().fg(theme::BORDER);
        for idx in [2, 4] {
            let divider = Paragraph::new("\u{2500}".repeat(chunks[idx].width as usize))
                .style(divider_style);
            frame.render_widget(divider, chunks[idx]);
        }

        self.render_editor(frame, chunks[3]);

        let (line, col) = self.textarea.cursor();
        status::render(
            frame,
            chunks[5],
            status::StatusInfo {
                line: line + 1,
                col,
                message: &self.status_message,
                word_count: self.word_count(),
                color: self.text_color.map(|c| c.name()),
                modified: self.modified,
            },
        );

        // Overlay last so it sits on top of everything
        match &self.overlay {
            Overlay::None => {}
            Overlay::Menu(state) => menu_bar::render_dropdown(frame, chunks[0], state),
            Overlay::FilePicker { picker, .. } => file_picker::render(frame, picker),
            Overlay::ColorPicker(picker) => color_picker::render(frame, picker),
            Overlay::Message(message) => dialog::render(frame, message),
        }
    }

    /// Renders the tui-textarea widget plus tilde markers for rows past the
    /// end of the buffer.
    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);

        // Track scroll position (mirrors tui-textarea's internal viewport logic)
        // so we can translate mouse coordinates -> buffer positions correctly.
        let cursor_row = self.textarea.cursor().0 as u16;
        if cursor_row < self.editor_scroll_top {
            self.editor_scroll_top = cursor_row;
        } else if self.editor_scroll_top + area.height <= cursor_row {
            self.editor_scroll_top = cursor_row + 1 - area.height;
        }

        let total_lines = self.textarea.lines().len() as u16;
        let visible_content_lines = total_lines.saturating_sub(self.editor_scroll_top);
        let gutter = self.gutter_width().saturating_sub(1) as usize;
        for row in visible_content_lines..area.height {
            let tilde_area = Rect {
                x: area.x,
                y: area.y + row,
                width: area.width,
                height: 1,
            };
            let tilde = Paragraph::new(Line::from(vec![
                Span::styled(" ".repeat(gutter), Style::default().fg(theme::TILDE)),
                Span::styled("~", Style::default().fg(theme::TILDE)),
            ]));
            frame.render_widget(tilde, tilde_area);
        }
    }
}
