use native_menu::{FrameRow, MenuFrame, PromptKind, RowValue};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const MENU_WIDTH: u16 = 44;

/// Renders a [`MenuFrame`] as a centered overlay.
pub struct MenuWidget<'a> {
    pub frame: &'a MenuFrame,
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(MENU_WIDTH, popup_height(self.frame.rows.len()), area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.frame.header))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                self.frame.sub_header.to_uppercase(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for row in &self.frame.rows {
            lines.push(row_line(row, inner.width));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.frame.footer.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "{}   page {}/{}",
                self.frame.position_text(),
                self.frame.page.0,
                self.frame.page.1
            ),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Sub header, spacer, rows, spacer, footer, counter and the two borders.
fn popup_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(7)
}

fn row_line(row: &FrameRow, width: u16) -> Line<'static> {
    if row.value == RowValue::Break {
        return Line::from(Span::styled(
            format!("  {}", row.text),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let prefix = if row.selected { " \u{25b6} " } else { "   " };
    let value = row.value_text();
    let used = prefix.chars().count() + row.text.chars().count() + value.chars().count();
    let padding = (width as usize).saturating_sub(used + 1);

    let style = if row.selected {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(Span::styled(
        format!("{}{}{}{}", prefix, row.text, " ".repeat(padding), value),
        style,
    ))
}

/// Button hints shown while prompts are visible, e.g. `Enter Select  Bksp Back`.
pub fn prompt_hints(visible: &[PromptKind]) -> String {
    visible
        .iter()
        .map(|prompt| {
            let key = match prompt {
                PromptKind::Select => "Enter",
                PromptKind::Back => "Bksp",
            };
            format!("{} {}", key, prompt.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Helper to create a centered Rect within an area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
