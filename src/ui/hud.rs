use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line score header and returns the remaining play area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            format!("Score {}", state.score),
            Style::default()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Left),
        hud_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            format!("🏆 {}", state.high_score),
            Style::default().fg(theme.hud_high_score),
        )]))
        .alignment(Alignment::Right),
        hud_area,
    );

    play_area
}
