//! TUI pane rendering
//!
//! Stateless render functions for the three visible panes:
//!
//! - [`render_moves_pane`]: the instruction list with the current move
//!   highlighted
//! - [`render_yard_pane`]: the yard drawn as crate columns, bottom-aligned,
//!   with the stacks touched by the current move tinted
//! - [`render_status_bar`]: step position, status message, and keybindings
//!
//! Scroll offsets are owned by the [`App`](super::app::App) and passed in
//! mutably so panes can clamp them and keep the current move in view.

use crate::parser::moves::Move;
use crate::ui::theme::DEFAULT_THEME;
use crate::yard::grid::SimGrid;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered block shared by all panes.
fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            DEFAULT_THEME.border_focused
        } else {
            DEFAULT_THEME.border_normal
        }))
}

/// Render the instruction list.  `current` is the index of the move that
/// produced the displayed state (`None` at the initial yard); the pane
/// auto-scrolls to keep it visible.
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    moves: &[Move],
    current: Option<usize>,
    focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block("Moves", focused);
    let inner = block.inner(area);
    let visible = inner.height as usize;

    // Keep the current move in view when stepping.
    if let Some(cur) = current {
        if cur < *scroll {
            *scroll = cur;
        } else if visible > 0 && cur >= *scroll + visible {
            *scroll = cur + 1 - visible;
        }
    }
    if !moves.is_empty() {
        *scroll = (*scroll).min(moves.len().saturating_sub(1));
    }

    let mut lines = Vec::new();
    for (index, mv) in moves.iter().enumerate().skip(*scroll).take(visible) {
        let is_current = current == Some(index);
        let marker = if is_current { "→" } else { " " };

        let number_style = Style::default().fg(DEFAULT_THEME.comment);
        let text_style = if is_current {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD)
        } else if current.is_some_and(|cur| index < cur) {
            // Already applied
            Style::default().fg(DEFAULT_THEME.comment)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>4} ", index + 1), number_style),
            Span::styled(format!("{} {}", marker, mv), text_style),
        ]));
    }

    if moves.is_empty() {
        lines.push(Line::from(Span::styled(
            " (no moves)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the yard as bottom-aligned crate columns with a label row
/// underneath, the same picture the input diagram draws.
pub fn render_yard_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &SimGrid,
    last_move: Option<Move>,
    focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block("Yard", focused);
    let inner = block.inner(area);

    let max_height = grid.max_height();
    let mut lines: Vec<Line> = Vec::with_capacity(max_height + 2);

    // Crate rows, tallest level first.
    for level in (0..max_height).rev() {
        let mut spans = Vec::with_capacity(grid.stack_count() * 2);
        for stack in 0..grid.stack_count() {
            let touched = last_move
                .is_some_and(|mv| stack == mv.source || stack == mv.dest);
            let cell_style = if touched {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.crate_face)
            };

            match grid.row(stack).get(level) {
                Some(label) => {
                    spans.push(Span::styled(format!("[{}]", label), cell_style));
                }
                None => spans.push(Span::raw("   ")),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    // Label row.
    let mut label_spans = Vec::with_capacity(grid.stack_count() * 2);
    for stack in 0..grid.stack_count() {
        label_spans.push(Span::styled(
            format!("{:^3}", stack + 1),
            Style::default()
                .fg(DEFAULT_THEME.stack_label)
                .add_modifier(Modifier::BOLD),
        ));
        label_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(label_spans));

    // Height row, matching the batch dump's `(n)` annotations.
    let mut height_spans = Vec::with_capacity(grid.stack_count() * 2);
    for stack in 0..grid.stack_count() {
        height_spans.push(Span::styled(
            format!("{:^3}", format!("({})", grid.height(stack))),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        height_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(height_spans));

    // Clamp vertical scroll so the label row stays reachable.
    let overflow = lines.len().saturating_sub(inner.height as usize);
    *scroll = (*scroll).min(overflow);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    crane_name: &str,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: step info, crane, and status message
    let left_spans = vec![
        Span::styled(
            format!(" Move {}/{} ", current_step, total_steps.saturating_sub(1)),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", crane_name),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.stack_label),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds plus a position/play indicator
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = current_step == 0;
    let is_at_end = current_step + 1 >= total_steps;

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
