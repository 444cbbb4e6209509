//! TUI rendering — orchestrates all panes.

pub mod form;
pub mod listing;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};
use turno_core::store::AppointmentStore;

use crate::app::{App, Focus, NoticeKind};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: AppointmentStore>(f: &mut Frame, app: &App<S>) {
  let area = f.area();

  // Vertical stack: header, listing, entry form, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // listing
      Constraint::Length(6), // entry form: four fields plus borders
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  listing::draw(f, rows[1], app);
  form::draw(f, rows[2], app);
  draw_status(f, rows[3], app);

  // The notice paints over everything else, so it goes last.
  if app.notice.is_some() {
    draw_notice(f, area, app);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " turno  [Tab] fields  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::DarkGray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S: AppointmentStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let (mode_label, hints) = if app.notice.is_some() {
    ("NOTICE", "Enter/Esc dismiss")
  } else {
    match app.focus {
      Focus::Listing => (
        "LIST",
        "↑↓/jk select  Esc clear  Tab fields  a/u/d actions  q quit",
      ),
      Focus::Field(_) => (
        "EDIT",
        "Type to edit  Enter next  Tab cycle  Esc listing  ^A/^U/^D actions",
      ),
    }
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {hints}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Notice modal ─────────────────────────────────────────────────────────────

fn draw_notice<S: AppointmentStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let Some(notice) = &app.notice else {
    return;
  };

  let (title, border) = match notice.kind {
    NoticeKind::Info => (" Notice ", Color::Cyan),
    NoticeKind::Error => (" Error ", Color::Red),
  };

  // Wide enough for the text, tall enough for one line plus a hint.
  let width = (notice.text.len() as u16 + 6)
    .max(24)
    .min(area.width.saturating_sub(4));
  let popup = centered_rect(area, width, 5);

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));
  let inner = block.inner(popup);

  f.render_widget(Clear, popup);
  f.render_widget(block, popup);
  f.render_widget(
    Paragraph::new(vec![
      Line::from(notice.text.as_str()),
      Line::from(""),
      Line::from(Span::styled(
        "press Enter",
        Style::default().fg(Color::DarkGray),
      )),
    ]),
    inner,
  );
}

/// A `width` x `height` rect centred inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x:      area.x + (area.width - width) / 2,
    y:      area.y + (area.height - height) / 2,
    width,
    height,
  }
}
