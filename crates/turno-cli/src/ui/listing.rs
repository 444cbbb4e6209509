//! Appointment listing — the table occupying most of the screen.

use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Row, Table, TableState},
};
use turno_core::store::AppointmentStore;

use crate::app::{App, Focus};

/// Render the appointment table into `area`.
pub fn draw<S: AppointmentStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let border = if app.focus == Focus::Listing {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };

  let block = Block::default()
    .title(format!(" Appointments ({}) ", app.rows.len()))
    .borders(Borders::ALL)
    .border_style(border);

  let header = Row::new(["Id", "Name", "Date", "Time", "Description"]).style(
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let rows = app.rows.iter().map(|a| {
    Row::new([
      a.id.to_string(),
      a.name.clone(),
      a.date.clone(),
      a.time.clone(),
      a.description.clone(),
    ])
  });

  let widths = [
    Constraint::Length(6),
    Constraint::Percentage(28),
    Constraint::Length(12),
    Constraint::Length(8),
    Constraint::Min(10),
  ];

  let table = Table::new(rows, widths)
    .header(header)
    .block(block)
    .row_highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("");

  // Cursor tracking: the table scrolls to keep the selection visible.
  let mut state = TableState::default();
  state.select(app.selected);

  f.render_stateful_widget(table, area, &mut state);
}
