//! Entry form — the four fields below the listing.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use turno_core::store::AppointmentStore;

use crate::app::{App, Field, Focus};

/// Render the entry form into `area`.
pub fn draw<S: AppointmentStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let editing = matches!(app.focus, Focus::Field(_));
  let border = if editing {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };

  let block = Block::default()
    .title(" Entry ")
    .borders(Borders::ALL)
    .border_style(border);
  let inner = block.inner(area);
  f.render_widget(block, area);

  // One line per field: right-aligned label, then the current text. The
  // focused field gets a trailing cursor.
  let lines: Vec<Line> = Field::ALL
    .into_iter()
    .map(|field| {
      let focused = app.focus == Focus::Field(field);

      let label_style = if focused {
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::DarkGray)
      };

      let value = if focused {
        format!("{}_", app.field_value(field))
      } else {
        app.field_value(field).to_string()
      };

      Line::from(vec![
        Span::styled(format!("{:>12}: ", field.label()), label_style),
        Span::raw(value),
      ])
    })
    .collect();

  f.render_widget(Paragraph::new(lines), inner);
}
