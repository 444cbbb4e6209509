//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use turno_core::{
  appointment::{Appointment, AppointmentId},
  controller::{Command, FormState, dispatch},
  error::DispatchError,
  store::AppointmentStore,
};

// ─── Focus ────────────────────────────────────────────────────────────────────

/// One of the four entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Date,
  Time,
  Description,
}

impl Field {
  pub const ALL: [Field; 4] =
    [Field::Name, Field::Date, Field::Time, Field::Description];

  pub fn label(self) -> &'static str {
    match self {
      Field::Name => "Name",
      Field::Date => "Date",
      Field::Time => "Time",
      Field::Description => "Description",
    }
  }
}

/// Where keystrokes go: the listing or one entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Listing,
  Field(Field),
}

impl Focus {
  /// Forward cycle: listing → name → date → time → description → listing.
  pub fn next(self) -> Focus {
    match self {
      Focus::Listing => Focus::Field(Field::Name),
      Focus::Field(Field::Name) => Focus::Field(Field::Date),
      Focus::Field(Field::Date) => Focus::Field(Field::Time),
      Focus::Field(Field::Time) => Focus::Field(Field::Description),
      Focus::Field(Field::Description) => Focus::Listing,
    }
  }

  pub fn prev(self) -> Focus {
    match self {
      Focus::Listing => Focus::Field(Field::Description),
      Focus::Field(Field::Name) => Focus::Listing,
      Focus::Field(Field::Date) => Focus::Field(Field::Name),
      Focus::Field(Field::Time) => Focus::Field(Field::Date),
      Focus::Field(Field::Description) => Focus::Field(Field::Time),
    }
  }
}

// ─── Notice ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
  Info,
  Error,
}

/// Modal feedback — an acknowledgement or a validation failure. While one is
/// up it swallows all input except its dismissal keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub kind: NoticeKind,
  pub text: String,
}

impl Notice {
  pub fn info(text: impl Into<String>) -> Self {
    Self { kind: NoticeKind::Info, text: text.into() }
  }

  pub fn error(text: impl Into<String>) -> Self {
    Self { kind: NoticeKind::Error, text: text.into() }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S> {
  /// Current keyboard focus.
  pub focus: Focus,

  /// The visible listing — a disposable projection, rebuilt from the store
  /// after every mutation.
  pub rows: Vec<Appointment>,

  /// Index into `rows` of the selected listing row, if any.
  pub selected: Option<usize>,

  /// The four entry fields.
  pub form: FormState,

  /// Modal notice, if one is up.
  pub notice: Option<Notice>,

  /// The injected store handle, owned for the lifetime of the process.
  store: S,
}

impl<S: AppointmentStore> App<S> {
  /// Create an [`App`] with an empty listing; call
  /// [`reload`](Self::reload) before the first draw.
  pub fn new(store: S) -> Self {
    Self {
      focus: Focus::Listing,
      rows: Vec::new(),
      selected: None,
      form: FormState::default(),
      notice: None,
      store,
    }
  }

  /// Id of the currently selected row, if any.
  pub fn selected_id(&self) -> Option<AppointmentId> {
    self.selected.and_then(|i| self.rows.get(i)).map(|a| a.id)
  }

  /// Current text of one entry field.
  pub fn field_value(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.form.name,
      Field::Date => &self.form.date,
      Field::Time => &self.form.time,
      Field::Description => &self.form.description,
    }
  }

  fn field_mut(&mut self, field: Field) -> &mut String {
    match field {
      Field::Name => &mut self.form.name,
      Field::Date => &mut self.form.date,
      Field::Time => &mut self.form.time,
      Field::Description => &mut self.form.description,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Rebuild the listing from a fresh full scan. The old projection is
  /// discarded outright, selection included.
  pub async fn reload(&mut self) -> anyhow::Result<()> {
    self.rows = self.store.list_all().await?;
    self.selected = None;
    Ok(())
  }

  // ── Command execution ─────────────────────────────────────────────────────

  /// Run one command through the dispatcher and apply its effects: notice,
  /// reload, and (for Add/Update) clearing the form. Store faults propagate
  /// out and end the session.
  async fn run_command(&mut self, command: Command) -> anyhow::Result<()> {
    let outcome =
      dispatch(&self.store, command, &self.form, self.selected_id()).await;
    match outcome {
      Ok(applied) => {
        if applied.clear_form {
          self.form.clear();
        }
        self.reload().await?;
        self.notice = Some(Notice::info(applied.message));
      }
      Err(DispatchError::Validation(e)) => {
        self.notice = Some(Notice::error(e.to_string()));
      }
      Err(DispatchError::Store(e)) => return Err(e.into()),
    }
    Ok(())
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.code == KeyCode::Char('c')
      && key.modifiers.contains(KeyModifiers::CONTROL)
    {
      return Ok(false);
    }

    // A notice is modal: only its dismissal keys do anything.
    if self.notice.is_some() {
      if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        self.notice = None;
      }
      return Ok(true);
    }

    // The three actions fire from any focus.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
      match key.code {
        KeyCode::Char('a') => {
          self.run_command(Command::Add).await?;
          return Ok(true);
        }
        KeyCode::Char('u') => {
          self.run_command(Command::Update).await?;
          return Ok(true);
        }
        KeyCode::Char('d') => {
          self.run_command(Command::Delete).await?;
          return Ok(true);
        }
        _ => {}
      }
    }

    match key.code {
      KeyCode::Tab => {
        self.focus = self.focus.next();
        return Ok(true);
      }
      KeyCode::BackTab => {
        self.focus = self.focus.prev();
        return Ok(true);
      }
      _ => {}
    }

    match self.focus {
      Focus::Listing => self.handle_listing_key(key).await,
      Focus::Field(field) => self.handle_field_key(field, key),
    }
  }

  async fn handle_listing_key(
    &mut self,
    key: KeyEvent,
  ) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Selection
      KeyCode::Down | KeyCode::Char('j') => self.select_next(),
      KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
      KeyCode::Esc => self.selected = None,

      // Plain-letter aliases for the three actions.
      KeyCode::Char('a') => self.run_command(Command::Add).await?,
      KeyCode::Char('u') => self.run_command(Command::Update).await?,
      KeyCode::Char('d') => self.run_command(Command::Delete).await?,

      _ => {}
    }
    Ok(true)
  }

  fn handle_field_key(
    &mut self,
    field: Field,
    key: KeyEvent,
  ) -> anyhow::Result<bool> {
    match key.code {
      // Enter advances to the next field, wrapping back to the listing.
      KeyCode::Enter => self.focus = self.focus.next(),
      KeyCode::Esc => self.focus = Focus::Listing,
      KeyCode::Backspace => {
        self.field_mut(field).pop();
      }
      KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.field_mut(field).push(c);
      }
      _ => {}
    }
    Ok(true)
  }

  fn select_next(&mut self) {
    if self.rows.is_empty() {
      return;
    }
    self.selected = Some(match self.selected {
      None => 0,
      Some(i) if i + 1 < self.rows.len() => i + 1,
      Some(i) => i,
    });
  }

  fn select_prev(&mut self) {
    if self.rows.is_empty() {
      return;
    }
    self.selected = Some(match self.selected {
      None => 0,
      Some(0) => 0,
      Some(i) => i - 1,
    });
  }
}

#[cfg(test)]
mod tests {
  use turno_store_sqlite::SqliteStore;

  use super::*;

  async fn app() -> App<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    App::new(store)
  }

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
  }

  fn fill_form(app: &mut App<SqliteStore>) {
    app.form.name = "Ana Gomez".into();
    app.form.date = "2024-07-01".into();
    app.form.time = "10:30".into();
    app.form.description = "checkup".into();
  }

  #[tokio::test]
  async fn tab_cycles_focus_through_every_field_and_back() {
    let mut app = app().await;
    assert_eq!(app.focus, Focus::Listing);

    let mut seen = vec![app.focus];
    for _ in 0..5 {
      app.handle_key(key(KeyCode::Tab)).await.unwrap();
      seen.push(app.focus);
    }

    assert_eq!(seen, vec![
      Focus::Listing,
      Focus::Field(Field::Name),
      Focus::Field(Field::Date),
      Focus::Field(Field::Time),
      Focus::Field(Field::Description),
      Focus::Listing,
    ]);
  }

  #[tokio::test]
  async fn back_tab_cycles_the_other_way() {
    let mut app = app().await;
    app.handle_key(key(KeyCode::BackTab)).await.unwrap();
    assert_eq!(app.focus, Focus::Field(Field::Description));
    app.handle_key(key(KeyCode::BackTab)).await.unwrap();
    assert_eq!(app.focus, Focus::Field(Field::Time));
  }

  #[tokio::test]
  async fn typing_edits_the_focused_field() {
    let mut app = app().await;
    app.handle_key(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.focus, Focus::Field(Field::Name));

    for c in "Anna".chars() {
      app.handle_key(key(KeyCode::Char(c))).await.unwrap();
    }
    assert_eq!(app.form.name, "Anna");

    app.handle_key(key(KeyCode::Backspace)).await.unwrap();
    assert_eq!(app.form.name, "Ann");
  }

  #[tokio::test]
  async fn selection_moves_down_up_and_clamps_at_the_edges() {
    let mut app = app().await;
    fill_form(&mut app);
    app.handle_key(ctrl('a')).await.unwrap();
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    fill_form(&mut app);
    app.handle_key(ctrl('a')).await.unwrap();
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.rows.len(), 2);
    assert_eq!(app.selected, None);

    app.handle_key(key(KeyCode::Down)).await.unwrap();
    assert_eq!(app.selected, Some(0));
    app.handle_key(key(KeyCode::Down)).await.unwrap();
    assert_eq!(app.selected, Some(1));
    app.handle_key(key(KeyCode::Down)).await.unwrap();
    assert_eq!(app.selected, Some(1));

    app.handle_key(key(KeyCode::Up)).await.unwrap();
    assert_eq!(app.selected, Some(0));
    app.handle_key(key(KeyCode::Up)).await.unwrap();
    assert_eq!(app.selected, Some(0));

    app.handle_key(key(KeyCode::Esc)).await.unwrap();
    assert_eq!(app.selected, None);
  }

  #[tokio::test]
  async fn add_persists_clears_the_form_and_raises_an_info_notice() {
    let mut app = app().await;
    fill_form(&mut app);

    app.handle_key(ctrl('a')).await.unwrap();

    assert_eq!(app.rows.len(), 1);
    assert_eq!(app.rows[0].name, "Ana Gomez");
    assert!(app.form.name.is_empty());
    assert!(app.form.description.is_empty());
    assert_eq!(app.selected, None);
    assert!(
      matches!(&app.notice, Some(n) if n.kind == NoticeKind::Info),
      "expected an info notice, got {:?}",
      app.notice
    );
  }

  #[tokio::test]
  async fn add_with_empty_fields_raises_an_error_notice() {
    let mut app = app().await;

    app.handle_key(ctrl('a')).await.unwrap();

    assert!(app.rows.is_empty());
    assert!(
      matches!(&app.notice, Some(n) if n.kind == NoticeKind::Error),
      "expected an error notice, got {:?}",
      app.notice
    );
  }

  #[tokio::test]
  async fn notice_swallows_input_until_dismissed() {
    let mut app = app().await;
    app.notice = Some(Notice::info("done"));

    // `q` would normally quit; under a notice it does nothing.
    let keep_running = app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
    assert!(keep_running);
    assert!(app.notice.is_some());

    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert!(app.notice.is_none());

    let keep_running = app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
    assert!(!keep_running);
  }

  #[tokio::test]
  async fn update_without_selection_complains_before_touching_the_store() {
    let mut app = app().await;
    fill_form(&mut app);
    app.handle_key(ctrl('a')).await.unwrap();
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    fill_form(&mut app);
    app.handle_key(ctrl('u')).await.unwrap();

    assert!(
      matches!(&app.notice, Some(n) if n.kind == NoticeKind::Error),
      "expected an error notice, got {:?}",
      app.notice
    );
    assert_eq!(app.rows[0].name, "Ana Gomez");
  }

  #[tokio::test]
  async fn update_rewrites_the_selected_row() {
    let mut app = app().await;
    fill_form(&mut app);
    app.handle_key(ctrl('a')).await.unwrap();
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    app.handle_key(key(KeyCode::Down)).await.unwrap();
    fill_form(&mut app);
    app.form.time = "11:00".into();
    app.handle_key(ctrl('u')).await.unwrap();

    assert_eq!(app.rows.len(), 1);
    assert_eq!(app.rows[0].time, "11:00");
    assert!(app.form.time.is_empty());
    assert_eq!(app.selected, None);
  }

  #[tokio::test]
  async fn delete_removes_the_row_but_keeps_the_form() {
    let mut app = app().await;
    fill_form(&mut app);
    app.handle_key(ctrl('a')).await.unwrap();
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    app.handle_key(key(KeyCode::Down)).await.unwrap();
    app.form.name = "draft in progress".into();
    app.handle_key(ctrl('d')).await.unwrap();

    assert!(app.rows.is_empty());
    assert_eq!(app.form.name, "draft in progress");
    assert_eq!(app.selected, None);
  }

  #[tokio::test]
  async fn ctrl_c_quits_even_while_editing_a_field() {
    let mut app = app().await;
    app.handle_key(key(KeyCode::Tab)).await.unwrap();

    let keep_running = app.handle_key(ctrl('c')).await.unwrap();
    assert!(!keep_running);
  }
}
