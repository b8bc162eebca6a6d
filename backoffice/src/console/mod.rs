//! Terminal console
//!
//! A ratatui front end over [`Backoffice`]: route tabs, the active page's
//! table with its search box, the add/edit form and order details as
//! popups, and a live log pane.
//!
//! Keys (normal mode): `1`-`5`/`Tab` switch routes, `/` search, `c` cycle
//! tab, `↑/↓` select, `a` add, `e` edit, `d` delete, `m`/`p`/`x` complete,
//! resume or cancel an order, `Enter` order details, `q` quit.

mod ui;
mod view;

pub use view::PageView;

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use shared::models::OrderStatus;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::core::{Backoffice, Config};
use crate::pages::Route;
use crate::pages::orders::OrderDetail;
use crate::session::FieldKind;
use crate::utils::time::now_local;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box
    Search,
    /// Add/edit form popup
    Form,
    /// Order detail popup
    Detail,
}

pub struct App {
    pub state: Backoffice,
    pub input_mode: InputMode,
    /// Search box, or the focused text field while the form is open
    pub input: Input,
    /// Focused form field
    pub field_index: usize,
    /// Selected row per route
    pub selected: [usize; 5],
    pub detail: Option<OrderDetail>,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: Backoffice) -> Self {
        Self {
            state,
            input_mode: InputMode::default(),
            input: Input::default(),
            field_index: 0,
            selected: [0; 5],
            detail: None,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    /// Page behind the current route; `None` on the dashboard
    pub fn page(&self) -> Option<&dyn PageView> {
        match self.state.route() {
            Route::Dashboard => None,
            Route::Staff => Some(&self.state.staff),
            Route::Menu => Some(&self.state.menu),
            Route::Orders => Some(&self.state.orders),
            Route::Customers => Some(&self.state.customers),
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut dyn PageView> {
        match self.state.route() {
            Route::Dashboard => None,
            Route::Staff => Some(&mut self.state.staff),
            Route::Menu => Some(&mut self.state.menu),
            Route::Orders => Some(&mut self.state.orders),
            Route::Customers => Some(&mut self.state.customers),
        }
    }

    pub fn selected_row(&self) -> usize {
        self.selected[self.state.route().index()]
    }

    fn set_selected_row(&mut self, row: usize) {
        self.selected[self.state.route().index()] = row;
    }

    /// Keep the selection inside the visible rows
    fn clamp_selection(&mut self) {
        let len = self.page().map(|p| p.visible_len()).unwrap_or(0);
        let row = self.selected_row().min(len.saturating_sub(1));
        self.set_selected_row(row);
    }

    fn navigate(&mut self, route: Route) {
        self.state.navigate(route);
        self.input_mode = InputMode::Normal;
        self.clamp_selection();
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Search => self.handle_search_key(key),
            InputMode::Form => self.handle_form_key(key),
            InputMode::Detail => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.detail = None;
                    self.input_mode = InputMode::Normal;
                }
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='5') => {
                let index = usize::from(c as u8 - b'1');
                self.navigate(Route::ALL[index]);
            }
            KeyCode::Tab => self.navigate(self.state.route().next()),
            KeyCode::BackTab => self.navigate(self.state.route().prev()),
            KeyCode::Esc => self.state.dismiss_toasts(),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => self.handle_page_key(key),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let row = self.selected_row();
        let Some(page) = self.page_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up => {
                self.set_selected_row(row.saturating_sub(1));
            }
            KeyCode::Down => {
                let last = page.visible_len().saturating_sub(1);
                self.set_selected_row((row + 1).min(last));
            }
            KeyCode::Char('/') => {
                let term = page.search_term().to_string();
                self.input = Input::new(term);
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('c') => {
                page.cycle_category();
                self.clamp_selection();
            }
            KeyCode::Char('a') => {
                page.open_add();
                self.open_form();
            }
            KeyCode::Char('e') => match page.open_edit_at(row) {
                Ok(()) => self.open_form(),
                Err(e) => tracing::debug!("Edit ignored: {}", e),
            },
            KeyCode::Char('d') => {
                let n = page.delete_at(row);
                self.state.notify_opt(n);
                self.clamp_selection();
            }
            KeyCode::Char('m') => self.change_order_status(OrderStatus::Completed),
            KeyCode::Char('p') => self.change_order_status(OrderStatus::InProgress),
            KeyCode::Char('x') => self.change_order_status(OrderStatus::Cancelled),
            KeyCode::Enter => self.show_order_detail(),
            _ => {}
        }
    }

    fn selected_order_id(&self) -> Option<String> {
        if self.state.route() != Route::Orders {
            return None;
        }
        self.page()?.id_at(self.selected_row())
    }

    fn change_order_status(&mut self, status: OrderStatus) {
        if let Some(id) = self.selected_order_id() {
            self.state.update_order_status(&id, status, now_local());
            self.clamp_selection();
        }
    }

    fn show_order_detail(&mut self) {
        let Some(id) = self.selected_order_id() else {
            return;
        };
        match self.state.orders.detail(&id) {
            Ok(detail) => {
                self.detail = Some(detail);
                self.input_mode = InputMode::Detail;
            }
            Err(e) => self.state.notify(e.into()),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
                let term = self.input.value().to_string();
                if let Some(page) = self.page_mut() {
                    page.set_search(&term);
                }
                self.clamp_selection();
            }
        }
    }

    // ========== Form ==========

    fn open_form(&mut self) {
        self.input_mode = InputMode::Form;
        self.focus_field(0);
    }

    /// Move focus to field `index`, loading its text into the input
    fn focus_field(&mut self, index: usize) {
        let Some(page) = self.page() else {
            return;
        };
        let fields = page.form_fields();
        if fields.is_empty() {
            return;
        }
        let index = index % fields.len();
        let value = page.form_value(fields[index].key).unwrap_or_default();
        self.field_index = index;
        self.input = Input::new(value);
    }

    /// Write the input back into the focused text field
    fn flush_field(&mut self) {
        let index = self.field_index;
        let value = self.input.value().to_string();
        let Some(page) = self.page_mut() else {
            return;
        };
        if let Some(field) = page.form_fields().get(index)
            && field.kind == FieldKind::Text
            && let Err(e) = page.set_form_value(field.key, &value)
        {
            tracing::warn!("Field {} not updated: {}", field.key, e);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let index = self.field_index;
        let Some(field) = self.page().and_then(|p| p.form_fields().get(index).copied()) else {
            self.input_mode = InputMode::Normal;
            return;
        };
        match key.code {
            KeyCode::Esc => {
                if let Some(page) = self.page_mut() {
                    page.cancel();
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.flush_field();
                let Some(page) = self.page_mut() else {
                    return;
                };
                let n = page.commit(now_local());
                let still_open = page.form_open();
                self.state.notify(n);
                if !still_open {
                    self.input_mode = InputMode::Normal;
                    self.clamp_selection();
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.flush_field();
                self.focus_field(index + 1);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.flush_field();
                let count = self.page().map(|p| p.form_fields().len()).unwrap_or(1);
                self.focus_field(index + count.max(1) - 1);
            }
            KeyCode::Left | KeyCode::Right if matches!(field.kind, FieldKind::Choice(_)) => {
                let forward = key.code == KeyCode::Right;
                if let Some(page) = self.page_mut()
                    && let Err(e) = page.cycle_form_choice(field.key, forward)
                {
                    tracing::warn!("Choice not changed: {}", e);
                }
            }
            _ if field.kind == FieldKind::Text => {
                self.input.handle_event(&Event::Key(key));
            }
            _ => {}
        }
    }
}

/// Run the console until the user quits
pub fn run(config: &Config, state: Backoffice) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state);
    tracing::info!("Press 1-5 to switch pages, 'a' to add, 'q' to quit");

    let res = run_app(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    config: &Config,
) -> io::Result<()> {
    let timeout = config.tick_rate();
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        if app.should_quit {
            tracing::info!("Shutting down");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn seeded_app() -> App {
        App::new(Backoffice::new(&Config::with_overrides(true)))
    }

    #[test]
    fn test_number_keys_switch_routes() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state.route(), Route::Menu);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.route(), Route::Orders);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_search_is_live() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "555-123");
        assert_eq!(app.page().unwrap().visible_len(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.state.customers.filter().search_term, "555-123");
    }

    #[test]
    fn test_add_staff_through_form() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Form);
        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Tab);
        // Waiter -> Bartender
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        let ana = app.state.staff.records().last().unwrap();
        assert_eq!(ana.name, "Ana");
        assert_eq!(ana.role.as_str(), "Bartender");
        assert_eq!(
            app.state.toasts().latest().unwrap().message,
            "Staff member added successfully"
        );
    }

    #[test]
    fn test_failed_commit_keeps_form_open() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Zoe");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Form);
        assert!(app.state.toasts().latest().unwrap().is_error());
        assert_eq!(app.state.customers.records().len(), 6);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.state.customers.session().is_open());
    }

    #[test]
    fn test_order_keys() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_order_id().as_deref(), Some("78942"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Detail);
        assert_eq!(app.detail.as_ref().unwrap().id, "78942");
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('x'));
        let order = app.state.orders.get(&"78942".to_string()).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('2'));
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_row(), 5);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state.staff.records().len(), 5);
        assert_eq!(app.selected_row(), 4);
    }

    #[test]
    fn test_dashboard_ignores_page_keys() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Normal);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.state.toasts().is_empty());
    }
}
