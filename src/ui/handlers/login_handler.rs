//! Sign-in and registration.

use crate::db;

use super::super::{
    app::App,
    types::{LoginView, Notice, Screen},
};
use super::MenuHandler;

/// Helper struct for the login screen.
pub struct LoginHandler<'a> {
    app: &'a mut App,
}

impl<'a> LoginHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    fn view(&mut self) -> Option<&mut LoginView> {
        match self.app.screen {
            Screen::Login(ref mut view) => Some(view),
            _ => None,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(view) = self.view() {
            view.focused_mut().push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(view) = self.view() {
            view.focused_mut().pop();
        }
    }

    pub fn toggle_focus(&mut self) {
        if let Some(view) = self.view() {
            view.toggle_focus();
        }
    }

    fn credentials(&mut self) -> Option<(String, String)> {
        self.view()
            .map(|view| (view.username.clone(), view.password.clone()))
    }

    fn set_notice(&mut self, notice: Notice) {
        if let Some(view) = self.view() {
            view.notice = Some(notice);
        }
    }

    pub fn login(&mut self) {
        let Some((username, password)) = self.credentials() else {
            return;
        };

        let pool = self.app.db_pool.clone();
        match App::run_db_operation(db::accounts::authenticate(&pool, &username, &password)) {
            Ok(account) => {
                self.app.log(format!("Signed in as {}", account.username));
                self.app.account = Some(account);
                MenuHandler::new(self.app).enter_mode_select();
            }
            Err(e) => {
                if !e.is_user_facing() {
                    tracing::error!(error = %e, "account lookup failed");
                }
                self.app.log(format!("Sign-in failed: {}", e));
                self.set_notice(Notice::Error(e.to_string()));
                if let Some(view) = self.view() {
                    view.password.clear();
                }
            }
        }
    }

    pub fn register(&mut self) {
        let Some((username, password)) = self.credentials() else {
            return;
        };

        let pool = self.app.db_pool.clone();
        match App::run_db_operation(db::accounts::register(&pool, &username, &password)) {
            Ok(account) => {
                self.app.log(format!("Registered account {}", account.username));
                self.set_notice(Notice::Info(
                    "Registration successful, press Enter to sign in".to_string(),
                ));
            }
            Err(e) => {
                self.app.log(format!("Registration failed: {}", e));
                self.set_notice(Notice::Error(e.to_string()));
            }
        }
    }

    /// Drop the signed-in account and show an empty login screen.
    pub fn logout(&mut self) {
        if let Some(account) = self.app.account.take() {
            self.app.log(format!("Signed out {}", account.username));
        }
        self.app.screen = Screen::Login(LoginView::default());
    }
}
