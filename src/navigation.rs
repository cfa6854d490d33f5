//! Which screen the shell shows, and whether the admin gate has been passed.

/// Top-level screens of the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
	/// Feedback form.
	#[default]
	Citizen,
	/// Password gate.
	AdminLogin,
	/// Government dashboard; requires a passed gate.
	Dashboard,
}

/// Named transitions; the only way to change an [`AppState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	/// Header "Citizen Portal" button.
	OpenCitizenPortal,
	/// Header "Admin"/"Dashboard" button.
	OpenAdmin,
	/// The login gate accepted a password.
	LoginSucceeded,
}

/// View state held at the application root.
///
/// `screen == Dashboard` implies `authenticated`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppState {
	screen: Screen,
	authenticated: bool,
}

impl AppState {
	/// Screen currently shown.
	pub fn screen(&self) -> Screen {
		self.screen
	}

	/// Whether the admin gate has been passed this session.
	pub fn authenticated(&self) -> bool {
		self.authenticated
	}

	/// State after `action`.
	#[must_use]
	pub fn apply(self, action: Action) -> Self {
		match action {
			Action::OpenCitizenPortal => Self {
				screen: Screen::Citizen,
				..self
			},
			Action::OpenAdmin if self.authenticated => Self {
				screen: Screen::Dashboard,
				..self
			},
			Action::OpenAdmin => Self {
				screen: Screen::AdminLogin,
				..self
			},
			Action::LoginSucceeded => Self {
				screen: Screen::Dashboard,
				authenticated: true,
			},
		}
	}

	/// Applies `action` in place and reports whether anything changed.
	///
	/// Re-selecting the current screen is a no-op, so observers of the state
	/// are not woken and the mounted view keeps its contents.
	pub fn dispatch(&mut self, action: Action) -> bool {
		let next = self.apply(action);
		if next == *self {
			return false;
		}
		*self = next;
		true
	}

	/// Label of the header's admin button.
	pub fn admin_label(&self) -> &'static str {
		if self.authenticated { "Dashboard" } else { "Admin" }
	}

	/// True when the admin button should render as selected.
	pub fn admin_active(&self) -> bool {
		matches!(self.screen, Screen::AdminLogin | Screen::Dashboard)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_starts_on_citizen_portal_logged_out() {
		let state = AppState::default();
		assert_eq!(state.screen(), Screen::Citizen);
		assert!(!state.authenticated());
		assert_eq!(state.admin_label(), "Admin");
		assert!(!state.admin_active());
	}

	#[test]
	fn test_admin_button_goes_to_login_until_authenticated() {
		let state = AppState::default().apply(Action::OpenAdmin);
		assert_eq!(state.screen(), Screen::AdminLogin);
		assert!(state.admin_active());

		let state = state.apply(Action::LoginSucceeded);
		assert_eq!(state.screen(), Screen::Dashboard);
		assert!(state.authenticated());
		assert_eq!(state.admin_label(), "Dashboard");
	}

	#[test]
	fn test_login_survives_visiting_citizen_portal() {
		let state = AppState::default()
			.apply(Action::OpenAdmin)
			.apply(Action::LoginSucceeded)
			.apply(Action::OpenCitizenPortal);
		assert_eq!(state.screen(), Screen::Citizen);
		assert!(state.authenticated());

		assert_eq!(state.apply(Action::OpenAdmin).screen(), Screen::Dashboard);
	}

	#[test]
	fn test_reselecting_current_screen_changes_nothing() {
		let mut state = AppState::default();
		assert_eq!(state.apply(Action::OpenCitizenPortal), state);
		assert!(!state.dispatch(Action::OpenCitizenPortal));
		assert_eq!(state, AppState::default());

		assert!(state.dispatch(Action::OpenAdmin));
		assert!(!state.dispatch(Action::OpenAdmin));
		assert!(state.dispatch(Action::LoginSucceeded));
		assert!(!state.dispatch(Action::OpenAdmin));
		assert!(!state.dispatch(Action::LoginSucceeded));
		assert_eq!(state.screen(), Screen::Dashboard);
	}

	#[test]
	fn test_dispatch_matches_apply() {
		let mut state = AppState::default();
		for action in [Action::OpenAdmin, Action::LoginSucceeded, Action::OpenCitizenPortal] {
			let expected = state.apply(action);
			state.dispatch(action);
			assert_eq!(state, expected);
		}
	}

	#[test]
	fn test_dashboard_never_reached_without_login() {
		let actions = [Action::OpenAdmin, Action::OpenCitizenPortal, Action::OpenAdmin];
		let mut state = AppState::default();
		for action in actions {
			state = state.apply(action);
			assert_ne!(state.screen(), Screen::Dashboard);
		}
	}
}
