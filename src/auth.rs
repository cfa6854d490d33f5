//! Passphrase gate in front of the dashboard.
//!
//! The gate is a demo placeholder: no hashing, lockout or rate limiting.
//! Swap the [`Authenticator`] for real credential validation.

use std::sync::Arc;

const DEMO_PASSPHRASES: &[&str] = &["democracy123", "admin"];

/// Decides whether a submitted password opens the dashboard.
pub trait Authenticator: Send + Sync {
	/// True when `password` is accepted.
	fn authenticate(&self, password: &str) -> bool;
}

/// Accepts any of a fixed set of shared passphrases, case-sensitively.
#[derive(Clone, Debug)]
pub struct SharedPassphrase {
	accepted: Vec<String>,
}

impl SharedPassphrase {
	/// Accepts exactly the given passphrases.
	pub fn new<I, S>(accepted: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			accepted: accepted.into_iter().map(Into::into).collect(),
		}
	}
}

impl Default for SharedPassphrase {
	fn default() -> Self {
		Self::new(DEMO_PASSPHRASES.iter().copied())
	}
}

impl Authenticator for SharedPassphrase {
	fn authenticate(&self, password: &str) -> bool {
		self.accepted.iter().any(|p| p == password)
	}
}

/// Checks `password` against the demo passphrases.
pub fn authenticate(password: &str) -> bool {
	SharedPassphrase::default().authenticate(password)
}

/// Result of submitting the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
	/// Password accepted.
	Granted,
	/// Password rejected; the input has been cleared.
	Denied {
		/// Failures so far, this one included.
		attempts: u32,
	},
}

/// Login form state for one visit of the login screen: the typed password
/// and the failed attempts.
#[derive(Clone)]
pub struct LoginGate {
	authenticator: Arc<dyn Authenticator>,
	input: String,
	attempts: u32,
}

impl LoginGate {
	/// Empty form checked against `authenticator`.
	pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
		Self {
			authenticator,
			input: String::new(),
			attempts: 0,
		}
	}

	/// Failed attempts so far.
	pub fn attempts(&self) -> u32 {
		self.attempts
	}

	/// Password as currently typed.
	pub fn input(&self) -> &str {
		&self.input
	}

	/// Replaces the typed password.
	pub fn set_input(&mut self, value: impl Into<String>) {
		self.input = value.into();
	}

	/// Submit stays disabled while nothing is typed.
	pub fn can_submit(&self) -> bool {
		!self.input.is_empty()
	}

	/// Checks the typed password. A rejection counts an attempt and clears
	/// the input; an acceptance leaves both alone.
	pub fn submit(&mut self) -> LoginOutcome {
		if self.authenticator.authenticate(&self.input) {
			return LoginOutcome::Granted;
		}
		self.attempts += 1;
		self.input.clear();
		LoginOutcome::Denied {
			attempts: self.attempts,
		}
	}

	/// Taunt shown above the form, escalating with failures.
	pub fn hint(&self) -> Option<&'static str> {
		match self.attempts {
			0 => None,
			1 => Some("Nice try. Democracy isn't that easy."),
			2 => Some("Still not it. The system is watching."),
			_ => Some("Persistent, aren't we? Try 'democracy123' or 'admin'"),
		}
	}
}

impl Default for LoginGate {
	fn default() -> Self {
		Self::new(Arc::new(SharedPassphrase::default()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_demo_passphrases() {
		assert!(authenticate("democracy123"));
		assert!(authenticate("admin"));
		assert!(!authenticate(""));
		assert!(!authenticate("Admin"));
		assert!(!authenticate(" admin"));
	}

	#[test]
	fn test_custom_authenticator_plugs_in() {
		struct Never;
		impl Authenticator for Never {
			fn authenticate(&self, _: &str) -> bool {
				false
			}
		}

		let mut gate = LoginGate::new(Arc::new(Never));
		gate.set_input("admin");
		assert_eq!(gate.submit(), LoginOutcome::Denied { attempts: 1 });
	}

	fn try_password(gate: &mut LoginGate, password: &str) -> LoginOutcome {
		gate.set_input(password);
		gate.submit()
	}

	#[test]
	fn test_attempts_escalate_hint() {
		let mut gate = LoginGate::default();
		assert_eq!(gate.hint(), None);

		assert_eq!(try_password(&mut gate, "guess"), LoginOutcome::Denied { attempts: 1 });
		assert_eq!(gate.hint(), Some("Nice try. Democracy isn't that easy."));

		try_password(&mut gate, "again");
		assert_eq!(gate.hint(), Some("Still not it. The system is watching."));

		try_password(&mut gate, "third");
		try_password(&mut gate, "fourth");
		assert_eq!(gate.attempts(), 4);
		assert!(gate.hint().unwrap().contains("democracy123"));
	}

	#[test]
	fn test_rejected_password_clears_input() {
		let mut gate = LoginGate::default();
		gate.set_input("Admin");
		assert!(gate.can_submit());
		assert_eq!(gate.submit(), LoginOutcome::Denied { attempts: 1 });
		assert_eq!(gate.input(), "");
		assert!(!gate.can_submit());
	}

	#[test]
	fn test_success_keeps_input_and_attempt_count() {
		let mut gate = LoginGate::default();
		try_password(&mut gate, "nope");
		assert_eq!(try_password(&mut gate, "admin"), LoginOutcome::Granted);
		assert_eq!(gate.input(), "admin");
		assert_eq!(gate.attempts(), 1);
	}

	#[test]
	fn test_empty_input_cannot_submit() {
		let gate = LoginGate::default();
		assert!(!gate.can_submit());
	}

	#[test]
	fn test_shared_passphrase_custom_set() {
		let auth = SharedPassphrase::new(["open sesame"]);
		assert!(auth.authenticate("open sesame"));
		assert!(!auth.authenticate("admin"));
	}
}
