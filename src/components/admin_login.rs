use std::sync::Arc;
use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use log::{info, warn};

use crate::auth::{Authenticator, LoginGate, LoginOutcome, SharedPassphrase};

const UNLOCK_DELAY: Duration = Duration::from_millis(1500);

/// Password screen guarding the dashboard.
#[component]
pub fn AdminLogin(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
	let authenticator = use_context::<Arc<dyn Authenticator>>()
		.unwrap_or_else(|| Arc::new(SharedPassphrase::default()));
	let gate = RwSignal::new(LoginGate::new(authenticator));
	let show_password = RwSignal::new(false);
	let unlocking = RwSignal::new(false);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		match gate.try_update(LoginGate::submit) {
			Some(LoginOutcome::Granted) => {
				info!("Admin access granted");
				unlocking.set(true);
				set_timeout(move || on_login.run(()), UNLOCK_DELAY);
			}
			Some(LoginOutcome::Denied { attempts }) => {
				warn!("Rejected admin password (attempt {attempts})");
			}
			None => {}
		}
	};

	let hint = move || {
		gate.with(|g| g.hint())
			.map(|text| view! { <div class="login-hint">{text}</div> })
	};

	let form = move || {
		view! {
			<div class="login-panel">
				<div class="login-lock">"\u{1f512}"</div>
				<h1 class="login-title">"Access Control Room"</h1>
				<p class="login-subtitle">"Democracy's nerve center awaits your credentials"</p>
				{hint}
				<form class="login-form" on:submit=on_submit>
					<div class="password-row">
						<input
							class="password-input"
							type=move || if show_password.get() { "text" } else { "password" }
							placeholder="Enter the sacred password..."
							autofocus=true
							prop:value=move || gate.with(|g| g.input().to_owned())
							on:input=move |ev| gate.update(|g| g.set_input(event_target_value(&ev)))
						/>
						<button
							type="button"
							class="reveal-button"
							on:click=move |_| show_password.update(|s| *s = !*s)
						>
							{move || if show_password.get() { "Hide" } else { "Show" }}
						</button>
					</div>
					<button
						type="submit"
						class="unlock-button"
						disabled=move || !gate.with(LoginGate::can_submit)
					>
						"\u{26a1} Unlock Dashboard"
					</button>
				</form>
				<p class="login-footnote">"Hint: It's either 'democracy123' or 'admin'"</p>
			</div>
		}
	};

	view! {
		<div class="admin-login">
			<Show
				when=move || unlocking.get()
				fallback=form
			>
				<div class="unlocking">
					<div class="unlock-spinner"></div>
					<h2>"Unlocking Control Room..."</h2>
					<p>"Democracy is booting up"</p>
				</div>
			</Show>
		</div>
	}
}
