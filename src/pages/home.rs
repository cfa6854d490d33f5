use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::admin_login::AdminLogin;
use crate::components::dashboard::GovernmentDashboard;
use crate::components::feedback_form::CitizenFeedbackForm;
use crate::navigation::{Action, AppState, Screen};

#[component]
fn Header(app: RwSignal<AppState>) -> impl IntoView {
	let go = move |action: Action| {
		move |_: MouseEvent| {
			app.maybe_update(|s| s.dispatch(action));
		}
	};

	view! {
		<header class="app-header">
			<div class="brand">
				<div class="brand-mark">"\u{2726}"</div>
				<div>
					<h1 class="brand-name">"PulseGov"</h1>
					<p class="brand-tagline">"BETA \u{2192} Democracy 2.0"</p>
				</div>
			</div>
			<nav class="app-nav">
				<button
					class="nav-button"
					class:active=move || app.with(|s| s.screen() == Screen::Citizen)
					on:click=go(Action::OpenCitizenPortal)
				>
					"Citizen Portal"
				</button>
				<button
					class="nav-button"
					class:active=move || app.with(AppState::admin_active)
					on:click=go(Action::OpenAdmin)
				>
					{move || app.with(AppState::admin_label)}
				</button>
			</nav>
		</header>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let app = use_context::<RwSignal<AppState>>()
		.unwrap_or_else(|| RwSignal::new(AppState::default()));
	let on_login = Callback::new(move |()| {
		app.maybe_update(|s| s.dispatch(Action::LoginSucceeded));
	});

	// remount only when the shown screen actually changes
	let shown = Memo::new(move |_| app.with(|s| (s.screen(), s.authenticated())));
	let screen = move || match shown.get() {
		(Screen::Citizen, _) => view! { <CitizenFeedbackForm /> }.into_any(),
		(Screen::Dashboard, true) => view! { <GovernmentDashboard /> }.into_any(),
		(Screen::AdminLogin | Screen::Dashboard, _) => {
			view! { <AdminLogin on_login=on_login /> }.into_any()
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="app-shell">
				<Header app=app />
				<main class="app-main">{screen}</main>
			</div>
		</ErrorBoundary>
	}
}
