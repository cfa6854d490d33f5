//! PulseGov: a citizen feedback portal with a government sentiment dashboard,
//! rendered client-side with Leptos.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, error, info};

// Modules
pub mod api;
pub mod auth;
mod components;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod navigation;
mod pages;
pub mod sentiment;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

use crate::auth::{Authenticator, SharedPassphrase};
use crate::config::Settings;
use crate::navigation::AppState;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the portal and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let settings = Settings::from_build_env().unwrap_or_else(|e| {
		error!("Invalid build settings, using defaults: {e}");
		Settings::default()
	});
	info!(
		"Feedback service at {} (offline: {})",
		settings.api_base, settings.offline
	);
	provide_context(settings);
	provide_context(RwSignal::new(AppState::default()));
	provide_context::<Arc<dyn Authenticator>>(Arc::new(SharedPassphrase::default()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="PulseGov" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
