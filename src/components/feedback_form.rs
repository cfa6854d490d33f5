use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::api::FeedbackClient;
use crate::config::Settings;
use crate::error::PulseError;
use crate::sentiment::{SentimentLabel, SentimentResult, classify};

pub const MINISTRIES: &[&str] = &[
	"Ministry of Home Affairs",
	"Ministry of Finance",
	"Ministry of Defence",
	"Ministry of Health",
	"Ministry of Education",
	"Ministry of Environment",
	"Ministry of Railways",
	"Ministry of External Affairs",
];

pub const CLAUSES: &[&str] = &[
	"Article 1: Fundamental Rights",
	"Article 2: Implementation Timeline",
	"Article 3: Budget Allocation",
	"Article 4: Enforcement Mechanism",
	"Article 5: Public Consultation",
];

/// Blank or whitespace-only feedback never leaves the form.
pub fn is_submittable(text: &str) -> bool {
	!text.trim().is_empty()
}

#[derive(Clone, Debug, PartialEq)]
enum Outcome {
	Analysed(SentimentResult),
	/// The service answered, but not with anything we could read.
	Unreadable,
}

fn badge_class(label: SentimentLabel) -> &'static str {
	match label {
		SentimentLabel::Positive => "badge badge-positive",
		SentimentLabel::Neutral => "badge badge-neutral",
		SentimentLabel::Negative => "badge badge-negative",
	}
}

fn icon(label: SentimentLabel) -> &'static str {
	match label {
		SentimentLabel::Positive => "\u{2764}\u{fe0f}",
		SentimentLabel::Neutral => "\u{1f4ac}",
		SentimentLabel::Negative => "\u{26a0}\u{fe0f}",
	}
}

#[component]
fn ResultCard(result: SentimentResult) -> impl IntoView {
	view! {
		<div class="result-card">
			<div class="result-icon">{icon(result.label)}</div>
			<h3>{result.message}</h3>
			<span class=badge_class(result.label)>
				{format!("{:.0}% confident", result.confidence)}
			</span>
			<p class="result-body">
				"Your feedback has been processed by our AI sentiment analyzer and forwarded to the relevant ministry."
			</p>
			<div class="sticker">{format!("\u{1f3af} {}", result.note)}</div>
		</div>
	}
}

/// Citizen-facing feedback form with its result card.
#[component]
pub fn CitizenFeedbackForm() -> impl IntoView {
	let settings = use_context::<Settings>().unwrap_or_default();
	let offline = settings.offline;
	let client = FeedbackClient::new(&settings);

	let feedback = RwSignal::new(String::new());
	let ministry = RwSignal::new(String::new());
	let clause = RwSignal::new(String::new());
	let submitting = RwSignal::new(false);
	let outcome = RwSignal::new(None::<Outcome>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let text = feedback.get_untracked();
		if !is_submittable(&text) || submitting.get_untracked() {
			return;
		}

		if offline {
			let result = classify(&text);
			info!("Classified locally as {} ({:.0}%)", result.label, result.confidence);
			outcome.set(Some(Outcome::Analysed(result)));
			return;
		}

		submitting.set(true);
		let client = client.clone();
		let department = ministry.get_untracked();
		spawn_local(async move {
			match client.submit(&text, &department).await {
				Ok(result) => {
					info!("Feedback recorded as {}", result.label);
					outcome.set(Some(Outcome::Analysed(result)));
				}
				Err(PulseError::MalformedReply(reason)) => {
					error!("Unreadable reply from feedback service: {reason}");
					outcome.set(Some(Outcome::Unreadable));
				}
				Err(e) => error!("Error submitting feedback: {e}"),
			}
			submitting.set(false);
		});
	};

	let ministry_options = MINISTRIES
		.iter()
		.map(|m| view! { <option value=*m>{*m}</option> })
		.collect_view();
	let clause_options = CLAUSES
		.iter()
		.map(|c| view! { <option value=*c>{*c}</option> })
		.collect_view();

	let result_view = move || {
		outcome.get().map(|o| match o {
			Outcome::Analysed(result) => view! { <ResultCard result=result /> }.into_any(),
			Outcome::Unreadable => view! {
				<div class="result-card result-error">
					<h3>"We couldn't read the analysis for your feedback."</h3>
					<p>"It was sent, but the reply made no sense. Try again in a moment."</p>
				</div>
			}
			.into_any(),
		})
	};

	view! {
		<div class="citizen-portal">
			<div class="hero">
				<h1 class="hero-title">"Your Voice \u{2192} Policy"</h1>
				<p class="hero-subtitle">"Drop your thoughts. Watch democracy digest them."</p>
				<div class="hero-pill">"Every comment shapes tomorrow's policies"</div>
			</div>

			<form class="feedback-form" on:submit=on_submit>
				<label class="field-label" for="feedback">
					"Your Voice Matters \u{2192} Drop It Here."
				</label>
				<textarea
					id="feedback"
					class="feedback-input"
					placeholder="Type your thoughts about the policy... Be bold, be honest, be heard."
					prop:value=move || feedback.get()
					on:input=move |ev| feedback.set(event_target_value(&ev))
				></textarea>
				<div class="char-count">
					{move || feedback.with(|f| f.chars().count())} " characters of democracy"
				</div>

				<div class="field-grid">
					<div>
						<label class="field-label" for="ministry">"Choose Ministry"</label>
						<select
							id="ministry"
							prop:value=move || ministry.get()
							on:change=move |ev| ministry.set(event_target_value(&ev))
						>
							<option value="">"Which ministry gets the feedback?"</option>
							{ministry_options}
						</select>
					</div>
					<div>
						<label class="field-label" for="clause">"Choose Clause (Optional)"</label>
						<select
							id="clause"
							prop:value=move || clause.get()
							on:change=move |ev| clause.set(event_target_value(&ev))
						>
							<option value="">"Specific section? (optional)"</option>
							{clause_options}
						</select>
					</div>
				</div>

				<div class="submit-row">
					<button
						type="submit"
						class="submit-button"
						class:loading=move || submitting.get()
						disabled=move || submitting.get() || feedback.with(|f| !is_submittable(f))
					>
						{move || {
							if submitting.get() {
								view! { <span class="spinner"></span> }.into_any()
							} else {
								view! { <span>"Feed Democracy"</span> }.into_any()
							}
						}}
					</button>
				</div>
			</form>

			{result_view}
		</div>
	}
}
