use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::charts::{SentimentPie, TrendChart};
use super::constellation::{KeywordConstellation, keyword_constellation};
use crate::api::AnalysisSocket;
use crate::config::Settings;
use crate::dashboard::data::{
	count_for, default_weekly_trend, flagged_comments, is_policy_crisis, ministry_leaderboard,
	negative_share, sentiment_distribution, total_submissions, without_comment,
};
use crate::dashboard::{REPORT_FILE_NAME, Report, Severity};
use crate::error::PulseError;
use crate::sentiment::SentimentLabel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Overview,
	Analytics,
	Moderation,
	Reports,
}

impl Tab {
	const ALL: [Tab; 4] = [Tab::Overview, Tab::Analytics, Tab::Moderation, Tab::Reports];

	fn title(self) -> &'static str {
		match self {
			Tab::Overview => "Overview",
			Tab::Analytics => "Analytics",
			Tab::Moderation => "Moderation",
			Tab::Reports => "Reports",
		}
	}
}

fn download_csv(file_name: &str, contents: &str) -> Result<(), PulseError> {
	let parts = js_sys::Array::of1(&JsValue::from_str(contents));
	let options = BlobPropertyBag::new();
	options.set_type("text/csv;charset=utf-8");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| PulseError::Browser("no document".into()))?;
	let anchor: HtmlAnchorElement = document
		.create_element("a")?
		.dyn_into()
		.map_err(|_| PulseError::Browser("created element is not an anchor".into()))?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	anchor.click();
	Url::revoke_object_url(&url)?;
	Ok(())
}

#[component]
fn StatCard(label: &'static str, value: u32, tone: &'static str) -> impl IntoView {
	view! {
		<div class=format!("stat-card {tone}")>
			<p class="stat-label">{label}</p>
			<p class="stat-value">{value}</p>
		</div>
	}
}

/// Admin control room: live mood, leaderboards, moderation and export.
#[component]
pub fn GovernmentDashboard() -> impl IntoView {
	let settings = use_context::<Settings>().unwrap_or_default();
	let slices = sentiment_distribution();
	let trend = RwSignal::new(default_weekly_trend());
	let topics = RwSignal::new(Vec::<String>::new());
	let flagged = RwSignal::new(flagged_comments());
	let alert_visible = RwSignal::new(true);
	let tab = RwSignal::new(Tab::Overview);

	if settings.offline {
		info!("Offline mode; analysis stream not opened");
	} else {
		let socket = settings.stream_url().and_then(|url| {
			AnalysisSocket::connect(&url, move |update| {
				topics.set(update.topics.clone());
				trend.set(update.trend());
			})
		});
		match socket {
			Ok(socket) => {
				let socket = StoredValue::new_local(socket);
				on_cleanup(move || socket.dispose());
			}
			Err(e) => warn!("Analysis stream unavailable: {e}"),
		}
	}

	let share = negative_share(&slices);
	let crisis = is_policy_crisis(&slices);
	let total = total_submissions(&slices);
	let positive = count_for(&slices, SentimentLabel::Positive);
	let negative = count_for(&slices, SentimentLabel::Negative);
	let neutral = count_for(&slices, SentimentLabel::Neutral);

	let crisis_banner = move || {
		(crisis && alert_visible.get()).then(|| {
			view! {
				<div class="crisis-alert">
					<div>
						<h3>"\u{1f6a8} Democracy Mood Crisis Detected"</h3>
						<p>{format!("{share:.0}% negative sentiment. Time for urgent chai summit.")}</p>
					</div>
					<button class="dismiss" on:click=move |_| alert_visible.set(false)>
						"\u{d7}"
					</button>
				</div>
			}
		})
	};

	let tab_buttons = Tab::ALL
		.into_iter()
		.map(|t| {
			view! {
				<button
					class="tab"
					class:active=move || tab.get() == t
					on:click=move |_| tab.set(t)
				>
					{t.title()}
				</button>
			}
		})
		.collect_view();

	let overview = {
		let slices = slices.clone();
		move || {
			view! {
				<div class="panel-grid">
					<section class="panel">
						<h2>"Sentiment Distribution"</h2>
						<SentimentPie slices=slices.clone() />
					</section>
					<section class="panel">
						<h2>"Weekly Mood Swings"</h2>
						<TrendChart points=trend />
					</section>
				</div>
			}
		}
	};

	let analytics = move || {
		let leaderboard = ministry_leaderboard()
			.into_iter()
			.map(|m| {
				let (badge, badge_class) = if m.is_leading() {
					("\u{1f3c6}", "badge badge-leading")
				} else {
					("\u{1f4c8}", "badge")
				};
				view! {
					<div class="leader-row">
						<div class="leader-head">
							<span class="leader-name">{m.name}</span>
							<span class="leader-count">{format!("{}/{}", m.positive, m.total)}</span>
							<span class="leader-pct">{format!("{}%", m.percentage)}</span>
						</div>
						<div class="progress">
							<div class="progress-bar" style:width=format!("{}%", m.percentage)></div>
						</div>
						<span class=badge_class>{badge}</span>
					</div>
				}
			})
			.collect_view();

		view! {
			<div class="panel-grid">
				<section class="panel wide">
					<h2>"Keyword Constellations"</h2>
					<ul class="topics">
						<For
							each=move || topics.get().into_iter().enumerate()
							key=|(i, topic)| (*i, topic.clone())
							children=|(_, topic)| view! { <li>{topic}</li> }
						/>
					</ul>
					<KeywordConstellation keywords=Signal::derive(keyword_constellation) />
				</section>
				<section class="panel">
					<h2>"Ministry Leaderboard"</h2>
					{leaderboard}
				</section>
			</div>
		}
	};

	let moderation = move || {
		view! {
			<section class="panel">
				<h2>
					"Flagged Comments "
					<span class="badge">{move || format!("{} flagged", flagged.with(Vec::len))}</span>
				</h2>
				<For
					each=move || flagged.get()
					key=|c| c.id
					children=move |comment| {
						let id = comment.id;
						let severity_class = match comment.severity {
							Severity::High => "badge badge-negative",
							Severity::Medium => "badge badge-neutral",
						};
						view! {
							<div class="flagged-comment">
								<p>{format!("\u{201c}{}\u{201d}", comment.text)}</p>
								<div class="flagged-meta">
									<span class="ministry">{comment.ministry}</span>
									<span class=severity_class>
										{format!("{} risk", comment.severity.as_str())}
									</span>
									<button
										class="delete"
										on:click=move |_| {
											info!("Removing flagged comment {id}");
											flagged.update(|list| *list = without_comment(list, id));
										}
									>
										"Delete"
									</button>
								</div>
							</div>
						}
					}
				/>
			</section>
		}
	};

	let export_slices = slices.clone();
	let on_export = move |_: MouseEvent| {
		let trend = trend.get_untracked();
		let comments = flagged.get_untracked();
		let ministries = ministry_leaderboard();
		let csv = Report {
			sentiment: &export_slices,
			trend: &trend,
			ministries: &ministries,
			flagged: &comments,
		}
		.to_csv();
		match download_csv(REPORT_FILE_NAME, &csv) {
			Ok(()) => info!("Exported {REPORT_FILE_NAME} ({} bytes)", csv.len()),
			Err(e) => warn!("Report export failed: {e}"),
		}
	};

	let reports = move || {
		view! {
			<section class="panel reports">
				<button class="export-button" on:click=on_export.clone()>
					"Generate Policy CSV \u{2192} Democracy in Excel form"
				</button>
				<p>
					"Export comprehensive analytics report with sentiment trends, ministry performance, and citizen feedback data."
				</p>
			</section>
		}
	};

	let body = move || match tab.get() {
		Tab::Overview => overview().into_any(),
		Tab::Analytics => analytics().into_any(),
		Tab::Moderation => moderation().into_any(),
		Tab::Reports => reports().into_any(),
	};

	view! {
		<div class="dashboard">
			<header class="dashboard-header">
				<h1>"Control Room \u{2192} Democracy Live"</h1>
			</header>
			{crisis_banner}
			<div class="stats">
				<StatCard label="Total Submissions" value=total tone="stat-total" />
				<StatCard label="Positive" value=positive tone="stat-positive" />
				<StatCard label="Negative" value=negative tone="stat-negative" />
				<StatCard label="Neutral" value=neutral tone="stat-neutral" />
			</div>
			<nav class="tabs">{tab_buttons}</nav>
			{body}
		</div>
	}
}
