use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use super::stream::{AnalysisUpdate, StreamAction, handle_frame};
use crate::error::PulseError;

/// Live subscription to `analysis_update` events.
///
/// Dropping the value closes the socket. There is no reconnection.
pub struct AnalysisSocket {
	ws: WebSocket,
	_on_open: Closure<dyn FnMut(Event)>,
	_on_message: Closure<dyn FnMut(MessageEvent)>,
	_on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl AnalysisSocket {
	/// Opens the socket; `on_update` runs for every `analysis_update` event.
	pub fn connect(
		url: &str,
		on_update: impl Fn(AnalysisUpdate) + 'static,
	) -> Result<Self, PulseError> {
		let ws = WebSocket::new(url)?;

		let on_open = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
			info!("Connected to WebSocket server");
		});
		ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

		let ws_reply = ws.clone();
		let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
			let Some(frame) = ev.data().as_string() else {
				return;
			};
			match handle_frame(&frame) {
				Ok(StreamAction::Reply(reply)) => {
					if let Err(e) = ws_reply.send_with_str(&reply) {
						warn!("Failed to answer stream frame: {:?}", e);
					}
				}
				Ok(StreamAction::Connected) => info!("Joined analysis namespace"),
				Ok(StreamAction::Disconnected) => info!("Analysis stream closed by server"),
				Ok(StreamAction::Rejected(reason)) => warn!("Analysis stream refused: {reason}"),
				Ok(StreamAction::Update(update)) => {
					info!(
						"New analysis received: {} topics, {} trend points",
						update.topics.len(),
						update.weekly_trend_data.len()
					);
					on_update(update);
				}
				Ok(StreamAction::Ignore) => {}
				Err(e) => warn!("{e}"),
			}
		});
		ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

		let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
			info!("Disconnected from WebSocket server (code {})", ev.code());
		});
		ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

		Ok(Self {
			ws,
			_on_open: on_open,
			_on_message: on_message,
			_on_close: on_close,
		})
	}
}

impl Drop for AnalysisSocket {
	fn drop(&mut self) {
		self.ws.set_onopen(None);
		self.ws.set_onmessage(None);
		self.ws.set_onclose(None);
		let _ = self.ws.close();
	}
}
