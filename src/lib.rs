use std::rc::Rc;
use yew::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod data;
pub mod editor;
pub mod logging;
pub mod page;
pub mod response;
pub mod session;
pub mod util;

#[function_component]
pub fn App() -> Html {
	let client = use_memo((), |_| match config::Config::from_env() {
		Ok(config) => {
			log::info!(target: env!("CARGO_PKG_NAME"), "employees api at {}", config.api_base());
			Some(Rc::new(api::Client::new(config)))
		}
		Err(err) => {
			log::error!(target: env!("CARGO_PKG_NAME"), "{err}");
			None
		}
	});
	match &*client {
		Some(client) => html!(<page::Home client={client.clone()} />),
		None => html! {
			<div class="alert alert-danger m-4">{"The employees API is not configured."}</div>
		},
	}
}
