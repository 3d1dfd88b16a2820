use crate::{api::Client, components::DirectoryView};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct HomeProps {
	pub client: Rc<Client>,
}

#[function_component]
pub fn Home(HomeProps { client }: &HomeProps) -> Html {
	html! {
		<main class="min-vh-100 p-4 bg-light">
			<h1 class="display-6 fw-bold text-center text-primary mb-4">{"Employee Management System"}</h1>
			<DirectoryView client={client.clone()} />
		</main>
	}
}
