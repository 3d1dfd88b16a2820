use crate::{
	api::Client,
	components::{EmployeeList, RecordEditor},
	controller::{browser_confirm, Controller},
	data::{Employee, EmployeeDraft},
	session::Directory,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_mount;

#[derive(Clone, PartialEq, Properties)]
pub struct DirectoryViewProps {
	pub client: Rc<Client>,
}

#[function_component]
pub fn DirectoryView(DirectoryViewProps { client }: &DirectoryViewProps) -> Html {
	let directory = use_reducer(Directory::default);
	let controller = Controller::new(client.clone(), directory.clone());

	use_mount({
		let controller = controller.clone();
		move || {
			wasm_bindgen_futures::spawn_local(async move {
				controller.load().await;
			});
		}
	});

	let begin_create = {
		let controller = controller.clone();
		Callback::from(move |_: MouseEvent| controller.begin_create())
	};
	let begin_edit = {
		let controller = controller.clone();
		Callback::from(move |employee: Employee| controller.begin_edit(employee))
	};
	let request_delete = {
		let controller = controller.clone();
		Callback::from(move |id: i64| {
			let controller = controller.clone();
			crate::util::spawn_local("directory", async move {
				controller.request_delete(id, &browser_confirm).await.map(|_| ())
			});
		})
	};
	let close_editor = {
		let controller = controller.clone();
		Callback::from(move |_: ()| controller.close_editor())
	};
	let commit = {
		let controller = controller.clone();
		Callback::from(move |draft: EmployeeDraft| {
			let controller = controller.clone();
			crate::util::spawn_local("directory", async move { controller.commit(draft).await });
		})
	};

	html! {
		<div class="card shadow-sm mx-auto mt-4" style="max-width: 36rem;">
			<div class="card-header d-flex justify-content-between align-items-center">
				<h2 class="h4 mb-0">{"Team Directory"}</h2>
				<button class="btn btn-success" onclick={begin_create}>
					<i class="bi bi-plus" />
					{"Add Employee"}
				</button>
			</div>
			<EmployeeList
				employees={directory.employees.clone()}
				on_edit={begin_edit}
				on_delete={request_delete}
			/>
			<RecordEditor
				visible={directory.editor_open}
				target={directory.editing.clone()}
				on_close={close_editor}
				on_save={commit}
			/>
		</div>
	}
}
