use crate::{
	data::{Employee, EmployeeDraft},
	editor::{EditorAction, EditorForm},
	util::InputExt,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct RecordEditorProps {
	pub visible: bool,
	/// The record to edit. `None` opens the editor in create mode.
	#[prop_or_default]
	pub target: Option<Employee>,
	pub on_close: Callback<()>,
	pub on_save: Callback<EmployeeDraft>,
}

/// Modal form for one employee. It never talks to the API and never closes itself.
#[function_component]
pub fn RecordEditor(props: &RecordEditorProps) -> Html {
	let RecordEditorProps {
		visible,
		target,
		on_close,
		on_save,
	} = props;
	let form = use_reducer(EditorForm::default);
	// Opening, or pointing at another record, re-populates the fields.
	let fields = match form.needs_resync(*visible, target.as_ref()) {
		true => {
			form.dispatch(EditorAction::Reinitialize {
				visible: *visible,
				target: target.clone(),
			});
			EditorForm::initialized(*visible, target.as_ref())
		}
		false => (*form).clone(),
	};
	if !*visible {
		return html!();
	}

	let set_name = {
		let form = form.clone();
		Callback::from(move |evt: InputEvent| {
			if let Some(value) = evt.input_value() {
				form.dispatch(EditorAction::SetName(value));
			}
		})
	};
	let set_role = {
		let form = form.clone();
		Callback::from(move |evt: InputEvent| {
			if let Some(value) = evt.input_value() {
				form.dispatch(EditorAction::SetRole(value));
			}
		})
	};
	let cancel = on_close.reform(|_: MouseEvent| ());
	let save = on_save.reform({
		let draft = fields.draft();
		move |_: MouseEvent| draft.clone()
	});

	let name_locked = fields.name_locked();
	html! {
		<div class="modal d-block" tabindex="-1" id="directory::RecordEditor">
			<div class="modal-dialog modal-dialog-centered">
				<div class="modal-content">
					<div class="modal-header">
						<h5 class="modal-title">{fields.title()}</h5>
					</div>
					<div class="modal-body">
						<div class="mb-3">
							<label for="employee-name" class="form-label">{"Name"}</label>
							<input
								type="text" id="employee-name"
								class={classes!("form-control", name_locked.then_some("bg-light"))}
								value={fields.name.clone()}
								readonly={name_locked}
								oninput={set_name}
							/>
						</div>
						<div class="mb-3">
							<label for="employee-role" class="form-label">{"Role"}</label>
							<input
								type="text" id="employee-role" class="form-control"
								value={fields.role.clone()}
								oninput={set_role}
							/>
						</div>
					</div>
					<div class="modal-footer">
						<button class="btn btn-light" onclick={cancel}>{"Cancel"}</button>
						<button class="btn btn-primary" onclick={save}>{"Save"}</button>
					</div>
				</div>
			</div>
		</div>
	}
}
