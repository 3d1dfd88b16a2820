use crate::data::Employee;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct EmployeeRowProps {
	pub employee: Employee,
	pub on_edit: Callback<Employee>,
	pub on_delete: Callback<i64>,
}

#[function_component]
pub fn EmployeeRow(EmployeeRowProps { employee, on_edit, on_delete }: &EmployeeRowProps) -> Html {
	let edit = on_edit.reform({
		let employee = employee.clone();
		move |_: MouseEvent| employee.clone()
	});
	let delete = on_delete.reform({
		let id = employee.id;
		move |_: MouseEvent| id
	});
	html! {
		<li class="list-group-item d-flex justify-content-between align-items-center">
			<div>
				<h5 class="mb-1">{&employee.name}</h5>
				<span class="badge text-bg-primary">{&employee.role}</span>
			</div>
			<div class="d-flex gap-2">
				<button class="btn btn-outline-primary btn-sm" onclick={edit}>{"Edit"}</button>
				<button class="btn btn-outline-danger btn-sm" onclick={delete}>{"Delete"}</button>
			</div>
		</li>
	}
}
