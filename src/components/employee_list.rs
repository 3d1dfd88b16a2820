use crate::{components::EmployeeRow, data::Employee};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct EmployeeListProps {
	pub employees: Vec<Employee>,
	pub on_edit: Callback<Employee>,
	pub on_delete: Callback<i64>,
}

#[function_component]
pub fn EmployeeList(EmployeeListProps { employees, on_edit, on_delete }: &EmployeeListProps) -> Html {
	if employees.is_empty() {
		return html! {
			<p class="text-muted fst-italic text-center py-4 mb-0">{"No employees found."}</p>
		};
	}
	html! {
		<ul class="list-group list-group-flush">
			{employees.iter().map(|employee| html! {
				<EmployeeRow
					key={employee.id}
					employee={employee.clone()}
					on_edit={on_edit.clone()}
					on_delete={on_delete.clone()}
				/>
			}).collect::<Vec<_>>()}
		</ul>
	}
}
