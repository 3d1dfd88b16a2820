use crate::data::Employee;
use std::rc::Rc;
use yew::prelude::*;

/// Everything the directory view owns for the lifetime of the page.
///
/// The list is a replica of the server as of the last successful load.
/// It is only ever replaced wholesale, never patched locally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
	pub employees: Vec<Employee>,
	/// The record the editor is bound to; `None` means the editor creates.
	pub editing: Option<Employee>,
	pub editor_open: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryAction {
	Loaded(Vec<Employee>),
	BeginCreate,
	BeginEdit(Employee),
	CloseEditor,
}

impl Directory {
	pub fn apply(&mut self, action: DirectoryAction) {
		match action {
			DirectoryAction::Loaded(employees) => {
				self.employees = employees;
			}
			DirectoryAction::BeginCreate => {
				self.editing = None;
				self.editor_open = true;
			}
			DirectoryAction::BeginEdit(employee) => {
				self.editing = Some(employee);
				self.editor_open = true;
			}
			DirectoryAction::CloseEditor => {
				self.editor_open = false;
			}
		}
	}

	pub fn is_empty(&self) -> bool {
		self.employees.is_empty()
	}

	pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
		self.employees.iter().map(Row)
	}
}

impl Reducible for Directory {
	type Action = DirectoryAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		log::debug!(target: "directory", "{action:?}");
		let mut directory = (*self).clone();
		directory.apply(action);
		match directory != *self {
			true => Rc::new(directory),
			false => self,
		}
	}
}

/// One rendered line of the directory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<'a>(pub &'a Employee);

impl<'a> Row<'a> {
	pub fn key(&self) -> i64 {
		self.0.id
	}

	pub fn label(&self) -> String {
		format!("{} \u{2014} {}", self.0.name, self.0.role)
	}
}
