use crate::data::{Employee, EmployeeDraft};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
	Create,
	Edit,
}

impl EditorMode {
	pub fn title(self) -> &'static str {
		match self {
			Self::Create => "Add New Employee",
			Self::Edit => "Edit Employee",
		}
	}
}

/// What the form was last initialized from.
#[derive(Clone, Debug, Default, PartialEq)]
struct SyncKey {
	visible: bool,
	target: Option<Employee>,
}

/// Field values of the record editor.
///
/// The fields are only re-populated through [`EditorForm::reinitialize`], which the editor calls
/// whenever it becomes visible or is pointed at a different record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorForm {
	pub name: String,
	pub role: String,
	key: SyncKey,
}

impl EditorForm {
	pub fn initialized(visible: bool, target: Option<&Employee>) -> Self {
		let mut form = Self::default();
		form.reinitialize(visible, target);
		form
	}

	pub fn needs_resync(&self, visible: bool, target: Option<&Employee>) -> bool {
		self.key.visible != visible || self.key.target.as_ref() != target
	}

	pub fn reinitialize(&mut self, visible: bool, target: Option<&Employee>) {
		match target {
			Some(employee) => {
				self.name = employee.name.clone();
				self.role = employee.role.clone();
			}
			None => {
				self.name.clear();
				self.role.clear();
			}
		}
		self.key = SyncKey {
			visible,
			target: target.cloned(),
		};
	}

	pub fn mode(&self) -> EditorMode {
		match self.key.target {
			Some(_) => EditorMode::Edit,
			None => EditorMode::Create,
		}
	}

	pub fn title(&self) -> &'static str {
		self.mode().title()
	}

	/// Names are fixed once a record exists.
	pub fn name_locked(&self) -> bool {
		self.mode() == EditorMode::Edit
	}

	pub fn set_name(&mut self, name: String) {
		if !self.name_locked() {
			self.name = name;
		}
	}

	pub fn set_role(&mut self, role: String) {
		self.role = role;
	}

	/// The save payload. Empty strings pass through untouched.
	pub fn draft(&self) -> EmployeeDraft {
		EmployeeDraft {
			name: self.name.clone(),
			role: self.role.clone(),
		}
	}
}

pub enum EditorAction {
	Reinitialize { visible: bool, target: Option<Employee> },
	SetName(String),
	SetRole(String),
}

impl Reducible for EditorForm {
	type Action = EditorAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut form = (*self).clone();
		match action {
			EditorAction::Reinitialize { visible, target } => form.reinitialize(visible, target.as_ref()),
			EditorAction::SetName(name) => form.set_name(name),
			EditorAction::SetRole(role) => form.set_role(role),
		}
		match form != *self {
			true => Rc::new(form),
			false => self,
		}
	}
}
