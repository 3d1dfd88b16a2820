use serde::{Deserialize, Serialize};

/// A person listed in the team directory, as the employees API returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
	/// Server-assigned identifier, the target of updates and deletes.
	pub id: i64,
	/// The display name. Locked in the editor once the record exists.
	pub name: String,
	/// Free-form job title.
	pub role: String,
}

/// The plain `{name, role}` payload the record editor hands back on save.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
	pub name: String,
	pub role: String,
}

/// Body of an update request: the draft merged onto an existing record's id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
	pub id: i64,
	pub name: String,
	pub role: String,
}

impl EmployeeDraft {
	pub fn with_id(self, id: i64) -> EmployeeUpdate {
		EmployeeUpdate {
			id,
			name: self.name,
			role: self.role,
		}
	}
}

impl Employee {
	/// Merges the draft onto this record, keeping the id. Every field of the draft is sent.
	pub fn merged(&self, draft: EmployeeDraft) -> EmployeeUpdate {
		draft.with_id(self.id)
	}

	pub fn draft(&self) -> EmployeeDraft {
		EmployeeDraft {
			name: self.name.clone(),
			role: self.role.clone(),
		}
	}
}

impl From<EmployeeUpdate> for Employee {
	fn from(update: EmployeeUpdate) -> Self {
		Self {
			id: update.id,
			name: update.name,
			role: update.role,
		}
	}
}
