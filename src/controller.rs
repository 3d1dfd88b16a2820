use crate::{
	api::EmployeeApi,
	data::{Employee, EmployeeDraft},
	session::{Directory, DirectoryAction},
};
use anyhow::Context;
use yew::UseReducerHandle;

pub static DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
	fn confirm(&self, message: &str) -> bool;
}
impl<F> Confirm for F
where
	F: Fn(&str) -> bool,
{
	fn confirm(&self, message: &str) -> bool {
		self(message)
	}
}

/// Blocking `window.confirm` prompt. A prompt that cannot be shown counts as declined.
pub fn browser_confirm(message: &str) -> bool {
	match gloo_utils::window().confirm_with_message(message) {
		Ok(confirmed) => confirmed,
		Err(err) => {
			log::error!(target: "directory", "Failed to show confirmation: {err:?}");
			false
		}
	}
}

/// Write access to the directory session state.
pub trait DirectoryHandle {
	fn dispatch(&self, action: DirectoryAction);
	/// The record the editor is currently bound to.
	fn editing(&self) -> Option<Employee>;
}
impl DirectoryHandle for UseReducerHandle<Directory> {
	fn dispatch(&self, action: DirectoryAction) {
		UseReducerHandle::dispatch(self, action);
	}

	fn editing(&self) -> Option<Employee> {
		(**self).editing.clone()
	}
}

/// The directory's sync flow: every write is followed by a full reload, nothing is patched locally.
///
/// Requests are not de-duplicated or ordered; when loads race, the last one to resolve wins.
#[derive(Clone)]
pub struct Controller<A, H> {
	api: A,
	directory: H,
}

impl<A, H> Controller<A, H>
where
	A: EmployeeApi,
	H: DirectoryHandle,
{
	pub fn new(api: A, directory: H) -> Self {
		Self { api, directory }
	}

	/// Replaces the list with the server's. On failure the previous list stays visible.
	pub async fn load(&self) {
		match self.api.list().await {
			Ok(employees) => {
				log::debug!(target: "directory", "loaded {} employees", employees.len());
				self.directory.dispatch(DirectoryAction::Loaded(employees));
			}
			Err(err) => log::error!(target: "directory", "Error fetching employees: {err}"),
		}
	}

	/// Deletes `id` once the user confirms, then reloads whether or not the delete succeeded.
	/// Resolves to false when the user declined and nothing was sent.
	pub async fn request_delete(&self, id: i64, confirm: &impl Confirm) -> anyhow::Result<bool> {
		if !confirm.confirm(DELETE_PROMPT) {
			return Ok(false);
		}
		let result = self.api.delete(id).await;
		self.load().await;
		result.with_context(|| format!("Failed to delete employee {id}"))?;
		Ok(true)
	}

	pub fn begin_create(&self) {
		self.directory.dispatch(DirectoryAction::BeginCreate);
	}

	pub fn begin_edit(&self, employee: Employee) {
		self.directory.dispatch(DirectoryAction::BeginEdit(employee));
	}

	/// Hides the editor without saving.
	pub fn close_editor(&self) {
		self.directory.dispatch(DirectoryAction::CloseEditor);
	}

	/// Updates the record being edited, or creates one when there is none.
	/// Once the write settles the editor closes and the list reloads, even if the write failed.
	pub async fn commit(&self, draft: EmployeeDraft) -> anyhow::Result<()> {
		let result = match self.directory.editing() {
			Some(target) => {
				let id = target.id;
				let result = self.api.update(target.merged(draft)).await;
				result.with_context(|| format!("Failed to update employee {id}"))
			}
			None => {
				let result = self.api.create(draft).await;
				result.context("Failed to create employee")
			}
		};
		self.directory.dispatch(DirectoryAction::CloseEditor);
		self.load().await;
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{data::EmployeeUpdate, response::ApiError};
	use futures::executor::block_on;
	use futures_util::future::LocalBoxFuture;
	use std::{cell::RefCell, rc::Rc};

	#[derive(Debug, Clone, PartialEq)]
	enum Call {
		List,
		Create(EmployeeDraft),
		Update(EmployeeUpdate),
		Delete(i64),
	}

	#[derive(Default)]
	struct FakeApi {
		rows: RefCell<Vec<Employee>>,
		calls: RefCell<Vec<Call>>,
		next_id: RefCell<i64>,
		fail_reads: RefCell<bool>,
		fail_writes: RefCell<bool>,
	}

	impl FakeApi {
		fn with(rows: Vec<Employee>) -> Rc<Self> {
			let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0);
			Rc::new(Self {
				rows: RefCell::new(rows),
				next_id: RefCell::new(next_id),
				..Default::default()
			})
		}

		fn calls(&self) -> Vec<Call> {
			self.calls.borrow().clone()
		}

		fn refused() -> ApiError {
			ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "down".into())
		}

		fn write(&self, call: Call) -> Result<(), ApiError> {
			self.calls.borrow_mut().push(call.clone());
			if *self.fail_writes.borrow() {
				return Err(Self::refused());
			}
			let mut rows = self.rows.borrow_mut();
			match call {
				Call::Create(draft) => {
					let mut next_id = self.next_id.borrow_mut();
					*next_id += 1;
					rows.push(draft.with_id(*next_id).into());
				}
				Call::Update(update) => {
					if let Some(row) = rows.iter_mut().find(|row| row.id == update.id) {
						*row = update.into();
					}
				}
				Call::Delete(id) => rows.retain(|row| row.id != id),
				Call::List => {}
			}
			Ok(())
		}
	}

	impl EmployeeApi for FakeApi {
		fn list(&self) -> LocalBoxFuture<'_, Result<Vec<Employee>, ApiError>> {
			self.calls.borrow_mut().push(Call::List);
			let result = match *self.fail_reads.borrow() {
				true => Err(Self::refused()),
				false => Ok(self.rows.borrow().clone()),
			};
			Box::pin(async move { result })
		}

		fn create(&self, draft: EmployeeDraft) -> LocalBoxFuture<'_, Result<(), ApiError>> {
			let result = self.write(Call::Create(draft));
			Box::pin(async move { result })
		}

		fn update(&self, update: EmployeeUpdate) -> LocalBoxFuture<'_, Result<(), ApiError>> {
			let result = self.write(Call::Update(update));
			Box::pin(async move { result })
		}

		fn delete(&self, id: i64) -> LocalBoxFuture<'_, Result<(), ApiError>> {
			let result = self.write(Call::Delete(id));
			Box::pin(async move { result })
		}
	}

	#[derive(Clone, Default)]
	struct TestDirectory(Rc<RefCell<Directory>>);
	impl DirectoryHandle for TestDirectory {
		fn dispatch(&self, action: DirectoryAction) {
			self.0.borrow_mut().apply(action);
		}

		fn editing(&self) -> Option<Employee> {
			self.0.borrow().editing.clone()
		}
	}
	impl TestDirectory {
		fn snapshot(&self) -> Directory {
			self.0.borrow().clone()
		}
	}

	fn employee(id: i64, name: &str, role: &str) -> Employee {
		Employee {
			id,
			name: name.into(),
			role: role.into(),
		}
	}

	fn setup(rows: Vec<Employee>) -> (Rc<FakeApi>, TestDirectory, Controller<Rc<FakeApi>, TestDirectory>) {
		let api = FakeApi::with(rows);
		let directory = TestDirectory::default();
		let controller = Controller::new(api.clone(), directory.clone());
		(api, directory, controller)
	}

	#[test]
	fn load_replaces_the_list() {
		let (_api, directory, controller) = setup(vec![employee(1, "Ana", "Eng"), employee(2, "Bo", "Ops")]);
		block_on(controller.load());
		assert_eq!(directory.snapshot().employees.len(), 2);
	}

	#[test]
	fn failed_load_keeps_the_last_good_list() {
		let (api, directory, controller) = setup(vec![employee(1, "Ana", "Eng")]);
		block_on(controller.load());
		*api.fail_reads.borrow_mut() = true;
		api.rows.borrow_mut().clear();
		block_on(controller.load());
		assert_eq!(directory.snapshot().employees, vec![employee(1, "Ana", "Eng")]);
	}

	#[test]
	fn create_shows_the_reloaded_record() {
		let (api, directory, controller) = setup(vec![]);
		block_on(controller.load());
		assert!(directory.snapshot().is_empty());

		controller.begin_create();
		assert!(directory.snapshot().editor_open);
		block_on(controller.commit(EmployeeDraft {
			name: "Cy".into(),
			role: "QA".into(),
		}))
		.unwrap();

		let state = directory.snapshot();
		assert!(!state.editor_open);
		assert_eq!(state.employees, vec![employee(1, "Cy", "QA")]);
		assert_eq!(
			api.calls(),
			vec![
				Call::List,
				Call::Create(EmployeeDraft {
					name: "Cy".into(),
					role: "QA".into()
				}),
				Call::List,
			]
		);
	}

	#[test]
	fn edit_sends_merged_update_then_reloads() {
		let ana = employee(1, "Ana", "Eng");
		let (api, directory, controller) = setup(vec![ana.clone()]);
		block_on(controller.load());
		controller.begin_edit(ana.clone());

		let mut draft = ana.draft();
		draft.role = "Lead".into();
		block_on(controller.commit(draft)).unwrap();

		assert_eq!(
			api.calls()[1..],
			[
				Call::Update(EmployeeUpdate {
					id: 1,
					name: "Ana".into(),
					role: "Lead".into()
				}),
				Call::List,
			]
		);
		let state = directory.snapshot();
		assert_eq!(state.employees, vec![employee(1, "Ana", "Lead")]);
		assert!(!state.editor_open);
	}

	#[test]
	fn confirmed_delete_removes_the_row() {
		let (api, directory, controller) = setup(vec![employee(1, "Ana", "Eng"), employee(2, "Bo", "Ops")]);
		block_on(controller.load());
		let prompts = RefCell::new(Vec::new());
		let confirm = |message: &str| {
			prompts.borrow_mut().push(message.to_owned());
			true
		};
		assert!(block_on(controller.request_delete(1, &confirm)).unwrap());
		assert_eq!(prompts.into_inner(), vec![DELETE_PROMPT.to_owned()]);
		assert!(api.calls().contains(&Call::Delete(1)));
		let ids = directory.snapshot().rows().map(|row| row.key()).collect::<Vec<_>>();
		assert_eq!(ids, vec![2]);
	}

	#[test]
	fn declined_delete_sends_nothing() {
		let (api, directory, controller) = setup(vec![employee(1, "Ana", "Eng")]);
		block_on(controller.load());
		assert!(!block_on(controller.request_delete(1, &|_: &str| false)).unwrap());
		assert_eq!(api.calls(), vec![Call::List]);
		assert_eq!(directory.snapshot().employees.len(), 1);
	}

	#[test]
	fn failed_write_still_reloads_and_closes() {
		let (api, directory, controller) = setup(vec![employee(1, "Ana", "Eng")]);
		block_on(controller.load());
		*api.fail_writes.borrow_mut() = true;
		controller.begin_create();
		let result = block_on(controller.commit(EmployeeDraft {
			name: "Cy".into(),
			role: "QA".into(),
		}));
		assert!(result.is_err());
		assert_eq!(api.calls().last(), Some(&Call::List));
		let state = directory.snapshot();
		assert!(!state.editor_open);
		assert_eq!(state.employees, vec![employee(1, "Ana", "Eng")]);

		assert!(block_on(controller.request_delete(1, &|_: &str| true)).is_err());
		assert_eq!(api.calls().last(), Some(&Call::List));
		assert_eq!(directory.snapshot().employees.len(), 1);
	}

	#[test]
	fn cancel_closes_without_requests() {
		let ana = employee(1, "Ana", "Eng");
		let (api, directory, controller) = setup(vec![ana.clone()]);
		controller.begin_edit(ana);
		controller.close_editor();
		assert!(!directory.snapshot().editor_open);
		assert!(api.calls().is_empty());
	}

	#[test]
	fn create_after_edit_does_not_target_the_old_record() {
		let ana = employee(1, "Ana", "Eng");
		let (api, _directory, controller) = setup(vec![ana.clone()]);
		controller.begin_edit(ana);
		controller.begin_create();
		block_on(controller.commit(EmployeeDraft::default())).unwrap();
		assert!(matches!(api.calls()[0], Call::Create(_)));
	}
}
