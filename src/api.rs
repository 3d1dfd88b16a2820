use crate::{
	config::Config,
	data::{Employee, EmployeeDraft, EmployeeUpdate},
	response::{ApiError, Response},
};
use futures_util::future::LocalBoxFuture;
use reqwest::Method;
use url::Url;

/// The remote source of truth for employee records.
///
/// Futures are not `Send`: the directory runs on the browser's single thread.
pub trait EmployeeApi {
	/// `GET /api/employees`
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<Employee>, ApiError>>;
	/// `POST /api/employees` with `{name, role}`. The reply is ignored.
	fn create(&self, draft: EmployeeDraft) -> LocalBoxFuture<'_, Result<(), ApiError>>;
	/// `PUT /api/employees/{id}` with `{id, name, role}`. The reply is ignored.
	fn update(&self, update: EmployeeUpdate) -> LocalBoxFuture<'_, Result<(), ApiError>>;
	/// `DELETE /api/employees/{id}`. The reply is ignored.
	fn delete(&self, id: i64) -> LocalBoxFuture<'_, Result<(), ApiError>>;
}

/// reqwest-backed client for the employees API.
#[derive(Clone, Debug)]
pub struct Client {
	http: reqwest::Client,
	config: Config,
}

impl Client {
	pub fn new(config: Config) -> Self {
		Self {
			http: reqwest::Client::new(),
			config,
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	fn request<T>(&self, method: Method, url: Url) -> Response<T> {
		log::debug!(target: "api", "{method} {url}");
		let builder = self.http.request(method, url).header("Accept", "application/json");
		Response::<T>::from(builder)
	}
}

impl PartialEq for Client {
	fn eq(&self, other: &Self) -> bool {
		self.config == other.config
	}
}

impl EmployeeApi for Client {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<Employee>, ApiError>> {
		let request = self.request::<Vec<Employee>>(Method::GET, self.config.employees());
		Box::pin(request.send())
	}

	fn create(&self, draft: EmployeeDraft) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		let request = self.request::<()>(Method::POST, self.config.employees()).with_json(&draft);
		Box::pin(request.send_ignoring_body())
	}

	fn update(&self, update: EmployeeUpdate) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		let url = self.config.employee(update.id);
		let request = self.request::<()>(Method::PUT, url).with_json(&update);
		Box::pin(request.send_ignoring_body())
	}

	fn delete(&self, id: i64) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		let request = self.request::<()>(Method::DELETE, self.config.employee(id));
		Box::pin(request.send_ignoring_body())
	}
}

impl<A: EmployeeApi + ?Sized> EmployeeApi for std::rc::Rc<A> {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<Employee>, ApiError>> {
		(**self).list()
	}

	fn create(&self, draft: EmployeeDraft) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		(**self).create(draft)
	}

	fn update(&self, update: EmployeeUpdate) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		(**self).update(update)
	}

	fn delete(&self, id: i64) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		(**self).delete(id)
	}
}
