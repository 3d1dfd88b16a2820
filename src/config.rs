use url::Url;

/// Build-time variable naming where the employees API is hosted.
static API_URL: Option<&str> = option_env!("EMPLOYEE_API_URL");

static EMPLOYEES_PATH: &str = "api/employees";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("EMPLOYEE_API_URL is not set and the document has no base uri")]
	MissingBase,
	#[error("invalid api base url {0:?}: {1}")]
	InvalidBase(String, url::ParseError),
	#[error("api base url {0:?} cannot be used as a base")]
	CannotBeABase(String),
}

/// Where the employees API lives. One base is used for every request.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
	api_base: Url,
	employees: Url,
}

impl Config {
	/// Reads the base from `EMPLOYEE_API_URL` at build time,
	/// falling back to the page's origin when the API is co-hosted.
	pub fn from_env() -> Result<Self, ConfigError> {
		if let Some(base) = API_URL.filter(|base| !base.trim().is_empty()) {
			return Self::with_base(base);
		}
		match document_base_uri() {
			Some(page) => Self::co_hosted(&page),
			None => Err(ConfigError::MissingBase),
		}
	}

	/// Serves the API from the root of the origin `page_url` was loaded from.
	/// The page's own path never prefixes the API.
	pub fn co_hosted(page_url: &str) -> Result<Self, ConfigError> {
		let page = Url::parse(page_url).map_err(|err| ConfigError::InvalidBase(page_url.to_owned(), err))?;
		if page.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase(page_url.to_owned()));
		}
		let root = page.join("/").map_err(|err| ConfigError::InvalidBase(page_url.to_owned(), err))?;
		Self::with_base(root.as_str())
	}

	pub fn with_base(base: &str) -> Result<Self, ConfigError> {
		let mut normalized = base.trim().to_owned();
		// Joining drops the last path segment unless it ends in a slash.
		if !normalized.ends_with('/') {
			normalized.push('/');
		}
		let api_base = Url::parse(&normalized).map_err(|err| ConfigError::InvalidBase(base.to_owned(), err))?;
		if api_base.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase(base.to_owned()));
		}
		let mut employees = api_base.clone();
		employees.set_query(None);
		employees.set_fragment(None);
		let employees = employees
			.join(EMPLOYEES_PATH)
			.map_err(|err| ConfigError::InvalidBase(base.to_owned(), err))?;
		Ok(Self { api_base, employees })
	}

	pub fn api_base(&self) -> &Url {
		&self.api_base
	}

	/// `{base}/api/employees`
	pub fn employees(&self) -> Url {
		self.employees.clone()
	}

	/// `{base}/api/employees/{id}`
	pub fn employee(&self, id: i64) -> Url {
		let mut url = self.employees();
		// Always Ok: `with_base` rejects bases that cannot hold path segments.
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.push(&id.to_string());
		}
		url
	}
}

#[cfg(target_family = "wasm")]
fn document_base_uri() -> Option<String> {
	gloo_utils::document().base_uri().ok().flatten()
}

#[cfg(not(target_family = "wasm"))]
fn document_base_uri() -> Option<String> {
	None
}
