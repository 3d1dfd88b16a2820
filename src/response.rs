use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

/// A request whose successful reply is read as `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T> {
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	/// Serializes `json` as the body and sets `Content-Type: application/json`.
	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	async fn send_checked(self) -> Result<reqwest::Response, ApiError> {
		let response = self.builder.send().await?;
		let status = response.status();
		if !status.is_success() {
			let text = response.text().await.unwrap_or_default();
			return Err(ApiError::Status(status, text));
		}
		Ok(response)
	}

	/// Sends the request and discards whatever the server replied with.
	pub async fn send_ignoring_body(self) -> Result<(), ApiError> {
		self.send_checked().await?;
		Ok(())
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub async fn send(self) -> Result<T, ApiError> {
		let response = self.send_checked().await?;
		let text = response.text().await?;
		match serde_json::from_str(&text) {
			Ok(data) => Ok(data),
			Err(err) => Err(InvalidJson(text, err).into()),
		}
	}
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error("server replied {0}: {1:?}")]
	Status(reqwest::StatusCode, String),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
