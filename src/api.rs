//! Client for the analysis backend's graph endpoint.

use log::debug;
use thiserror::Error;
use url::Url;

use crate::components::force_graph::{GraphData, parse_graph};

/// Why a graph could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The base URL does not parse.
	#[error("invalid graph endpoint url: {0}")]
	Url(#[from] url::ParseError),
	/// The base URL has no path to append to (e.g. `mailto:`).
	#[error("graph endpoint base url cannot take a path: {0}")]
	BaseUrl(String),
	/// Transport failure or non-success status.
	#[error("graph request failed: {0}")]
	Http(#[from] reqwest::Error),
	/// The body is not a graph payload.
	#[error("malformed graph payload: {0}")]
	Payload(#[from] serde_json::Error),
}

/// Fetches `GET {base}/graph/{subject}`.
#[derive(Clone, Debug)]
pub struct GraphClient {
	base_url: String,
	http: reqwest::Client,
}

impl GraphClient {
	/// Client for the backend at `base_url`.
	pub fn new(base_url: &str) -> Self {
		Self {
			base_url: base_url.to_string(),
			http: reqwest::Client::new(),
		}
	}

	/// Endpoint URL for `subject`, which is percent-escaped as one path segment.
	pub fn graph_url(&self, subject: &str) -> Result<Url, LoadError> {
		let mut url = Url::parse(&self.base_url)?;
		url.path_segments_mut()
			.map_err(|_| LoadError::BaseUrl(self.base_url.clone()))?
			.pop_if_empty()
			.push("graph")
			.push(subject);
		Ok(url)
	}

	/// Fetches and validates the graph for `subject`.
	pub async fn fetch_graph(&self, subject: &str) -> Result<GraphData, LoadError> {
		let url = self.graph_url(subject)?;
		debug!("fetching graph from {}", url);
		let body = self
			.http
			.get(url)
			.send()
			.await?
			.error_for_status()?
			.text()
			.await?;
		Ok(parse_graph(&body)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn subject_is_escaped_into_one_segment() {
		let client = GraphClient::new("http://localhost:8000");
		assert_eq!(
			client.graph_url("Dengue Virus").unwrap().as_str(),
			"http://localhost:8000/graph/Dengue%20Virus"
		);
		assert_eq!(
			client.graph_url("HIV-1/M").unwrap().as_str(),
			"http://localhost:8000/graph/HIV-1%2FM"
		);
	}

	#[test]
	fn base_path_is_kept() {
		let client = GraphClient::new("https://example.org/api/");
		assert_eq!(
			client.graph_url("Zika").unwrap().as_str(),
			"https://example.org/api/graph/Zika"
		);
	}

	#[test]
	fn bad_base_urls_are_errors() {
		assert!(matches!(
			GraphClient::new("not a url").graph_url("x"),
			Err(LoadError::Url(_))
		));
		assert!(matches!(
			GraphClient::new("mailto:someone@example.org").graph_url("x"),
			Err(LoadError::BaseUrl(_))
		));
	}
}
