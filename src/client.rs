use {
	crate::Config,
	serde::Deserialize,
	std::sync::Arc,
	steam_id::{ResolveVanity, SteamId, VanityKind},
	url::Url,
};

/// `success` value of a successful lookup.
const SUCCESS: u32 = 1;

/// `success` value if the vanity name does not exist.
const NO_MATCH: u32 = 42;

#[derive(Debug, Display, Error, From)]
#[display("Steam API error: {_variant}")]
pub enum ApiError
{
	#[display("no API key configured")]
	#[from(ignore)]
	MissingApiKey,

	#[display("failed to build http client")]
	#[from(ignore)]
	BuildClient(reqwest::Error),

	/// The error never contains the request URL, as that includes the API key.
	#[display("failed to make http request")]
	#[from(ignore)]
	Http(reqwest::Error),

	#[display("failed to deserialize response from Steam")]
	DeserializeResponse(serde_json::Error),

	#[display("unexpected response (success = {success}): {}", message.as_deref().unwrap_or("no message"))]
	#[from(ignore)]
	UnexpectedStatus
	{
		#[error(ignore)]
		success: u32,

		#[error(ignore)]
		message: Option<String>,
	},
}

impl ApiError
{
	fn http(error: reqwest::Error) -> Self
	{
		Self::Http(error.without_url())
	}
}

/// Resolves vanity names using the `ISteamUser/ResolveVanityURL` Web API.
#[derive(Debug, Clone)]
pub struct WebApiResolver
{
	http_client: reqwest::blocking::Client,

	#[debug(skip)]
	api_key: Option<Arc<str>>,

	#[debug("{:?}", api_url.as_str())]
	api_url: Url,
}

impl WebApiResolver
{
	pub fn new(config: &Config) -> Result<Self, ApiError>
	{
		let http_client = reqwest::blocking::Client::builder()
			.user_agent(&*config.user_agent)
			.timeout(config.timeout)
			.connect_timeout(config.connect_timeout)
			.gzip(true)
			.build()
			.map_err(ApiError::BuildClient)?;

		Ok(Self {
			http_client,
			api_key: config.api_key.as_deref().map(Arc::from),
			api_url: config.api_url.clone(),
		})
	}

	/// Looks up `name`.
	///
	/// Returns `Ok(None)` if Steam does not know the name.
	#[tracing::instrument(level = "debug", skip(self), ret(level = "debug"), err(level = "debug"))]
	pub fn resolve(&self, name: &str, kind: VanityKind) -> Result<Option<SteamId>, ApiError>
	{
		#[derive(serde::Serialize)]
		struct Query<'a>
		{
			#[serde(rename = "key")]
			api_key: &'a str,

			#[serde(rename = "vanityurl")]
			name: &'a str,

			url_type: u8,
		}

		let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

		let response = self
			.http_client
			.get(self.api_url.clone())
			.query(&Query { api_key, name, url_type: kind.as_u8() })
			.send()
			.map_err(ApiError::http)?;

		if let Err(error) = response.error_for_status_ref() {
			return Err(ApiError::http(error));
		}

		parse_response(&response.bytes().map_err(ApiError::http)?)
	}
}

impl ResolveVanity for WebApiResolver
{
	type Error = ApiError;

	fn resolve_vanity(&self, name: &str, kind: VanityKind) -> Result<Option<String>, Self::Error>
	{
		self.resolve(name, kind)
			.map(|steam_id| steam_id.map(|steam_id| steam_id.to_u64_string()))
	}
}

fn parse_response(body: &[u8]) -> Result<Option<SteamId>, ApiError>
{
	#[derive(Debug, Deserialize)]
	struct ApiResponse<T>
	{
		response: T,
	}

	#[derive(Debug, Deserialize)]
	struct ResolveVanityResponse
	{
		success: u32,
		steamid: Option<SteamId>,
		message: Option<String>,
	}

	let ApiResponse { response } = serde_json::from_slice::<ApiResponse<ResolveVanityResponse>>(body)?;

	match response {
		ResolveVanityResponse { success: SUCCESS, steamid: Some(steam_id), .. } => Ok(Some(steam_id)),
		ResolveVanityResponse { success: NO_MATCH, .. } => Ok(None),
		ResolveVanityResponse { success, message, .. } => {
			Err(ApiError::UnexpectedStatus { success, message })
		}
	}
}

#[cfg(test)]
mod tests
{
	use std::time::Duration;

	use super::*;

	#[test]
	fn success()
	{
		let body = br#"{"response":{"steamid":"76561197972494985","success":1}}"#;

		assert_eq!(
			parse_response(body).unwrap().map(|steam_id| steam_id.account_id()),
			Some(12229257),
		);
	}

	#[test]
	fn no_match()
	{
		let body = br#"{"response":{"success":42,"message":"No match"}}"#;

		assert_eq!(parse_response(body).unwrap(), None);
	}

	#[test]
	fn unexpected_status()
	{
		let body = br#"{"response":{"success":2,"message":"Invalid URL type"}}"#;

		assert!(matches!(
			parse_response(body),
			Err(ApiError::UnexpectedStatus { success: 2, message: Some(ref message) })
				if message == "Invalid URL type"
		));

		// success without a SteamID
		let body = br#"{"response":{"success":1}}"#;

		assert!(matches!(
			parse_response(body),
			Err(ApiError::UnexpectedStatus { success: 1, message: None }),
		));
	}

	#[test]
	fn malformed_body()
	{
		let bodies: [&[u8]; 3] = [
			b"<html>Forbidden</html>",
			br#"{"success":1}"#,
			br#"{"response":{"steamid":"0","success":1}}"#,
		];

		for body in bodies {
			assert!(matches!(parse_response(body), Err(ApiError::DeserializeResponse(_))));
		}
	}

	#[test]
	fn missing_api_key()
	{
		let resolver = WebApiResolver::new(&Config::default()).unwrap();

		assert!(matches!(
			resolver.resolve("xpaw", VanityKind::Individual),
			Err(ApiError::MissingApiKey),
		));

		// no request is made, so this doesn't need network access either
		let result = SteamId::from_url("https://steamcommunity.com/id/xpaw", &resolver);

		assert!(matches!(result, Err(steam_id::ResolveUrlError::Resolver(_))));
	}

	#[test]
	fn http_errors_do_not_leak_the_api_key()
	{
		let config = Config {
			api_key: Some(Box::from("SECRETKEY123")),
			api_url: "http://127.0.0.1:1/".parse().unwrap(),
			timeout: Duration::from_secs(1),
			connect_timeout: Duration::from_secs(1),
			..Config::default()
		};

		let resolver = WebApiResolver::new(&config).unwrap();
		let error = resolver.resolve("xpaw", VanityKind::Individual).unwrap_err();

		assert!(matches!(error, ApiError::Http(_)));

		let mut source: Option<&dyn std::error::Error> = Some(&error);

		while let Some(error) = source {
			assert!(!error.to_string().contains("SECRETKEY123"), "{error}");
			assert!(!format!("{error:?}").contains("SECRETKEY123"), "{error:?}");
			source = error.source();
		}
	}
}
