//! Configuration for the [Web API resolver].
//!
//! [Web API resolver]: crate::WebApiResolver

use std::{
	env,
	fs,
	io,
	path::{Path, PathBuf},
	time::Duration,
};

use serde::{Deserialize, Deserializer};
use url::Url;

/// Environment variable consulted if the configuration does not contain an API key.
pub const API_KEY_ENV: &str = "STEAM_WEB_API_KEY";

const DEFAULT_API_URL: &str = "https://api.steampowered.com/ISteamUser/ResolveVanityURL/v1/";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	/// Steam Web API key
	///
	/// See <https://steamcommunity.com/dev/apikey>.
	#[debug(skip)]
	pub api_key: Option<Box<str>>,

	/// URL of the `ResolveVanityURL` endpoint
	#[debug("{:?}", api_url.as_str())]
	#[serde(default = "default_api_url")]
	pub api_url: Url,

	/// Timeout for an entire request (in seconds)
	#[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
	pub timeout: Duration,

	/// Timeout for establishing a connection (in seconds)
	#[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
	pub connect_timeout: Duration,

	/// `User-Agent` header sent with every request
	#[serde(default = "default_user_agent")]
	pub user_agent: Box<str>,
}

#[derive(Debug, Display, Error)]
pub enum ConfigError
{
	#[display("failed to read configuration file at {path:?}")]
	ReadFile
	{
		#[error(source)]
		error: io::Error,
		path: PathBuf,
	},

	#[display("failed to parse configuration")]
	Parse(toml::de::Error),
}

impl Config
{
	/// Reads and parses the TOML file at `path`.
	///
	/// If the file does not contain an API key, it is read from the
	/// `STEAM_WEB_API_KEY` environment variable.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError>
	{
		let path = path.as_ref();
		let file = fs::read_to_string(path)
			.map_err(|error| ConfigError::ReadFile { error, path: path.to_path_buf() })?;

		Self::from_toml(&file)
	}

	/// Parses a TOML document.
	///
	/// Falls back to the environment for the API key just like
	/// [`load_from_file()`](Self::load_from_file).
	pub fn from_toml(toml: &str) -> Result<Self, ConfigError>
	{
		toml::from_str::<Self>(toml)
			.map(Self::with_env_api_key)
			.map_err(ConfigError::Parse)
	}

	/// Fills in the API key from the `STEAM_WEB_API_KEY` environment variable if none is set.
	pub fn with_env_api_key(self) -> Self
	{
		self.with_api_key_fallback(env::var(API_KEY_ENV).ok())
	}

	fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self
	{
		if self.api_key.is_none() {
			self.api_key = fallback
				.filter(|api_key| !api_key.is_empty())
				.map(String::into_boxed_str);
		}

		self
	}
}

impl Default for Config
{
	fn default() -> Self
	{
		Self {
			api_key: None,
			api_url: default_api_url(),
			timeout: default_timeout(),
			connect_timeout: default_timeout(),
			user_agent: default_user_agent(),
		}
	}
}

fn default_api_url() -> Url
{
	DEFAULT_API_URL
		.parse::<Url>()
		.unwrap_or_else(|err| panic!("failed to parse hard-coded URL: {err}"))
}

fn default_timeout() -> Duration
{
	Duration::from_secs(5)
}

fn default_user_agent() -> Box<str>
{
	Box::from("Steam Vanity URL Lookup")
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	let secs = f64::deserialize(deserializer)?;

	Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}
