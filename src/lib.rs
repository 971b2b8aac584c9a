// Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this repository.  If not, see <https://www.gnu.org/licenses/>.

#![doc = include_str!("../README.md")]

#[macro_use(Debug, Display, Error, From)]
extern crate derive_more as _;

pub use self::{
	client::{ApiError, WebApiResolver},
	config::{API_KEY_ENV, Config, ConfigError},
};
pub use steam_id;
use steam_id::{ResolveUrlError, ResolveVanity, SteamId};

mod client;
mod config;

/// Turns a Steam Community URL, vanity name or SteamID string into a [`SteamId`].
///
/// This is [`SteamId::from_url()`] with the error type fixed to what a [`WebApiResolver`] (or
/// any other resolver) can produce.
///
/// # Examples
///
/// ```no_run
/// use steam_vanity::{Config, WebApiResolver};
///
/// let config = Config::load_from_file("steam-vanity.toml")?;
/// let resolver = WebApiResolver::new(&config)?;
/// let steam_id = steam_vanity::resolve("https://steamcommunity.com/id/xpaw", &resolver)?;
///
/// println!("{}", steam_id.render_namespaced());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[tracing::instrument(level = "debug", skip(resolver), err(level = "debug"))]
pub fn resolve<R>(input: &str, resolver: R) -> Result<SteamId, ResolveUrlError>
where
	R: ResolveVanity,
{
	SteamId::from_url(input.trim(), resolver)
}
