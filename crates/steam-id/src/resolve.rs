//! Resolving Steam Community URLs and vanity names into [`SteamId`]s.

use std::convert::Infallible;

use crate::{BoxError, ResolveUrlError, SteamId};

/// Hosts serving Steam Community profiles.
const COMMUNITY_HOSTS: [&str; 2] = ["steamcommunity.com", "my.steamchina.com"];

/// The kind of entity a vanity name is looked up as.
///
/// The discriminants match the `url_type` parameter of Steam's `ResolveVanityURL` API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VanityKind
{
	/// `https://steamcommunity.com/id/<name>`
	Individual = 1,

	/// `https://steamcommunity.com/groups/<name>`
	Group = 2,

	/// `https://steamcommunity.com/games/<name>`
	GameGroup = 3,
}

impl VanityKind
{
	/// The numeric value used by the Web API.
	pub const fn as_u8(self) -> u8
	{
		self as u8
	}

	/// Classifies a path segment like `groups` or `id`.
	fn from_path(path: &str) -> Self
	{
		match path {
			"groups" => Self::Group,
			"games" => Self::GameGroup,
			_ => Self::Individual,
		}
	}
}

/// Looks up vanity names.
///
/// Implementations typically call Steam's `ISteamUser/ResolveVanityURL` API. Plain functions can
/// be used through [`resolver_fn()`].
pub trait ResolveVanity
{
	/// Error returned if the lookup itself fails.
	type Error: Into<BoxError>;

	/// Resolves `name` into anything [`SteamId`]'s [`FromStr`] implementation understands.
	///
	/// Returns `Ok(None)` if there is no such vanity name.
	///
	/// [`FromStr`]: std::str::FromStr
	fn resolve_vanity(&self, name: &str, kind: VanityKind) -> Result<Option<String>, Self::Error>;
}

impl<R> ResolveVanity for &R
where
	R: ResolveVanity + ?Sized,
{
	type Error = R::Error;

	fn resolve_vanity(&self, name: &str, kind: VanityKind) -> Result<Option<String>, Self::Error>
	{
		(**self).resolve_vanity(name, kind)
	}
}

impl<R> ResolveVanity for &mut R
where
	R: ResolveVanity + ?Sized,
{
	type Error = R::Error;

	fn resolve_vanity(&self, name: &str, kind: VanityKind) -> Result<Option<String>, Self::Error>
	{
		(**self).resolve_vanity(name, kind)
	}
}

/// A [`ResolveVanity`] implementation backed by a function.
///
/// Created by [`resolver_fn()`].
#[derive(Debug, Clone, Copy)]
pub struct FnResolver<F>(F);

/// Turns a function into a [`ResolveVanity`] implementation that never fails.
///
/// # Examples
///
/// ```
/// use steam_id::{SteamId, VanityKind, resolver_fn};
///
/// let resolver = resolver_fn(|name, kind| {
/// 	(name == "xpaw" && kind == VanityKind::Individual).then(|| String::from("76561197972494985"))
/// });
///
/// let steam_id = SteamId::from_url("https://steamcommunity.com/id/xpaw", &resolver)?;
///
/// assert_eq!(steam_id.account_id(), 12229257);
/// # Ok::<(), steam_id::ResolveUrlError>(())
/// ```
pub fn resolver_fn<F>(function: F) -> FnResolver<F>
where
	F: Fn(&str, VanityKind) -> Option<String>,
{
	FnResolver(function)
}

impl<F> ResolveVanity for FnResolver<F>
where
	F: Fn(&str, VanityKind) -> Option<String>,
{
	type Error = Infallible;

	fn resolve_vanity(&self, name: &str, kind: VanityKind) -> Result<Option<String>, Self::Error>
	{
		Ok((self.0)(name, kind))
	}
}

/// Which of the recognized shapes a URL has.
#[derive(Debug, PartialEq, Eq)]
enum UrlShape<'a>
{
	/// `/profiles/<id>` or `/gid/<id>`
	Profile(&'a str),

	/// `/id/<name>`, `/groups/<name>`, `/games/<name>` or a bare name
	Vanity
	{
		name: &'a str,
		kind: VanityKind,
	},

	/// `/user/<code>` or `s.team/p/<code>`
	Invite(&'a str),

	/// Anything else
	Other,
}

impl<'a> UrlShape<'a>
{
	fn of(value: &'a str) -> Self
	{
		let community_path = strip_scheme(value).and_then(|rest| {
			COMMUNITY_HOSTS
				.iter()
				.find_map(|host| rest.strip_prefix(host)?.strip_prefix('/'))
		});

		if let Some(path) = community_path {
			let (kind, rest) = path.split_once('/').unwrap_or((path, ""));
			let segment = first_segment(rest);

			match kind {
				"profiles" | "gid" if !segment.is_empty() => return Self::Profile(segment),
				"id" | "groups" | "games" if is_word(segment) => {
					return Self::Vanity { name: segment, kind: VanityKind::from_path(kind) };
				}
				_ => {}
			}
		}

		if is_word(value) {
			return Self::Vanity { name: value, kind: VanityKind::Individual };
		}

		let invite_code = strip_scheme(value).and_then(|rest| {
			COMMUNITY_HOSTS
				.iter()
				.find_map(|host| rest.strip_prefix(host)?.strip_prefix("/user/"))
				.or_else(|| rest.strip_prefix("s.team/p/"))
		});

		match invite_code.map(first_segment) {
			Some(code) if is_word(code) => Self::Invite(code),
			_ => Self::Other,
		}
	}
}

fn strip_scheme(value: &str) -> Option<&str>
{
	value
		.strip_prefix("https://")
		.or_else(|| value.strip_prefix("http://"))
}

/// Everything up to the next `/`.
fn first_segment(path: &str) -> &str
{
	path.split_once('/').map_or(path, |(segment, _)| segment)
}

/// Whether `value` is a non-empty string of `[A-Za-z0-9_-]`.
fn is_word(value: &str) -> bool
{
	!value.is_empty()
		&& value
			.bytes()
			.all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-'))
}

impl SteamId
{
	/// Creates a [`SteamId`] from a Steam Community URL, a vanity name, or any of the formats
	/// accepted by [`FromStr`].
	///
	/// The following shapes are recognized, in order:
	///
	/// 1. `https://steamcommunity.com/profiles/<id>` and `.../gid/<id>`, where `<id>` is parsed
	///    like any other SteamID string
	/// 2. `https://steamcommunity.com/id/<name>` (as well as `/groups/` and `/games/`), or just
	///    `<name>`; the name is looked up using `resolver`, unless it already is a valid 64-bit
	///    SteamID
	/// 3. `https://steamcommunity.com/user/<invite code>` and `https://s.team/p/<invite code>`
	///
	/// Everything else is handed to [`FromStr`]. `my.steamchina.com` is accepted in place of
	/// `steamcommunity.com`.
	///
	/// [`FromStr`]: std::str::FromStr
	#[tracing::instrument(level = "debug", skip(resolver), err(level = "debug"))]
	pub fn from_url<R>(value: &str, resolver: R) -> Result<Self, ResolveUrlError>
	where
		R: ResolveVanity,
	{
		match UrlShape::of(value) {
			UrlShape::Profile(id) => {
				tracing::trace!(id, "matched profile url");
				Ok(id.parse()?)
			}
			UrlShape::Vanity { name, kind } => resolve_vanity(name, kind, &resolver),
			UrlShape::Invite(code) => {
				tracing::trace!(code, "matched invite url");
				Ok(Self::from_invite_code(code)?)
			}
			UrlShape::Other => Ok(value.parse()?),
		}
	}
}

fn resolve_vanity<R>(name: &str, kind: VanityKind, resolver: &R) -> Result<SteamId, ResolveUrlError>
where
	R: ResolveVanity,
{
	if !(2..=32).contains(&name.len()) {
		return Err(ResolveUrlError::BadLength { len: name.len() });
	}

	// Steam does not allow vanity names that are valid SteamIDs
	if let Ok(value) = crate::parse_u64_strict(name) {
		let steam_id = SteamId::from_u64(value);

		if steam_id.is_valid() {
			return Ok(steam_id);
		}
	}

	tracing::debug!(name, ?kind, "resolving vanity name");

	let resolved = resolver
		.resolve_vanity(name, kind)
		.map_err(|err| ResolveUrlError::Resolver(err.into()))?
		.ok_or_else(|| ResolveUrlError::NotFound { name: name.to_owned() })?;

	Ok(resolved.parse()?)
}

#[cfg(test)]
mod tests
{
	use std::{cell::RefCell, fmt};

	use super::*;
	use crate::{AccountInstance, AccountType, AccountUniverse, ParseSteamIdError};

	/// Records every lookup and answers with a fixed value.
	struct Recorder
	{
		answer: Option<&'static str>,
		calls: RefCell<Vec<(String, VanityKind)>>,
	}

	impl Recorder
	{
		fn new(answer: Option<&'static str>) -> Self
		{
			Self { answer, calls: RefCell::default() }
		}

		fn calls(&self) -> Vec<(String, VanityKind)>
		{
			self.calls.borrow().clone()
		}
	}

	impl ResolveVanity for Recorder
	{
		type Error = Infallible;

		fn resolve_vanity(&self, name: &str, kind: VanityKind) -> Result<Option<String>, Self::Error>
		{
			self.calls.borrow_mut().push((name.to_owned(), kind));
			Ok(self.answer.map(String::from))
		}
	}

	#[derive(Debug)]
	struct Unavailable;

	impl fmt::Display for Unavailable
	{
		fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("service unavailable")
		}
	}

	impl std::error::Error for Unavailable {}

	struct Failing;

	impl ResolveVanity for Failing
	{
		type Error = Unavailable;

		fn resolve_vanity(&self, _: &str, _: VanityKind) -> Result<Option<String>, Self::Error>
		{
			Err(Unavailable)
		}
	}

	#[test]
	fn profile_urls()
	{
		let resolver = Recorder::new(None);

		for (url, expected) in [
			("https://steamcommunity.com/profiles/76561197960287930", 76561197960287930),
			("http://steamcommunity.com/profiles/76561197960287930/", 76561197960287930),
			("https://steamcommunity.com/profiles/[U:1:2]", 76561197960265730),
			("https://steamcommunity.com/profiles/STEAM_0:0:1/games", 76561197960265730),
			("https://my.steamchina.com/profiles/76561197960287930", 76561197960287930),
			("https://steamcommunity.com/gid/103582791429521412", 103582791429521412),
			("https://steamcommunity.com/gid/[g:1:4]", 103582791429521412),
		] {
			assert_eq!(SteamId::from_url(url, &resolver).unwrap().as_u64(), expected, "{url}");
		}

		assert!(resolver.calls().is_empty());
	}

	#[test]
	fn vanity_urls()
	{
		let resolver = Recorder::new(Some("76561197972494985"));

		for (url, name, kind) in [
			("https://steamcommunity.com/id/xpaw", "xpaw", VanityKind::Individual),
			("https://steamcommunity.com/id/xpaw/", "xpaw", VanityKind::Individual),
			("http://steamcommunity.com/id/x-p_aw/games", "x-p_aw", VanityKind::Individual),
			("https://steamcommunity.com/groups/valve", "valve", VanityKind::Group),
			("https://my.steamchina.com/games/tf2", "tf2", VanityKind::GameGroup),
			("xpaw", "xpaw", VanityKind::Individual),
		] {
			let steam_id = SteamId::from_url(url, &resolver).unwrap();

			assert_eq!(steam_id.account_id(), 12229257, "{url}");
			assert_eq!(resolver.calls().last(), Some(&(name.to_owned(), kind)), "{url}");
		}
	}

	#[test]
	fn resolved_value_may_use_any_format()
	{
		let resolver = resolver_fn(|_, _| Some(String::from("[U:1:12229257]")));

		let steam_id = SteamId::from_url("https://steamcommunity.com/id/xpaw", resolver).unwrap();

		assert_eq!(steam_id.as_u64(), 76561197972494985);

		let resolver = resolver_fn(|_, _| Some(String::from("not a steamid")));

		assert_matches!(
			SteamId::from_url("xpaw", resolver),
			Err(ResolveUrlError::Parse(ParseSteamIdError::InvalidFormat)),
		);
	}

	#[test]
	fn not_found()
	{
		let resolver = Recorder::new(None);

		assert_matches!(
			SteamId::from_url("https://steamcommunity.com/id/nobody", &resolver),
			Err(ResolveUrlError::NotFound { name }) if name == "nobody",
		);
	}

	#[test]
	fn resolver_errors_are_propagated()
	{
		let result = SteamId::from_url("https://steamcommunity.com/id/xpaw", Failing);

		assert_matches!(result, Err(ResolveUrlError::Resolver(ref err)) if err.to_string() == "service unavailable");
	}

	#[test]
	fn bad_length()
	{
		let resolver = Recorder::new(Some("76561197972494985"));

		assert_matches!(
			SteamId::from_url("https://steamcommunity.com/id/x", &resolver),
			Err(ResolveUrlError::BadLength { len: 1 }),
		);

		let long_name = "x".repeat(33);

		assert_matches!(
			SteamId::from_url(&long_name, &resolver),
			Err(ResolveUrlError::BadLength { len: 33 }),
		);

		assert!(resolver.calls().is_empty());

		let longest_name = "x".repeat(32);

		assert!(SteamId::from_url(&longest_name, &resolver).is_ok());
	}

	#[test]
	fn valid_numeric_names_are_not_resolved()
	{
		let resolver = Recorder::new(None);

		let steam_id = SteamId::from_url("https://steamcommunity.com/id/76561197972494985", &resolver);

		assert_matches!(steam_id, Ok(steam_id) if steam_id.account_id() == 12229257);
		assert!(resolver.calls().is_empty());
	}

	#[test]
	fn invalid_numeric_names_are_resolved()
	{
		let resolver = Recorder::new(Some("76561197972494985"));

		let steam_id = SteamId::from_url("https://steamcommunity.com/id/1234", &resolver).unwrap();

		assert_eq!(steam_id.account_id(), 12229257);
		assert_eq!(resolver.calls(), [(String::from("1234"), VanityKind::Individual)]);
	}

	#[test]
	fn invite_urls()
	{
		let resolver = Recorder::new(None);

		for url in [
			"https://s.team/p/qpn-pmn",
			"http://s.team/p/QPN-PMN/",
			"https://steamcommunity.com/user/qpn-pmn",
			"https://my.steamchina.com/user/qpn-pmn/abc",
		] {
			let steam_id = SteamId::from_url(url, &resolver).unwrap();

			assert_eq!(steam_id.account_id(), 12229257, "{url}");
			assert_eq!(steam_id.account_type(), AccountType::INDIVIDUAL);
			assert_eq!(steam_id.account_universe(), AccountUniverse::PUBLIC);
			assert_eq!(steam_id.account_instance(), AccountInstance::DESKTOP);
		}

		assert!(resolver.calls().is_empty());
	}

	#[test]
	fn falls_back_to_parser()
	{
		let resolver = Recorder::new(None);

		for (value, expected) in [
			("[U:1:2]", 76561197960265730),
			("STEAM_0:0:1", 76561197960265730),
		] {
			assert_eq!(SteamId::from_url(value, &resolver).unwrap().as_u64(), expected);
		}

		for value in [
			"",
			"https://steamcommunity.com/profiles/",
			"https://steamcommunity.com/id/x.paw",
			"https://example.com/id/xpaw",
			"not a steamid",
		] {
			assert_matches!(
				SteamId::from_url(value, &resolver),
				Err(ResolveUrlError::Parse(ParseSteamIdError::InvalidFormat)),
				"{value:?} was accepted",
			);
		}

		assert!(resolver.calls().is_empty());
	}

	#[test]
	fn vanity_kinds()
	{
		assert_eq!(VanityKind::Individual.as_u8(), 1);
		assert_eq!(VanityKind::Group.as_u8(), 2);
		assert_eq!(VanityKind::GameGroup.as_u8(), 3);
	}
}
