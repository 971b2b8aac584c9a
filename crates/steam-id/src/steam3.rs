//! The namespaced `[T:U:N]` / `[T:U:N:I]` notation.
//!
//! See: <https://developer.valvesoftware.com/wiki/SteamID#Steam_ID_as_a_Steam_Community_ID>

use crate::{
	AccountInstance,
	AccountType,
	AccountUniverse,
	Field,
	ParseSteamIdError,
	SteamId,
	is_digits,
};

/// Parses `[<type>:<universe>:<account number>]` with an optional `:<instance>` suffix.
///
/// Returns `Ok(None)` if `value` does not follow the grammar, so the caller can try other
/// formats.
pub(crate) fn parse(value: &str) -> Result<Option<SteamId>, ParseSteamIdError>
{
	let Some(value) = value.strip_prefix('[').and_then(|value| value.strip_suffix(']')) else {
		return Ok(None);
	};

	let mut segments = value.split(':');

	let (Some(type_segment), Some(universe), Some(account_number)) =
		(segments.next(), segments.next(), segments.next())
	else {
		return Ok(None);
	};

	let instance = segments.next();

	if segments.next().is_some() {
		return Ok(None);
	}

	let mut type_chars = type_segment.chars();

	let (Some(type_char), None) = (type_chars.next(), type_chars.next()) else {
		return Ok(None);
	};

	let Some(account_type) = AccountType::from_steam3_char(type_char) else {
		return Ok(None);
	};

	let universe = match universe {
		"0" => AccountUniverse::INVALID,
		"1" => AccountUniverse::PUBLIC,
		"2" => AccountUniverse::BETA,
		"3" => AccountUniverse::INTERNAL,
		"4" => AccountUniverse::DEV,
		_ => return Ok(None),
	};

	if !is_digits(account_number, 1..=10) {
		return Ok(None);
	}

	if instance.is_some_and(|instance| !is_digits(instance, 1..=usize::MAX)) {
		return Ok(None);
	}

	let account_id = account_number
		.parse::<u32>()
		.map_err(|_| ParseSteamIdError::Overflow)?;

	let instance = match (type_char, instance) {
		('c', _) => u64::from(AccountInstance::CLAN_FLAG),
		('L', _) => u64::from(AccountInstance::LOBBY_FLAG),
		('T' | 'g', _) => 0,
		// anything that doesn't fit into a `u64` is certainly out of range
		(_, Some(instance)) => instance.parse::<u64>().unwrap_or(u64::MAX),
		('U', None) => u64::from(AccountInstance::DESKTOP.raw()),
		(_, None) => 0,
	};

	let mut steam_id = SteamId::from_parts(universe, account_type, AccountInstance::ALL, account_id);
	steam_id.set(Field::Instance, instance)?;

	Ok(Some(steam_id))
}

impl SteamId
{
	/// Parses a [`SteamId`] in the namespaced format of `[T:U:N]` or `[T:U:N:I]`.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::{AccountType, SteamId};
	///
	/// let steam_id = SteamId::parse_namespaced("[U:1:24715681]")?;
	///
	/// assert_eq!(steam_id.as_u64(), 76561197984981409);
	/// assert_eq!(steam_id.account_type(), AccountType::INDIVIDUAL);
	/// # Ok::<(), steam_id::ParseSteamIdError>(())
	/// ```
	pub fn parse_namespaced(value: &str) -> Result<Self, ParseSteamIdError>
	{
		parse(value)?.ok_or(ParseSteamIdError::InvalidFormat)
	}

	/// Renders this [`SteamId`] in the namespaced `[T:U:N]` format.
	///
	/// Account types without a letter of their own are rendered as `i`.
	pub fn render_namespaced(&self) -> String
	{
		let account_type = self.account_type();
		let instance = self.account_instance();

		let (type_char, with_instance) = match account_type {
			AccountType::CHAT if instance.has_flag(AccountInstance::CLAN_FLAG) => ('c', false),
			AccountType::CHAT if instance.has_flag(AccountInstance::LOBBY_FLAG) => ('L', false),
			AccountType::ANON_GAME_SERVER => ('A', true),
			AccountType::MULTISEAT => ('M', true),
			AccountType::INDIVIDUAL => ('U', instance != AccountInstance::DESKTOP),
			_ => (account_type.steam3_char().unwrap_or('i'), false),
		};

		let universe = self.account_universe();
		let account_id = self.account_id();

		if with_instance {
			format!("[{type_char}:{universe}:{account_id}:{instance}]")
		} else {
			format!("[{type_char}:{universe}:{account_id}]")
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn round_trip()
	{
		for value in [
			"[U:1:123]",
			"[U:1:123:2]",
			"[G:1:626]",
			"[A:2:165:1234]",
			"[M:1:5:3]",
			"[P:1:5]",
			"[C:1:5]",
			"[g:1:5]",
			"[T:1:123]",
			"[c:1:123]",
			"[L:1:123]",
			"[a:4:5]",
			"[I:1:5]",
		] {
			let steam_id = SteamId::parse_namespaced(value).unwrap();

			assert_eq!(steam_id.render_namespaced(), value);
			assert_eq!(value.parse::<SteamId>().unwrap(), steam_id);
		}
	}

	#[test]
	fn instance_defaults()
	{
		let individual = SteamId::parse_namespaced("[U:1:24715681]").unwrap();

		assert_eq!(individual.account_instance(), AccountInstance::DESKTOP);
		assert_eq!(individual.as_u64(), 76561197984981409);

		let game_server = SteamId::parse_namespaced("[G:1:626]").unwrap();

		assert_eq!(game_server.account_type(), AccountType::GAME_SERVER);
		assert_eq!(game_server.account_instance(), AccountInstance::ALL);
	}

	#[test]
	fn chat_flags_override_instance()
	{
		let clan_chat = SteamId::parse_namespaced("[c:1:123:5]").unwrap();

		assert_eq!(clan_chat.account_type(), AccountType::CHAT);
		assert_eq!(clan_chat.account_instance().raw(), AccountInstance::CLAN_FLAG);

		let lobby = SteamId::parse_namespaced("[L:1:123:5]").unwrap();

		assert_eq!(lobby.account_instance().raw(), AccountInstance::LOBBY_FLAG);

		for value in ["[T:1:123:5]", "[g:1:123:5]"] {
			let steam_id = SteamId::parse_namespaced(value).unwrap();

			assert_eq!(steam_id.account_instance(), AccountInstance::ALL, "{value}");
		}
	}

	#[test]
	fn unmapped_types_render_as_i()
	{
		let mut steam_id = SteamId::parse_namespaced("[U:1:123]").unwrap();

		steam_id.set_account_type(AccountType::P2P_SUPER_SEEDER);
		assert_eq!(steam_id.render_namespaced(), "[i:1:123]");

		steam_id.set_account_type(AccountType::MAX);
		assert_eq!(steam_id.render_namespaced(), "[i:1:123]");

		let parsed = SteamId::parse_namespaced("[i:1:123]").unwrap();

		assert_eq!(parsed.account_type(), AccountType::INVALID);
	}

	#[test]
	fn overflow()
	{
		assert_matches!(
			SteamId::parse_namespaced("[U:1:9999999999]"),
			Err(ParseSteamIdError::Overflow),
		);
		assert_matches!(
			SteamId::parse_namespaced("[U:1:4294967295]"),
			Ok(steam_id) if steam_id.account_id() == u32::MAX,
		);
		assert_matches!(
			SteamId::parse_namespaced("[U:1:123:1048576]"),
			Err(ParseSteamIdError::OutOfRange(_)),
		);
		assert_matches!(
			SteamId::parse_namespaced("[U:1:123:99999999999999999999999]"),
			Err(ParseSteamIdError::OutOfRange(_)),
		);
	}

	#[test]
	fn not_namespaced()
	{
		for value in [
			"U:1:123",
			"[U:1:123",
			"U:1:123]",
			"[[U:1:123]]",
			"[U:1]",
			"[U:1:]",
			"[U:1:123:]",
			"[U:1:123:4:5]",
			"[U:5:123]",
			"[U:1:-5]",
			"[UU:1:123]",
			"[Z:1:123]",
			"[U:1:12345678901]",
		] {
			assert_matches!(parse(value), Ok(None), "{value:?} was accepted");
		}
	}
}
