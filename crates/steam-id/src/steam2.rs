//! The legacy `STEAM_X:Y:Z` notation.
//!
//! See: <https://developer.valvesoftware.com/wiki/SteamID#As_Represented_Textually>

use crate::{AccountInstance, AccountType, AccountUniverse, ParseSteamIdError, SteamId, is_digits};

const PREFIX: &str = "STEAM_";

/// Parses `STEAM_<universe>:<auth bit>:<account number>`.
///
/// Returns `Ok(None)` if `value` does not look like a legacy SteamID at all, so the caller can
/// try other formats.
pub(crate) fn parse(value: &str) -> Result<Option<SteamId>, ParseSteamIdError>
{
	let Some(value) = value.strip_prefix(PREFIX) else {
		return Ok(None);
	};

	let mut segments = value.splitn(3, ':');

	let universe = match segments.next() {
		// old clients render the public universe as 0
		Some("0" | "1") => AccountUniverse::PUBLIC,
		Some("2") => AccountUniverse::BETA,
		Some("3") => AccountUniverse::INTERNAL,
		Some("4") => AccountUniverse::DEV,
		_ => return Ok(None),
	};

	let auth_bit = match segments.next() {
		Some("0") => 0,
		Some("1") => 1,
		_ => return Ok(None),
	};

	let Some(account_number) = segments.next().filter(|segment| is_digits(segment, 1..=10)) else {
		return Ok(None);
	};

	let account_id = account_number
		.parse::<u64>()
		.ok()
		.filter(|&number| number <= u64::from(u32::MAX))
		.map(|number| (number << 1) | auth_bit)
		.and_then(|account_id| u32::try_from(account_id).ok())
		.ok_or(ParseSteamIdError::Overflow)?;

	Ok(Some(SteamId::from_parts(
		universe,
		AccountType::INDIVIDUAL,
		AccountInstance::DESKTOP,
		account_id,
	)))
}

impl SteamId
{
	/// Parses a [`SteamId`] in the legacy format of `STEAM_X:Y:Z`.
	///
	/// Universe `0` is accepted and treated as the public universe.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::{AccountUniverse, SteamId};
	///
	/// let steam_id = SteamId::parse_legacy("STEAM_0:0:4491990")?;
	///
	/// assert_eq!(steam_id.account_id(), 8983980);
	/// assert_eq!(steam_id.account_universe(), AccountUniverse::PUBLIC);
	/// # Ok::<(), steam_id::ParseSteamIdError>(())
	/// ```
	pub fn parse_legacy(value: &str) -> Result<Self, ParseSteamIdError>
	{
		parse(value)?.ok_or(ParseSteamIdError::InvalidFormat)
	}

	/// Renders this [`SteamId`] in the legacy `STEAM_X:Y:Z` format.
	///
	/// The legacy format can only represent individual accounts; other account types fall back
	/// to the 64-bit representation.
	pub fn render_legacy(&self) -> String
	{
		match self.account_type() {
			AccountType::INDIVIDUAL | AccountType::INVALID => {
				let account_id = self.account_id();

				format!("STEAM_{}:{}:{}", self.account_universe(), account_id & 1, account_id >> 1)
			}
			_ => self.to_u64_string(),
		}
	}
}
