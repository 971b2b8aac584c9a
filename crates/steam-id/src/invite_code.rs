//! Invite codes, as used in `https://s.team/p/<code>` links.
//!
//! An invite code is the hexadecimal account id with every digit substituted by a letter from
//! a 16-letter alphabet, e.g. `qpn-pmn` for the account id `0xBA9A89`.

use crate::{
	AccountInstance,
	AccountType,
	AccountUniverse,
	ParseInviteCodeError,
	SteamId,
	WrongAccountType,
};

/// Letters used in place of the hex digits `0-9a-f`.
const ALPHABET: [u8; 16] = *b"bcdfghjkmnpqrtvw";

/// Encodes an account id as an invite code.
///
/// # Examples
///
/// ```
/// use steam_id::invite_code;
///
/// assert_eq!(invite_code::encode(0), "b");
/// assert_eq!(invite_code::encode(12229257), "qpn-pmn");
/// ```
pub fn encode(account_id: u32) -> String
{
	let digits = (u32::BITS - account_id.leading_zeros()).div_ceil(4).max(1);

	let mut code = (0..digits)
		.rev()
		.map(|digit| char::from(ALPHABET[((account_id >> (digit * 4)) & 0xF) as usize]))
		.collect::<String>();

	if code.len() > 3 {
		code.insert(code.len() / 2, '-');
	}

	code
}

/// Decodes an invite code back into an account id.
///
/// Decoding is case-insensitive, and any characters that are not part of the alphabet (like
/// the `-` separator) are skipped.
pub fn decode(code: &str) -> Result<u32, ParseInviteCodeError>
{
	code.chars()
		.map(|letter| letter.to_ascii_lowercase())
		.filter_map(digit_value)
		.try_fold(0_u32, |account_id, digit| {
			account_id
				.checked_mul(16)
				.map(|account_id| account_id | digit)
				.ok_or(ParseInviteCodeError::Overflow)
		})
}

fn digit_value(letter: char) -> Option<u32>
{
	ALPHABET
		.iter()
		.position(|&candidate| char::from(candidate) == letter)
		.and_then(|digit| u32::try_from(digit).ok())
}

impl SteamId
{
	/// Decodes an invite code into an individual [`SteamId`] in the public universe.
	pub fn from_invite_code(code: &str) -> Result<Self, ParseInviteCodeError>
	{
		decode(code).map(|account_id| {
			Self::from_parts(
				AccountUniverse::PUBLIC,
				AccountType::INDIVIDUAL,
				AccountInstance::DESKTOP,
				account_id,
			)
		})
	}

	/// Renders the invite code for this [`SteamId`].
	///
	/// Only individual (or [invalid]) accounts have invite codes.
	///
	/// [invalid]: AccountType::INVALID
	pub fn render_invite_code(&self) -> Result<String, WrongAccountType>
	{
		match self.account_type() {
			AccountType::INDIVIDUAL | AccountType::INVALID => Ok(encode(self.account_id())),
			actual => Err(WrongAccountType { actual }),
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn known_codes()
	{
		for (account_id, code) in [(0, "b"), (1, "c"), (15, "w"), (16, "cb"), (12229257, "qpn-pmn")] {
			assert_eq!(encode(account_id), code);
			assert_eq!(decode(code), Ok(account_id));
		}
	}

	#[test]
	fn separator_at_midpoint()
	{
		assert_eq!(encode(0xFFF), "www");
		assert_eq!(encode(0x1000), "cb-bb");
		assert_eq!(encode(u32::MAX), "wwww-wwww");
	}

	#[test]
	fn decode_is_lenient()
	{
		assert_eq!(decode("QPN-PMN"), Ok(12229257));
		assert_eq!(decode(" qpn pmn!"), Ok(12229257));
		assert_eq!(decode(""), Ok(0));
	}

	#[test]
	fn decode_overflow()
	{
		assert_eq!(decode("wwww-wwww"), Ok(u32::MAX));
		assert_eq!(decode("cbbbb-bbbb"), Err(ParseInviteCodeError::Overflow));
	}

	#[test]
	fn round_trip()
	{
		for account_id in [2, 255, 256, 65535, 65536, 24715681, u32::MAX - 1] {
			assert_eq!(decode(&encode(account_id)), Ok(account_id));
		}
	}

	#[test]
	fn steam_id()
	{
		let steam_id = SteamId::from_invite_code("qpn-pmn").unwrap();

		assert_eq!(steam_id.account_id(), 12229257);
		assert_eq!(steam_id.account_type(), AccountType::INDIVIDUAL);
		assert_eq!(steam_id.account_universe(), AccountUniverse::PUBLIC);
		assert_eq!(steam_id.account_instance(), AccountInstance::DESKTOP);
		assert_eq!(steam_id.render_invite_code().as_deref(), Ok("qpn-pmn"));

		let clan = SteamId::from_u64(103582791432294076);

		assert_eq!(
			clan.render_invite_code(),
			Err(WrongAccountType { actual: AccountType::CLAN }),
		);
	}
}
