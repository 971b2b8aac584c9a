use crate::{Field, OutOfRange};

/// Different types of Steam accounts
///
/// The account type is stored in 4 bits, so values up to 15 can be represented even though only
/// 0 through 10 have a meaning.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountType(u8);

impl AccountType
{
	pub const INVALID: Self = Self(0);
	pub const INDIVIDUAL: Self = Self(1);
	pub const MULTISEAT: Self = Self(2);
	pub const GAME_SERVER: Self = Self(3);
	pub const ANON_GAME_SERVER: Self = Self(4);
	pub const PENDING: Self = Self(5);
	pub const CONTENT_SERVER: Self = Self(6);
	pub const CLAN: Self = Self(7);
	pub const CHAT: Self = Self(8);
	pub const P2P_SUPER_SEEDER: Self = Self(9);
	pub const ANON_USER: Self = Self(10);

	/// The largest value that fits into the account type bits.
	pub const MAX: Self = Self(0xF);

	/// Creates a new [`AccountType`] from a raw value.
	///
	/// Fails if `raw` does not fit into 4 bits.
	pub const fn new(raw: u8) -> Result<Self, OutOfRange>
	{
		if raw <= Self::MAX.0 {
			Ok(Self(raw))
		} else {
			Err(OutOfRange { field: Field::AccountType, value: raw as u64 })
		}
	}

	/// Extracts the account type bits from a raw 64-bit SteamID.
	pub const fn from_bits(bits: u64) -> Self
	{
		Self(((bits >> 52) & 0xF) as u8)
	}

	/// Returns the raw integer value.
	pub const fn raw(self) -> u8
	{
		self.0
	}

	/// Whether this is one of the account types Steam knows about (other than
	/// [`INVALID`](Self::INVALID)).
	pub const fn is_known(self) -> bool
	{
		matches!(self.0, 1..=10)
	}

	/// The character used for this account type in the Steam3 notation.
	///
	/// Chat accounts always map to `T` here; the lobby and clan chat variants depend on the
	/// instance flags and are handled by the renderer.
	pub(crate) const fn steam3_char(self) -> Option<char>
	{
		match self {
			Self::ANON_GAME_SERVER => Some('A'),
			Self::GAME_SERVER => Some('G'),
			Self::MULTISEAT => Some('M'),
			Self::PENDING => Some('P'),
			Self::CONTENT_SERVER => Some('C'),
			Self::CLAN => Some('g'),
			Self::CHAT => Some('T'),
			Self::INVALID => Some('I'),
			Self::INDIVIDUAL => Some('U'),
			Self::ANON_USER => Some('a'),
			_ => None,
		}
	}

	/// Inverse of [`steam3_char()`](Self::steam3_char).
	///
	/// `c` and `L` (clan / lobby chat) map to [`CHAT`](Self::CHAT), and the lowercase `i` used when
	/// rendering unmapped types maps back to [`INVALID`](Self::INVALID).
	pub(crate) const fn from_steam3_char(type_char: char) -> Option<Self>
	{
		match type_char {
			'A' => Some(Self::ANON_GAME_SERVER),
			'G' => Some(Self::GAME_SERVER),
			'M' => Some(Self::MULTISEAT),
			'P' => Some(Self::PENDING),
			'C' => Some(Self::CONTENT_SERVER),
			'g' => Some(Self::CLAN),
			'T' | 'c' | 'L' => Some(Self::CHAT),
			'I' | 'i' => Some(Self::INVALID),
			'U' => Some(Self::INDIVIDUAL),
			'a' => Some(Self::ANON_USER),
			_ => None,
		}
	}
}

impl TryFrom<u8> for AccountType
{
	type Error = OutOfRange;

	fn try_from(raw: u8) -> Result<Self, Self::Error>
	{
		Self::new(raw)
	}
}

impl From<AccountType> for u8
{
	fn from(account_type: AccountType) -> Self
	{
		account_type.0
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn new_rejects_wide_values()
	{
		assert_matches!(AccountType::new(15), Ok(AccountType::MAX));
		assert_matches!(
			AccountType::new(16),
			Err(OutOfRange { field: Field::AccountType, value: 16 }),
		);
	}

	#[test]
	fn steam3_chars_round_trip()
	{
		for raw in 0..=10 {
			let account_type = AccountType(raw);

			if let Some(type_char) = account_type.steam3_char() {
				assert_eq!(AccountType::from_steam3_char(type_char), Some(account_type));
			}
		}
	}

	#[test]
	fn p2p_super_seeder_has_no_char()
	{
		assert_eq!(AccountType::P2P_SUPER_SEEDER.steam3_char(), None);
		assert_eq!(AccountType(12).steam3_char(), None);
	}
}
