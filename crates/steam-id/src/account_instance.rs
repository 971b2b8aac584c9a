use crate::{Field, OutOfRange};

/// Steam account instance bits
///
/// For chat accounts the top bits of the instance carry [flags](Self::CLAN_FLAG) describing what
/// kind of chat the SteamID refers to.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountInstance(u32);

impl AccountInstance
{
	pub const ALL: Self = Self(0);
	pub const DESKTOP: Self = Self(1);
	pub const CONSOLE: Self = Self(2);
	pub const WEB: Self = Self(4);

	/// The largest value that fits into the instance bits.
	pub const MAX: Self = Self(0xF_FFFF);

	/// Set on chat accounts belonging to a clan.
	pub const CLAN_FLAG: u32 = (Self::MAX.0 + 1) >> 1;

	/// Set on lobby chat accounts.
	pub const LOBBY_FLAG: u32 = (Self::MAX.0 + 1) >> 2;

	/// Set on matchmaking lobby chat accounts.
	pub const MMS_LOBBY_FLAG: u32 = (Self::MAX.0 + 1) >> 3;

	/// Creates a new [`AccountInstance`] from a raw value.
	///
	/// Fails if `raw` does not fit into 20 bits.
	pub const fn new(raw: u32) -> Result<Self, OutOfRange>
	{
		if raw <= Self::MAX.0 {
			Ok(Self(raw))
		} else {
			Err(OutOfRange { field: Field::Instance, value: raw as u64 })
		}
	}

	/// Extracts the account instance bits from a raw 64-bit SteamID.
	pub const fn from_bits(bits: u64) -> Self
	{
		Self(((bits >> 32) & 0xF_FFFF) as u32)
	}

	/// Returns the raw integer value.
	pub const fn raw(self) -> u32
	{
		self.0
	}

	/// Checks whether all bits of `flag` are set.
	pub const fn has_flag(self, flag: u32) -> bool
	{
		(self.0 & flag) == flag
	}
}

impl TryFrom<u32> for AccountInstance
{
	type Error = OutOfRange;

	fn try_from(raw: u32) -> Result<Self, Self::Error>
	{
		Self::new(raw)
	}
}

impl From<AccountInstance> for u32
{
	fn from(instance: AccountInstance) -> Self
	{
		instance.0
	}
}
