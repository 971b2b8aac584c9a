/// Steam account universe
///
/// Each universe is a self-contained Steam instance. The universe occupies the top 8 bits of a
/// [`SteamId`], so every `u8` is representable, but only [`PUBLIC`] through [`DEV`] are
/// considered valid.
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID#Universes_Available_for_Steam_Accounts>
///
/// [`SteamId`]: crate::SteamId
/// [`PUBLIC`]: AccountUniverse::PUBLIC
/// [`DEV`]: AccountUniverse::DEV
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountUniverse(u8);

impl AccountUniverse
{
	pub const INVALID: Self = Self(0);
	pub const PUBLIC: Self = Self(1);
	pub const BETA: Self = Self(2);
	pub const INTERNAL: Self = Self(3);
	pub const DEV: Self = Self(4);

	/// Wraps a raw universe number.
	pub const fn new(raw: u8) -> Self
	{
		Self(raw)
	}

	/// Extracts the universe bits from a raw 64-bit SteamID.
	pub const fn from_bits(bits: u64) -> Self
	{
		Self((bits >> 56) as u8)
	}

	/// Returns the raw integer value.
	pub const fn raw(self) -> u8
	{
		self.0
	}

	/// Whether this is one of the universes Steam actually uses.
	pub const fn is_valid(self) -> bool
	{
		matches!(self.0, 1..=4)
	}
}

impl From<u8> for AccountUniverse
{
	fn from(raw: u8) -> Self
	{
		Self(raw)
	}
}

impl From<AccountUniverse> for u8
{
	fn from(universe: AccountUniverse) -> Self
	{
		universe.0
	}
}
