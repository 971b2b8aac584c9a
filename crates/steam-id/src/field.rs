/// The four bit fields a [`SteamId`] is made of.
///
/// From the most to the least significant bits:
///
/// | Field | Bits | Width |
/// |---|---|---|
/// | [`Universe`] | 63–56 | 8 |
/// | [`AccountType`] | 55–52 | 4 |
/// | [`Instance`] | 51–32 | 20 |
/// | [`AccountId`] | 31–0 | 32 |
///
/// [`SteamId`]: crate::SteamId
/// [`Universe`]: Field::Universe
/// [`AccountType`]: Field::AccountType
/// [`Instance`]: Field::Instance
/// [`AccountId`]: Field::AccountId
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field
{
	#[display("universe")]
	Universe,

	#[display("account type")]
	AccountType,

	#[display("instance")]
	Instance,

	#[display("account id")]
	AccountId,
}

impl Field
{
	/// All fields, most significant first.
	pub const ALL: [Self; 4] = [Self::Universe, Self::AccountType, Self::Instance, Self::AccountId];

	/// Position of the field's least significant bit.
	pub const fn shift(self) -> u32
	{
		match self {
			Self::Universe => 56,
			Self::AccountType => 52,
			Self::Instance => 32,
			Self::AccountId => 0,
		}
	}

	/// Number of bits reserved for the field.
	pub const fn width(self) -> u32
	{
		match self {
			Self::Universe => 8,
			Self::AccountType => 4,
			Self::Instance => 20,
			Self::AccountId => 32,
		}
	}

	/// The largest value the field can hold.
	pub const fn max(self) -> u64
	{
		(1_u64 << self.width()) - 1
	}

	/// The field's bits within a raw 64-bit SteamID.
	pub const fn mask(self) -> u64
	{
		self.max() << self.shift()
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn fields_do_not_overlap()
	{
		let combined = Field::ALL.iter().fold(0_u64, |acc, field| {
			assert_eq!(acc & field.mask(), 0, "{field} overlaps with another field");
			acc | field.mask()
		});

		assert_eq!(combined, u64::MAX);
	}

	#[test]
	fn max_values()
	{
		assert_eq!(Field::Universe.max(), 0xFF);
		assert_eq!(Field::AccountType.max(), 0xF);
		assert_eq!(Field::Instance.max(), 0xF_FFFF);
		assert_eq!(Field::AccountId.max(), 0xFFFF_FFFF);
	}
}
