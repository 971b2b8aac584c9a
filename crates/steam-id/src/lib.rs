// Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
//
// This library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this repository.  If not, see <https://www.gnu.org/licenses/>.

#![doc = include_str!("../README.md")]

#[macro_use(Display, Binary, LowerHex, UpperHex, Octal)]
extern crate derive_more as _;

#[macro_use]
extern crate thiserror;

#[macro_use]
mod macros;

pub use self::{
	account_instance::AccountInstance,
	account_type::AccountType,
	account_universe::AccountUniverse,
	errors::{
		BoxError,
		FriendCodeError,
		NotNumeric,
		OutOfRange,
		ParseInviteCodeError,
		ParseSteamIdError,
		ResolveUrlError,
		WrongAccountType,
	},
	field::Field,
	resolve::{FnResolver, ResolveVanity, VanityKind, resolver_fn},
};
use std::{fmt, str::FromStr};

mod account_instance;
mod account_type;
mod account_universe;
mod errors;
mod field;
mod resolve;
mod steam2;
mod steam3;

pub mod friend_code;
pub mod invite_code;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(feature = "rand")]
mod rand_impls;

/// A [SteamID]
///
/// A transparent wrapper around the raw 64-bit value. Construction from a raw integer never
/// fails; use [`is_valid()`] to check whether the individual fields make sense.
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
/// [`is_valid()`]: SteamId::is_valid
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Binary, LowerHex, UpperHex, Octal)]
pub struct SteamId(u64);

/// Input accepted by the 64-bit constructors.
///
/// Integers and strings are kept apart so that strings can be validated strictly instead of
/// being coerced into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntOrString<'a>
{
	Int(u64),
	Str(&'a str),
}

impl SteamId
{
	/// Creates an empty (and therefore invalid) [`SteamId`] with all fields set to 0.
	pub const fn new() -> Self
	{
		Self(0)
	}

	/// Creates a [`SteamId`] from its raw 64-bit representation.
	///
	/// Any value is accepted, even if the fields would not pass [`set()`](Self::set)
	/// individually.
	pub const fn from_u64(value: u64) -> Self
	{
		Self(value)
	}

	/// Assembles a [`SteamId`] from its individual fields.
	pub const fn from_parts(
		universe: AccountUniverse,
		account_type: AccountType,
		instance: AccountInstance,
		account_id: u32,
	) -> Self
	{
		Self(
			((universe.raw() as u64) << 56)
				| ((account_type.raw() as u64) << 52)
				| ((instance.raw() as u64) << 32)
				| (account_id as u64),
		)
	}

	/// Returns the raw 64-bit representation of this [`SteamId`].
	pub const fn as_u64(&self) -> u64
	{
		self.0
	}

	/// Renders the raw 64-bit representation as a decimal string.
	pub fn to_u64_string(&self) -> String
	{
		self.0.to_string()
	}

	/// Returns the value stored in `field`.
	pub const fn get(&self, field: Field) -> u64
	{
		(self.0 >> field.shift()) & field.max()
	}

	/// Overwrites `field` with `value`.
	///
	/// Values that do not fit into the field are rejected rather than truncated.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::{Field, SteamId};
	///
	/// let mut steam_id = SteamId::new();
	///
	/// steam_id
	/// 	.set(Field::Universe, 1)?
	/// 	.set(Field::AccountType, 1)?
	/// 	.set(Field::Instance, 1)?
	/// 	.set(Field::AccountId, 24715681)?;
	///
	/// assert_eq!(steam_id.as_u64(), 76561197984981409);
	/// assert!(steam_id.set(Field::AccountType, 16).is_err());
	/// # Ok::<(), steam_id::OutOfRange>(())
	/// ```
	pub fn set(&mut self, field: Field, value: u64) -> Result<&mut Self, OutOfRange>
	{
		if value > field.max() {
			return Err(OutOfRange { field, value });
		}

		self.0 = (self.0 & !field.mask()) | (value << field.shift());

		Ok(self)
	}

	/// Returns the universe this SteamID belongs to.
	pub const fn account_universe(&self) -> AccountUniverse
	{
		AccountUniverse::from_bits(self.0)
	}

	/// Returns the type of account this SteamID belongs to.
	pub const fn account_type(&self) -> AccountType
	{
		AccountType::from_bits(self.0)
	}

	/// Returns the account instance.
	pub const fn account_instance(&self) -> AccountInstance
	{
		AccountInstance::from_bits(self.0)
	}

	/// Returns the 32-bit account id.
	pub const fn account_id(&self) -> u32
	{
		(self.0 & 0xFFFF_FFFF) as u32
	}

	/// Sets the universe.
	pub fn set_account_universe(&mut self, universe: AccountUniverse) -> &mut Self
	{
		self.replace(Field::Universe, u64::from(universe.raw()))
	}

	/// Sets the account type.
	pub fn set_account_type(&mut self, account_type: AccountType) -> &mut Self
	{
		self.replace(Field::AccountType, u64::from(account_type.raw()))
	}

	/// Sets the instance, including any chat flags.
	pub fn set_account_instance(&mut self, instance: AccountInstance) -> &mut Self
	{
		self.replace(Field::Instance, u64::from(instance.raw()))
	}

	/// Sets the 32-bit account id.
	pub fn set_account_id(&mut self, account_id: u32) -> &mut Self
	{
		self.replace(Field::AccountId, u64::from(account_id))
	}

	/// Replaces all fields with the ones from the given 64-bit value.
	///
	/// Strings must be strictly numeric: no sign, no leading zeros, no whitespace. `0` is
	/// rejected in either form.
	pub fn set_from_u64<'a>(
		&mut self,
		value: impl Into<IntOrString<'a>>,
	) -> Result<&mut Self, NotNumeric>
	{
		self.0 = value.into().to_u64()?;

		Ok(self)
	}

	/// Parses any supported representation.
	///
	/// Strings are tried in the legacy (`STEAM_X:Y:Z`), namespaced (`[U:1:N]`) and 64-bit
	/// formats, in that order. Integers must be positive.
	pub fn parse<'a>(value: impl Into<IntOrString<'a>>) -> Result<Self, ParseSteamIdError>
	{
		match value.into() {
			IntOrString::Int(0) => Err(ParseSteamIdError::InvalidFormat),
			IntOrString::Int(value) => Ok(Self(value)),
			IntOrString::Str(value) => value.parse(),
		}
	}

	/// Checks whether the fields form a SteamID Steam would actually hand out.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::{AccountInstance, AccountType, AccountUniverse, SteamId};
	///
	/// let mut steam_id = SteamId::new();
	/// assert!(!steam_id.is_valid());
	///
	/// steam_id
	/// 	.set_account_universe(AccountUniverse::PUBLIC)
	/// 	.set_account_type(AccountType::INDIVIDUAL)
	/// 	.set_account_instance(AccountInstance::DESKTOP)
	/// 	.set_account_id(1234);
	///
	/// assert!(steam_id.is_valid());
	/// ```
	pub fn is_valid(&self) -> bool
	{
		let account_type = self.account_type();

		if !account_type.is_known() || !self.account_universe().is_valid() {
			return false;
		}

		let account_id = self.account_id();
		let instance = self.account_instance();

		match account_type {
			AccountType::INDIVIDUAL => account_id != 0 && instance <= AccountInstance::WEB,
			AccountType::CLAN => account_id != 0 && instance == AccountInstance::ALL,
			AccountType::GAME_SERVER => account_id != 0,
			_ => true,
		}
	}

	/// Overwrites a field with a value that is known to fit.
	fn replace(&mut self, field: Field, value: u64) -> &mut Self
	{
		debug_assert!(value <= field.max(), "{field} value {value} does not fit");

		self.0 = (self.0 & !field.mask()) | (value << field.shift());
		self
	}
}

impl IntOrString<'_>
{
	/// Applies the strict 64-bit grammar (`^[1-9][0-9]{0,19}$` for strings, non-zero for
	/// integers).
	pub fn to_u64(self) -> Result<u64, NotNumeric>
	{
		match self {
			Self::Int(0) => Err(NotNumeric),
			Self::Int(value) => Ok(value),
			Self::Str(value) => parse_u64_strict(value),
		}
	}
}

impl From<u64> for IntOrString<'_>
{
	fn from(value: u64) -> Self
	{
		Self::Int(value)
	}
}

impl<'a> From<&'a str> for IntOrString<'a>
{
	fn from(value: &'a str) -> Self
	{
		Self::Str(value)
	}
}

impl<'a> From<&'a String> for IntOrString<'a>
{
	fn from(value: &'a String) -> Self
	{
		Self::Str(value.as_str())
	}
}

/// Parses a SteamID64 string without leading zeros or a sign.
pub(crate) fn parse_u64_strict(value: &str) -> Result<u64, NotNumeric>
{
	if !value.starts_with(|first: char| matches!(first, '1'..='9')) || !is_digits(value, 1..=20) {
		return Err(NotNumeric);
	}

	// 20 digits may still overflow
	value.parse::<u64>().map_err(|_| NotNumeric)
}

/// Checks that `value` consists of ASCII digits only and has a length in `len`.
pub(crate) fn is_digits(value: &str, len: std::ops::RangeInclusive<usize>) -> bool
{
	len.contains(&value.len()) && value.bytes().all(|byte| byte.is_ascii_digit())
}

impl fmt::Debug for SteamId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		if fmt.alternate() {
			fmt.debug_struct("SteamId")
				.field("universe", &self.account_universe())
				.field("account_type", &self.account_type())
				.field("instance", &self.account_instance())
				.field("account_id", &self.account_id())
				.finish()
		} else {
			write!(fmt, "SteamId({})", self.render_namespaced())
		}
	}
}

impl fmt::Display for SteamId
{
	/// Formats the raw 64-bit representation.
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, fmt)
	}
}

impl From<u64> for SteamId
{
	fn from(value: u64) -> Self
	{
		Self::from_u64(value)
	}
}

impl From<SteamId> for u64
{
	fn from(steam_id: SteamId) -> Self
	{
		steam_id.as_u64()
	}
}

impl FromStr for SteamId
{
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		if let Some(steam_id) = steam2::parse(value)? {
			return Ok(steam_id);
		}

		if let Some(steam_id) = steam3::parse(value)? {
			return Ok(steam_id);
		}

		parse_u64_strict(value)
			.map(Self)
			.map_err(|_| ParseSteamIdError::InvalidFormat)
	}
}
