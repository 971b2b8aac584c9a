//! Error types used by this crate.

use crate::{AccountType, Field};

/// Type-erased error returned by a [vanity resolver].
///
/// [vanity resolver]: crate::ResolveVanity
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A value did not fit into the bits reserved for its [`Field`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is out of range for the {field} field (max {max})", max = .field.max())]
pub struct OutOfRange
{
	/// The field that was being written.
	pub field: Field,

	/// The rejected value.
	pub value: u64,
}

/// A 64-bit SteamID was expected, but the input was not a positive integer.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("SteamID64 must be a positive integer without sign or leading zeros")]
pub struct NotNumeric;

/// An operation is only defined for individual accounts.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("this can only be used on individual SteamIDs, but the account type is {actual}")]
pub struct WrongAccountType
{
	/// The account type of the SteamID the operation was attempted on.
	pub actual: AccountType,
}

/// Errors returned by [`SteamId`]'s [`FromStr`] implementation and the other text parsers.
///
/// [`SteamId`]: crate::SteamId
/// [`FromStr`]: std::str::FromStr
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSteamIdError
{
	/// The string did not match any known format.
	#[error("unrecognized SteamID format")]
	InvalidFormat,

	/// The account number segment does not fit into 32 bits.
	#[error("account id exceeds the maximum unsigned 32-bit integer")]
	Overflow,

	/// An explicit instance segment was too large.
	#[error(transparent)]
	OutOfRange(#[from] OutOfRange),
}

/// Errors returned when decoding [invite codes].
///
/// [invite codes]: crate::invite_code
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseInviteCodeError
{
	/// The decoded value does not fit into a 32-bit account id.
	#[error("invite code exceeds the maximum unsigned 32-bit integer")]
	Overflow,
}

/// Errors returned when decoding [CS:GO friend codes].
///
/// [CS:GO friend codes]: crate::friend_code
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FriendCodeError
{
	/// Wrong length, or a `-` separator is missing.
	#[error("given input is not a valid CS:GO code")]
	InvalidFormat,

	/// A character outside of the friend code alphabet was encountered.
	#[error("given input is malformed: unexpected character `{character}`")]
	MalformedInput
	{
		/// The offending character.
		character: char,
	},
}

/// Errors returned by [`SteamId::from_url()`].
///
/// [`SteamId::from_url()`]: crate::SteamId::from_url
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ResolveUrlError
{
	/// Vanity names are between 2 and 32 characters long.
	#[error("vanity name has bad length: expected 2 to 32 characters but got {len}")]
	BadLength
	{
		/// The length of the rejected name.
		len: usize,
	},

	/// The resolver did not find a match.
	#[error("vanity name `{name}` does not resolve to any SteamID")]
	NotFound
	{
		/// The name that was looked up.
		name: String,
	},

	/// The resolver itself failed.
	#[error("failed to resolve vanity name")]
	Resolver(#[source] BoxError),

	/// The token of an invite URL could not be decoded.
	#[error(transparent)]
	InviteCode(#[from] ParseInviteCodeError),

	/// The extracted (or resolved) value is not a valid SteamID.
	#[error(transparent)]
	Parse(#[from] ParseSteamIdError),
}
