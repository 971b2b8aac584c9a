//! CS:GO friend codes.
//!
//! A friend code (`XXXXX-XXXX`) interleaves the nibbles of an account id with bits of an MD5
//! hash of that id, and encodes the result with a base-32 alphabet. The game also uses
//! "combined" codes (`XXXXX-XXXX-XXXXX-XXXX`) for party invites, where each half carries 16 bits
//! of the account id.

use md5::{Digest, Md5};

use crate::{
	AccountInstance,
	AccountType,
	AccountUniverse,
	FriendCodeError,
	SteamId,
	WrongAccountType,
};

const ALPHABET: [u8; 32] = *b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Mixed into the hashed value ("CSGO" in ASCII).
const HASH_SALT: u64 = 0x4353_474F_0000_0000;

/// Length of a single code, including the separator.
const CODE_LEN: usize = 10;

/// Position of the separator within a single code.
const SEPARATOR_IDX: usize = 5;

/// Encoded codes always start with this; it is not part of the rendered code.
const PREFIX_GROUPS: u32 = 4;

/// Encodes an account id as a friend code.
///
/// # Examples
///
/// ```
/// use steam_id::friend_code;
///
/// assert_eq!(friend_code::encode(12229257), "ALQF4-BYCA");
/// ```
pub fn encode(account_id: u32) -> String
{
	let hash = hash(account_id);
	let account_id = u64::from(account_id);
	let mut bits = 0_u64;

	for i in 0..8 {
		let nibble = (account_id >> (i * 4)) & 0xF;
		let hash_bit = u64::from((hash >> i) & 1);

		let appended = (bits << 4) | nibble;
		bits = ((bits >> 28) << 32) | appended;
		bits = ((bits >> 31) << 32) | (appended << 1) | hash_bit;
	}

	bits = bits.swap_bytes();

	let mut code = String::with_capacity(CODE_LEN);

	for group in PREFIX_GROUPS..13 {
		if group == 9 {
			code.push('-');
		}

		code.push(char::from(ALPHABET[((bits >> (group * 5)) & 0x1F) as usize]));
	}

	code
}

/// Decodes a single (`XXXXX-XXXX`) or combined (`XXXXX-XXXX-XXXXX-XXXX`) friend code.
///
/// Single codes always decode into an individual account in the public universe. Combined codes
/// decode into a clan if both halves are marked as such.
///
/// The hash bits are ignored, so codes produced by a different hash still decode.
pub fn decode(code: &str) -> Result<SteamId, FriendCodeError>
{
	match code.chars().count() {
		CODE_LEN => {
			let account_id = decode_single(code)?;

			Ok(individual(account_id as u32))
		}
		21 => decode_combined(code),
		_ => Err(FriendCodeError::InvalidFormat),
	}
}

/// Decodes the 32 id bits of a single code.
fn decode_single(code: &str) -> Result<u64, FriendCodeError>
{
	if code.chars().count() != CODE_LEN || code.chars().nth(SEPARATOR_IDX) != Some('-') {
		return Err(FriendCodeError::InvalidFormat);
	}

	let mut bits = 0_u64;

	for (group, character) in code
		.chars()
		.enumerate()
		.filter(|&(idx, _)| idx != SEPARATOR_IDX)
		.map(|(_, character)| character)
		.enumerate()
	{
		let value = ALPHABET
			.iter()
			.position(|&letter| char::from(letter) == character)
			.ok_or(FriendCodeError::MalformedInput { character })?;

		bits |= (value as u64) << ((group as u32 + PREFIX_GROUPS) * 5);
	}

	bits = bits.swap_bytes();

	let mut account_id = 0_u64;

	for _ in 0..8 {
		// skip the hash bit
		bits >>= 1;
		account_id = (account_id << 4) | (bits & 0xF);
		bits >>= 4;
	}

	Ok(account_id)
}

fn decode_combined(code: &str) -> Result<SteamId, FriendCodeError>
{
	let (left, right) = code
		.split_at_checked(CODE_LEN)
		.and_then(|(left, rest)| Some((left, rest.strip_prefix('-')?)))
		.ok_or(FriendCodeError::InvalidFormat)?;

	let left = decode_single(left)?;
	let right = decode_single(right)?;
	let account_id = ((left & 0xFFFF) | ((right & 0xFFFF) << 16)) as u32;

	let is_clan = [left, right]
		.into_iter()
		.all(|half| (half & 0xFFFF_0000) == 0x1_0000);

	if !is_clan {
		return Ok(individual(account_id));
	}

	Ok(SteamId::from_parts(
		AccountUniverse::PUBLIC,
		AccountType::CLAN,
		AccountInstance::DESKTOP,
		account_id,
	))
}

fn individual(account_id: u32) -> SteamId
{
	SteamId::from_parts(
		AccountUniverse::PUBLIC,
		AccountType::INDIVIDUAL,
		AccountInstance::DESKTOP,
		account_id,
	)
}

/// The first 4 bytes (little endian) of the MD5 digest of the salted account id.
fn hash(account_id: u32) -> u32
{
	let digest = Md5::digest((u64::from(account_id) | HASH_SALT).to_le_bytes());

	u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

impl SteamId
{
	/// Decodes a friend code into a [`SteamId`].
	///
	/// See [`friend_code::decode()`](decode) for details.
	pub fn from_friend_code(code: &str) -> Result<Self, FriendCodeError>
	{
		decode(code)
	}

	/// Replaces all fields with the ones decoded from a friend code.
	pub fn set_from_friend_code(&mut self, code: &str) -> Result<&mut Self, FriendCodeError>
	{
		*self = decode(code)?;

		Ok(self)
	}

	/// Renders the friend code for this [`SteamId`].
	///
	/// Only individual (or [invalid]) accounts have friend codes.
	///
	/// [invalid]: AccountType::INVALID
	pub fn render_friend_code(&self) -> Result<String, WrongAccountType>
	{
		match self.account_type() {
			AccountType::INDIVIDUAL | AccountType::INVALID => Ok(encode(self.account_id())),
			actual => Err(WrongAccountType { actual }),
		}
	}
}
