use {
	crate::SteamId,
	serde::{
		de::{self, Deserialize, Deserializer},
		ser::{Serialize, Serializer},
	},
	std::fmt,
};

impl Serialize for SteamId
{
	/// Serializes as the raw 64-bit integer.
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_u64().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for SteamId
{
	/// Accepts a positive integer, or any string [`FromStr`] understands.
	///
	/// [`FromStr`]: std::str::FromStr
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct CatchallVisitor;

		impl de::Visitor<'_> for CatchallVisitor
		{
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
			{
				fmt.write_str("a SteamID")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				SteamId::parse(value).map_err(E::custom)
			}

			fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				u64::try_from(value)
					.map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
					.and_then(|value| self.visit_u64(value))
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				value.parse::<SteamId>().map_err(E::custom)
			}
		}

		deserializer.deserialize_any(CatchallVisitor)
	}
}

impl SteamId
{
	/// Serializes using a stringified version of the 64-bit format.
	///
	/// Useful for formats (like JSON consumed by JavaScript) that can't represent every `u64`.
	pub fn serialize_u64_stringified<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}

	/// Serializes using the legacy `STEAM_X:Y:Z` format.
	pub fn serialize_legacy<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.render_legacy().serialize(serializer)
	}

	/// Serializes using the namespaced `[T:U:N]` format.
	pub fn serialize_namespaced<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.render_namespaced().serialize(serializer)
	}
}
