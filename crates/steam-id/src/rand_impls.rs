use rand::{
	Rng,
	distr::{Distribution, StandardUniform},
};

use crate::{AccountInstance, AccountType, AccountUniverse, SteamId};

impl Distribution<SteamId> for StandardUniform
{
	/// Generates valid desktop SteamIDs of individual accounts in the public universe.
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SteamId
	{
		SteamId::from_parts(
			AccountUniverse::PUBLIC,
			AccountType::INDIVIDUAL,
			AccountInstance::DESKTOP,
			rng.random_range(1..=u32::MAX),
		)
	}
}

#[cfg(test)]
mod tests
{
	use rand::Rng;

	use crate::SteamId;

	#[test]
	fn random_ids_are_valid()
	{
		let mut rng = rand::rng();

		for _ in 0..1000 {
			let steam_id = rng.random::<SteamId>();

			assert!(steam_id.is_valid(), "{steam_id:?}");
			assert_eq!(steam_id.render_friend_code().map(|_| ()), Ok(()));
		}
	}
}
