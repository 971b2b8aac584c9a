use std::path::PathBuf;

use color_eyre::{
	Section,
	eyre::{self, WrapErr},
};
use steam_vanity::{Config, WebApiResolver, steam_id::SteamId};
use tracing_subscriber::EnvFilter;

/// Resolves Steam Community URLs, vanity names and SteamIDs and prints every representation of
/// the result.
#[derive(Debug, clap::Parser)]
struct Args
{
	/// Path to a configuration file
	///
	/// Without one, the API key is read from `STEAM_WEB_API_KEY`.
	#[arg(long = "config")]
	config_path: Option<PathBuf>,

	/// URLs, vanity names, or SteamIDs in any format
	#[arg(required = true)]
	inputs: Vec<String>,
}

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.compact()
		.with_writer(std::io::stderr)
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let args = <Args as clap::Parser>::parse();

	let config = match args.config_path.as_deref() {
		Some(path) => Config::load_from_file(path)
			.wrap_err("failed to load configuration")
			.suggestion("check the `--config` path")?,
		None => Config::default().with_env_api_key(),
	};

	let resolver = WebApiResolver::new(&config).wrap_err("failed to initialize Steam API client")?;

	for input in &args.inputs {
		let steam_id = steam_vanity::resolve(input, &resolver)
			.wrap_err_with(|| format!("failed to resolve {input:?}"))?;

		print_steam_id(&steam_id);
	}

	Ok(())
}

#[expect(clippy::print_stdout, reason = "this is the program's output")]
fn print_steam_id(steam_id: &SteamId)
{
	println!("steamid64    {}", steam_id.to_u64_string());
	println!("legacy       {}", steam_id.render_legacy());
	println!("namespaced   {}", steam_id.render_namespaced());

	if let Ok(invite_code) = steam_id.render_invite_code() {
		println!("invite code  {invite_code}");
	}

	if let Ok(friend_code) = steam_id.render_friend_code() {
		println!("friend code  {friend_code}");
	}

	println!("valid        {}", steam_id.is_valid());
	println!();
}
