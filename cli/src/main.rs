//! Command-line access to Sunrise settings stored in SQLite

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sunrise_core::prelude::*;
use sunrise_core::settings::{NullCache, SettingsDefaults};
use sunrise_settings_adapter_sqlite::SettingsAdapterSqlite;

#[derive(Parser, Debug)]
#[command(name = "sunrise")]
#[command(about = "Inspect and edit Sunrise settings stored in SQLite")]
#[command(version)]
struct Cli {
	/// Directory holding settings.db
	#[arg(long, env = "SUNRISE_DB_DIR", default_value = "./data")]
	db_dir: PathBuf,

	/// Type of the owning entity, e.g. "User" (global scope when omitted)
	#[arg(long, requires = "target_id")]
	target_type: Option<String>,

	/// Id of the owning entity
	#[arg(long, requires = "target_type")]
	target_id: Option<i64>,

	/// JSON file with default values, a flat object of name -> value
	#[arg(long, env = "SUNRISE_DEFAULTS")]
	defaults: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print a setting (persisted value, or default)
	Get { name: String },
	/// Store a setting. VALUE is parsed as JSON, anything else is taken as a string
	Set { name: String, value: String },
	/// Shallow-merge a JSON object into a mapping-valued setting
	Merge { name: String, value: String },
	/// Print all settings merged with defaults
	List {
		/// Only names starting with this prefix
		prefix: Option<String>,
	},
	/// Remove a persisted setting
	Delete { name: String },
	/// Remove every persisted setting of the target
	Clear {
		/// Only names starting with this prefix
		#[arg(long)]
		prefix: Option<String>,
	},
}

impl Cli {
	fn target(&self) -> Target {
		match (&self.target_type, self.target_id) {
			(Some(typ), Some(id)) => Target::new(typ.as_str(), id),
			_ => Target::global(),
		}
	}
}

/// JSON if it parses, a plain string otherwise
fn parse_value(raw: &str) -> SettingValue {
	serde_json::from_str(raw).unwrap_or_else(|_| SettingValue::String(raw.to_string()))
}

async fn load_defaults(path: Option<&PathBuf>) -> SrResult<SettingsDefaults> {
	let mut builder = SettingsDefaults::builder();
	if let Some(path) = path {
		let json = tokio::fs::read_to_string(path).await?;
		builder.register_json(serde_json::from_str(&json)?)?;
	}
	Ok(builder.freeze())
}

async fn build_store(cli: &Cli) -> SrResult<SettingsStore> {
	let adapter = SettingsAdapterSqlite::new(&cli.db_dir).await?;
	let defaults = load_defaults(cli.defaults.as_ref()).await?;

	// One command per process, so values are never cached
	let config = SettingsConfig::builder()
		.defaults(defaults)
		.adapter(Arc::new(adapter))
		.cache(Arc::new(NullCache))
		.build()?;

	Ok(SettingsStore::scoped(config, cli.target()))
}

fn print_json(value: &impl serde::Serialize) -> SrResult<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

async fn run(cli: Cli) -> SrResult<()> {
	let store = build_store(&cli).await?;
	debug!("Using settings of {}", store.target());

	match cli.command {
		Command::Get { name } => print_json(&store.get(&name).await?)?,
		Command::Set { name, value } => print_json(&store.set(&name, parse_value(&value)).await?)?,
		Command::Merge { name, value } => {
			print_json(&store.merge(&name, parse_value(&value)).await?)?;
		}
		Command::List { prefix } => print_json(&store.all(prefix.as_deref()).await?)?,
		Command::Delete { name } => store.destroy(&name).await?,
		Command::Clear { prefix } => {
			let mut condition = SettingCondition::scoped(store.target().clone());
			if let Some(prefix) = prefix {
				condition = condition.with_prefix(prefix);
			}
			let deleted = store.delete_all(&condition).await?;
			println!("{} settings deleted", deleted);
		}
	}

	Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	match run(cli).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{}", err);
			eprintln!("error: {}", err);
			ExitCode::FAILURE
		}
	}
}


// vim: ts=4
