use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use custledger_core::{default_customers, seed_store, CoreError, CustomerStore, SortKey};
use custledger_storage_ephemeral::EphemeralStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod prompt;
mod render;
mod settings;
mod shell;

use crate::{
    prompt::Prompter,
    render::Table,
    settings::{load_config, AppConfig, Settings},
    shell::Shell,
};

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum SortField {
    Id,
    Name,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Id => SortKey::Id,
            SortField::Name => SortKey::Name,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "custledger", version, about = "In-memory customer record manager")]
struct Cli {
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu (default).
    Shell(ShellArgs),
    /// Print the default dataset and exit.
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
struct ShellArgs {
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,
    #[arg(long, overrides_with = "no_seed")]
    seed: bool,
    #[arg(long = "no-seed", overrides_with = "seed")]
    no_seed: bool,
}

impl ShellArgs {
    fn seed_override(&self) -> Option<bool> {
        match (self.seed, self.no_seed) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, value_enum)]
    sort: Option<SortField>,
    #[arg(long, default_value_t = false)]
    desc: bool,
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let cfg = load_config(cli.config.as_deref())?;
    match cli.command.unwrap_or_else(|| Commands::Shell(ShellArgs::default())) {
        Commands::Shell(args) => shell_cmd(args, &cfg)?,
        Commands::List(args) => list_cmd(args, &cfg)?,
    }
    Ok(())
}

fn build_store(settings: &Settings) -> Result<EphemeralStore> {
    let store = EphemeralStore::with_capacity(settings.capacity);
    if settings.seed_defaults {
        match seed_store(&store, default_customers()) {
            Ok(inserted) => info!(inserted, "seeded default customers"),
            Err(CoreError::CapacityExceeded(capacity)) => warn!(
                inserted = store.len(),
                capacity,
                "default dataset truncated to capacity"
            ),
            Err(e) => return Err(eyre!("seeding default customers failed: {}", e)),
        }
    }
    Ok(store)
}

fn shell_cmd(args: ShellArgs, cfg: &AppConfig) -> Result<()> {
    let settings = cfg.resolve(args.capacity, args.seed_override())?;
    info!(
        capacity = settings.capacity,
        seed = settings.seed_defaults,
        "starting shell"
    );
    let store = build_store(&settings)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    let mut shell = Shell::new(&store, prompter, Table::new(settings.address_width));
    shell.run()?;
    Ok(())
}

fn list_cmd(args: ListArgs, cfg: &AppConfig) -> Result<()> {
    let settings = cfg.resolve(None, Some(true))?;
    let store = build_store(&settings)?;
    let customers = match args.sort {
        Some(field) => store.sorted(field.into(), !args.desc),
        None => store.all(),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&customers)?);
    } else {
        println!("{}", Table::new(settings.address_width).render(&customers));
    }
    Ok(())
}
