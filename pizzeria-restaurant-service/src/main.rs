use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use pizzeria_restaurant_service::{database_url, run_migrations, seed, DieselRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Database location; falls back to `DATABASE_URL`, `DB_URI`, then `app.db`.
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations.
    Migrate,
    /// Migrate, then load sample restaurants and pizzas into an empty store.
    Seed,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let database_url = cli.database_url.unwrap_or_else(database_url);

    match &cli.command {
        Commands::Migrate => run_migrations(&database_url)?,
        Commands::Seed => {
            run_migrations(&database_url)?;
            let repo = DieselRepository::new(&database_url);
            if seed::seed(&repo)? {
                info!(%database_url, "seed complete");
            }
        }
    }

    Ok(())
}
