use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use reporter::{ReporterError, TagArg, export, report};
use serde_json::json;
use storage::{
    Database, SESSION_NAMESPACE, SessionStore,
    dto::player::{PlayerFilter, PlayerSort},
    models::{DataSnapshot, Position},
    repository::{file::JsonFileSessionStore, snapshot::PgDataSource},
    services::{
        browse, metrics,
        snapshot::load_snapshot,
        summary::{COMPOSITE_TOLERANCE, audit_composites, session_summary},
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scout-report")]
#[command(about = "Scouting metrics reports and cart exports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Directory holding saved cart sessions
    #[arg(long, env = "SCOUT_SESSIONS_DIR", default_value = "./sessions")]
    sessions_dir: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Players ranked by average PER-10
    Rank {
        #[arg(long)]
        position: Option<Position>,

        #[arg(long)]
        min_performance: Option<f64>,

        /// Name substring or jersey number (`12` or `#12`)
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = SortArg::Per10)]
        sort: SortArg,

        #[arg(long)]
        limit: Option<usize>,
    },
    /// Newest scores first
    Recent {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Session totals and leaderboard
    Summary,
    Compare {
        left: i64,
        right: i64,
    },
    /// Stored composites that disagree with their sub-metrics
    Audit {
        #[arg(long, default_value_t = COMPOSITE_TOLERANCE)]
        tolerance: f64,
    },
    /// Build a cart from player ids and write its delimited export
    Export {
        #[arg(long = "player", required = true)]
        players: Vec<i64>,

        /// Archetype for a player, as `<id>=<tag>`; repeatable
        #[arg(long = "tag")]
        tags: Vec<TagArg>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, default_value = ".")]
        output: PathBuf,

        /// Also save the cart as a session
        #[arg(long)]
        save: bool,
    },
    /// Saved cart sessions
    Sessions,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    #[value(name = "per-10")]
    Per10,
    AftersnapIq,
    Alphabetical,
}

impl From<SortArg> for PlayerSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Per10 => PlayerSort::Per10,
            SortArg::AftersnapIq => PlayerSort::AftersnapIq,
            SortArg::Alphabetical => PlayerSort::Alphabetical,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "scout_report={},reporter={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let session_store = JsonFileSessionStore::new(&cli.sessions_dir);

    match cli.command {
        Commands::Rank {
            position,
            min_performance,
            search,
            sort,
            limit,
        } => {
            let filter = PlayerFilter {
                position,
                min_performance,
                search,
                sort: sort.into(),
            };
            filter.validate().map_err(ReporterError::InvalidArgument)?;

            let snapshot = fetch_snapshot(cli.database_url.as_deref()).await?;
            let ranked = metrics::rank_players(&snapshot.players, &snapshot.scores);
            let mut players = browse::filter_players(ranked, &filter);
            if let Some(limit) = limit {
                players.truncate(limit);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&players)?);
            } else {
                print!("{}", report::format_ranking(&players));
            }
        }
        Commands::Recent { limit } => {
            let snapshot = fetch_snapshot(cli.database_url.as_deref()).await?;
            let scores = metrics::recent_scores(&snapshot.scores, limit);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                print!("{}", report::format_recent(&scores, &snapshot));
            }
        }
        Commands::Summary => {
            let snapshot = fetch_snapshot(cli.database_url.as_deref()).await?;
            let summary = session_summary(&snapshot.players, &snapshot.scores);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", report::format_summary(&summary));
            }
        }
        Commands::Compare { left, right } => {
            let snapshot = fetch_snapshot(cli.database_url.as_deref()).await?;
            let ranked = metrics::rank_players(&snapshot.players, &snapshot.scores);
            let missing = if ranked.iter().any(|p| p.id() == left) {
                right
            } else {
                left
            };
            let comparison = browse::compare_players(&ranked, left, right)
                .ok_or(ReporterError::PlayerNotFound(missing))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print!("{}", report::format_comparison(&comparison));
            }
        }
        Commands::Audit { tolerance } => {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ReporterError::InvalidArgument(
                    "tolerance must be a non-negative number".to_string(),
                )
                .into());
            }

            let snapshot = fetch_snapshot(cli.database_url.as_deref()).await?;
            let mismatches = audit_composites(&snapshot.scores, tolerance);
            if !mismatches.is_empty() {
                tracing::warn!("{} stored composite(s) out of tolerance", mismatches.len());
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&mismatches)?);
            } else {
                print!("{}", report::format_audit(&mismatches));
            }
        }
        Commands::Export {
            players,
            tags,
            name,
            output,
            save,
        } => {
            let snapshot = fetch_snapshot(cli.database_url.as_deref()).await?;
            let cart = export::build_cart(&snapshot, &players, &tags, name.as_deref())?;

            let today = chrono::Local::now().date_naive();
            let path = export::write_export(&cart, &output, today).await?;

            let session_id = if save {
                Some(cart.save_session(&session_store).await?)
            } else {
                None
            };

            if cli.json {
                let result = json!({
                    "path": path.display().to_string(),
                    "players": cart.len(),
                    "session_id": session_id,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Wrote {} player(s) to {}", cart.len(), path.display());
                if let Some(id) = session_id {
                    println!("Saved session {}", id);
                }
            }
        }
        Commands::Sessions => {
            let sessions = session_store.list(SESSION_NAMESPACE).await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else {
                print!("{}", report::format_sessions(&sessions));
            }
        }
    }

    Ok(())
}

async fn fetch_snapshot(database_url: Option<&str>) -> Result<DataSnapshot, ReporterError> {
    let database_url = database_url.ok_or_else(|| {
        ReporterError::InvalidArgument("DATABASE_URL is required for this command".to_string())
    })?;

    tracing::debug!("Connecting to database...");
    let db = Database::new(database_url).await?;
    let source = PgDataSource::new(db.pool().clone());

    Ok(load_snapshot(&source).await?)
}
