use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use srcq::{dns, Host, PlayerList, QueryConfig, QueryKind, Response, ServerInfo};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QueryCommand {
    Info,
    Players,
}

impl From<QueryCommand> for QueryKind {
    fn from(v: QueryCommand) -> Self {
        match v {
            QueryCommand::Info => QueryKind::Info,
            QueryCommand::Players => QueryKind::Players,
        }
    }
}

/// Query a Source engine game server.
#[derive(Debug, Parser)]
#[command(name = "srcq", version)]
struct Cli {
    /// Server IP address or host name
    host: String,
    port: u16,
    command: QueryCommand,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// JSON file with query settings
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    timeout_ms: Option<u64>,
    #[arg(long)]
    challenge_limit: Option<usize>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_info(info: &ServerInfo) {
    println!("server_name: {}", info.server_name);
    println!("map: {}", info.map_name);
    println!("folder: {}", info.folder_name);
    println!("game: {}", info.game_name);
    println!(
        "game_id: {} ({})",
        info.game_id(),
        info.game_title().unwrap_or("Unknown")
    );
    println!(
        "players: {}/{} ({} bots)",
        info.current_players, info.max_players, info.bot_count
    );
    println!("server_type: {}", info.server_type);
    println!("environment: {}", info.environment);
    println!(
        "visibility: {}",
        if info.is_private { "Private" } else { "Public" }
    );
    println!(
        "vac: {}",
        if info.vac_secured { "Secured" } else { "Unsecured" }
    );
    if let Some(ship) = &info.ship_extension {
        println!("game_mode: {}", ship.game_mode);
        println!("game_map: {}", ship.map_code);
        println!("game_duration: {}", ship.duration);
    }
    println!("version: {}", info.version_string);

    let extra = &info.extra;
    if let Some(port) = extra.port {
        println!("port: {}", port);
    }
    if let Some(steam_id) = extra.server_steam_id {
        println!("steam_id: {}", steam_id);
    }
    if let Some(tv) = &extra.source_tv {
        println!("sourcetv: {} (port {})", tv.name, tv.port);
    }
    if let Some(keywords) = &extra.keywords {
        println!("keywords: {}", keywords);
    }
}

fn print_players(players: &PlayerList) {
    println!("player_count: {}", players.len());
    for player in players.iter() {
        let time = player.connected_time();
        println!(
            "{:<25} - {:<4} - {}:{:02}:{:02}",
            player.name,
            player.score,
            time.num_hours(),
            time.num_minutes() % 60,
            time.num_seconds() % 60
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => QueryConfig::load(path)?,
        None => QueryConfig::default(),
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if let Some(limit) = cli.challenge_limit {
        config.challenge_loop_limit = limit;
    }
    debug!("Using {:?}", config);

    let addr = dns::resolve_host(Host::from((cli.host.as_str(), cli.port))).await?;
    let response = srcq::simple_query(addr, cli.command.into(), &config)
        .await
        .with_context(|| format!("Query to {} failed", addr))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match &response {
        Response::Info(info) => print_info(info),
        Response::Players(players) => print_players(players),
    }

    Ok(())
}
