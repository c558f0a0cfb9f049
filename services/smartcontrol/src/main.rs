//! SmartControl+ CLI
//!
//! Hosts the web front end, or acts as a terminal remote against the backend.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use smartcontrol::remote::Remote;
use smartcontrol::session_file::FileSessionStore;
use smartcontrol::{build_remote, load_config, serve, Config};
use smartcontrol_core::{
    messages, ConnectField, Dashboard, DashboardEvent, DashboardStatus, LoginPhase,
    RemoteCommand,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "smartcontrol")]
#[command(about = "Control your TV from the terminal or host the SmartControl+ web app")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Session file (overrides config file)
    #[arg(long)]
    session: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info", value_parser = parse_log_level)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the web front end
    Serve {
        /// Listen port (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Directory holding the built front end (overrides config file)
        #[arg(long)]
        site_root: Option<PathBuf>,
    },
    /// Sign in and remember the session
    Login {
        #[arg(long, default_value = messages::DEMO_EMAIL)]
        email: String,

        #[arg(long, default_value = messages::DEMO_PASSWORD)]
        password: String,
    },
    #[command(flatten)]
    Dashboard(DashboardCommand),
}

/// Commands that need a signed-in session
#[derive(Subcommand)]
enum DashboardCommand {
    /// List your TVs
    Tvs,
    /// Ask the backend to look for a TV on the network
    Discover,
    /// Register a TV by address
    Connect {
        #[arg(long)]
        name: String,

        #[arg(long)]
        ip: String,

        #[arg(long)]
        brand: Option<String>,
    },
    /// Press a remote button (POWER, VOLUME_UP, MUTE, UP, ENTER, HOME, ...)
    Send {
        command: RemoteCommand,

        /// TV id to control instead of the first one
        #[arg(long)]
        tv: Option<String>,
    },
    /// Forget the stored session
    Logout,
}

fn parse_log_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid log level: {}. Use: trace, debug, info, warn, error",
            s
        )
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, api_url={:?}, session={:?}, log_level={:?}",
        args.config,
        args.api_url,
        args.session,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(api_url) = args.api_url {
        config.backend.api_url = api_url;
    }
    if let Some(session) = args.session {
        config.session.path = session;
    }

    match args.command {
        Command::Serve { port, site_root } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(site_root) = site_root {
                config.server.site_root = site_root;
            }
            tracing::info!("Starting SmartControl+ web host");
            tracing::info!("Site root: {:?}", config.server.site_root);
            serve(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Login { email, password } => {
            let remote = build_remote(&config)?;
            let view = remote.login(&email, &password).await?;
            Ok(match view.phase() {
                LoginPhase::SignedIn(user) => {
                    println!("Signed in as {}", user.email);
                    ExitCode::SUCCESS
                }
                _ => {
                    eprintln!("{}", view.error().unwrap_or(messages::LOGIN_REJECTED));
                    ExitCode::FAILURE
                }
            })
        }
        Command::Dashboard(command) => {
            let remote = build_remote(&config)?;
            run_dashboard(&remote, command).await
        }
    }
}

async fn run_dashboard(
    remote: &Remote<FileSessionStore>,
    command: DashboardCommand,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut dashboard = remote.open_dashboard().await?;
    if dashboard.status() == DashboardStatus::SignedOut {
        eprintln!("Not signed in. Run `smartcontrol login` first.");
        return Ok(ExitCode::FAILURE);
    }

    match command {
        DashboardCommand::Tvs => {}
        DashboardCommand::Discover => {
            remote
                .dispatch(&mut dashboard, DashboardEvent::Discover)
                .await?;
        }
        DashboardCommand::Connect { name, ip, brand } => {
            let events = [
                DashboardEvent::ToggleConnectForm,
                DashboardEvent::ConnectFieldChanged(ConnectField::Name, name),
                DashboardEvent::ConnectFieldChanged(ConnectField::Ip, ip),
                DashboardEvent::ConnectFieldChanged(
                    ConnectField::Brand,
                    brand.unwrap_or_default(),
                ),
                DashboardEvent::SubmitConnect,
            ];
            for event in events {
                remote.dispatch(&mut dashboard, event).await?;
            }
        }
        DashboardCommand::Send { command, tv } => {
            if let Some(tv) = tv {
                let Some(id) = dashboard.find_tv(&tv).map(|t| t.id.clone()) else {
                    eprintln!("No TV with id {}", tv);
                    print_tvs(&dashboard);
                    return Ok(ExitCode::FAILURE);
                };
                remote
                    .dispatch(&mut dashboard, DashboardEvent::SelectTv(id))
                    .await?;
            }
            remote
                .dispatch(&mut dashboard, DashboardEvent::SendCommand(command))
                .await?;
        }
        DashboardCommand::Logout => {
            remote.dispatch(&mut dashboard, DashboardEvent::Logout).await?;
            println!("Signed out");
            return Ok(ExitCode::SUCCESS);
        }
    }

    if let Some(notice) = dashboard.notice() {
        println!("{}", notice);
    }
    print_tvs(&dashboard);
    Ok(ExitCode::SUCCESS)
}

fn print_tvs(dashboard: &Dashboard) {
    if let Some(user) = dashboard.user() {
        println!("Minhas TVs ({})", user.email);
    }
    if dashboard.tvs().is_empty() {
        println!("  Nenhuma TV cadastrada");
        return;
    }
    for tv in dashboard.tvs() {
        let marker = if dashboard.is_selected(tv) { "*" } else { " " };
        let address = match tv.ip() {
            Some(ip) => format!("IP: {}", ip),
            None => "Não conectada".to_string(),
        };
        println!(
            "{} [{}] {} ({}) {}",
            marker,
            tv.id,
            tv.tv_name,
            tv.brand().unwrap_or("-"),
            address
        );
    }
}
