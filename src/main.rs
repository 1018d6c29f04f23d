use clap::{Parser, Subcommand};
use exoperf::application::performance_controller::{PerformanceController, RequestState};
use exoperf::config::Config;
use exoperf::domain::mission::Mission;
use exoperf::domain::ports::ExoplanetCatalog;
use exoperf::infrastructure::ExoApiService;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "exoperf", about = "Exoplanet model performance inspector")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show evaluation metrics for a mission's trained model
    Performance {
        /// Detection mission: kepler or tess
        #[arg(long, default_value = "kepler")]
        mission: String,
    },
    /// List the exoplanet catalog, optionally filtered by a search query
    Exoplanets {
        /// Free-text search query
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single exoplanet by id
    Exoplanet { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let service = Arc::new(ExoApiService::new(&config.api));

    match cli.command {
        Command::Performance { mission } => {
            let mission: Mission = mission.parse()?;
            show_performance(service, mission).await;
        }
        Command::Exoplanets { search } => {
            let planets = match search {
                Some(query) => service.search_exoplanets(&query).await?,
                None => service.list_exoplanets().await?,
            };
            for planet in &planets {
                println!("{:<14} {}", planet.id, planet.name);
            }
            println!("{} exoplanets", planets.len());
        }
        Command::Exoplanet { id } => {
            let planet = service.get_exoplanet(&id).await?;
            println!("Id:          {}", planet.id);
            println!("Name:        {}", planet.name);
            if let Some(mission) = planet.mission {
                println!("Mission:     {}", mission);
            }
            if let Some(disposition) = planet.disposition {
                println!("Disposition: {}", disposition);
            }
            if let Some(period) = planet.orbital_period_days {
                println!("Period:      {:.3} days", period);
            }
            if let Some(radius) = planet.radius_earth {
                println!("Radius:      {:.2} R⊕", radius);
            }
            if let Some(year) = planet.discovery_year {
                println!("Discovered:  {}", year);
            }
        }
    }

    Ok(())
}

/// Stand-in for the presentation consumer: drives the controller to
/// settlement and renders the outcome.
async fn show_performance(service: Arc<ExoApiService>, mission: Mission) {
    let controller = PerformanceController::new(service, mission);

    loop {
        match controller.state() {
            RequestState::Loading => tokio::time::sleep(Duration::from_millis(100)).await,
            RequestState::Success(metrics) => {
                println!("Mission:      {}", metrics.mission);
                println!("Precision:    {:.4}", metrics.precision);
                println!("Recall:       {:.4}", metrics.recall);
                println!("F1 score:     {:.4}", metrics.f1score);
                println!("Performance:  {:.1}%", metrics.performance);
                println!("ROC points:   {}", metrics.roc.len());
                println!("PR points:    {}", metrics.pr.len());
                break;
            }
            RequestState::Failure(message) => {
                eprintln!("Failed to load model performance: {}", message);
                eprintln!("Run the command again to retry.");
                std::process::exit(1);
            }
        }
    }
}
