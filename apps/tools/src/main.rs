use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    CarouselConfig, CarouselController, CarouselEvent, PortfolioClient, ThemeStore,
    VisibilityEntry,
};
use shared::protocol::Collection;
use storage::{MemStorage, PortfolioStore};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a seeded collection as JSON.
    Dump { collection: CollectionArg },
    /// Print the CSS custom properties of a theme.
    ThemeCss {
        #[arg(long)]
        theme: Option<String>,
    },
    /// Fetch a collection from a running server.
    Fetch {
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        server_url: String,
        collection: CollectionArg,
    },
    /// Feed a comma separated script through a carousel and print the effects.
    /// Steps: next, prev, goto:N, settle:N[:FRACTION], swipe:DX
    Simulate {
        #[arg(long, default_value_t = 3)]
        slides: usize,
        #[arg(long, default_value_t = 50.0)]
        commit_threshold: f32,
        script: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CollectionArg {
    Experiences,
    Skills,
    ProjectCards,
    NewsItems,
    Projects,
    Themes,
}

impl From<CollectionArg> for Collection {
    fn from(value: CollectionArg) -> Self {
        match value {
            CollectionArg::Experiences => Collection::Experiences,
            CollectionArg::Skills => Collection::Skills,
            CollectionArg::ProjectCards => Collection::ProjectCards,
            CollectionArg::NewsItems => Collection::NewsItems,
            CollectionArg::Projects => Collection::Projects,
            CollectionArg::Themes => Collection::Themes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Dump { collection } => {
            let value = seeded_json(&MemStorage::seeded(), collection.into()).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Command::ThemeCss { theme } => {
            let store = ThemeStore::with_defaults()?;
            if let Some(name) = theme {
                store.set_theme(&name)?;
            }
            println!(":root {{");
            for (name, value) in store.css_variables()? {
                println!("  {name}: {value};");
            }
            println!("}}");
        }
        Command::Fetch {
            server_url,
            collection,
        } => {
            let client = PortfolioClient::new(server_url);
            let value = client
                .fetch_value(collection.into())
                .await
                .with_context(|| format!("failed to fetch from {}", client.server_url()))?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Command::Simulate {
            slides,
            commit_threshold,
            script,
        } => {
            let config = CarouselConfig {
                commit_threshold_px: commit_threshold,
                ..CarouselConfig::default()
            };
            let mut carousel = CarouselController::new(slides, config)?;
            for step in script.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                for event in parse_step(step)? {
                    let effects = carousel.apply(event);
                    println!("{step:<12} {effects:?}");
                }
                println!(
                    "{:<12} active={} pending={:?}",
                    "",
                    carousel.active_index(),
                    carousel.pending_target()
                );
            }
        }
    }

    Ok(())
}

async fn seeded_json(store: &MemStorage, collection: Collection) -> Result<serde_json::Value> {
    let value = match collection {
        Collection::Experiences => serde_json::to_value(store.experiences().await?)?,
        Collection::Skills => serde_json::to_value(store.skills().await?)?,
        Collection::ProjectCards => serde_json::to_value(store.project_cards().await?)?,
        Collection::NewsItems => serde_json::to_value(store.news_items().await?)?,
        Collection::Projects => serde_json::to_value(store.projects().await?)?,
        Collection::Themes => serde_json::to_value(store.themes().await?)?,
    };
    Ok(value)
}

fn parse_step(step: &str) -> Result<Vec<CarouselEvent>> {
    let mut parts = step.split(':');
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    let events = match (name, arg) {
        ("next", None) => vec![CarouselEvent::Next],
        ("prev", None) => vec![CarouselEvent::Prev],
        ("goto", Some(index)) => {
            let index: usize = index.parse()?;
            vec![CarouselEvent::GoTo(index)]
        }
        ("settle", Some(index)) => {
            let index: usize = index.parse()?;
            let fraction: f32 = match parts.next() {
                Some(raw) => raw.parse()?,
                None => 1.0,
            };
            vec![CarouselEvent::Visibility(vec![VisibilityEntry::new(
                index, fraction,
            )])]
        }
        ("swipe", Some(dx)) => {
            let dx: f32 = dx.parse()?;
            vec![
                CarouselEvent::GestureStart {
                    x: 0.0,
                    y: 0.0,
                    scroll_offset: 0.0,
                },
                CarouselEvent::GestureMove { x: dx, y: 0.0 },
                CarouselEvent::GestureEnd { x: dx, y: 0.0 },
            ]
        }
        _ => bail!("unknown simulation step '{step}'"),
    };
    Ok(events)
}
