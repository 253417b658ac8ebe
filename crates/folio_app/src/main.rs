//! folio - render, validate and exercise the portfolio from the command line

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_app::integrations::{
    NowPlayingPoller, RecordingSink, ScriptedSource, TracingSender, TracingSink, Track,
};
use folio_app::{AppConfig, PortfolioApp};
use folio_core::{InputEvent, Point, Rect, Size, Viewport};
use folio_layout::Content;
use folio_theme::{Section, SectionSupport, ThemeId, ThemeRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Themeable portfolio renderer", version)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered themes
    Themes,
    /// Render the page for one theme
    Render {
        /// Theme id; defaults to the configured theme
        #[arg(long)]
        theme: Option<ThemeId>,
        /// Render as a constrained, touch viewport
        #[arg(long)]
        mobile: bool,
        #[arg(long)]
        width: Option<f32>,
        #[arg(long)]
        height: Option<f32>,
        #[arg(long, value_enum, default_value_t = Format::Outline)]
        format: Format,
    },
    /// Validate every theme, the content and the configuration
    Validate,
    /// Run a scripted session and print the analytics it produces
    Simulate {
        #[arg(long)]
        theme: Option<ThemeId>,
        #[arg(long)]
        mobile: bool,
        /// Idle time at the end of the session
        #[arg(long, default_value_t = 35_000)]
        idle_ms: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Outline,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    config.apply_env().context("applying environment overrides")?;

    match cli.command {
        Commands::Themes => list_themes(),
        Commands::Render {
            theme,
            mobile,
            width,
            height,
            format,
        } => {
            if let Some(theme) = theme {
                config.default_theme = theme;
            }
            let viewport = viewport(mobile, width, height);
            render(config, viewport, format)
        }
        Commands::Validate => validate(&config),
        Commands::Simulate {
            theme,
            mobile,
            idle_ms,
        } => {
            if let Some(theme) = theme {
                config.default_theme = theme;
            }
            simulate(config, viewport(mobile, None, None), idle_ms).await
        }
    }
}

fn load_content(config: &AppConfig) -> Result<Arc<Content>> {
    let content = match &config.content_path {
        Some(path) => {
            Content::load(path).with_context(|| format!("loading content from {}", path.display()))?
        }
        None => Content::embedded().context("parsing bundled content")?,
    };
    Ok(Arc::new(content))
}

fn viewport(mobile: bool, width: Option<f32>, height: Option<f32>) -> Viewport {
    let base = if mobile {
        Viewport::new(390.0, 844.0).with_touch_points(5)
    } else {
        Viewport::default()
    };
    Viewport {
        width: width.unwrap_or(base.width),
        height: height.unwrap_or(base.height),
        ..base
    }
}

fn list_themes() -> Result<()> {
    for theme in ThemeRegistry::global().iter() {
        let placeholders: Vec<&str> = Section::all()
            .iter()
            .filter(|&&s| matches!(theme.sections.support(s), SectionSupport::Placeholder { .. }))
            .map(|s| s.id())
            .collect();
        let coverage = if placeholders.is_empty() {
            "all sections".to_string()
        } else {
            format!("placeholders: {}", placeholders.join(", "))
        };
        println!(
            "{:<14} {:<16} background={:<14} {}",
            theme.id.id(),
            theme.name,
            theme.background.name(),
            coverage
        );
    }
    Ok(())
}

fn render(config: AppConfig, viewport: Viewport, format: Format) -> Result<()> {
    let content = load_content(&config)?;
    let sink = TracingSink::new(config.analytics.measurement_id.clone());
    let app = PortfolioApp::new(config, content, Box::new(sink)).with_viewport(viewport);
    let tree = app.render();

    match format {
        Format::Outline => print!("{}", tree.to_outline()),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&tree).context("serializing render tree")?
        ),
    }
    Ok(())
}

fn validate(config: &AppConfig) -> Result<()> {
    config.validate().context("invalid configuration")?;

    let mut failed = false;
    if let Err(errors) = ThemeRegistry::global().validate() {
        for error in errors {
            eprintln!("error: {error}");
        }
        failed = true;
    }
    match load_content(config) {
        Ok(content) => println!("content ok: {} links, {} artworks", content.links.len(), content.artworks.len()),
        Err(err) => {
            eprintln!("error: {err:#}");
            failed = true;
        }
    }

    if failed {
        bail!("validation failed");
    }
    println!("{} themes ok", ThemeId::all().len());
    Ok(())
}

async fn simulate(config: AppConfig, viewport: Viewport, idle_ms: u64) -> Result<()> {
    let content = load_content(&config)?;
    let sink = RecordingSink::new();
    let mut app = PortfolioApp::new(config, content, Box::new(sink.clone())).with_viewport(viewport);
    app.set_content_height(viewport.height * 5.0);
    app.start();
    app.mount_card(Rect::new(480.0, 120.0, 480.0, 640.0), Size::new(480.0, 640.0));

    for step in 0..10u8 {
        let x = 500.0 + f32::from(step) * 40.0;
        app.handle(&InputEvent::PointerMove {
            position: Point::new(x, 300.0),
            movement: Point::new(40.0, 0.0),
        });
        app.advance(16);
    }
    app.handle(&InputEvent::PointerLeave);

    app.click_theme(ThemeId::Minimalism);
    app.advance(1_000);
    app.click_theme(ThemeId::Synthwave);

    let scrollable = viewport.height * 4.0;
    for depth in [0.26, 0.1, 0.3, 0.8, 0.5] {
        app.handle(&InputEvent::Scroll {
            offset_y: scrollable * depth,
        });
        app.advance(500);
    }

    if app.config().now_playing.enabled {
        let track = Track {
            name: "Nightcall".into(),
            artist: "Kavinsky".into(),
            album: "OutRun".into(),
            album_image_url: String::new(),
            song_url: "#".into(),
            is_playing: true,
            progress_ms: 30_000,
            duration_ms: 258_000,
        };
        let source = ScriptedSource::new([Ok(Some(track)), Ok(None)]);
        let interval = Duration::from_millis(app.config().now_playing.poll_interval_ms);
        let poller = NowPlayingPoller::spawn(Arc::new(source), interval);
        let mut rx = poller.subscribe();
        app.attach_now_playing(poller.subscribe());
        rx.changed().await.context("now playing poller stopped")?;
        app.advance(0);
    }

    app.set_email("visitor@example.com");
    app.set_message("Hello from the simulator");
    let status = app.submit_contact(&TracingSender).await;

    app.advance(idle_ms);

    for event in sink.take() {
        println!(
            "{}",
            serde_json::to_string(&event).context("serializing analytics event")?
        );
    }
    println!(
        "theme={} key={} playing={} form={:?} pending_timers={}",
        app.active_theme(),
        app.remount_key(),
        app.is_playing(),
        status,
        app.scheduler().pending()
    );
    Ok(())
}
