use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wp_post_viewer::components::{BaseLayout, PostListPage, Render};
use wp_post_viewer::config::Config;
use wp_post_viewer::terminal::{render_text, Command, HELP};
use wp_post_viewer::view::PostListView;
use wp_post_viewer::wp::WpClient;

#[derive(Parser)]
#[command(name = "wp-post-viewer")]
#[command(about = "Browse published WordPress posts page by page", long_about = None)]
#[command(version)]
struct Cli {
    /// Site origin, overrides WP_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Page to open first
    #[arg(long, default_value = "1")]
    page: u32,

    /// Print the page as an HTML document and exit
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    config.validate().context("Invalid configuration")?;

    info!(base_url = %config.base_url, per_page = config.posts_per_page, "Configuration loaded");

    let client = WpClient::new(&config).context("Failed to build HTTP client")?;
    let mut view = PostListView::with_per_page(client, config.posts_per_page);

    if cli.html {
        return print_html(&mut view, cli.page, &config.base_url).await;
    }

    interactive(&mut view, cli.page).await
}

async fn print_html(view: &mut PostListView<WpClient>, page: u32, base_url: &str) -> Result<()> {
    view.mount(page).await;

    let document = BaseLayout::new("WordPress Posts")
        .with_source_url(base_url)
        .render(PostListPage::new(view.state()).render());

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(document.into_string().as_bytes())
        .await
        .context("Failed to write HTML")?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    if let Some(message) = &view.state().last_error {
        anyhow::bail!("Page {page} could not be loaded: {message}");
    }
    Ok(())
}

async fn interactive(view: &mut PostListView<WpClient>, start_page: u32) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write_out(&mut stdout, &render_text(view.state())).await?;
    view.mount(start_page).await;

    loop {
        write_out(&mut stdout, &render_text(view.state())).await?;
        write_out(&mut stdout, &format!("{HELP}\n> ")).await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let Some(command) = Command::parse(&line) else {
            write_out(&mut stdout, &format!("{HELP}\n")).await?;
            continue;
        };

        let moved = match command {
            Command::Quit => break,
            Command::Prev => view.handle_prev().await,
            Command::Next => view.handle_next().await,
            Command::Reload => {
                view.reload().await;
                true
            }
        };

        if !moved {
            write_out(&mut stdout, "Already at the boundary.\n").await?;
        }
    }

    Ok(())
}

async fn write_out(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    stdout.flush().await.context("Failed to flush output")
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wp_post_viewer=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    // Logs go to stderr so they never mix with the rendered view on stdout
    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
