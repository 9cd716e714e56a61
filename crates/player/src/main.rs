//! TmplBldr Player - composition root binary.
//!
//! Desktop usage: `tmplbldr-player [PAGE_URL] [--share]`. A `data` parameter
//! on the page URL is adopted as a shared template. `--share` prints a share
//! link for the working template.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tmplbldr_domain::SKILL_CAP;
use tmplbldr_player::TemplateStore;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use tmplbldr_player::config::PlayerConfig;
    use tmplbldr_player::infrastructure::platform::{create_platform, DesktopClipboardProvider};

    // Missing .env is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tmplbldr_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting TmplBldr Player");

    let mut share = false;
    let mut page_url = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--share" => share = true,
            _ => page_url = Some(arg),
        }
    }

    let mut config = PlayerConfig::from_env()?;
    if let Some(raw) = page_url {
        config = config.with_page_url(&raw)?;
    }
    tracing::debug!(storage = ?config.storage_path, page = %config.page_url, "Configuration loaded");

    let clipboard = DesktopClipboardProvider::default();
    let platform = create_platform(&config, clipboard.clone());
    let store = TemplateStore::open(platform);

    print_summary(&store);

    if share {
        store.share().await?;
        if let Some(link) = clipboard.contents() {
            println!();
            println!("{link}");
        }
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting TmplBldr Player");

    let platform = tmplbldr_player::infrastructure::platform::create_platform();
    let store = TemplateStore::open(platform);
    print_summary(&store);
}

fn print_summary(store: &TemplateStore) {
    let summary = store.summary();
    let name = match store.template_name().trim() {
        "" => "(unnamed)",
        name => name,
    };

    let mut lines = vec![
        format!("Template: {name}"),
        format!("{:<28} {:>8} {:>8} {:>9}", "Skill", "Real", "Boost", "Adjusted"),
    ];
    for skill in &summary.summaries {
        let boost = if skill.has_boost() {
            format!("+{}", skill.boost_value)
        } else {
            "-".to_string()
        };
        lines.push(format!(
            "{:<28} {:>8} {:>8} {:>9}",
            skill.name, skill.real_value, boost, skill.adjusted_value
        ));
    }
    lines.push(format!("Total real: {} / {}", summary.total_real_value, SKILL_CAP));
    lines.push(format!(
        "Remaining: {}{}",
        summary.remaining(),
        if summary.is_over_cap() { " (over cap)" } else { "" }
    ));

    let saved = store.saved_templates();
    if !saved.is_empty() {
        lines.push(format!("Saved templates ({}):", saved.len()));
        for entry in saved {
            let marker = if Some(entry.id) == store.current_id() { "*" } else { " " };
            lines.push(format!(
                " {marker} {} (updated {})",
                entry.name(),
                entry.updated_at.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", lines.join("\n"));

    #[cfg(target_arch = "wasm32")]
    tracing::info!("{}", lines.join("\n"));
}
