//! One full scrape run: resolve → collect → export → analyze.

use anyhow::Context;
use chrono::Utc;

use reelscope_analysis::{analyze, render_report};
use reelscope_core::format::group_thousands;
use reelscope_core::{caption, AppConfig, ProfileHandle};
use reelscope_export::{export_basename, export_csv, export_json};
use reelscope_scraper::{collect_videos, load_session_token, InstagramProvider, PostProvider};

use crate::Cli;

/// Caption preview length in per-record progress lines.
const PROGRESS_PREVIEW_CHARS: usize = 80;

pub(crate) async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    let session_token = match &cli.login {
        Some(name) => {
            let token = load_session_token(&config.session_dir, name)?;
            println!("[+] Loaded saved session for {name}");
            Some(token)
        }
        None => None,
    };

    let provider = InstagramProvider::new(&config, session_token)?;

    println!("[*] Fetching profile: @{}", cli.username);
    let profile = provider.resolve_profile(&cli.username).await?;
    tracing::debug!(
        username = %profile.username,
        user_id = %profile.user_id,
        media_count = profile.media_count,
        "profile resolved"
    );
    print_profile(&profile);

    if profile.is_private {
        anyhow::bail!(
            "profile @{} is private; re-run with --login and a session that follows it",
            cli.username
        );
    }

    println!("[*] Scanning posts for videos (target: {})...", cli.count);
    let outcome = collect_videos(&provider, &profile, cli.count, |ordinal, record| {
        println!(
            "  [{ordinal}/{}] {} | {} views | {} likes | {}",
            cli.count,
            record.date_readable,
            group_thousands(record.video_view_count.unwrap_or(0)),
            group_thousands(record.likes),
            caption::preview(&record.caption, PROGRESS_PREVIEW_CHARS),
        );
    })
    .await?;

    println!(
        "\n[+] Collected {} videos (skipped {} non-video posts)",
        outcome.records.len(),
        outcome.skipped_non_video
    );

    if outcome.records.is_empty() {
        println!("No videos found.");
        return Ok(());
    }

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!("failed to create output directory {}", cli.output_dir.display())
    })?;

    let now = Utc::now();
    let basename = export_basename(&cli.username, now);
    let json_path = cli.output_dir.join(format!("{basename}.json"));
    let csv_path = cli.output_dir.join(format!("{basename}.csv"));

    export_json(&outcome.records, now, &json_path)?;
    println!("[+] Exported JSON: {}", json_path.display());
    export_csv(&outcome.records, &csv_path)?;
    println!("[+] Exported CSV: {}", csv_path.display());

    if !cli.no_analysis {
        match analyze(&outcome.records) {
            Some(analysis) => print!("{}", render_report(&analysis)),
            None => println!("No videos to analyze."),
        }
    }

    Ok(())
}

fn print_profile(profile: &ProfileHandle) {
    println!("[+] Profile: {}", profile.full_name);
    println!("    Followers: {}", group_thousands(profile.followers));
    println!("    Following: {}", group_thousands(profile.followees));
    println!("    Posts: {}", group_thousands(profile.media_count));
    println!("    Bio: {}", profile.biography);
    if let Some(url) = &profile.external_url {
        println!("    External URL: {url}");
    }
    println!("    Is Private: {}", profile.is_private);
    println!();
}
