mod openlibrary;
mod storage;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use guess_shu_game::{
    DailyGame, EnrichmentData, GameSession, GameState, GuessOutcome, MetadataResolver, PuzzleDate,
    constants::MAX_GUESSES, cover_url, masked_title, obscurity_level, share_text,
};
use openlibrary::OpenLibraryResolver;
use storage::JsonFileStore;

/// How long to wait for a late metadata response before printing the final
/// screen without it.
const ENRICHMENT_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Parser)]
#[command(name = "guess-shu", version)]
#[command(about = "Guess the daily book from its obscured cover and masked title")]
struct Args {
    /// Play a specific date instead of today (YYYY-MM-DD)
    #[arg(long)]
    date: Option<PuzzleDate>,

    /// Path of the progress file (defaults to a dotfile in the home directory)
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Skip the metadata lookup and play fully offline
    #[arg(long)]
    offline: bool,

    /// Link appended to the share summary
    #[arg(long, default_value = "https://guess-shu.example/play")]
    share_link: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = args
        .save_file
        .map_or_else(JsonFileStore::at_default_path, JsonFileStore::new);
    let game = DailyGame::new(store);
    let date = args.date.unwrap_or_else(PuzzleDate::today);
    let mut session = game.start_session(date);

    // Fire-and-forget enrichment: it only ever writes to this slot, never to
    // the session, and the game never waits for it mid-play.
    let (tx, rx) = watch::channel::<Option<EnrichmentData>>(None);
    if !args.offline {
        let title = session.answer().title.to_string();
        tokio::spawn(async move {
            match OpenLibraryResolver::new() {
                Ok(resolver) => match resolver.lookup(&title).await {
                    Ok(data) => {
                        let _ = tx.send(data);
                    }
                    Err(err) => log::warn!("metadata lookup failed: {err}"),
                },
                Err(err) => log::warn!("metadata client unavailable: {err}"),
            }
        });
    }

    println!("{}", format!("Guess Shu ({date})").bold());
    println!("Because you need another book for your TBR.\n");

    if session.is_over() {
        println!("You already finished today's book. Come back tomorrow!\n");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !session.is_over() {
        render_board(&session, &rx);
        print!("{}", "Your guess> ".bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // Stdin closed; progress is already saved, just stop.
            println!();
            return Ok(());
        };

        match game.submit_guess(&mut session, &line) {
            GuessOutcome::Won => {
                println!("\n{}", "Correct!".green().bold());
            }
            GuessOutcome::Lost => {
                println!("\n{}", "Out of guesses.".red().bold());
            }
            GuessOutcome::Incorrect => {
                println!("{}\n", "Incorrect guess. Try again!".red());
            }
            GuessOutcome::Ignored => {
                println!("{}\n", "Type a book title to guess.".yellow());
            }
        }
    }

    render_final(&session, wait_for_enrichment(rx).await.as_ref());
    if let Some(text) = share_text(&session, &args.share_link) {
        println!("{}", "Share your result:".bold());
        println!("{text}");
    }
    Ok(())
}

/// Give a still-pending lookup a short grace period, then move on without it.
async fn wait_for_enrichment(
    mut rx: watch::Receiver<Option<EnrichmentData>>,
) -> Option<EnrichmentData> {
    if rx.borrow().is_none() {
        let _ = tokio::time::timeout(ENRICHMENT_GRACE, rx.changed()).await;
    }
    rx.borrow().clone()
}

fn render_board(session: &GameSession, rx: &watch::Receiver<Option<EnrichmentData>>) {
    let title = session.answer().title;
    println!("  Title:   {}", masked_title(title).bold());
    println!("  Cover:   {}", describe_cover(session, rx));
    println!("  Guesses: {}/{MAX_GUESSES}", session.guesses().len());
    for (i, guess) in session.guesses().iter().enumerate() {
        println!("    {}. {}", i + 1, guess.dimmed());
    }
}

fn describe_cover(
    session: &GameSession,
    rx: &watch::Receiver<Option<EnrichmentData>>,
) -> String {
    let level = obscurity_level(session);
    match rx.borrow().as_ref().and_then(|data| data.cover_id) {
        Some(id) => format!("{} (blur {level})", cover_url(id)),
        None => format!("[no cover art] (blur {level})"),
    }
}

fn render_final(session: &GameSession, enrichment: Option<&EnrichmentData>) {
    let answer = session.answer();
    match session.state() {
        GameState::Won => {
            let n = session.guesses().len();
            let noun = if n == 1 { "guess" } else { "guesses" };
            println!("You got it in {n} {noun}!\n");
        }
        GameState::Lost => println!("Better luck tomorrow!\n"),
        GameState::Playing => return,
    }

    println!("  Title:  {}", answer.title.bold());
    println!("  Author: {}", answer.author);
    if let Some(data) = enrichment {
        if let Some(year) = data.first_publish_year {
            println!("  Published: {year}");
        }
        // The original game labels subject tags as genre.
        let genre = data.subject.as_deref().unwrap_or("Literary Fiction");
        println!("  Genre: {genre}");
        if let Some(description) = &data.description {
            println!("  First line: {description}");
        }
    }
    println!();
}
