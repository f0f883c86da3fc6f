use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use silkworm::session::{GamePresenter, GameSession};
use silkworm::validation::WordListChecker;
use silkworm::words::{load_word_pool, WordPool};
use silkworm::{config, Rejection};

/// Renders game events on stdout. Maps each rejection reason to a
/// title/message pair, like the original app's alerts.
struct ConsolePresenter;

impl GamePresenter for ConsolePresenter {
    fn on_round_started(&mut self, target: &str) {
        println!();
        println!("=== New round ===");
        println!("Make words from: {target}");
    }

    fn on_answer_accepted(&mut self, answer: &str, _index: usize) {
        println!("+ {answer}");
    }

    fn on_answer_rejected(&mut self, rejection: &Rejection) {
        let title = match rejection {
            Rejection::NotPossible { .. } => "Word not possible",
            Rejection::AlreadyUsed(_) => "Word used already",
            Rejection::NotReal(_) => "Word not recognised",
        };
        println!("{title}: {rejection}");
    }
}

fn main() -> miette::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "silkworm=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting word game");

    let config = config::load_config();

    // Fallback policy: a missing or empty start-word file leaves us with the
    // single built-in word rather than no game at all.
    let pool = match load_word_pool(&config.word_list_path) {
        Ok(pool) => pool,
        Err(e) => {
            warn!(
                "Could not load start words from {}: {}; using the fallback word",
                config.word_list_path, e
            );
            WordPool::fallback()
        }
    };

    // No dictionary means no way to judge answers, so this one is fatal.
    let checker = WordListChecker::new(&config.dictionary_path)?;

    let mut session = GameSession::new(pool, checker, config.locale);
    let mut presenter = ConsolePresenter;

    session.start_round(&mut presenter);

    println!("Type a word to play it, !new for a new round, !quit to leave.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(silkworm::Error::Io)?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(silkworm::Error::Io)?;
        if read == 0 {
            break;
        }

        match line.trim() {
            "!quit" => break,
            "!new" => session.start_round(&mut presenter),
            "" => continue,
            answer => {
                session.submit(answer, &mut presenter)?;
            }
        }
    }

    info!("Goodbye");
    Ok(())
}
