use tracing::info;

use crate::error::{Error, Rejection, Result};
use crate::validation::dictionary::SpellChecker;
use crate::validation::rules::{is_original, is_possible, is_real};
use crate::words::WordPool;

/// Presentation-layer callbacks consumed by the session. Implementations
/// render state changes however they like; all methods default to no-ops.
pub trait GamePresenter {
    fn on_round_started(&mut self, target: &str) {
        let _ = target;
    }

    fn on_answer_accepted(&mut self, answer: &str, index: usize) {
        let _ = (answer, index);
    }

    fn on_answer_rejected(&mut self, rejection: &Rejection) {
        let _ = rejection;
    }
}

/// Presenter that ignores everything, for headless use
pub struct NoopPresenter;

impl GamePresenter for NoopPresenter {}

/// Outcome of a submission. Rejections are ordinary play results and are
/// carried here rather than in the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { answer: String, index: usize },
    Rejected(Rejection),
}

/// One round of play: the target word and the answers accepted so far,
/// newest first
#[derive(Debug, Clone)]
struct Round {
    target: String,
    answers: Vec<String>,
}

/// The game session: start-word pool, injected spell checker, and the
/// current round. Lives for the whole app run and can be restarted
/// indefinitely.
pub struct GameSession<C> {
    pool: WordPool,
    checker: C,
    locale: String,
    round: Option<Round>,
}

impl<C: SpellChecker> GameSession<C> {
    pub fn new(pool: WordPool, checker: C, locale: impl Into<String>) -> Self {
        Self {
            pool,
            checker,
            locale: locale.into(),
            round: None,
        }
    }

    /// Start (or restart) a round: pick a fresh target uniformly at random
    /// and clear the accepted answers.
    pub fn start_round(&mut self, presenter: &mut dyn GamePresenter) {
        let target = self.pool.pick(&mut rand::rng()).to_string();

        info!("Starting round with target '{}'", target);

        presenter.on_round_started(&target);
        self.round = Some(Round {
            target,
            answers: Vec::new(),
        });
    }

    /// Evaluate one submission against the round's rules.
    ///
    /// The input is trimmed, and compared case-insensitively against the
    /// target and the answer history; the trimmed original-case string is
    /// what gets stored on acceptance. The three rule checks run in order
    /// (possible, original, real) and stop at the first failure.
    ///
    /// Errors only when no round has been started yet.
    pub fn submit(
        &mut self,
        raw_answer: &str,
        presenter: &mut dyn GamePresenter,
    ) -> Result<Verdict> {
        let Self {
            round,
            checker,
            locale,
            ..
        } = self;
        let round = round.as_mut().ok_or(Error::NoActiveRound)?;

        let answer = raw_answer.trim();
        let folded = answer.to_lowercase();

        // Empty input would pass the letter check vacuously, so refuse it
        // up front.
        let rejection = if folded.is_empty() {
            Some(Rejection::NotReal(String::new()))
        } else if !is_possible(&folded, &round.target) {
            Some(Rejection::NotPossible {
                word: answer.to_string(),
                target: round.target.clone(),
            })
        } else if !is_original(&folded, &round.target, &round.answers) {
            Some(Rejection::AlreadyUsed(answer.to_string()))
        } else if !is_real(&folded, checker, locale) {
            Some(Rejection::NotReal(answer.to_string()))
        } else {
            None
        };

        if let Some(rejection) = rejection {
            info!("Rejected '{}': {}", answer, rejection);
            presenter.on_answer_rejected(&rejection);
            return Ok(Verdict::Rejected(rejection));
        }

        // Newest first
        round.answers.insert(0, answer.to_string());

        info!(
            "Accepted '{}' ({} answer(s) this round)",
            answer,
            round.answers.len()
        );

        presenter.on_answer_accepted(answer, 0);

        Ok(Verdict::Accepted {
            answer: answer.to_string(),
            index: 0,
        })
    }

    /// The current round's target word, if a round has started
    pub fn target(&self) -> Option<&str> {
        self.round.as_ref().map(|round| round.target.as_str())
    }

    /// Accepted answers for the current round, newest first
    pub fn answers(&self) -> &[String] {
        self.round
            .as_ref()
            .map(|round| round.answers.as_slice())
            .unwrap_or(&[])
    }

    pub fn answer_count(&self) -> usize {
        self.answers().len()
    }
}
