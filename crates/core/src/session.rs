//! Session state machine: guess evaluation, scoring, and run lifecycle.
//!
//! A [`Session`] owns the entity pool for one run of the game and moves
//! through three phases:
//!
//! ```text
//! Ready ⇄ Revealing → (Ready | GameOver)
//! ```
//!
//! [`Session::submit_guess`] evaluates a guess and locks the session while
//! the caller plays out its reveal animation; [`Session::settle`] then applies
//! the outcome. Splitting the transition in two keeps the timed choreography
//! out of the core: no entity moves until the caller says the reveal is done.

use rand::Rng;

use crate::entity::Entity;
use crate::selector::{SelectError, pick_index};

/// Session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Awaiting a guess; input unlocked.
    Ready,
    /// A guess is being revealed; input locked until [`Session::settle`].
    Revealing,
    /// The run ended on an incorrect guess; only restart remains.
    GameOver,
}

/// Direction of a guess about the hidden metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Guess {
    Higher,
    Lower,
}

/// Immediate result of evaluating a guess, before the reveal resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
}

/// Outcome of settling a reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settled {
    /// The guess was correct: the run continues with a fresh next entity.
    Advanced,
    /// The guess was incorrect: the run is over.
    Ended(RunSummary),
}

/// Final numbers for a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub final_score: u32,
    pub high_score: u32,
    pub is_new_high: bool,
}

/// Errors from [`Session::submit_guess`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// A reveal is in flight; the lock rejects concurrent guesses.
    #[error("a guess is already being revealed")]
    Locked,

    /// Guesses are only accepted in the ready phase.
    #[error("cannot guess in phase {phase}")]
    NotReady { phase: Phase },
}

/// Errors from settle/restart transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("expected phase {expected}, session is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error(transparent)]
    Select(#[from] SelectError),
}

/// One run of the guessing game.
///
/// Exactly one live session exists per play-through; the client constructs a
/// session after the catalog fetch succeeds and drives it from its event
/// loop. The pool is owned here and entries are addressed by index, so
/// `current`/`next` always refer into the same immutable data.
#[derive(Debug)]
pub struct Session {
    pool: Vec<Entity>,
    current: usize,
    next: usize,
    score: u32,
    high_score: u32,
    phase: Phase,
    locked: bool,
    /// Verdict recorded by `submit_guess`, consumed by `settle`.
    pending: Option<bool>,
}

impl Session {
    /// Starts a session over `pool` with a previously persisted high score.
    ///
    /// Draws the first two entities immediately; fails if the pool cannot
    /// supply two distinct names.
    pub fn new<R: Rng + ?Sized>(
        pool: Vec<Entity>,
        high_score: u32,
        rng: &mut R,
    ) -> Result<Self, SelectError> {
        let current = pick_index(&pool, None, rng)?;
        let next = pick_index(&pool, Some(current), rng)?;

        Ok(Self {
            pool,
            current,
            next,
            score: 0,
            high_score,
            phase: Phase::Ready,
            locked: false,
            pending: None,
        })
    }

    pub fn current(&self) -> &Entity {
        &self.pool[self.current]
    }

    /// The entity whose metric is hidden until the reveal.
    pub fn upcoming(&self) -> &Entity {
        &self.pool[self.next]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Evaluates a guess and enters the revealing phase.
    ///
    /// Ties always yield an incorrect verdict: when the metrics are equal,
    /// neither direction can win. The session stays locked until
    /// [`Session::settle`] runs, so at most one guess is in flight.
    pub fn submit_guess(&mut self, guess: Guess) -> Result<Verdict, GuessError> {
        if self.locked {
            return Err(GuessError::Locked);
        }
        if self.phase != Phase::Ready {
            return Err(GuessError::NotReady { phase: self.phase });
        }

        let current = self.pool[self.current].metric;
        let next = self.pool[self.next].metric;
        let correct = match guess {
            Guess::Higher => next > current,
            Guess::Lower => next < current,
        };

        self.phase = Phase::Revealing;
        self.locked = true;
        self.pending = Some(correct);

        Ok(Verdict { correct })
    }

    /// Applies the outcome of the reveal the caller just finished animating.
    ///
    /// On a correct guess the next entity becomes current, a fresh next is
    /// drawn, and the session unlocks. On an incorrect guess the high score
    /// is raised if beaten and the session moves to game over; the returned
    /// [`RunSummary`] tells the caller whether to persist a new high score.
    pub fn settle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Settled, SessionError> {
        if self.phase != Phase::Revealing {
            return Err(SessionError::WrongPhase {
                expected: Phase::Revealing,
                actual: self.phase,
            });
        }
        let correct = self.pending.take().unwrap_or(false);

        if correct {
            self.score += 1;
            self.current = self.next;
            self.next = pick_index(&self.pool, Some(self.current), rng)?;
            self.phase = Phase::Ready;
            self.locked = false;
            return Ok(Settled::Advanced);
        }

        let is_new_high = self.score > self.high_score;
        if is_new_high {
            self.high_score = self.score;
        }
        self.phase = Phase::GameOver;
        // The reveal cycle has resolved; from here the phase is the gate.
        self.locked = false;

        Ok(Settled::Ended(RunSummary {
            final_score: self.score,
            high_score: self.high_score,
            is_new_high,
        }))
    }

    /// Starts a fresh run after game over: score to zero, two new entities.
    ///
    /// The high score carries over; it never decreases for the lifetime of
    /// the session.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        if self.phase != Phase::GameOver {
            return Err(SessionError::WrongPhase {
                expected: Phase::GameOver,
                actual: self.phase,
            });
        }

        self.current = pick_index(&self.pool, None, rng)?;
        self.next = pick_index(&self.pool, Some(self.current), rng)?;
        self.score = 0;
        self.phase = Phase::Ready;
        self.locked = false;
        self.pending = None;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn pool() -> Vec<Entity> {
        vec![
            Entity::new("Atlantis", 100, "atlantis.png"),
            Entity::new("Borduria", 200, "borduria.png"),
            Entity::new("Carpathia", 50, "carpathia.png"),
        ]
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Builds a session pinned to a known current/next pair.
    fn session_with(current: &str, next: &str, high_score: u32) -> Session {
        let pool = pool();
        let current = pool.iter().position(|e| e.name == current).unwrap();
        let next = pool.iter().position(|e| e.name == next).unwrap();
        Session {
            pool,
            current,
            next,
            score: 0,
            high_score,
            phase: Phase::Ready,
            locked: false,
            pending: None,
        }
    }

    #[test]
    fn new_session_draws_distinct_entities() {
        let session = Session::new(pool(), 3, &mut rng()).unwrap();
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 3);
        assert!(!session.is_locked());
        assert_ne!(session.current().name, session.upcoming().name);
    }

    #[test]
    fn correct_higher_guess_advances() {
        // current=Atlantis(100), next=Borduria(200), guess Higher -> correct.
        let mut session = session_with("Atlantis", "Borduria", 0);

        let verdict = session.submit_guess(Guess::Higher).unwrap();
        assert!(verdict.correct);
        assert_eq!(session.phase(), Phase::Revealing);
        assert!(session.is_locked());

        let settled = session.settle(&mut rng()).unwrap();
        assert_eq!(settled, Settled::Advanced);
        assert_eq!(session.score(), 1);
        assert_eq!(session.current().name, "Borduria");
        assert_eq!(session.current().metric, 200);
        assert_eq!(session.phase(), Phase::Ready);
        assert!(!session.is_locked());
        assert_ne!(session.upcoming().name, "Borduria");
    }

    #[test]
    fn incorrect_guess_ends_the_run() {
        // current=Atlantis(100), next=Carpathia(50), guess Higher -> wrong.
        let mut session = session_with("Atlantis", "Carpathia", 0);

        let verdict = session.submit_guess(Guess::Higher).unwrap();
        assert!(!verdict.correct);

        let settled = session.settle(&mut rng()).unwrap();
        assert_eq!(
            settled,
            Settled::Ended(RunSummary {
                final_score: 0,
                high_score: 0,
                is_new_high: false,
            })
        );
        assert_eq!(session.phase(), Phase::GameOver);
    }

    #[test]
    fn high_score_updates_only_when_beaten() {
        // Score one correct round first, then lose with high_score=0.
        let mut session = session_with("Atlantis", "Borduria", 0);
        session.submit_guess(Guess::Higher).unwrap();
        session.settle(&mut rng()).unwrap();
        assert_eq!(session.score(), 1);

        let wrong = if session.upcoming().metric > session.current().metric {
            Guess::Lower
        } else {
            Guess::Higher
        };
        session.submit_guess(wrong).unwrap();
        let settled = session.settle(&mut rng()).unwrap();

        assert_eq!(
            settled,
            Settled::Ended(RunSummary {
                final_score: 1,
                high_score: 1,
                is_new_high: true,
            })
        );
        assert_eq!(session.high_score(), 1);
    }

    #[test]
    fn high_score_is_monotonic() {
        // Losing immediately with a persisted high score of 5 keeps it at 5.
        let mut session = session_with("Atlantis", "Carpathia", 5);
        session.submit_guess(Guess::Higher).unwrap();
        let settled = session.settle(&mut rng()).unwrap();

        assert_eq!(
            settled,
            Settled::Ended(RunSummary {
                final_score: 0,
                high_score: 5,
                is_new_high: false,
            })
        );
        assert_eq!(session.high_score(), 5);
    }

    #[test]
    fn equal_metrics_are_incorrect_both_ways() {
        let tie_pool = vec![
            Entity::new("Atlantis", 100, "atlantis.png"),
            Entity::new("Borduria", 100, "borduria.png"),
        ];

        for guess in [Guess::Higher, Guess::Lower] {
            let mut session = Session {
                pool: tie_pool.clone(),
                current: 0,
                next: 1,
                score: 0,
                high_score: 0,
                phase: Phase::Ready,
                locked: false,
                pending: None,
            };
            let verdict = session.submit_guess(guess).unwrap();
            assert!(!verdict.correct, "tie must be incorrect for {guess}");
        }
    }

    #[test]
    fn guesses_are_rejected_while_revealing() {
        let mut session = session_with("Atlantis", "Borduria", 0);
        session.submit_guess(Guess::Higher).unwrap();

        assert_eq!(
            session.submit_guess(Guess::Lower),
            Err(GuessError::Locked)
        );
    }

    #[test]
    fn guesses_are_rejected_after_game_over() {
        let mut session = session_with("Atlantis", "Carpathia", 0);
        session.submit_guess(Guess::Higher).unwrap();
        session.settle(&mut rng()).unwrap();

        assert_eq!(
            session.submit_guess(Guess::Higher),
            Err(GuessError::NotReady {
                phase: Phase::GameOver
            })
        );
    }

    #[test]
    fn settle_requires_a_pending_reveal() {
        let mut session = session_with("Atlantis", "Borduria", 0);
        let err = session.settle(&mut rng()).unwrap_err();
        assert_eq!(
            err,
            SessionError::WrongPhase {
                expected: Phase::Revealing,
                actual: Phase::Ready,
            }
        );
    }

    #[test]
    fn restart_resets_score_and_redraws() {
        let mut session = session_with("Atlantis", "Borduria", 0);
        session.submit_guess(Guess::Higher).unwrap();
        session.settle(&mut rng()).unwrap();

        let wrong = if session.upcoming().metric > session.current().metric {
            Guess::Lower
        } else {
            Guess::Higher
        };
        session.submit_guess(wrong).unwrap();
        session.settle(&mut rng()).unwrap();
        assert_eq!(session.phase(), Phase::GameOver);

        session.restart(&mut rng()).unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 1);
        assert_eq!(session.phase(), Phase::Ready);
        assert!(!session.is_locked());
        assert_ne!(session.current().name, session.upcoming().name);
    }

    #[test]
    fn restart_is_only_valid_from_game_over() {
        let mut session = session_with("Atlantis", "Borduria", 0);
        let err = session.restart(&mut rng()).unwrap_err();
        assert_eq!(
            err,
            SessionError::WrongPhase {
                expected: Phase::GameOver,
                actual: Phase::Ready,
            }
        );
    }
}
