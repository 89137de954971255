//! The flashcard game state machine.
//!
//! A `Game` holds the active user's record in memory and writes it back
//! through the session store after every change. Front ends call the
//! transition methods with user intents and read the view accessors to
//! render. Calls that do not apply to the current state are no-ops.

use std::fmt;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::ScoringRules;
use crate::cues::{Cues, SilentCues};
use crate::error::StoreError;
use crate::model::{UserRecord, WordEntry};
use crate::session::{LoginOutcome, SessionStore};
use crate::store::KeyValueStore;

/// Where the game is in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No user; nothing is displayed.
    LoggedOut,
    /// The word at `index` is shown and not yet solved.
    Presenting { index: usize },
    /// The turn is over, by a correct answer or by giving up.
    Solved { index: usize, correct: bool },
}

/// Message for the presentation layer after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    NewUser,
    WelcomeBack(String),
    Correct,
    Incorrect,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::NewUser => write!(f, "משתמש חדש נוצר! / New user created!"),
            Feedback::WelcomeBack(name) => write!(f, "ברוך שובך, {name}! / Welcome back!"),
            Feedback::Correct => write!(f, "מצוין! / Excellent!"),
            Feedback::Incorrect => write!(f, "לא בדיוק, נסה שוב / Not quite, try again"),
        }
    }
}

/// Result of checking an answer, with the point total afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { points: u32 },
    Incorrect { points: u32 },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }

    pub fn points(&self) -> u32 {
        match self {
            AnswerOutcome::Correct { points } | AnswerOutcome::Incorrect { points } => *points,
        }
    }
}

#[derive(Debug)]
struct ActiveUser {
    key: String,
    record: UserRecord,
}

/// A flashcard session over one catalog and one durable store.
pub struct Game<S> {
    session: SessionStore<S>,
    catalog: Catalog,
    scoring: ScoringRules,
    cues: Arc<dyn Cues>,
    state: GameState,
    user: Option<ActiveUser>,
    feedback: Option<Feedback>,
}

impl<S: KeyValueStore> Game<S> {
    /// A logged-out game with default scoring and silent cues.
    pub fn new(session: SessionStore<S>, catalog: Catalog) -> Self {
        Self {
            session,
            catalog,
            scoring: ScoringRules::default(),
            cues: Arc::new(SilentCues),
            state: GameState::LoggedOut,
            user: None,
            feedback: None,
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_cues(mut self, cues: Arc<dyn Cues>) -> Self {
        self.cues = cues;
        self
    }

    /// Pick up the last active user, if there is one and it still exists.
    ///
    /// Returns `true` when a user was resumed. A stale pointer leaves the
    /// game logged out and creates nothing.
    pub fn resume(&mut self) -> Result<bool, StoreError> {
        if self.state != GameState::LoggedOut {
            return Ok(false);
        }
        let Some(pointer) = self.session.last_active_user() else {
            return Ok(false);
        };
        let Some((key, _)) = self.session.find_user(&pointer) else {
            tracing::debug!("last active user '{pointer}' no longer exists");
            return Ok(false);
        };
        // The user exists, so this never creates; it backfills legacy records.
        let Some(outcome) = self.session.login(&key)? else {
            return Ok(false);
        };

        let name = outcome.record.display_name.clone();
        self.enter(outcome.key, outcome.record)?;
        self.feedback = Some(Feedback::WelcomeBack(name));
        tracing::info!("resumed session");
        Ok(true)
    }

    /// Log in by typed name and start presenting at the user's saved word.
    ///
    /// Only applies while logged out. Blank names return `None`. The
    /// returned record reflects any clamping of an out-of-range index.
    pub fn login(&mut self, raw_username: &str) -> Result<Option<LoginOutcome>, StoreError> {
        if self.state != GameState::LoggedOut {
            tracing::debug!("login ignored, a user is already active");
            return Ok(None);
        }
        let Some(mut outcome) = self.session.login(raw_username)? else {
            return Ok(None);
        };

        self.enter(outcome.key.clone(), outcome.record.clone())?;
        if let Some(user) = &self.user {
            outcome.record = user.record.clone();
        }
        self.feedback = Some(if outcome.is_new_user {
            Feedback::NewUser
        } else {
            Feedback::WelcomeBack(outcome.record.display_name.clone())
        });
        Ok(Some(outcome))
    }

    /// Check a typed answer against the current word.
    ///
    /// Only applies while presenting an unsolved word. A match solves the
    /// turn and awards points; a miss deducts the penalty (floored at zero)
    /// and leaves the turn open for another attempt.
    pub fn check_answer(&mut self, input: &str) -> Result<Option<AnswerOutcome>, StoreError> {
        let GameState::Presenting { index } = self.state else {
            return Ok(None);
        };
        let Some(user) = self.user.as_mut() else {
            return Ok(None);
        };
        let Some(word) = self.catalog.at(index) else {
            return Ok(None);
        };

        if word.accepts(input) {
            let points = user.record.points.saturating_add(self.scoring.points_correct);
            self.session.update_points(&user.key, points)?;
            user.record.points = points;
            self.state = GameState::Solved {
                index,
                correct: true,
            };
            self.feedback = Some(Feedback::Correct);
            self.cues.success();
            tracing::debug!("correct answer for word {index}, points now {points}");
            Ok(Some(AnswerOutcome::Correct { points }))
        } else {
            let points = user.record.points.saturating_sub(self.scoring.penalty);
            if points != user.record.points {
                self.session.update_points(&user.key, points)?;
                user.record.points = points;
            }
            self.feedback = Some(Feedback::Incorrect);
            self.cues.failure();
            tracing::debug!("wrong answer for word {index}, points now {points}");
            Ok(Some(AnswerOutcome::Incorrect { points }))
        }
    }

    /// Give up on the current word: reveal and pronounce it, no points change.
    ///
    /// Returns `false` when there is no unsolved word to give up on.
    pub fn give_up(&mut self) -> bool {
        let GameState::Presenting { index } = self.state else {
            return false;
        };
        let Some(word) = self.catalog.at(index) else {
            return false;
        };

        self.state = GameState::Solved {
            index,
            correct: false,
        };
        self.feedback = None;
        self.cues.pronounce(&word.target, self.catalog.target_language());
        true
    }

    /// Move to the next word after a solved turn, wrapping at the end.
    ///
    /// Returns `false` when the current turn is not solved.
    pub fn advance(&mut self) -> Result<bool, StoreError> {
        let GameState::Solved { index, .. } = self.state else {
            return Ok(false);
        };
        let Some(user) = self.user.as_mut() else {
            return Ok(false);
        };

        let next = self.catalog.next_index(index);
        self.session.update_progress(&user.key, next)?;
        user.record.progress_index = next;
        self.state = GameState::Presenting { index: next };
        self.feedback = None;
        Ok(true)
    }

    /// Pronounce the current word's target on request.
    pub fn speak(&self) -> bool {
        match self.current_word() {
            Some(word) => {
                self.cues.pronounce(&word.target, self.catalog.target_language());
                true
            }
            None => false,
        }
    }

    /// End the session. The user's record stays in the store.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.session.logout()?;
        self.user = None;
        self.state = GameState::LoggedOut;
        self.feedback = None;
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref().map(|u| &u.record)
    }

    /// Store key of the active user.
    pub fn user_key(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.key.as_str())
    }

    pub fn points(&self) -> Option<u32> {
        self.user().map(|u| u.points)
    }

    /// The word on screen, if any.
    pub fn current_word(&self) -> Option<&WordEntry> {
        match self.state {
            GameState::LoggedOut => None,
            GameState::Presenting { index } | GameState::Solved { index, .. } => {
                self.catalog.at(index)
            }
        }
    }

    /// The target term, visible only after giving up. A correct answer
    /// does not reveal it.
    pub fn revealed_target(&self) -> Option<&str> {
        match self.state {
            GameState::Solved {
                index,
                correct: false,
            } => self.catalog.at(index).map(|w| w.target.as_str()),
            _ => None,
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn into_session(self) -> SessionStore<S> {
        self.session
    }

    fn enter(&mut self, key: String, mut record: UserRecord) -> Result<(), StoreError> {
        if record.progress_index >= self.catalog.len() {
            tracing::info!(
                "saved index {} is past the catalog end, restarting user '{key}' at 0",
                record.progress_index
            );
            self.session.update_progress(&key, 0)?;
            record.progress_index = 0;
        }
        self.state = GameState::Presenting {
            index: record.progress_index,
        };
        self.user = Some(ActiveUser { key, record });
        Ok(())
    }
}
