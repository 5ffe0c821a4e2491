use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// What a single slice of the wheel pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinOutcome {
    Win,
    TryAgain,
}

impl SpinOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Win => WIN_LABEL,
            Self::TryAgain => TRY_AGAIN_LABEL,
        }
    }
}

/// Outcome per slice, slice 0 being the one shown as "1".
///
/// Always holds exactly `WIN_SLICES` wins among `WHEEL_SLICES` slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelAssignment {
    slices: [SpinOutcome; WHEEL_SLICES],
}

impl WheelAssignment {
    /// Draws slices one by one out of a shrinking pool of 4 wins and 8 losses.
    /// Every arrangement of the pool is equally likely.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: Vec<SpinOutcome> = std::iter::repeat(SpinOutcome::Win)
            .take(WIN_SLICES)
            .chain(std::iter::repeat(SpinOutcome::TryAgain).take(TRY_AGAIN_SLICES))
            .collect();

        let mut slices = [SpinOutcome::TryAgain; WHEEL_SLICES];
        for slot in slices.iter_mut() {
            let pick = rng.gen_range(0..pool.len());
            *slot = pool.remove(pick);
        }
        Self { slices }
    }

    pub fn from_slices(slices: [SpinOutcome; WHEEL_SLICES]) -> Result<Self, GameError> {
        let wins = slices.iter().filter(|&&s| s == SpinOutcome::Win).count();
        if wins != WIN_SLICES {
            return Err(GameError::InvalidAssignment { wins });
        }
        Ok(Self { slices })
    }

    pub fn outcome(&self, slice: usize) -> Option<SpinOutcome> {
        self.slices.get(slice).copied()
    }

    pub fn slices(&self) -> &[SpinOutcome] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn count(&self, outcome: SpinOutcome) -> usize {
        self.slices.iter().filter(|&&s| s == outcome).count()
    }

    pub fn position_of(&self, outcome: SpinOutcome) -> Option<usize> {
        self.slices.iter().position(|&s| s == outcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Revealing,
    Exhausted,
    Won,
}

impl SpinPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Won)
    }
}

/// How the spin button should look right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinControl {
    Active,
    Disabled,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NotStarted,
    AlreadyStarted,
    SpinInProgress,
    GameOver,
    NotSpinning,
    NotRevealing,
    SliceOutOfRange(usize),
    InvalidAssignment { wins: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "the game has not started yet"),
            Self::AlreadyStarted => write!(f, "the form was already accepted"),
            Self::SpinInProgress => write!(f, "a spin is already in progress"),
            Self::GameOver => write!(f, "no spins left"),
            Self::NotSpinning => write!(f, "no spin is waiting for a result"),
            Self::NotRevealing => write!(f, "no spin result is waiting to be revealed"),
            Self::SliceOutOfRange(slice) => {
                write!(f, "slice {} is outside the wheel (0..{})", slice, WHEEL_SLICES)
            }
            Self::InvalidAssignment { wins } => write!(
                f,
                "wheel needs exactly {} winning slices, got {}",
                WIN_SLICES, wins
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Text shown in the result area: a headline, an optional smaller line and a closing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMessage {
    pub headline: String,
    pub subline: Option<String>,
    pub footer: Option<String>,
}

fn spins_left_line(tries_left: u8) -> String {
    let noun = if tries_left == 1 { "spin" } else { "spins" };
    format!("You have {} {} left", tries_left, noun)
}

impl ResultMessage {
    pub fn prompt(tries_left: u8) -> Self {
        Self {
            headline: SPIN_PROMPT.to_string(),
            subline: Some(spins_left_line(tries_left)),
            footer: None,
        }
    }

    pub fn spinning() -> Self {
        Self {
            headline: SPINNING_MESSAGE.to_string(),
            subline: None,
            footer: None,
        }
    }

    pub fn for_spin(slice: usize, outcome: SpinOutcome, tries_left: u8, prize: Option<&str>) -> Self {
        let stopped = format!("Wheel stopped on {}:", slice + 1);
        match outcome {
            SpinOutcome::Win => Self {
                headline: format!("{} WIN!", stopped),
                subline: None,
                footer: Some(match prize {
                    Some(prize) => format!("Your prize: {}", prize),
                    None => CONTACT_SUPPORT_MESSAGE.to_string(),
                }),
            },
            SpinOutcome::TryAgain if tries_left == 0 => Self {
                headline: format!("{} no win.", stopped),
                subline: Some(format!("You have played your {} spins.", MAX_SPIN_TRIES)),
                footer: Some(THANK_YOU_MESSAGE.to_string()),
            },
            SpinOutcome::TryAgain => Self {
                headline: format!("{} no win.", stopped),
                subline: Some(spins_left_line(tries_left)),
                footer: None,
            },
        }
    }
}

impl fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline)?;
        for line in [&self.subline, &self.footer].into_iter().flatten() {
            write!(f, " {}", line)?;
        }
        Ok(())
    }
}

/// Handed out when a spin starts; redeemed exactly once for the draw.
#[derive(Debug, PartialEq, Eq)]
pub struct SpinTicket {
    pub tries_left: u8,
    pub regenerated: bool,
}

/// The slice the wheel landed on, before any prize lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinDraw {
    pub slice: usize,
    pub outcome: SpinOutcome,
    pub tries_left: u8,
}

impl SpinDraw {
    pub fn needs_prize(&self) -> bool {
        self.outcome == SpinOutcome::Win
    }

    pub fn pointer_rotation_deg(&self) -> i32 {
        self.slice as i32 * SLICE_ANGLE_DEG
    }

    /// An empty prize string counts as no prize at all.
    pub fn into_transaction(self, prize: Option<String>) -> SpinTransaction {
        let prize = prize.filter(|p| !p.is_empty());
        let message = ResultMessage::for_spin(self.slice, self.outcome, self.tries_left, prize.as_deref());
        SpinTransaction {
            slice: self.slice,
            outcome: self.outcome,
            tries_left: self.tries_left,
            prize,
            message,
        }
    }
}

/// Everything the reveal step needs, fixed at resolve time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTransaction {
    pub slice: usize,
    pub outcome: SpinOutcome,
    pub tries_left: u8,
    pub prize: Option<String>,
    pub message: ResultMessage,
}

/// Delays of one spin, both counted from the moment the spin starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTimings {
    pub resolve_delay_ms: u32,
    pub reveal_delay_ms: u32,
}

impl Default for SpinTimings {
    fn default() -> Self {
        Self {
            resolve_delay_ms: RESOLVE_DELAY_MS,
            reveal_delay_ms: REVEAL_DELAY_MS,
        }
    }
}

impl SpinTimings {
    /// The result is never drawn after the reveal is due.
    pub fn new(resolve_delay_ms: u32, reveal_delay_ms: u32) -> Self {
        Self {
            resolve_delay_ms: resolve_delay_ms.min(reveal_delay_ms),
            reveal_delay_ms,
        }
    }

    pub fn reveal_wait_after(&self, elapsed_ms: u32) -> u32 {
        self.reveal_delay_ms.saturating_sub(elapsed_ms)
    }
}

// === API Types ===

/// Body of the prize document. `prize: null` (or a missing field) means
/// the winner is sent to customer support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeDocument {
    #[serde(default)]
    pub prize: Option<String>,
}

/// State of one widget's game, from form acceptance until the page goes away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    assignment: WheelAssignment,
    tries_left: u8,
    phase: SpinPhase,
    revealed: Option<usize>,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_assignment(WheelAssignment::generate(rng))
    }

    pub fn with_assignment(assignment: WheelAssignment) -> Self {
        Self {
            assignment,
            tries_left: MAX_SPIN_TRIES,
            phase: SpinPhase::Idle,
            revealed: None,
        }
    }

    pub fn assignment(&self) -> &WheelAssignment {
        &self.assignment
    }

    pub fn tries_left(&self) -> u8 {
        self.tries_left
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn revealed_slice(&self) -> Option<usize> {
        self.revealed
    }

    /// Stays `Active` while a spin is in flight; the session itself turns extra clicks away.
    pub fn spin_control(&self) -> SpinControl {
        if self.phase == SpinPhase::Won {
            SpinControl::Removed
        } else if self.tries_left == 0 {
            SpinControl::Disabled
        } else {
            SpinControl::Active
        }
    }

    /// Takes one try. Every spin after the first reshuffles the wheel before it turns.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SpinTicket, GameError> {
        if self.phase.is_terminal() || self.tries_left == 0 {
            return Err(GameError::GameOver);
        }
        if self.phase != SpinPhase::Idle {
            return Err(GameError::SpinInProgress);
        }

        let regenerated = self.tries_left < MAX_SPIN_TRIES;
        if regenerated {
            self.assignment = WheelAssignment::generate(rng);
            self.revealed = None;
            log::debug!("wheel reshuffled: {:?}", self.assignment.slices());
        }

        self.tries_left -= 1;
        self.phase = SpinPhase::Spinning;
        Ok(SpinTicket {
            tries_left: self.tries_left,
            regenerated,
        })
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, ticket: SpinTicket, rng: &mut R) -> Result<SpinDraw, GameError> {
        let slice = rng.gen_range(0..WHEEL_SLICES);
        self.land_on(ticket, slice)
    }

    /// Stops the wheel on a chosen slice instead of a random one.
    pub fn land_on(&mut self, ticket: SpinTicket, slice: usize) -> Result<SpinDraw, GameError> {
        if self.phase != SpinPhase::Spinning {
            return Err(GameError::NotSpinning);
        }
        let outcome = self
            .assignment
            .outcome(slice)
            .ok_or(GameError::SliceOutOfRange(slice))?;

        self.phase = SpinPhase::Revealing;
        log::debug!("wheel landed on slice {} ({:?})", slice + 1, outcome);
        Ok(SpinDraw {
            slice,
            outcome,
            tries_left: ticket.tries_left,
        })
    }

    pub fn reveal(&mut self, transaction: &SpinTransaction) -> Result<SpinPhase, GameError> {
        if self.phase != SpinPhase::Revealing {
            return Err(GameError::NotRevealing);
        }
        self.revealed = Some(transaction.slice);
        self.phase = match transaction.outcome {
            SpinOutcome::Win => SpinPhase::Won,
            SpinOutcome::TryAgain if self.tries_left == 0 => SpinPhase::Exhausted,
            SpinOutcome::TryAgain => SpinPhase::Idle,
        };
        Ok(self.phase)
    }
}
