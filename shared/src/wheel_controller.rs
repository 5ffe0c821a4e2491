use rand::Rng;

use crate::shared_wheel_game::*;
use crate::validation::{EntryForm, FormField};

/// Anything that can draw the widget. The controller only ever talks to this.
pub trait WheelPresenter {
    fn render_wheel(&mut self, assignment: &WheelAssignment);
    fn render_result(&mut self, message: &ResultMessage);
    fn render_tries_left(&mut self, tries_left: u8);
    fn render_field_error(&mut self, field: FormField, message: Option<&str>);
    fn set_spin_enabled(&mut self, enabled: bool);
    fn remove_spin_control(&mut self);
    fn set_spinning(&mut self, spinning: bool);
    fn point_to(&mut self, slice: usize, rotation_deg: i32);
    fn reveal_slice(&mut self, slice: usize, outcome: SpinOutcome);
    fn freeze_form(&mut self);
    fn show_game(&mut self);
}

/// Where prizes come from once a spin lands on a winning slice.
#[allow(async_fn_in_trait)]
pub trait PrizeSource {
    /// `None` means the winner has to contact support.
    async fn fetch_prize(&self) -> Option<String>;
}

/// Only winning draws ask the source.
pub async fn resolve_prize<S: PrizeSource>(draw: &SpinDraw, source: &S) -> Option<String> {
    if !draw.needs_prize() {
        return None;
    }
    source.fetch_prize().await
}

fn show_spin_control<P: WheelPresenter>(presenter: &mut P, session: &GameSession) {
    match session.spin_control() {
        SpinControl::Active => presenter.set_spin_enabled(true),
        SpinControl::Disabled => presenter.set_spin_enabled(false),
        SpinControl::Removed => presenter.remove_spin_control(),
    }
}

pub struct GameController<P, R> {
    presenter: P,
    rng: R,
    session: Option<GameSession>,
}

impl<P: WheelPresenter, R: Rng> GameController<P, R> {
    pub fn new(presenter: P, rng: R) -> Self {
        Self {
            presenter,
            rng,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Checks all fields and, when every one passes, closes the form and opens the game.
    pub fn submit_form(&mut self, form: &EntryForm) -> Result<bool, GameError> {
        if self.session.is_some() {
            return Err(GameError::AlreadyStarted);
        }

        let report = form.report();
        for field in &report.fields {
            self.presenter.render_field_error(field.field, field.error.as_deref());
        }
        if !report.is_valid() {
            return Ok(false);
        }

        let session = GameSession::new(&mut self.rng);
        self.presenter.freeze_form();
        self.presenter.show_game();
        self.presenter.render_wheel(session.assignment());
        self.presenter.render_tries_left(session.tries_left());
        self.presenter.render_result(&ResultMessage::prompt(session.tries_left()));
        show_spin_control(&mut self.presenter, &session);
        log::info!("entry form accepted, wheel ready");

        self.session = Some(session);
        Ok(true)
    }

    pub fn start_spin(&mut self) -> Result<SpinTicket, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NotStarted)?;
        let ticket = session.start_spin(&mut self.rng)?;

        if ticket.regenerated {
            self.presenter.render_wheel(session.assignment());
        }
        self.presenter.set_spinning(true);
        self.presenter.render_result(&ResultMessage::spinning());
        self.presenter.render_tries_left(ticket.tries_left);
        show_spin_control(&mut self.presenter, session);
        log::info!("spin started, {} left", ticket.tries_left);
        Ok(ticket)
    }

    pub fn draw(&mut self, ticket: SpinTicket) -> Result<SpinDraw, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NotStarted)?;
        let draw = session.draw(ticket, &mut self.rng)?;
        self.presenter.point_to(draw.slice, draw.pointer_rotation_deg());
        Ok(draw)
    }

    pub fn land_on(&mut self, ticket: SpinTicket, slice: usize) -> Result<SpinDraw, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NotStarted)?;
        let draw = session.land_on(ticket, slice)?;
        self.presenter.point_to(draw.slice, draw.pointer_rotation_deg());
        Ok(draw)
    }

    pub fn reveal(&mut self, transaction: &SpinTransaction) -> Result<SpinPhase, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NotStarted)?;
        let phase = session.reveal(transaction)?;

        self.presenter.set_spinning(false);
        self.presenter.reveal_slice(transaction.slice, transaction.outcome);
        self.presenter.render_result(&transaction.message);
        show_spin_control(&mut self.presenter, session);
        log::info!("spin revealed: {}", transaction.message);
        Ok(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use futures::executor::block_on;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Control {
        Hidden,
        Enabled,
        Disabled,
        Removed,
    }

    #[derive(Debug)]
    struct RecordingPresenter {
        wheel: Option<WheelAssignment>,
        wheel_renders: usize,
        result: Option<ResultMessage>,
        tries_left: Option<u8>,
        field_errors: HashMap<FormField, Option<String>>,
        control: Control,
        spinning: bool,
        pointer: Option<(usize, i32)>,
        revealed: Option<(usize, SpinOutcome)>,
        frozen: bool,
        game_visible: bool,
    }

    impl RecordingPresenter {
        fn new() -> Self {
            Self {
                wheel: None,
                wheel_renders: 0,
                result: None,
                tries_left: None,
                field_errors: HashMap::new(),
                control: Control::Hidden,
                spinning: false,
                pointer: None,
                revealed: None,
                frozen: false,
                game_visible: false,
            }
        }

        fn result_text(&self) -> String {
            self.result.as_ref().map(|m| m.to_string()).unwrap_or_default()
        }
    }

    impl WheelPresenter for RecordingPresenter {
        fn render_wheel(&mut self, assignment: &WheelAssignment) {
            self.wheel = Some(assignment.clone());
            self.wheel_renders += 1;
            self.revealed = None;
        }

        fn render_result(&mut self, message: &ResultMessage) {
            self.result = Some(message.clone());
        }

        fn render_tries_left(&mut self, tries_left: u8) {
            self.tries_left = Some(tries_left);
        }

        fn render_field_error(&mut self, field: FormField, message: Option<&str>) {
            self.field_errors.insert(field, message.map(str::to_string));
        }

        fn set_spin_enabled(&mut self, enabled: bool) {
            if self.control != Control::Removed {
                self.control = if enabled { Control::Enabled } else { Control::Disabled };
            }
        }

        fn remove_spin_control(&mut self) {
            self.control = Control::Removed;
        }

        fn set_spinning(&mut self, spinning: bool) {
            self.spinning = spinning;
        }

        fn point_to(&mut self, slice: usize, rotation_deg: i32) {
            self.pointer = Some((slice, rotation_deg));
        }

        fn reveal_slice(&mut self, slice: usize, outcome: SpinOutcome) {
            self.revealed = Some((slice, outcome));
        }

        fn freeze_form(&mut self) {
            self.frozen = true;
        }

        fn show_game(&mut self) {
            self.game_visible = true;
        }
    }

    struct FixedPrize {
        prize: Option<&'static str>,
        calls: Cell<u32>,
    }

    impl FixedPrize {
        fn new(prize: Option<&'static str>) -> Self {
            Self { prize, calls: Cell::new(0) }
        }
    }

    impl PrizeSource for FixedPrize {
        async fn fetch_prize(&self) -> Option<String> {
            self.calls.set(self.calls.get() + 1);
            self.prize.map(str::to_string)
        }
    }

    /// Suspends once before answering, like a lookup that is still in flight.
    struct SlowPrize;

    struct YieldOnce(bool);

    impl std::future::Future for YieldOnce {
        type Output = ();

        fn poll(mut self: std::pin::Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> std::task::Poll<()> {
            if self.0 {
                return std::task::Poll::Ready(());
            }
            self.0 = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    }

    impl PrizeSource for SlowPrize {
        async fn fetch_prize(&self) -> Option<String> {
            YieldOnce(false).await;
            Some("Gift card".to_string())
        }
    }

    type Controller = GameController<RecordingPresenter, StdRng>;

    fn valid_form() -> EntryForm {
        EntryForm {
            name: "Ana".to_string(),
            surname: "Horvat".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    fn started(seed: u64) -> Controller {
        let mut controller = GameController::new(RecordingPresenter::new(), StdRng::seed_from_u64(seed));
        assert_eq!(controller.submit_form(&valid_form()), Ok(true));
        controller
    }

    fn slice_with(controller: &Controller, outcome: SpinOutcome) -> usize {
        controller
            .session()
            .and_then(|s| s.assignment().position_of(outcome))
            .unwrap()
    }

    /// Runs one full spin forced onto a slice with the given outcome.
    fn spin_onto(controller: &mut Controller, outcome: SpinOutcome, source: &FixedPrize) -> SpinPhase {
        let ticket = controller.start_spin().unwrap();
        let slice = slice_with(controller, outcome);
        let draw = controller.land_on(ticket, slice).unwrap();
        let prize = block_on(resolve_prize(&draw, source));
        let tx = draw.into_transaction(prize);
        controller.reveal(&tx).unwrap()
    }

    #[test]
    fn test_invalid_form_reports_every_field() {
        let mut controller = GameController::new(RecordingPresenter::new(), StdRng::seed_from_u64(1));
        let form = EntryForm {
            name: " ".to_string(),
            surname: "Horvat".to_string(),
            email: "a@b".to_string(),
        };
        assert_eq!(controller.submit_form(&form), Ok(false));

        let view = controller.presenter();
        assert_eq!(view.field_errors[&FormField::Name].as_deref(), Some(REQUIRED_ERROR));
        assert_eq!(view.field_errors[&FormField::Surname], None);
        assert_eq!(view.field_errors[&FormField::Email].as_deref(), Some(INVALID_EMAIL_ERROR));
        assert!(!view.frozen);
        assert!(!view.game_visible);
        assert!(controller.session().is_none());
        assert_eq!(controller.start_spin(), Err(GameError::NotStarted));
    }

    #[test]
    fn test_resubmit_after_fixing_clears_errors() {
        let mut controller = GameController::new(RecordingPresenter::new(), StdRng::seed_from_u64(2));
        let mut form = valid_form();
        form.email = "abc".to_string();
        assert_eq!(controller.submit_form(&form), Ok(false));
        form.email = "a@b.co".to_string();
        assert_eq!(controller.submit_form(&form), Ok(true));
        assert!(controller.presenter().field_errors.values().all(Option::is_none));
        assert_eq!(controller.submit_form(&form), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_valid_form_opens_game() {
        let controller = started(3);
        let view = controller.presenter();
        assert!(view.frozen);
        assert!(view.game_visible);
        assert_eq!(view.wheel.as_ref().map(WheelAssignment::len), Some(12));
        assert_eq!(view.control, Control::Enabled);
        assert_eq!(view.tries_left, Some(2));
        assert_eq!(view.result_text(), "Click \"Spin\" to play! You have 2 spins left");
    }

    #[test]
    fn test_first_miss_leaves_one_spin() {
        let mut controller = started(4);
        let source = FixedPrize::new(Some("10% off"));
        let phase = spin_onto(&mut controller, SpinOutcome::TryAgain, &source);

        assert_eq!(phase, SpinPhase::Idle);
        let view = controller.presenter();
        assert!(view.result_text().contains("You have 1 spin left"));
        assert_eq!(view.control, Control::Enabled);
        assert_eq!(view.tries_left, Some(1));
        assert!(!view.spinning);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_second_spin_wins_prize() {
        let mut controller = started(5);
        let source = FixedPrize::new(Some("10% off"));
        spin_onto(&mut controller, SpinOutcome::TryAgain, &source);
        let phase = spin_onto(&mut controller, SpinOutcome::Win, &source);

        assert_eq!(phase, SpinPhase::Won);
        let view = controller.presenter();
        let text = view.result_text();
        assert!(text.contains("WIN!"));
        assert!(text.contains("10% off"));
        assert_eq!(view.control, Control::Removed);
        assert_eq!(source.calls.get(), 1);
        assert_eq!(controller.start_spin(), Err(GameError::GameOver));
    }

    #[test]
    fn test_second_spin_wins_without_prize() {
        let mut controller = started(6);
        let source = FixedPrize::new(None);
        spin_onto(&mut controller, SpinOutcome::TryAgain, &source);
        spin_onto(&mut controller, SpinOutcome::Win, &source);

        let text = controller.presenter().result_text();
        assert!(text.contains("WIN!"));
        assert!(text.contains(CONTACT_SUPPORT_MESSAGE));
        assert!(!text.contains("Your prize"));
    }

    #[test]
    fn test_two_misses_exhaust_game() {
        let mut controller = started(7);
        let source = FixedPrize::new(Some("10% off"));
        spin_onto(&mut controller, SpinOutcome::TryAgain, &source);
        let phase = spin_onto(&mut controller, SpinOutcome::TryAgain, &source);

        assert_eq!(phase, SpinPhase::Exhausted);
        let view = controller.presenter();
        let text = view.result_text();
        assert!(text.contains("You have played your 2 spins."));
        assert!(text.contains(THANK_YOU_MESSAGE));
        assert_eq!(view.control, Control::Disabled);
        assert_eq!(view.tries_left, Some(0));
    }

    #[test]
    fn test_first_spin_win_removes_control() {
        let mut controller = started(8);
        let source = FixedPrize::new(Some("Free shipping"));
        let phase = spin_onto(&mut controller, SpinOutcome::Win, &source);

        assert_eq!(phase, SpinPhase::Won);
        assert_eq!(controller.presenter().control, Control::Removed);
        assert_eq!(controller.session().map(GameSession::tries_left), Some(1));
    }

    #[test]
    fn test_last_spin_disables_control_before_reveal() {
        let mut controller = started(9);
        let source = FixedPrize::new(None);
        spin_onto(&mut controller, SpinOutcome::TryAgain, &source);

        let ticket = controller.start_spin().unwrap();
        assert_eq!(controller.presenter().control, Control::Disabled);
        assert!(controller.presenter().spinning);
        assert_eq!(controller.presenter().result_text(), SPINNING_MESSAGE);

        let draw = controller.draw(ticket).unwrap();
        let (slice, deg) = controller.presenter().pointer.unwrap();
        assert_eq!(slice, draw.slice);
        assert_eq!(deg, draw.pointer_rotation_deg());
    }

    #[test]
    fn test_control_stays_active_mid_spin_with_tries_left() {
        let mut controller = started(12);
        controller.start_spin().unwrap();
        assert_eq!(controller.presenter().control, Control::Enabled);
        assert_eq!(controller.start_spin(), Err(GameError::SpinInProgress));
        assert_eq!(controller.presenter().tries_left, Some(1));
    }

    #[test]
    fn test_reveal_after_slow_prize_keeps_drawn_slice() {
        let mut controller = started(13);
        let ticket = controller.start_spin().unwrap();
        let slice = slice_with(&controller, SpinOutcome::Win);
        let draw = controller.land_on(ticket, slice).unwrap();

        // Nothing is revealed while the lookup is pending
        let prize = block_on(resolve_prize(&draw, &SlowPrize));
        assert!(controller.presenter().revealed.is_none());
        assert!(controller.presenter().spinning);

        let tx = draw.into_transaction(prize);
        assert_eq!(controller.reveal(&tx), Ok(SpinPhase::Won));
        let view = controller.presenter();
        assert_eq!(view.revealed, Some((slice, SpinOutcome::Win)));
        assert!(view.result_text().starts_with(&format!("Wheel stopped on {}: WIN!", slice + 1)));
        assert!(view.result_text().contains("Your prize: Gift card"));
    }

    #[test]
    fn test_second_spin_redraws_wheel() {
        let mut controller = started(10);
        let source = FixedPrize::new(None);
        assert_eq!(controller.presenter().wheel_renders, 1);

        spin_onto(&mut controller, SpinOutcome::TryAgain, &source);
        assert!(controller.presenter().revealed.is_some());

        controller.start_spin().unwrap();
        assert_eq!(controller.presenter().wheel_renders, 2);
        assert!(controller.presenter().revealed.is_none());
    }

    #[test]
    fn test_reveal_shows_drawn_slice() {
        let mut controller = started(11);
        let ticket = controller.start_spin().unwrap();
        let slice = slice_with(&controller, SpinOutcome::TryAgain);
        let tx = controller.land_on(ticket, slice).unwrap().into_transaction(None);
        controller.reveal(&tx).unwrap();

        assert_eq!(controller.presenter().revealed, Some((slice, SpinOutcome::TryAgain)));
        assert_eq!(controller.session().and_then(GameSession::revealed_slice), Some(slice));
    }
}
