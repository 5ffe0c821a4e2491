use yew::prelude::*;
use wof_shared::shared_wheel_game::*;
use wof_shared::validation::FormField;
use wof_shared::wheel_controller::WheelPresenter;

use crate::components::entry_form::FieldErrors;

/// Yew state behind the widget. The game controller owns one copy and writes
/// through it; the component reads a fresh copy on every render.
#[derive(Clone)]
pub struct WidgetView {
    pub wheel: UseStateHandle<Option<WheelAssignment>>,
    pub result: UseStateHandle<ResultMessage>,
    pub tries_left: UseStateHandle<u8>,
    pub name_error: UseStateHandle<Option<String>>,
    pub surname_error: UseStateHandle<Option<String>>,
    pub email_error: UseStateHandle<Option<String>>,
    pub spin_control: UseStateHandle<SpinControl>,
    pub spinning: UseStateHandle<bool>,
    pub rotation_deg: UseStateHandle<i32>,
    pub revealed: UseStateHandle<Option<(usize, SpinOutcome)>>,
    pub form_frozen: UseStateHandle<bool>,
    pub game_visible: UseStateHandle<bool>,
}

impl WidgetView {
    fn error_handle(&self, field: FormField) -> &UseStateHandle<Option<String>> {
        match field {
            FormField::Name => &self.name_error,
            FormField::Surname => &self.surname_error,
            FormField::Email => &self.email_error,
        }
    }

    pub fn field_errors(&self) -> FieldErrors {
        FieldErrors {
            name: (*self.name_error).clone(),
            surname: (*self.surname_error).clone(),
            email: (*self.email_error).clone(),
        }
    }
}

#[hook]
pub fn use_widget_view() -> WidgetView {
    WidgetView {
        wheel: use_state(|| None),
        result: use_state(|| ResultMessage::prompt(wof_shared::constants::MAX_SPIN_TRIES)),
        tries_left: use_state(|| wof_shared::constants::MAX_SPIN_TRIES),
        name_error: use_state(|| None),
        surname_error: use_state(|| None),
        email_error: use_state(|| None),
        spin_control: use_state(|| SpinControl::Disabled),
        spinning: use_state(|| false),
        rotation_deg: use_state(|| 0),
        revealed: use_state(|| None),
        form_frozen: use_state(|| false),
        game_visible: use_state(|| false),
    }
}

impl WheelPresenter for WidgetView {
    fn render_wheel(&mut self, assignment: &WheelAssignment) {
        self.wheel.set(Some(assignment.clone()));
        self.revealed.set(None);
    }

    fn render_result(&mut self, message: &ResultMessage) {
        self.result.set(message.clone());
    }

    fn render_tries_left(&mut self, tries_left: u8) {
        self.tries_left.set(tries_left);
    }

    fn render_field_error(&mut self, field: FormField, message: Option<&str>) {
        self.error_handle(field).set(message.map(str::to_string));
    }

    fn set_spin_enabled(&mut self, enabled: bool) {
        self.spin_control.set(if enabled { SpinControl::Active } else { SpinControl::Disabled });
    }

    fn remove_spin_control(&mut self) {
        self.spin_control.set(SpinControl::Removed);
    }

    fn set_spinning(&mut self, spinning: bool) {
        self.spinning.set(spinning);
    }

    fn point_to(&mut self, _slice: usize, rotation_deg: i32) {
        self.rotation_deg.set(rotation_deg);
    }

    fn reveal_slice(&mut self, slice: usize, outcome: SpinOutcome) {
        self.revealed.set(Some((slice, outcome)));
    }

    fn freeze_form(&mut self) {
        self.form_frozen.set(true);
    }

    fn show_game(&mut self) {
        self.game_visible.set(true);
    }
}
