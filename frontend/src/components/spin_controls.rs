use yew::prelude::*;
use wof_shared::shared_wheel_game::{ResultMessage, SpinControl};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub message: ResultMessage,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let message = &props.message;
    html! {
        <div id="wof-spin-result" class={styles::RESULT_BOX}>
            <div class={styles::RESULT_HEADLINE}>{&message.headline}</div>
            if let Some(subline) = &message.subline {
                <div class={styles::RESULT_SUBLINE}>{subline}</div>
            }
            if let Some(footer) = &message.footer {
                <div>{footer}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub control: SpinControl,
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

/// Renders nothing once the control is removed after a win.
#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = match props.control {
        SpinControl::Removed => return html! {},
        SpinControl::Disabled => true,
        SpinControl::Active => false,
    };

    let button_class = if is_disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    html! {
        <div class="spin-btn-wr flex justify-center">
            <button
                id="wof-spin-btn"
                type="button"
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class={classes!(styles::SPIN_BUTTON, button_class)}
            >
                {if props.is_spinning { "Spinning..." } else { "Spin" }}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TriesLeftProps {
    pub tries_left: u8,
}

#[function_component(TriesLeft)]
pub fn tries_left(props: &TriesLeftProps) -> Html {
    html! {
        <div class={styles::TEXT_SMALL}>
            {format!("Spins left: {}", props.tries_left)}
        </div>
    }
}
