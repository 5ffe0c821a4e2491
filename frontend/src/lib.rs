pub mod components;
pub mod config;
pub mod hooks;
pub mod prize;
pub mod styles;
pub mod wheel_game;

use yew::Renderer;

use crate::config::{WidgetConfig, MOUNT_ELEMENT_ID};
use crate::wheel_game::{WheelOfFortune, WheelOfFortuneProps};

/// Starts the widget inside `#wheel-of-fortune`. Pages without that element are left alone.
pub fn mount() {
    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID));

    let Some(host) = host else {
        log::warn!("#{} not found on page, wheel of fortune not started", MOUNT_ELEMENT_ID);
        return;
    };

    let config = WidgetConfig::from_element(&host);
    log::info!("mounting wheel of fortune, prizes from {}", config.prize_url);
    Renderer::<WheelOfFortune>::with_root_and_props(host, WheelOfFortuneProps { config }).render();
}
