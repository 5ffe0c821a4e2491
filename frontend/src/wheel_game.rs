use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use wof_shared::constants::{WIDGET_HINT, WIDGET_TITLE};
use wof_shared::validation::EntryForm as EntryFormData;
use wof_shared::wheel_controller::{resolve_prize, GameController};

use crate::components::{EntryForm, ResultDisplay, SpinButton, TriesLeft, WheelCanvas};
use crate::config::WidgetConfig;
use crate::hooks::widget_view::use_widget_view;
use crate::prize::HttpPrizeSource;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelOfFortuneProps {
    #[prop_or_default]
    pub config: WidgetConfig,
}

#[function_component(WheelOfFortune)]
pub fn wheel_of_fortune(props: &WheelOfFortuneProps) -> Html {
    let view = use_widget_view();

    let controller = {
        let view = view.clone();
        use_mut_ref(move || GameController::new(view, SmallRng::from_entropy()))
    };

    let prize_source = use_memo(props.config.prize_url.clone(), |url| HttpPrizeSource::new(url.clone()));

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |form: EntryFormData| {
            match controller.borrow_mut().submit_form(&form) {
                Ok(true) => {}
                Ok(false) => log::info!("entry form has invalid fields"),
                Err(err) => log::warn!("form submit ignored: {}", err),
            }
        })
    };

    let on_spin = {
        let controller = controller.clone();
        let prize_source = prize_source.clone();
        let timings = props.config.timings;

        Callback::from(move |_: MouseEvent| {
            let ticket = match controller.borrow_mut().start_spin() {
                Ok(ticket) => ticket,
                Err(err) => {
                    log::warn!("spin ignored: {}", err);
                    return;
                }
            };
            let started_at = js_sys::Date::now();

            let controller = controller.clone();
            let prize_source = prize_source.clone();
            spawn_local(async move {
                TimeoutFuture::new(timings.resolve_delay_ms).await;

                let draw = controller.borrow_mut().draw(ticket);
                let draw = match draw {
                    Ok(draw) => draw,
                    Err(err) => {
                        log::warn!("spin could not be resolved: {}", err);
                        return;
                    }
                };

                // Reveal waits for the prize even when the lookup runs past the reveal delay
                let prize = resolve_prize(&draw, &*prize_source).await;
                let transaction = draw.into_transaction(prize);

                let elapsed = (js_sys::Date::now() - started_at).max(0.0) as u32;
                let wait = timings.reveal_wait_after(elapsed);
                if wait > 0 {
                    TimeoutFuture::new(wait).await;
                }

                let revealed = controller.borrow_mut().reveal(&transaction);
                if let Err(err) = revealed {
                    log::warn!("spin result not shown: {}", err);
                }
            });
        })
    };

    html! {
        <div class={styles::WIDGET}>
            <h1 class={classes!(styles::TEXT_H1, "text-center")}>{WIDGET_TITLE}</h1>
            <p class={classes!(styles::TEXT_BODY, "text-center")}>{WIDGET_HINT}</p>

            <EntryForm
                frozen={*view.form_frozen}
                errors={view.field_errors()}
                on_submit={on_submit}
            />

            if *view.game_visible {
                <div id="wof-game" class={styles::GAME}>
                    <SpinButton
                        control={*view.spin_control}
                        is_spinning={*view.spinning}
                        onclick={on_spin}
                    />
                    <ResultDisplay message={(*view.result).clone()} />
                    <TriesLeft tries_left={*view.tries_left} />
                    {
                        match (*view.wheel).clone() {
                            Some(assignment) => html! {
                                <WheelCanvas
                                    assignment={assignment}
                                    revealed={*view.revealed}
                                    rotation_deg={*view.rotation_deg}
                                    is_spinning={*view.spinning}
                                />
                            },
                            None => html! {},
                        }
                    }
                </div>
            }
        </div>
    }
}
