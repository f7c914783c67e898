use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FLAME;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub on_close: Callback<MouseEvent>,
}

/// Confirmation dialog shown after any booking button. Clicking the
/// backdrop dismisses it; clicks inside the dialog stop propagating so
/// they never reach the backdrop handler.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let absorb_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-overlay" onclick={props.on_close.clone()}>
            <div class="modal-content" onclick={absorb_click}>
                <button class="modal-close" onclick={props.on_close.clone()}>
                    {"\u{00D7}"}
                </button>
                <div class="modal-flame">{FLAME}</div>
                <h2>{"Booking Confirmed!"}</h2>
                <p class="modal-copy">
                    {"Just kidding! This is a fictional website inspired by Modern Family. \
                      But if we were real, a LogBuddy would be on their way!"}
                </p>
                <button class="modal-confirm" onclick={props.on_close.clone()}>
                    {"Stay Cozy"}
                </button>
            </div>
        </div>
    }
}
