use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;
use crate::state::AccordionState;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">
                    {if props.is_open { "\u{2212}" } else { "+" }}
                </span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub heading: &'static str,
    pub entries: &'static [FaqEntry],
    #[prop_or_default]
    pub initial_open: Option<usize>,
}

/// Question list where at most one answer is expanded at a time. Each
/// click routes through [`AccordionState::toggled`], so opening an entry
/// collapses whichever one was open before.
#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let initial = props.initial_open;
    let accordion = use_state(move || match initial {
        Some(index) => AccordionState::expanded(index),
        None => AccordionState::collapsed(),
    });

    html! {
        <section class="faq-section">
            <h2>{props.heading}</h2>
            <div class="faq-list">
                { for props.entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.set(accordion.toggled(index));
                        })
                    };
                    html! {
                        <FaqItem
                            key={entry.question}
                            entry={*entry}
                            is_open={accordion.is_expanded(index)}
                            on_toggle={on_toggle}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
