use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod content;
mod state;
mod components {
    pub mod faq;
    pub mod modal;
    pub mod page;
    pub mod pricing;
    pub mod sections;
}
mod pages {
    pub mod daylight;
    pub mod dusk;
    pub mod home;
}

use pages::{daylight::Daylight, dusk::Dusk, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/daylight")]
    Daylight,
    #[at("/dusk")]
    Dusk,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home variant");
            html! { <Home /> }
        }
        Route::Daylight => {
            info!("Rendering Daylight variant");
            html! { <Daylight /> }
        }
        Route::Dusk => {
            info!("Rendering Dusk variant");
            html! { <Dusk /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        if let Some(root) = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|d| d.document_element())
                        {
                            is_scrolled.set(root.scroll_top() > 40);
                        }
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );

                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {format!("{} {}", content::FLAME, content::BRAND)}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Classic"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Daylight} classes="nav-link">
                            {"Daylight"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Dusk} classes="nav-link">
                            {"Dusk"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(17, 24, 39, 0.92);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3);
                    }

                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0.75rem 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        font-size: 1.2rem;
                        font-weight: 700;
                        color: #f9fafb;
                        text-decoration: none;
                        text-shadow: 0 1px 4px rgba(0, 0, 0, 0.5);
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        color: #e5e7eb;
                        text-decoration: none;
                        font-size: 0.95rem;
                        font-weight: 500;
                        text-shadow: 0 1px 4px rgba(0, 0, 0, 0.5);
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #fb923c;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #f9fafb;
                        border-radius: 2px;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(17, 24, 39, 0.97);
                            padding: 1.25rem 2rem;
                            gap: 1.25rem;
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
