use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod faq;
mod components {
    pub mod faq_item;
}
mod pages {
    pub mod landing;
}
mod reveal {
    pub mod dom;
    pub mod hook;
    pub mod tracker;
}

use pages::landing::{scroll_to_enroll, LandingPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <LandingPage /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let scroll_callback = Closure::wrap(Box::new({
                            let window = window.clone();
                            move || {
                                let offset = window.scroll_y().unwrap_or(0.0);
                                is_scrolled.set(offset > f64::from(config::NAV_SCROLLED_OFFSET_PX));
                            }
                        }) as Box<dyn FnMut()>);

                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not attach nav scroll listener: {:?}", e);
                        }

                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    None => Box::new(|| ()),
                };
                destructor
            },
            (),
        );
    }

    let enroll = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_enroll();
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={content::LOGO_SRC} alt={content::TITLE} />
                </Link<Route>>
                <button class="nav-enroll" onclick={enroll}>{"Enroll"}</button>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(229, 231, 235, 0.8);
                    backdrop-filter: blur(12px);
                    transition: background 0.3s, box-shadow 0.3s;
                }

                .top-nav.scrolled {
                    background: rgba(229, 231, 235, 1);
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
                }

                .nav-content {
                    max-width: 1200px;
                    height: 80px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo img {
                    width: 8rem;
                }

                .nav-enroll {
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1.25rem;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(to right, #60a5fa, #22d3ee, #4ade80);
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
