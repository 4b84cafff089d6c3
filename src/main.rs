use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use cyra_beauty::config;
use cyra_beauty::pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#about", "About"),
    ("#testimonials", "Testimonials"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 20);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
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
        Callback::from(move |_: MouseEvent| {
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
                <a href="#" class="nav-logo">
                    <span class="nav-logo-main">{"CYRA"}</span>
                    <span class="nav-logo-accent">{"Beauty"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|&(href, label)| html! {
                            <a
                                key={label}
                                href={href}
                                class="nav-link"
                                onclick={close_menu.clone()}
                            >
                                {label}
                            </a>
                        }).collect::<Html>()
                    }
                    <a
                        href={config::get_booking_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                        onclick={close_menu}
                    >
                        {"Book Consultation"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        padding: 1rem 1.5rem;
                        background: transparent;
                        transition: all 0.3s;
                    }

                    .top-nav.scrolled {
                        background: #fff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                    }

                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        text-decoration: none;
                    }

                    .nav-logo-main {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 700;
                        font-size: 1.5rem;
                        color: #1A3C34;
                    }

                    .nav-logo-accent {
                        font-family: 'Lora', serif;
                        font-style: italic;
                        color: #D4AF37;
                        margin-left: 0.25rem;
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        font-family: 'Montserrat', sans-serif;
                        color: #1A3C34;
                        text-decoration: none;
                        transition: color 0.3s;
                    }

                    .nav-link:hover {
                        color: #D4AF37;
                    }

                    .nav-cta {
                        background: #D4AF37;
                        color: #fff;
                        padding: 0.6rem 1.5rem;
                        border-radius: 9999px;
                        font-family: 'Montserrat', sans-serif;
                        text-decoration: none;
                        transition: all 0.3s;
                    }

                    .nav-cta:hover {
                        background: #b89630;
                        transform: scale(1.05);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.25rem;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #1A3C34;
                        transition: all 0.3s;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            display: none;
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: #fff;
                            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                            padding: 1.5rem;
                            gap: 1rem;
                            animation: fade-in 0.3s ease-out;
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
            <style>
                {r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }

                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        font-family: 'Lora', serif;
                        background: #fff;
                        color: #1A3C34;
                        overflow-x: hidden;
                    }

                    h1, h2, h3, h4, button {
                        font-family: 'Montserrat', sans-serif;
                    }

                    img {
                        max-width: 100%;
                        display: block;
                    }

                    @keyframes fade-in {
                        from {
                            opacity: 0;
                            transform: translateY(12px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                "#}
            </style>
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
