use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod theme;
mod cms {
    pub mod client;
    pub mod queries;
    pub mod types;
}
mod content {
    pub mod blocks;
    pub mod rich_text;
}
mod effects {
    pub mod scroll_blur;
}
mod components {
    pub mod block_renderer;
    pub mod carousel;
    pub mod comparison_slider;
    pub mod project_card;
    pub mod states;
    pub mod stats;
    pub mod themed_logo;
    pub mod video;
}
mod pages {
    pub mod contact;
    pub mod cv;
    pub mod home;
    pub mod not_found;
    pub mod project;
    pub mod projects;
}

use pages::{
    contact::Contact, cv::Cv, home::Home, not_found::NotFound, project::ProjectPage,
    projects::Projects,
};
use theme::{Theme, ThemeProvider};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/project/:slug")]
    Project { slug: String },
    #[at("/cv")]
    Cv,
    #[at("/contact")]
    Contact,
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
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Project { slug } => {
            info!("Rendering Project page: {slug}");
            html! { <ProjectPage slug={slug} /> }
        }
        Route::Cv => {
            info!("Rendering CV page");
            html! { <Cv /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let theme = use_context::<Theme>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
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
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"George Yiakoumi"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Projects} classes="nav-link">
                            {"Projects"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Cv} classes="nav-link">
                            {"CV"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    if let Some(theme) = &theme {
                        <button
                            class="theme-toggle"
                            onclick={theme.toggle.clone()}
                            aria-label="Toggle theme"
                            title={if theme.is_dark { "Too dark? Turn on the lights!" } else { "Too bright? Turn the lights off!" }}
                        >
                            { if theme.is_dark { "\u{2600}\u{FE0E}" } else { "\u{263D}" } }
                        </button>
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    transition: background 0.2s ease, backdrop-filter 0.2s ease;
                }
                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.75);
                    backdrop-filter: blur(12px);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { font-weight: 700; text-decoration: none; color: inherit; }
                .nav-right { display: flex; gap: 1.5rem; }
                .nav-link { text-decoration: none; color: inherit; }
                .nav-link:hover { color: #7EB2FF; }
                .theme-toggle {
                    background: none;
                    border: 1px solid rgba(128, 128, 128, 0.35);
                    border-radius: 50%;
                    width: 32px;
                    height: 32px;
                    color: inherit;
                    cursor: pointer;
                }
                .burger-menu { display: none; }
                @media (max-width: 640px) {
                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span { width: 22px; height: 2px; background: currentColor; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem 2rem;
                        background: rgba(26, 26, 26, 0.95);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"\u{00A9} 2025 George Yiakoumi"}</p>
            <style>
                {r#"
                .site-footer { text-align: center; padding: 3rem 2rem; color: #999; font-size: 0.9rem; }
                "#}
            </style>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
