use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to the start"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                    padding: 0 2rem;
                }
                .not-found h1 { font-size: 4rem; }
                .not-found p { color: #999; }
                .not-found a { color: #7EB2FF; }
                "#}
            </style>
        </div>
    }
}
