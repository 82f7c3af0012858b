use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="text-center mt-5">
            <h2>{"Page not found!"}</h2>
            <Link<Route> to={Route::Home}>{ "click here to go home" }</Link<Route>>
        </div>
    }
}
