use yew::prelude::*;
use yew_router::prelude::*;

use crate::{context::use_session, router::Route, session::AuthState};

/// Greeting for a signed-in user; the first name once the profile is known.
pub fn greeting(state: &AuthState) -> Option<String> {
    match state {
        AuthState::Anonymous => None,
        AuthState::Authenticating { username, .. } => Some(format!("Welcome back, {username}!")),
        AuthState::Authenticated { user, .. } if !user.first_name.is_empty() => {
            Some(format!("Welcome back, {}!", user.first_name))
        }
        AuthState::Authenticated { user, .. } => Some(format!("Welcome back, {}!", user.username)),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();

    let body = match greeting(&session.state) {
        Some(greeting) => html! { <h2>{greeting}</h2> },
        None => html! {
            <div class="d-flex justify-content-center gap-2">
                <Link<Route> classes={classes!("btn", "btn-primary")} to={Route::Login}>{"Log in"}</Link<Route>>
                <Link<Route> classes={classes!("btn", "btn-primary")} to={Route::SignUp}>{"Sign up"}</Link<Route>>
            </div>
        },
    };

    html! {
        <div class="text-center mt-5">
            <h1 class="mb-4 fw-bold">{"Jobly"}</h1>
            <p class="lead">{"All the jobs in one, convenient place."}</p>
            {body}
        </div>
    }
}
