use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::composite::route_guard::RouteGuard,
    pages::{
        companies::Companies, company::CompanyPage, home::Home, jobs::Jobs, login::Login,
        not_found::NotFound, profile::Profile, sign_up::SignUp,
    },
    session::AuthState,
};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-up")]
    SignUp,
    #[at("/login")]
    Login,
    #[at("/companies")]
    Companies,
    #[at("/companies/:handle")]
    Company { handle: String },
    #[at("/jobs")]
    Jobs,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Allowed,
    /// Signed in, but the profile the view depends on is still loading.
    Pending,
    Redirect(Route),
}

impl Route {
    pub fn requires_user(&self) -> bool {
        matches!(
            self,
            Route::Companies | Route::Company { .. } | Route::Jobs | Route::Profile
        )
    }

    pub fn requires_profile(&self) -> bool {
        matches!(self, Route::Company { .. } | Route::Jobs | Route::Profile)
    }

    pub fn access(&self, state: &AuthState) -> Access {
        if !self.requires_user() {
            Access::Allowed
        } else if !state.is_authenticated() {
            Access::Redirect(Route::Login)
        } else if self.requires_profile() && state.user().is_none() {
            Access::Pending
        } else {
            Access::Allowed
        }
    }
}

pub fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <Home /> },
        Route::SignUp => html! { <SignUp /> },
        Route::Login => html! { <Login /> },
        Route::Companies => html! { <Companies /> },
        Route::Company { handle } => html! { <CompanyPage handle={handle.clone()} /> },
        Route::Jobs => html! { <Jobs /> },
        Route::Profile => html! { <Profile /> },
        Route::NotFound => html! { <NotFound /> },
    };
    if route.requires_user() {
        html! { <RouteGuard route={route}>{page}</RouteGuard> }
    } else {
        page
    }
}
