use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::atoms::loading::Loading,
    context::use_session,
    router::{Access, Route},
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub route: Route,
    pub children: Html,
}

/// Renders its children only when the session allows the route.
#[function_component(RouteGuard)]
pub fn route_guard(props: &Props) -> Html {
    let session = use_session();
    match props.route.access(&session.state) {
        Access::Allowed => props.children.clone(),
        Access::Pending => html! { <Loading message="Loading your profile..." /> },
        Access::Redirect(to) => {
            log::info!("User not logged, redirecting, to={}", to.to_path());
            html! { <Redirect<Route> to={to} /> }
        }
    }
}
