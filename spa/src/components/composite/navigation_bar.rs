use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

impl NavLink {
    fn new(route: Route, label: &'static str) -> Self {
        NavLink { route, label }
    }
}

/// Links shown for the given identity. An empty username counts as no user.
pub fn nav_links(username: Option<&str>) -> Vec<NavLink> {
    match username.filter(|username| !username.is_empty()) {
        None => vec![
            NavLink::new(Route::Home, "Jobly"),
            NavLink::new(Route::SignUp, "Signup"),
            NavLink::new(Route::Login, "Login"),
        ],
        Some(_) => vec![
            NavLink::new(Route::Home, "Jobly"),
            NavLink::new(Route::Companies, "Companies"),
            NavLink::new(Route::Jobs, "Jobs"),
            NavLink::new(Route::Profile, "Profile"),
        ],
    }
}

pub fn sign_out_label(username: &str) -> String {
    format!("Sign Out {username}")
}

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub username: Option<AttrValue>,
    pub on_sign_out: Callback<()>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &Props) -> Html {
    let current = use_route::<Route>();
    let username = props
        .username
        .as_deref()
        .filter(|username| !username.is_empty());

    let links = nav_links(username)
        .into_iter()
        .map(|NavLink { route, label }| {
            let classes = if route == Route::Home {
                classes!("navbar-brand")
            } else if current.as_ref() == Some(&route) {
                classes!("nav-link", "active")
            } else {
                classes!("nav-link")
            };
            html! { <Link<Route> classes={classes} to={route}>{label}</Link<Route>> }
        })
        .collect::<Html>();

    let sign_out = username
        .map(|username| {
            let on_sign_out = props.on_sign_out.clone();
            let on_click = Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                on_sign_out.emit(());
            });
            html! {
                <button onclick={on_click} class="btn btn-sm btn-outline-secondary ms-auto">
                    {sign_out_label(username)}
                </button>
            }
        })
        .unwrap_or_default();

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid d-flex gap-3">
                {links}
                {sign_out}
            </div>
        </nav>
    }
}
