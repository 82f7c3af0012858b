use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::HttpApi,
    components::composite::navigation_bar::NavigationBar,
    context::{use_session, SessionProvider},
    router::{switch, Route},
    session::AuthState,
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub api: HttpApi,
    pub initial: AuthState,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider api={props.api.clone()} initial={props.initial.clone()}>
                <Header />
                <main class="container mt-4">
                    <Switch<Route> render={switch} />
                </main>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("navigator");

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let target = session.shell().sign_out();
            navigator.push(&target);
        })
    };

    let username = session
        .state
        .username()
        .map(|username| AttrValue::from(username.to_owned()));

    html! {
        <NavigationBar username={username} on_sign_out={on_sign_out} />
    }
}
