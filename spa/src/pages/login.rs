use yew::{platform::spawn_local, prelude::*};
use yew_router::prelude::*;

use crate::{
    components::composite::login_form::{LoginForm, LoginFormData},
    context::use_session,
    router::Route,
};

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("navigator");
    let error = use_state(|| None::<AttrValue>);
    let busy = use_state(|| false);

    let on_login = {
        let session = session.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |data: LoginFormData| {
            let shell = session.shell();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let result = shell.log_in(data).await;
                busy.set(false);
                match result {
                    Ok(()) => navigator.push(&Route::Companies),
                    Err(login_error) => error.set(Some(login_error.to_string().into())),
                }
            });
        })
    };

    if session.state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Companies} /> };
    }

    html! {
        <LoginForm on_login={on_login} error={(*error).clone()} busy={*busy} />
    }
}
