use yew::{platform::spawn_local, prelude::*};
use yew_router::prelude::*;

use crate::{
    components::composite::sign_up_form::{SignUpForm, SignUpFormData},
    context::use_session,
    router::Route,
};

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("navigator");
    let error = use_state(|| None::<AttrValue>);
    let busy = use_state(|| false);

    let on_sign_up = {
        let session = session.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |data: SignUpFormData| {
            let shell = session.shell();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let result = shell.sign_up(data).await;
                busy.set(false);
                match result {
                    Ok(()) => navigator.push(&Route::Companies),
                    Err(sign_up_error) => error.set(Some(sign_up_error.to_string().into())),
                }
            });
        })
    };

    if session.state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Companies} /> };
    }

    html! {
        <SignUpForm on_sign_up={on_sign_up} error={(*error).clone()} busy={*busy} />
    }
}
