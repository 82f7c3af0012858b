use secrecy::SecretString;
use shared::SignInRequest;
use yew::prelude::*;

use crate::components::atoms::form_field::{FormField, InputType};

#[derive(Debug, PartialEq, Default, Clone)]
pub struct LoginFormData {
    pub username: String,
    pub password: String,
}

impl LoginFormData {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    fn normalized(mut self) -> Self {
        self.username = self.username.trim().to_owned();
        self
    }
}

impl From<LoginFormData> for SignInRequest {
    fn from(value: LoginFormData) -> Self {
        SignInRequest {
            username: value.username,
            password: SecretString::from(value.password),
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginFormData>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let state = use_state(LoginFormData::default);

    let on_change_username = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data: LoginFormData = (*state).clone();
            data.username = input_text;
            state.set(data);
        })
    };

    let on_change_password = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.password = input_text;
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let data = (*state).clone();
            if data.is_complete() {
                on_login.emit(data.normalized());
            }
        })
    };

    let error = props
        .error
        .clone()
        .map(|error| html! { <div class="alert alert-danger">{error}</div> })
        .unwrap_or_default();

    html! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-4">
                    <h2 class="text-center mb-4">{ "Log In" }</h2>
                    <form onsubmit={on_submit}>
                        <FormField
                            id="username"
                            label="Username"
                            value={state.username.clone()}
                            on_change={on_change_username} />
                        <FormField
                            id="password"
                            label="Password"
                            input_type={InputType::Password}
                            value={state.password.clone()}
                            on_change={on_change_password} />
                        {error}
                        <div class="d-grid">
                            <input class="btn btn-primary" type="submit" value="Log In"
                                disabled={props.busy || !state.is_complete()} />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
