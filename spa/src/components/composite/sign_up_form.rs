use secrecy::SecretString;
use shared::SignUpRequest;
use yew::prelude::*;

use crate::components::atoms::form_field::{FormField, InputType};

#[derive(Debug, PartialEq, Default, Clone)]
pub struct SignUpFormData {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SignUpFormData {
    /// Labels of the fields still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Username", self.username.trim()),
            ("Password", self.password.as_str()),
            ("First name", self.first_name.trim()),
            ("Last name", self.last_name.trim()),
            ("Email", self.email.trim()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    fn normalized(self) -> Self {
        SignUpFormData {
            username: self.username.trim().to_owned(),
            password: self.password,
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
        }
    }
}

impl From<SignUpFormData> for SignUpRequest {
    fn from(value: SignUpFormData) -> Self {
        SignUpRequest {
            username: value.username,
            password: SecretString::from(value.password),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_sign_up: Callback<SignUpFormData>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(SignUpForm)]
pub fn sign_up_form(props: &Props) -> Html {
    let state = use_state(SignUpFormData::default);
    let submitted = use_state(|| false);

    let field = |update: fn(&mut SignUpFormData, String)| {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            update(&mut data, input_text);
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let submitted = submitted.clone();
        let on_sign_up = props.on_sign_up.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submitted.set(true);
            let data = (*state).clone();
            if data.missing_fields().is_empty() {
                on_sign_up.emit(data.normalized());
            }
        })
    };

    let missing = state.missing_fields();
    let validation = if *submitted && !missing.is_empty() {
        html! {
            <div class="alert alert-warning">
                {format!("Please fill in: {}", missing.join(", "))}
            </div>
        }
    } else {
        Html::default()
    };
    let error = props
        .error
        .clone()
        .map(|error| html! { <div class="alert alert-danger">{error}</div> })
        .unwrap_or_default();

    html! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-5">
                    <h2 class="text-center mb-4">{ "Sign Up" }</h2>
                    <form onsubmit={on_submit}>
                        <FormField id="username" label="Username" value={state.username.clone()}
                            on_change={field(|data, value| data.username = value)} />
                        <FormField id="password" label="Password" input_type={InputType::Password}
                            value={state.password.clone()}
                            on_change={field(|data, value| data.password = value)} />
                        <FormField id="first-name" label="First name" value={state.first_name.clone()}
                            on_change={field(|data, value| data.first_name = value)} />
                        <FormField id="last-name" label="Last name" value={state.last_name.clone()}
                            on_change={field(|data, value| data.last_name = value)} />
                        <FormField id="email" label="Email" input_type={InputType::Email}
                            value={state.email.clone()}
                            on_change={field(|data, value| data.email = value)} />
                        {validation}
                        {error}
                        <div class="d-grid">
                            <input class="btn btn-primary" type="submit" value="Sign Up" disabled={props.busy} />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
