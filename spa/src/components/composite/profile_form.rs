use secrecy::SecretString;
use shared::{UpdateUserRequest, UserProfile};
use yew::prelude::*;

use crate::components::atoms::form_field::{FormField, InputType};

#[derive(Debug, PartialEq, Default, Clone)]
pub struct ProfileFormData {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Left empty to keep the current password.
    pub password: String,
}

impl ProfileFormData {
    /// Labels of the required fields left blank, in form order. The password
    /// is optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("First name", self.first_name.trim()),
            ("Last name", self.last_name.trim()),
            ("Email", self.email.trim()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

impl From<&UserProfile> for ProfileFormData {
    fn from(value: &UserProfile) -> Self {
        ProfileFormData {
            username: value.username.clone(),
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            password: String::new(),
        }
    }
}

impl From<ProfileFormData> for UpdateUserRequest {
    fn from(value: ProfileFormData) -> Self {
        UpdateUserRequest {
            first_name: Some(value.first_name.trim().to_owned()),
            last_name: Some(value.last_name.trim().to_owned()),
            email: Some(value.email.trim().to_owned()),
            password: (!value.password.is_empty()).then(|| SecretString::from(value.password)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Saved,
    Failed(AttrValue),
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub user: UserProfile,
    pub on_save: Callback<ProfileFormData>,
    #[prop_or_default]
    pub status: Option<SaveStatus>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(ProfileForm)]
pub fn profile_form(props: &Props) -> Html {
    let state = {
        let user = props.user.clone();
        use_state(move || ProfileFormData::from(&user))
    };
    let submitted = use_state(|| false);

    let field = |update: fn(&mut ProfileFormData, String)| {
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
        let on_save = props.on_save.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submitted.set(true);
            let data = (*state).clone();
            if !data.missing_fields().is_empty() {
                return;
            }
            let mut cleared = data.clone();
            cleared.password.clear();
            state.set(cleared);
            on_save.emit(data);
        })
    };

    let missing = state.missing_fields();
    let invalid = *submitted && !missing.is_empty();
    let validation = if invalid {
        html! {
            <div class="alert alert-warning">
                {format!("Please fill in: {}", missing.join(", "))}
            </div>
        }
    } else {
        Html::default()
    };
    let status = match &props.status {
        _ if invalid => Html::default(),
        Some(SaveStatus::Saved) => html! { <div class="alert alert-success">{"Profile updated."}</div> },
        Some(SaveStatus::Failed(error)) => html! { <div class="alert alert-danger">{error.clone()}</div> },
        None => Html::default(),
    };

    html! {
        <div class="col-md-6">
            <h2 class="mb-4">{ "Profile" }</h2>
            <form onsubmit={on_submit}>
                <FormField id="username" label="Username" value={state.username.clone()}
                    disabled={true} on_change={Callback::noop()} />
                <FormField id="first-name" label="First name" value={state.first_name.clone()}
                    on_change={field(|data, value| data.first_name = value)} />
                <FormField id="last-name" label="Last name" value={state.last_name.clone()}
                    on_change={field(|data, value| data.last_name = value)} />
                <FormField id="email" label="Email" input_type={InputType::Email}
                    value={state.email.clone()}
                    on_change={field(|data, value| data.email = value)} />
                <FormField id="password" label="New password" input_type={InputType::Password}
                    placeholder="leave empty to keep the current one"
                    value={state.password.clone()}
                    on_change={field(|data, value| data.password = value)} />
                {validation}
                {status}
                <input class="btn btn-primary" type="submit" value="Save Changes" disabled={props.busy} />
            </form>
        </div>
    }
}
