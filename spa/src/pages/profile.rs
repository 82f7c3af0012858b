use yew::{platform::spawn_local, prelude::*};

use crate::{
    components::{
        atoms::loading::Loading,
        composite::profile_form::{ProfileForm, ProfileFormData, SaveStatus},
    },
    context::use_session,
};

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_session();
    let status = use_state(|| None::<SaveStatus>);
    let busy = use_state(|| false);

    let on_save = {
        let session = session.clone();
        let status = status.clone();
        let busy = busy.clone();
        Callback::from(move |data: ProfileFormData| {
            let shell = session.shell();
            let status = status.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match shell.update_user(data).await {
                    Ok(_) => status.set(Some(SaveStatus::Saved)),
                    Err(error) => {
                        log::warn!("Profile update failed, error={error}");
                        status.set(Some(SaveStatus::Failed(error.to_string().into())));
                    }
                }
                busy.set(false);
            });
        })
    };

    let Some(user) = session.state.user().cloned() else {
        return html! { <Loading message="Loading your profile..." /> };
    };
    let applications = match user.applications.len() {
        0 => "You have not applied to any jobs yet.".to_owned(),
        1 => "You have applied to 1 job.".to_owned(),
        count => format!("You have applied to {count} jobs."),
    };

    html! {
        <div class="row justify-content-center">
            <ProfileForm user={user} on_save={on_save} status={(*status).clone()} busy={*busy} />
            <p class="text-muted mt-3 text-center">{applications}</p>
        </div>
    }
}
