use shared::JobId;
use yew::{platform::spawn_local, prelude::*};

use crate::context::use_session;

pub mod companies;
pub mod company;
pub mod home;
pub mod jobs;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod sign_up;

/// Apply state shared by the views listing jobs.
#[derive(Clone, PartialEq)]
pub struct JobApplication {
    pub pending: Option<JobId>,
    pub error: Option<AttrValue>,
    pub apply: Callback<JobId>,
}

#[hook]
pub fn use_job_application() -> JobApplication {
    let session = use_session();
    let pending = use_state(|| None::<JobId>);
    let error = use_state(|| None::<AttrValue>);

    let apply = {
        let pending = pending.clone();
        let error = error.clone();
        Callback::from(move |job_id: JobId| {
            let Some(username) = session.state.username().map(str::to_owned) else {
                return;
            };
            let shell = session.shell();
            let pending = pending.clone();
            let error = error.clone();
            pending.set(Some(job_id));
            spawn_local(async move {
                match shell.update_job(&username, job_id).await {
                    Ok(_) => error.set(None),
                    Err(apply_error) => {
                        log::warn!("Apply to job failed, job_id={job_id}, error={apply_error}");
                        error.set(Some(format!("Could not apply: {apply_error}").into()));
                    }
                }
                pending.set(None);
            });
        })
    };

    JobApplication {
        pending: *pending,
        error: (*error).clone(),
        apply,
    }
}
