use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::{
    api::JoblyApi,
    components::{atoms::loading::Loading, composite::job_card::JobCard},
    context::use_session,
    pages::use_job_application,
};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub handle: String,
}

#[function_component(CompanyPage)]
pub fn company_page(props: &Props) -> Html {
    let session = use_session();
    let application = use_job_application();

    let company = {
        let api = session.api.clone();
        let handle = props.handle.clone();
        use_async(async move {
            api.get_company(&handle)
                .await
                .map_err(|error| error.to_string())
        })
    };

    {
        let company = company.clone();
        use_effect_with(props.handle.clone(), move |_| {
            company.run();
        });
    }

    if company.loading {
        return html! { <Loading /> };
    }
    if let Some(error) = &company.error {
        return html! { <div class="alert alert-danger">{error.clone()}</div> };
    }
    let Some(company) = company.data.clone() else {
        return Html::default();
    };

    let user = session.state.user();
    let jobs = company
        .jobs
        .into_iter()
        .map(|job| {
            let applied = user.is_some_and(|user| user.has_applied(job.id));
            let busy = application.pending == Some(job.id);
            html! {
                <JobCard job={job} applied={applied} busy={busy} on_apply={application.apply.clone()} />
            }
        })
        .collect::<Html>();
    let apply_error = application
        .error
        .clone()
        .map(|error| html! { <div class="alert alert-danger">{error}</div> })
        .unwrap_or_default();

    html! {
        <div class="col-md-8 offset-md-2">
            <h2>{company.name}</h2>
            <p>{company.description}</p>
            {apply_error}
            {jobs}
        </div>
    }
}
