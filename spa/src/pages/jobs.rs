use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::{
    api::JoblyApi,
    components::{
        atoms::loading::Loading,
        composite::{job_card::JobCard, search_form::SearchForm},
    },
    context::use_session,
    pages::use_job_application,
};

#[function_component(Jobs)]
pub fn jobs() -> Html {
    let session = use_session();
    let application = use_job_application();
    let filter = use_state(|| None::<String>);

    let jobs = {
        let api = session.api.clone();
        let filter = (*filter).clone();
        use_async(async move {
            api.get_jobs(filter.as_deref())
                .await
                .map_err(|error| error.to_string())
        })
    };

    {
        let jobs = jobs.clone();
        use_effect_with((*filter).clone(), move |_| {
            jobs.run();
        });
    }

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |term: Option<String>| filter.set(term))
    };

    let user = session.state.user();
    let content = if jobs.loading {
        html! { <Loading /> }
    } else if let Some(error) = &jobs.error {
        html! { <div class="alert alert-danger">{error.clone()}</div> }
    } else {
        match &jobs.data {
            Some(list) if list.is_empty() => html! { <p class="lead">{"Sorry, no results were found!"}</p> },
            Some(list) => list
                .iter()
                .map(|job| {
                    let applied = user.is_some_and(|user| user.has_applied(job.id));
                    html! {
                        <JobCard
                            job={shared::JobSummary::from(job.clone())}
                            company_name={job.company_name.clone().map(AttrValue::from)}
                            applied={applied}
                            busy={application.pending == Some(job.id)}
                            on_apply={application.apply.clone()} />
                    }
                })
                .collect::<Html>(),
            None => Html::default(),
        }
    };

    let apply_error = application
        .error
        .clone()
        .map(|error| html! { <div class="alert alert-danger">{error}</div> })
        .unwrap_or_default();

    html! {
        <div class="col-md-8 offset-md-2">
            <SearchForm placeholder="Search jobs by title..." on_search={on_search} />
            {apply_error}
            {content}
        </div>
    }
}
