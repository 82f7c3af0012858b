use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::{
    api::JoblyApi,
    components::{
        atoms::loading::Loading,
        composite::{company_card::CompanyCard, search_form::SearchForm},
    },
    context::use_session,
};

#[function_component(Companies)]
pub fn companies() -> Html {
    let session = use_session();
    let filter = use_state(|| None::<String>);

    let companies = {
        let api = session.api.clone();
        let filter = (*filter).clone();
        use_async(async move {
            api.get_companies(filter.as_deref())
                .await
                .map_err(|error| error.to_string())
        })
    };

    {
        let companies = companies.clone();
        use_effect_with((*filter).clone(), move |_| {
            companies.run();
        });
    }

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |term: Option<String>| filter.set(term))
    };

    let content = if companies.loading {
        html! { <Loading /> }
    } else if let Some(error) = &companies.error {
        html! { <div class="alert alert-danger">{error.clone()}</div> }
    } else {
        match &companies.data {
            Some(list) if list.is_empty() => html! { <p class="lead">{"Sorry, no results were found!"}</p> },
            Some(list) => list
                .iter()
                .map(|company| html! { <CompanyCard company={company.clone()} /> })
                .collect::<Html>(),
            None => Html::default(),
        }
    };

    html! {
        <div class="col-md-8 offset-md-2">
            <SearchForm placeholder="Search companies by name..." on_search={on_search} />
            {content}
        </div>
    }
}
