use shared::Company;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub company: Company,
}

#[function_component(CompanyCard)]
pub fn company_card(props: &Props) -> Html {
    let company = &props.company;
    let logo = company
        .logo_url
        .clone()
        .map(|logo| html! { <img class="float-end ms-3" style="max-height: 48px;" src={logo} alt={company.name.clone()} /> })
        .unwrap_or_default();
    let employees = company
        .num_employees
        .map(|count| html! { <small class="text-muted">{format!("{count} employees")}</small> })
        .unwrap_or_default();

    html! {
        <div class="card mb-3">
            <div class="card-body">
                {logo}
                <h5 class="card-title">
                    <Link<Route> to={Route::Company { handle: company.handle.clone() }}>
                        {company.name.clone()}
                    </Link<Route>>
                </h5>
                <p class="card-text">{company.description.clone()}</p>
                {employees}
            </div>
        </div>
    }
}
