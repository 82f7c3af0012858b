use shared::{JobId, JobSummary};
use yew::prelude::*;

/// `120000` becomes `$120,000`.
pub fn format_salary(salary: u64) -> String {
    let digits = salary.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub job: JobSummary,
    #[prop_or_default]
    pub company_name: Option<AttrValue>,
    pub applied: bool,
    #[prop_or_default]
    pub busy: bool,
    pub on_apply: Callback<JobId>,
}

#[function_component(JobCard)]
pub fn job_card(props: &Props) -> Html {
    let job = &props.job;
    let on_click = {
        let on_apply = props.on_apply.clone();
        let job_id = job.id;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_apply.emit(job_id);
        })
    };

    let company = props
        .company_name
        .clone()
        .map(|name| html! { <p class="card-subtitle mb-2 text-muted">{name}</p> })
        .unwrap_or_default();
    let salary = job
        .salary
        .map(|salary| html! { <div>{"Salary: "}{format_salary(salary)}</div> })
        .unwrap_or_default();
    let equity = job
        .equity
        .clone()
        .map(|equity| html! { <div>{"Equity: "}{equity}</div> })
        .unwrap_or_default();

    html! {
        <div class="card mb-3">
            <div class="card-body">
                <h5 class="card-title">{job.title.clone()}</h5>
                {company}
                {salary}
                {equity}
                <button class="btn btn-danger float-end" onclick={on_click}
                    disabled={props.applied || props.busy}>
                    { if props.applied { "Applied" } else { "Apply" } }
                </button>
            </div>
        </div>
    }
}
