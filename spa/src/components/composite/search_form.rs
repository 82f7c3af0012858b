use yew::prelude::*;

use crate::components::atoms::form_field::{FormField, InputType};

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or(AttrValue::Static("Enter search term..."))]
    pub placeholder: AttrValue,
    pub on_search: Callback<Option<String>>,
}

/// Emits the trimmed term, or `None` for a blank search.
#[function_component(SearchForm)]
pub fn search_form(props: &Props) -> Html {
    let term = use_state(String::new);

    let on_change = {
        let term = term.clone();
        Callback::from(move |text: String| term.set(text))
    };

    let on_submit = {
        let term = term.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let trimmed = term.trim();
            on_search.emit((!trimmed.is_empty()).then(|| trimmed.to_owned()));
        })
    };

    html! {
        <div class="d-flex justify-content-between align-items-center mb-4">
            <form onsubmit={on_submit} class="d-flex w-100">
                <FormField
                    id="search"
                    placeholder={props.placeholder.clone()}
                    input_type={InputType::Search}
                    class={classes!("me-2")}
                    value={(*term).clone()}
                    on_change={on_change} />
                <input class="btn btn-outline-success" type="submit" value="Search" />
            </form>
        </div>
    }
}
