use strum_macros::IntoStaticStr;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(PartialEq, Default, Copy, Clone, Debug, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Search,
}

#[derive(PartialEq, Properties, Debug)]
pub struct Props {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub input_type: InputType,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

/// Controlled text input, optionally labelled.
#[function_component(FormField)]
pub fn form_field(props: &Props) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let input = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
            if let Some(input) = input {
                on_change.emit(input.value());
            }
        })
    };
    let input_type: &'static str = props.input_type.into();

    let input = html! {
        <input
            id={props.id.clone()}
            name={props.id.clone()}
            type={input_type}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            class={classes!("form-control", props.class.clone())}
            disabled={props.disabled}
            oninput={on_input} />
    };

    match &props.label {
        Some(label) => html! {
            <div class="mb-3">
                <label for={props.id.clone()} class="form-label">{label.clone()}</label>
                {input}
            </div>
        },
        None => input,
    }
}
