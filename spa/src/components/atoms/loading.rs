use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub message: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &Props) -> Html {
    html! {
        <div class="d-flex align-items-center gap-2 my-4">
            <div class="spinner-border spinner-border-sm" role="status"></div>
            <span>{props.message.clone()}</span>
        </div>
    }
}
