use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement};
use yew::prelude::*;

#[derive(PartialEq, Default, Copy, Clone, Debug)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
}

impl InputType {
    fn as_type(&self) -> AttrValue {
        match self {
            Self::Text => "text".into(),
            Self::Password => "password".into(),
            Self::Email => "email".into(),
        }
    }
}

#[derive(PartialEq, Properties, Debug)]
pub struct Props {
    pub id: String,
    pub name: String,
    pub value: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub input_type: InputType,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub required: bool,
    pub on_change: Callback<String>,
}

/// Controlled text input: the owner holds the value and receives every edit.
#[function_component(InputText)]
pub fn input_text(props: &Props) -> Html {
    let on_input = {
        let callback = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let target: EventTarget = event.target().expect("Fail to cast to EventTarget");
            let value: String = target.unchecked_into::<HtmlInputElement>().value();
            callback.emit(value);
        })
    };
    html! {
        <input
            id={props.id.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            type={props.input_type.as_type()}
            placeholder={props.placeholder.clone()}
            class={props.class.clone()}
            required={props.required}
            oninput={on_input} />
    }
}
