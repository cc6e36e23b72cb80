use shared::state::SignupForm;
use shared::view::ACTIVITY_PLACEHOLDER;
use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};
use crate::components::atoms::select::Select;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub form: SignupForm,
    pub options: Vec<String>,
    /// Submitting is disabled for anonymous viewers.
    pub enabled: bool,
    pub on_change: Callback<SignupForm>,
    pub on_submit: Callback<SignupForm>,
}

#[function_component(SignupPanel)]
pub fn signup_panel(props: &Props) -> Html {
    let on_change_email = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |email: String| {
            let mut data = form.clone();
            data.email = email;
            on_change.emit(data);
        })
    };

    let on_change_activity = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |activity: String| {
            let mut data = form.clone();
            data.activity = activity;
            on_change.emit(data);
        })
    };

    let on_form_submit = {
        let form = props.form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(form.clone());
        })
    };

    html! {
        <form id="signup-form" onsubmit={on_form_submit}>
            <div class="mb-3">
                <label for="email" class="form-label">{"Student Email"}</label>
                <InputText
                    id="email"
                    name="email"
                    value={props.form.email.clone()}
                    placeholder="your-email@mergington.edu"
                    input_type={InputType::Email}
                    class={classes!("form-control")}
                    required={true}
                    on_change={on_change_email} />
            </div>
            <div class="mb-3">
                <label for="activity" class="form-label">{"Select Activity"}</label>
                <Select
                    id="activity"
                    name="activity"
                    placeholder={ACTIVITY_PLACEHOLDER}
                    options={props.options.clone()}
                    selected={props.form.activity.clone()}
                    required={true}
                    on_change={on_change_activity} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={!props.enabled}>
                {"Sign Up"}
            </button>
        </form>
    }
}
