use shared::state::LoginForm;
use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub open: bool,
    pub form: LoginForm,
    pub on_change: Callback<LoginForm>,
    pub on_submit: Callback<LoginForm>,
    pub on_close: Callback<()>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &Props) -> Html {
    let on_change_username = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |input_text: String| {
            let mut data = form.clone();
            data.username = input_text;
            on_change.emit(data);
        })
    };

    let on_change_password = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |input_text: String| {
            let mut data = form.clone();
            data.password = input_text;
            on_change.emit(data);
        })
    };

    let on_form_submit = {
        let form = props.form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !form.username.is_empty() && !form.password.is_empty() {
                on_submit.emit(form.clone());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    // Clicks on the dialog itself must not reach the backdrop handler.
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            if event.target() == event.current_target() {
                on_close.emit(());
            }
        })
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div id="login-modal" class="modal d-block" tabindex="-1" style="background: rgba(0, 0, 0, 0.5)"
            onclick={on_backdrop_click}>
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Teacher Login"}</h5>
                        <button id="close-modal" type="button" class="btn-close" aria-label="Close"
                            onclick={on_close_click}></button>
                    </div>
                    <div class="modal-body">
                        <form id="login-form" onsubmit={on_form_submit}>
                            <div class="mb-3">
                                <label for="username" class="form-label">{"Username"}</label>
                                <InputText
                                    id="username"
                                    name="username"
                                    value={props.form.username.clone()}
                                    placeholder="Enter your username"
                                    class={classes!("form-control")}
                                    input_type={InputType::Text}
                                    required={true}
                                    on_change={on_change_username} />
                            </div>
                            <div class="mb-3">
                                <label for="password" class="form-label">{"Password"}</label>
                                <InputText
                                    id="password"
                                    name="password"
                                    value={props.form.password.clone()}
                                    placeholder="Enter your password"
                                    class={classes!("form-control")}
                                    input_type={InputType::Password}
                                    required={true}
                                    on_change={on_change_password} />
                            </div>
                            <div class="d-grid">
                                <input class="btn btn-primary" type="submit" value="Login" />
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
