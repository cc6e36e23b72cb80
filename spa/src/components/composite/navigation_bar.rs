use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub teacher_name: String,
    pub authenticated: bool,
    pub logout_visible: bool,
    pub on_user_icon: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &Props) -> Html {
    let on_user_icon_click = {
        let on_user_icon = props.on_user_icon.clone();
        Callback::from(move |_| {
            on_user_icon.emit(());
        })
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    let user_icon_classes = if props.authenticated {
        classes!("btn", "btn-sm", "me-2", "btn-primary", "authenticated")
    } else {
        classes!("btn", "btn-sm", "me-2", "btn-outline-primary")
    };

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <a class="navbar-brand" href="#">{"Mergington High School"}</a>
                <div class="d-flex align-items-center">
                    <button id="user-icon" onclick={on_user_icon_click} class={user_icon_classes}
                        title={if props.authenticated { "Signed in" } else { "Teacher login" }}>
                        {"👤"}
                    </button>
                    <span id="teacher-name" class="navbar-text me-3">{&props.teacher_name}</span>
                    if props.logout_visible {
                        <button id="logout-btn" onclick={on_logout_click} class="btn btn-sm btn-outline-secondary">
                            {"Logout"}
                        </button>
                    }
                </div>
            </div>
        </nav>
    }
}
