use std::ops::Deref;
use std::rc::Rc;

use shared::controller::Controller;
use shared::endpoints::Endpoints;
use shared::state::{dismiss_after, AppAction, AppState, LoginForm, SignupForm};
use shared::view::{render, RemovalTarget};
use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::{
    api::HttpApi,
    components::composite::{
        activity_cards::ActivityCards, login_modal::LoginModal, navigation_bar::NavigationBar,
        notice_banner::NoticeBanner, signup_form::SignupPanel,
    },
    storage::LocalTokenStore,
};

type AppController = Controller<HttpApi, LocalTokenStore>;

/// Yew-facing wrapper: the reducer only forwards to [`AppState::apply`].
#[derive(Debug, Default, PartialEq)]
pub struct AppStore(AppState);

impl Deref for AppStore {
    type Target = AppState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for AppStore {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(AppStore(state))
    }
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub endpoints: Endpoints,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    let store = use_reducer(AppStore::default);
    let controller = use_memo(props.endpoints.clone(), |endpoints| {
        AppController::new(HttpApi::new(endpoints.clone()), LocalTokenStore)
    });

    {
        let controller = controller.clone();
        let dispatcher = store.dispatcher();
        use_mount(move || {
            spawn_local(async move {
                let dispatch = move |action: AppAction| dispatcher.dispatch(action);
                controller.bootstrap(&dispatch).await;
            });
        });
    }

    {
        let dispatcher = store.dispatcher();
        let notice_id = store.notice.as_ref().map(|notice| notice.id);
        use_effect_with(notice_id, move |notice_id| {
            if let Some(id) = *notice_id {
                spawn_local(async move {
                    let dispatch = move |action: AppAction| dispatcher.dispatch(action);
                    dismiss_after(id, sleep, &dispatch).await;
                });
            }
            || {}
        });
    }

    let on_open_login = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AppAction::LoginModalOpened))
    };

    let on_close_login = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AppAction::LoginModalClosed))
    };

    let on_login_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |form: LoginForm| dispatcher.dispatch(AppAction::LoginFormEdited(form)))
    };

    let on_login = {
        let controller = controller.clone();
        let dispatcher = store.dispatcher();
        Callback::from(move |form: LoginForm| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let dispatch = move |action: AppAction| dispatcher.dispatch(action);
                controller.login(form, &dispatch).await;
            });
        })
    };

    let on_logout = {
        let controller = controller.clone();
        let dispatcher = store.dispatcher();
        let session = store.session.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let session = session.clone();
            log::info!("Logging teacher out");
            spawn_local(async move {
                let dispatch = move |action: AppAction| dispatcher.dispatch(action);
                controller.logout(&session, &dispatch).await;
            });
        })
    };

    let on_signup_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |form: SignupForm| {
            dispatcher.dispatch(AppAction::SignupFormEdited(form))
        })
    };

    let on_signup = {
        let controller = controller.clone();
        let dispatcher = store.dispatcher();
        let session = store.session.clone();
        Callback::from(move |form: SignupForm| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let session = session.clone();
            spawn_local(async move {
                let dispatch = move |action: AppAction| dispatcher.dispatch(action);
                controller.signup(&session, form, &dispatch).await;
            });
        })
    };

    let on_remove = {
        let controller = controller.clone();
        let dispatcher = store.dispatcher();
        let session = store.session.clone();
        Callback::from(move |target: RemovalTarget| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let session = session.clone();
            spawn_local(async move {
                let dispatch = move |action: AppAction| dispatcher.dispatch(action);
                controller.unregister(&session, target, &dispatch).await;
            });
        })
    };

    let view = render(&store);

    html! {
        <>
            <NavigationBar
                teacher_name={view.teacher_name.clone()}
                authenticated={view.authenticated}
                logout_visible={view.logout_visible}
                on_user_icon={on_open_login}
                on_logout={on_logout} />
            <main class="container mt-4">
                <NoticeBanner notice={view.notice.clone()} />
                <div class="row">
                    <section class="col-md-7">
                        <h3>{"Extracurricular Activities"}</h3>
                        <ActivityCards activities={view.activities.clone()} on_remove={on_remove} />
                    </section>
                    <section class="col-md-5">
                        <h3>{"Sign Up a Student"}</h3>
                        <SignupPanel
                            form={view.signup_form.clone()}
                            options={view.activity_options.clone()}
                            enabled={view.signup_enabled}
                            on_change={on_signup_change}
                            on_submit={on_signup} />
                    </section>
                </div>
            </main>
            <LoginModal
                open={view.login_modal_open}
                form={view.login_form.clone()}
                on_change={on_login_change}
                on_submit={on_login}
                on_close={on_close_login} />
        </>
    }
}
