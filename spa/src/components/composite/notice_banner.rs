use shared::state::{Notice, NoticeKind};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &Props) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div id="message" class={classes!("alert", alert_class(notice), notice.kind.as_ref().to_owned())} role="alert">
                {&notice.text}
            </div>
        },
        None => html! {
            <div id="message" class="hidden"></div>
        },
    }
}

fn alert_class(notice: &Notice) -> &'static str {
    match notice.kind {
        NoticeKind::Success => "alert-success",
        NoticeKind::Error => "alert-danger",
    }
}
