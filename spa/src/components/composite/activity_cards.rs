use shared::view::{
    ActivitiesView, ActivityCard, ParticipantRow, RemovalTarget, NO_PARTICIPANTS_MESSAGE,
};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub activities: ActivitiesView,
    pub on_remove: Callback<RemovalTarget>,
}

fn render_participant(row: &ParticipantRow, on_remove: &Callback<RemovalTarget>) -> Html {
    let removal = match &row.removal {
        Some(target) => {
            let on_click = {
                let target = target.clone();
                let on_remove = on_remove.clone();
                Callback::from(move |_| on_remove.emit(target.clone()))
            };
            html! {
                <button class="delete-btn btn btn-sm btn-link"
                    data-activity={target.activity.clone()}
                    data-email={target.email.clone()}
                    title="Unregister"
                    onclick={on_click}>{"❌"}</button>
            }
        }
        None => html! {},
    };

    html! {
        <li>
            <span class="participant-email">{&row.email}</span>
            {removal}
        </li>
    }
}

fn render_card(card: &ActivityCard, on_remove: &Callback<RemovalTarget>) -> Html {
    let participants = if card.participants.is_empty() {
        html! { <p><em>{NO_PARTICIPANTS_MESSAGE}</em></p> }
    } else {
        let rows = card
            .participants
            .iter()
            .map(|row| render_participant(row, on_remove));
        html! {
            <div class="participants-section">
                <h5>{"Participants:"}</h5>
                <ul class="participants-list">
                    { for rows }
                </ul>
            </div>
        }
    };

    html! {
        <div class="activity-card card mb-3">
            <div class="card-body">
                <h4 class="card-title">{&card.name}</h4>
                <p>{&card.description}</p>
                <p><strong>{"Schedule:"}</strong>{" "}{&card.schedule}</p>
                <p><strong>{"Availability:"}</strong>{format!(" {} spots left", card.spots_left)}</p>
                <div class="participants-container">
                    {participants}
                </div>
            </div>
        </div>
    }
}

#[function_component(ActivityCards)]
pub fn activity_cards(props: &Props) -> Html {
    let content = match &props.activities {
        ActivitiesView::Loading => html! {
            <p class="text-muted">{"Loading activities..."}</p>
        },
        ActivitiesView::Failed { message } => html! {
            <p>{*message}</p>
        },
        ActivitiesView::Loaded(cards) => {
            let cards_html = cards.iter().map(|card| render_card(card, &props.on_remove));
            html! { { for cards_html } }
        }
    };

    html! {
        <div id="activities-list">
            {content}
        </div>
    }
}
