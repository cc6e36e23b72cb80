use std::fmt::Write;
use std::process::ExitCode;

use shared::state::NoticeKind;
use shared::view::{ActivitiesView, PageView, NO_PARTICIPANTS_MESSAGE};

/// Plain-text rendering of a page view for the terminal.
pub fn render_text(view: &PageView) -> String {
    let mut out = String::new();

    if view.authenticated {
        let _ = writeln!(out, "Signed in as {}", view.teacher_name);
    } else {
        let _ = writeln!(out, "Not signed in");
    }
    let _ = writeln!(out);

    match &view.activities {
        ActivitiesView::Loading => {
            let _ = writeln!(out, "Loading activities...");
        }
        ActivitiesView::Failed { message } => {
            let _ = writeln!(out, "{message}");
        }
        ActivitiesView::Loaded(cards) => {
            for card in cards {
                let _ = writeln!(out, "{} ({} spots left)", card.name, card.spots_left);
                let _ = writeln!(out, "  {}", card.description);
                let _ = writeln!(out, "  Schedule: {}", card.schedule);
                if card.participants.is_empty() {
                    let _ = writeln!(out, "  {NO_PARTICIPANTS_MESSAGE}");
                } else {
                    let _ = writeln!(out, "  Participants:");
                    for row in &card.participants {
                        match &row.removal {
                            Some(_) => {
                                let _ = writeln!(out, "    - {} [removable]", row.email);
                            }
                            None => {
                                let _ = writeln!(out, "    - {}", row.email);
                            }
                        }
                    }
                }
                let _ = writeln!(out);
            }
        }
    }

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "[{}] {}", notice.kind.as_ref(), notice.text);
    }
    out
}

/// Failure when the command left an error notice. The notice text itself is
/// already part of [`render_text`].
pub fn exit_code(view: &PageView) -> ExitCode {
    match &view.notice {
        Some(notice) if notice.kind == NoticeKind::Error => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
