//! Home page: read-only overview across every store.

use super::finances::render_summary;
use super::node::{Tag, ViewNode};
use crate::service::summary::HomeSummary;

pub fn render(summary: &HomeSummary) -> ViewNode {
    let next_event = match &summary.next_event {
        Some(event) => format!("Next event: {} on {}", event.title, event.date),
        None => "Next event: none scheduled".to_string(),
    };

    let overview = ViewNode::new(Tag::List)
        .with_id("home-summary")
        .with_child(
            ViewNode::new(Tag::Item)
                .with_id("summary-notes")
                .with_text(format!("Notes: {}", summary.note_count)),
        )
        .with_child(
            ViewNode::new(Tag::Item)
                .with_id("summary-projects")
                .with_text(format!(
                    "Projects: {} ({}/{} tasks done)",
                    summary.project_count, summary.tasks_done, summary.tasks_total
                )),
        )
        .with_child(
            ViewNode::new(Tag::Item)
                .with_id("summary-pending")
                .with_text(format!("Pending timetable tasks: {}", summary.pending_timetable)),
        )
        .with_child(
            ViewNode::new(Tag::Item)
                .with_id("summary-next-event")
                .with_text(next_event),
        );

    ViewNode::new(Tag::Section)
        .with_id("home-view")
        .with_child(overview)
        .with_child(render_summary(&summary.finance))
}
