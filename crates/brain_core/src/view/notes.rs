//! Notes page.

use super::action::Action;
use super::node::{Tag, ViewNode};
use crate::model::note::Note;

pub fn render(notes: &[Note]) -> ViewNode {
    let form = ViewNode::new(Tag::Form)
        .with_id("note-form")
        .with_text("Add note")
        .with_attr("fields", "title,content");

    let mut list = ViewNode::new(Tag::List).with_id("notes-list");
    if notes.is_empty() {
        list = list.with_child(ViewNode::text("No notes yet.").with_class("empty"));
    }
    for (index, note) in notes.iter().enumerate() {
        let mut item = ViewNode::new(Tag::Item)
            .with_id(format!("note-{index}"))
            .with_text(note.display_title())
            .with_child(
                ViewNode::button("edit", None)
                    .with_id(format!("note-{index}-edit"))
                    .with_attr("prompt", "title,content"),
            )
            .with_child(
                ViewNode::button("delete", Some(Action::DeleteNote { index }))
                    .with_id(format!("note-{index}-delete")),
            );
        if !note.content.trim().is_empty() {
            item = item.with_child(
                ViewNode::new(Tag::List).with_child(
                    ViewNode::text(note.content.trim()).with_id(format!("note-{index}-content")),
                ),
            );
        }
        list = list.with_child(item);
    }

    ViewNode::new(Tag::Section)
        .with_id("notes-view")
        .with_child(form)
        .with_child(list)
}
