//! Settings page: appearance and data management.

use super::action::Action;
use super::node::{Tag, ViewNode};
use crate::model::appearance::Appearance;

pub fn render(appearance: &Appearance) -> ViewNode {
    let appearance_section = ViewNode::new(Tag::Section)
        .with_id("appearance")
        .with_text("Appearance")
        .with_child(
            ViewNode::new(Tag::Item)
                .with_id("setting-theme")
                .with_text(format!("Theme: {}", appearance.theme.as_str()))
                .with_child(
                    ViewNode::button("toggle", Some(Action::ToggleTheme)).with_id("theme-toggle"),
                ),
        )
        .with_child(
            ViewNode::new(Tag::Item)
                .with_id("setting-accent")
                .with_text(format!("Accent colour: {}", appearance.accent_color.as_str()))
                .with_child(
                    ViewNode::button("change", None)
                        .with_id("accent-change")
                        .with_attr("prompt", "color"),
                ),
        )
        .with_child(
            ViewNode::new(Tag::Item)
                .with_id("setting-avatar")
                .with_text(format!("Avatar letter: {}", appearance.avatar_letter.as_str()))
                .with_child(
                    ViewNode::button("change", None)
                        .with_id("avatar-change")
                        .with_attr("prompt", "letter"),
                ),
        );

    let data_section = ViewNode::new(Tag::Section)
        .with_id("data")
        .with_text("Data")
        .with_child(ViewNode::button("export", None).with_id("data-export"))
        .with_child(
            ViewNode::button("import", None)
                .with_id("data-import")
                .with_attr("prompt", "file"),
        )
        .with_child(
            ViewNode::button("clear all data", None)
                .with_id("data-clear")
                .with_attr("confirm", "true"),
        );

    ViewNode::new(Tag::Section)
        .with_id("settings-view")
        .with_child(appearance_section)
        .with_child(data_section)
}
