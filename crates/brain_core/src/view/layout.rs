use super::node::{Tag, ViewNode};
use super::page::Page;
use crate::model::appearance::Appearance;

/// Page-independent inputs to the shared layout.
pub struct LayoutContext<'a> {
    pub active: Page,
    pub appearance: &'a Appearance,
}

/// Wraps page content with the navigation header. The active page's link
/// carries the `active` class; theme and accent ride on the page root.
pub fn render_layout(ctx: &LayoutContext<'_>, content: ViewNode) -> ViewNode {
    let links = Page::ALL.into_iter().map(|page| {
        let link = ViewNode::new(Tag::NavLink)
            .with_id(format!("nav-{}", page.id()))
            .with_text(page.title())
            .with_attr("href", page.id());
        if page == ctx.active {
            link.with_class("active")
        } else {
            link
        }
    });

    let header = ViewNode::new(Tag::Header)
        .with_id("header")
        .with_child(ViewNode::new(Tag::Nav).with_id("nav").with_children(links))
        .with_child(
            ViewNode::new(Tag::Avatar)
                .with_id("avatar")
                .with_text(ctx.appearance.avatar_letter.as_str()),
        );

    ViewNode::new(Tag::Page)
        .with_id(format!("page-{}", ctx.active.id()))
        .with_class(format!("theme-{}", ctx.appearance.theme.as_str()))
        .with_text(ctx.active.title())
        .with_attr("page", ctx.active.id())
        .with_attr("accent", ctx.appearance.accent_color.as_str())
        .with_child(header)
        .with_child(content)
}
