//! Plain-text rendering of view trees for terminal front-ends.

use super::node::{Tag, ViewNode};

const INDENT: &str = "  ";
const BAR_WIDTH: usize = 20;

/// Renders `node` as lines of text, one block element per line.
pub fn render_text(node: &ViewNode) -> String {
    let mut lines = Vec::new();
    render_block(node, 0, &mut lines);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_block(node: &ViewNode, depth: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);
    match node.tag {
        Tag::Page => {
            lines.push(format!("=== {} ===", node.text.as_deref().unwrap_or_default()));
            render_children(node, depth, lines);
        }
        Tag::Section => {
            if let Some(text) = &node.text {
                lines.push(format!("{indent}## {text}"));
            }
            render_children(node, depth, lines);
        }
        Tag::Heading => lines.push(format!("{indent}# {}", label(node))),
        Tag::Header | Tag::Item | Tag::Row => {
            let prefix = if node.tag == Tag::Item { "- " } else { "" };
            lines.push(format!("{indent}{prefix}{}", inline_line(node)));
            let nested = node.children.iter().filter(|child| !is_line_part(child.tag));
            for child in nested {
                render_block(child, depth + 1, lines);
            }
        }
        Tag::Nav => lines.push(format!("{indent}{}", inline_line(node))),
        Tag::List | Tag::Grid => render_children(node, depth, lines),
        Tag::Form => {
            let fields = node.attr("fields").unwrap_or_default();
            lines.push(format!("{indent}+ {} ({fields})", label(node)));
        }
        Tag::Bar => lines.push(format!("{indent}{}", bar(node))),
        Tag::Text | Tag::Button | Tag::NavLink | Tag::Avatar | Tag::Cell => {
            lines.push(format!("{indent}{}", inline(node)));
        }
    }
}

fn render_children(node: &ViewNode, depth: usize, lines: &mut Vec<String>) {
    for child in &node.children {
        render_block(child, depth, lines);
    }
}

/// Own label followed by inline children, space separated.
fn inline_line(node: &ViewNode) -> String {
    let mut parts: Vec<String> = node.text.iter().cloned().collect();
    for child in &node.children {
        if child.tag == Tag::Nav {
            parts.push(inline_line(child));
        } else if child.tag.is_inline() {
            parts.push(inline(child));
        }
    }
    if node.tag == Tag::Nav {
        parts.join(" | ")
    } else {
        parts.join(" ")
    }
}

fn is_line_part(tag: Tag) -> bool {
    tag.is_inline() || tag == Tag::Nav
}

fn inline(node: &ViewNode) -> String {
    match node.tag {
        Tag::Button => format!("[{}]", label(node)),
        Tag::NavLink if node.has_class("active") => format!("*{}*", label(node)),
        Tag::Avatar => format!("({})", label(node)),
        Tag::Cell => format!("{:>3}", label(node)),
        _ => label(node).to_string(),
    }
}

fn label(node: &ViewNode) -> &str {
    node.text.as_deref().unwrap_or_default()
}

fn bar(node: &ViewNode) -> String {
    let percent = node
        .attr("percent")
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{} [{}{}] {percent:.1}%",
        label(node),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use crate::view::{Action, Tag, ViewNode};

    #[test]
    fn items_render_inline_buttons_and_nested_blocks() {
        let tree = ViewNode::new(Tag::List).with_child(
            ViewNode::new(Tag::Item)
                .with_text("Groceries")
                .with_child(ViewNode::button("delete", Some(Action::DeleteNote { index: 0 })))
                .with_child(ViewNode::new(Tag::List).with_child(ViewNode::text("milk"))),
        );
        assert_eq!(render_text(&tree), "- Groceries [delete]\n  milk\n");
    }

    #[test]
    fn bar_scales_to_fixed_width() {
        let bar = ViewNode::new(Tag::Bar)
            .with_text("Expense ratio")
            .with_attr("percent", "25.0");
        assert_eq!(
            render_text(&bar),
            "Expense ratio [#####---------------] 25.0%\n"
        );
    }

    #[test]
    fn nav_marks_active_link() {
        let header = ViewNode::new(Tag::Header).with_child(
            ViewNode::new(Tag::Nav)
                .with_child(ViewNode::new(Tag::NavLink).with_text("Home").with_class("active"))
                .with_child(ViewNode::new(Tag::NavLink).with_text("Notes")),
        );
        assert_eq!(render_text(&header), "*Home* | Notes\n");
    }
}
