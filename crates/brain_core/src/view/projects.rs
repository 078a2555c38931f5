//! Projects page.

use super::action::Action;
use super::node::{Tag, ViewNode};
use crate::model::project::Project;

pub fn render(projects: &[Project]) -> ViewNode {
    let form = ViewNode::new(Tag::Form)
        .with_id("project-form")
        .with_text("Add project")
        .with_attr("fields", "name");

    let mut list = ViewNode::new(Tag::List).with_id("projects-list");
    if projects.is_empty() {
        list = list.with_child(ViewNode::text("No projects yet.").with_class("empty"));
    }
    for (index, project) in projects.iter().enumerate() {
        list = list.with_child(render_project(index, project));
    }

    ViewNode::new(Tag::Section)
        .with_id("projects-view")
        .with_child(form)
        .with_child(list)
}

fn render_project(index: usize, project: &Project) -> ViewNode {
    let tasks = project.tasks.iter().enumerate().map(|(task_index, task)| {
        let marker = if task.done { "[x]" } else { "[ ]" };
        let item = ViewNode::new(Tag::Item)
            .with_id(format!("project-{index}-task-{task_index}"))
            .with_child(
                ViewNode::button(
                    marker,
                    Some(Action::ToggleTask {
                        project: index,
                        task: task_index,
                    }),
                )
                .with_id(format!("project-{index}-task-{task_index}-toggle")),
            )
            .with_child(ViewNode::text(task.title.as_str()));
        if task.done {
            item.with_class("done")
        } else {
            item
        }
    });

    ViewNode::new(Tag::Item)
        .with_id(format!("project-{index}"))
        .with_text(format!(
            "{} ({}/{})",
            project.name,
            project.completed(),
            project.tasks.len()
        ))
        .with_child(
            ViewNode::button("add task", None)
                .with_id(format!("project-{index}-add-task"))
                .with_attr("prompt", "title"),
        )
        .with_child(
            ViewNode::new(Tag::List)
                .with_id(format!("project-{index}-tasks"))
                .with_children(tasks),
        )
}
