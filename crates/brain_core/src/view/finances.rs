//! Finances page: entry form, totals, expense ratio bar, entry list.

use super::action::Action;
use super::node::{Tag, ViewNode};
use crate::model::day::DayKey;
use crate::model::finance::{EntryKind, FinanceEntry};
use crate::service::summary::FinanceSummary;

pub fn render(entries: &[FinanceEntry], today: DayKey) -> ViewNode {
    let form = ViewNode::new(Tag::Form)
        .with_id("finance-form")
        .with_text("Add entry")
        .with_attr("fields", "description,amount,type,date")
        .with_attr("date-default", today.to_string());

    let mut list = ViewNode::new(Tag::List).with_id("finance-list");
    if entries.is_empty() {
        list = list.with_child(ViewNode::text("No entries yet.").with_class("empty"));
    }
    for (index, entry) in entries.iter().enumerate() {
        list = list.with_child(
            ViewNode::new(Tag::Item)
                .with_id(format!("finance-{index}"))
                .with_class(entry.kind.as_str())
                .with_text(format!(
                    "{} {} {}",
                    entry.date,
                    signed_money(entry),
                    entry.description
                ))
                .with_child(
                    ViewNode::button("delete", Some(Action::DeleteFinance { index }))
                        .with_id(format!("finance-{index}-delete")),
                ),
        );
    }

    ViewNode::new(Tag::Section)
        .with_id("finances-view")
        .with_child(form)
        .with_child(render_summary(&FinanceSummary::from_entries(entries)))
        .with_child(list)
}

/// Totals block shared with the home page.
pub fn render_summary(summary: &FinanceSummary) -> ViewNode {
    let ratio = summary.expense_ratio_percent();
    ViewNode::new(Tag::Section)
        .with_id("finance-summary")
        .with_text("Summary")
        .with_child(
            ViewNode::text(format!("Income: {}", money(summary.income))).with_id("finance-income"),
        )
        .with_child(
            ViewNode::text(format!("Expenses: {}", money(summary.expense)))
                .with_id("finance-expense"),
        )
        .with_child(ViewNode::text(format!("Net: {}", money(summary.net()))).with_id("finance-net"))
        .with_child(
            ViewNode::new(Tag::Bar)
                .with_id("expense-bar")
                .with_text("Expense ratio")
                .with_attr("percent", format!("{ratio:.1}")),
        )
}

pub(crate) fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn signed_money(entry: &FinanceEntry) -> String {
    match entry.kind {
        EntryKind::Income => format!("+{}", money(entry.amount)),
        EntryKind::Expense => format!("-{}", money(entry.amount)),
    }
}
