//! Back-office table bodies rendered with Leptos.

use std::rc::Rc;

use leptos::prelude::*;
use peaceconnect::bootstrap::Wired;
use peaceconnect::config::SiteConfig;
use peaceconnect::table::{ActionKind, Cell, RowAction, RowSink, Table, TableRow};
use web_sys::{Event, HtmlElement};

use super::dom;
use super::error::WebError;
use super::modal;

/// A `<tbody>` on the page.
struct DomRows {
    slot: &'static str,
    body: HtmlElement,
}

impl RowSink for DomRows {
    fn clear(&mut self) {
        super::mount::clear(self.slot, &self.body);
    }

    fn append(&mut self, row: TableRow) {
        super::mount::append(self.slot, &self.body, move || {
            view! { <RowView row=row/> }.into_any()
        });
    }
}

#[component]
fn RowView(row: TableRow) -> impl IntoView {
    let cells = row
        .cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
            Cell::Badge { class, label } => view! {
                <td><span class=format!("status-badge {class}")>{label}</span></td>
            }
            .into_any(),
        })
        .collect_view();
    let buttons = row
        .actions
        .into_iter()
        .map(|action| {
            view! {
                <button class=action.action.class() on:click=move |_| dispatch(action)>
                    {action.action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <tr>
            {cells}
            <td><div class="table-actions">{buttons}</div></td>
        </tr>
    }
}

fn dispatch(action: RowAction) {
    match action.action {
        ActionKind::View => modal::show_details(action.entity, action.id),
        ActionKind::Edit => modal::edit_item(action.entity, action.id),
        ActionKind::Delete => {
            modal::delete_item(action.entity, action.id);
        }
    }
}

/// Fill one table body. Skipped when the body is not on this page.
pub(crate) fn load_table(table: Table, cfg: &SiteConfig) -> Wired {
    let Some(body) = dom::by_id::<HtmlElement>(table.body_id()) else {
        return Wired::Skipped(table.body_id());
    };
    let mut rows = DomRows {
        slot: table.body_id(),
        body,
    };
    table.load(&mut rows, cfg.testimonial_excerpt_chars);
    Wired::Attached
}

pub(crate) fn init_tables(cfg: &Rc<SiteConfig>) -> Result<Wired, WebError> {
    let mut wired = Wired::Skipped("activityTableBody");
    for &table in Table::all() {
        if load_table(table, cfg) == Wired::Attached {
            wired = Wired::Attached;
        }
    }

    if let Some(btn) = dom::by_id::<HtmlElement>("refreshTableBtn") {
        let cfg = Rc::clone(cfg);
        dom::listen(&btn, "click", move |_: Event| {
            load_table(Table::Activity, &cfg);
            log::info!("Tableau actualisé");
        })?;
    }
    Ok(wired)
}
