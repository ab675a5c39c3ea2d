//! The seventeen ODD cards, rendered into `#oddGrid`.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use peaceconnect::bootstrap::Wired;
use peaceconnect::dataset::GOALS;
use peaceconnect::goals::{card_aria_label, is_activation_key, show_goal_details};
use web_sys::HtmlElement;

use super::dom;
use super::error::WebError;
use super::mount;

const GRID: &str = "oddGrid";

#[component]
fn GoalCards() -> impl IntoView {
    GOALS
        .iter()
        .map(|goal| {
            let n = goal.number;
            view! {
                <div
                    class="odd-card"
                    data-odd=n.to_string()
                    role="button"
                    tabindex="0"
                    aria-label=card_aria_label(n, goal.title)
                    on:click=move |_| show_goal_details(n)
                    on:keydown=move |ev: KeyboardEvent| {
                        if is_activation_key(&ev.key()) {
                            ev.prevent_default();
                            show_goal_details(n);
                        }
                    }
                >
                    <div class="odd-number">{n.to_string()}</div>
                    <h3 class="odd-title">{goal.title}</h3>
                </div>
            }
        })
        .collect_view()
}

pub(crate) fn init_goal_grid() -> Result<Wired, WebError> {
    let Some(grid) = dom::by_id::<HtmlElement>(GRID) else {
        return Ok(Wired::Skipped(GRID));
    };
    mount::replace(GRID, &grid, || view! { <GoalCards/> }.into_any());
    Ok(Wired::Attached)
}
