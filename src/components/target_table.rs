//! Target Table Component
//!
//! Left table. Each row accepts dropped source rows and shows the ids it
//! has accumulated, with their labels as a tooltip.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop, DragHover};

use crate::context::use_board_context;
use crate::models::{DragPayload, TargetRow};
use crate::store::{store_drop_row, use_board_store};

#[component]
fn TargetTableRow(row: TargetRow, hover: DragHover<u32>) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();
    let config = ctx.config;
    let id = row.id;
    let labels = move || store.with(|state| state.target_labels(id).unwrap_or_default());

    let on_dragover = make_on_dragover(hover, id);
    let on_dragleave = make_on_dragleave(hover, id);
    let on_drop = make_on_drop(hover, config.payload_mime, id, move |payload: DragPayload, target_id: u32| {
        if store_drop_row(&store, &config, &payload, target_id).is_some() {
            ctx.notify();
        }
    });

    let (selected, set_selected) = signal(false);

    view! {
        <tr
            class="target-row"
            class:drop-target=move || hover.is_hovered(id)
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <td class="pid-cell" title=move || labels().1>{move || labels().0}</td>
            <td>{row.description}</td>
            <td>
                <input
                    type="checkbox"
                    prop:checked=move || selected.get()
                    on:change=move |_| set_selected.update(|v| *v = !*v)
                />
            </td>
            <td class="isolate-cell">"👁"</td>
            <td>{row.startdate}</td>
            <td>{row.enddate}</td>
            <td>{row.pred}</td>
        </tr>
    }
}

#[component]
pub fn TargetTable(hover: DragHover<u32>) -> impl IntoView {
    let store = use_board_store();
    // Keyed by id only; associations are read by the row itself.
    let rows = move || store.with(|state| state.target_rows.clone());

    view! {
        <div class="table-container target-table">
            <table>
                <thead>
                    <tr class="header-row">
                        <th>"ID"</th>
                        <th>"Description"</th>
                        <th>"Select"</th>
                        <th>"Isolate"</th>
                        <th>"Start Date"</th>
                        <th>"End Date"</th>
                        <th>"Predecessors N."</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row| row.id
                        children=move |row| view! { <TargetTableRow row=row hover=hover /> }
                    />
                </tbody>
            </table>
        </div>
    }
}
