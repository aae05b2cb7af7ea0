//! Source Table Component
//!
//! Right table of draggable rows.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DragHover};

use crate::context::use_board_context;
use crate::models::DragPayload;
use crate::store::use_board_store;

#[component]
pub fn SourceTable(hover: DragHover<u32>) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();
    let mime = ctx.config.payload_mime;

    let rows = move || {
        store.with(|state| {
            state
                .source_rows
                .iter()
                .cloned()
                .enumerate()
                .map(|(number, row)| DragPayload { row, number })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="table-container source-table">
            <table>
                <thead>
                    <tr class="header-row">
                        <th>"Item"</th>
                        <th>"ID"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|payload| (payload.row.id.clone(), payload.number)
                        children=move |payload| {
                            let item = payload.row.item.clone();
                            let id = payload.row.id.clone();
                            view! {
                                <tr
                                    class="source-row"
                                    draggable="true"
                                    on:dragstart=make_on_dragstart(mime, payload)
                                    on:dragend=make_on_dragend(hover)
                                >
                                    <td>{item}</td>
                                    <td>{id}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
