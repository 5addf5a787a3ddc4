//! Search terms results table
//!
//! Sortable headers, one checkbox per data row and a tri-state select-all.
//! The totals row carries no checkbox and keeps its place when sorting.

use adboard::table::sample::TABLE_ID;
use adboard::table::{Header, RowId};
use leptos::*;

use crate::state::DashboardState;

#[derive(Clone)]
struct RowView {
    id: RowId,
    summary: bool,
    checked: bool,
    cells: Vec<String>,
}

#[component]
pub fn ResultsTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let header_state = state.clone();
    let headers = move || header_state.read(|s| s.table().headers().to_vec());

    let row_state = state.clone();
    let rows = move || {
        row_state.read(|s| {
            s.table()
                .rows()
                .iter()
                .map(|row| RowView {
                    id: row.id(),
                    summary: row.is_summary(),
                    checked: s.selection().is_checked(row.id()),
                    cells: row.cells().to_vec(),
                })
                .collect::<Vec<_>>()
        })
    };

    let head_state = state.clone();
    let body_state = state;

    view! {
        <section class="card rounded-lg shadow overflow-x-auto">
            <table id=TABLE_ID class="min-w-full text-sm">
                <thead>
                    <tr class="border-b">
                        {move || {
                            headers()
                                .into_iter()
                                .enumerate()
                                .map(|(index, header)| {
                                    header_cell(head_state.clone(), index, header)
                                })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|row| table_row(body_state.clone(), row))
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}

fn header_cell(state: DashboardState, index: usize, header: Header) -> View {
    if index == 0 {
        return select_all_cell(state);
    }

    match header.column {
        Some(column) => {
            let data_column = column.clone();
            let indicator = header.indicator.map(|i| i.glyph());
            view! {
                <th
                    class="sortable px-3 py-2 text-left font-semibold cursor-pointer select-none"
                    data-column=data_column
                    on:click=move |_| {
                        state.update(|s| {
                            s.sort_by(&column);
                        });
                    }
                >
                    {header.label}
                    <span class="sort-indicator ml-1">{indicator}</span>
                </th>
            }
            .into_view()
        }
        None => view! {
            <th class="px-3 py-2 text-left font-semibold">{header.label}</th>
        }
        .into_view(),
    }
}

fn select_all_cell(state: DashboardState) -> View {
    let select_all = state.peek(|s| s.selection().select_all_state());

    view! {
        <th class="px-3 py-2 w-8">
            <input
                type="checkbox"
                id="selectAll"
                prop:checked=select_all.is_checked()
                prop:indeterminate=select_all.is_indeterminate()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    state.update(|s| s.set_select_all(checked));
                }
            />
        </th>
    }
    .into_view()
}

fn table_row(state: DashboardState, row: RowView) -> View {
    let RowView { id, summary, checked, cells } = row;
    let class = if summary {
        "summary-row border-t font-semibold"
    } else {
        "border-t hover:bg-gray-50"
    };

    let selector = (!summary).then(|| {
        view! {
            <input
                type="checkbox"
                class="row-checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let result = state.update(|s| s.set_row_checked(id, checked));
                    if let Err(e) = result {
                        web_sys::console::error_1(&format!("Selection failed: {}", e).into());
                    }
                }
            />
        }
    });

    view! {
        <tr class=class data-row=id.0>
            <td class="px-3 py-2">{selector}</td>
            {cells
                .into_iter()
                .skip(1)
                .map(|cell| view! { <td class="px-3 py-2 whitespace-nowrap">{cell}</td> })
                .collect_view()}
        </tr>
    }
    .into_view()
}
