//! REST-backed record grid hosted in a content panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! A grid is configured entirely by its [`RestGridConfig`]. It loads the
//! store URL in the browser, filters rows by the search field, and issues
//! add (POST), edit (PUT) and remove (DELETE) requests through `net::api`.
//! Every successful mutation reloads the store; failures are shown in the
//! grid's status line and nothing is retried.

#[cfg(test)]
#[path = "rest_grid_test.rs"]
mod rest_grid_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use serde_json::Value;

use crate::net::api;
use crate::state::grid::{DraftMode, RecordDraft, RestGridConfig};

/// Grid view over one REST collection.
#[component]
pub fn RestGrid(config: RestGridConfig) -> impl IntoView {
    if let Err(e) = config.validate() {
        return view! { <p class="rest-grid__error">{format!("Grid unavailable: {e}")}</p> }.into_any();
    }

    let columns = config.columns.clone();
    let config = StoredValue::new(config);
    let reload = RwSignal::new(0_u32);
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let draft = RwSignal::new(None::<RecordDraft>);

    let records = LocalResource::new(move || {
        reload.track();
        let grid = config.get_value();
        async move { api::load_records(&grid).await }
    });

    let on_remove = move |record: Value| {
        let grid = config.get_value();
        status.set(Some("Removing...".to_owned()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::remove_record(&grid, &record).await {
                Ok(()) => {
                    status.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => status.set(Some(format!("Remove failed: {e}"))),
            }
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = draft.get_untracked() else {
            return;
        };
        let grid = config.get_value();
        let record = current.to_record();
        status.set(Some("Saving...".to_owned()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match current.mode {
                DraftMode::Add => api::add_record(&grid, &record).await,
                DraftMode::Edit => api::edit_record(&grid, &record).await,
            };
            match result {
                Ok(()) => {
                    draft.set(None);
                    status.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => status.set(Some(format!("Save failed: {e}"))),
            }
        });
    };

    let header_cells = columns
        .iter()
        .map(|c| view! { <th style=format!("width: {}px", c.width)>{c.header.clone()}</th> })
        .collect_view();
    let column_count = columns.len() + 1;

    let rows = move || match records.get() {
        None => view! { <tr><td colspan=column_count>"Loading..."</td></tr> }.into_any(),
        Some(Err(e)) => {
            view! { <tr><td colspan=column_count class="rest-grid__error">{e.to_string()}</td></tr> }.into_any()
        }
        Some(Ok(list)) => {
            let visible: Vec<Value> = config.with_value(|grid| {
                query.with(|q| grid.filter(&list, q).into_iter().cloned().collect())
            });
            if visible.is_empty() {
                return view! { <tr><td colspan=column_count>"No records."</td></tr> }.into_any();
            }
            visible
                .into_iter()
                .map(|record| {
                    let cells = config.with_value(|grid| row_cells(grid, &record));
                    let edit_record = record.clone();
                    view! {
                        <tr class="rest-grid__row">
                            {cells.into_iter().map(|text| view! { <td>{text}</td> }).collect_view()}
                            <td class="rest-grid__actions">
                                <button on:click=move |_| {
                                    draft.set(Some(config.with_value(|grid| RecordDraft::for_record(grid, &edit_record))));
                                }>"Edit"</button>
                                <button on:click=move |_| on_remove(record.clone())>"Remove"</button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="rest-grid">
            <div class="rest-grid__toolbar">
                <button on:click=move |_| draft.set(Some(config.with_value(RecordDraft::for_new)))>"Add"</button>
                <button on:click=move |_| reload.update(|n| *n += 1)>"Reload"</button>
                <input
                    class="rest-grid__search"
                    type="search"
                    placeholder="Search"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || status.with(Option::is_some)>
                <p class="rest-grid__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
            <table class="rest-grid__table">
                <thead>
                    <tr>
                        {header_cells}
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || draft.with(Option::is_some)>
                <form id=move || config.with_value(|grid| grid.edit_form_id.clone()) class="rest-grid__form" on:submit=on_save>
                    <h3>{move || draft_heading(draft.with(|d| d.as_ref().map(|d| d.mode)))}</h3>
                    {move || {
                        draft
                            .with(|d| d.as_ref().map(|d| d.fields().to_vec()).unwrap_or_default())
                            .into_iter()
                            .map(|(field, value)| {
                                let name = field.clone();
                                view! {
                                    <label class="rest-grid__field">
                                        <span>{field}</span>
                                        <input
                                            type="text"
                                            prop:value=value
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                draft.update(|d| {
                                                    if let Some(d) = d.as_mut() {
                                                        d.set(&name, &value);
                                                    }
                                                });
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                    <div class="rest-grid__form-actions">
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| draft.set(None)>"Cancel"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
    .into_any()
}

/// Display text of each configured column for `record`.
pub fn row_cells(grid: &RestGridConfig, record: &Value) -> Vec<String> {
    grid.columns.iter().map(|c| RestGridConfig::cell_text(record, c)).collect()
}

/// Heading of the edit form.
pub fn draft_heading(mode: Option<DraftMode>) -> &'static str {
    match mode {
        Some(DraftMode::Add) => "Add record",
        Some(DraftMode::Edit) => "Edit record",
        None => "",
    }
}
