//! Maintenance checklist — heading groups, month chips, and progress
//! headers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `ChecklistState` from context. The saved list loads on
//! first render; every mutation stays in memory until the user hits the
//! save button, which writes the whole list back to `localStorage`. Export
//! downloads the current rows regardless of edit mode.

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::state::checklist::{
    self, ChecklistRow, ChecklistState, MONTH_LABELS, STORAGE_KEY,
};
use crate::util::{download, storage};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Projection of one visible row for rendering.
#[derive(Clone, Debug)]
struct RowView {
    index: usize,
    id: String,
    is_heading: bool,
    task: String,
    months: checklist::MonthFlags,
    collapsed: bool,
}

/// The maintenance table card: toolbar, month-progress header, grouped
/// rows, and the row edit dialog.
#[component]
pub fn ChecklistTable() -> impl IntoView {
    let checklist = expect_context::<RwSignal<ChecklistState>>();
    let row_draft = RwSignal::new(None::<ChecklistRow>);

    // Load the saved list once; afterwards the in-memory rows are the truth.
    Effect::new(move || {
        if checklist.get().loaded {
            return;
        }
        let stored = storage::load_json::<Vec<ChecklistRow>>(STORAGE_KEY);
        checklist.update(|s| s.restore(stored));
    });

    let rows = move || {
        let state = checklist.get();
        state
            .visible_rows()
            .into_iter()
            .map(|(index, row)| RowView {
                index,
                id: row.id.clone(),
                is_heading: row.is_heading,
                task: row.task.clone(),
                months: row.months,
                collapsed: state.is_collapsed(&row.id),
            })
            .collect::<Vec<_>>()
    };

    let edit_mode = move || checklist.get().edit_mode;

    let open_editor = move |index: usize| {
        let Some(row) = checklist.get_untracked().rows.get(index).cloned() else {
            return;
        };
        row_draft.set(Some(row));
        checklist.update(|s| s.editing = Some(index));
    };

    let on_toggle_edit = move |_| {
        checklist.update(|s| s.edit_mode = !s.edit_mode);
    };

    let on_save = move |_| {
        let rows = checklist.get_untracked().rows;
        storage::save_json(STORAGE_KEY, &rows);
        checklist.update(|s| s.edit_mode = false);
    };

    let on_export = move |_| {
        let rows = checklist.get_untracked().rows;
        match checklist::export_json(&rows) {
            Ok(contents) => {
                let file_name = checklist::export_file_name(now_ms());
                if let Err(message) = download::download_json(&file_name, &contents) {
                    log::error!("checklist export: {message}");
                }
            }
            Err(message) => log::error!("checklist export: {message}"),
        }
    };

    view! {
        <div class="checklist card">
            <div class="checklist__toolbar">
                <span class="checklist__title">"Maintenance Tracker"</span>
                <button
                    class="btn btn--icon"
                    title=move || if edit_mode() { "Exit edit mode" } else { "Edit rows" }
                    on:click=on_toggle_edit
                >
                    {move || if edit_mode() { "✕" } else { "✎" }}
                </button>
                <Show when=edit_mode>
                    <button class="btn btn--icon checklist__save" title="Save" on:click=on_save>
                        "💾"
                    </button>
                </Show>
                <span class="toolbar__spacer"></span>
                <Show when=edit_mode>
                    <button
                        class="btn"
                        on:click=move |_| checklist.update(ChecklistState::push_task)
                    >
                        "+ Add Task"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| checklist.update(ChecklistState::push_heading)
                    >
                        "+ Add Heading"
                    </button>
                </Show>
                <button class="btn btn--icon" title="Export JSON" on:click=on_export>
                    "⭳"
                </button>
            </div>

            <div class="checklist__scroll">
                <table class="checklist__table">
                    <thead>
                        <tr>
                            <th class="checklist__col-task">"Item / Task"</th>
                            {MONTH_LABELS
                                .iter()
                                .enumerate()
                                .map(|(month, label)| {
                                    view! {
                                        <th class="checklist__col-month">
                                            <div class="checklist__month-head">
                                                <span>{*label}</span>
                                                <span class="checklist__month-pct">
                                                    {move || format!("{}%", checklist.get().progress(month))}
                                                </span>
                                            </div>
                                            <ProgressBar percent=Signal::derive(move || {
                                                checklist.get().progress(month)
                                            }) />
                                        </th>
                                    }
                                })
                                .collect_view()}
                            {move || {
                                checklist
                                    .get()
                                    .edit_mode
                                    .then(|| view! { <th class="checklist__col-actions"></th> })
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let in_edit = checklist.get().edit_mode;
                            rows()
                                .into_iter()
                                .map(|row| {
                                    if row.is_heading {
                                        heading_row(checklist, row, in_edit, open_editor).into_any()
                                    } else {
                                        task_row(checklist, row, in_edit, open_editor).into_any()
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="checklist__footer">
                <span class="checklist__tip">
                    "Tip: Column progress shows percent of tasks completed for that month."
                </span>
                <span class="checklist__tip">
                    "Toggle checkboxes inline or use the Edit button to change task text."
                </span>
            </div>

            <Show when=move || checklist.get().editing.is_some()>
                <RowEditDialog draft=row_draft checklist=checklist />
            </Show>
        </div>
    }
}

fn heading_row(
    checklist: RwSignal<ChecklistState>,
    row: RowView,
    in_edit: bool,
    open_editor: impl Fn(usize) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let index = row.index;
    let heading_id = row.id.clone();
    // The row list re-renders when edit mode flips, so a per-render span is enough.
    let colspan = if in_edit { "14" } else { "13" };

    view! {
        <tr class="checklist__heading-row">
            <td colspan=colspan>
                <div class="checklist__heading">
                    <button
                        class="btn btn--icon checklist__chevron"
                        class:checklist__chevron--collapsed=row.collapsed
                        title="Collapse group"
                        on:click=move |_| {
                            checklist.update(|s| s.toggle_collapsed(&heading_id));
                        }
                    >
                        "▾"
                    </button>
                    <span class="checklist__heading-label">{row.task}</span>
                    <span class="toolbar__spacer"></span>
                    {in_edit
                        .then(|| {
                            view! {
                                <span class="checklist__row-actions">
                                    <button
                                        class="btn btn--icon"
                                        title="Edit row"
                                        on:click=move |_| open_editor(index)
                                    >
                                        "✎"
                                    </button>
                                    <button
                                        class="btn btn--icon"
                                        title="Add task below"
                                        on:click=move |_| {
                                            checklist.update(|s| s.insert_task_below(index));
                                        }
                                    >
                                        "+"
                                    </button>
                                    <button
                                        class="btn btn--icon btn--danger"
                                        title="Delete row"
                                        on:click=move |_| {
                                            checklist.update(|s| s.remove_row(index));
                                        }
                                    >
                                        "🗑"
                                    </button>
                                </span>
                            }
                        })}
                </div>
            </td>
        </tr>
    }
}

fn task_row(
    checklist: RwSignal<ChecklistState>,
    row: RowView,
    in_edit: bool,
    open_editor: impl Fn(usize) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let index = row.index;

    view! {
        <tr class="checklist__task-row">
            <td class="checklist__task-cell">{row.task}</td>
            {(0..MONTH_LABELS.len())
                .map(|month| {
                    let checked = row.months.get(month);
                    view! {
                        <td class="checklist__month-cell">
                            <button
                                class="checklist__chip"
                                class:checklist__chip--on=checked
                                on:click=move |_| {
                                    checklist.update(|s| s.toggle_month(index, month));
                                }
                            >
                                {if checked { "✓" } else { "-" }}
                            </button>
                        </td>
                    }
                })
                .collect_view()}
            {in_edit
                .then(|| {
                    view! {
                        <td class="checklist__actions-cell">
                            <span class="checklist__row-actions">
                                <button
                                    class="btn btn--icon"
                                    title="Edit row"
                                    on:click=move |_| open_editor(index)
                                >
                                    "✎"
                                </button>
                                <button
                                    class="btn btn--icon"
                                    title="Add task below"
                                    on:click=move |_| {
                                        checklist.update(|s| s.insert_task_below(index));
                                    }
                                >
                                    "+"
                                </button>
                                <button
                                    class="btn btn--icon"
                                    title="Add heading below"
                                    on:click=move |_| {
                                        checklist.update(|s| s.insert_heading_below(index));
                                    }
                                >
                                    "H"
                                </button>
                                <button
                                    class="btn btn--icon btn--danger"
                                    title="Delete row"
                                    on:click=move |_| {
                                        checklist.update(|s| s.remove_row(index));
                                    }
                                >
                                    "🗑"
                                </button>
                            </span>
                        </td>
                    }
                })}
        </tr>
    }
}

/// Modal dialog for editing one row: type, text, and month flags.
#[component]
fn RowEditDialog(
    draft: RwSignal<Option<ChecklistRow>>,
    checklist: RwSignal<ChecklistState>,
) -> impl IntoView {
    let close = Callback::new(move |()| {
        checklist.update(|s| s.editing = None);
        draft.set(None);
    });

    let save = Callback::new(move |()| {
        let Some(index) = checklist.get_untracked().editing else {
            return;
        };
        let Some(row) = draft.get_untracked() else {
            return;
        };
        checklist.update(|s| {
            s.replace_row(index, row);
            s.editing = None;
        });
        draft.set(None);
    });

    let is_heading = move || draft.get().is_some_and(|row| row.is_heading);

    view! {
        <div class="dialog-backdrop" on:click=move |_| close.run(())>
            <div class="dialog dialog--row-edit" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit row"</h2>

                <div class="dialog__label">"Row type"</div>
                <div class="segmented">
                    <button
                        class="segmented__option"
                        class:segmented__option--active=move || !is_heading()
                        on:click=move |_| {
                            draft.update(|d| {
                                if let Some(row) = d {
                                    row.is_heading = false;
                                }
                            });
                        }
                    >
                        "Task"
                    </button>
                    <button
                        class="segmented__option"
                        class:segmented__option--active=is_heading
                        on:click=move |_| {
                            draft.update(|d| {
                                if let Some(row) = d {
                                    row.is_heading = true;
                                }
                            });
                        }
                    >
                        "Heading"
                    </button>
                </div>

                <label class="dialog__label">
                    "Text"
                    <input
                        class="dialog__input"
                        type="text"
                        autofocus=true
                        prop:value=move || draft.get().map(|row| row.task).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                if let Some(row) = d {
                                    row.task = value;
                                }
                            });
                        }
                    />
                </label>

                <div class="dialog__label">"Months"</div>
                <div class="dialog__months">
                    {MONTH_LABELS
                        .iter()
                        .enumerate()
                        .map(|(month, label)| {
                            view! {
                                <label class="dialog__month">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            draft.get().is_some_and(|row| row.months.get(month))
                                        }
                                        on:change=move |_| {
                                            draft.update(|d| {
                                                if let Some(row) = d {
                                                    row.months.toggle(month);
                                                }
                                            });
                                        }
                                    />
                                    {*label}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| save.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
