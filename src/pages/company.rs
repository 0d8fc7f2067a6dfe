//! Company page — one company's details plus the maintenance checklist.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between the URL company
//! identity and the `CompanyState` cache: it reloads on param changes, runs
//! the edit and delete flows, and hosts the checklist widget.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::checklist_table::ChecklistTable;
use crate::net::api;
use crate::net::types::{Company, CompanyDraft};
use crate::state::company::CompanyState;
use crate::state::ui::UiState;

/// Whether the record carries server history yet. Edit and delete stay
/// hidden until it does, matching the fields the dialogs rely on.
fn can_modify(company: &Company) -> bool {
    company
        .last_updated
        .as_deref()
        .is_some_and(|value| !value.is_empty())
}

async fn load_company(company: RwSignal<CompanyState>, company_id: &str) {
    match api::fetch_company(company_id).await {
        Ok(record) => company.update(|s| {
            s.current = Some(record);
            s.loading = false;
        }),
        Err(message) => {
            log::error!("company load: {message}");
            company.update(|s| {
                s.loading = false;
                s.error = Some(message);
            });
        }
    }
}

/// Company page — detail header, edit/delete dialogs, and the checklist.
#[component]
pub fn CompanyPage() -> impl IntoView {
    let company = expect_context::<RwSignal<CompanyState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let last_route_id = RwSignal::new(None::<String>);
    let company_id = move || params.read().get("id");

    // Reload whenever the route param changes.
    Effect::new(move || {
        let next_id = company_id();
        if last_route_id.get_untracked() == next_id {
            return;
        }
        last_route_id.set(next_id.clone());
        let Some(id) = next_id else {
            return;
        };
        company.update(|s| {
            s.reset();
            s.loading = true;
        });
        leptos::task::spawn_local(async move {
            load_company(company, &id).await;
        });
    });

    // Edit/delete dialog state.
    let show_edit = RwSignal::new(false);
    let show_delete = RwSignal::new(false);
    let draft = RwSignal::new(CompanyDraft::default());

    let on_edit = move |_| {
        if let Some(current) = company.get_untracked().current.as_ref() {
            draft.set(CompanyDraft::from_company(current));
            show_edit.set(true);
        }
    };
    let on_edit_cancel = Callback::new(move |()| show_edit.set(false));
    let on_delete = move |_| show_delete.set(true);
    let on_delete_cancel = Callback::new(move |()| show_delete.set(false));

    // Leave the page once the server confirms deletion.
    Effect::new(move || {
        if company.get().deleted {
            company.update(|s| s.deleted = false);
            navigate("/companies", NavigateOptions::default());
        }
    });

    let company_name = move || company.get().current.map(|c| c.name).unwrap_or_default();
    let company_address = move || {
        company
            .get()
            .current
            .and_then(|c| c.address)
            .unwrap_or_default()
    };
    let company_contact = move || {
        company
            .get()
            .current
            .and_then(|c| c.point_of_contact)
            .unwrap_or_default()
    };
    let company_full_id = move || company.get().current.map(|c| c.id).unwrap_or_default();
    let company_short_id = move || {
        company
            .get()
            .current
            .map(|c| c.short_id().to_owned())
            .unwrap_or_default()
    };
    let modifiable = move || {
        company
            .get()
            .current
            .as_ref()
            .map_or(false, can_modify)
    };

    view! {
        <div class="company-page">
            <header class="company-page__header toolbar">
                <a class="btn btn--icon" title="Back to companies" href="/companies">
                    "←"
                </a>
                <span class="toolbar__title">"Maintenance Tracker"</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            <Show when=move || company.get().error.is_some()>
                <p class="company-page__error">
                    {move || company.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !company.get().loading
                fallback=move || view! { <p class="company-page__loading">"Loading company..."</p> }
            >
                <Show when=move || company.get().current.is_some()>
                    <div class="company-page__body">
                        <div class="company-page__head">
                            <Show when=modifiable>
                                <button class="btn btn--icon" title="Edit company" on:click=on_edit>
                                    "✎"
                                </button>
                                <button
                                    class="btn btn--icon btn--danger"
                                    title="Delete company"
                                    on:click=on_delete
                                >
                                    "🗑"
                                </button>
                            </Show>
                            <h1>{company_name}</h1>
                        </div>
                        <div class="company-page__meta">
                            <span>{company_address}</span>
                            <span>{company_contact}</span>
                            <span class="company-page__short-id" title=company_full_id>
                                {company_short_id}
                            </span>
                        </div>

                        <ChecklistTable />
                    </div>
                </Show>
            </Show>

            <Show when=move || show_edit.get()>
                <EditCompanyDialog draft=draft on_cancel=on_edit_cancel company=company />
            </Show>
            <Show when=move || show_delete.get()>
                <DeleteCompanyDialog on_cancel=on_delete_cancel company=company />
            </Show>
        </div>
    }
}

/// Modal dialog for editing the company's contact fields.
#[component]
fn EditCompanyDialog(
    draft: RwSignal<CompanyDraft>,
    on_cancel: Callback<()>,
    company: RwSignal<CompanyState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = company.get_untracked().current.map(|c| c.id) else {
            return;
        };
        let payload = draft.get().trimmed();
        if !payload.is_complete() {
            return;
        }
        company.update(|s| {
            s.save_pending = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api::update_company(&id, &payload).await {
                Ok(()) => {
                    company.update(|s| s.save_pending = false);
                    // Pick up server-maintained fields like last_updated.
                    load_company(company, &id).await;
                }
                Err(message) => {
                    log::error!("company update: {message}");
                    company.update(|s| {
                        s.save_pending = false;
                        s.error = Some(message);
                    });
                }
            }
        });
        on_cancel.run(());
    });

    let on_enter = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Company"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        autofocus=true
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        on:keydown=on_enter
                    />
                </label>
                <label class="dialog__label">
                    "Address"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().address
                        on:input=move |ev| draft.update(|d| d.address = event_target_value(&ev))
                        on:keydown=on_enter
                    />
                </label>
                <label class="dialog__label">
                    "Point of contact"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().point_of_contact
                        on:input=move |ev| {
                            draft.update(|d| d.point_of_contact = event_target_value(&ev));
                        }
                        on:keydown=on_enter
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !draft.get().is_complete()
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting the company.
#[component]
fn DeleteCompanyDialog(on_cancel: Callback<()>, company: RwSignal<CompanyState>) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = company.get_untracked().current.map(|c| c.id) else {
            return;
        };
        company.update(|s| {
            s.delete_pending = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api::delete_company(&id).await {
                Ok(()) => company.update(|s| {
                    s.delete_pending = false;
                    s.deleted = true;
                }),
                Err(message) => {
                    log::error!("company delete: {message}");
                    company.update(|s| {
                        s.delete_pending = false;
                        s.error = Some(message);
                    });
                }
            }
        });
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Company"</h2>
                <p class="dialog__danger">"Are you sure you want to delete this company?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Yes, I'm sure"
                    </button>
                </div>
            </div>
        </div>
    }
}
