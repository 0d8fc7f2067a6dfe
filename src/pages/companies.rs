//! Companies page listing every company with create and open actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the company list over HTTP on
//! mount, backfills per-company cycle progress one request at a time, and
//! coordinates the create->navigate flow.

#[cfg(test)]
#[path = "companies_test.rs"]
mod companies_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::progress_bar::ProgressBar;
use crate::net::api;
use crate::net::types::CompanyDraft;
use crate::state::companies::CompaniesState;
use crate::state::ui::UiState;

fn company_route(company_id: &str) -> String {
    format!("/companies/{company_id}")
}

fn progress_label(percent: Option<u8>) -> String {
    match percent {
        Some(value) => format!("{value}%"),
        None => "—".to_owned(),
    }
}

/// Companies page — the full inventory table plus a create dialog.
#[component]
pub fn CompaniesPage() -> impl IntoView {
    let companies = expect_context::<RwSignal<CompaniesState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() {
            return;
        }
        companies.update(|s| {
            s.loading = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api::fetch_companies().await {
                Ok(items) => {
                    let ids: Vec<String> = items.iter().map(|c| c.id.clone()).collect();
                    companies.update(|s| {
                        s.items = items;
                        s.loading = false;
                    });
                    // Progress lands one company at a time, in list order.
                    for id in ids {
                        match api::fetch_company_progress(&id).await {
                            Ok(progress) => companies.update(|s| {
                                s.progress.insert(id.clone(), progress);
                            }),
                            Err(message) => log::error!("progress for {id}: {message}"),
                        }
                    }
                }
                Err(message) => {
                    log::error!("company list: {message}");
                    companies.update(|s| {
                        s.loading = false;
                        s.error = Some(message);
                    });
                }
            }
        });
        requested_list.set(true);
    });

    // Create-company dialog state.
    let show_create = RwSignal::new(false);
    let draft = RwSignal::new(CompanyDraft::default());

    let on_create = move |_| {
        draft.set(CompanyDraft::default());
        show_create.set(true);
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));

    Effect::new(move || {
        if let Some(company_id) = companies.get().created_company_id.clone() {
            companies.update(|s| s.created_company_id = None);
            navigate(&company_route(&company_id), NavigateOptions::default());
        }
    });

    view! {
        <div class="companies-page">
            <header class="companies-page__header toolbar">
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

            <div class="companies-page__body">
                <div class="companies-page__heading">
                    <h1>"Companies"</h1>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ New Company"
                    </button>
                </div>

                <Show when=move || companies.get().error.is_some()>
                    <p class="companies-page__error">
                        {move || companies.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !companies.get().loading
                    fallback=move || view! { <p>"Loading companies..."</p> }
                >
                    <Show
                        when=move || !companies.get().items.is_empty()
                        fallback=move || view! { <p>"No companies found"</p> }
                    >
                        <table class="companies-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Address"</th>
                                    <th>"Point of contact"</th>
                                    <th>"Last updated"</th>
                                    <th>"Last updated by"</th>
                                    <th>"Progress"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    companies
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|company| {
                                            let percent = companies
                                                .get_untracked()
                                                .progress_percent(&company.id);
                                            let open_route = company_route(&company.id);
                                            view! {
                                                <tr class="companies-table__row">
                                                    <td>{company.name}</td>
                                                    <td>{company.address.unwrap_or_default()}</td>
                                                    <td>{company.point_of_contact.unwrap_or_default()}</td>
                                                    <td>{company.last_updated.unwrap_or_default()}</td>
                                                    <td>{company.last_updated_by.unwrap_or_default()}</td>
                                                    <td class="companies-table__progress">
                                                        <ProgressBar percent=Signal::derive(move || {
                                                            percent.unwrap_or(0)
                                                        }) />
                                                        <span>{progress_label(percent)}</span>
                                                    </td>
                                                    <td>
                                                        <a class="btn btn--icon" title="Open company" href=open_route>
                                                            "→"
                                                        </a>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </div>

            <Show when=move || show_create.get()>
                <NewCompanyDialog draft=draft on_cancel=on_cancel companies=companies />
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new company.
#[component]
fn NewCompanyDialog(
    draft: RwSignal<CompanyDraft>,
    on_cancel: Callback<()>,
    companies: RwSignal<CompaniesState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let current = draft.get();
        if !current.is_complete() {
            return;
        }
        let payload = current.trimmed();
        companies.update(|s| {
            s.create_pending = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api::create_company(&payload).await {
                Ok(created) => companies.update(|s| {
                    s.create_pending = false;
                    s.created_company_id = Some(created.id);
                }),
                Err(message) => {
                    log::error!("company create: {message}");
                    companies.update(|s| {
                        s.create_pending = false;
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
                <h2>"New Company"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Krispy Kreme Donuts"
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
                        placeholder="123 Main Street Anytown, USA"
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
                        placeholder="Jeffrey Krispy"
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
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
