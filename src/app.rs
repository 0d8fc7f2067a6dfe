//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{companies::CompaniesPage, company::CompanyPage};
use crate::state::checklist::ChecklistState;
use crate::state::companies::CompaniesState;
use crate::state::company::CompanyState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Apply the stored theme before the first paint.
    let initial_dark = dark_mode::read_preference();
    dark_mode::apply(initial_dark);

    // Provide reactive state contexts for all child components.
    let companies = RwSignal::new(CompaniesState::default());
    let company = RwSignal::new(CompanyState::default());
    let checklist = RwSignal::new(ChecklistState::default());
    let ui = RwSignal::new(UiState { dark_mode: initial_dark });

    provide_context(companies);
    provide_context(company);
    provide_context(checklist);
    provide_context(ui);

    view! {
        <Title text="Maintenance Tracker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CompaniesPage/>
                <Route path=StaticSegment("companies") view=CompaniesPage/>
                <Route path=(StaticSegment("companies"), ParamSegment("id")) view=CompanyPage/>
            </Routes>
        </Router>
    }
}
