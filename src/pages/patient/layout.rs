//! Shared frame for the authenticated portal pages: guard plus navbar
//! around an outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::patient_navbar::PatientNavbar;
use crate::routing::guard::RequirePatient;

#[component]
pub fn PatientPortalLayout() -> impl IntoView {
    view! {
        <RequirePatient>
            <div class="patient-portal">
                <PatientNavbar/>
                <main class="portal-content">
                    <Outlet/>
                </main>
            </div>
        </RequirePatient>
    }
}
