//! Application root: context setup and the route tree.
//!
//! Two audiences share one router. Everything under `/patient` is the
//! portal (its own auth context, navbar, and guard); every other path is
//! the staff application, where each route is wrapped in [`RequireRole`]
//! with the allowed set from the access table.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::pages;
use crate::routing::guard::RequireRole;
use crate::routing::is_patient_path;
use crate::routing::routes;
use crate::state::auth::AuthState;
use crate::state::patient_auth::PatientAuthState;
use crate::state::session::{BrowserStorage, PatientSession, StaffSession};
use crate::util::theme;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(theme::read_preference(&BrowserStorage));
    Effect::new(move |_| theme::apply(theme.get()));
    provide_context(theme);

    // Both auth contexts are rehydrated from their own storage keys; the
    // staff and patient sessions never see each other.
    provide_context(RwSignal::new(AuthState::from_session(
        &StaffSession::browser(),
    )));
    provide_context(RwSignal::new(PatientAuthState::from_session(
        &PatientSession::browser(),
    )));

    view! {
        <Title text="Hopewell HMS"/>
        <Router>
            <AppShell/>
        </Router>
    }
}

/// Unmatched paths: staff side gets the not-found page; an unknown portal
/// path bounces back to the portal dashboard.
#[component]
fn Fallback() -> impl IntoView {
    let location = use_location();
    move || {
        if is_patient_path(&location.pathname.get()) {
            view! { <Redirect path="/patient"/> }.into_any()
        } else {
            view! { <pages::not_found::NotFoundPage/> }.into_any()
        }
    }
}

/// Everything inside the router: the audience-appropriate chrome plus the
/// route tree. The staff navbar is hidden on portal paths; the portal
/// renders its own inside [`pages::patient::layout::PatientPortalLayout`].
#[component]
fn AppShell() -> impl IntoView {
    let location = use_location();
    let on_portal = move || is_patient_path(&location.pathname.get());

    view! {
        <Show when=move || !on_portal()>
            <Navbar/>
        </Show>
        <main class="app-content">
            <Routes fallback=Fallback>
                // -- public --
                <Route path=path!("/") view=pages::login::LoginPage/>
                <Route path=path!("/login") view=pages::login::LoginPage/>
                <Route path=path!("/unauthorized") view=pages::unauthorized::UnauthorizedPage/>

                // -- admin --
                <Route
                    path=path!("/admin")
                    view=|| view! {
                        <RequireRole allowed=routes::ADMIN_ONLY>
                            <pages::admin::dashboard::AdminDashboardPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/roster")
                    view=|| view! {
                        <RequireRole allowed=routes::ADMIN_ONLY>
                            <pages::roster::RosterPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/analytics")
                    view=|| view! {
                        <RequireRole allowed=routes::ADMIN_ONLY>
                            <pages::admin::analytics::AnalyticsPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/staff-patients")
                    view=|| view! {
                        <RequireRole allowed=routes::ADMIN_ONLY>
                            <pages::admin::patient_directory::PatientDirectoryPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/staff-directory")
                    view=|| view! {
                        <RequireRole allowed=routes::ADMIN_ONLY>
                            <pages::admin::staff_directory::StaffDirectoryPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/leave-management")
                    view=|| view! {
                        <RequireRole allowed=routes::ADMIN_ONLY>
                            <pages::admin::leave_management::LeaveManagementPage/>
                        </RequireRole>
                    }
                />

                // -- shared admin/pharmacist --
                <Route
                    path=path!("/inventory")
                    view=|| view! {
                        <RequireRole allowed=routes::INVENTORY_ROLES>
                            <pages::inventory::InventoryPage/>
                        </RequireRole>
                    }
                />

                // -- single-role dashboards --
                <Route
                    path=path!("/receptionist")
                    view=|| view! {
                        <RequireRole allowed=routes::RECEPTIONIST_ONLY>
                            <pages::receptionist::ReceptionistPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/nurse")
                    view=|| view! {
                        <RequireRole allowed=routes::NURSE_ONLY>
                            <pages::nurse::NursePage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/doctor")
                    view=|| view! {
                        <RequireRole allowed=routes::DOCTOR_ONLY>
                            <pages::doctor::dashboard::DoctorDashboardPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/doctor/patient/:patientId")
                    view=|| view! {
                        <RequireRole allowed=routes::DOCTOR_ONLY>
                            <pages::doctor::patient_detail::PatientDetailPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/doctor/schedule")
                    view=|| view! {
                        <RequireRole allowed=routes::DOCTOR_ONLY>
                            <pages::doctor::schedule::ManageSchedulePage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/pharmacist")
                    view=|| view! {
                        <RequireRole allowed=routes::PHARMACIST_ONLY>
                            <pages::pharmacist::PharmacistPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/lab")
                    view=|| view! {
                        <RequireRole allowed=routes::LAB_ONLY>
                            <pages::lab::LabPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/accountant")
                    view=|| view! {
                        <RequireRole allowed=routes::ACCOUNTANT_ONLY>
                            <pages::accountant::AccountantPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/accountant/bill/:patientId")
                    view=|| view! {
                        <RequireRole allowed=routes::ACCOUNTANT_ONLY>
                            <pages::accountant_bill::AccountantBillPage/>
                        </RequireRole>
                    }
                />

                // -- any authenticated staff --
                <Route
                    path=path!("/my-roster")
                    view=|| view! {
                        <RequireRole>
                            <pages::my_roster::MyRosterPage/>
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/my-leave")
                    view=|| view! {
                        <RequireRole>
                            <pages::my_leave::MyLeavePage/>
                        </RequireRole>
                    }
                />

                // -- patient portal --
                <Route path=path!("/patient/login") view=pages::patient::login::PatientLoginPage/>
                <ParentRoute
                    path=path!("/patient")
                    view=pages::patient::layout::PatientPortalLayout
                >
                    <Route path=path!("") view=pages::patient::dashboard::PatientDashboardPage/>
                    <Route
                        path=path!("appointments")
                        view=pages::patient::appointments::MyAppointmentsPage
                    />
                    <Route path=path!("records") view=pages::patient::records::MyRecordsPage/>
                    <Route
                        path=path!("history/doctor/:doctorId")
                        view=pages::patient::doctor_history::DoctorHistoryPage
                    />
                    <Route path=path!("bills") view=pages::patient::bills::MyBillsPage/>
                </ParentRoute>
            </Routes>
        </main>
    }
}
