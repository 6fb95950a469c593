use crate::{console_debug, console_info, console_warn};
use dioxus::prelude::*;

use crate::components::display::{ErrorBanner, StepIndicator};
use crate::components::forms::{AffiliationStep, ContactStep, IdentityStep, WizardControls};
use crate::registration::{
    submit_registration, NavigationRequest, SignUpAction, SignUpState, WizardStep,
};
use crate::services::config::AppConfig;
use crate::services::SignUpServices;

const SIGN_UP_CSS: Asset = asset!("/assets/styling/sign_up.css");

#[derive(Props, PartialEq, Clone)]
pub struct SignUpPageProps {
    pub config: AppConfig,
    /// Receives the destination once the account has been created
    pub on_navigate: EventHandler<NavigationRequest>,
}

#[component]
pub fn SignUpPage(props: SignUpPageProps) -> Element {
    let mut state = use_signal(SignUpState::default);
    let config = props.config.clone();
    let services = use_hook(move || {
        if let Err(e) = config.validate() {
            console_warn!("[SignUp] Configuration problem: {:#}", e);
        }
        SignUpServices::from_config(&config)
    });
    let on_navigate = props.on_navigate;

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: SignUpAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Faculties are loaded once on mount
    let reference_data = services.reference_data.clone();
    use_effect(move || {
        let reference_data = reference_data.clone();
        spawn(async move {
            match reference_data.list_faculties().await {
                Ok(faculties) => {
                    console_info!("[SignUp] Loaded {} faculties", faculties.len());
                    dispatch.call(SignUpAction::FacultiesLoaded(faculties));
                }
                Err(e) => {
                    console_warn!("[SignUp] Failed to load faculties: {}", e);
                    dispatch.call(SignUpAction::FacultiesFailed);
                }
            }
        });
    });

    // Refetch departments whenever the reducer issues a new ticket
    let department_ticket = use_memo(move || state().department_requests.latest().cloned());
    let reference_data = services.reference_data.clone();
    use_effect(move || {
        let Some(ticket) = department_ticket() else {
            return;
        };
        let reference_data = reference_data.clone();
        spawn(async move {
            let result = reference_data.list_departments(ticket.faculty_id()).await;
            match result {
                Ok(departments) => {
                    console_debug!(
                        "[SignUp] {} departments for faculty {} (request {})",
                        departments.len(),
                        ticket.faculty_id(),
                        ticket.generation()
                    );
                    dispatch.call(SignUpAction::DepartmentsLoaded {
                        ticket,
                        departments,
                    });
                }
                Err(e) => {
                    console_warn!(
                        "[SignUp] Failed to load departments for faculty {}: {}",
                        ticket.faculty_id(),
                        e
                    );
                    dispatch.call(SignUpAction::DepartmentsFailed { ticket });
                }
            }
        });
    });

    let submit_services = services.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if let Err(rejection) = state.with_mut(|s| s.begin_submission()) {
            console_debug!("[SignUp] Submit ignored: {:?}", rejection);
            return;
        }

        let snapshot = state();
        let services = submit_services.clone();
        spawn(async move {
            let avatar_url = services.avatars.random_url();
            match submit_registration(&snapshot, services.auth.as_ref(), avatar_url).await {
                Ok(receipt) => {
                    console_info!("[SignUp] Account created for {}", receipt.session.user_id);
                    if let Err(e) = services.sessions.store(&receipt.session) {
                        console_warn!("[SignUp] Could not store session: {}", e);
                    }
                    dispatch.call(SignUpAction::SubmissionSucceeded);
                    on_navigate.call(receipt.navigation);
                }
                Err(e) => {
                    console_warn!("[SignUp] Registration failed: {}", e);
                    dispatch.call(SignUpAction::SubmissionFailed(e));
                }
            }
        });
    };

    let current = state();

    rsx! {
        document::Link { rel: "stylesheet", href: SIGN_UP_CSS }

        div {
            class: "signup-container",

            form {
                class: "signup-form",
                onsubmit: on_submit,

                div {
                    class: "signup-header",
                    div { class: "signup-logo", "🏫" }
                    h1 { class: "signup-title", "Sign Up for Pineappl" }
                    p { class: "signup-subtitle", "Academic Performance Platform" }
                }

                StepIndicator { current: current.current_step }

                if let Some(message) = current.error.clone() {
                    ErrorBanner {
                        message: message,
                        hint: current.failure.as_ref().map(|failure| failure.hint().to_string())
                    }
                }

                {match current.current_step {
                    WizardStep::Identity => rsx! {
                        IdentityStep { state: state, dispatch: dispatch }
                    },
                    WizardStep::Contact => rsx! {
                        ContactStep { state: state, dispatch: dispatch }
                    },
                    WizardStep::Affiliation => rsx! {
                        AffiliationStep { state: state, dispatch: dispatch }
                    },
                }}

                WizardControls {
                    step: current.current_step,
                    is_loading: current.is_loading,
                    on_previous: move |_| dispatch.call(SignUpAction::PreviousStep),
                    on_next: move |_| dispatch.call(SignUpAction::NextStep)
                }
            }
        }
    }
}
