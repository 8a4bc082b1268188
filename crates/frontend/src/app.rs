use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::ledger::LedgerService;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Centralized modal and toast hosts.
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    // Shared aggregation ledger, restored from localStorage.
    provide_context(LedgerService::load());

    view! {
        <AppShell />
    }
}
