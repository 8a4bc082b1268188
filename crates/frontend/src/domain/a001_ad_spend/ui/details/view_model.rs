use contracts::domain::a001_ad_spend::{AdSpend, AdSpendForm};
use leptos::prelude::*;

use crate::shared::date_utils;

/// ViewModel for the ad spend create/edit form.
#[derive(Clone, Copy)]
pub struct AdSpendDetailsViewModel {
    pub form: RwSignal<AdSpendForm>,
    pub error: RwSignal<Option<String>>,
}

impl AdSpendDetailsViewModel {
    /// New entries default to today's date.
    pub fn new(record: Option<&AdSpend>) -> Self {
        let form = match record {
            Some(record) => AdSpendForm::from_record(record),
            None => AdSpendForm {
                date: date_utils::today_iso(),
                ..Default::default()
            },
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|form| form.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|form| form.validate().is_ok())
    }

    /// Validate and hand the form to the list page; validation errors
    /// stay inside the dialog.
    pub fn save_command(&self, on_submit: Callback<AdSpendForm>) {
        let current = self.form.get();
        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        on_submit.run(current);
    }
}
