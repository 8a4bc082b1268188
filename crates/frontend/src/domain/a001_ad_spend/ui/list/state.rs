use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct AdSpendListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for AdSpendListState {
    fn default() -> Self {
        Self {
            sort_field: "date".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn create_state() -> RwSignal<AdSpendListState> {
    RwSignal::new(AdSpendListState::default())
}
