use leptos::prelude::*;

/// Client-side state of the listing grid: the quick search box narrows
/// the already-fetched page by title/description without a server round
/// trip.
#[derive(Clone, Debug, Default)]
pub struct ListingListState {
    pub client_search: String,
}

pub fn create_state() -> RwSignal<ListingListState> {
    RwSignal::new(ListingListState::default())
}
