//! Registration Page State
//!
//! All user-visible state of the create-point page in one container with
//! pure transition methods, so the behavior is testable without a browser.
//! The component layer holds this in a signal and forwards events here.

use crate::models::{Item, NewPoint};

/// User-editable text fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Which text field an input event targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Name,
    Email,
    Whatsapp,
}

/// Submission lifecycle; `Succeeded` is terminal and renders the
/// acknowledgment exactly once
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Descriptor of a city fetch to perform, issued by `select_uf`.
/// The sequence number ties the eventual response back to the selection
/// that requested it.
#[derive(Debug, Clone, PartialEq)]
pub struct CityFetch {
    pub uf: String,
    pub seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CreatePointState {
    pub items: Vec<Item>,
    pub ufs: Vec<String>,
    pub cities: Vec<String>,
    pub form: FormData,
    pub selected_uf: Option<String>,
    pub selected_city: Option<String>,
    pub selected_items: Vec<u32>,
    /// (latitude, longitude); stays (0, 0) until geolocation resolves
    pub position: (f64, f64),
    pub submit: SubmitStatus,
    /// Inline error message, if the last fetch or submission failed
    pub error: Option<String>,
    city_seq: u64,
}

impl CreatePointState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Email => self.form.email = value,
            Field::Whatsapp => self.form.whatsapp = value,
        }
    }

    /// Toggle membership of one item id. Removal preserves the order of
    /// the remaining ids.
    pub fn toggle_item(&mut self, id: u32) {
        if self.selected_items.iter().any(|&selected| selected == id) {
            self.selected_items.retain(|&selected| selected != id);
        } else {
            self.selected_items.push(id);
        }
    }

    pub fn is_item_selected(&self, id: u32) -> bool {
        self.selected_items.iter().any(|&selected| selected == id)
    }

    /// Change the state selection. Selecting a state clears the dependent
    /// city selection and list, and returns the city fetch to run, tagged
    /// with a fresh sequence number. Deselecting returns no fetch and
    /// leaves the previous city list in place.
    pub fn select_uf(&mut self, uf: Option<String>) -> Option<CityFetch> {
        self.selected_city = None;
        self.selected_uf = uf.clone();
        let uf = uf?;
        self.cities.clear();
        self.city_seq += 1;
        Some(CityFetch {
            uf,
            seq: self.city_seq,
        })
    }

    pub fn select_city(&mut self, city: Option<String>) {
        self.selected_city = city;
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn set_ufs(&mut self, ufs: Vec<String>) {
        self.ufs = ufs;
    }

    pub fn set_position(&mut self, latitude: f64, longitude: f64) {
        self.position = (latitude, longitude);
    }

    /// Apply a city-list response. Responses carrying a superseded sequence
    /// number are dropped, so a slow fetch can never overwrite the list of
    /// a newer selection. Returns whether the response was applied.
    pub fn apply_cities(&mut self, seq: u64, cities: Vec<String>) -> bool {
        if seq != self.city_seq {
            return false;
        }
        self.cities = cities;
        true
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// A point can only be submitted with a state and city selected and
    /// no submission already in flight or completed.
    pub fn can_submit(&self) -> bool {
        self.selected_uf.is_some()
            && self.selected_city.is_some()
            && !matches!(self.submit, SubmitStatus::Submitting | SubmitStatus::Succeeded)
    }

    /// Compose the payload from current state. `None` while state or city
    /// is unselected; placeholders are never submitted as values.
    pub fn payload(&self) -> Option<NewPoint> {
        let uf = self.selected_uf.clone()?;
        let city = self.selected_city.clone()?;
        let (latitude, longitude) = self.position;
        Some(NewPoint {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            whatsapp: self.form.whatsapp.clone(),
            uf,
            city,
            latitude,
            longitude,
            items: self.selected_items.clone(),
        })
    }

    /// Start a submission: returns the payload to POST, or `None` when
    /// submission is not currently allowed.
    pub fn begin_submit(&mut self) -> Option<NewPoint> {
        if !self.can_submit() {
            return None;
        }
        let payload = self.payload()?;
        self.submit = SubmitStatus::Submitting;
        self.error = None;
        Some(payload)
    }

    pub fn submit_succeeded(&mut self) {
        self.submit = SubmitStatus::Succeeded;
    }

    pub fn submit_failed(&mut self, message: String) {
        self.submit = SubmitStatus::Failed(message.clone());
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, title: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            image_url: format!("http://localhost:3333/uploads/{}.svg", title.to_lowercase()),
        }
    }

    fn state_with_address(uf: &str, city: &str) -> CreatePointState {
        let mut state = CreatePointState::new();
        state.select_uf(Some(uf.to_string()));
        state.select_city(Some(city.to_string()));
        state
    }

    #[test]
    fn test_toggle_item_has_no_duplicates() {
        let mut state = CreatePointState::new();
        state.toggle_item(1);
        state.toggle_item(2);
        state.toggle_item(1);
        state.toggle_item(1);
        state.toggle_item(2);
        state.toggle_item(2);
        state.toggle_item(1);
        // 1 toggled four times (out), 2 toggled three times (in)
        assert_eq!(state.selected_items, vec![2]);
        let mut deduped = state.selected_items.clone();
        deduped.dedup();
        assert_eq!(deduped, state.selected_items);
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut state = CreatePointState::new();
        state.toggle_item(1);
        state.toggle_item(3);
        let before = state.selected_items.clone();
        state.toggle_item(2);
        state.toggle_item(2);
        assert_eq!(state.selected_items, before);
    }

    #[test]
    fn test_toggle_glass_paper_glass_leaves_paper() {
        let mut state = CreatePointState::new();
        state.set_items(vec![make_item(1, "Glass"), make_item(2, "Paper")]);
        state.toggle_item(1);
        state.toggle_item(2);
        state.toggle_item(1);
        assert_eq!(state.selected_items, vec![2]);
    }

    #[test]
    fn test_removal_preserves_order_of_rest() {
        let mut state = CreatePointState::new();
        for id in [4, 1, 3, 2] {
            state.toggle_item(id);
        }
        state.toggle_item(3);
        assert_eq!(state.selected_items, vec![4, 1, 2]);
    }

    #[test]
    fn test_select_uf_issues_one_fetch_for_that_uf() {
        let mut state = CreatePointState::new();
        let fetch = state.select_uf(Some("SP".to_string()));
        let fetch = fetch.expect("selecting a state must request its cities");
        assert_eq!(fetch.uf, "SP");
        assert_eq!(state.selected_uf.as_deref(), Some("SP"));
    }

    #[test]
    fn test_deselecting_uf_issues_no_fetch_and_keeps_city_list() {
        let mut state = CreatePointState::new();
        let fetch = state.select_uf(Some("SP".to_string())).unwrap();
        assert!(state.apply_cities(fetch.seq, vec!["Santos".to_string()]));
        assert_eq!(state.select_uf(None), None);
        assert_eq!(state.cities, vec!["Santos".to_string()]);
        assert_eq!(state.selected_uf, None);
    }

    #[test]
    fn test_new_uf_selection_clears_city_and_list() {
        let mut state = CreatePointState::new();
        let fetch = state.select_uf(Some("SP".to_string())).unwrap();
        state.apply_cities(fetch.seq, vec!["Santos".to_string()]);
        state.select_city(Some("Santos".to_string()));

        state.select_uf(Some("RJ".to_string()));
        assert_eq!(state.selected_city, None);
        assert!(state.cities.is_empty());
    }

    #[test]
    fn test_stale_city_response_is_dropped() {
        let mut state = CreatePointState::new();
        let first = state.select_uf(Some("SP".to_string())).unwrap();
        let second = state.select_uf(Some("RJ".to_string())).unwrap();

        // The older fetch resolves after the newer one
        assert!(state.apply_cities(second.seq, vec!["Niterói".to_string()]));
        assert!(!state.apply_cities(first.seq, vec!["Santos".to_string()]));
        assert_eq!(state.cities, vec!["Niterói".to_string()]);
    }

    #[test]
    fn test_payload_requires_state_and_city() {
        let mut state = CreatePointState::new();
        assert_eq!(state.payload(), None);
        assert!(!state.can_submit());

        state.select_uf(Some("SP".to_string()));
        assert_eq!(state.payload(), None);
        assert!(!state.can_submit());

        state.select_city(Some("São Paulo".to_string()));
        assert!(state.payload().is_some());
        assert!(state.can_submit());
    }

    #[test]
    fn test_payload_defaults_to_origin_without_geolocation() {
        let state = state_with_address("SP", "São Paulo");
        let payload = state.payload().unwrap();
        assert_eq!((payload.latitude, payload.longitude), (0.0, 0.0));
    }

    #[test]
    fn test_payload_composition() {
        let mut state = state_with_address("SP", "São Paulo");
        state.set_field(Field::Name, "Acme".to_string());
        state.set_field(Field::Email, "a@b.com".to_string());
        state.set_field(Field::Whatsapp, "123".to_string());
        state.set_position(-23.55, -46.63);
        state.toggle_item(1);
        state.toggle_item(2);

        let payload = state.payload().unwrap();
        assert_eq!(
            payload,
            NewPoint {
                name: "Acme".to_string(),
                email: "a@b.com".to_string(),
                whatsapp: "123".to_string(),
                uf: "SP".to_string(),
                city: "São Paulo".to_string(),
                latitude: -23.55,
                longitude: -46.63,
                items: vec![1, 2],
            }
        );
    }

    #[test]
    fn test_begin_submit_guards_against_double_submit() {
        let mut state = state_with_address("SP", "São Paulo");
        assert!(state.begin_submit().is_some());
        assert_eq!(state.submit, SubmitStatus::Submitting);
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn test_failed_submit_never_reaches_acknowledgment() {
        let mut state = state_with_address("SP", "São Paulo");
        state.begin_submit().unwrap();
        state.submit_failed("HTTP 500: Internal Server Error".to_string());
        assert!(matches!(state.submit, SubmitStatus::Failed(_)));
        assert!(state.error.is_some());
        // The form stays usable for another attempt
        assert!(state.can_submit());
    }

    #[test]
    fn test_successful_submit_is_terminal() {
        let mut state = state_with_address("SP", "São Paulo");
        state.begin_submit().unwrap();
        state.submit_succeeded();
        assert_eq!(state.submit, SubmitStatus::Succeeded);
        assert!(!state.can_submit());
        assert_eq!(state.begin_submit(), None);
    }
}
