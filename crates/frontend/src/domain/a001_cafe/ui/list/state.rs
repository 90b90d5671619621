use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, Searchable, Sortable};
use contracts::domain::a001_cafe::aggregate::Cafe;
use leptos::prelude::*;
use std::cmp::Ordering;

pub mod sort_fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const EMPLOYEES: &str = "employees";
    pub const LOCATION: &str = "location";
}

/// The café list is filtered by location
impl Searchable for Cafe {
    fn search_field(&self) -> &str {
        &self.location
    }
}

impl Sortable for Cafe {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            sort_fields::DESCRIPTION => cmp_text(&self.description, &other.description),
            sort_fields::EMPLOYEES => self.employee_count.cmp(&other.employee_count),
            sort_fields::LOCATION => cmp_text(&self.location, &other.location),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

pub type CafeListState = ListState<Cafe>;

pub fn create_state() -> RwSignal<CafeListState> {
    RwSignal::new(ListState::new(sort_fields::NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe(name: &str, location: &str, employees: i64) -> Cafe {
        Cafe {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            logo: String::new(),
            location: location.to_string(),
            employee_count: employees,
        }
    }

    fn loaded(cafes: Vec<Cafe>) -> CafeListState {
        let mut state = CafeListState::new(sort_fields::NAME);
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Ok(cafes));
        state
    }

    #[test]
    fn filters_on_location_only() {
        let mut state = loaded(vec![
            cafe("Central", "Main St", 3),
            cafe("Mainly", "Dock Rd", 1),
            cafe("Corner", "MAIN square", 0),
        ]);
        state.set_filter("main");
        let names: Vec<_> = state.filtered().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Central", "Corner"]);

        state.set_filter("");
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn sorts_by_employee_count() {
        let mut state = loaded(vec![
            cafe("Central", "a", 3),
            cafe("Harbour", "b", 10),
            cafe("Corner", "c", 0),
        ]);
        state.toggle_sort(sort_fields::EMPLOYEES);
        let counts: Vec<_> = state.visible().iter().map(|c| c.employee_count).collect();
        assert_eq!(counts, vec![0, 3, 10]);
    }
}
