use crate::shared::date_utils::format_start_date;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{cmp_text, Searchable, Sortable};
use contracts::domain::a002_employee::aggregate::Employee;
use leptos::prelude::*;
use std::cmp::Ordering;

pub mod sort_fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const GENDER: &str = "gender";
    pub const DAYS_WORKED: &str = "days_worked";
    pub const CAFE: &str = "cafe";
    pub const START_DATE: &str = "start_date";
}

/// The employee list is filtered by name
impl Searchable for Employee {
    fn search_field(&self) -> &str {
        &self.name
    }
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            sort_fields::EMAIL => cmp_text(&self.email_address, &other.email_address),
            sort_fields::PHONE => self.phone_number.cmp(&other.phone_number),
            sort_fields::GENDER => cmp_text(&self.gender, &other.gender),
            sort_fields::DAYS_WORKED => days_worked(self).cmp(&days_worked(other)),
            sort_fields::CAFE => cmp_text(
                self.cafe_name.as_deref().unwrap_or(""),
                other.cafe_name.as_deref().unwrap_or(""),
            ),
            // "N/A" sorts after any real date
            sort_fields::START_DATE => start_date(self).cmp(&start_date(other)),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

pub fn days_worked(employee: &Employee) -> i64 {
    employee.days_worked.unwrap_or(0)
}

pub fn start_date(employee: &Employee) -> String {
    format_start_date(employee.start_date.as_deref())
}

/// Gender as shown in the grid, whatever casing the server used
pub fn gender_label(employee: &Employee) -> String {
    if employee.gender.trim().is_empty() {
        "N/A".to_string()
    } else {
        employee.gender.trim().to_lowercase()
    }
}

pub type EmployeeListState = ListState<Employee>;

pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(ListState::new(sort_fields::NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, start: Option<&str>, days: Option<i64>) -> Employee {
        Employee {
            id: name.to_lowercase(),
            name: name.to_string(),
            email_address: format!("{}@x.com", name.to_lowercase()),
            phone_number: "555".to_string(),
            gender: "Female".to_string(),
            cafe_id: "7".to_string(),
            cafe_name: Some("Central".to_string()),
            start_date: start.map(str::to_string),
            days_worked: days,
        }
    }

    #[test]
    fn filters_on_name() {
        let mut state = EmployeeListState::new(sort_fields::NAME);
        let ticket = state.begin_fetch();
        state.apply_fetch(
            ticket,
            Ok(vec![
                employee("Ann", None, None),
                employee("Joanna", None, None),
                employee("Bob", None, None),
            ]),
        );
        state.set_filter("AN");
        let names: Vec<_> = state.filtered().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Ann", "Joanna"]);
    }

    #[test]
    fn display_defaults() {
        let e = employee("Ann", None, None);
        assert_eq!(days_worked(&e), 0);
        assert_eq!(start_date(&e), "N/A");
        assert_eq!(gender_label(&e), "female");

        let e = employee("Ann", Some("2024-03-15T00:00:00"), Some(12));
        assert_eq!(days_worked(&e), 12);
        assert_eq!(start_date(&e), "2024-03-15");
    }

    #[test]
    fn sorts_by_days_worked_with_missing_as_zero() {
        let a = employee("A", None, Some(5));
        let b = employee("B", None, None);
        assert_eq!(a.compare_by_field(&b, sort_fields::DAYS_WORKED), Ordering::Greater);
    }
}
