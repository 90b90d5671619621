use crate::shared::api_utils::encode_segment;

/// Every page of the console.
///
/// `parse` accepts the static segments in any case (`/Employees/edit/3` is
/// the employee edit page); `path` always yields the canonical lowercase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Cafes,
    CafeAdd,
    CafeEdit(String),
    Employees,
    EmployeesOfCafe(String),
    EmployeeAdd,
    EmployeeEdit(String),
    NotFound,
}

pub const CAFE_ID_QUERY: &str = "cafeId";

impl AppRoute {
    /// Parse a location (`path` with an optional `?query`)
    pub fn parse(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let lower: Vec<String> = segments.iter().map(|s| s.to_lowercase()).collect();
        let lower: Vec<&str> = lower.iter().map(String::as_str).collect();

        match lower.as_slice() {
            [] | ["cafes"] => Self::Cafes,
            ["cafes", "add"] => Self::CafeAdd,
            ["cafes", "edit", _] => Self::CafeEdit(decode(segments[2])),
            ["employees"] => match query.and_then(|q| query_value(q, CAFE_ID_QUERY)) {
                Some(cafe_id) => Self::EmployeesOfCafe(cafe_id),
                None => Self::Employees,
            },
            ["employees", "add"] => Self::EmployeeAdd,
            ["employees", "edit", _] => Self::EmployeeEdit(decode(segments[2])),
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Cafes => "/cafes".to_string(),
            Self::CafeAdd => "/cafes/add".to_string(),
            Self::CafeEdit(id) => format!("/cafes/edit/{}", encode_segment(id)),
            Self::Employees => "/employees".to_string(),
            Self::EmployeesOfCafe(cafe_id) => format!(
                "/employees?{}={}",
                CAFE_ID_QUERY,
                encode_segment(cafe_id)
            ),
            Self::EmployeeAdd => "/employees/add".to_string(),
            Self::EmployeeEdit(id) => format!("/employees/edit/{}", encode_segment(id)),
            Self::NotFound => "/not-found".to_string(),
        }
    }

    /// List page a form returns to after save or cancel
    pub fn owning_list(&self) -> Self {
        match self {
            Self::CafeAdd | Self::CafeEdit(_) => Self::Cafes,
            Self::EmployeeAdd | Self::EmployeeEdit(_) => Self::Employees,
            other => other.clone(),
        }
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

fn query_value(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| decode(&v.replace('+', " ")))
        .filter(|v| !v.trim().is_empty())
}
