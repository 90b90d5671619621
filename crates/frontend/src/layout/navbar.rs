use crate::routes::AppRoute;
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Section a location belongs to, for highlighting the nav entry
fn section_of(route: &AppRoute) -> Option<&'static str> {
    match route {
        AppRoute::Cafes | AppRoute::CafeAdd | AppRoute::CafeEdit(_) => Some("cafes"),
        AppRoute::Employees
        | AppRoute::EmployeesOfCafe(_)
        | AppRoute::EmployeeAdd
        | AppRoute::EmployeeEdit(_) => Some("employees"),
        AppRoute::NotFound => None,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| section_of(&AppRoute::parse(&location.pathname.get())));

    let sections = vec![
        ("cafes", "Cafés", "cafes", AppRoute::Cafes),
        ("employees", "Employees", "users", AppRoute::Employees),
    ];

    view! {
        <nav class="main-nav-bar">
            <ul>
                {sections.into_iter().map(|(key, title, icon, route)| {
                    view! {
                        <li class:active=move || current.get() == Some(key)>
                            <A href=route.path()>
                                {icons::icon(icon)}
                                <span>{title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_highlight_their_list() {
        assert_eq!(section_of(&AppRoute::parse("/cafes/edit/1")), Some("cafes"));
        assert_eq!(section_of(&AppRoute::parse("/")), Some("cafes"));
        assert_eq!(section_of(&AppRoute::parse("/Employees/add")), Some("employees"));
        assert_eq!(section_of(&AppRoute::parse("/elsewhere")), None);
    }
}
