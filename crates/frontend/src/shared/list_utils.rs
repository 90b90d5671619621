/// Универсальные утилиты для работы со списками (поиск, сортировка)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск по одному полю
pub trait Searchable {
    /// Значение поля, по которому работает фильтр списка
    fn search_field(&self) -> &str;

    /// Case-insensitive substring match; an empty filter matches everything
    fn matches_filter(&self, filter: &str) -> bool {
        filter.is_empty()
            || self
                .search_field()
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive string ordering used by the `Sortable` impls
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let Some((start, end)) = find_match(text, filter) else {
        return view! { <span>{text.to_string()}</span> }.into_any();
    };

    view! {
        <span>
            {text[..start].to_string()}
            <mark class="list__match">{text[start..end].to_string()}</mark>
            {text[end..].to_string()}
        </span>
    }
    .into_any()
}

/// Byte range of the first case-insensitive occurrence of `filter` in
/// `text`, on char boundaries of the original text
fn find_match(text: &str, filter: &str) -> Option<(usize, usize)> {
    if filter.is_empty() {
        return None;
    }
    let needle: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
    let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();

    for &start in &starts {
        let mut matched = 0;
        let mut end = start;
        for (i, c) in text[start..].char_indices() {
            let lowered: Vec<char> = c.to_lowercase().collect();
            if needle[matched..].starts_with(&lowered) {
                matched += lowered.len();
                end = start + i + c.len_utf8();
                if matched == needle.len() {
                    return Some((start, end));
                }
            } else {
                break;
            }
        }
    }
    None
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn search_field(&self) -> &str {
            self.0
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            cmp_text(self.0, other.0)
        }
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let rows = vec![Row("Main St"), Row("Harbour Rd"), Row("main square")];
        assert_eq!(filter_list(&rows, "MAIN"), vec![Row("Main St"), Row("main square")]);
        assert_eq!(filter_list(&rows, "rd"), vec![Row("Harbour Rd")]);
        assert!(filter_list(&rows, "zzz").is_empty());
    }

    #[test]
    fn empty_filter_returns_everything() {
        let rows = vec![Row("a"), Row("b")];
        assert_eq!(filter_list(&rows, ""), rows);
    }

    #[test]
    fn sort_both_directions() {
        let mut rows = vec![Row("b"), Row("A"), Row("c")];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows, vec![Row("A"), Row("b"), Row("c")]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows, vec![Row("c"), Row("b"), Row("A")]);
    }

    #[test]
    fn match_range_respects_char_boundaries() {
        assert_eq!(find_match("Café Central", "CENT"), Some((6, 10)));
        assert_eq!(find_match("Café", "É"), Some((3, 5)));
        assert_eq!(find_match("abc", ""), None);
        assert_eq!(find_match("abc", "x"), None);
    }

    #[test]
    fn sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "location", true), " ⇅");
    }
}
