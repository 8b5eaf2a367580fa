//! Small helpers binding form inputs to a record held in a `use_state`.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::Choice;

/// Empty or blank input means "no value" for nullable backend fields.
pub fn non_empty(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}

/// `<select>` value to a foreign key; the placeholder option is `""`.
pub fn parse_id(v: &str) -> Option<i64> {
    v.trim().parse().ok()
}

/// Adds or removes `id` from a many-to-many id list, keeping it duplicate free.
pub fn toggle_id(ids: &mut Vec<i64>, id: i64, on: bool) {
    if on {
        if !ids.contains(&id) {
            ids.push(id);
        }
    } else {
        ids.retain(|x| *x != id);
    }
}

pub fn on_input<R: Clone + 'static>(form: &UseStateHandle<R>, apply: fn(&mut R, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

pub fn on_text_area<R: Clone + 'static>(form: &UseStateHandle<R>, apply: fn(&mut R, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, area.value());
        form.set(next);
    })
}

pub fn on_select<R: Clone + 'static>(form: &UseStateHandle<R>, apply: fn(&mut R, String)) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, select.value());
        form.set(next);
    })
}

pub fn on_check<R: Clone + 'static>(form: &UseStateHandle<R>, apply: fn(&mut R, bool)) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.checked());
        form.set(next);
    })
}

/// `<option>`s for a choice field, with the current value pre-selected.
pub fn choice_options<C: Choice>(selected: Option<C>) -> Html {
    C::ALL
        .iter()
        .map(|c| {
            html! {
                <option value={c.value()} selected={selected == Some(*c)}>{ c.label() }</option>
            }
        })
        .collect()
}

/// Red error line under a page title, nothing when there is no error.
pub fn error_line(error: &Option<String>) -> Html {
    match error {
        Some(msg) => html!(<p class="error" style="color:red;">{ msg.clone() }</p>),
        None => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_none() {
        assert_eq!(non_empty("".into()), None);
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty("x".into()).as_deref(), Some("x"));
    }

    #[test]
    fn placeholder_is_no_id() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn toggle_keeps_ids_unique() {
        let mut ids = vec![1, 2];
        toggle_id(&mut ids, 2, true);
        toggle_id(&mut ids, 3, true);
        assert_eq!(ids, vec![1, 2, 3]);
        toggle_id(&mut ids, 1, false);
        toggle_id(&mut ids, 9, false);
        assert_eq!(ids, vec![2, 3]);
    }
}
