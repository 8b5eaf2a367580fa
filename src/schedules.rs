use yew::prelude::*;

use crate::form::{choice_options, error_line, non_empty, on_input, on_select, on_text_area};
use crate::hooks::{use_resource_list, Save};
use crate::models::{Choice, Schedule, ScheduleStatus};

/// Copy of `s` flagged as done. The backend stamps the completion date and
/// queues the next occurrence for recurring tasks.
pub fn completed(s: &Schedule) -> Schedule {
    Schedule {
        status: ScheduleStatus::Completed,
        ..s.clone()
    }
}

#[function_component(SchedulesPage)]
pub fn schedules_page() -> Html {
    let schedules = use_resource_list::<Schedule>();
    // schedules are created by the backend; the form only edits existing ones
    let form = use_state(Schedule::default);
    let editing = use_state(|| false);

    let reset = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form.set(Schedule::default());
            editing.set(false);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let save = schedules.save.clone();
        let reset = reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.emit(Save {
                record: (*form).clone(),
                is_edit: true,
                done: reset.clone(),
            });
        })
    };

    let on_cancel = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let rows = schedules
        .items
        .iter()
        .map(|s| {
            let on_complete = {
                let save = schedules.save.clone();
                let record = completed(s);
                Callback::from(move |_: MouseEvent| {
                    save.emit(Save {
                        record: record.clone(),
                        is_edit: true,
                        done: Callback::noop(),
                    })
                })
            };
            let on_edit = {
                let form = form.clone();
                let editing = editing.clone();
                let s = s.clone();
                Callback::from(move |_: MouseEvent| {
                    form.set(s.clone());
                    editing.set(true);
                })
            };
            let on_delete = {
                let remove = schedules.remove.clone();
                let id = s.id;
                Callback::from(move |_: MouseEvent| {
                    if let Some(id) = id {
                        remove.emit(id);
                    }
                })
            };
            let class = if s.is_overdue { "overdue" } else { "" };

            html! {
                <tr class={class}>
                    <td>{ &s.task.description }</td>
                    <td>{ &s.due_date }</td>
                    <td>{ s.status.label() }</td>
                    <td>{ s.completion_date.clone().unwrap_or_default() }</td>
                    <td>{ if s.is_overdue { "Overdue" } else { "" } }</td>
                    <td>
                        if s.status == ScheduleStatus::Pending {
                            <button onclick={on_complete}>{"Complete"}</button>
                        }
                        <button onclick={on_edit}>{"Edit"}</button>
                        <button onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="page">
            <h2>{"Schedules"}</h2>
            { error_line(&schedules.error) }
            <button type="button" onclick={schedules.reload.reform(|_: MouseEvent| ())}>{"Refresh"}</button>

            if *editing {
                <form {onsubmit}>
                    <h3>{ format!("Edit schedule: {}", form.task.description) }</h3>
                    <label>{"Due date"}</label>
                    <input type="date" required={true} value={form.due_date.clone()}
                        oninput={on_input(&form, |f, v| f.due_date = v)} />
                    <label>{"Completed on"}</label>
                    <input type="date" value={form.completion_date.clone().unwrap_or_default()}
                        oninput={on_input(&form, |f, v| f.completion_date = non_empty(v))} />
                    <label>{"Status"}</label>
                    <select onchange={on_select(&form, |f, v| {
                        if let Some(st) = ScheduleStatus::from_value(&v) {
                            f.status = st;
                        }
                    })}>
                        { choice_options(Some(form.status)) }
                    </select>
                    <label>{"History"}</label>
                    <textarea value={form.history_log.clone()}
                        oninput={on_text_area(&form, |f, v| f.history_log = v)} />
                    <button type="submit">{"Update"}</button>
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                </form>
            }

            if *schedules.loading {
                <p>{"Loading…"}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Task"}</th><th>{"Due"}</th><th>{"Status"}</th>
                            <th>{"Completed on"}</th><th></th><th></th>
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completing_keeps_everything_but_status() {
        let s = Schedule {
            id: Some(3),
            due_date: "2026-10-01".into(),
            history_log: "oiled".into(),
            ..Schedule::default()
        };
        let done = completed(&s);
        assert_eq!(done.status, ScheduleStatus::Completed);
        assert_eq!(done.id, Some(3));
        assert_eq!(done.due_date, s.due_date);
        assert_eq!(done.completion_date, None);
    }
}
