use yew::prelude::*;

use crate::form::{choice_options, error_line, on_input, on_select, on_text_area, parse_id};
use crate::hooks::{use_resource_list, Save};
use crate::models::{Choice, Equipment, Frequency, Priority, Task, TaskType, User};

fn frequency_label(f: Option<Frequency>) -> &'static str {
    f.map(Frequency::label).unwrap_or("One-time")
}

fn equipment_name(roots: &[Equipment], id: i64) -> String {
    Equipment::flatten(roots)
        .into_iter()
        .find(|(_, e)| e.id == Some(id))
        .map(|(_, e)| e.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

fn username(users: &[User], id: Option<i64>) -> String {
    id.and_then(|id| users.iter().find(|u| u.id == Some(id)))
        .map(|u| u.username.clone())
        .unwrap_or_default()
}

#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let tasks = use_resource_list::<Task>();
    let equipment = use_resource_list::<Equipment>();
    let users = use_resource_list::<User>();

    let form = use_state(Task::default);
    let editing = use_state(|| false);
    let invalid = use_state(|| false);

    let reset = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form.set(Task::default());
            editing.set(false);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let editing = editing.clone();
        let invalid = invalid.clone();
        let save = tasks.save.clone();
        let reset = reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // equipment is a required foreign key
            if form.equipment == 0 {
                invalid.set(true);
                return;
            }
            invalid.set(false);
            save.emit(Save {
                record: (*form).clone(),
                is_edit: *editing,
                done: reset.clone(),
            });
        })
    };

    let on_cancel = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let rows = tasks
        .items
        .iter()
        .map(|task| {
            let on_edit = {
                let form = form.clone();
                let editing = editing.clone();
                let task = task.clone();
                Callback::from(move |_: MouseEvent| {
                    form.set(task.clone());
                    editing.set(true);
                })
            };
            let on_delete = {
                let remove = tasks.remove.clone();
                let id = task.id;
                Callback::from(move |_: MouseEvent| {
                    if let Some(id) = id {
                        remove.emit(id);
                    }
                })
            };

            html! {
                <tr>
                    <td>{ &task.description }</td>
                    <td>{ equipment_name(&equipment.items, task.equipment) }</td>
                    <td>{ task.task_type.label() }</td>
                    <td>{ frequency_label(task.frequency) }</td>
                    <td>{ task.priority.label() }</td>
                    <td>{ &task.start_date }</td>
                    <td>{ username(&users.items, task.assigned_to) }</td>
                    <td>
                        <button onclick={on_edit}>{"Edit"}</button>
                        <button onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let equipment_options = Equipment::flatten(&equipment.items)
        .into_iter()
        .filter_map(|(depth, e)| e.id.map(|id| (depth, id, e)))
        .map(|(depth, id, e)| {
            let label = format!("{}{}", "- ".repeat(depth), e.name);
            html! { <option value={id.to_string()} selected={form.equipment == id}>{ label }</option> }
        })
        .collect::<Html>();

    let user_options = users
        .items
        .iter()
        .filter_map(|u| u.id.map(|id| (id, u)))
        .map(|(id, u)| {
            html! { <option value={id.to_string()} selected={form.assigned_to == Some(id)}>{ &u.username }</option> }
        })
        .collect::<Html>();

    html! {
        <div class="page">
            <h2>{"Tasks"}</h2>
            { error_line(&tasks.error) }
            <button type="button" onclick={tasks.reload.reform(|_: MouseEvent| ())}>{"Refresh"}</button>

            <form {onsubmit}>
                <h3>{ if *editing { "Edit task" } else { "New task" } }</h3>
                <textarea placeholder="Description" required={true} value={form.description.clone()}
                    oninput={on_text_area(&form, |f, v| f.description = v)} />

                <label>{"Equipment"}</label>
                <select onchange={on_select(&form, |f, v| f.equipment = parse_id(&v).unwrap_or(0))}>
                    <option value="" selected={form.equipment == 0}>{"Select equipment"}</option>
                    { equipment_options }
                </select>
                if *invalid {
                    <p class="error" style="color:red;">{"Pick the equipment this task applies to."}</p>
                }

                <label>{"Type"}</label>
                <select onchange={on_select(&form, |f, v| {
                    if let Some(t) = TaskType::from_value(&v) {
                        f.task_type = t;
                    }
                })}>
                    { choice_options(Some(form.task_type)) }
                </select>

                <label>{"Frequency"}</label>
                <select onchange={on_select(&form, |f, v| f.frequency = Frequency::from_value(&v))}>
                    <option value="" selected={form.frequency.is_none()}>{"One-time"}</option>
                    { choice_options(form.frequency) }
                </select>

                <label>{"Priority"}</label>
                <select onchange={on_select(&form, |f, v| {
                    if let Some(p) = Priority::from_value(&v) {
                        f.priority = p;
                    }
                })}>
                    { choice_options(Some(form.priority)) }
                </select>

                <label>{"Start date"}</label>
                <input type="date" required={true} value={form.start_date.clone()}
                    oninput={on_input(&form, |f, v| f.start_date = v)} />

                <label>{"Assigned to"}</label>
                <select onchange={on_select(&form, |f, v| f.assigned_to = parse_id(&v))}>
                    <option value="" selected={form.assigned_to.is_none()}>{"(nobody)"}</option>
                    { user_options }
                </select>

                <button type="submit">{ if *editing { "Update" } else { "Create" } }</button>
                if *editing {
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                }
            </form>

            if *tasks.loading {
                <p>{"Loading…"}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Description"}</th><th>{"Equipment"}</th><th>{"Type"}</th><th>{"Frequency"}</th>
                            <th>{"Priority"}</th><th>{"Start"}</th><th>{"Assigned to"}</th><th></th>
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
    fn frequency_labels() {
        assert_eq!(frequency_label(None), "One-time");
        assert_eq!(frequency_label(Some(Frequency::Monthly)), "Monthly");
    }

    #[test]
    fn lookups_fall_back() {
        let users = vec![User { id: Some(2), username: "ana".into() }];
        assert_eq!(username(&users, Some(2)), "ana");
        assert_eq!(username(&users, None), "");
        assert_eq!(equipment_name(&[], 7), "#7");
    }
}
