use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::form::{error_line, non_empty, on_check, on_input, on_text_area, toggle_id};
use crate::hooks::{use_resource_list, Save};
use crate::models::{Equipment, Part, Vendor};

/// Names of the equipment a part is fitted to, in the order of the id list.
fn equipment_names(roots: &[Equipment], ids: &[i64]) -> String {
    let flat = Equipment::flatten(roots);
    ids.iter()
        .filter_map(|id| flat.iter().find(|(_, e)| e.id == Some(*id)))
        .map(|(_, e)| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checkbox toggling one id in a many-to-many list of the form record.
fn id_checkbox(
    form: &UseStateHandle<Part>,
    id: i64,
    label: String,
    checked: bool,
    field: fn(&mut Part) -> &mut Vec<i64>,
) -> Html {
    let onchange = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            toggle_id(field(&mut next), id, input.checked());
            form.set(next);
        })
    };
    html! {
        <label class="check">
            <input type="checkbox" {checked} {onchange} />
            { label }
        </label>
    }
}

#[function_component(PartsPage)]
pub fn parts_page() -> Html {
    let parts = use_resource_list::<Part>();
    let equipment = use_resource_list::<Equipment>();
    let vendors = use_resource_list::<Vendor>();

    let form = use_state(Part::default);
    let editing = use_state(|| false);

    let reset = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form.set(Part::default());
            editing.set(false);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let editing = editing.clone();
        let save = parts.save.clone();
        let reset = reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
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

    let rows = parts
        .items
        .iter()
        .map(|part| {
            let on_edit = {
                let form = form.clone();
                let editing = editing.clone();
                let part = part.clone();
                Callback::from(move |_: MouseEvent| {
                    form.set(part.clone());
                    editing.set(true);
                })
            };
            let on_delete = {
                let remove = parts.remove.clone();
                let id = part.id;
                Callback::from(move |_: MouseEvent| {
                    if let Some(id) = id {
                        remove.emit(id);
                    }
                })
            };
            let suppliers = part
                .supplier_details
                .iter()
                .map(|v| v.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            html! {
                <tr>
                    <td>{ &part.part_number }</td>
                    <td>{ &part.part_name }</td>
                    <td>{ &part.status }</td>
                    <td>{ equipment_names(&equipment.items, &part.equipment) }</td>
                    <td>{ suppliers }</td>
                    <td>{ part.last_updated.clone().unwrap_or_default() }</td>
                    <td>
                        <button onclick={on_edit}>{"Edit"}</button>
                        <button onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let equipment_checks = Equipment::flatten(&equipment.items)
        .into_iter()
        .filter_map(|(_, e)| e.id.map(|id| (id, e.name.clone())))
        .map(|(id, name)| id_checkbox(&form, id, name, form.equipment.contains(&id), |p| &mut p.equipment))
        .collect::<Html>();

    let supplier_checks = vendors
        .items
        .iter()
        .filter_map(|v| v.id.map(|id| (id, v.name.clone())))
        .map(|(id, name)| id_checkbox(&form, id, name, form.suppliers.contains(&id), |p| &mut p.suppliers))
        .collect::<Html>();

    html! {
        <div class="page">
            <h2>{"Parts"}</h2>
            { error_line(&parts.error) }
            <button type="button" onclick={parts.reload.reform(|_: MouseEvent| ())}>{"Refresh"}</button>

            <form {onsubmit}>
                <h3>{ if *editing { "Edit part" } else { "New part" } }</h3>
                <input type="text" placeholder="Part number" required={true} value={form.part_number.clone()}
                    oninput={on_input(&form, |f, v| f.part_number = v)} />
                <input type="text" placeholder="Part name" required={true} value={form.part_name.clone()}
                    oninput={on_input(&form, |f, v| f.part_name = v)} />
                <input type="text" placeholder="Status" required={true} value={form.status.clone()}
                    oninput={on_input(&form, |f, v| f.status = v)} />
                <textarea placeholder="Description" value={form.description.clone().unwrap_or_default()}
                    oninput={on_text_area(&form, |f, v| f.description = non_empty(v))} />

                <fieldset>
                    <legend>{"Equipment"}</legend>
                    { equipment_checks }
                </fieldset>
                <fieldset>
                    <legend>{"Suppliers"}</legend>
                    { supplier_checks }
                </fieldset>

                <label>
                    <input type="checkbox" checked={form.is_active}
                        onchange={on_check(&form, |f, on| f.is_active = on)} />
                    {"Active"}
                </label>

                <button type="submit">{ if *editing { "Update" } else { "Create" } }</button>
                if *editing {
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                }
            </form>

            if *parts.loading {
                <p>{"Loading…"}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Number"}</th><th>{"Name"}</th><th>{"Status"}</th><th>{"Equipment"}</th>
                            <th>{"Suppliers"}</th><th>{"Last updated"}</th><th></th>
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
    fn equipment_names_follow_ids_including_children() {
        let roots = vec![Equipment {
            id: Some(1),
            name: "Press".into(),
            children: vec![Equipment {
                id: Some(2),
                name: "Motor".into(),
                ..Equipment::default()
            }],
            ..Equipment::default()
        }];
        assert_eq!(equipment_names(&roots, &[2, 1]), "Motor, Press");
        assert_eq!(equipment_names(&roots, &[9]), "");
    }
}
