use yew::prelude::*;

use crate::form::{choice_options, error_line, non_empty, on_check, on_input, on_select, on_text_area, parse_id};
use crate::hooks::{use_resource_list, Save};
use crate::models::{Choice, Equipment, LocationStatus, Vendor};

/* -------------------------------------------------------------------------- */
/*                                  helpers                                   */
/* -------------------------------------------------------------------------- */

/// Candidates for the parent picker: every node except `id` and its descendants,
/// which the backend would reject as a cyclic move.
pub fn parent_candidates(roots: &[Equipment], id: Option<i64>) -> Vec<(usize, &Equipment)> {
    fn walk<'a>(nodes: &'a [Equipment], depth: usize, skip: Option<i64>, out: &mut Vec<(usize, &'a Equipment)>) {
        for node in nodes {
            if skip.is_some() && node.id == skip {
                continue;
            }
            out.push((depth, node));
            walk(&node.children, depth + 1, skip, out);
        }
    }
    let mut out = Vec::new();
    walk(roots, 0, id, &mut out);
    out
}

fn vendor_name(vendors: &[Vendor], id: Option<i64>) -> String {
    id.and_then(|id| vendors.iter().find(|v| v.id == Some(id)))
        .map(|v| v.name.clone())
        .unwrap_or_default()
}

/* -------------------------------------------------------------------------- */
/*                                   page                                     */
/* -------------------------------------------------------------------------- */

#[function_component(EquipmentPage)]
pub fn equipment_page() -> Html {
    let equipment = use_resource_list::<Equipment>();
    let vendors = use_resource_list::<Vendor>();

    let form = use_state(Equipment::default);
    let editing = use_state(|| false);

    let reset = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form.set(Equipment::default());
            editing.set(false);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let editing = editing.clone();
        let save = equipment.save.clone();
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

    let rows = Equipment::flatten(&equipment.items)
        .into_iter()
        .map(|(depth, item)| {
            let on_edit = {
                let form = form.clone();
                let editing = editing.clone();
                let item = item.clone();
                Callback::from(move |_: MouseEvent| {
                    form.set(item.clone());
                    editing.set(true);
                })
            };
            let on_delete = {
                let remove = equipment.remove.clone();
                let id = item.id;
                Callback::from(move |_: MouseEvent| {
                    if let Some(id) = id {
                        remove.emit(id);
                    }
                })
            };
            let indent = format!("padding-left:{}em;", depth as f32 * 1.5);
            let manufacturer = item
                .manufacturer_details
                .as_ref()
                .map(|v| v.name.clone())
                .unwrap_or_else(|| vendor_name(&vendors.items, item.manufacturer));

            html! {
                <tr>
                    <td style={indent}>{ &item.name }</td>
                    <td>{ &item.model }</td>
                    <td>{ &item.serial }</td>
                    <td>{ manufacturer }</td>
                    <td>{ item.location_status.label() }</td>
                    <td>{ item.expected_return_date.clone().unwrap_or_default() }</td>
                    <td>{ item.parts.len().to_string() }</td>
                    <td>
                        <button onclick={on_edit}>{"Edit"}</button>
                        <button onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let parent_options = parent_candidates(&equipment.items, form.id)
        .into_iter()
        .map(|(depth, eq)| {
            let id = eq.id.unwrap_or_default();
            let label = format!("{}{}", "- ".repeat(depth), eq.name);
            html! { <option value={id.to_string()} selected={form.parent == Some(id)}>{ label }</option> }
        })
        .collect::<Html>();

    let vendor_options = vendors
        .items
        .iter()
        .filter_map(|v| v.id.map(|id| (id, v)))
        .map(|(id, v)| {
            html! { <option value={id.to_string()} selected={form.manufacturer == Some(id)}>{ &v.name }</option> }
        })
        .collect::<Html>();

    html! {
        <div class="page">
            <h2>{"Equipment"}</h2>
            { error_line(&equipment.error) }
            <button type="button" onclick={equipment.reload.reform(|_: MouseEvent| ())}>{"Refresh"}</button>

            <form {onsubmit}>
                <h3>{ if *editing { "Edit equipment" } else { "New equipment" } }</h3>
                <input type="text" placeholder="Name" required={true} value={form.name.clone()}
                    oninput={on_input(&form, |f, v| f.name = v)} />
                <input type="text" placeholder="Model" required={true} value={form.model.clone()}
                    oninput={on_input(&form, |f, v| f.model = v)} />
                <input type="text" placeholder="Serial" required={true} value={form.serial.clone()}
                    oninput={on_input(&form, |f, v| f.serial = v)} />
                <textarea placeholder="Description" value={form.description.clone().unwrap_or_default()}
                    oninput={on_text_area(&form, |f, v| f.description = non_empty(v))} />

                <label>{"Parent"}</label>
                <select onchange={on_select(&form, |f, v| f.parent = parse_id(&v))}>
                    <option value="" selected={form.parent.is_none()}>{"(none)"}</option>
                    { parent_options }
                </select>

                <label>{"Manufacturer"}</label>
                <select onchange={on_select(&form, |f, v| f.manufacturer = parse_id(&v))}>
                    <option value="" selected={form.manufacturer.is_none()}>{"(none)"}</option>
                    { vendor_options }
                </select>

                <label>{"Location"}</label>
                <select onchange={on_select(&form, |f, v| {
                    if let Some(s) = LocationStatus::from_value(&v) {
                        f.location_status = s;
                    }
                })}>
                    { choice_options(Some(form.location_status)) }
                </select>

                <label>{"Expected return"}</label>
                <input type="date" value={form.expected_return_date.clone().unwrap_or_default()}
                    oninput={on_input(&form, |f, v| f.expected_return_date = non_empty(v))} />

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

            if *equipment.loading {
                <p>{"Loading…"}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th><th>{"Model"}</th><th>{"Serial"}</th><th>{"Manufacturer"}</th>
                            <th>{"Location"}</th><th>{"Expected return"}</th><th>{"Parts"}</th><th></th>
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

    fn node(id: i64, name: &str, children: Vec<Equipment>) -> Equipment {
        Equipment {
            id: Some(id),
            name: name.into(),
            children,
            ..Equipment::default()
        }
    }

    #[test]
    fn parent_picker_excludes_self_and_descendants() {
        let roots = vec![
            node(1, "Line A", vec![node(2, "Press", vec![node(3, "Motor", vec![])])]),
            node(4, "Line B", vec![]),
        ];
        let names: Vec<_> = parent_candidates(&roots, Some(2))
            .into_iter()
            .map(|(_, e)| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Line A", "Line B"]);
    }

    #[test]
    fn new_record_can_pick_any_parent() {
        let roots = vec![node(1, "Line A", vec![node(2, "Press", vec![])])];
        assert_eq!(parent_candidates(&roots, None).len(), 2);
    }

    #[test]
    fn vendor_lookup() {
        let vendors = vec![Vendor {
            id: Some(4),
            name: "Acme".into(),
            ..Vendor::default()
        }];
        assert_eq!(vendor_name(&vendors, Some(4)), "Acme");
        assert_eq!(vendor_name(&vendors, Some(5)), "");
        assert_eq!(vendor_name(&vendors, None), "");
    }
}
