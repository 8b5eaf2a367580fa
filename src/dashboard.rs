use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::use_api;
use crate::endpoint::Endpoint;
use crate::form::error_line;
use crate::models::{Choice, Equipment, LocationStatus, Part, Schedule, ScheduleStatus, Task};

const UPCOMING: usize = 5;

/* -------------------------------------------------------------------------- */
/*                                  summary                                   */
/* -------------------------------------------------------------------------- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub equipment: usize,
    pub parts: usize,
    pub tasks: usize,
    pub schedules: usize,
    pub overdue: Vec<Schedule>,
    /// Pending, not overdue, earliest due first.
    pub upcoming: Vec<Schedule>,
    pub off_site: Vec<Equipment>,
}

pub fn summarize(equipment: &[Equipment], parts: &[Part], tasks: &[Task], schedules: &[Schedule]) -> Summary {
    let flat = Equipment::flatten(equipment);

    let mut overdue: Vec<Schedule> = schedules.iter().filter(|s| s.is_overdue).cloned().collect();
    overdue.sort_by(|a, b| a.due_date.cmp(&b.due_date));

    // ISO dates order lexicographically
    let mut upcoming: Vec<Schedule> = schedules
        .iter()
        .filter(|s| s.status == ScheduleStatus::Pending && !s.is_overdue)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    upcoming.truncate(UPCOMING);

    let off_site = flat
        .iter()
        .filter(|(_, e)| e.location_status == LocationStatus::OffSite)
        .map(|(_, e)| Equipment {
            children: Vec::new(),
            parts: Vec::new(),
            ..(*e).clone()
        })
        .collect();

    Summary {
        equipment: flat.len(),
        parts: parts.len(),
        tasks: tasks.len(),
        schedules: schedules.len(),
        overdue,
        upcoming,
        off_site,
    }
}

/* -------------------------------------------------------------------------- */
/*                                   page                                     */
/* -------------------------------------------------------------------------- */

fn schedule_rows(list: &[Schedule]) -> Html {
    list.iter()
        .map(|s| {
            html! {
                <tr>
                    <td>{ &s.task.description }</td>
                    <td>{ &s.due_date }</td>
                    <td>{ s.task.priority.label() }</td>
                </tr>
            }
        })
        .collect()
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let api = use_api();
    let summary = use_state(|| None::<Summary>);
    let error = use_state(|| None::<String>);

    /* ---- the four collections are fetched side by side ---- */
    {
        let summary = summary.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let token = api.get_csrf_token();
                let token = token.as_deref();
                let (equipment, parts, tasks, schedules) = futures::join!(
                    api.fetch_data::<Vec<Equipment>>(Endpoint::Equipment, token),
                    api.fetch_data::<Vec<Part>>(Endpoint::Parts, token),
                    api.fetch_data::<Vec<Task>>(Endpoint::Tasks, token),
                    api.fetch_data::<Vec<Schedule>>(Endpoint::Schedules, token),
                );
                match (equipment, parts, tasks, schedules) {
                    (Ok(e), Ok(p), Ok(t), Ok(s)) => summary.set(Some(summarize(&e, &p, &t, &s))),
                    (e, p, t, s) => {
                        // each failure was already logged by the client
                        let first = [e.err(), p.err(), t.err(), s.err()].into_iter().flatten().next();
                        error.set(first.map(|err| err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*summary {
        None => html!(<p>{"Loading…"}</p>),
        Some(sum) => html! {
            <>
                <div class="cards">
                    <div class="card"><h3>{"Equipment"}</h3><p>{ sum.equipment.to_string() }</p></div>
                    <div class="card"><h3>{"Parts"}</h3><p>{ sum.parts.to_string() }</p></div>
                    <div class="card"><h3>{"Tasks"}</h3><p>{ sum.tasks.to_string() }</p></div>
                    <div class="card"><h3>{"Schedules"}</h3><p>{ sum.schedules.to_string() }</p></div>
                </div>

                <h3>{ format!("Overdue ({})", sum.overdue.len()) }</h3>
                <table class="table">
                    <thead><tr><th>{"Task"}</th><th>{"Due"}</th><th>{"Priority"}</th></tr></thead>
                    <tbody>{ schedule_rows(&sum.overdue) }</tbody>
                </table>

                <h3>{"Upcoming"}</h3>
                <table class="table">
                    <thead><tr><th>{"Task"}</th><th>{"Due"}</th><th>{"Priority"}</th></tr></thead>
                    <tbody>{ schedule_rows(&sum.upcoming) }</tbody>
                </table>

                <h3>{"Off-site equipment"}</h3>
                <ul>
                    { for sum.off_site.iter().map(|e| html! {
                        <li>{ format!("{} (back {})", e.name, e.expected_return_date.as_deref().unwrap_or("?")) }</li>
                    }) }
                </ul>
            </>
        },
    };

    html! {
        <div class="page">
            <h2>{"Dashboard"}</h2>
            { error_line(&error) }
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sched(id: i64, due: &str, status: ScheduleStatus, overdue: bool) -> Schedule {
        Schedule {
            id: Some(id),
            due_date: due.into(),
            status,
            is_overdue: overdue,
            ..Schedule::default()
        }
    }

    #[test]
    fn splits_overdue_and_upcoming() {
        let schedules = vec![
            sched(1, "2026-10-20", ScheduleStatus::Pending, false),
            sched(2, "2026-09-01", ScheduleStatus::Pending, true),
            sched(3, "2026-10-18", ScheduleStatus::Pending, false),
            sched(4, "2026-10-01", ScheduleStatus::Completed, false),
        ];
        let sum = summarize(&[], &[], &[], &schedules);
        assert_eq!(sum.schedules, 4);
        assert_eq!(sum.overdue.iter().map(|s| s.id).collect::<Vec<_>>(), vec![Some(2)]);
        assert_eq!(sum.upcoming.iter().map(|s| s.id).collect::<Vec<_>>(), vec![Some(3), Some(1)]);
    }

    #[test]
    fn upcoming_is_capped() {
        let schedules: Vec<_> = (0..8)
            .map(|i| sched(i, &format!("2026-11-0{}", i + 1), ScheduleStatus::Pending, false))
            .collect();
        assert_eq!(summarize(&[], &[], &[], &schedules).upcoming.len(), UPCOMING);
    }

    #[test]
    fn counts_nested_equipment_and_finds_off_site() {
        let roots = vec![Equipment {
            id: Some(1),
            name: "Line".into(),
            children: vec![Equipment {
                id: Some(2),
                name: "Scale".into(),
                location_status: LocationStatus::OffSite,
                expected_return_date: Some("2026-11-02".into()),
                ..Equipment::default()
            }],
            ..Equipment::default()
        }];
        let sum = summarize(&roots, &[], &[], &[]);
        assert_eq!(sum.equipment, 2);
        assert_eq!(sum.off_site.len(), 1);
        assert_eq!(sum.off_site[0].name, "Scale");
    }
}
