//! Typed records exchanged with the backend, one struct per collection.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::endpoint::Endpoint;

/// Anything carrying the optional primary key the backend assigns on create.
pub trait Identified {
    fn id(&self) -> Option<i64>;
}

impl Identified for serde_json::Value {
    fn id(&self) -> Option<i64> {
        self.get("id").and_then(serde_json::Value::as_i64)
    }
}

/// A record living in one REST collection.
pub trait Resource:
    Identified + Serialize + DeserializeOwned + Clone + PartialEq + Default + 'static
{
    const ENDPOINT: Endpoint;
}

fn yes() -> bool {
    true
}

/// Nullable choice column: the backend hands back `null` or `""` for "no value".
fn blank_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(de)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(v) => serde_json::from_value(v).map(Some).map_err(<D::Error as serde::de::Error>::custom),
    }
}

/* -------------------------------------------------------------------------- */
/*                                  choices                                   */
/* -------------------------------------------------------------------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationStatus {
    #[default]
    InHouse,
    OffSite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[default]
    Maintenance,
    Calibration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Pending,
    Completed,
}

/// Wire value and display label for the `<select>` options of a choice field.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];
    fn value(self) -> &'static str;
    fn label(self) -> &'static str;

    fn from_value(v: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == v)
    }
}

impl Choice for LocationStatus {
    const ALL: &'static [Self] = &[LocationStatus::InHouse, LocationStatus::OffSite];
    fn value(self) -> &'static str {
        match self {
            LocationStatus::InHouse => "in-house",
            LocationStatus::OffSite => "off-site",
        }
    }
    fn label(self) -> &'static str {
        match self {
            LocationStatus::InHouse => "In-House",
            LocationStatus::OffSite => "Off-Site",
        }
    }
}

impl Choice for Frequency {
    const ALL: &'static [Self] = &[
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];
    fn value(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
    fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        }
    }
}

impl Choice for TaskType {
    const ALL: &'static [Self] = &[TaskType::Maintenance, TaskType::Calibration];
    fn value(self) -> &'static str {
        match self {
            TaskType::Maintenance => "maintenance",
            TaskType::Calibration => "calibration",
        }
    }
    fn label(self) -> &'static str {
        match self {
            TaskType::Maintenance => "Maintenance",
            TaskType::Calibration => "Calibration",
        }
    }
}

impl Choice for Priority {
    const ALL: &'static [Self] = &[Priority::Low, Priority::Medium, Priority::High];
    fn value(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
    fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl Choice for ScheduleStatus {
    const ALL: &'static [Self] = &[ScheduleStatus::Pending, ScheduleStatus::Completed];
    fn value(self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "pending",
            ScheduleStatus::Completed => "completed",
        }
    }
    fn label(self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "Pending",
            ScheduleStatus::Completed => "Completed",
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                                  records                                   */
/* -------------------------------------------------------------------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "yes")]
    pub is_active: bool,
}

impl Default for Vendor {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            contact_info: None,
            address: None,
            is_active: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub model: String,
    pub serial: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent: Option<i64>,
    #[serde(default)]
    pub location_status: LocationStatus,
    #[serde(default)]
    pub expected_return_date: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<i64>,
    #[serde(default = "yes")]
    pub is_active: bool,

    // read-only on the backend
    #[serde(default, skip_serializing)]
    pub vendor: Option<Vendor>,
    #[serde(default, skip_serializing)]
    pub manufacturer_details: Option<Vendor>,
    #[serde(default, skip_serializing)]
    pub children: Vec<Equipment>,
    #[serde(default, skip_serializing)]
    pub parts: Vec<Part>,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            model: String::new(),
            serial: String::new(),
            description: None,
            parent: None,
            location_status: LocationStatus::InHouse,
            expected_return_date: None,
            manufacturer: None,
            is_active: true,
            vendor: None,
            manufacturer_details: None,
            children: Vec::new(),
            parts: Vec::new(),
        }
    }
}

impl Equipment {
    /// Depth-first walk of the tree returned by the collection endpoint,
    /// paired with each node's depth (roots are 0).
    pub fn flatten(roots: &[Equipment]) -> Vec<(usize, &Equipment)> {
        fn walk<'a>(nodes: &'a [Equipment], depth: usize, out: &mut Vec<(usize, &'a Equipment)>) {
            for node in nodes {
                out.push((depth, node));
                walk(&node.children, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(roots, 0, &mut out);
        out
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub part_number: String,
    pub part_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub equipment: Vec<i64>,
    #[serde(default)]
    pub suppliers: Vec<i64>,
    #[serde(default, skip_serializing)]
    pub supplier_details: Vec<Vendor>,
    #[serde(default = "yes")]
    pub is_active: bool,
}

impl Default for Part {
    fn default() -> Self {
        Self {
            id: None,
            part_number: String::new(),
            part_name: String::new(),
            description: None,
            status: String::new(),
            last_updated: None,
            equipment: Vec::new(),
            suppliers: Vec::new(),
            supplier_details: Vec::new(),
            is_active: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: String,
    /// `None` for a one-time task.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub frequency: Option<Frequency>,
    pub equipment: i64,
    pub start_date: String,
    pub task_type: TaskType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assigned_to: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub task: Task,
    pub due_date: String,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub status: ScheduleStatus,
    #[serde(default)]
    pub history_log: String,
    #[serde(default, skip_serializing)]
    pub is_overdue: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
}

macro_rules! resource {
    ($ty:ty, $endpoint:expr) => {
        impl Identified for $ty {
            fn id(&self) -> Option<i64> {
                self.id
            }
        }

        impl Resource for $ty {
            const ENDPOINT: Endpoint = $endpoint;
        }
    };
}

resource!(Vendor, Endpoint::Vendors);
resource!(Equipment, Endpoint::Equipment);
resource!(Part, Endpoint::Parts);
resource!(Task, Endpoint::Tasks);
resource!(Schedule, Endpoint::Schedules);
resource!(User, Endpoint::Users);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equipment_tree_from_backend() {
        let body = json!([{
            "id": 1, "name": "Press", "model": "P-100", "serial": "S1",
            "description": null, "parent": null, "parent_details": null,
            "location_status": "off-site", "expected_return_date": "2026-11-01",
            "vendor": null, "manufacturer": 4,
            "manufacturer_details": {"id": 4, "name": "Acme", "contact_info": null, "address": null, "is_active": true},
            "is_active": true,
            "children": [{
                "id": 2, "name": "Motor", "model": "M", "serial": "S2", "parent": 1,
                "location_status": "in-house", "is_active": true, "children": [], "parts": []
            }],
            "parts": []
        }]);
        let roots: Vec<Equipment> = serde_json::from_value(body).unwrap();
        assert_eq!(roots[0].location_status, LocationStatus::OffSite);
        assert_eq!(roots[0].manufacturer_details.as_ref().map(|v| v.name.as_str()), Some("Acme"));

        let flat = Equipment::flatten(&roots);
        let names: Vec<_> = flat.iter().map(|(d, e)| (*d, e.name.as_str())).collect();
        assert_eq!(names, vec![(0, "Press"), (1, "Motor")]);
    }

    #[test]
    fn read_only_fields_are_not_sent_back() {
        let mut eq = Equipment {
            id: Some(3),
            name: "Lathe".into(),
            ..Equipment::default()
        };
        eq.children.push(Equipment::default());
        let v = serde_json::to_value(&eq).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["location_status"], "in-house");
        assert!(v.get("children").is_none());
        assert!(v.get("manufacturer_details").is_none());
    }

    #[test]
    fn new_record_has_no_id_on_the_wire() {
        let v = serde_json::to_value(Part {
            part_number: "PN-1".into(),
            part_name: "Belt".into(),
            status: "in stock".into(),
            ..Part::default()
        })
        .unwrap();
        assert!(v.get("id").is_none());
        assert!(v.get("last_updated").is_none());
        assert_eq!(v["equipment"], json!([]));
    }

    #[test]
    fn one_time_task_has_null_frequency() {
        let t: Task = serde_json::from_value(json!({
            "id": 9, "description": "Inspect", "frequency": null, "equipment": 1,
            "start_date": "2026-10-01", "task_type": "calibration", "priority": "high",
            "assigned_to": null
        }))
        .unwrap();
        assert_eq!(t.frequency, None);
        assert_eq!(t.task_type, TaskType::Calibration);
        assert_eq!(t.priority, Priority::High);
    }

    #[test]
    fn blank_frequency_reads_as_one_time() {
        let tasks: Vec<Task> = serde_json::from_value(json!([
            {"id": 1, "description": "Oil", "frequency": "weekly", "equipment": 1,
             "start_date": "2026-10-01", "task_type": "maintenance", "priority": "low"},
            {"id": 2, "description": "Inspect", "frequency": "", "equipment": 1,
             "start_date": "2026-10-02", "task_type": "calibration", "priority": "high"}
        ]))
        .unwrap();
        assert_eq!(tasks[0].frequency, Some(Frequency::Weekly));
        assert_eq!(tasks[1].frequency, None);

        let missing: Task = serde_json::from_value(json!({
            "description": "X", "equipment": 1, "start_date": "2026-10-02", "task_type": "maintenance"
        }))
        .unwrap();
        assert_eq!(missing.frequency, None);
    }

    #[test]
    fn unknown_frequency_is_still_rejected() {
        let bad = serde_json::from_value::<Task>(json!({
            "description": "X", "frequency": "hourly", "equipment": 1,
            "start_date": "2026-10-02", "task_type": "maintenance"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn schedule_with_nested_task() {
        let s: Schedule = serde_json::from_value(json!({
            "id": 5,
            "task": {"id": 9, "description": "Oil", "frequency": "weekly", "equipment": 1,
                     "start_date": "2026-10-01", "task_type": "maintenance", "priority": "low",
                     "assigned_to": 2},
            "due_date": "2026-10-08", "completion_date": null,
            "status": "pending", "history_log": "", "is_overdue": true
        }))
        .unwrap();
        assert!(s.is_overdue);
        assert_eq!(s.task.frequency, Some(Frequency::Weekly));
        assert!(serde_json::to_value(&s).unwrap().get("is_overdue").is_none());
    }

    #[test]
    fn json_value_id() {
        assert_eq!(json!({"id": 5, "name": "X"}).id(), Some(5));
        assert_eq!(json!({"name": "X"}).id(), None);
    }

    #[test]
    fn choices_round_trip_through_their_wire_value() {
        for f in Frequency::ALL {
            assert_eq!(Frequency::from_value(f.value()), Some(*f));
        }
        assert_eq!(LocationStatus::from_value("off-site"), Some(LocationStatus::OffSite));
        assert_eq!(Priority::from_value("urgent"), None);
    }
}
