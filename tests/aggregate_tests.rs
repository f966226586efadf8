use slotgrid::algorithm::{aggregate, aggregate_view, sort_axis, ViewKind, KeySelector, UNASSIGNED};
use slotgrid::models::{Partition, ScheduleEntry, SessionType};

fn entry(day: &str, slot: Option<&str>, course: &str) -> ScheduleEntry {
    ScheduleEntry {
        course: course.to_string(),
        day: day.to_string(),
        time_slot_raw: slot.map(|s| s.to_string()),
        instructor: "Dr. Test".to_string(),
        ..Default::default()
    }
}

fn courses_at(p: &Partition, path: &[&str], day: &str, slot: &str) -> Vec<String> {
    p.get(path)
        .and_then(|m| m.get(day))
        .and_then(|d| d.get(slot))
        .map(|cells| cells.iter().map(|c| c.course.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_equivalent_slots_share_a_cell_in_input_order() {
    let entries = vec![
        entry("1", Some("9:00-11:00"), "A"),
        entry("1", Some("09:00-11:00"), "B"),
    ];
    let agg = aggregate(&entries, &[]);
    assert_eq!(courses_at(&agg.matrix, &[], "1", "09:00-11:00"), vec!["A", "B"]);
    assert_eq!(agg.axis, vec!["09:00-11:00"]);
}

#[test]
fn test_axis_sorted_by_start_minute() {
    let entries = vec![
        entry("1", Some("1:00-3:00"), "X"),
        entry("2", Some("9:00-11:00"), "Y"),
        entry("3", Some("11:00-1:00"), "Z"),
    ];
    let agg = aggregate(&entries, &[]);
    assert_eq!(agg.axis, vec!["09:00-11:00", "11:00-13:00", "13:00-15:00"]);
}

#[test]
fn test_sort_axis_breaks_ties_by_full_slot() {
    let axis = sort_axis(vec![
        "09:00-12:00".to_string(),
        "08:00-09:00".to_string(),
        "09:00-10:00".to_string(),
        "09:00-10:00".to_string(),
    ]);
    assert_eq!(axis, vec!["08:00-09:00", "09:00-10:00", "09:00-12:00"]);
}

#[test]
fn test_entries_without_slot_are_skipped() {
    let entries = vec![
        entry("1", Some(""), "Empty"),
        entry("1", None, "Missing"),
        entry("1", Some("8:00-9:00"), "Ok"),
    ];
    let agg = aggregate(&entries, &[]);
    assert_eq!(agg.skipped, 2);
    assert_eq!(agg.axis, vec!["08:00-09:00"]);
    assert_eq!(courses_at(&agg.matrix, &[], "1", "08:00-09:00"), vec!["Ok"]);
}

#[test]
fn test_malformed_present_slot_goes_to_sentinel_bucket() {
    let entries = vec![entry("4", Some("tba"), "Seminar"), entry("4", Some("8:00-9:00"), "Lab")];
    let agg = aggregate(&entries, &[]);
    assert_eq!(agg.axis, vec!["00:00-00:00", "08:00-09:00"]);
    assert_eq!(courses_at(&agg.matrix, &[], "4", "00:00-00:00"), vec!["Seminar"]);
}

#[test]
fn test_empty_input() {
    let agg = aggregate(&[], &[]);
    assert!(agg.matrix.is_empty());
    assert!(agg.axis.is_empty());
    assert_eq!(serde_json::to_value(&agg.matrix).unwrap(), serde_json::json!({}));

    let agg = aggregate_view(&[], ViewKind::Groups);
    assert_eq!(serde_json::to_value(&agg.matrix).unwrap(), serde_json::json!({}));
}

#[test]
fn test_end_to_end_single_day() {
    // "1-3" no trae minutos: se completan con 0 y cae en la misma franja que "1:00-3:00"
    let entries = vec![
        entry("2", Some("1:00-3:00"), "Physics"),
        entry("2", Some("1-3"), "Physics Lab"),
        entry("2", Some(""), "Dropped"),
    ];
    let agg = aggregate(&entries, &[]);
    let matrix = agg.matrix.get(&[]).unwrap();
    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix["2"].len(), 1);
    assert_eq!(courses_at(&agg.matrix, &[], "2", "13:00-15:00"), vec!["Physics", "Physics Lab"]);
    assert_eq!(agg.axis, vec!["13:00-15:00"]);
    assert_eq!(agg.skipped, 1);
}

#[test]
fn test_duplicates_are_kept() {
    let e = entry("5", Some("10:00-12:00"), "Dup");
    let agg = aggregate(&[e.clone(), e], &[]);
    assert_eq!(courses_at(&agg.matrix, &[], "5", "10:00-12:00"), vec!["Dup", "Dup"]);
}

#[test]
fn test_nested_partitions_by_year_and_group() {
    let mut a = entry("1", Some("8:00-10:00"), "Calculus");
    a.year = Some("1".into());
    a.group_name = Some("G1".into());
    let mut b = entry("1", Some("8:00-10:00"), "Physics");
    b.year = Some("1".into());
    b.group_name = Some("G2".into());
    let mut c = entry("3", Some("2:00-4:00"), "Databases");
    c.year = Some("3".into());
    let agg = aggregate_view(&[a, b, c], ViewKind::Groups);

    assert_eq!(courses_at(&agg.matrix, &["1", "G1"], "1", "08:00-10:00"), vec!["Calculus"]);
    assert_eq!(courses_at(&agg.matrix, &["1", "G2"], "1", "08:00-10:00"), vec!["Physics"]);
    assert_eq!(courses_at(&agg.matrix, &["3", UNASSIGNED], "3", "14:00-16:00"), vec!["Databases"]);
    // el eje es global, no por partición
    assert_eq!(agg.axis, vec!["08:00-10:00", "14:00-16:00"]);

    let titles: Vec<Vec<String>> = agg.matrix.leaves().into_iter().map(|(p, _)| p).collect();
    assert_eq!(titles.len(), 3);
}

#[test]
fn test_custom_selector() {
    fn by_instructor(e: &ScheduleEntry) -> String {
        e.instructor.clone()
    }
    let selectors: [KeySelector; 1] = [&by_instructor];
    let mut e = entry("6", Some("9-10"), "Ethics");
    e.instructor = "Prof. Noor".into();
    e.session_type = SessionType::Section;
    let agg = aggregate(&[e], &selectors);
    let cell = &agg.matrix.get(&["Prof. Noor"]).unwrap()["6"]["09:00-10:00"][0];
    assert_eq!(cell.session_type, SessionType::Section);
}

#[test]
fn test_selector_can_capture_a_field_choice() {
    // la pantalla elige en tiempo de ejecución por qué campo particionar
    fn keyed_by(field: &str) -> impl Fn(&ScheduleEntry) -> String + '_ {
        move |e: &ScheduleEntry| match field {
            "room" => e.room.clone().unwrap_or_else(|| UNASSIGNED.to_string()),
            _ => e.course.clone(),
        }
    }

    let mut a = entry("1", Some("8:00-9:00"), "Calculus");
    a.room = Some("B12".into());
    let b = entry("1", Some("8:00-9:00"), "Physics");

    let chosen = String::from("room");
    let by_room = keyed_by(&chosen);
    let selectors: [KeySelector; 1] = [&by_room];
    let agg = aggregate(&[a, b], &selectors);

    assert_eq!(courses_at(&agg.matrix, &["B12"], "1", "08:00-09:00"), vec!["Calculus"]);
    assert_eq!(courses_at(&agg.matrix, &[UNASSIGNED], "1", "08:00-09:00"), vec!["Physics"]);
}

#[test]
fn test_aggregation_is_pure_and_repeatable() {
    let entries = vec![
        entry("7", Some("3:00-5:00"), "A"),
        entry("1", Some("8:00-9:00"), "B"),
    ];
    let before = entries.clone();
    let first = aggregate_view(&entries, ViewKind::Professors);
    let second = aggregate_view(&entries, ViewKind::Professors);
    assert_eq!(first, second);
    assert_eq!(entries, before);
}
