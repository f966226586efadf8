use std::io::{Cursor, Read};

use calamine::{Reader, Xlsx};
use slotgrid::algorithm::{aggregate_view, ViewKind};
use slotgrid::excel::io::cell_to_string;
use slotgrid::export::{export_aggregation, render_grid, tables_from_aggregation, ExportFormat};
use slotgrid::models::{ScheduleEntry, SessionType};

fn session(day: &str, slot: &str, course: &str, year: &str, group: &str) -> ScheduleEntry {
    ScheduleEntry {
        course: course.into(),
        day: day.into(),
        time_slot_raw: Some(slot.into()),
        instructor: "Dr. Salem".into(),
        room: Some("B12".into()),
        year: Some(year.into()),
        group_name: Some(group.into()),
        ..Default::default()
    }
}

fn sample() -> Vec<ScheduleEntry> {
    let mut lab = session("3", "1-3", "Algorithms", "2", "G1");
    lab.session_type = SessionType::Section;
    lab.room = None;
    vec![
        session("1", "9:00-11:00", "Algorithms", "2", "G1"),
        session("1", "9:00-11:00", "Databases, Intro", "2", "G1"),
        lab,
        session("7", "11:00-1:00", "Networks", "3", "G2"),
    ]
}

#[test]
fn test_format_parsing() {
    assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    assert_eq!("word".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
    assert!("pdf".parse::<ExportFormat>().is_err());
    assert_eq!(ExportFormat::Docx.extension(), "docx");
}

#[test]
fn test_render_grid_layout() {
    let agg = aggregate_view(&sample(), ViewKind::Single);
    let matrix = agg.matrix.get(&[]).unwrap();
    let rows = render_grid(matrix, &agg.axis);

    assert_eq!(rows[0], vec!["Day", "09:00-11:00", "11:00-13:00", "13:00-15:00"]);
    // sábado, lunes, viernes
    let days: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
    assert_eq!(days, vec!["Saturday", "Monday", "Friday"]);
    assert_eq!(
        rows[1][1],
        "Algorithms (Lecture) - Dr. Salem @ B12; Databases, Intro (Lecture) - Dr. Salem @ B12"
    );
    assert_eq!(rows[1][2], "");
    assert_eq!(rows[2][3], "Algorithms (Section) - Dr. Salem");
}

#[test]
fn test_tables_per_partition() {
    let agg = aggregate_view(&sample(), ViewKind::Groups);
    let tables = tables_from_aggregation(&agg, "ignored");
    let titles: Vec<&str> = tables.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["2 / G1", "3 / G2"]);
    // todas las tablas comparten el eje global
    assert!(tables.iter().all(|t| t.rows()[0].len() == 4));
    // celdas sin unir: una línea por sesión
    assert_eq!(tables[0].cells[1][1].len(), 2);
}

#[test]
fn test_csv_export_quotes_and_titles() {
    let agg = aggregate_view(&sample(), ViewKind::Groups);
    let csv = String::from_utf8(export_aggregation(&agg, ExportFormat::Csv, "t").unwrap()).unwrap();
    let lines: Vec<&str> = csv.split("\r\n").collect();
    assert_eq!(lines[0], "2 / G1");
    assert_eq!(lines[1], "Day,09:00-11:00,11:00-13:00,13:00-15:00");
    assert!(lines[2].starts_with("Saturday,\"Algorithms (Lecture)"));
    assert!(csv.contains("\r\n\r\n3 / G2\r\n"));
}

#[test]
fn test_csv_single_table_has_no_title() {
    let agg = aggregate_view(&sample(), ViewKind::Single);
    let csv = String::from_utf8(export_aggregation(&agg, ExportFormat::Csv, "Timetable").unwrap()).unwrap();
    assert!(csv.starts_with("Day,"));
}

#[test]
fn test_json_export() {
    let agg = aggregate_view(&sample(), ViewKind::Single);
    let bytes = export_aggregation(&agg, ExportFormat::Json, "t").unwrap();
    let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["axis"][0], "09:00-11:00");
    assert_eq!(v["matrix"]["1"]["09:00-11:00"][1]["course"], "Databases, Intro");
}

#[test]
fn test_xlsx_export_one_sheet_per_partition() {
    let agg = aggregate_view(&sample(), ViewKind::Groups);
    let bytes = export_aggregation(&agg, ExportFormat::Xlsx, "t").unwrap();

    let mut book: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
    let names = book.sheet_names().to_owned();
    assert_eq!(names, vec!["2 - G1".to_string(), "3 - G2".to_string()]);

    let range = book.worksheet_range("2 - G1").unwrap();
    let rows: Vec<Vec<String>> = range.rows().map(|r| r.iter().map(cell_to_string).collect()).collect();
    assert_eq!(rows[0][0], "Day");
    assert_eq!(rows[0][1], "09:00-11:00");
    assert_eq!(rows[1][0], "Saturday");
}

#[test]
fn test_docx_export_is_a_word_package() {
    let agg = aggregate_view(&sample(), ViewKind::Single);
    let bytes = export_aggregation(&agg, ExportFormat::Docx, "Group timetable").unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let names: Vec<String> = archive.file_names().map(|s| s.to_string()).collect();
    assert!(names.contains(&"[Content_Types].xml".to_string()));
    assert!(names.contains(&"word/document.xml".to_string()));

    let mut xml = String::new();
    archive.by_name("word/document.xml").unwrap().read_to_string(&mut xml).unwrap();
    assert!(xml.contains("Group timetable"));
    assert!(xml.contains("<w:tbl>"));
    assert!(xml.contains("Databases, Intro (Lecture)"));
}

#[test]
fn test_docx_keeps_names_with_separator_in_one_paragraph() {
    let mut odd = session("2", "8:00-9:00", "Lab; Part 2", "1", "G1");
    odd.room = Some("Hall; East".into());
    let agg = aggregate_view(&[odd, session("2", "8:00-9:00", "Ethics", "1", "G1")], ViewKind::Single);
    let bytes = export_aggregation(&agg, ExportFormat::Docx, "t").unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive.by_name("word/document.xml").unwrap().read_to_string(&mut xml).unwrap();
    assert!(xml.contains(">Lab; Part 2 (Lecture) - Dr. Salem @ Hall; East<"));
    assert!(xml.contains(">Ethics (Lecture) - Dr. Salem @ B12<"));
}
