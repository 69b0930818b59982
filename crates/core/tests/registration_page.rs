use weekwizard_core::{
	calendar::Term, create_calendar, parse_html, records_from_json, records_to_json, render,
	schedule_from_html, CourseRecord, RenderOptions, UNKNOWN,
};

const PAGE: &str = include_str!("fixtures/registration.html");

#[test]
fn extracts_every_card() {
	let records = parse_html(PAGE);

	assert_eq!(records.len(), 5);
	assert_eq!(
		records[0],
		CourseRecord {
			day: "MON".into(),
			start: "09:00".into(),
			end: "12:00".into(),
			code: "01204111".into(),
			title: "Computers and Programming".into(),
			room: "LH4-101".into(),
			kind: "Lecture".into(),
			section: "800".into(),
		}
	);
}

#[test]
fn thai_labels_and_whitespace() {
	let records = parse_html(PAGE);

	assert_eq!(records[1].title, "Computers and Programming");
	assert_eq!(records[1].room, "17-503");
	assert_eq!(records[1].kind, "Laboratory");
	assert_eq!(records[2].kind, "Lecture");
}

#[test]
fn incomplete_cards_are_kept() {
	let records = parse_html(PAGE);

	let tba = &records[3];
	assert_eq!((tba.start.as_str(), tba.end.as_str()), (UNKNOWN, UNKNOWN));
	assert_eq!(tba.room, UNKNOWN);
	assert_eq!(tba.section, UNKNOWN);
	assert_eq!(tba.kind, "Online");

	assert_eq!(records[4], CourseRecord::default());
}

#[test]
fn json_handoff_renders_the_same_page() {
	let records = parse_html(PAGE);
	let json = records_to_json(&records).unwrap();
	let options = RenderOptions::default();

	assert_eq!(
		render(&records_from_json(&json).unwrap(), &options).unwrap(),
		schedule_from_html(PAGE, &options).unwrap()
	);
}

#[test]
fn monday_row_in_start_order() {
	let html = schedule_from_html(PAGE, &RenderOptions::default()).unwrap();

	let maths = html.find("Engineering Mathematics I").unwrap();
	let programming = html.find("Computers and Programming").unwrap();
	assert!(maths < programming);
	assert!(html.contains("[08:00-08:50]"));
	assert!(html.contains("LH2-204 | Lecture 1"));
	assert!(!html.contains("Knowledge of the Land"));
}

#[test]
fn calendar_from_page() {
	let term = Term::new(
		chrono::NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
		chrono::NaiveDate::from_ymd_opt(2025, 4, 25).unwrap(),
		"Asia/Bangkok",
		"KU 2/2024",
	)
	.unwrap();
	let calendar = create_calendar(&parse_html(PAGE), &term).unwrap().to_string();

	assert_eq!(calendar.matches("BEGIN:VEVENT").count(), 3);
}
