use jobcard::core::draft::DraftState;
use jobcard::core::session::{Reply, Session, SessionAction, parse_line, split_line};
use jobcard::core::submit::SubmitOptions;
use jobcard::errors::AppError;
use jobcard::models::catalog::Catalog;
use jobcard::models::job_type::JobType;
use jobcard::store::{MemoryStore, Table};
use predicates::str::contains;

mod common;
use common::{hm, init_sheet, jc, record, setup_home, temp_sheet};

fn apply_line(session: &mut Session, line: &str) -> Result<Reply, AppError> {
    let action = parse_line(line)
        .expect("line parses")
        .expect("line is not blank");
    session.apply(action)
}

#[test]
fn test_split_line_quotes() {
    assert_eq!(
        split_line(r#"material "PVC Pipe" 2.5 Feet"#).unwrap(),
        vec!["material", "PVC Pipe", "2.5", "Feet"]
    );
    assert_eq!(
        split_line("  tech   'Jane Doe'  ").unwrap(),
        vec!["tech", "Jane Doe"]
    );
    assert!(split_line("   ").unwrap().is_empty());
    assert!(split_line(r#"site "Site A"#).is_err());
}

#[test]
fn test_parse_line_actions() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(
        parse_line("m Sealant 2").unwrap(),
        Some(SessionAction::Material {
            name: "Sealant".into(),
            quantity: 2.0,
            unit: None,
        })
    );
    assert_eq!(
        parse_line("type pre-job").unwrap(),
        Some(SessionAction::Type {
            job_type: JobType::PreJob
        })
    );
    assert_eq!(
        parse_line("desc Fixed the leak under the sink").unwrap(),
        Some(SessionAction::Desc {
            text: vec![
                "Fixed".into(),
                "the".into(),
                "leak".into(),
                "under".into(),
                "the".into(),
                "sink".into()
            ]
        })
    );
    assert_eq!(parse_line("exit").unwrap(), Some(SessionAction::Quit));

    assert!(parse_line("fly away").is_err());
    assert!(parse_line("material Sealant lots").is_err());
}

#[test]
fn test_session_builds_and_submits_card() {
    let catalog = Catalog::default();
    let store = MemoryStore::new(Table::new(vec![record("Site B", "Earlier")]));
    let mut session = Session::new(&catalog, &store, SubmitOptions::default(), 10);

    assert!(matches!(
        apply_line(&mut session, "material Sealant 2").unwrap(),
        Reply::MaterialAdded(ref item) if item.unit == "Units"
    ));
    apply_line(&mut session, r#"material "PVC Pipe" 1.5 Feet"#).unwrap();
    apply_line(&mut session, "tech denver").unwrap();
    apply_line(&mut session, "site 'site c'").unwrap();
    apply_line(&mut session, "date 2025-09-02").unwrap();
    apply_line(&mut session, "start 07:30").unwrap();
    apply_line(&mut session, "end 10:00").unwrap();
    apply_line(&mut session, "desc Replaced trap").unwrap();

    assert_eq!(session.form().site, "Site C");
    assert_eq!(session.form().start_time, Some(hm(7, 30)));
    assert_eq!(session.draft().state(), DraftState::Building);

    let reply = apply_line(&mut session, "submit").unwrap();
    let Reply::Submitted(outcome) = reply else {
        panic!("expected a submission");
    };

    assert_eq!(outcome.total_rows, 2);
    assert_eq!(outcome.materials_saved, 2);
    assert_eq!(
        outcome.record.materials_summary,
        "Sealant (2 Units), PVC Pipe (1.5 Feet)"
    );
    assert_eq!(outcome.record.technicians_summary, "Denver");

    // both the draft and the form start over
    assert_eq!(session.draft().state(), DraftState::Empty);
    assert!(session.form().work_description.is_empty());
    assert_eq!(session.form().site, "Site A");
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn test_session_removals_are_one_based() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut session = Session::new(&catalog, &store, SubmitOptions::default(), 10);

    apply_line(&mut session, "material Sealant 1").unwrap();
    apply_line(&mut session, "material Screws 20").unwrap();
    apply_line(&mut session, "tech 'John Smith'").unwrap();

    assert_eq!(
        apply_line(&mut session, "remove-material 0").unwrap(),
        Reply::MaterialRemoved(None)
    );
    assert_eq!(
        apply_line(&mut session, "remove-material 3").unwrap(),
        Reply::MaterialRemoved(None)
    );

    let Reply::MaterialRemoved(Some(item)) = apply_line(&mut session, "remove-material 1").unwrap()
    else {
        panic!("first material should be removed");
    };
    assert_eq!(item.name, "Sealant");
    assert_eq!(session.draft().materials()[0].name, "Screws");

    assert_eq!(
        apply_line(&mut session, "remove-tech 2").unwrap(),
        Reply::TechnicianRemoved(None)
    );
    assert!(matches!(
        apply_line(&mut session, "remove-tech 1").unwrap(),
        Reply::TechnicianRemoved(Some(ref t)) if t.name == "John Smith"
    ));
}

#[test]
fn test_session_duplicate_technician_and_roster() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut session = Session::new(&catalog, &store, SubmitOptions::default(), 10);

    assert_eq!(
        apply_line(&mut session, "tech Denver").unwrap(),
        Reply::TechnicianAdded {
            name: "Denver".into(),
            added: true
        }
    );
    assert_eq!(
        apply_line(&mut session, "t DENVER").unwrap(),
        Reply::TechnicianAdded {
            name: "Denver".into(),
            added: false
        }
    );
    assert_eq!(session.draft().technicians().len(), 1);

    let Reply::Available(names) = apply_line(&mut session, "techs").unwrap() else {
        panic!("expected the roster");
    };
    assert!(!names.contains(&"Denver".to_string()));
    assert_eq!(names.len(), catalog.technicians.len() - 1);
}

#[test]
fn test_session_errors_leave_state_untouched() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut session = Session::new(&catalog, &store, SubmitOptions::default(), 10);

    apply_line(&mut session, "material Sealant 2").unwrap();
    let form_before = session.form().clone();
    let draft_before = session.draft().clone();

    assert!(matches!(
        apply_line(&mut session, "site Atlantis"),
        Err(AppError::UnknownSite(_))
    ));
    assert!(matches!(
        apply_line(&mut session, "date 2025-13-40"),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        apply_line(&mut session, "start 25:99"),
        Err(AppError::InvalidTime(_))
    ));
    assert!(matches!(
        apply_line(&mut session, "material Sealant -1"),
        Err(AppError::InvalidQuantity(_))
    ));
    assert!(matches!(
        apply_line(&mut session, "tech Nobody"),
        Err(AppError::UnknownTechnician(_))
    ));
    // no description yet
    assert!(matches!(
        apply_line(&mut session, "submit"),
        Err(AppError::Validation(_))
    ));

    assert_eq!(session.form(), &form_before);
    assert_eq!(session.draft(), &draft_before);
    assert_eq!(store.reads(), 0);
}

#[test]
fn test_session_history_reads_fresh() {
    let catalog = Catalog::default();
    let store = MemoryStore::new(Table::new(vec![
        record("Site A", "One"),
        record("Site B", "Two"),
        record("Site C", "Three"),
    ]));
    let mut session = Session::new(&catalog, &store, SubmitOptions::default(), 2);

    let Reply::History(rows) = apply_line(&mut session, "history").unwrap() else {
        panic!("expected history");
    };
    let descs: Vec<_> = rows.iter().map(|r| r.work_description.as_str()).collect();
    assert_eq!(descs, vec!["Two", "Three"]);

    let Reply::History(rows) = apply_line(&mut session, "history 5").unwrap() else {
        panic!("expected history");
    };
    assert_eq!(rows.len(), 3);
    assert_eq!(store.reads(), 2);
}

#[test]
fn test_cli_session_saves_card() {
    let home = setup_home("cli_session");
    let sheet = temp_sheet("cli_session", "csv");
    init_sheet(&home, &sheet);

    jc(&home)
        .args(["--sheet", &sheet, "session"])
        .write_stdin(
            "material Sealant 2\n\
             tech Denver\n\
             desc Fixed leak\n\
             show\n\
             submit\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(contains("Added 2 Units Sealant (#1)"))
        .stdout(contains("Card:"))
        .stdout(contains("Saved! Logged 1 materials for Site A."));

    let content = std::fs::read_to_string(&sheet).unwrap();
    assert!(content.contains("Fixed leak"));
    assert!(content.contains("Sealant (2 Units)"));
}

#[test]
fn test_cli_session_reports_errors_and_discards_draft() {
    let home = setup_home("cli_session_discard");
    let sheet = temp_sheet("cli_session_discard", "csv");
    init_sheet(&home, &sheet);

    jc(&home)
        .args(["--sheet", &sheet, "session"])
        .write_stdin("material Sealant 2\nsubmit\nnonsense\n")
        .assert()
        .success()
        .stderr(contains("Please enter a work description."))
        .stdout(contains("unrecognized subcommand"))
        .stdout(contains("the draft was discarded"));

    let content = std::fs::read_to_string(&sheet).unwrap();
    assert_eq!(content.lines().count(), 1);
}
