use std::fs;
use std::path::PathBuf;

use tally::eval::{OpError, Operation};
use tally::history::History;
use tally::session::Session;

/// Unique per-test path under the system temp directory.
fn temp_history_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tally_{}_{}.txt", std::process::id(), name))
}

#[test]
fn test_session_persists_history_round_trip() {
    let path = temp_history_path("round_trip");

    let mut session = Session::new();
    session.apply(Operation::Add, 3.0, 4.0).expect("apply failed");
    session.apply(Operation::Divide, 9.0, 2.0).expect("apply failed");
    session
        .apply(Operation::SquareRoot, 16.0, 0.0)
        .expect("apply failed");

    session.history().save(&path).expect("save failed");
    let loaded = History::load(&path).expect("load failed");

    assert_eq!(loaded.records(), session.history().records());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_history_file_starts_empty() {
    let path = temp_history_path("missing");
    let _ = fs::remove_file(&path);

    let history = History::load(&path).expect("load failed");
    assert!(history.is_empty());
}

#[test]
fn test_malformed_lines_are_skipped() {
    let path = temp_history_path("malformed");
    let text = "3,4,7,add\nnot a record\n1,2,3\n5,5,25,mul\n9,0,0,launch\n";
    fs::write(&path, text).expect("write failed");

    let history = History::load(&path).expect("load failed");
    assert_eq!(history.len(), 2);
    assert_eq!(history.records()[0].op, Operation::Add);
    assert_eq!(history.records()[1].op, Operation::Multiply);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_guarded_operations_keep_history_clean() {
    let mut session = Session::new();

    assert_eq!(
        session.apply(Operation::Divide, 1.0, 0.0),
        Err(OpError::DivisionByZero)
    );
    assert_eq!(
        session.apply(Operation::Modulo, 1.0, 0.0),
        Err(OpError::ModuloByZero)
    );
    assert_eq!(
        session.apply(Operation::SquareRoot, -4.0, 0.0),
        Err(OpError::NegativeSquareRoot { value: -4.0 })
    );

    assert!(session.history().is_empty());
    assert!(session.transcript().is_empty());
}

#[test]
fn test_record_display_matches_pane_format() {
    let mut session = Session::new();
    session
        .apply(Operation::Power, 2.0, 10.0)
        .expect("apply failed");
    session
        .apply(Operation::SquareRoot, 9.0, 0.0)
        .expect("apply failed");

    let records = session.history().records();
    assert_eq!(records[0].to_string(), "2 ^ 10 = 1024");
    assert_eq!(records[1].to_string(), "sqrt(9) = 3");
}

#[test]
fn test_clear_then_save_truncates_file() {
    let path = temp_history_path("clear");

    let mut session = Session::new();
    session.apply(Operation::Add, 1.0, 1.0).expect("apply failed");
    session.history().save(&path).expect("save failed");

    session.history_mut().clear();
    session.history().save(&path).expect("save failed");

    let loaded = History::load(&path).expect("load failed");
    assert!(loaded.is_empty());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_expression_evaluations_stay_out_of_history() {
    let mut session = Session::new();

    let evaluation = session.eval_expression("(3 + 4) * 2").expect("eval failed");
    assert_eq!(evaluation.value, 14.0);
    assert_eq!(evaluation.postfix.to_string(), "3 4 + 2 *");

    assert!(session.history().is_empty());
    assert_eq!(
        session.transcript().lines(),
        ["> (3 + 4) * 2", "  postfix: 3 4 + 2 *", "  = 14"]
    );
}

#[test]
fn test_tag_counts_summarize_operations() {
    let mut session = Session::new();
    session.apply(Operation::Add, 1.0, 2.0).expect("apply failed");
    session.apply(Operation::Add, 2.0, 3.0).expect("apply failed");
    session
        .apply(Operation::Modulo, 7.0, 3.0)
        .expect("apply failed");

    let counts = session.history().tag_counts();
    assert_eq!(counts.get(&Operation::Add), Some(&2));
    assert_eq!(counts.get(&Operation::Modulo), Some(&1));
    assert_eq!(counts.get(&Operation::Divide), None);
}
