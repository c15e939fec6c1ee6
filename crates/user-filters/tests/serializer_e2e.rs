//! End-to-end tests that feed form-shaped JSON through the public API.

use user_filters_rs::filter::{diagnose, parse_config, Severity};
use user_filters_rs::{RenderOptions, UserFilters};

const DIRECTORY_QUERY: &str = r#"{
    "logic": "OR",
    "groups": [
        {
            "logic": "AND",
            "conditions": [
                { "field": "role", "label": "Role", "operator": "in", "value": ["ADMIN", "TEAM_LEAD"], "valueType": "multiSelect" },
                { "field": "status", "label": "Status", "operator": "neq", "value": "SUSPENDED", "valueType": "select" },
                { "field": "", "operator": "eq", "value": "" }
            ]
        },
        {
            "logic": "OR",
            "conditions": [
                { "field": "lastName", "label": "Last name", "operator": "startsWith", "value": "O'", "valueType": "text" },
                { "field": "createdAt", "label": "Created", "operator": "between", "value": ["2024-01-01", "2024-06-30"], "valueType": "dateRange" }
            ]
        },
        { "logic": "AND", "conditions": [] }
    ]
}"#;

#[test]
fn test_directory_query_human_readable() {
    let config = parse_config(DIRECTORY_QUERY).unwrap();
    assert_eq!(
        config.to_human_readable(),
        "(Role Is any of ADMIN, TEAM_LEAD AND Status Not equals SUSPENDED) OR \
         (Last name Starts with O' OR Created Between 1/1/2024 - 6/30/2024)"
    );
}

#[test]
fn test_directory_query_sql() {
    let config = parse_config(DIRECTORY_QUERY).unwrap();
    assert_eq!(
        config.to_sql(),
        "(`role` IN ('ADMIN','TEAM_LEAD') AND `status` != 'SUSPENDED') OR \
         (`lastName` LIKE 'O''%' OR `createdAt` BETWEEN 2024-01-01 AND 2024-06-30)"
    );
}

#[test]
fn test_directory_query_summary() {
    let config = parse_config(DIRECTORY_QUERY).unwrap();
    assert_eq!(config.compact_label(), "5 filters");
    assert_eq!(config.active_condition_count(), 4);
    assert!(!config.is_empty());
}

#[test]
fn test_directory_query_diagnostics() {
    let config = parse_config(DIRECTORY_QUERY).unwrap();
    let diags = diagnose(&config);
    // the placeholder condition and the empty group
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.severity == Severity::Info));
    assert_eq!((diags[0].group, diags[0].condition), (0, Some(2)));
    assert_eq!((diags[1].group, diags[1].condition), (2, None));
}

#[test]
fn test_directory_query_with_day_first_dates() {
    let config = parse_config(DIRECTORY_QUERY).unwrap();
    let options = RenderOptions::default().with_date_format("%d/%m/%Y").unwrap();
    assert!(config
        .to_human_readable_with(&options)
        .ends_with("Created Between 01/01/2024 - 30/06/2024)"));
}

#[test]
fn test_form_state_json_to_config() {
    let form: UserFilters =
        serde_json::from_str(r#"{"search":"","role":"CLIENT","dateRange":"today"}"#).unwrap();
    assert!(form.has_active_filters());

    let today = chrono::NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
    let config = form.to_filter_config(today);
    assert_eq!(
        config.to_sql(),
        "(`role` = 'CLIENT' AND `createdAt` >= 2024-07-04)"
    );
    assert_eq!(config.compact_label(), "2 filters");

    // the derived config survives the wire
    let json = serde_json::to_string(&config).unwrap();
    let reparsed = parse_config(&json).unwrap();
    assert_eq!(reparsed.to_human_readable(), config.to_human_readable());
}
