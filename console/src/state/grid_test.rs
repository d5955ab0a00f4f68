use super::*;
use serde_json::json;

const REST: &str = "/scm/api/rest/";

// =============================================================
// Groups preset
// =============================================================

#[test]
fn groups_preset_points_at_groups_collection() {
    let grid = RestGridConfig::groups(REST);
    assert_eq!(grid.store_url, "/scm/api/rest/groups.json");
    assert_eq!(grid.add_url, "/scm/api/rest/groups.json");
    assert_eq!(grid.edit_url_pattern, "/scm/api/rest/groups/{0}.json");
    assert_eq!(grid.remove_url_pattern, "/scm/api/rest/groups/{0}.json");
    assert_eq!(grid.id_field, "name");
    assert_eq!(grid.search_field, "name");
    assert_eq!(grid.columns.len(), 3);
}

#[test]
fn groups_preset_is_valid() {
    assert_eq!(RestGridConfig::groups(REST).validate(), Ok(()));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_empty_store() {
    let mut grid = RestGridConfig::groups(REST);
    grid.store_url = "  ".to_owned();
    assert_eq!(grid.validate(), Err(GridError::MissingStore));
}

#[test]
fn validate_rejects_missing_columns() {
    let mut grid = RestGridConfig::groups(REST);
    grid.columns.clear();
    assert_eq!(grid.validate(), Err(GridError::NoColumns));
}

#[test]
fn validate_rejects_empty_id_field() {
    let mut grid = RestGridConfig::groups(REST);
    grid.id_field = String::new();
    assert_eq!(grid.validate(), Err(GridError::MissingField("id field")));
}

#[test]
fn validate_rejects_patterns_without_placeholder() {
    let mut grid = RestGridConfig::groups(REST);
    grid.edit_url_pattern = "/scm/api/rest/groups.json".to_owned();
    assert_eq!(grid.validate(), Err(GridError::MissingPlaceholder("edit url pattern")));

    let mut grid = RestGridConfig::groups(REST);
    grid.remove_url_pattern = "/scm/api/rest/groups.json".to_owned();
    assert_eq!(grid.validate(), Err(GridError::MissingPlaceholder("remove url pattern")));
}

// =============================================================
// URL templates
// =============================================================

#[test]
fn edit_and_remove_urls_substitute_record_id() {
    let grid = RestGridConfig::groups(REST);
    let record = json!({"name": "admins", "description": "Administrators"});
    assert_eq!(grid.edit_url(&record).unwrap(), "/scm/api/rest/groups/admins.json");
    assert_eq!(grid.remove_url(&record).unwrap(), "/scm/api/rest/groups/admins.json");
}

#[test]
fn record_id_is_percent_encoded_in_urls() {
    let grid = RestGridConfig::groups(REST);
    let record = json!({"name": "build team/ci"});
    assert_eq!(grid.remove_url(&record).unwrap(), "/scm/api/rest/groups/build%20team%2Fci.json");
}

#[test]
fn numeric_ids_are_accepted() {
    let mut grid = RestGridConfig::groups(REST);
    grid.id_field = "id".to_owned();
    assert_eq!(grid.record_id(&json!({"id": 42})).unwrap(), "42");
}

#[test]
fn missing_or_empty_id_is_an_error() {
    let grid = RestGridConfig::groups(REST);
    let expected = Err(GridError::MissingRecordId("name".to_owned()));
    assert_eq!(grid.record_id(&json!({"description": "x"})), expected);
    assert_eq!(grid.record_id(&json!({"name": ""})), expected);
    assert_eq!(grid.edit_url(&json!({"name": null})), expected);
}

#[test]
fn boolean_id_is_rejected_but_still_displayed() {
    let grid = RestGridConfig::groups(REST);
    let record = json!({"name": true, "description": "flag"});
    let expected = Err(GridError::MissingRecordId("name".to_owned()));
    assert_eq!(grid.record_id(&record), expected);
    assert_eq!(grid.remove_url(&record), expected);
    assert_eq!(RestGridConfig::cell_text(&record, &grid.columns[0]), "true");
}

// =============================================================
// Search
// =============================================================

#[test]
fn empty_query_matches_everything() {
    let grid = RestGridConfig::groups(REST);
    assert!(grid.matches_search(&json!({"name": "dev"}), "   "));
    assert!(grid.matches_search(&json!({}), ""));
}

#[test]
fn search_is_case_insensitive_substring() {
    let grid = RestGridConfig::groups(REST);
    let records = vec![json!({"name": "Developers"}), json!({"name": "admins"}), json!({"name": "devops"})];
    let hits: Vec<_> = grid
        .filter(&records, "DEV")
        .into_iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(hits, vec!["Developers", "devops"]);
}

#[test]
fn cell_text_renders_scalars_and_blanks_the_rest() {
    let column = GridColumn::new("Type", "type", 80);
    assert_eq!(RestGridConfig::cell_text(&json!({"type": "xml"}), &column), "xml");
    assert_eq!(RestGridConfig::cell_text(&json!({"type": ["a"]}), &column), "");
    assert_eq!(RestGridConfig::cell_text(&json!({}), &column), "");
}

// =============================================================
// RecordDraft
// =============================================================

#[test]
fn new_draft_has_one_blank_field_per_column() {
    let grid = RestGridConfig::groups("/scm/api/rest/");
    let draft = RecordDraft::for_new(&grid);
    assert_eq!(draft.mode, DraftMode::Add);
    assert_eq!(draft.fields().len(), 3);
    assert_eq!(draft.value("name"), Some(""));
}

#[test]
fn edit_draft_keeps_fields_outside_columns() {
    let grid = RestGridConfig::groups("/scm/api/rest/");
    let record = json!({"name": "dev", "description": "Developers", "type": "xml", "members": ["a"]});
    let mut draft = RecordDraft::for_record(&grid, &record);
    assert_eq!(draft.mode, DraftMode::Edit);
    draft.set("description", "All developers");
    draft.set("unknown", "ignored");

    let out = draft.to_record();
    assert_eq!(out["description"], "All developers");
    assert_eq!(out["members"], json!(["a"]));
    assert!(out.get("unknown").is_none());
    assert_eq!(grid.edit_url(&out).unwrap(), "/scm/api/rest/groups/dev.json");
}
