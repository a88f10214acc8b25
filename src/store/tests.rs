//! Store filter and loader unit tests.

use super::*;

fn item(id: u64, category: Category, depth1: &str, status: Status) -> PublishItem {
    PublishItem {
        id,
        category,
        depth1: depth1.to_owned(),
        depth2: format!("서브{id}"),
        depth3: String::new(),
        kind: "PC".to_owned(),
        folder: "html".to_owned(),
        file: format!("page_{id:03}.html"),
        status,
        start_date: "2025-01-10".to_owned(),
        end_date: "2025-01-24".to_owned(),
        modified_date: "2025-02-01".to_owned(),
        dev_start_date: "2025-02-03".to_owned(),
        has_design: id % 2 == 0,
        history: Vec::new(),
    }
}

fn sample_store() -> PublishStore {
    PublishStore::from_items(vec![
        item(1, Category::Main, "메인", Status::Done),
        item(2, Category::Main, "메인", Status::InProgress),
        item(3, Category::Auth, "로그인", Status::Done),
        item(4, Category::Auth, "회원가입", Status::Waiting),
        item(5, Category::Other, "고객센터", Status::Done),
        item(6, Category::Other, "고객센터", Status::Waiting),
    ])
}

#[test]
fn unfiltered_passes_everything() {
    let store = sample_store();
    assert_eq!(store.len(), 6);
    assert_eq!(store.total_count(), 6);
}

#[test]
fn keyword_filter_is_case_insensitive_over_depths() {
    let mut store = sample_store();
    store.filters.keyword = "고객".to_owned();
    assert_eq!(store.total_count(), 2);

    // depth2 participates too; keyword casing does not matter.
    store.filters.keyword = "서브3".to_owned();
    assert_eq!(store.total_count(), 1);
    assert_eq!(store.filtered()[0].id, 3);

    store.filters.keyword = "  ".to_owned();
    assert_eq!(store.total_count(), 6);
}

#[test]
fn latin_keyword_ignores_case() {
    let mut store = PublishStore::from_items(vec![{
        let mut it = item(9, Category::Main, "Main Page", Status::Done);
        it.depth2 = "Login Form".to_owned();
        it
    }]);
    store.filters.keyword = "LOGIN".to_owned();
    assert_eq!(store.total_count(), 1);
}

#[test]
fn status_filter() {
    let mut store = sample_store();
    store.filters.status = Some(Status::Done);
    assert_eq!(store.total_count(), 3);
    store.filters.status = Some(Status::Waiting);
    assert_eq!(store.total_count(), 2);
}

#[test]
fn category_filter() {
    let mut store = sample_store();
    store.filters.category = Some(Category::Auth);
    assert_eq!(store.total_count(), 2);
}

#[test]
fn depth1_filter_is_exact() {
    let mut store = sample_store();
    store.filters.depth1 = Some("메인".to_owned());
    assert_eq!(store.total_count(), 2);
    store.filters.depth1 = Some("메".to_owned());
    assert_eq!(store.total_count(), 0);
}

#[test]
fn date_filters_match_exactly() {
    let mut store = sample_store();
    store.filters.start_date = "2025-01-10".to_owned();
    assert_eq!(store.total_count(), 6);
    store.filters.start_date = "2025-01-11".to_owned();
    assert_eq!(store.total_count(), 0);

    let mut store = sample_store();
    store.filters.dev_start_date = "2025-02-03".to_owned();
    assert_eq!(store.total_count(), 6);
}

#[test]
fn design_filter() {
    let mut store = sample_store();
    store.filters.has_design = DesignFilter::With;
    assert_eq!(store.total_count(), 3);
    store.filters.has_design = DesignFilter::Without;
    assert_eq!(store.total_count(), 3);
}

#[test]
fn filters_conjoin() {
    let mut store = sample_store();
    store.filters.status = Some(Status::Done);
    store.filters.category = Some(Category::Other);
    assert_eq!(store.total_count(), 1);
    assert_eq!(store.filtered()[0].id, 5);
}

#[test]
fn counts_follow_the_filtered_list() {
    let mut store = sample_store();
    assert_eq!(store.done_count(), 3);
    assert_eq!(store.progress_count(), 1);
    assert_eq!(store.wait_count(), 2);

    store.filters.category = Some(Category::Auth);
    assert_eq!(store.done_count(), 1);
    assert_eq!(store.progress_count(), 0);
    assert_eq!(store.wait_count(), 1);
}

#[test]
fn done_rate_formatting() {
    let store = sample_store();
    assert_eq!(store.done_rate(), "50.0%");

    let mut store = sample_store();
    store.filters.keyword = "없는페이지".to_owned();
    assert_eq!(store.done_rate(), "0%");
}

#[test]
fn grouping_preserves_first_appearance_order() {
    let store = sample_store();
    let groups = store.grouped_by_depth1();
    let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["메인", "로그인", "회원가입", "고객센터"]);
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[3].1.len(), 2);
}

#[test]
fn grouping_respects_filters() {
    let mut store = sample_store();
    store.filters.status = Some(Status::Done);
    let groups = store.grouped_by_depth1();
    let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["메인", "로그인", "고객센터"]);
}

#[test]
fn depth1_values_are_distinct_and_ordered() {
    let store = sample_store();
    assert_eq!(
        store.depth1_values(),
        ["메인", "로그인", "회원가입", "고객센터"]
    );
}

#[test]
fn parse_publish_file_reads_records() {
    let json = r#"{
        "publish": [
            {
                "id": 11,
                "depth1": "메인",
                "depth2": "홈",
                "depth3": "",
                "type": "PC",
                "folder": "html/main",
                "file": "main_001.html",
                "status": "진행중",
                "startDate": "2025-03-02",
                "endDate": "2025-03-14",
                "modifiedDate": "2025-03-10",
                "devStartDate": "2025-03-17",
                "hasDesign": true,
                "history": ["2025-03-10 수정"]
            }
        ]
    }"#;
    let items = parse_publish_file(json, Category::Main).expect("parse");
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.id, 11);
    assert_eq!(item.category, Category::Main);
    assert_eq!(item.kind, "PC");
    assert_eq!(item.status, Status::InProgress);
    assert_eq!(item.start_date, "2025-03-02");
    assert_eq!(item.dev_start_date, "2025-03-17");
    assert!(item.has_design);
    assert_eq!(item.history.len(), 1);
}

#[test]
fn parse_publish_file_defaults_missing_history() {
    let json = r#"{
        "publish": [
            {
                "id": 12,
                "depth1": "메인",
                "depth2": "홈",
                "depth3": "",
                "type": "MO",
                "folder": "html/main",
                "file": "main_002.html",
                "status": "대기",
                "startDate": "",
                "endDate": "",
                "modifiedDate": "",
                "devStartDate": "",
                "hasDesign": false
            }
        ]
    }"#;
    let items = parse_publish_file(json, Category::Main).expect("parse");
    assert!(items[0].history.is_empty());
}

#[test]
fn parse_publish_file_tolerates_missing_publish_key() {
    let items = parse_publish_file("{}", Category::Other).expect("parse");
    assert!(items.is_empty());
}

#[test]
fn parse_publish_file_rejects_malformed_json() {
    assert!(parse_publish_file("not json", Category::Main).is_err());
    assert!(parse_publish_file(r#"{"publish": [{"id": "x"}]}"#, Category::Main).is_err());
}

#[test]
fn unknown_status_label_is_an_error() {
    let json = r#"{
        "publish": [
            {
                "id": 13,
                "depth1": "메인",
                "depth2": "",
                "depth3": "",
                "type": "PC",
                "folder": "html",
                "file": "a.html",
                "status": "보류",
                "startDate": "",
                "endDate": "",
                "modifiedDate": "",
                "devStartDate": "",
                "hasDesign": false
            }
        ]
    }"#;
    assert!(parse_publish_file(json, Category::Main).is_err());
}
