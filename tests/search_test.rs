mod common;

use assert2::check;
use common::{DocsLibrary, TempWorkspace, docs_library};
use framework_docs_mcp::tools::{
    SearchDocsRequest, SmartSearchRequest, handle_search_docs, handle_smart_search,
};
use framework_docs_mcp::{Catalog, search, smart_search};
use rstest::rstest;

fn search_docs(docs: &DocsLibrary, query: &str, framework: Option<&str>) -> String {
    handle_search_docs(
        &docs.library,
        SearchDocsRequest {
            query: query.to_string(),
            framework: framework.map(ToString::to_string),
        },
    )
    .expect("search_docs should succeed")
}

#[rstest]
fn overview_pages_outrank_feature_pages(docs_library: DocsLibrary) {
    let catalog = Catalog::build(&docs_library.library);
    let outcome = search(&catalog, "auth", Some("laravel")).unwrap();

    let paths: Vec<_> = outcome.hits.iter().map(|h| h.logical_path.as_str()).collect();
    check!(paths == ["laravel/getting-started.md", "laravel/forms/1.md"]);
    check!(outcome.hits[0].priority == 10);
    check!(outcome.hits[1].priority == 5);
}

#[rstest]
fn non_markdown_files_are_never_searched(docs_library: DocsLibrary) {
    let catalog = Catalog::build(&docs_library.library);
    let outcome = search(&catalog, "auth notes", None).unwrap();
    check!(outcome.total == 0);
}

#[rstest]
fn every_hit_contains_the_query(docs_library: DocsLibrary) {
    let catalog = Catalog::build(&docs_library.library);
    let outcome = search(&catalog, "MIDDLEWARE", None).unwrap();

    check!(outcome.total == 4);
    for hit in &outcome.hits {
        let doc = catalog
            .documents()
            .iter()
            .find(|d| d.logical_path() == hit.logical_path)
            .unwrap();
        check!(doc.read().unwrap().to_lowercase().contains("middleware"));
    }
}

#[rstest]
fn search_docs_reports_counts_and_scores(docs_library: DocsLibrary) {
    let output = search_docs(&docs_library, "middleware", Some("laravel"));

    check!(output.contains("Found 3 total, showing 3"));
    check!(output.contains("laravel/routing/basics.md (priority: 8"));
    check!(output.contains("laravel/forms/1.md (priority: 5"));
    check!(!output.contains("tailwind/"));
}

#[rstest]
fn search_docs_unknown_framework_suggests_listing(docs_library: DocsLibrary) {
    let output = search_docs(&docs_library, "routing", Some("django"));
    check!(output.contains("'django' not found"));
    check!(output.contains("list_frameworks"));
}

#[rstest]
fn search_docs_no_results(docs_library: DocsLibrary) {
    let output = search_docs(&docs_library, "websocket broadcasting", None);
    check!(output.contains("No results found"));
}

#[rstest]
fn empty_query_is_rejected(docs_library: DocsLibrary) {
    let output = search_docs(&docs_library, "   ", None);
    check!(output.contains("Search query is empty"));
}

#[test]
fn results_are_capped_with_true_total() {
    let workspace = TempWorkspace::new();
    for i in 0..7 {
        workspace.create_file(&format!("laravel/queues/job{}.md", i), "Dispatch the job.");
    }
    let library = workspace.library();

    let catalog = Catalog::build(&library);
    let outcome = search(&catalog, "dispatch", None).unwrap();
    check!(outcome.total == 7);
    check!(outcome.hits.len() == 5);

    let output = handle_search_docs(
        &library,
        SearchDocsRequest {
            query: "dispatch".to_string(),
            framework: None,
        },
    )
    .unwrap();
    check!(output.contains("Found 7 total, showing 5"));
    check!(output.contains("2 more results not shown"));
}

#[rstest]
fn smart_search_scopes_to_detected_framework(docs_library: DocsLibrary) {
    let result = smart_search(&docs_library.library, &Catalog::build(&docs_library.library), "laravel")
        .unwrap();
    check!(result.detected.as_deref() == Some("laravel"));
    check!(result.outcome.hits.iter().all(|h| h.framework == "laravel"));

    let output = handle_smart_search(
        &docs_library.library,
        SmartSearchRequest {
            query: "tailwind".to_string(),
        },
    )
    .unwrap();
    check!(output.contains("Detected framework: **tailwind**"));
    check!(output.contains("tailwind/index.md"));
}

#[rstest]
fn smart_search_without_detection_searches_everything(docs_library: DocsLibrary) {
    let output = handle_smart_search(
        &docs_library.library,
        SmartSearchRequest {
            query: "flex".to_string(),
        },
    )
    .unwrap();
    check!(output.contains("No framework detected"));
    check!(output.contains("Tip:"));
    check!(output.contains("tailwind/flexbox.md"));
}

#[rstest]
fn content_changes_are_visible_without_restart(docs_library: DocsLibrary) {
    let before = search_docs(&docs_library, "livewire", None);
    check!(before.contains("No results found"));

    docs_library
        .workspace
        .create_file("laravel/starter-kits.md", "Livewire starter kit.");
    let after = search_docs(&docs_library, "livewire", None);
    check!(after.contains("laravel/starter-kits.md"));
}
