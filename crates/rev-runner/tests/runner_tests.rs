use pretty_assertions::assert_eq;
use rev_engine::{RemoteHandle, ReverseError};
use rev_model::DefinitionKind;
use rev_runner::{
    default_root, load_models, load_snapshot, write_json, Runner, RunnerConfig, RunnerError,
};
use rev_test_utils::{
    intranet_site, model_json, original_intranet_model, original_news_web, snapshot_json,
    NEWS_WEB_HANDLE, SITE_HANDLE,
};
use std::fs;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

#[test]
fn test_load_config_file() {
    let ws = Workspace::new();
    let path = ws.write(
        "rev.toml",
        r#"
        [reverse]
        excluded = ["html_field"]

        [registry]
        handler_sets = ["foundation"]

        [logging]
        json = true
        "#,
    );

    let config = RunnerConfig::load(&path).unwrap();
    assert_eq!(config.reverse.excluded, vec![DefinitionKind::HtmlField]);
    assert!(config.logging.json);
    assert_eq!(config.logging.filter, "info");
    assert!(!config.handler_registry().unwrap().contains(DefinitionKind::HtmlField));
}

#[test]
fn test_missing_config_is_io_error() {
    let ws = Workspace::new();
    let err = RunnerConfig::load(&ws.dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, RunnerError::Io { .. }));
}

#[test]
fn test_reverse_from_snapshot_file() {
    let ws = Workspace::new();
    let path = ws.write("snapshot.json", &snapshot_json(&intranet_site()));

    let remote = load_snapshot(&path).unwrap();
    let root = default_root(&remote).unwrap();
    assert_eq!(root, RemoteHandle::new(SITE_HANDLE));

    let config = RunnerConfig::new().with_excluded(DefinitionKind::Web);
    let result = Runner::new(config)
        .unwrap()
        .reverse(&remote, DefinitionKind::Site, root)
        .unwrap();

    assert_eq!(result.model.count_of(DefinitionKind::Web), 0);
    assert_eq!(result.model.count_of(DefinitionKind::List), 1);
}

#[test]
fn test_reverse_web_root() {
    let ws = Workspace::new();
    let remote = load_snapshot(&ws.write("snapshot.json", &snapshot_json(&intranet_site()))).unwrap();

    let result = Runner::new(RunnerConfig::new())
        .unwrap()
        .reverse(&remote, DefinitionKind::Web, NEWS_WEB_HANDLE.into())
        .unwrap();

    assert_eq!(result.model.kind(), DefinitionKind::Web);
    assert_eq!(result.model.count_of(DefinitionKind::Web), 2);
}

#[test]
fn test_validate_and_write_report() {
    let ws = Workspace::new();
    let remote = load_snapshot(&ws.write("snapshot.json", &snapshot_json(&intranet_site()))).unwrap();
    let models = load_models(&ws.write("model.json", &model_json(&original_intranet_model()))).unwrap();
    assert_eq!(models.len(), 1);

    let report = Runner::new(RunnerConfig::new())
        .unwrap()
        .validate(&remote, &models, &SITE_HANDLE.into())
        .unwrap();
    assert!(report.passed);
    assert!(report.invalid.is_empty());
    assert_eq!(report.coverage.len(), 7);
    assert!(report.unset.contains(&"WebDefinition.description".to_string()));
    assert!(!report.unset.contains(&"WebDefinition.title".to_string()));

    let out = ws.dir.path().join("report.json");
    write_json(&out, &report).unwrap();
    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(written["passed"], true);
    assert!(written["unset"].is_array());
    assert!(written["coverage"]["FieldDefinition"].is_array());
}

#[test]
fn test_validate_model_array_against_web_root() {
    let ws = Workspace::new();
    let remote = load_snapshot(&ws.write("snapshot.json", &snapshot_json(&intranet_site()))).unwrap();
    let array = format!("[{}]", model_json(&original_news_web()));
    let models = load_models(&ws.write("models.json", &array)).unwrap();

    let report = Runner::new(RunnerConfig::new())
        .unwrap()
        .validate(&remote, &models, &NEWS_WEB_HANDLE.into())
        .unwrap();

    assert!(report.passed, "{:#?}", report.invalid);
    assert!(report.coverage.get("WebDefinition").is_some());
}

#[test]
fn test_drifted_remote_fails_run() {
    let ws = Workspace::new();
    let mut site = serde_json::to_value(intranet_site()).unwrap();
    site["collections"]["webs"][0]["properties"]["Title"] = "Newsroom".into();
    let remote = load_snapshot(&ws.write("snapshot.json", &site.to_string())).unwrap();

    let report = Runner::new(RunnerConfig::new())
        .unwrap()
        .validate(&remote, &[original_intranet_model()], &SITE_HANDLE.into())
        .unwrap();

    assert!(!report.passed);
    assert_eq!(report.invalid.len(), 1);
    assert_eq!(report.invalid[0].model, "WebDefinition");
    assert_eq!(report.invalid[0].record.dst_value.as_deref(), Some("Newsroom"));
}

#[test]
fn test_handler_subset_reports_missing_nodes() {
    let ws = Workspace::new();
    let remote = load_snapshot(&ws.write("snapshot.json", &snapshot_json(&intranet_site()))).unwrap();

    let config = RunnerConfig::new().with_handlers(vec![
        DefinitionKind::Site,
        DefinitionKind::Web,
        DefinitionKind::List,
    ]);
    let report = Runner::new(config)
        .unwrap()
        .validate(&remote, &[original_intranet_model()], &SITE_HANDLE.into())
        .unwrap();

    assert!(!report.passed);
    assert!(report
        .invalid
        .iter()
        .all(|p| p.record.property() == "identity"));
    assert!(!report.invalid.is_empty());
}

#[test]
fn test_unsupported_root_kind() {
    let runner = Runner::new(RunnerConfig::new()).unwrap();
    let ws = Workspace::new();
    let remote = load_snapshot(&ws.write("snapshot.json", &snapshot_json(&intranet_site()))).unwrap();

    let err = runner
        .reverse(&remote, DefinitionKind::Farm, SITE_HANDLE.into())
        .unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Reverse(ReverseError::UnsupportedModelType(DefinitionKind::Farm))
    ));
    assert!(!err.is_structural());
}

#[test]
fn test_unknown_explicit_handler() {
    let config = RunnerConfig::new().with_handlers(vec![DefinitionKind::WebApplication]);
    let err = Runner::new(config).unwrap_err();
    assert!(matches!(err, RunnerError::UnknownHandler(DefinitionKind::WebApplication)));
    assert!(err.is_structural());
}

#[test]
fn test_malformed_model_file() {
    let ws = Workspace::new();
    let err = load_models(&ws.write("model.json", "{ \"definition\": 42 }")).unwrap_err();
    assert!(matches!(err, RunnerError::Json { .. }));
}

#[test]
fn test_empty_snapshot_has_no_root() {
    let ws = Workspace::new();
    let remote = load_snapshot(&ws.write("snapshot.json", "[]")).unwrap();
    assert!(matches!(default_root(&remote), Err(RunnerError::EmptySnapshot)));
}
