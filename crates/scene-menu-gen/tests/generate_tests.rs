//! Pipeline tests against an in-memory editor host.
//!
//! The mock host records build-list replacements, file writes and refresh
//! calls so each test can check exactly which side effects a run produced.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{Level, Log, Metadata, Record};

use scene_menu_gen::{
    generate_menu, generate_scene_menu, BuildEntry, EditorHost, GenerateOutcome, MenuConfig,
    MenuError,
};

const GENERATOR: &str = "Assets/Plugins/SceneLoadMenu/Editor/SceneLoadMenuGenerator.cs";
const OUTPUT: &str = "Assets/Plugins/SceneLoadMenu/Editor/SceneLoadMenu.cs";

#[derive(Debug)]
struct MockError(&'static str);

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Default)]
struct HostState {
    scenes: Vec<String>,
    generator: Option<String>,
    build: Vec<BuildEntry>,
    build_writes: usize,
    fail_build_write: bool,
    fail_build_read: bool,
    files: BTreeMap<PathBuf, String>,
    file_writes: usize,
    refreshes: usize,
}

/// In-memory host; clones share state so tests can inspect it after a run.
#[derive(Clone, Default)]
struct MockHost {
    state: Rc<RefCell<HostState>>,
}

impl MockHost {
    fn with_scenes(scenes: &[&str]) -> Self {
        let host = Self::default();
        {
            let mut state = host.state.borrow_mut();
            state.scenes = scenes.iter().map(|s| s.to_string()).collect();
            state.generator = Some(GENERATOR.to_string());
        }
        host
    }

    fn set_build(&self, paths: &[&str]) {
        self.state.borrow_mut().build = paths.iter().map(|p| BuildEntry::enabled(*p)).collect();
    }

    fn build_paths(&self) -> Vec<String> {
        self.state
            .borrow()
            .build
            .iter()
            .map(|e| e.path.clone())
            .collect()
    }

    fn output(&self) -> Option<String> {
        self.state.borrow().files.get(Path::new(OUTPUT)).cloned()
    }
}

impl EditorHost for MockHost {
    type Error = MockError;

    fn list_scene_paths(&self) -> Result<Vec<String>, MockError> {
        Ok(self.state.borrow().scenes.clone())
    }

    fn resolve_asset_path(&self, name: &str) -> Result<Option<String>, MockError> {
        Ok(self
            .state
            .borrow()
            .generator
            .clone()
            .filter(|g| g.contains(name)))
    }

    fn build_entries(&self) -> Result<Vec<BuildEntry>, MockError> {
        let state = self.state.borrow();
        if state.fail_build_read {
            return Err(MockError("build settings are unreadable"));
        }
        Ok(state.build.clone())
    }

    fn set_build_entries(&mut self, entries: Vec<BuildEntry>) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        if state.fail_build_write {
            return Err(MockError("build settings are read-only"));
        }
        state.build = entries;
        state.build_writes += 1;
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.state.borrow().files.contains_key(path)
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        state.files.insert(path.to_path_buf(), contents.to_string());
        state.file_writes += 1;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), MockError> {
        self.state.borrow_mut().refreshes += 1;
        Ok(())
    }
}

/// Logger that keeps the levels of records emitted on the current thread,
/// so tests running in parallel see only their own output.
struct CaptureLogger;

thread_local! {
    static CAPTURED: RefCell<Vec<Level>> = const { RefCell::new(Vec::new()) };
}

static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| c.borrow_mut().push(record.level()));
    }

    fn flush(&self) {}
}

/// Run `f` and return the levels it logged.
fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<Level>) {
    // Only the first call installs the logger; later calls get an error.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
    CAPTURED.with(|c| c.borrow_mut().clear());
    let result = f();
    let levels = CAPTURED.with(|c| c.borrow_mut().drain(..).collect());
    (result, levels)
}

fn count(levels: &[Level], level: Level) -> usize {
    levels.iter().filter(|l| **l == level).count()
}

fn config(build_dir: &str, first_scene: &str) -> MenuConfig {
    let mut config = MenuConfig::default();
    config.set_build_dir(build_dir);
    config.set_first_scene(first_scene);
    config
}

#[test]
fn test_generates_menu_next_to_generator() {
    let mut host = MockHost::with_scenes(&["Assets/Scenes/Main.unity", "Assets/Scenes/Menu.unity"]);

    let report = match generate_scene_menu(&mut host, &MenuConfig::default()).unwrap() {
        GenerateOutcome::Written(report) => report,
        other => panic!("Expected Written, got {:?}", other),
    };
    assert_eq!(report.output_path, PathBuf::from(OUTPUT));
    assert!(!report.overwritten);
    assert_eq!(report.scene_count, 2);
    assert_eq!(report.method_count, 4);

    let source = host.output().unwrap();
    assert!(source.contains("public static class SceneLoadMenu {"));
    assert!(source.contains("static void Open_Main_Add()"));
    assert!(source.contains("static void Open_Menu()"));
    assert_eq!(host.state.borrow().refreshes, 1);
    // Build dir unset: build list untouched.
    assert_eq!(host.state.borrow().build_writes, 0);
}

#[test]
fn test_empty_discovery_writes_nothing() {
    let mut host = MockHost::with_scenes(&[]);
    let outcome = generate_scene_menu(&mut host, &config("Assets", "")).unwrap();
    assert_eq!(outcome, GenerateOutcome::NoScenes);

    let state = host.state.borrow();
    assert_eq!(state.file_writes, 0);
    assert_eq!(state.refreshes, 0);
    assert_eq!(state.build_writes, 0);
}

#[test]
fn test_only_invalid_names_writes_nothing() {
    let mut host = MockHost::with_scenes(&["Assets/!!!.unity", "Assets/(&).unity"]);
    let outcome = generate_menu(&mut host).unwrap();
    assert_eq!(outcome, GenerateOutcome::NoScenes);
    assert!(host.output().is_none());
}

#[test]
fn test_invalid_scene_skipped_rest_generated() {
    let mut host = MockHost::with_scenes(&["Assets/!!!.unity", "Assets/Main.unity"]);
    let GenerateOutcome::Written(report) = generate_menu(&mut host).unwrap() else {
        panic!("Expected Written");
    };
    assert_eq!(report.scene_count, 1);
    let source = host.output().unwrap();
    assert!(!source.contains("!!!"));
    assert!(source.contains("Open_Main()"));
}

#[test]
fn test_duplicate_names_get_counters() {
    let mut host = MockHost::with_scenes(&[
        "Assets/A/Main.unity",
        "Assets/B/Main.unity",
        "Assets/C/Main.unity",
    ]);
    generate_menu(&mut host).unwrap();
    let source = host.output().unwrap();

    assert!(source.contains("static void Open_Main()"));
    assert!(source.contains("static void Open_Main_1()"));
    assert!(source.contains("static void Open_Main_2()"));
    assert!(source.contains(r#"OpenScene( "Assets/B/Main.unity", OpenSceneMode.Single )"#));
}

#[test]
fn test_function_identifiers_are_unique() {
    let mut host = MockHost::with_scenes(&[
        "Assets/Tests/Main.unity",
        "Assets/Tests/Main_Test.unity",
        "Assets/Tests/Main (1).unity",
        "Assets/Tests/Main-1.unity",
        "Assets/Tests/Main.unity",
    ]);
    host.set_build(&["Assets/Tests/Main.unity", "Assets/Tests/Main_Test.unity"]);
    generate_menu(&mut host).unwrap();
    let source = host.output().unwrap();

    let mut names: Vec<&str> = source
        .lines()
        .filter_map(|l| l.trim().strip_prefix("static void "))
        .collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_test_and_build_scene_gets_four_blocks() {
    let mut host = MockHost::with_scenes(&["Assets/Plugins/Example/Intro.unity"]);
    host.set_build(&["Assets/Plugins/Example/Intro.unity"]);

    let GenerateOutcome::Written(report) = generate_menu(&mut host).unwrap() else {
        panic!("Expected Written");
    };
    assert_eq!(report.method_count, 4);

    let source = host.output().unwrap();
    assert_eq!(source.matches("[MenuItem(").count(), 4);
    assert!(source.contains(r#"[MenuItem( "Scenes/Load Scene/Test/Intro", false, 23 )]"#));
    assert!(source.contains(r#"[MenuItem( "Scenes/Load Scene/Build/Intro", false, 34 )]"#));
    assert!(source.contains("static void Open_Intro_Test()"));
    assert!(source.contains("static void Open_Intro_InBuild()"));
}

#[test]
fn test_build_sync_pins_first_scene_and_feeds_in_build() {
    let mut host = MockHost::with_scenes(&[
        "Assets/Game/A.unity",
        "Assets/Game/B.unity",
        "Assets/Game/First.unity",
        "Assets/Sandbox/Play.unity",
        "Assets/Game/C.unity",
    ]);
    host.set_build(&["Assets/Sandbox/Play.unity"]);

    let cfg = config("Assets/Game", "Assets/Game/First.unity");
    generate_scene_menu(&mut host, &cfg).unwrap();

    assert_eq!(
        host.build_paths(),
        [
            "Assets/Game/First.unity",
            "Assets/Game/A.unity",
            "Assets/Game/B.unity",
            "Assets/Game/C.unity",
        ]
    );

    // Records see the synchronized list, not the old one.
    let source = host.output().unwrap();
    assert!(source.contains("Open_First_InBuild()"));
    assert!(!source.contains("Open_Play_InBuild()"));
}

#[test]
fn test_build_sync_failure_does_not_stop_generation() {
    let mut host = MockHost::with_scenes(&["Assets/Game/Main.unity"]);
    host.state.borrow_mut().fail_build_write = true;

    let outcome = generate_scene_menu(&mut host, &config("Assets/Game", "")).unwrap();
    assert!(matches!(outcome, GenerateOutcome::Written(_)));
    assert!(host.output().is_some());
    assert!(host.build_paths().is_empty());
}

#[test]
fn test_regeneration_is_deterministic_and_overwrites() {
    let scenes = [
        "Assets/Scenes/Main.unity",
        "Assets/Scenes/Debug Room.unity",
        "Assets/Other/Main.unity",
    ];
    let mut host = MockHost::with_scenes(&scenes);
    let cfg = config("Assets/Scenes", "Assets/Scenes/Main.unity");

    generate_scene_menu(&mut host, &cfg).unwrap();
    let first = host.output().unwrap();

    let GenerateOutcome::Written(report) = generate_scene_menu(&mut host, &cfg).unwrap() else {
        panic!("Expected Written");
    };
    assert!(report.overwritten);

    let state = host.state.borrow();
    assert_eq!(state.files.len(), 1);
    assert_eq!(state.files.get(Path::new(OUTPUT)), Some(&first));
    assert_eq!(state.file_writes, 2);
}

#[test]
fn test_missing_generator_is_error() {
    let mut host = MockHost::with_scenes(&["Assets/Main.unity"]);
    host.state.borrow_mut().generator = None;

    let err = generate_menu(&mut host).unwrap_err();
    assert!(matches!(err, MenuError::GeneratorNotFound(_)));
    assert!(host.output().is_none());
}

#[test]
fn test_unreadable_build_list_treated_as_empty() {
    let mut host = MockHost::with_scenes(&["Assets/Scenes/Main.unity"]);
    host.set_build(&["Assets/Scenes/Main.unity"]);
    host.state.borrow_mut().fail_build_read = true;

    let (outcome, levels) =
        capture_logs(|| generate_scene_menu(&mut host, &MenuConfig::default()));
    let report = match outcome.unwrap() {
        GenerateOutcome::Written(report) => report,
        other => panic!("Expected Written, got {:?}", other),
    };
    assert_eq!(report.method_count, 2);
    assert!(!host.output().unwrap().contains("Open_Main_InBuild"));
    assert_eq!(count(&levels, Level::Error), 1);
}

#[test]
fn test_invalid_scene_logs_one_error() {
    let mut host = MockHost::with_scenes(&["Assets/!!!.unity", "Assets/Main.unity"]);

    let (outcome, levels) =
        capture_logs(|| generate_scene_menu(&mut host, &MenuConfig::default()));
    assert!(matches!(outcome.unwrap(), GenerateOutcome::Written(_)));
    assert_eq!(count(&levels, Level::Error), 1);
    assert_eq!(count(&levels, Level::Warn), 0);
}

#[test]
fn test_empty_discovery_logs_one_warning() {
    let mut host = MockHost::with_scenes(&[]);

    let (outcome, levels) =
        capture_logs(|| generate_scene_menu(&mut host, &MenuConfig::default()));
    assert_eq!(outcome.unwrap(), GenerateOutcome::NoScenes);
    assert_eq!(count(&levels, Level::Warn), 1);
    assert_eq!(count(&levels, Level::Error), 0);
    assert!(host.output().is_none());
}

#[test]
fn test_build_sync_failure_logs_error() {
    let mut host = MockHost::with_scenes(&["Assets/Game/Main.unity"]);
    host.state.borrow_mut().fail_build_write = true;

    let (outcome, levels) =
        capture_logs(|| generate_scene_menu(&mut host, &config("Assets/Game", "")));
    assert!(matches!(outcome.unwrap(), GenerateOutcome::Written(_)));
    assert_eq!(count(&levels, Level::Error), 1);
}
