use crate::template::{csharp_string_literal, fill, Slot};
use crate::types::Scene;

/// Opens the scene, replacing the active scenes.
const TEMPLATE_LOAD: &str = r#"
        [MenuItem( #SCENEMENU#, false, #PRIORITY# )]
        static void Open_#SCENENAME#() {
            if ( EditorSceneManager.SaveCurrentModifiedScenesIfUserWantsTo() ) {
                EditorSceneManager.OpenScene( #SCENEPATH#, OpenSceneMode.Single );
            }
        }
"#;

/// Opens the scene additively, keeping the active scenes.
const TEMPLATE_ADD: &str = r#"
        [MenuItem( #SCENEMENU#, false, #PRIORITY# )]
        static void Open_#SCENENAME#() {
            if ( EditorSceneManager.SaveCurrentModifiedScenesIfUserWantsTo() ) {
                EditorSceneManager.OpenScene( #SCENEPATH#, OpenSceneMode.Additive );
            }
        }
"#;

/// One kind of generated "open scene" menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Additive open under `Scenes/Add Scene`.
    Add,
    /// Single open under `Scenes/Load Scene/Scene`.
    Load,
    /// Single open under `Scenes/Load Scene/Test`, for test scenes only.
    Test,
    /// Single open under `Scenes/Load Scene/Build`, for build-list scenes only.
    InBuild,
}

impl MenuAction {
    /// All actions, in emission order.
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Add,
        MenuAction::Load,
        MenuAction::Test,
        MenuAction::InBuild,
    ];

    /// Menu folder the action is listed under.
    pub fn menu_category(self) -> &'static str {
        match self {
            MenuAction::Add => "Scenes/Add Scene",
            MenuAction::Load => "Scenes/Load Scene/Scene",
            MenuAction::Test => "Scenes/Load Scene/Test",
            MenuAction::InBuild => "Scenes/Load Scene/Build",
        }
    }

    /// `MenuItem` priority; groups entries in the host menu.
    pub fn priority(self) -> u32 {
        match self {
            MenuAction::Add => 12,
            MenuAction::Load | MenuAction::Test => 23,
            MenuAction::InBuild => 34,
        }
    }

    /// Suffix appended to the scene name in the generated function name.
    pub fn suffix(self) -> &'static str {
        match self {
            MenuAction::Add => "_Add",
            MenuAction::Load => "",
            MenuAction::Test => "_Test",
            MenuAction::InBuild => "_InBuild",
        }
    }

    fn template(self) -> &'static str {
        match self {
            MenuAction::Add => TEMPLATE_ADD,
            MenuAction::Load | MenuAction::Test | MenuAction::InBuild => TEMPLATE_LOAD,
        }
    }

    /// Whether this action is generated for `scene`.
    pub fn applies_to(self, scene: &Scene) -> bool {
        match self {
            MenuAction::Add | MenuAction::Load => true,
            MenuAction::Test => scene.is_test,
            MenuAction::InBuild => scene.in_build,
        }
    }
}

/// Actions generated for `scene`, in emission order.
pub fn actions_for(scene: &Scene) -> impl Iterator<Item = MenuAction> + '_ {
    MenuAction::ALL
        .into_iter()
        .filter(move |action| action.applies_to(scene))
}

/// Render one action block for `scene`.
///
/// The menu label uses the bare scene name; only the function identifier
/// carries the action suffix.
pub fn emit_method(scene: &Scene, action: MenuAction) -> String {
    let menu = csharp_string_literal(&format!(
        "{}/{}",
        action.menu_category(),
        scene.scene_name
    ));
    let name = format!("{}{}", scene.scene_name, action.suffix());
    let path = csharp_string_literal(&scene.path);
    let priority = action.priority().to_string();

    fill(
        action.template(),
        &[
            (Slot::Menu, menu.as_str()),
            (Slot::Name, name.as_str()),
            (Slot::Path, path.as_str()),
            (Slot::Priority, priority.as_str()),
        ],
    )
}

/// Render every action block for one scene (2 to 4 blocks).
pub fn emit_scene_methods(scene: &Scene) -> String {
    actions_for(scene)
        .map(|action| emit_method(scene, action))
        .collect()
}

/// Render the action blocks for all scenes, in record order.
pub fn emit_methods(scenes: &[Scene]) -> String {
    scenes.iter().map(emit_scene_methods).collect()
}

/// Number of action blocks `emit_methods` produces for `scenes`.
pub fn method_count(scenes: &[Scene]) -> usize {
    scenes.iter().map(|scene| actions_for(scene).count()).sum()
}
