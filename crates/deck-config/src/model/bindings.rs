//! Key bindings

use deck_schema::{FieldSpec, ObjectSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// `(action, default keys, description)`
const ACTIONS: &[(&str, &[&str], &str)] = &[
    (
        "next",
        &["l", "j", "<right>", "<page_down>", "<down>", " "],
        "The keys that cause the presentation to move forwards.",
    ),
    (
        "next_fast",
        &["n"],
        "The keys that cause the presentation to jump to the next slide, skipping pauses.",
    ),
    (
        "previous",
        &["h", "k", "<left>", "<page_up>", "<up>"],
        "The keys that cause the presentation to move backwards.",
    ),
    (
        "previous_fast",
        &["p"],
        "The keys that cause the presentation to jump to the previous slide, skipping pauses.",
    ),
    ("first_slide", &["gg"], "The key binding to jump to the first slide."),
    ("last_slide", &["G"], "The key binding to jump to the last slide."),
    ("go_to_slide", &["<number>G"], "The key binding to jump to a specific slide."),
    ("execute_code", &["<c-e>"], "The key binding to execute a piece of shell code."),
    ("reload", &["<c-r>"], "The key binding to reload the presentation."),
    ("toggle_slide_index", &["<c-p>"], "The key binding to toggle the slide index modal."),
    ("toggle_bindings", &["?"], "The key binding to toggle the key bindings modal."),
    ("toggle_layout_grid", &["T"], "The key binding to toggle the layout grid."),
    ("close_modal", &["<esc>"], "The key binding to close the currently open modal."),
    ("exit", &["<c-c>", "q"], "The key binding to close the application."),
    ("suspend", &["<c-z>"], "The key binding to suspend the application."),
    ("skip_pauses", &["s"], "The key binding to show the entire slide, skipping any pauses."),
];

fn keys(action: &str) -> Vec<String> {
    ACTIONS
        .iter()
        .find(|(name, _, _)| *name == action)
        .map(|(_, keys, _)| keys.iter().map(|key| key.to_string()).collect())
        .unwrap_or_default()
}

/// Keys bound to each presentation action.
///
/// Key strings are opaque at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindingsConfig {
    pub next: Vec<String>,
    pub next_fast: Vec<String>,
    pub previous: Vec<String>,
    pub previous_fast: Vec<String>,
    pub first_slide: Vec<String>,
    pub last_slide: Vec<String>,
    pub go_to_slide: Vec<String>,
    pub execute_code: Vec<String>,
    pub reload: Vec<String>,
    pub toggle_slide_index: Vec<String>,
    pub toggle_bindings: Vec<String>,
    pub toggle_layout_grid: Vec<String>,
    pub close_modal: Vec<String>,
    pub exit: Vec<String>,
    pub suspend: Vec<String>,
    pub skip_pauses: Vec<String>,
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        Self {
            next: keys("next"),
            next_fast: keys("next_fast"),
            previous: keys("previous"),
            previous_fast: keys("previous_fast"),
            first_slide: keys("first_slide"),
            last_slide: keys("last_slide"),
            go_to_slide: keys("go_to_slide"),
            execute_code: keys("execute_code"),
            reload: keys("reload"),
            toggle_slide_index: keys("toggle_slide_index"),
            toggle_bindings: keys("toggle_bindings"),
            toggle_layout_grid: keys("toggle_layout_grid"),
            close_modal: keys("close_modal"),
            exit: keys("exit"),
            suspend: keys("suspend"),
            skip_pauses: keys("skip_pauses"),
        }
    }
}

impl KeyBindingsConfig {
    /// Keys bound to an action by its configuration name.
    pub fn get(&self, action: &str) -> Option<&[String]> {
        let keys = match action {
            "next" => &self.next,
            "next_fast" => &self.next_fast,
            "previous" => &self.previous,
            "previous_fast" => &self.previous_fast,
            "first_slide" => &self.first_slide,
            "last_slide" => &self.last_slide,
            "go_to_slide" => &self.go_to_slide,
            "execute_code" => &self.execute_code,
            "reload" => &self.reload,
            "toggle_slide_index" => &self.toggle_slide_index,
            "toggle_bindings" => &self.toggle_bindings,
            "toggle_layout_grid" => &self.toggle_layout_grid,
            "close_modal" => &self.close_modal,
            "exit" => &self.exit,
            "suspend" => &self.suspend,
            "skip_pauses" => &self.skip_pauses,
            _ => return None,
        };
        Some(keys)
    }

    /// Every action name with its bound keys, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        ACTIONS
            .iter()
            .filter_map(|(action, _, _)| self.get(action).map(|keys| (*action, keys)))
    }

    /// Actions that share at least one key with another action.
    pub fn conflicts(&self) -> Vec<(&'static str, &'static str, String)> {
        let mut conflicts = Vec::new();
        let bound: Vec<_> = self.iter().collect();
        for (i, (first, first_keys)) in bound.iter().enumerate() {
            for (second, second_keys) in &bound[i + 1..] {
                for key in first_keys.iter().filter(|key| second_keys.contains(key)) {
                    conflicts.push((*first, *second, key.clone()));
                }
            }
        }
        conflicts
    }
}

pub(crate) fn schema() -> Schema {
    let object = ACTIONS.iter().fold(
        ObjectSchema::new("KeyBindingsConfig"),
        |object, (action, keys, description)| {
            object.field(
                *action,
                FieldSpec::optional(Schema::array_of(Schema::string()))
                    .with_default(json!(keys))
                    .describe(*description),
            )
        },
    );
    Schema::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindingsConfig::default();
        assert_eq!(bindings.exit, vec!["<c-c>", "q"]);
        assert_eq!(bindings.next.last().map(String::as_str), Some(" "));
        assert_eq!(bindings.iter().count(), 16);
    }

    #[test]
    fn test_get_unknown_action() {
        assert!(KeyBindingsConfig::default().get("explode").is_none());
    }

    #[test]
    fn test_default_bindings_do_not_conflict() {
        assert!(KeyBindingsConfig::default().conflicts().is_empty());
    }

    #[test]
    fn test_conflicts_are_reported() {
        let bindings = KeyBindingsConfig {
            reload: vec!["q".into()],
            ..Default::default()
        };
        assert_eq!(bindings.conflicts(), vec![("reload", "exit", "q".to_string())]);
    }
}
