//! Choosing the JUnit runner class before synthesis
//!
//! Prompting and persisting are side effects, so they happen here and the
//! synthesizer only ever sees the outcome.

use crate::{
    build_system::BuildSystemKind,
    error::Result,
    interfaces::{ConfigStore, RunnerPrompt},
};

const PROMPT_TITLE: &str = "Karate Runner";

/// Runner class for the upcoming run, or `None` when the user cancelled or no
/// default is configured.
///
/// Only Maven and Gradle runs on the normal (non-override) path need one;
/// everything else gets `None` without prompting.
pub fn resolve_runner_class(
    kind: BuildSystemKind,
    store: &mut dyn ConfigStore,
    prompt: &mut dyn RunnerPrompt,
) -> Result<Option<String>> {
    let config = store.config();
    if !kind.uses_runner_class() || config.karate_cli.override_karate_runner {
        return Ok(None);
    }

    let stored_default = config.karate_runner.default.clone().unwrap_or_default();

    if !config.karate_runner.prompt_to_specify {
        return Ok(non_empty(stored_default));
    }

    let Some(answer) = prompt.prompt_text(PROMPT_TITLE, &stored_default) else {
        tracing::debug!("Runner class prompt cancelled");
        return Ok(None);
    };

    let answer = answer.trim().to_string();
    if answer.is_empty() {
        return Ok(None);
    }

    if answer != stored_default {
        store.set_runner_default(&answer)?;
    }
    Ok(Some(answer))
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, services::JsonConfigStore};

    struct ScriptedPrompt {
        answer: Option<String>,
        asked: Vec<(String, String)>,
    }

    impl ScriptedPrompt {
        fn answering(answer: Option<&str>) -> Self {
            Self {
                answer: answer.map(str::to_string),
                asked: Vec::new(),
            }
        }
    }

    impl RunnerPrompt for ScriptedPrompt {
        fn prompt_text(&mut self, title: &str, default: &str) -> Option<String> {
            self.asked.push((title.to_string(), default.to_string()));
            self.answer.clone()
        }
    }

    fn prompting_store() -> JsonConfigStore {
        let mut config = Config::default();
        config.karate_runner.prompt_to_specify = true;
        JsonConfigStore::in_memory(config)
    }

    #[test]
    fn test_stored_default_without_prompt() {
        let mut store = JsonConfigStore::in_memory(Config::default());
        let mut prompt = ScriptedPrompt::answering(Some("Ignored"));

        let runner = resolve_runner_class(BuildSystemKind::Maven, &mut store, &mut prompt).unwrap();

        assert_eq!(runner.as_deref(), Some("TestRunner"));
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_prompt_answer_becomes_new_default() {
        let mut store = prompting_store();
        let mut prompt = ScriptedPrompt::answering(Some("UsersRunner"));

        let runner =
            resolve_runner_class(BuildSystemKind::GradleKotlin, &mut store, &mut prompt).unwrap();

        assert_eq!(runner.as_deref(), Some("UsersRunner"));
        assert_eq!(
            prompt.asked,
            vec![("Karate Runner".to_string(), "TestRunner".to_string())]
        );
        assert_eq!(
            store.config().karate_runner.default.as_deref(),
            Some("UsersRunner")
        );
    }

    #[test]
    fn test_cancelled_or_blank_prompt_aborts() {
        let mut store = prompting_store();

        let mut cancelled = ScriptedPrompt::answering(None);
        assert_eq!(
            resolve_runner_class(BuildSystemKind::Maven, &mut store, &mut cancelled).unwrap(),
            None
        );

        let mut blank = ScriptedPrompt::answering(Some("   "));
        assert_eq!(
            resolve_runner_class(BuildSystemKind::Maven, &mut store, &mut blank).unwrap(),
            None
        );
        assert_eq!(store.config().karate_runner.default.as_deref(), Some("TestRunner"));
    }

    #[test]
    fn test_empty_default_is_unresolved() {
        let mut config = Config::default();
        config.karate_runner.default = Some(String::new());
        let mut store = JsonConfigStore::in_memory(config);
        let mut prompt = ScriptedPrompt::answering(None);

        assert_eq!(
            resolve_runner_class(BuildSystemKind::Maven, &mut store, &mut prompt).unwrap(),
            None
        );
    }

    #[test]
    fn test_no_prompt_for_jar_node_or_override() {
        let mut store = prompting_store();
        let mut prompt = ScriptedPrompt::answering(Some("X"));

        for kind in [BuildSystemKind::StandaloneJar, BuildSystemKind::NodePackage] {
            assert_eq!(resolve_runner_class(kind, &mut store, &mut prompt).unwrap(), None);
        }

        let mut config = store.config().clone();
        config.karate_cli.override_karate_runner = true;
        let mut store = JsonConfigStore::in_memory(config);
        assert_eq!(
            resolve_runner_class(BuildSystemKind::Maven, &mut store, &mut prompt).unwrap(),
            None
        );

        assert!(prompt.asked.is_empty());
    }
}
