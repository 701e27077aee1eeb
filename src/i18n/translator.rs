// SPDX-License-Identifier: MPL-2.0
use crate::config;
use crate::dom::Document;
use crate::i18n::catalog::Catalog;
use std::path::PathBuf;

/// Language selected when no preference has been persisted yet.
pub const DEFAULT_LANG: &str = "zh";

/// Language whose table is consulted when the current one lacks a key.
pub const FALLBACK_LANG: &str = "en";

/// Marker attribute whose value names the key for an element's text content.
pub const ATTR_TEXT: &str = "data-i18n";

/// Marker attribute whose value names the key for an input's placeholder.
pub const ATTR_PLACEHOLDER: &str = "data-i18n-placeholder";

const SWITCH_EN_ID: &str = "lang-en";
const SWITCH_ZH_ID: &str = "lang-zh";
const SWITCH_ACTIVE_CLASSES: [&str; 2] = ["text-indigo-600", "font-bold"];
const SWITCH_INACTIVE_CLASSES: [&str; 1] = ["text-gray-500"];

/// Notification delivered to subscribers after every language switch.
///
/// Listeners use this to refresh content the apply pass does not reach,
/// e.g. dynamically rendered service tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChanged {
    pub lang: String,
}

type Listener = Box<dyn Fn(&LanguageChanged)>;

/// Resolves message keys against the catalog and applies the results to a
/// document tree.
///
/// The translator owns the one piece of mutable i18n state, the current
/// language code. It is constructed once at startup by the owning
/// application; the code is initialized from the persisted preference and
/// only changes through [`Translator::set_language`]. Every lookup path has
/// a defined fallback, so translation never fails: a missing key degrades
/// to the key itself.
pub struct Translator {
    catalog: Catalog,
    lang: String,
    config_path: Option<PathBuf>,
    listeners: Vec<Listener>,
}

impl Translator {
    /// Creates a translator initialized from the persisted language
    /// preference, or [`DEFAULT_LANG`] if none was ever stored.
    pub fn new(catalog: Catalog) -> Self {
        let prefs = config::load().unwrap_or_default();
        Self::from_parts(catalog, prefs.language, None)
    }

    /// Like [`Translator::new`], but reads and writes the preference file at
    /// an explicit path instead of the platform config directory.
    pub fn with_config_path(catalog: Catalog, path: PathBuf) -> Self {
        let prefs = config::load_from_path(&path).unwrap_or_default();
        Self::from_parts(catalog, prefs.language, Some(path))
    }

    fn from_parts(catalog: Catalog, stored: Option<String>, config_path: Option<PathBuf>) -> Self {
        Self {
            catalog,
            lang: stored.unwrap_or_else(|| DEFAULT_LANG.to_string()),
            config_path,
            listeners: Vec::new(),
        }
    }

    /// The current language code.
    pub fn language(&self) -> &str {
        &self.lang
    }

    /// Registers a listener for [`LanguageChanged`] notifications.
    ///
    /// Listeners only observe the change; the language code itself is
    /// mutated exclusively through [`Translator::set_language`].
    pub fn on_language_changed<F>(&mut self, listener: F)
    where
        F: Fn(&LanguageChanged) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Switches to `code`, persists the selection, re-applies all visible
    /// translations to `document`, and notifies subscribers.
    ///
    /// The code is not validated against the known languages: an unknown
    /// code degrades gracefully through the lookup fallback. Always
    /// succeeds; repeated calls are safe and the last one wins.
    pub fn set_language(&mut self, code: &str, document: &mut Document) {
        self.lang = code.to_string();
        self.persist_language();
        self.apply(document);

        let event = LanguageChanged {
            lang: self.lang.clone(),
        };
        for listener in &self.listeners {
            listener(&event);
        }
    }

    fn persist_language(&self) {
        let mut prefs = match &self.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };
        prefs.language = Some(self.lang.clone());

        let result = match &self.config_path {
            Some(path) => config::save_to_path(&prefs, path),
            None => config::save(&prefs),
        };
        if let Err(error) = result {
            eprintln!("Failed to save language preference: {:?}", error);
        }
    }

    /// Translates `key` without placeholder parameters.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    /// Translates `key`, substituting `{name}` tokens from `params`.
    ///
    /// Resolution order: current language's table, then the
    /// [`FALLBACK_LANG`] table, then the raw key itself. Every occurrence of
    /// a token whose name appears in `params` is replaced; tokens without a
    /// matching parameter stay verbatim.
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self
            .catalog
            .template(&self.lang, key)
            .or_else(|| self.catalog.template(FALLBACK_LANG, key))
            .unwrap_or(key);

        let mut text = template.to_string();
        for (name, value) in params {
            let token = format!("{{{}}}", name);
            text = text.replace(&token, value);
        }
        text
    }

    /// Applies the current language to every marked element in `document`.
    ///
    /// Elements carrying [`ATTR_TEXT`] get their text content replaced,
    /// elements carrying [`ATTR_PLACEHOLDER`] get their placeholder text
    /// replaced, and the two-control language switch (when present) is
    /// restyled to mark the current language active. Idempotent.
    pub fn apply(&self, document: &mut Document) {
        document.walk_mut(&mut |element| {
            if let Some(key) = element.attribute(ATTR_TEXT).map(str::to_owned) {
                element.set_text(self.translate(&key));
            }
            if let Some(key) = element.attribute(ATTR_PLACEHOLDER).map(str::to_owned) {
                element.set_placeholder(self.translate(&key));
            }
        });

        self.update_language_switch(document);
    }

    /// Restyles the `lang-en` / `lang-zh` switch controls. Both controls
    /// must be present, matching the markup contract of the dashboard pages.
    fn update_language_switch(&self, document: &mut Document) {
        if document.element_by_id(SWITCH_EN_ID).is_none()
            || document.element_by_id(SWITCH_ZH_ID).is_none()
        {
            return;
        }

        let active_id = if self.lang == "en" {
            SWITCH_EN_ID
        } else {
            SWITCH_ZH_ID
        };

        for id in [SWITCH_EN_ID, SWITCH_ZH_ID] {
            if let Some(control) = document.element_by_id_mut(id) {
                if id == active_id {
                    for class in SWITCH_ACTIVE_CLASSES {
                        control.add_class(class);
                    }
                    for class in SWITCH_INACTIVE_CLASSES {
                        control.remove_class(class);
                    }
                } else {
                    for class in SWITCH_ACTIVE_CLASSES {
                        control.remove_class(class);
                    }
                    for class in SWITCH_INACTIVE_CLASSES {
                        control.add_class(class);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use tempfile::{tempdir, TempDir};

    fn temp_translator() -> (Translator, TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        (Translator::with_config_path(Catalog::load(), path), dir)
    }

    fn login_document() -> Document {
        Document::new(
            Element::new()
                .with_child(
                    Element::new()
                        .with_id("signin-button")
                        .with_attribute(ATTR_TEXT, "sign_in"),
                )
                .with_child(
                    Element::new()
                        .with_id("username-input")
                        .with_attribute(ATTR_PLACEHOLDER, "username"),
                )
                .with_child(Element::new().with_id("lang-en").with_class("text-gray-500"))
                .with_child(Element::new().with_id("lang-zh")),
        )
    }

    #[test]
    fn starts_in_chinese_when_no_preference_persisted() {
        let (translator, _dir) = temp_translator();
        assert_eq!(translator.language(), DEFAULT_LANG);
    }

    #[test]
    fn returns_stored_template_for_known_pair() {
        let (translator, _dir) = temp_translator();
        assert_eq!(translator.translate("sign_in"), "登录");
        assert_eq!(translator.translate("services"), "服务列表");
    }

    #[test]
    fn falls_back_to_english_when_current_language_lacks_key() {
        let mut en = HashMap::new();
        en.insert("only_in_english".to_string(), "English only".to_string());
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), en);
        tables.insert("zh".to_string(), HashMap::new());

        let dir = tempdir().expect("failed to create temp dir");
        let translator = Translator::with_config_path(
            Catalog::from_tables(tables),
            dir.path().join("settings.toml"),
        );

        assert_eq!(translator.language(), "zh");
        assert_eq!(translator.translate("only_in_english"), "English only");
    }

    #[test]
    fn returns_key_when_absent_everywhere() {
        let (translator, _dir) = temp_translator();
        assert_eq!(translator.translate("no_such_key"), "no_such_key");
    }

    #[test]
    fn unknown_language_degrades_to_fallback_table() {
        let (mut translator, _dir) = temp_translator();
        let mut doc = Document::default();
        translator.set_language("fr", &mut doc);
        assert_eq!(translator.translate("sign_in"), "Sign In");
    }

    #[test]
    fn substitutes_named_placeholder_in_chinese() {
        let (translator, _dir) = temp_translator();
        assert_eq!(
            translator.translate_with("confirm_start", &[("name", "web")]),
            "确定要启动服务 \"web\" 吗？"
        );
    }

    #[test]
    fn substitutes_named_placeholder_in_english() {
        let (mut translator, _dir) = temp_translator();
        let mut doc = Document::default();
        translator.set_language("en", &mut doc);
        assert_eq!(
            translator.translate_with("confirm_start", &[("name", "web")]),
            "Are you sure you want to start service \"web\"?"
        );
    }

    #[test]
    fn leaves_unmatched_tokens_verbatim() {
        let (translator, _dir) = temp_translator();
        assert_eq!(
            translator.translate("confirm_stop"),
            "确定要停止服务 \"{name}\" 吗？"
        );
    }

    #[test]
    fn replaces_every_occurrence_of_a_token() {
        let mut en = HashMap::new();
        en.insert(
            "rename".to_string(),
            "Rename {name} to {name}-backup?".to_string(),
        );
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), en);

        let dir = tempdir().expect("failed to create temp dir");
        let mut translator = Translator::with_config_path(
            Catalog::from_tables(tables),
            dir.path().join("settings.toml"),
        );
        let mut doc = Document::default();
        translator.set_language("en", &mut doc);

        assert_eq!(
            translator.translate_with("rename", &[("name", "web")]),
            "Rename web to web-backup?"
        );
    }

    #[test]
    fn apply_rewrites_text_and_placeholder_markers() {
        let (translator, _dir) = temp_translator();
        let mut doc = login_document();
        translator.apply(&mut doc);

        assert_eq!(doc.element_by_id("signin-button").unwrap().text(), "登录");
        assert_eq!(
            doc.element_by_id("username-input").unwrap().placeholder(),
            Some("用户名")
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let (translator, _dir) = temp_translator();
        let mut doc = login_document();

        translator.apply(&mut doc);
        let first = doc.clone();
        translator.apply(&mut doc);

        assert_eq!(doc, first);
    }

    #[test]
    fn apply_marks_current_language_control_active() {
        let (mut translator, _dir) = temp_translator();
        let mut doc = login_document();
        translator.apply(&mut doc);

        let zh_control = doc.element_by_id("lang-zh").unwrap();
        assert!(zh_control.has_class("text-indigo-600"));
        assert!(zh_control.has_class("font-bold"));
        assert!(!zh_control.has_class("text-gray-500"));

        let en_control = doc.element_by_id("lang-en").unwrap();
        assert!(!en_control.has_class("text-indigo-600"));
        assert!(en_control.has_class("text-gray-500"));

        translator.set_language("en", &mut doc);

        let en_control = doc.element_by_id("lang-en").unwrap();
        assert!(en_control.has_class("text-indigo-600"));
        assert!(!en_control.has_class("text-gray-500"));
        let zh_control = doc.element_by_id("lang-zh").unwrap();
        assert!(!zh_control.has_class("text-indigo-600"));
        assert!(zh_control.has_class("text-gray-500"));
    }

    #[test]
    fn apply_skips_switch_styling_when_a_control_is_missing() {
        let (translator, _dir) = temp_translator();
        let mut doc = Document::new(
            Element::new().with_child(Element::new().with_id("lang-en").with_class("text-gray-500")),
        );
        translator.apply(&mut doc);

        // Only one control present: styling is left untouched
        let en_control = doc.element_by_id("lang-en").unwrap();
        assert!(en_control.has_class("text-gray-500"));
        assert!(!en_control.has_class("text-indigo-600"));
    }

    #[test]
    fn set_language_persists_selection() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let mut translator = Translator::with_config_path(Catalog::load(), path.clone());
        let mut doc = Document::default();
        translator.set_language("en", &mut doc);

        let prefs = config::load_from_path(&path).expect("failed to load preferences");
        assert_eq!(prefs.language, Some("en".to_string()));
    }

    #[test]
    fn fresh_translator_restores_persisted_language() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let mut translator = Translator::with_config_path(Catalog::load(), path.clone());
        let mut doc = Document::default();
        translator.set_language("en", &mut doc);
        drop(translator);

        // Simulates a page reload: a fresh translator picks up the stored code
        let reloaded = Translator::with_config_path(Catalog::load(), path);
        assert_eq!(reloaded.language(), "en");
        assert_eq!(reloaded.translate("sign_in"), "Sign In");
    }

    #[test]
    fn set_language_dispatches_exactly_one_notification() {
        let (mut translator, _dir) = temp_translator();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        translator.on_language_changed(move |event| {
            sink.borrow_mut().push(event.lang.clone());
        });

        let mut doc = Document::default();
        translator.set_language("en", &mut doc);
        assert_eq!(*seen.borrow(), ["en".to_string()]);

        translator.set_language("zh", &mut doc);
        assert_eq!(*seen.borrow(), ["en".to_string(), "zh".to_string()]);
    }

    #[test]
    fn every_listener_receives_the_notification() {
        let (mut translator, _dir) = temp_translator();
        let count = Rc::new(RefCell::new(0));

        for _ in 0..2 {
            let sink = Rc::clone(&count);
            translator.on_language_changed(move |_| *sink.borrow_mut() += 1);
        }

        let mut doc = Document::default();
        translator.set_language("en", &mut doc);
        assert_eq!(*count.borrow(), 2);
    }
}
