use super::*;

fn builtin() -> &'static Catalog {
    Catalog::builtin().unwrap()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_selection_is_empty() {
    let s = Selection::default();
    assert_eq!(s.category(), "");
    assert_eq!(s.languages().count(), 0);
}

#[test]
fn for_catalog_picks_first_category_and_all_languages() {
    let s = Selection::for_catalog(builtin());
    assert_eq!(s.category(), "Basics");
    for language in builtin().languages() {
        assert!(s.is_language_selected(language), "{language}");
    }
    assert_eq!(s.languages().count(), 6);
}

#[test]
fn for_empty_catalog_has_no_category() {
    let s = Selection::for_catalog(&Catalog::default());
    assert_eq!(s, Selection::default());
}

// =============================================================
// Commands
// =============================================================

#[test]
fn toggle_twice_restores_languages() {
    let original = Selection::for_catalog(builtin());
    for language in ["Rust", "Cobol"] {
        let mut s = original.clone();
        s.toggle_language(language);
        assert_ne!(s, original);
        s.toggle_language(language);
        assert_eq!(s, original);
    }
}

#[test]
fn toggle_removes_then_adds() {
    let mut s = Selection::new("Basics", ["Rust"]);
    s.toggle_language("Rust");
    assert!(!s.is_language_selected("Rust"));
    s.toggle_language("Go");
    assert!(s.is_language_selected("Go"));
    assert_eq!(s.languages().collect::<Vec<_>>(), vec!["Go"]);
}

#[test]
fn set_category_replaces_unconditionally() {
    let mut s = Selection::for_catalog(builtin());
    s.set_category("Control Flow");
    assert_eq!(s.category(), "Control Flow");
    s.set_category("Nonexistent");
    assert_eq!(s.category(), "Nonexistent");
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn visible_examples_follow_category() {
    let mut s = Selection::for_catalog(builtin());
    let ids: Vec<&str> = s.visible_examples(builtin()).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["variables", "functions"]);

    s.set_category("Control Flow");
    let ids: Vec<&str> = s.visible_examples(builtin()).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["loops"]);
}

#[test]
fn unknown_category_yields_empty_view() {
    let s = Selection::new("Nonexistent", ["Rust"]);
    assert!(s.visible_examples(builtin()).is_empty());
    assert!(s.view(builtin()).is_empty());
}

#[test]
fn single_language_selection_isolates_that_language() {
    let all = builtin().languages();
    for example in builtin().examples() {
        for language in &all {
            let s = Selection::new(example.category.clone(), [*language]);
            let visible = s.visible_languages(example);
            if example.variant(language).is_some() {
                assert_eq!(visible, vec![*language], "{} / {language}", example.id);
            } else {
                assert!(visible.is_empty(), "{} / {language}", example.id);
            }
        }
    }
}

#[test]
fn visible_languages_keep_authored_order() {
    let example = builtin().example("functions").unwrap();
    let s = Selection::new("Basics", ["TypeScript", "Python", "Go"]);
    assert_eq!(s.visible_languages(example), vec!["Python", "Go", "TypeScript"]);
}

#[test]
fn basics_with_python_and_rust() {
    let mut s = Selection::new("Basics", ["Python", "Rust"]);
    s.set_category("Basics");
    let view = s.view(builtin());
    let variables: Vec<&ExampleView> = view.iter().filter(|v| v.id == "variables").collect();
    assert_eq!(variables.len(), 1);
    let tabs: Vec<&str> = variables[0].tabs.iter().map(|t| t.language.as_str()).collect();
    assert_eq!(tabs, vec!["Python", "Rust"]);
}

#[test]
fn variables_only_catalog_yields_one_example_with_two_tabs() {
    let source = r"
examples:
  - id: variables
    title: Variable Declaration
    description: How to declare and initialize variables
    category: Basics
    languages:
      - { language: Python, code: 'x = 1' }
      - { language: JavaScript, code: 'let x = 1;' }
      - { language: TypeScript, code: 'let x: number = 1;' }
      - { language: Rust, code: 'let x = 1;' }
      - { language: Go, code: 'x := 1' }
      - { language: Java, code: 'int x = 1;' }
";
    let catalog = Catalog::from_yaml(source).unwrap();
    let s = Selection::new("Basics", ["Rust", "Python"]);
    let view = s.view(&catalog);
    assert_eq!(view.len(), 1);
    let tabs: Vec<&str> = view[0].tabs.iter().map(|t| t.language.as_str()).collect();
    assert_eq!(tabs, vec!["Python", "Rust"]);
}

#[test]
fn empty_language_set_renders_examples_without_tabs() {
    let s = Selection::new("Basics", Vec::<String>::new());
    let view = s.view(builtin());
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|v| v.tabs.is_empty()));
}

#[test]
fn tab_views_carry_variant_content() {
    let example = builtin().example("loops").unwrap();
    let s = Selection::new("Control Flow", ["Go"]);
    let tabs = s.tab_views(example);
    assert_eq!(tabs.len(), 1);
    let go = example.variant("Go").unwrap();
    assert_eq!(tabs[0].html, go.html);
    assert_eq!(tabs[0].explanation, go.explanation);
    assert_eq!(tabs[0].compilable, go.compilable);
}

#[test]
fn view_copies_example_metadata() {
    let s = Selection::for_catalog(builtin());
    let view = s.view(builtin());
    assert_eq!(view[0].title, "Variable Declaration");
    assert_eq!(view[0].description, "How to declare and initialize variables");
}

#[test]
fn example_view_tracks_language_toggles() {
    let example = builtin().example("functions").unwrap();
    let mut s = Selection::new("Control Flow", ["Go", "Rust"]);
    let tabs = |v: ExampleView| v.tabs.into_iter().map(|t| t.language).collect::<Vec<_>>();
    assert_eq!(tabs(s.example_view(example)), vec!["Rust", "Go"]);

    s.toggle_language("Rust");
    let view = s.example_view(example);
    assert_eq!(view.id, "functions");
    assert_eq!(tabs(view), vec!["Go"]);
}
