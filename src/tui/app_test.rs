use super::*;
use crate::badge::BadgeMetric;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn model_with(input: &str) -> Model {
    Model::new(&Config::default(), input.to_string())
}

fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        update(model, Msg::Input(c));
    }
}

// =========================================================================
// key_to_msg
// =========================================================================

#[test]
fn test_key_to_msg_quit() {
    assert_eq!(key_to_msg(key(KeyCode::Esc)), Some(Msg::Quit));
    assert_eq!(key_to_msg(ctrl('c')), Some(Msg::Quit));
}

#[test]
fn test_key_to_msg_q_is_text_input() {
    assert_eq!(key_to_msg(key(KeyCode::Char('q'))), Some(Msg::Input('q')));
}

#[test]
fn test_key_to_msg_toggle() {
    assert_eq!(key_to_msg(key(KeyCode::Tab)), Some(Msg::ToggleFormat));
    assert_eq!(key_to_msg(key(KeyCode::BackTab)), Some(Msg::ToggleFormat));
}

#[test]
fn test_key_to_msg_editing() {
    assert_eq!(key_to_msg(key(KeyCode::Backspace)), Some(Msg::Backspace));
    assert_eq!(key_to_msg(ctrl('u')), Some(Msg::Clear));
    assert_eq!(key_to_msg(ctrl('x')), None);
    assert_eq!(key_to_msg(key(KeyCode::Up)), None);
}

// =========================================================================
// update
// =========================================================================

#[test]
fn test_initial_state_uses_fallback() {
    let model = model_with("");
    assert_eq!(model.format, OutputFormat::Html);
    assert_eq!(model.source().identifier, "854152902511629627");
    assert_eq!(model.snippets().len(), 2);
}

#[test]
fn test_typing_updates_identifier() {
    let mut model = model_with("");
    type_text(&mut model, "https://www.figma.com/community/plugin/77/Seven");

    assert_eq!(model.source().identifier, "77");
    assert!(model.snippets()[0].code.contains("/api/installs/77"));
}

#[test]
fn test_partial_input_hides_snippets() {
    let mut model = model_with("");
    type_text(&mut model, "https://www.fig");

    assert!(!model.source().has_identifier());
    assert!(model.snippets().is_empty());
}

#[test]
fn test_invalid_input_hides_snippets() {
    let mut model = model_with("not a url");
    assert!(model.snippets().is_empty());

    // 全削除すると再びフォールバックが表示される
    update(&mut model, Msg::Clear);
    assert_eq!(model.snippets().len(), 2);
}

#[test]
fn test_backspace_on_empty_input() {
    let mut model = model_with("");
    update(&mut model, Msg::Backspace);

    assert!(model.input.is_empty());
    assert!(model.source().has_identifier());
}

#[test]
fn test_toggle_format_round_trip() {
    let mut model = model_with("");
    let original = model.snippets();

    update(&mut model, Msg::ToggleFormat);
    assert_eq!(model.format, OutputFormat::Markdown);
    assert!(model.snippets()[0].code.starts_with("[![]("));

    update(&mut model, Msg::ToggleFormat);
    assert_eq!(model.format, OutputFormat::Html);
    assert_eq!(model.snippets(), original);
}

#[test]
fn test_snippet_order() {
    let model = model_with("");
    let metrics: Vec<BadgeMetric> = model.snippets().iter().map(|s| s.metric).collect();
    assert_eq!(metrics, vec![BadgeMetric::Installs, BadgeMetric::Likes]);
}

#[test]
fn test_quit() {
    let mut model = model_with("");
    update(&mut model, Msg::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_default_format_from_config() {
    let config = Config {
        default_format: OutputFormat::Markdown,
        ..Config::default()
    };
    let model = Model::new(&config, String::new());
    assert_eq!(model.format, OutputFormat::Markdown);
}

#[test]
fn test_space_only_input_hides_snippets() {
    let mut model = model_with("");
    update(&mut model, Msg::Input(' '));

    assert!(!model.source().has_identifier());
    assert!(model.snippets().is_empty());
}
