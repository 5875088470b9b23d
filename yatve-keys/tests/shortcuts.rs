use yatve_engine::{Choice, Command, Editor, Effect};
use yatve_keys::{InputHandler, Key, KeyEvent};

/// Feeds one Control+key chord through the handler into the editor.
fn chord(input: &mut InputHandler, editor: &mut Editor<String>, c: char) -> Effect {
    input.handle(KeyEvent::Pressed(Key::Control));
    let command = input.handle(KeyEvent::Pressed(Key::Character(c)));
    input.handle(KeyEvent::Released(Key::Character(c)));
    input.handle(KeyEvent::Released(Key::Control));

    command.map_or(Effect::None, |command| editor.apply(command))
}

fn type_text(editor: &mut Editor<String>, text: &str) {
    editor.view_mut().push_str(text);
    editor.mark_modified();
}

#[test]
fn new_switch_and_remove_with_shortcuts() {
    let mut input = InputHandler::new();
    let mut editor = Editor::new(String::new());
    assert_eq!(editor.title(), "Untitled");

    type_text(&mut editor, "hello");
    assert_eq!(editor.title(), "• Untitled");

    chord(&mut input, &mut editor, 'n');
    assert_eq!(editor.buffers().len(), 2);
    assert_eq!(editor.buffers().index(), 1);
    assert_eq!(editor.view(), "");
    let second = editor.current().id;

    chord(&mut input, &mut editor, '1');
    assert_eq!(editor.buffers().index(), 0);
    assert_eq!(editor.view(), "hello");

    assert_eq!(chord(&mut input, &mut editor, 'r'), Effect::None);
    assert!(editor.prompt().is_some());
    assert_eq!(editor.buffers().len(), 2);

    editor.choose(Choice::Discard);
    assert_eq!(editor.buffers().len(), 1);
    assert_eq!(editor.current().id, second);
    assert_eq!(editor.view(), "");
}

#[test]
fn jump_past_the_end_is_ignored() {
    let mut input = InputHandler::new();
    let mut editor = Editor::new(String::new());
    chord(&mut input, &mut editor, 'n');
    type_text(&mut editor, "two");

    chord(&mut input, &mut editor, '9');

    assert_eq!(editor.buffers().index(), 1);
    assert_eq!(editor.view(), "two");
}

#[test]
fn open_and_save_shortcuts_ask_for_paths() {
    let mut input = InputHandler::new();
    let mut editor = Editor::new(String::new());
    let id = editor.current().id;

    assert_eq!(chord(&mut input, &mut editor, 'o'), Effect::PickOpenPath(id));
    editor.open_path_picked(id, None);

    assert_eq!(chord(&mut input, &mut editor, 's'), Effect::PickSavePath(id));
}

#[test]
fn letters_without_control_do_nothing() {
    let mut input = InputHandler::new();
    assert_eq!(input.handle(KeyEvent::Pressed(Key::Character('n'))), None);

    input.handle(KeyEvent::Pressed(Key::Control));
    assert_eq!(
        input.handle(KeyEvent::Pressed(Key::Character('n'))),
        Some(Command::NewBuffer)
    );
}
