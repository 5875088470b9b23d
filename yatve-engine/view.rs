/// The single visible text widget the editor swaps buffers in and out of.
/// Toolkits provide an adapter; the engine only ever reads and replaces the
/// whole text.
pub trait TextView {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);
}

impl TextView for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
