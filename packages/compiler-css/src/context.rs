/// Output buffer with indentation tracking
pub(crate) struct Context {
    depth: usize,
    buffer: String,
}

impl Context {
    pub(crate) fn new() -> Self {
        Self {
            depth: 0,
            buffer: String::new(),
        }
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub(crate) fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Open `selector {` and indent
    pub(crate) fn open_block(&mut self, selector: &str) {
        self.add_line(&format!("{} {{", selector));
        self.depth += 1;
    }

    pub(crate) fn close_block(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
        self.add_line("}");
    }

    pub(crate) fn declaration(&mut self, property: &str, value: &str) {
        self.add_line(&format!("{}: {};", property, value));
    }

    pub(crate) fn get_output(self) -> String {
        self.buffer
    }
}
