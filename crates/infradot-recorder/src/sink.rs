//! The text sink abstraction.

/// A sink for rendered document text.
///
/// Writes never fail: sinks buffer in memory and report IO problems when
/// the document is closed.
pub trait Recorder {
    /// Append raw text.
    fn write(&mut self, text: &str);

    /// Append text followed by a newline.
    fn writeline(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    /// Append a double-quoted, escaped label.
    fn write_label(&mut self, label: &str) {
        self.write("\"");
        self.write(&escape_label(label));
        self.write("\"");
    }
}

impl Recorder for String {
    fn write(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Something a document is rendered for, such as a VPC or a load balancer.
pub trait Target {
    /// Identity used to name the output document.
    fn identity(&self) -> &str;
}

impl Target for str {
    fn identity(&self) -> &str {
        self
    }
}

impl Target for String {
    fn identity(&self) -> &str {
        self
    }
}

impl<T: Target + ?Sized> Target for &T {
    fn identity(&self) -> &str {
        (**self).identity()
    }
}

/// Escape special characters for DOT quoted strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write two spaces per indentation level.
pub fn write_indent(out: &mut dyn Recorder, level: usize) {
    for _ in 0..level {
        out.write("  ");
    }
}
