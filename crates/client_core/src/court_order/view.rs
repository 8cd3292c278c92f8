/// Front-end agnostic description of one rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    TextInput { value: String, messages: Vec<String> },
    DateInput { value: String, messages: Vec<String> },
    TextArea { value: String, messages: Vec<String> },
    Display { text: String },
}

impl RenderedElement {
    pub fn is_editable(&self) -> bool {
        !matches!(self.kind, ElementKind::Display { .. })
    }

    /// Input value for editable controls, the shown text for displays.
    pub fn text(&self) -> &str {
        match &self.kind {
            ElementKind::TextInput { value, .. }
            | ElementKind::DateInput { value, .. }
            | ElementKind::TextArea { value, .. } => value,
            ElementKind::Display { text } => text,
        }
    }

    pub fn messages(&self) -> &[String] {
        match &self.kind {
            ElementKind::TextInput { messages, .. }
            | ElementKind::DateInput { messages, .. }
            | ElementKind::TextArea { messages, .. } => messages,
            ElementKind::Display { .. } => &[],
        }
    }
}
