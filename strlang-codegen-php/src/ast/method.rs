//! PHP method header builder.

/// Header of a class method (or a free function when no modifiers are set).
#[derive(Debug, Clone, Default)]
pub struct Method {
    modifiers: Vec<String>,
    name: String,
    params: Vec<String>,
    output: Option<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a modifier such as `public`, `static` or `final`.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Add a parameter, written as-is (e.g. `"int $id"`).
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Set the return type.
    pub fn returns(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// The opening line, including the trailing `{`.
    pub fn header(&self) -> String {
        let mut header = String::new();
        for modifier in self.modifiers.iter().filter(|m| !m.is_empty()) {
            header.push_str(modifier);
            header.push(' ');
        }
        header.push_str(&format!("function {}({})", self.name, self.params.join(", ")));
        if let Some(output) = self.output.as_deref().filter(|o| !o.is_empty()) {
            header.push_str(": ");
            header.push_str(output);
        }
        header.push_str(" {");
        header
    }
}
