//! Go function header builder.

/// Header of a Go function or method.
///
/// Parameters and results are taken as written (`"id int64"`, `"string"`),
/// so any Go syntax the caller needs can be expressed.
#[derive(Debug, Clone, Default)]
pub struct Func {
    receiver: Option<String>,
    name: String,
    params: Vec<String>,
    output: Option<String>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Make this a method on `receiver` (e.g. `"u *User"`).
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Add several parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Set the result list, written inside parentheses.
    pub fn returns(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// The opening line, including the trailing `{`.
    pub fn header(&self) -> String {
        let receiver = match self.receiver.as_deref() {
            Some(r) if !r.is_empty() => format!("({}) ", r),
            _ => String::new(),
        };
        let output = match self.output.as_deref() {
            Some(o) if !o.is_empty() => format!("({}) ", o),
            _ => String::new(),
        };

        format!(
            "func {}{}({}) {}{{",
            receiver,
            self.name,
            self.params.join(", "),
            output
        )
    }
}
