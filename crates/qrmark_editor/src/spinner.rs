/// State behind an integer stepper widget: a clamped value plus the text the
/// widget currently displays.
///
/// Stepping and programmatic writes keep the display numeric and in range.
/// Raw widget text is accepted as-is, so a malformed host state can leave a
/// non-numeric display behind; committing parses the display, not the
/// last-good value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerField {
    value: i32,
    minimum: i32,
    maximum: i32,
    single_step: i32,
    display: String,
}

impl SpinnerField {
    pub fn new(minimum: i32, maximum: i32, value: i32) -> Self {
        let value = value.clamp(minimum, maximum);
        Self {
            value,
            minimum,
            maximum,
            single_step: 1,
            display: value.to_string(),
        }
    }

    pub fn with_single_step(mut self, step: i32) -> Self {
        self.single_step = step.max(1);
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// The text the widget currently shows.
    pub fn text(&self) -> &str {
        &self.display
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.minimum, self.maximum);
        self.display = self.value.to_string();
    }

    pub fn increment(&mut self) {
        self.set_value(self.value.saturating_add(self.single_step));
    }

    pub fn decrement(&mut self) {
        self.set_value(self.value.saturating_sub(self.single_step));
    }

    /// Accepts the widget's raw edit text. Parseable input is clamped and the
    /// display normalized; anything else is kept verbatim for commit to
    /// reject.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        match text.trim().parse::<i32>() {
            Ok(value) => self.set_value(value),
            Err(_) => self.display = text,
        }
    }
}
