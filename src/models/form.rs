use reqwest::Url;

/// One named field of the generation form. The default value is what
/// `reset` restores.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub default: String,
}

/// Ordered field/value pairs captured from the generation form.
///
/// Entries keep insertion order and multiple values under the same name stay
/// as separate entries — the query string the service sees is exactly what
/// the form holds, order-preserved and never deduplicated. No validation is
/// performed here; values go out as-is.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: Vec<FormField>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field whose default (and initial) value is `default`.
    pub fn field(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        let name = name.into();
        let default = default.into();
        self.fields.push(FormField {
            name,
            value: default.clone(),
            default,
        });
        self
    }

    /// The form the generation page defines: a prompt plus the sampler
    /// parameters with the page's default values.
    pub fn stable_diffusion() -> Self {
        Self::new()
            .field("prompt", "")
            .field("width", "1024")
            .field("height", "1024")
            .field("num_inference_steps", "30")
            .field("guidance_scale", "8.0")
    }

    /// Overwrites the current value of the first field named `name`.
    /// Unknown names are ignored, as typing into a nonexistent input would be.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
        }
    }

    /// Appends an additional entry under `name`, keeping any existing ones.
    /// Its default is empty, so `reset` clears it rather than restoring it.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
            default: String::new(),
        });
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|f| (f.name.as_str(), f.value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Restores every field to its default value.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default.clone();
        }
    }

    /// Appends every entry to `url`'s query string, percent-encoded, in
    /// insertion order.
    pub fn apply_query(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in self.entries() {
            pairs.append_pair(name, value);
        }
    }
}
