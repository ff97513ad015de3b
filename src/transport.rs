use std::fmt;

/// Transport family a service is published under.
///
/// Registry tags are free-form strings; they are normalized once when a record
/// is loaded. `"soap"` (any case) selects SOAP, anything else (including an
/// empty or missing tag) falls back to REST.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Transport {
    Rest,
    Soap,
}

impl Transport {
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("soap") {
            Transport::Soap
        } else {
            Transport::Rest
        }
    }

    /// Lowercase tag form (`rest` / `soap`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Rest => "rest",
            Transport::Soap => "soap",
        }
    }

    /// Section name used at the top level of the catalog file.
    pub fn category_label(&self) -> &'static str {
        match self {
            Transport::Rest => "REST",
            Transport::Soap => "SOAP",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category_label())
    }
}
