use serde::{Deserialize, Serialize};

/// Chamber classification of a federal legislator.
/// Orders Senate before House so sorted result lists show senators first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chamber {
    Senate,
    House,
}

impl Chamber {
    pub fn title(&self) -> &'static str {
        match self {
            Chamber::Senate => "Senator",
            Chamber::House => "Representative",
        }
    }
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chamber::Senate => write!(f, "US Senate"),
            Chamber::House => write!(f, "US House"),
        }
    }
}

/// A representative's local (non-capital) office with its own phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOffice {
    pub phone: String,
    pub city: String,
}

/// Canonical representative record produced by the resolver.
///
/// Both upstream lookup shapes map into this type; fields a source
/// does not supply stay `None`. A record always carries a name, but
/// contact channels are best-effort - callers fall back to the
/// member's website when nothing better is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    pub id: Option<String>,
    pub name: String,
    pub chamber: Chamber,
    pub party: Option<String>,
    pub state: String,
    /// District number for House seats, when the source reports one.
    pub district: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub contact_form_url: Option<String>,
    pub photo_url: Option<String>,
    /// Why the lookup matched this seat to the queried location.
    pub reason: Option<String>,
    pub office: Option<String>,
    pub field_offices: Vec<FieldOffice>,
}

impl Representative {
    /// Office label, e.g. "Senator, VT" or "Representative, CA-12".
    pub fn office_label(&self) -> String {
        match (self.chamber, self.district.as_deref()) {
            (Chamber::House, Some(district)) => {
                format!("{}, {}-{}", self.chamber.title(), self.state, district)
            }
            _ => format!("{}, {}", self.chamber.title(), self.state),
        }
    }

    /// Preferred contact link: the contact form when known, otherwise
    /// the member's website.
    pub fn contact_url(&self) -> Option<&str> {
        self.contact_form_url.as_deref().or(self.url.as_deref())
    }
}

/// Outcome of a ZIP lookup. Failure paths populate `error` with a
/// user-facing message instead of raising - no lookup outcome is fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepresentativesResult {
    pub representatives: Vec<Representative>,
    pub location: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub low_accuracy: bool,
    pub error: Option<String>,
}

impl RepresentativesResult {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}
