use serde::{Deserialize, Deserializer, Serialize};

/// Title of the document group that holds the downloadable tender documentation.
pub const TENDER_DOCUMENTATION_TITLE: &str = "Тендерна документація";

/// A procurement tender as returned by the backend tender API.
///
/// Field names follow the PascalCase JSON emitted by the backend. Everything
/// except the identifier is optional: tenders imported from the public
/// registry are frequently incomplete, and the UI renders whatever is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tender {
    pub tender_id: u64,
    #[serde(default)]
    pub prozorro_number: Option<String>,
    #[serde(default)]
    pub link_to_tender: Option<String>,
    /// Publication timestamp, RFC 3339 or a naive ISO date-time.
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub organizer: Option<Organizer>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub participation_cost: Option<f64>,
    #[serde(default)]
    pub minimal_step_amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub important_dates: Option<ImportantDates>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<DocumentGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nomenclatures: Vec<Nomenclature>,
    /// Free-text note attached by the user, seeds the comment widget.
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organizer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact_person: Option<ContactPerson>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Budget figures, already rendered into display strings by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Budget {
    #[serde(default)]
    pub amount_title: Option<String>,
    #[serde(default)]
    pub vat_title: Option<String>,
}

/// Key dates of the tender lifecycle, kept as the strings the registry publishes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportantDates {
    #[serde(default)]
    pub enquiry_period_start: Option<String>,
    #[serde(default)]
    pub enquiry_period_end: Option<String>,
    #[serde(default)]
    pub tendering_period_start: Option<String>,
    #[serde(default)]
    pub tendering_period_end: Option<String>,
    #[serde(default)]
    pub auction_start: Option<String>,
}

/// A titled group of documents attached to a tender.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A purchased item line of the tender.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Nomenclature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Reads an explicit JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Tender {
    /// Returns the first document of the "tender documentation" group.
    ///
    /// `None` when no group carries that title, when the first such group is
    /// empty, or when its first document has no identifier.
    pub fn documentation(&self) -> Option<&Document> {
        self.documents
            .iter()
            .find(|group| group.title == TENDER_DOCUMENTATION_TITLE)
            .and_then(|group| group.documents.first())
            .filter(|document| !document.id.is_empty())
    }

    /// The stored comment, or an empty string when the tender has none.
    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }
}
