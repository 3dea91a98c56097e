use serde::Deserialize;

/// One element of the `/company-news` JSON array.
///
/// Every field is optional on the wire; conversion to the public model
/// decides what to do with incomplete records.
#[derive(Deserialize)]
pub(crate) struct CompanyNewsItem {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) id: Option<i64>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) datetime: Option<i64>,
    #[serde(default)]
    pub(crate) headline: Option<String>,
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) summary: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
}
