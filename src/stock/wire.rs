use serde::Deserialize;

use super::model::{NewsItem, Officer};

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    #[serde(default)]
    pub(crate) news: Vec<NewsItem>,
}

#[derive(Deserialize)]
pub(crate) struct OfficersEnvelope {
    #[serde(default)]
    pub(crate) officers: Vec<Officer>,
}
