use serde::{Deserialize, Deserializer};

use super::repo_types::SkillPatch;

/// Body of `POST /skills`. Any `userId` sent by the client is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub location: Option<String>,
}

/// Body of `PATCH /skills/:id`. Omitted fields keep their value, `null` clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price_per_hour: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub location: Option<Option<String>>,
}

/// Only runs for keys present in the body, so `null` becomes `Some(None)`.
fn present<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

impl From<UpdateSkillRequest> for SkillPatch {
    fn from(r: UpdateSkillRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            price_per_hour: r.price_per_hour,
            location: r.location,
        }
    }
}
