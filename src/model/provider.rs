use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Stream,
    Buy,
    Rent,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchProvider {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProviderKind,
    pub link: String,
}
