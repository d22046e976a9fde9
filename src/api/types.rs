use serde::Deserialize;

/// One character record as returned by the API.
///
/// Only the fields the browser displays or filters on are decoded; anything
/// else in the record is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    /// Free text. Observed values are "Alive", "Dead" and "unknown".
    pub status: String,
    /// Free text. Observed values are "Male", "Female", "Genderless" and "unknown".
    pub gender: String,
    pub image: ImageSource,
}

/// Where a character portrait can be loaded from.
///
/// The API sends a plain URL string. Bundled fixtures may instead carry a
/// pre-resolved descriptor with its own `src`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Url(String),
    Local {
        src: String,
        #[serde(default)]
        width: Option<u32>,
        #[serde(default)]
        height: Option<u32>,
    },
}

impl ImageSource {
    /// The displayable image source, whichever form it arrived in.
    pub fn src(&self) -> &str {
        match self {
            ImageSource::Url(url) => url,
            ImageSource::Local { src, .. } => src,
        }
    }
}

/// Top-level response body. Pagination info and other metadata are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    results: Option<Vec<Character>>,
}

impl Envelope {
    /// Decode a response body into the entity list.
    ///
    /// A `null` body is treated like an envelope without `results`.
    pub fn decode(body: &[u8]) -> Result<Vec<Character>, serde_json::Error> {
        let envelope: Option<Envelope> = serde_json::from_slice(body)?;
        Ok(envelope.map(Envelope::into_results).unwrap_or_default())
    }

    /// The entity list; a missing or null `results` is an empty list.
    pub fn into_results(self) -> Vec<Character> {
        self.results.unwrap_or_default()
    }
}
