use serde::{Serialize, Serializer};

/// One job listing extracted from a search-result card.
///
/// Every field is best-effort: `None` means the card had no matching
/// markup. Field order is the CSV column order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobRecord {
    pub job_title: Option<String>,
    pub job_url: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub rating: Option<Rating>,
    pub reviews: Option<Reviews>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub posted: Option<String>,
}

impl JobRecord {
    /// Key used to collapse duplicate listings: URL when present, else
    /// title. Records with neither are dropped before dedup.
    pub fn identity_key(&self) -> Option<&str> {
        self.job_url.as_deref().or(self.job_title.as_deref())
    }
}

/// Company rating badge: a number when the badge text parses as one,
/// the raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
    Score(f64),
    Text(String),
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f64(*score),
            Rating::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Review count: the parsed integer when the digit run is clean, the
/// raw matched text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Reviews {
    Count(u64),
    Text(String),
}

impl Serialize for Reviews {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reviews::Count(count) => serializer.serialize_u64(*count),
            Reviews::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_prefers_url() {
        let record = JobRecord {
            job_title: Some("Data Scientist".to_string()),
            job_url: Some("https://x/job/1".to_string()),
            ..Default::default()
        };
        assert_eq!(record.identity_key(), Some("https://x/job/1"));
    }

    #[test]
    fn identity_key_falls_back_to_title() {
        let record = JobRecord {
            job_title: Some("Data Scientist".to_string()),
            ..Default::default()
        };
        assert_eq!(record.identity_key(), Some("Data Scientist"));
    }

    #[test]
    fn identity_key_absent_without_url_or_title() {
        assert_eq!(JobRecord::default().identity_key(), None);
    }
}
