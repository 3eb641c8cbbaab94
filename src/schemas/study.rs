use serde::{Deserialize, Serialize};

/// One study entry as returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub id: String,
    pub title: String,
    pub organism: String,
    pub mission: String,
    pub assay_type: String,
    pub principal_investigator: String,
    #[serde(rename = "osdr_url")]
    pub source_url: String,
}

/// Aggregate counts and tag sets computed by the backend for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Expected to equal the record count; the service is trusted on this.
    pub total_studies: u64,
    pub top_organism: String,
    pub missions: Vec<String>,
    #[serde(rename = "assays")]
    pub assay_types: Vec<String>,
}

/// The full envelope of one successful search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub ai_summary: String,
    pub statistics: SearchStatistics,
    #[serde(rename = "study_cards")]
    pub records: Vec<StudyRecord>,
}

impl SearchResponse {
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Request body posted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mouse_envelope() -> serde_json::Value {
        json!({
            "query": "mouse microgravity ISS",
            "ai_summary": "Mice exposed to microgravity show reduced bone density.",
            "statistics": {
                "total_studies": 2,
                "top_organism": "Mus musculus",
                "missions": ["ISS Expedition 45"],
                "assays": ["RNA-seq"]
            },
            "study_cards": [{
                "id": "OSD-1",
                "title": "Bone density in microgravity",
                "organism": "Mus musculus",
                "mission": "ISS Expedition 45",
                "assay_type": "RNA-seq",
                "principal_investigator": "J. Smith",
                "osdr_url": "https://osdr.nasa.gov/bio/repo/data/studies/OSD-1"
            }]
        })
    }

    #[test]
    fn test_envelope_maps_wire_names() {
        let response: SearchResponse = serde_json::from_value(mouse_envelope()).unwrap();

        assert_eq!(response.query, "mouse microgravity ISS");
        assert_eq!(response.statistics.total_studies, 2);
        assert_eq!(response.statistics.assay_types, vec!["RNA-seq"]);
        assert_eq!(response.records.len(), 1);
        assert_eq!(
            response.records[0].source_url,
            "https://osdr.nasa.gov/bio/repo/data/studies/OSD-1"
        );
        assert_eq!(response.records[0].principal_investigator, "J. Smith");
    }

    #[test]
    fn test_envelope_serializes_back_to_wire_names() {
        let response: SearchResponse = serde_json::from_value(mouse_envelope()).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, mouse_envelope());
    }

    #[test]
    fn test_total_is_not_checked_against_records() {
        // The example envelope reports 2 studies but carries one card.
        let response: SearchResponse = serde_json::from_value(mouse_envelope()).unwrap();
        assert_ne!(response.statistics.total_studies as usize, response.records.len());
        assert!(response.has_records());
    }

    #[test]
    fn test_missing_study_cards_is_an_error() {
        let mut value = mouse_envelope();
        value.as_object_mut().unwrap().remove("study_cards");

        assert!(serde_json::from_value::<SearchResponse>(value).is_err());
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let mut value = mouse_envelope();
        value["statistics"]["total_studies"] = json!(-1);

        assert!(serde_json::from_value::<SearchResponse>(value).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&SearchRequest {
            query: "tissue samples spaceflight".to_string(),
        })
        .unwrap();

        assert_eq!(body, r#"{"query":"tissue samples spaceflight"}"#);
    }
}
