// ============================================================================
// TRAIL MODELS - GraphQL types for trail details, search and reviews
// ============================================================================

use serde::Deserialize;

/// Full trail record returned by `trailDetails`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrailDetail {
    // GraphQL ID, serialized as a string by the backend
    pub id: String,
    pub name: String,
    pub prop: String,
    pub city: String,
    pub state: String,
    pub description: String,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    #[serde(rename = "altitudeChange")]
    pub altitude_change: i32,
    pub distance: f64,
    pub fee: f64,
    pub image: String,
    #[serde(rename = "suggestedEquipment", default)]
    pub suggested_equipment: Vec<SuggestedEquipment>,
    #[serde(default)]
    pub tags: Vec<TrailTag>,
    // Aggregates over hikes, null until the trail has rated hikes
    #[serde(rename = "avgDifficulty")]
    pub avg_difficulty: Option<f64>,
    #[serde(rename = "avgEnjoyability")]
    pub avg_enjoyability: Option<f64>,
}

/// Search hit from the `trails(search:)` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrailSummary {
    pub id: String,
    pub name: String,
    pub prop: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrailTag {
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestedEquipment {
    #[serde(rename = "equipmentTypeID")]
    pub equipment_type: EquipmentType,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EquipmentType {
    #[serde(rename = "equType")]
    pub equ_type: String,
}

/// Review row from `expertReviews` (top reviewers by total distance).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpertReview {
    pub hiker: HikerInfo,
    pub review: String,
    pub difficulty: i32,
    pub enjoyability: i32,
    pub date: String,
}

/// Row from `recentHikers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentHiker {
    pub hiker: HikerInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HikerInfo {
    pub id: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    pub username: String,
}

impl TrailDetail {
    /// "OPEN" / "CLOSED" badge text.
    pub fn open_label(&self) -> &'static str {
        if self.is_open {
            "OPEN"
        } else {
            "CLOSED"
        }
    }

    /// "FREE" or the formatted dollar amount.
    pub fn fee_label(&self) -> String {
        if self.fee == 0.0 {
            "FREE".to_string()
        } else {
            format!("${:.2}", self.fee)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_detail_deserializes_graphql_field_names() {
        let json = r#"{
            "id": "3",
            "name": "Overlook Loop",
            "prop": "Catskill Park",
            "city": "Woodstock",
            "state": "NY",
            "description": "Steady climb to the escarpment.",
            "isOpen": true,
            "altitudeChange": 1400,
            "distance": 4.6,
            "fee": 0.0,
            "image": "overlook.jpg",
            "suggestedEquipment": [{"equipmentTypeID": {"equType": "Water"}}],
            "tags": [{"tag": "views"}],
            "avgDifficulty": 3.2,
            "avgEnjoyability": null
        }"#;

        let trail: TrailDetail = serde_json::from_str(json).unwrap();
        assert!(trail.is_open);
        assert_eq!(trail.altitude_change, 1400);
        assert_eq!(trail.suggested_equipment[0].equipment_type.equ_type, "Water");
        assert_eq!(trail.avg_difficulty, Some(3.2));
        assert_eq!(trail.avg_enjoyability, None);
    }

    #[test]
    fn fee_label_formats_free_and_paid() {
        let json = r#"{
            "id": "1", "name": "A", "prop": "B", "city": "C", "state": "NY",
            "description": "", "isOpen": false, "altitudeChange": 0,
            "distance": 1.0, "fee": 2.5, "image": "a.jpg",
            "avgDifficulty": null, "avgEnjoyability": null
        }"#;
        let mut trail: TrailDetail = serde_json::from_str(json).unwrap();
        assert_eq!(trail.fee_label(), "$2.50");
        assert_eq!(trail.open_label(), "CLOSED");

        trail.fee = 0.0;
        assert_eq!(trail.fee_label(), "FREE");
    }
}
