use serde::Deserialize;

use crate::error::SinkError;
use crate::supabase::{SupabaseClient, TESTIMONIALS_TABLE};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub starting_score: i32,
    pub ending_score: i32,
    pub timeframe_months: u32,
    pub testimonial_text: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Testimonial {
    pub fn point_gain(&self) -> i32 {
        self.ending_score - self.starting_score
    }

    /// Blank locations are treated as missing.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.trim().is_empty())
    }
}

/// Splits into (featured, regular), keeping display order within each group.
pub fn split_featured(testimonials: Vec<Testimonial>) -> (Vec<Testimonial>, Vec<Testimonial>) {
    testimonials.into_iter().partition(|t| t.is_featured)
}

pub async fn fetch_testimonials(client: &SupabaseClient) -> Result<Vec<Testimonial>, SinkError> {
    client
        .select_ordered(TESTIMONIALS_TABLE, "display_order", true)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &str = r#"[
        {"id": "6f1c", "client_name": "Marcus T.", "starting_score": 512, "ending_score": 698,
         "timeframe_months": 8, "testimonial_text": "They removed three collections.",
         "location": "Mississauga, ON", "is_featured": true, "display_order": 1},
        {"id": "a2d4", "client_name": "Priya S.", "starting_score": 580, "ending_score": 702,
         "timeframe_months": 6, "testimonial_text": "Approved for my first mortgage.",
         "location": "", "is_featured": false, "display_order": 2},
        {"id": "c9e0", "client_name": "Daniel R.", "starting_score": 455, "ending_score": 640,
         "timeframe_months": 11, "testimonial_text": "Rebuilt after a consumer proposal.",
         "location": null, "is_featured": true, "display_order": 3}
    ]"#;

    fn rows() -> Vec<Testimonial> {
        serde_json::from_str(ROWS).unwrap()
    }

    #[test]
    fn rows_decode_ignoring_extra_columns() {
        let rows = rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].client_name, "Marcus T.");
        assert_eq!(rows[0].point_gain(), 186);
    }

    #[test]
    fn featured_split_keeps_display_order() {
        let (featured, regular) = split_featured(rows());
        let featured: Vec<_> = featured.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(featured, ["6f1c", "c9e0"]);
        assert_eq!(regular.len(), 1);
        assert_eq!(regular[0].id, "a2d4");
    }

    #[test]
    fn blank_and_null_locations_are_hidden() {
        let rows = rows();
        assert_eq!(rows[0].location(), Some("Mississauga, ON"));
        assert_eq!(rows[1].location(), None);
        assert_eq!(rows[2].location(), None);
    }
}
