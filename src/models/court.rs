use serde::{Deserialize, Serialize};

/// Per-time-band price table (GTQ).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    /// 06:00
    #[serde(rename = "sixAM")]
    pub six_am: f64,
    /// 07:00 - 15:00
    pub seven_to_fifteen: f64,
    /// 16:00 - 21:00
    pub sixteen_to_twenty_one: f64,
    /// 22:00
    pub twenty_two: f64,
    /// 23:00
    pub twenty_three: f64,
}

impl Pricing {
    /// Price of a one-hour slot starting at `hour`, `None` outside opening hours.
    pub fn price_for_hour(&self, hour: u32) -> Option<f64> {
        match hour {
            6 => Some(self.six_am),
            7..=15 => Some(self.seven_to_fifteen),
            16..=21 => Some(self.sixteen_to_twenty_one),
            22 => Some(self.twenty_two),
            23 => Some(self.twenty_three),
            _ => None,
        }
    }

    /// (label, price) pairs in band order, for display.
    pub fn bands(&self) -> [(&'static str, f64); 5] {
        [
            ("6:00", self.six_am),
            ("7:00 - 15:00", self.seven_to_fifteen),
            ("16:00 - 21:00", self.sixteen_to_twenty_one),
            ("22:00", self.twenty_two),
            ("23:00", self.twenty_three),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
}

impl Court {
    pub fn pricing_or_default(&self) -> Pricing {
        self.pricing.unwrap_or_default()
    }
}

/// Body for `POST /courts` and `PUT /courts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_original: Option<bool>,
}
