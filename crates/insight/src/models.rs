use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayInfo {
    pub day_name: String,
    pub language: String,
    pub date: String,
}
