use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Key under which the browser keeps the registered profile.
pub const PROFILE_STORAGE_KEY: &str = "currentUser";

/// Points granted to every newly registered neighbor.
pub const WELCOME_BONUS_POINTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    Offer,
    Need,
}

impl ExchangeType {
    pub fn opposite(self) -> Self {
        match self {
            Self::Offer => Self::Need,
            Self::Need => Self::Offer,
        }
    }
}

/// A posted offer or need for a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub id: u64,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub kind: ExchangeType,
    pub skill: String,
    pub description: String,
    pub location: String,
    pub points: u32,
}

/// Skill categories, in the order the keyword fallback checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "gardening")]
    Gardening,
    #[serde(rename = "cooking")]
    Cooking,
    #[serde(rename = "repairs")]
    Repairs,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "technology")]
    Technology,
    #[serde(rename = "moving")]
    Moving,
    #[serde(rename = "pet care")]
    PetCare,
    #[serde(rename = "art")]
    Art,
    #[serde(rename = "music")]
    Music,
    #[serde(rename = "general")]
    General,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Gardening,
        Category::Cooking,
        Category::Repairs,
        Category::Education,
        Category::Technology,
        Category::Moving,
        Category::PetCare,
        Category::Art,
        Category::Music,
        Category::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gardening => "gardening",
            Self::Cooking => "cooking",
            Self::Repairs => "repairs",
            Self::Education => "education",
            Self::Technology => "technology",
            Self::Moving => "moving",
            Self::PetCare => "pet care",
            Self::Art => "art",
            Self::Music => "music",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile created at registration. The server hands it to the client and
/// never sees it again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub address: String,
    pub skill: String,
    pub ai_category: String,
    pub points: u32,
    pub join_date: NaiveDate,
    pub exchanges_completed: u32,
    pub neighbors_connected: u32,
}

impl UserProfile {
    pub fn new(
        name: String,
        address: String,
        skill: String,
        ai_category: String,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            name,
            address,
            skill,
            ai_category,
            points: WELCOME_BONUS_POINTS,
            join_date,
            exchanges_completed: 0,
            neighbors_connected: 0,
        }
    }
}
