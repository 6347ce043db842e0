//! The single `website_content` row.

use serde::Serialize;
use sqlx::FromRow;
use wedsite_core::site_content::SiteContentFields;
use wedsite_core::types::Timestamp;

/// Raw row from `website_content`.
#[derive(Debug, Clone, FromRow)]
pub struct SiteContentRow {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub wedding_date: String,
    pub wedding_time: String,
    pub venue_name: String,
    pub venue_address: String,
    pub venue_coordinates: String,
    pub couple_story: String,
    pub gift_account_name: String,
    pub gift_account_number: String,
    pub gift_bank_name: String,
    pub updated_at: Timestamp,
}

/// Landing-page content as served to clients.
///
/// `updated_at` is `None` when nothing has been saved and defaults are shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteContent {
    #[serde(flatten)]
    pub fields: SiteContentFields,
    pub updated_at: Option<Timestamp>,
}

impl SiteContent {
    pub fn defaults() -> Self {
        Self {
            fields: SiteContentFields::default(),
            updated_at: None,
        }
    }
}

impl From<SiteContentRow> for SiteContent {
    fn from(row: SiteContentRow) -> Self {
        Self {
            fields: SiteContentFields {
                hero_title: row.hero_title,
                hero_subtitle: row.hero_subtitle,
                wedding_date: row.wedding_date,
                wedding_time: row.wedding_time,
                venue_name: row.venue_name,
                venue_address: row.venue_address,
                venue_coordinates: row.venue_coordinates,
                couple_story: row.couple_story,
                gift_account_name: row.gift_account_name,
                gift_account_number: row.gift_account_number,
                gift_bank_name: row.gift_bank_name,
            },
            updated_at: Some(row.updated_at),
        }
    }
}
