//! Repository for the single-row `website_content` table.

use sqlx::PgPool;
use wedsite_core::site_content::SiteContentFields;

use crate::models::site_content::{SiteContent, SiteContentRow};

const COLUMNS: &str = "\
    hero_title, hero_subtitle, wedding_date, wedding_time, venue_name, \
    venue_address, venue_coordinates, couple_story, gift_account_name, \
    gift_account_number, gift_bank_name, updated_at";

pub struct SiteContentRepo;

impl SiteContentRepo {
    /// The saved content, or `None` if it was never saved.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM website_content WHERE id = 1");
        let row = sqlx::query_as::<_, SiteContentRow>(&query)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(SiteContent::from))
    }

    /// Insert or overwrite the content row.
    pub async fn upsert(pool: &PgPool, fields: &SiteContentFields) -> Result<SiteContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO website_content \
                (id, hero_title, hero_subtitle, wedding_date, wedding_time, venue_name, \
                 venue_address, venue_coordinates, couple_story, gift_account_name, \
                 gift_account_number, gift_bank_name) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (id) DO UPDATE SET \
                hero_title = EXCLUDED.hero_title, \
                hero_subtitle = EXCLUDED.hero_subtitle, \
                wedding_date = EXCLUDED.wedding_date, \
                wedding_time = EXCLUDED.wedding_time, \
                venue_name = EXCLUDED.venue_name, \
                venue_address = EXCLUDED.venue_address, \
                venue_coordinates = EXCLUDED.venue_coordinates, \
                couple_story = EXCLUDED.couple_story, \
                gift_account_name = EXCLUDED.gift_account_name, \
                gift_account_number = EXCLUDED.gift_account_number, \
                gift_bank_name = EXCLUDED.gift_bank_name, \
                updated_at = now() \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SiteContentRow>(&query)
            .bind(&fields.hero_title)
            .bind(&fields.hero_subtitle)
            .bind(&fields.wedding_date)
            .bind(&fields.wedding_time)
            .bind(&fields.venue_name)
            .bind(&fields.venue_address)
            .bind(&fields.venue_coordinates)
            .bind(&fields.couple_story)
            .bind(&fields.gift_account_name)
            .bind(&fields.gift_account_number)
            .bind(&fields.gift_bank_name)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
